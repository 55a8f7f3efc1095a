use crate::error::CliError;
use filter_syntax::{Declarations, EnumDescriptor, EnumRegistry, ExprBuilder, Filter, Type};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A checked filter together with the enums its identifiers refer to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterBundle {
    #[serde(default)]
    pub filter: Filter,
    #[serde(default)]
    pub enums: EnumRegistry,
}

impl FilterBundle {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let source = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&source)?)
    }

    /// `pipeline_id = "p1" AND start >= timestamp(..) AND status = OWNER_TYPE_USER`
    pub fn demo() -> Result<Self, CliError> {
        let owner_type = EnumDescriptor::new("OwnerType")
            .with_value("OWNER_TYPE_UNSPECIFIED")
            .with_value("OWNER_TYPE_USER")
            .with_value("OWNER_TYPE_ORGANIZATION");
        let decls = Declarations::new()
            .with_ident("start", Type::timestamp())?
            .with_ident("stop", Type::timestamp())?
            .with_ident("pipeline_id", Type::string())?
            .with_enum_ident("owner_type", owner_type)?;

        let b = ExprBuilder::new(&decls);
        let expr = b.and(
            b.and(
                b.eq(b.ident("pipeline_id"), b.string("p1")),
                b.ge(b.ident("start"), b.timestamp("2024-01-01T00:00:00Z")),
            ),
            b.eq(b.ident("owner_type"), b.ident("OWNER_TYPE_USER")),
        );

        Ok(FilterBundle {
            filter: b.finish_filter(expr),
            enums: decls.enums().clone(),
        })
    }
}
