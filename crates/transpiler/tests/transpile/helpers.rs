use filter_syntax::{Declarations, EnumDescriptor, Expr, ExprBuilder, Type};
use transpiler::{Result, transpile};

pub fn owner_type() -> EnumDescriptor {
    EnumDescriptor::new("OwnerType")
        .with_value("OWNER_TYPE_UNSPECIFIED")
        .with_value("OWNER_TYPE_USER")
        .with_value("OWNER_TYPE_ORGANIZATION")
}

pub fn declarations() -> Declarations {
    Declarations::new()
        .with_ident("start", Type::timestamp())
        .unwrap()
        .with_ident("stop", Type::timestamp())
        .unwrap()
        .with_ident("foo", Type::string())
        .unwrap()
        .with_ident("pipeline_id", Type::string())
        .unwrap()
        .with_ident("pipeline_uid", Type::string())
        .unwrap()
        .with_ident("labels", Type::list_of(Type::string()))
        .unwrap()
        .with_enum_ident("status", owner_type())
        .unwrap()
}

/// Builds a filter with `build` and transpiles it against `decls`.
pub fn transpile_with(
    decls: &Declarations,
    build: impl FnOnce(&ExprBuilder) -> Expr,
) -> Result<String> {
    let b = ExprBuilder::new(decls);
    let expr = build(&b);
    let filter = b.finish_filter(expr);
    transpile(&filter, decls.enums())
}
