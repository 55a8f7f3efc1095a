use crate::{
    error::{Result, SyntaxError},
    registry::{EnumDescriptor, EnumLookup, EnumRegistry},
    types::Type,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Identifiers a filter may reference, with their declared types.
///
/// Enum identifiers also register their descriptor so the enum values can be
/// resolved later when a filter names them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Declarations {
    #[serde(default)]
    idents: HashMap<String, Type>,
    #[serde(default)]
    enums: EnumRegistry,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare_ident(&mut self, name: impl Into<String>, ty: Type) -> Result<()> {
        let name = name.into();
        if self.idents.contains_key(&name) {
            return Err(SyntaxError::DuplicateIdent(name));
        }
        debug!("Declared identifier '{}' as {:?}", name, ty);
        self.idents.insert(name, ty);
        Ok(())
    }

    /// Declares `name` as holding a value of the enum `descriptor`.
    pub fn declare_enum_ident(
        &mut self,
        name: impl Into<String>,
        descriptor: EnumDescriptor,
    ) -> Result<()> {
        let ty = Type::message(descriptor.full_name.clone());
        if let Some((value, first)) = self.shared_value(&descriptor) {
            return Err(SyntaxError::AmbiguousEnumValue {
                value,
                first,
                second: descriptor.full_name,
            });
        }
        self.enums.register(descriptor)?;
        self.declare_ident(name, ty)
    }

    /// Chaining form of [`Declarations::declare_ident`].
    pub fn with_ident(mut self, name: impl Into<String>, ty: Type) -> Result<Self> {
        self.declare_ident(name, ty)?;
        Ok(self)
    }

    /// Chaining form of [`Declarations::declare_enum_ident`].
    pub fn with_enum_ident(
        mut self,
        name: impl Into<String>,
        descriptor: EnumDescriptor,
    ) -> Result<Self> {
        self.declare_enum_ident(name, descriptor)?;
        Ok(self)
    }

    /// Type of a declared identifier. Enum value names resolve to their enum type.
    pub fn ident_type(&self, name: &str) -> Option<Type> {
        if let Some(ty) = self.idents.get(name) {
            return Some(ty.clone());
        }
        self.enum_type_of_value(name)
    }

    pub fn enums(&self) -> &EnumRegistry {
        &self.enums
    }

    /// Enum types referenced by declared identifiers, in name order.
    fn declared_enums(&self) -> BTreeSet<&str> {
        self.idents
            .values()
            .map(Type::message_type)
            .filter(|name| self.enums.find_enum_by_name(name).is_some())
            .collect()
    }

    fn enum_type_of_value(&self, value: &str) -> Option<Type> {
        self.declared_enums()
            .into_iter()
            .find(|full_name| {
                self.enums
                    .find_enum_by_name(full_name)
                    .is_some_and(|e| e.value_by_name(value).is_some())
            })
            .map(Type::message)
    }

    /// First value of `descriptor` already named by another declared enum.
    fn shared_value(&self, descriptor: &EnumDescriptor) -> Option<(String, String)> {
        let others: Vec<&EnumDescriptor> = self
            .declared_enums()
            .into_iter()
            .filter(|name| *name != descriptor.full_name)
            .filter_map(|name| self.enums.find_enum_by_name(name))
            .collect();

        descriptor.values.iter().find_map(|value| {
            others
                .iter()
                .find(|other| other.value_by_name(&value.name).is_some())
                .map(|other| (value.name.clone(), other.full_name.clone()))
        })
    }
}
