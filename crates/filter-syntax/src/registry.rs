use crate::error::{Result, SyntaxError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub number: i32,
}

/// An enum type with its named values, e.g. `acme.v1.OwnerType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    pub full_name: String,
    pub values: Vec<EnumValue>,
}

impl EnumDescriptor {
    pub fn new(full_name: impl Into<String>) -> Self {
        EnumDescriptor {
            full_name: full_name.into(),
            values: Vec::new(),
        }
    }

    /// Appends a value numbered after the ones already present.
    pub fn with_value(mut self, name: impl Into<String>) -> Self {
        let number = self.values.len() as i32;
        self.values.push(EnumValue {
            name: name.into(),
            number,
        });
        self
    }

    pub fn value_by_name(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// Resolves fully-qualified type names to enum descriptors.
pub trait EnumLookup {
    fn find_enum_by_name(&self, full_name: &str) -> Option<&EnumDescriptor>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnumRegistry {
    enums: HashMap<String, EnumDescriptor>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `descriptor`. Registering an identical descriptor twice is a
    /// no-op; a different descriptor under the same name is rejected.
    pub fn register(&mut self, descriptor: EnumDescriptor) -> Result<()> {
        match self.enums.get(&descriptor.full_name) {
            Some(existing) if *existing == descriptor => Ok(()),
            Some(_) => Err(SyntaxError::ConflictingEnum(descriptor.full_name)),
            None => {
                self.enums.insert(descriptor.full_name.clone(), descriptor);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }
}

impl EnumLookup for EnumRegistry {
    fn find_enum_by_name(&self, full_name: &str) -> Option<&EnumDescriptor> {
        self.enums.get(full_name)
    }
}
