//! Input type registry shared across one schema-build pass

use async_graphql::dynamic::InputObject;
use indexmap::IndexMap;
use tracing::trace;

use crate::errors::SchemaError;
use crate::graphql::types::MutationFields;

/// Deduplicates derived input types across repeated derivation calls.
///
/// The registry is an explicit dependency of every construction call rather
/// than process-wide state; its lifetime is the application's schema-build
/// phase. Registering an identical (name, fields) pair again is a no-op, so
/// deriving the same mutation twice yields one registered type. The same name
/// with a different field set is a declaration conflict and fails the build.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    inputs: IndexMap<String, MutationFields>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a derived input type under `name`
    pub fn register(
        &mut self,
        name: impl Into<String>,
        fields: MutationFields,
    ) -> Result<(), SchemaError> {
        let name = name.into();
        match self.inputs.get(&name) {
            Some(existing) if *existing == fields => Ok(()),
            Some(_) => Err(SchemaError::TypeConflict(name)),
            None => {
                trace!("registering input type {}", name);
                self.inputs.insert(name, fields);
                Ok(())
            }
        }
    }

    /// Fields registered under `name`, if any
    pub fn get(&self, name: &str) -> Option<&MutationFields> {
        self.inputs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inputs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Emit every registered type as a dynamic schema input object
    pub fn input_objects(&self) -> Vec<InputObject> {
        self.inputs
            .iter()
            .map(|(name, fields)| {
                let mut input = InputObject::new(name);
                for (field_name, field_type) in fields {
                    input = input.field(field_type.input_value(field_name));
                }
                input
            })
            .collect()
    }
}
