use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;
use crate::model::builder::ModelBuilder;

/// Scalar vocabulary understood by the field conversion layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarKind {
    Id,
    String,
    Integer,
    Float,
    Boolean,
    DateTime,
    Json,
}

/// Shape of a single declared field on a model.
///
/// Relation variants carry the name of the related model. Nullability is only
/// meaningful on fields the owning model can set directly; reverse and
/// many-to-many fields are collections managed from elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldDescriptor {
    /// Plain column field
    Scalar { kind: ScalarKind, nullable: bool },
    /// Owns a reference to one row of the target model (holds the foreign key)
    ForwardRelation { target: String, nullable: bool },
    /// Back-reference created by another model's forward relation
    ReverseRelationSingle { target: String },
    /// Many-to-many relation, either direction
    ReverseRelationMulti { target: String },
}

impl FieldDescriptor {
    /// True for every non-scalar variant
    pub fn is_related(&self) -> bool {
        !matches!(self, FieldDescriptor::Scalar { .. })
    }

    /// True for forward references holding the foreign key
    pub fn is_forward(&self) -> bool {
        matches!(self, FieldDescriptor::ForwardRelation { .. })
    }

    /// True for many-to-many relations
    pub fn is_many_to_many(&self) -> bool {
        matches!(self, FieldDescriptor::ReverseRelationMulti { .. })
    }
}

/// Read-only description of a model's declared fields, in declaration order.
///
/// Instances are produced once by the model layer (see [`ModelBuilder`]) and
/// only ever read afterwards; classification never mutates or caches them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    name: String,
    fields: Vec<(String, FieldDescriptor)>,
}

impl ModelDescriptor {
    /// Validate and create a descriptor from an ordered field list.
    ///
    /// Fails when the model name is empty or a field name repeats.
    pub fn new(
        name: impl Into<String>,
        fields: Vec<(String, FieldDescriptor)>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SchemaError::EmptyModelName);
        }
        let mut seen = BTreeSet::new();
        for (field, _) in &fields {
            if !seen.insert(field.as_str()) {
                return Err(SchemaError::DuplicateField {
                    model: name,
                    field: field.clone(),
                });
            }
        }
        Ok(Self { name, fields })
    }

    /// Start a declarative builder for a model of the given name
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder::new(name)
    }

    /// Model name as declared
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields, in declaration order
    pub fn fields(&self) -> &[(String, FieldDescriptor)] {
        &self.fields
    }

    /// Look up a single field descriptor by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, descriptor)| descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_field_is_rejected() {
        let result = ModelDescriptor::new(
            "Order",
            vec![
                (
                    "name".to_string(),
                    FieldDescriptor::Scalar {
                        kind: ScalarKind::String,
                        nullable: false,
                    },
                ),
                (
                    "name".to_string(),
                    FieldDescriptor::Scalar {
                        kind: ScalarKind::String,
                        nullable: true,
                    },
                ),
            ],
        );
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateField { ref model, ref field })
                if model == "Order" && field == "name"
        ));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = ModelDescriptor::new("  ", vec![]);
        assert!(matches!(result, Err(SchemaError::EmptyModelName)));
    }

    #[test]
    fn test_field_lookup() {
        let model = ModelDescriptor::builder("Order")
            .scalar("reference", ScalarKind::String)
            .build()
            .unwrap();
        assert!(model.field("reference").is_some());
        assert!(model.field("missing").is_none());
    }
}
