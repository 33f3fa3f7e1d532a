use crate::errors::SchemaError;
use crate::model::descriptor::{FieldDescriptor, ModelDescriptor, ScalarKind};

/// Declarative builder producing a [`ModelDescriptor`] from an ordered field
/// list, the way an application (or a test) would mirror what its ORM
/// computed for a model.
///
/// An `id` primary-key field is injected at the front when none is declared.
#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    fields: Vec<(String, FieldDescriptor)>,
}

impl ModelBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append an arbitrary field descriptor
    pub fn field(mut self, name: impl Into<String>, field: FieldDescriptor) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    /// Non-null scalar field
    pub fn scalar(self, name: impl Into<String>, kind: ScalarKind) -> Self {
        self.field(
            name,
            FieldDescriptor::Scalar {
                kind,
                nullable: false,
            },
        )
    }

    /// Nullable scalar field
    pub fn nullable_scalar(self, name: impl Into<String>, kind: ScalarKind) -> Self {
        self.field(
            name,
            FieldDescriptor::Scalar {
                kind,
                nullable: true,
            },
        )
    }

    /// Required forward reference to one row of `target`
    pub fn belongs_to(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.field(
            name,
            FieldDescriptor::ForwardRelation {
                target: target.into(),
                nullable: false,
            },
        )
    }

    /// Optional forward reference to one row of `target`
    pub fn optional_belongs_to(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.field(
            name,
            FieldDescriptor::ForwardRelation {
                target: target.into(),
                nullable: true,
            },
        )
    }

    /// Back-reference collection created by `target`'s forward relation
    pub fn reverse_one_to_many(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.field(
            name,
            FieldDescriptor::ReverseRelationSingle {
                target: target.into(),
            },
        )
    }

    /// Many-to-many relation with `target`
    pub fn many_to_many(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.field(
            name,
            FieldDescriptor::ReverseRelationMulti {
                target: target.into(),
            },
        )
    }

    /// Validate the declaration and produce the descriptor
    pub fn build(self) -> Result<ModelDescriptor, SchemaError> {
        let mut fields = self.fields;
        if !fields.iter().any(|(name, _)| name == "id") {
            fields.insert(
                0,
                (
                    "id".to_string(),
                    FieldDescriptor::Scalar {
                        kind: ScalarKind::Id,
                        nullable: false,
                    },
                ),
            );
        }
        ModelDescriptor::new(self.name, fields)
    }
}
