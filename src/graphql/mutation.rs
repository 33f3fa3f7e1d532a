//! Mutation argument derivation from model descriptors
//!
//! Applications declare a mutation by pairing a model descriptor with the
//! GraphQL output type it returns; the argument schema is derived from the
//! model's fields instead of being written out by hand. Scalar fields pass
//! through the conversion table as-is. Relation fields never do: a forward
//! reference becomes an `<name>_id` identifier argument and a many-to-many
//! relation becomes a list of identifiers, while the reverse side of a
//! one-to-many cannot be set from this model's mutation and produces nothing.

use async_graphql::dynamic::InputObject;
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::SchemaError;
use crate::graphql::registry::TypeRegistry;
use crate::graphql::types::{InputFieldType, MutationFields};
use crate::model::{FieldDescriptor, FieldFilter, ModelDescriptor, ModelFields};

/// Verb a derived mutation performs on its model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationAction {
    Create,
    Update,
}

impl MutationAction {
    pub fn verb(self) -> &'static str {
        match self {
            MutationAction::Create => "create",
            MutationAction::Update => "update",
        }
    }
}

/// Derives one mutation's naming and argument schema from a model descriptor.
///
/// Requires the model and the name of the GraphQL output type ("node") the
/// mutation resolves to; both are checked up front so a misdeclared mutation
/// fails while the schema is being assembled.
#[derive(Clone, Debug)]
pub struct MutationSchema<'a> {
    action: MutationAction,
    model: &'a ModelDescriptor,
    node: &'a str,
}

impl<'a> MutationSchema<'a> {
    pub fn new(
        action: MutationAction,
        model: &'a ModelDescriptor,
        node: &'a str,
    ) -> Result<Self, SchemaError> {
        if node.trim().is_empty() {
            return Err(SchemaError::MissingNode(model.name().to_string()));
        }
        Ok(Self {
            action,
            model,
            node,
        })
    }

    /// Create-mutation schema for `model` resolving to `node`
    pub fn create(model: &'a ModelDescriptor, node: &'a str) -> Result<Self, SchemaError> {
        Self::new(MutationAction::Create, model, node)
    }

    /// Update-mutation schema for `model` resolving to `node`
    pub fn update(model: &'a ModelDescriptor, node: &'a str) -> Result<Self, SchemaError> {
        Self::new(MutationAction::Update, model, node)
    }

    pub fn action(&self) -> MutationAction {
        self.action
    }

    pub fn model(&self) -> &'a ModelDescriptor {
        self.model
    }

    pub fn node(&self) -> &'a str {
        self.node
    }

    /// Mutation type name, e.g. `CreateOrder`
    pub fn type_name(&self) -> String {
        format!(
            "{}{}",
            self.action.verb().to_case(Case::Pascal),
            self.model.name()
        )
    }

    /// Schema field name the mutation is mounted under, e.g. `order`
    pub fn field_name(&self) -> String {
        self.model.name().to_case(Case::Snake)
    }

    /// Name of the derived input object, e.g. `CreateOrderInput`
    pub fn input_name(&self) -> String {
        format!("{}Input", self.type_name())
    }

    /// Derive the full argument schema for this mutation.
    ///
    /// Relation field names are added to the exclusion set before scalar
    /// conversion runs, then the relation-derived arguments are merged in.
    /// The result is recorded in `registry` under [`Self::input_name`].
    pub fn construct_fields(
        &self,
        registry: &mut TypeRegistry,
        filter: &FieldFilter,
    ) -> Result<MutationFields, SchemaError> {
        let classifier = ModelFields::with_filter(self.model, filter.clone());

        // relation fields must never reach scalar conversion
        let mut scalar_filter = filter.clone();
        for name in classifier.related_names() {
            scalar_filter.exclude.insert(name.to_string());
        }

        let mut fields = MutationFields::new();
        for (name, field) in classifier.all_with(&scalar_filter) {
            if let FieldDescriptor::Scalar { kind, nullable } = field {
                fields.insert(
                    name.to_string(),
                    InputFieldType::Scalar {
                        kind: *kind,
                        required: !nullable,
                    },
                );
            }
        }

        for (name, field_type) in self.related_fields(filter) {
            fields.insert(name, field_type);
        }

        debug!(
            "derived {} argument(s) for mutation {}",
            fields.len(),
            self.type_name()
        );
        registry.register(self.input_name(), fields.clone())?;
        Ok(fields)
    }

    /// Arguments derived from relation fields alone.
    ///
    /// Forward references emit `<name>_id`, required when the underlying
    /// field is non-nullable. Many-to-many relations emit an optional list of
    /// identifiers under the original field name.
    pub fn related_fields(&self, filter: &FieldFilter) -> MutationFields {
        let classifier = ModelFields::with_filter(self.model, filter.clone());

        let mut fields = MutationFields::new();
        for (name, field) in classifier.related() {
            match field {
                FieldDescriptor::ForwardRelation { nullable, .. } => {
                    fields.insert(
                        format!("{name}_id"),
                        InputFieldType::Ident {
                            required: !nullable,
                        },
                    );
                }
                FieldDescriptor::ReverseRelationMulti { .. } => {
                    fields.insert(name.to_string(), InputFieldType::IdentList);
                }
                FieldDescriptor::ReverseRelationSingle { .. } | FieldDescriptor::Scalar { .. } => {}
            }
        }
        fields
    }

    /// Derive, register, and return the mutation's input object
    pub fn input_object(
        &self,
        registry: &mut TypeRegistry,
        filter: &FieldFilter,
    ) -> Result<InputObject, SchemaError> {
        let fields = self.construct_fields(registry, filter)?;
        let mut input = InputObject::new(self.input_name());
        for (name, field_type) in &fields {
            input = input.field(field_type.input_value(name));
        }
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScalarKind;

    fn order() -> ModelDescriptor {
        ModelDescriptor::builder("Order")
            .scalar("reference", ScalarKind::String)
            .nullable_scalar("note", ScalarKind::String)
            .build()
            .unwrap()
    }

    #[test]
    fn test_node_is_required() {
        let model = order();
        let result = MutationSchema::create(&model, "");
        assert!(matches!(
            result,
            Err(SchemaError::MissingNode(ref name)) if name == "Order"
        ));
    }

    #[test]
    fn test_naming_scheme() {
        let model = order();
        let create = MutationSchema::create(&model, "Order").unwrap();
        assert_eq!(create.type_name(), "CreateOrder");
        assert_eq!(create.field_name(), "order");
        assert_eq!(create.input_name(), "CreateOrderInput");

        let update = MutationSchema::update(&model, "Order").unwrap();
        assert_eq!(update.type_name(), "UpdateOrder");
    }

    #[test]
    fn test_multi_word_model_naming() {
        let model = ModelDescriptor::builder("SimpleModel")
            .scalar("name", ScalarKind::String)
            .build()
            .unwrap();
        let schema = MutationSchema::update(&model, "SimpleModel").unwrap();
        assert_eq!(schema.type_name(), "UpdateSimpleModel");
        assert_eq!(schema.field_name(), "simple_model");
    }

    #[test]
    fn test_scalar_requiredness_follows_nullability() {
        let model = order();
        let schema = MutationSchema::create(&model, "Order").unwrap();
        let mut registry = TypeRegistry::new();
        let fields = schema
            .construct_fields(&mut registry, &FieldFilter::none())
            .unwrap();

        assert!(fields["reference"].required());
        assert!(!fields["note"].required());
    }

    #[test]
    fn test_related_fields_emission() {
        let model = ModelDescriptor::builder("Product")
            .belongs_to("category", "Category")
            .optional_belongs_to("brand", "Brand")
            .many_to_many("many", "Warehouse")
            .reverse_one_to_many("one2many", "OrderLine")
            .build()
            .unwrap();
        let schema = MutationSchema::create(&model, "Product").unwrap();

        let fields = schema.related_fields(&FieldFilter::none());
        let names: Vec<&String> = fields.keys().collect();
        assert_eq!(names, vec!["category_id", "brand_id", "many"]);

        assert_eq!(fields["category_id"], InputFieldType::Ident { required: true });
        assert_eq!(fields["brand_id"], InputFieldType::Ident { required: false });
        assert_eq!(fields["many"], InputFieldType::IdentList);
    }

    #[test]
    fn test_related_fields_respect_filter() {
        let model = ModelDescriptor::builder("Product")
            .belongs_to("category", "Category")
            .many_to_many("many", "Warehouse")
            .build()
            .unwrap();
        let schema = MutationSchema::create(&model, "Product").unwrap();

        let fields = schema.related_fields(&FieldFilter::excluding(["category"]));
        let names: Vec<&String> = fields.keys().collect();
        assert_eq!(names, vec!["many"]);
    }
}
