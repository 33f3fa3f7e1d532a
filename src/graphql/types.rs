//! Conversion from classified model fields to GraphQL input types

use async_graphql::dynamic::{InputValue, TypeRef};
use indexmap::IndexMap;

use crate::model::ScalarKind;

/// Ordered name -> input type mapping for one mutation's arguments.
///
/// Built fresh per derivation call; insertion order follows the model's
/// declaration order, scalars first, then relation-derived entries.
pub type MutationFields = IndexMap<String, InputFieldType>;

/// GraphQL input type for a single mutation argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputFieldType {
    /// Converted scalar field
    Scalar { kind: ScalarKind, required: bool },
    /// Primary-key reference to another entity
    Ident { required: bool },
    /// List of primary-key references, never required
    IdentList,
}

impl InputFieldType {
    pub fn required(&self) -> bool {
        match self {
            InputFieldType::Scalar { required, .. } => *required,
            InputFieldType::Ident { required } => *required,
            InputFieldType::IdentList => false,
        }
    }

    /// Type reference as the schema will render it, e.g. `ID!` or `[ID]`
    pub fn type_ref(&self) -> TypeRef {
        match self {
            InputFieldType::Scalar {
                kind,
                required: true,
            } => TypeRef::named_nn(scalar_type_name(*kind)),
            InputFieldType::Scalar {
                kind,
                required: false,
            } => TypeRef::named(scalar_type_name(*kind)),
            InputFieldType::Ident { required: true } => TypeRef::named_nn(TypeRef::ID),
            InputFieldType::Ident { required: false } => TypeRef::named(TypeRef::ID),
            InputFieldType::IdentList => TypeRef::named_list(TypeRef::ID),
        }
    }

    /// Input value definition for a field of the given name
    pub fn input_value(&self, name: &str) -> InputValue {
        InputValue::new(name, self.type_ref())
    }
}

fn scalar_type_name(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::Id => TypeRef::ID,
        ScalarKind::String => TypeRef::STRING,
        ScalarKind::Integer => TypeRef::INT,
        ScalarKind::Float => TypeRef::FLOAT,
        ScalarKind::Boolean => TypeRef::BOOLEAN,
        ScalarKind::DateTime => "DateTime",
        ScalarKind::Json => "JSON",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_rendering() {
        let required_id = InputFieldType::Ident { required: true };
        assert_eq!(required_id.type_ref().to_string(), "ID!");

        let optional_id = InputFieldType::Ident { required: false };
        assert_eq!(optional_id.type_ref().to_string(), "ID");

        let id_list = InputFieldType::IdentList;
        assert_eq!(id_list.type_ref().to_string(), "[ID]");

        let text = InputFieldType::Scalar {
            kind: ScalarKind::String,
            required: false,
        };
        assert_eq!(text.type_ref().to_string(), "String");

        let stamp = InputFieldType::Scalar {
            kind: ScalarKind::DateTime,
            required: true,
        };
        assert_eq!(stamp.type_ref().to_string(), "DateTime!");
    }

    #[test]
    fn test_required_flags() {
        assert!(InputFieldType::Ident { required: true }.required());
        assert!(!InputFieldType::IdentList.required());
        assert!(!InputFieldType::Scalar {
            kind: ScalarKind::Json,
            required: false,
        }
        .required());
    }
}
