use ::thiserror::Error;

use super::indirect::reference::Reference;

pub(crate) type ObjectResult<T> = Result<T, ObjectErr>;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ObjectErr {
    #[error("Missing object: {0}")]
    Missing(Reference),
    #[error("Wrong object type for {reference}. Expected {expected_type}")]
    Type {
        reference: Reference,
        expected_type: &'static str,
    },
    #[error("Reference chain starting at {0} exceeds the maximum depth")]
    ReferenceDepth(Reference),
}
