//! Template management errors.

use thiserror::Error;

use super::types::TemplateId;
use crate::matrix::InvalidInput;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemplateError {
    #[error("template {0} not found")]
    NotFound(TemplateId),

    #[error("template name must not be empty")]
    EmptyName,

    /// Another template in the same scope already uses this name.
    #[error("a template named {name:?} already exists in this scope")]
    DuplicateName { name: String },

    #[error("invalid template weights: {0}")]
    InvalidWeights(#[from] InvalidInput),
}
