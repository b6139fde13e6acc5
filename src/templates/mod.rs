//! Named weight presets.
//!
//! Templates are either system-wide defaults or owned by a tenant. A
//! tenant scores with its own default template when it has one, else the
//! system default, else the built-in preset of
//! [`DecisionMatrixWeights`](crate::matrix::DecisionMatrixWeights).

mod error;
mod store;
mod types;

pub use error::TemplateError;
pub use store::{InMemoryTemplateStore, TemplateStore};
pub use types::{NewTemplate, TemplateId, TemplateScope, TenantId, WeightTemplate};
