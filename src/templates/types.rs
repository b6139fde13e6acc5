//! Template records and scopes.

use std::fmt;

use crate::matrix::DecisionMatrixWeights;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Store-assigned template identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TemplateId(pub u64);

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tenant (client organization) identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TenantId(pub String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who a template belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TemplateScope {
    /// Platform-wide preset, visible to every tenant.
    System,
    Tenant(TenantId),
}

impl fmt::Display for TemplateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateScope::System => f.write_str("system"),
            TemplateScope::Tenant(t) => write!(f, "tenant:{t}"),
        }
    }
}

/// A named weight preset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightTemplate {
    pub id: TemplateId,
    pub name: String,
    pub scope: TemplateScope,
    pub weights: DecisionMatrixWeights,

    /// At most one template per scope is the default.
    pub is_default: bool,
}

/// Request to create a template. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewTemplate {
    pub name: String,
    pub scope: TemplateScope,
    pub weights: DecisionMatrixWeights,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_default: bool,
}

impl NewTemplate {
    /// Creates a non-default template request.
    pub fn new(
        name: impl Into<String>,
        scope: TemplateScope,
        weights: DecisionMatrixWeights,
    ) -> Self {
        Self {
            name: name.into(),
            scope,
            weights,
            is_default: false,
        }
    }

    /// Marks the new template as its scope's default.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}
