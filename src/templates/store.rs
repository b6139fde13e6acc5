//! Template storage.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::error::TemplateError;
use super::types::{NewTemplate, TemplateId, TemplateScope, TenantId, WeightTemplate};
use crate::matrix::DecisionMatrixWeights;

/// Persistence seam for weight templates.
///
/// Implementors provide the five primitive operations; listing by tenant
/// and weight resolution are derived from them.
///
/// Scores are computed on demand and never stored against a template, so
/// deletion needs no referential checks.
pub trait TemplateStore {
    /// Validates and stores a new template.
    ///
    /// Creating a default template clears the default flag of every other
    /// template in the same scope.
    fn create(&mut self, template: NewTemplate) -> Result<WeightTemplate, TemplateError>;

    fn get(&self, id: TemplateId) -> Option<WeightTemplate>;

    /// Templates of exactly `scope`, in creation order.
    fn list_scope(&self, scope: &TemplateScope) -> Vec<WeightTemplate>;

    /// Removes a template unconditionally.
    fn delete(&mut self, id: TemplateId) -> Result<WeightTemplate, TemplateError>;

    /// Makes `id` the default of its scope.
    fn set_default(&mut self, id: TemplateId) -> Result<(), TemplateError>;

    /// System templates followed by the tenant's own.
    fn list_for_tenant(&self, tenant: &TenantId) -> Vec<WeightTemplate> {
        let mut all = self.list_scope(&TemplateScope::System);
        all.extend(self.list_scope(&TemplateScope::Tenant(tenant.clone())));
        all
    }

    fn default_for(&self, scope: &TemplateScope) -> Option<WeightTemplate> {
        self.list_scope(scope).into_iter().find(|t| t.is_default)
    }

    /// Weights a tenant scores with when it has not picked a template.
    ///
    /// Tenant default, then system default, then
    /// [`DecisionMatrixWeights::default`].
    fn resolve(&self, tenant: &TenantId) -> DecisionMatrixWeights {
        self.default_for(&TemplateScope::Tenant(tenant.clone()))
            .or_else(|| self.default_for(&TemplateScope::System))
            .map(|t| t.weights)
            .unwrap_or_default()
    }
}

/// In-process [`TemplateStore`].
///
/// Ids are assigned sequentially, so id order is creation order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateStore {
    templates: BTreeMap<TemplateId, WeightTemplate>,
    next_id: u64,
}

impl InMemoryTemplateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the store holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn clear_default(&mut self, scope: &TemplateScope) {
        for t in self.templates.values_mut() {
            if &t.scope == scope {
                t.is_default = false;
            }
        }
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl TemplateStore for InMemoryTemplateStore {
    fn create(&mut self, template: NewTemplate) -> Result<WeightTemplate, TemplateError> {
        let name = template.name.trim();
        if name.is_empty() {
            return Err(TemplateError::EmptyName);
        }
        template.weights.validate()?;

        let key = name_key(name);
        let duplicate = self
            .templates
            .values()
            .any(|t| t.scope == template.scope && name_key(&t.name) == key);
        if duplicate {
            return Err(TemplateError::DuplicateName {
                name: name.to_string(),
            });
        }

        if template.is_default {
            self.clear_default(&template.scope);
        }

        self.next_id += 1;
        let id = TemplateId(self.next_id);
        let stored = WeightTemplate {
            id,
            name: name.to_string(),
            scope: template.scope,
            weights: template.weights,
            is_default: template.is_default,
        };
        self.templates.insert(id, stored.clone());

        info!(
            template_id = %id,
            scope = %stored.scope,
            is_default = stored.is_default,
            "weight template created"
        );
        Ok(stored)
    }

    fn get(&self, id: TemplateId) -> Option<WeightTemplate> {
        let found = self.templates.get(&id).cloned();
        if found.is_none() {
            debug!(template_id = %id, "weight template not found");
        }
        found
    }

    fn list_scope(&self, scope: &TemplateScope) -> Vec<WeightTemplate> {
        self.templates
            .values()
            .filter(|t| &t.scope == scope)
            .cloned()
            .collect()
    }

    fn delete(&mut self, id: TemplateId) -> Result<WeightTemplate, TemplateError> {
        let removed = self.templates.remove(&id).ok_or(TemplateError::NotFound(id))?;
        info!(template_id = %id, scope = %removed.scope, "weight template deleted");
        Ok(removed)
    }

    fn set_default(&mut self, id: TemplateId) -> Result<(), TemplateError> {
        let scope = self
            .templates
            .get(&id)
            .map(|t| t.scope.clone())
            .ok_or(TemplateError::NotFound(id))?;

        self.clear_default(&scope);
        if let Some(t) = self.templates.get_mut(&id) {
            t.is_default = true;
        }
        info!(template_id = %id, scope = %scope, "default weight template changed");
        Ok(())
    }
}
