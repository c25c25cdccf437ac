use crate::config::selector_config::SelectorConfig;
use crate::core::filter::apply_selector;
use crate::core::mapper::Mapper;
use crate::domain::model::{SelectorDeclaration, SelectorGroup};
use crate::domain::ports::NamedFields;
use crate::utils::error::{JsonError, Result};
use serde::Serialize;
use serde_json::Value;
use std::any::TypeId;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Entry {
    type_name: &'static str,
    group: SelectorGroup,
}

/// Selector declarations keyed by the exact type they are attached to.
///
/// Filled once at start-up, then only read. Lookups never consider other
/// types: a declaration registered for `Base` is not visible to `Derived`.
#[derive(Debug, Clone, Default)]
pub struct SelectorRegistry {
    entries: HashMap<TypeId, Entry>,
}

impl SelectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the declarations a type carries through [`NamedFields`].
    pub fn register<T>(&mut self) -> &mut Self
    where
        T: NamedFields + 'static,
    {
        self.register_group::<T>(T::selector_group().clone())
    }

    /// Appends `group` to whatever is already registered for `T`.
    pub fn register_group<T>(&mut self, group: SelectorGroup) -> &mut Self
    where
        T: 'static,
    {
        let type_name = std::any::type_name::<T>();
        tracing::debug!("Registering {} selector(s) for {}", group.len(), type_name);

        self.entries
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Entry {
                type_name,
                group: SelectorGroup::new(),
            })
            .group
            .extend(group);
        self
    }

    pub fn register_declaration<T>(&mut self, declaration: SelectorDeclaration) -> &mut Self
    where
        T: 'static,
    {
        self.register_group::<T>(SelectorGroup::single(declaration))
    }

    /// Attaches the declarations listed under `[[types.<key>]]` to `T`.
    ///
    /// The declarations are validated first; on error nothing is registered.
    pub fn register_from_config<T>(&mut self, config: &SelectorConfig, key: &str) -> Result<&mut Self>
    where
        T: 'static,
    {
        config.validate_type(key)?;
        let declarations = config.declarations(key).ok_or_else(|| JsonError::ConfigError {
            message: format!("No selectors configured for type key '{}'", key),
        })?;

        Ok(self.register_group::<T>(declarations.iter().cloned().collect()))
    }

    pub fn contains(&self, type_id: TypeId) -> bool {
        self.entries.contains_key(&type_id)
    }

    /// Every declaration registered for the type, in registration order.
    pub fn declarations_for(&self, type_id: TypeId) -> &[SelectorDeclaration] {
        self.entries
            .get(&type_id)
            .map(|entry| entry.group.declarations())
            .unwrap_or(&[])
    }

    pub fn declarations_for_type<T>(&self) -> &[SelectorDeclaration]
    where
        T: 'static,
    {
        self.declarations_for(TypeId::of::<T>())
    }

    pub fn matching<'a>(
        &'a self,
        type_id: TypeId,
        name: &'a str,
    ) -> impl Iterator<Item = &'a SelectorDeclaration> + 'a {
        self.declarations_for(type_id)
            .iter()
            .filter(move |d| d.is_named(name))
    }

    /// Prunes `tree` with the declarations registered for `type_id`.
    pub fn apply(&self, tree: &mut Value, type_id: TypeId, name: Option<&str>) -> usize {
        if let (Some(name), Some(entry)) = (name, self.entries.get(&type_id)) {
            tracing::trace!("Looking up selector '{}' on {}", name, entry.type_name);
        }
        apply_selector(tree, self.declarations_for(type_id), name)
    }

    /// Serializes through the process-wide mapper and prunes with the
    /// declarations registered for `T`.
    pub fn to_json_named<T>(&self, object: &T, name: Option<&str>) -> Result<Value>
    where
        T: Serialize + 'static,
    {
        let mut node = Mapper::global().to_json(object)?;
        self.apply(&mut node, TypeId::of::<T>(), name);
        Ok(node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
