//! Type-name resolution, partitioned by capability.
//!
//! The registry is an explicit value constructed once at startup (or
//! per test) and passed to the codec; there is no process-wide mutable
//! state. A test can therefore run against a custom or partial
//! vocabulary without affecting anything else.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::schema::{Capability, TypeSchema};

/// Maps declared type names to schemas, per capability.
#[derive(Debug, Default)]
pub struct Registry {
    object_types: FxHashMap<String, Arc<TypeSchema>>,
    link_types: FxHashMap<String, Arc<TypeSchema>>,
    collection_types: FxHashMap<String, Arc<TypeSchema>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema under a capability, keyed by its type name.
    /// A later registration for the same name replaces the earlier one.
    pub fn register(&mut self, capability: Capability, schema: Arc<TypeSchema>) {
        self.table_mut(capability)
            .insert(schema.name().to_string(), schema);
    }

    /// Resolves a single type name under a capability.
    pub fn resolve(&self, capability: Capability, name: &str) -> Option<Arc<TypeSchema>> {
        self.table(capability).get(name).cloned()
    }

    /// Resolves a declared type-name list under a capability: names are
    /// tried in list order and the first registered one wins.
    pub fn resolve_first(
        &self,
        capability: Capability,
        names: &[String],
    ) -> Option<Arc<TypeSchema>> {
        let resolved = names
            .iter()
            .find_map(|name| self.resolve(capability, name));
        if resolved.is_none() {
            debug!(capability = capability.name(), ?names, "no registered type");
        }
        resolved
    }

    /// Resolves a type-name list with no property context, trying
    /// capabilities in the fixed priority order.
    pub fn resolve_document(&self, names: &[String]) -> Option<(Capability, Arc<TypeSchema>)> {
        Capability::PRIORITY.iter().find_map(|&capability| {
            names
                .iter()
                .find_map(|name| self.resolve(capability, name))
                .map(|schema| (capability, schema))
        })
    }

    fn table(&self, capability: Capability) -> &FxHashMap<String, Arc<TypeSchema>> {
        match capability {
            Capability::Object => &self.object_types,
            Capability::Link => &self.link_types,
            Capability::Collection => &self.collection_types,
        }
    }

    fn table_mut(&mut self, capability: Capability) -> &mut FxHashMap<String, Arc<TypeSchema>> {
        match capability {
            Capability::Object => &mut self.object_types,
            Capability::Link => &mut self.link_types,
            Capability::Collection => &mut self.collection_types,
        }
    }
}
