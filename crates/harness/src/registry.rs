//! Name to adapter mapping.
//!
//! A registry is written once, while the process sets itself up on a single thread,
//! and only read afterwards. There is no removal: callers that iterate take a
//! [`Registry::snapshot`] so they never observe a half-populated map.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, error};

use crate::adapter::Adapter;
use crate::ensure;
use crate::error::RegistryError;

pub type Snapshot = BTreeMap<&'static str, Arc<dyn Adapter>>;

#[derive(Default)]
pub struct Registry {
    adapters: Snapshot,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an adapter, rejecting an empty name or one already taken.
    pub fn try_register(&mut self, adapter: Arc<dyn Adapter>) -> Result<(), RegistryError> {
        let name = adapter.name();
        ensure!(!name.is_empty(), RegistryError::EmptyName);
        ensure!(!self.adapters.contains_key(name), RegistryError::Duplicate { name });

        debug!(adapter = name, style = %adapter.param_style(), "registered router adapter");
        self.adapters.insert(name, adapter);
        Ok(())
    }

    /// Adds an adapter.
    ///
    /// # Panics
    ///
    /// On an empty or duplicate name, both of which are setup mistakes.
    pub fn register(&mut self, adapter: Arc<dyn Adapter>) {
        if let Err(e) = self.try_register(adapter) {
            error!(cause = %e, "invalid adapter registration");
            panic!("invalid adapter registration: {e}");
        }
    }

    /// A copy of the current mapping, ordered by adapter name.
    pub fn snapshot(&self) -> Snapshot {
        self.adapters.clone()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Adapter>> {
        self.adapters.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.adapters.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.adapters.keys()).finish()
    }
}
