// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use vesta_core::cvar::{
    type_mismatch, CvarDefinition, CvarError, CvarResult, CvarStore, CvarValue,
};

/// A registered cvar: its definition plus the current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Cvar {
    /// How the cvar was declared.
    pub definition: CvarDefinition,
    /// The current value. Always the same kind as `definition.default`.
    pub value: CvarValue,
}

/// In-memory cvar store backed by `RwLock<HashMap>`.
///
/// Cvars must be registered before they can be read or written, and keep the
/// kind of their default value for their whole lifetime.
#[derive(Debug, Default)]
pub struct InMemoryCvarStore {
    storage: RwLock<HashMap<String, Cvar>>,
}

impl InMemoryCvarStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store and registers every definition in order.
    ///
    /// # Errors
    ///
    /// Fails on the first duplicate name.
    pub fn with_definitions(
        definitions: impl IntoIterator<Item = CvarDefinition>,
    ) -> CvarResult<Self> {
        let store = Self::new();
        for definition in definitions {
            store.register(definition)?;
        }
        Ok(store)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Cvar>> {
        self.storage.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Cvar>> {
        self.storage.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a cvar, initialised to its default value.
    pub fn register(&self, definition: CvarDefinition) -> CvarResult<()> {
        let mut storage = self.write();
        if storage.contains_key(&definition.name) {
            return Err(CvarError::AlreadyRegistered(definition.name));
        }
        log::debug!(
            "Registered cvar '{}' = {}",
            definition.name,
            definition.default
        );
        let value = definition.default;
        storage.insert(definition.name.clone(), Cvar { definition, value });
        Ok(())
    }

    /// Returns the definition a cvar was registered with.
    pub fn definition(&self, name: &str) -> Option<CvarDefinition> {
        self.read().get(name).map(|cvar| cvar.definition.clone())
    }

    /// Restores one cvar to its default value.
    pub fn reset(&self, name: &str) -> CvarResult<()> {
        let mut storage = self.write();
        let cvar = storage
            .get_mut(name)
            .ok_or_else(|| CvarError::NotFound(name.to_string()))?;
        cvar.value = cvar.definition.default;
        Ok(())
    }

    /// Restores every cvar to its default value.
    pub fn reset_all(&self) {
        for cvar in self.write().values_mut() {
            cvar.value = cvar.definition.default;
        }
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// The current value of every cvar, keyed by name.
    pub fn snapshot(&self) -> BTreeMap<String, CvarValue> {
        self.read()
            .iter()
            .map(|(name, cvar)| (name.clone(), cvar.value))
            .collect()
    }

    /// The number of registered cvars.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl CvarStore for InMemoryCvarStore {
    fn get(&self, name: &str) -> CvarResult<CvarValue> {
        self.read()
            .get(name)
            .map(|cvar| cvar.value)
            .ok_or_else(|| CvarError::NotFound(name.to_string()))
    }

    fn set(&self, name: &str, value: CvarValue) -> CvarResult<()> {
        let mut storage = self.write();
        let cvar = storage
            .get_mut(name)
            .ok_or_else(|| CvarError::NotFound(name.to_string()))?;
        if cvar.value.kind() != value.kind() {
            return Err(type_mismatch(name, cvar.value.kind(), value.kind()));
        }
        if cvar.value != value {
            log::debug!("Cvar '{name}': {} -> {value}", cvar.value);
        }
        cvar.value = value;
        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }
}
