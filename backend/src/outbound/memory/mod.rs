//! In-process resource store.
//!
//! Records live in a `BTreeMap` keyed by time-ordered identifiers, so
//! iteration order is creation order. Writers take the lock exclusively;
//! readers share it. Deleted identifiers are remembered and never minted
//! again.

use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{ResourceStore, ResourceStoreError};
use crate::domain::{Record, ResourceFields, ResourceId};

#[derive(Debug)]
struct StoreState<F> {
    records: BTreeMap<ResourceId, F>,
    retired: HashSet<ResourceId>,
}

impl<F> Default for StoreState<F> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            retired: HashSet::new(),
        }
    }
}

impl<F> StoreState<F> {
    fn fresh_id(&self) -> ResourceId {
        loop {
            let id = ResourceId::generate();
            if !self.records.contains_key(&id) && !self.retired.contains(&id) {
                return id;
            }
        }
    }
}

/// [`ResourceStore`] backed by process memory.
///
/// # Examples
/// ```
/// use burzcontent::domain::UserFields;
/// use burzcontent::domain::ports::ResourceStore;
/// use burzcontent::outbound::memory::InMemoryResourceStore;
///
/// # actix_web::rt::System::new().block_on(async {
/// let store = InMemoryResourceStore::<UserFields>::new();
/// assert!(store.list().await.expect("list").is_empty());
/// # });
/// ```
#[derive(Debug)]
pub struct InMemoryResourceStore<F> {
    state: RwLock<StoreState<F>>,
}

impl<F> Default for InMemoryResourceStore<F> {
    fn default() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }
}

impl<F: ResourceFields> InMemoryResourceStore<F> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> ResourceStoreError {
        ResourceStoreError::unavailable(format!("{} store lock poisoned", F::KIND.singular))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState<F>>, ResourceStoreError> {
        self.state.read().map_err(|_| Self::poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState<F>>, ResourceStoreError> {
        self.state.write().map_err(|_| Self::poisoned())
    }
}

#[async_trait]
impl<F: ResourceFields> ResourceStore<F> for InMemoryResourceStore<F> {
    async fn list(&self) -> Result<Vec<Record<F>>, ResourceStoreError> {
        let state = self.read()?;
        Ok(state
            .records
            .iter()
            .map(|(id, fields)| Record::new(*id, fields.clone()))
            .collect())
    }

    async fn get(&self, id: ResourceId) -> Result<Record<F>, ResourceStoreError> {
        let state = self.read()?;
        state
            .records
            .get(&id)
            .map(|fields| Record::new(id, fields.clone()))
            .ok_or_else(|| ResourceStoreError::not_found(id))
    }

    async fn create(&self, fields: F) -> Result<Record<F>, ResourceStoreError> {
        let mut state = self.write()?;
        let id = state.fresh_id();
        state.records.insert(id, fields.clone());
        Ok(Record::new(id, fields))
    }

    async fn update(&self, id: ResourceId, fields: F) -> Result<Record<F>, ResourceStoreError> {
        let mut state = self.write()?;
        let slot = state
            .records
            .get_mut(&id)
            .ok_or_else(|| ResourceStoreError::not_found(id))?;
        *slot = fields.clone();
        Ok(Record::new(id, fields))
    }

    async fn delete(&self, id: ResourceId) -> Result<(), ResourceStoreError> {
        let mut state = self.write()?;
        if state.records.remove(&id).is_none() {
            return Err(ResourceStoreError::not_found(id));
        }
        state.retired.insert(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
