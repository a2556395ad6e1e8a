//! Shoe store trait + in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use soletrack_core::{Brand, ShoeId};

use crate::{Shoe, StoreError};

/// Shoe persistence boundary.
pub trait ShoeStore: Send + Sync {
    fn insert(&self, shoe: Shoe) -> Result<Shoe, StoreError>;

    /// Replace an existing shoe record by id.
    fn update(&self, shoe: Shoe) -> Result<Shoe, StoreError>;

    /// Remove a shoe by id (hard delete).
    fn delete(&self, id: ShoeId) -> Result<(), StoreError>;

    fn find_by_id(&self, id: ShoeId) -> Result<Option<Shoe>, StoreError>;

    /// List shoes, optionally filtered to one brand.
    ///
    /// The filter is the query-side half of brand scoping: callers pass the
    /// principal's scope so out-of-brand records never leave the store.
    fn list(&self, brand: Option<&Brand>) -> Result<Vec<Shoe>, StoreError>;
}

/// In-memory shoe store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryShoeStore {
    shoes: RwLock<HashMap<ShoeId, Shoe>>,
}

impl InMemoryShoeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(_: impl core::fmt::Debug) -> StoreError {
    StoreError::Storage("lock poisoned".to_string())
}

impl ShoeStore for InMemoryShoeStore {
    fn insert(&self, shoe: Shoe) -> Result<Shoe, StoreError> {
        let mut shoes = self.shoes.write().map_err(poisoned)?;
        shoes.insert(shoe.id, shoe.clone());
        Ok(shoe)
    }

    fn update(&self, shoe: Shoe) -> Result<Shoe, StoreError> {
        let mut shoes = self.shoes.write().map_err(poisoned)?;
        if !shoes.contains_key(&shoe.id) {
            return Err(StoreError::NotFound);
        }
        shoes.insert(shoe.id, shoe.clone());
        Ok(shoe)
    }

    fn delete(&self, id: ShoeId) -> Result<(), StoreError> {
        let mut shoes = self.shoes.write().map_err(poisoned)?;
        shoes.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    fn find_by_id(&self, id: ShoeId) -> Result<Option<Shoe>, StoreError> {
        let shoes = self.shoes.read().map_err(poisoned)?;
        Ok(shoes.get(&id).cloned())
    }

    fn list(&self, brand: Option<&Brand>) -> Result<Vec<Shoe>, StoreError> {
        let shoes = self.shoes.read().map_err(poisoned)?;
        let mut matching: Vec<Shoe> = shoes
            .values()
            .filter(|s| brand.is_none_or(|b| &s.brand == b))
            .cloned()
            .collect();
        matching.sort_by_key(|s| s.created_at);
        Ok(matching)
    }
}
