//! Menu item storage.
//!
//! [`MenuStore`] is the seam handlers talk to; [`InMemoryMenuStore`] is the
//! only backing in this crate. State lives for the lifetime of the process.
//!
//! # Identifier assignment
//! Ids come from a monotonically increasing counter that starts one past the
//! largest seeded id. A deleted id is never handed out again, so an id always
//! names at most one record over the life of the store.

use std::sync::{PoisonError, RwLock};

use crate::menu::item::{ItemId, MenuItem, MenuItemPatch, NewMenuItem};

/// Failure of the backing store itself (not a missing record).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("menu store lock poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for StoreError {
    fn from(_: PoisonError<T>) -> Self {
        StoreError::Poisoned
    }
}

/// Operations the HTTP layer needs from a menu backing store.
///
/// `Ok(None)` means no record has the requested id.
pub trait MenuStore: Send + Sync {
    /// Every item, in insertion order.
    fn list_all(&self) -> Result<Vec<MenuItem>, StoreError>;

    fn get_by_id(&self, id: ItemId) -> Result<Option<MenuItem>, StoreError>;

    /// Assign an id, append, and return the stored record.
    fn insert(&self, item: NewMenuItem) -> Result<MenuItem, StoreError>;

    /// Overwrite the fields present in `patch` and return the updated record.
    fn update_by_id(&self, id: ItemId, patch: MenuItemPatch)
        -> Result<Option<MenuItem>, StoreError>;

    /// Remove the record and return it.
    fn remove_by_id(&self, id: ItemId) -> Result<Option<MenuItem>, StoreError>;

    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

struct Inner {
    items: Vec<MenuItem>,
    next_id: ItemId,
}

/// Vector-backed store guarded by a single lock.
///
/// Each operation holds the lock for its whole duration, so operations are
/// atomic with respect to one another.
pub struct InMemoryMenuStore {
    inner: RwLock<Inner>,
}

impl InMemoryMenuStore {
    /// Create an empty store. The first id handed out is 1.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a store holding `items` in the given order.
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner { items, next_id }),
        }
    }

    /// Create a store from validated drafts, numbering them from 1.
    pub fn seeded(items: Vec<NewMenuItem>) -> Self {
        let items = items
            .into_iter()
            .zip(1..)
            .map(|(item, id)| MenuItem::from_new(id, item))
            .collect();
        Self::with_items(items)
    }
}

impl Default for InMemoryMenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuStore for InMemoryMenuStore {
    fn list_all(&self) -> Result<Vec<MenuItem>, StoreError> {
        Ok(self.inner.read()?.items.clone())
    }

    fn get_by_id(&self, id: ItemId) -> Result<Option<MenuItem>, StoreError> {
        let inner = self.inner.read()?;
        Ok(inner.items.iter().find(|item| item.id == id).cloned())
    }

    fn insert(&self, item: NewMenuItem) -> Result<MenuItem, StoreError> {
        let mut inner = self.inner.write()?;
        let stored = MenuItem::from_new(inner.next_id, item);
        inner.next_id += 1;
        inner.items.push(stored.clone());
        Ok(stored)
    }

    fn update_by_id(
        &self,
        id: ItemId,
        patch: MenuItemPatch,
    ) -> Result<Option<MenuItem>, StoreError> {
        let mut inner = self.inner.write()?;
        Ok(inner.items.iter_mut().find(|item| item.id == id).map(|item| {
            item.apply(patch);
            item.clone()
        }))
    }

    fn remove_by_id(&self, id: ItemId) -> Result<Option<MenuItem>, StoreError> {
        let mut inner = self.inner.write()?;
        Ok(inner
            .items
            .iter()
            .position(|item| item.id == id)
            .map(|index| inner.items.remove(index)))
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.inner.read()?.items.len())
    }
}
