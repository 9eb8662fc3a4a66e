//! Cart persistence
//!
//! The cart collaborator is a trait so checkout stays decoupled from where
//! items actually land. The production implementation keeps an order-scoped
//! JSON array on disk.

use std::path::{Path, PathBuf};

use crate::cart::line_item::CartLineItem;
use crate::error::{RentdeskError, Result, cart_parse_failed, cart_read_failed, cart_write_failed};

/// Order-scoped collection of line items
pub trait CartStore {
    /// Append an item to the cart
    fn add(&mut self, item: CartLineItem) -> Result<()>;

    /// All items currently in the cart, in insertion order
    fn items(&self) -> Result<Vec<CartLineItem>>;

    /// Remove an item by id, returning it
    fn remove(&mut self, id: &str) -> Result<CartLineItem>;

    /// Remove all items
    fn clear(&mut self) -> Result<()>;
}

/// Cart stored as a JSON array file
#[derive(Debug, Clone)]
pub struct JsonCartStore {
    path: PathBuf,
}

impl JsonCartStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonCartStore { path: path.into() }
    }

    /// Default cart location under the user data directory
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rentdesk")
            .join("cart.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<CartLineItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| cart_read_failed(self.path.display().to_string(), e.to_string()))?;
        serde_json::from_str(&content)
            .map_err(|e| cart_parse_failed(self.path.display().to_string(), e.to_string()))
    }

    fn save(&self, items: &[CartLineItem]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| cart_write_failed(parent.display().to_string(), e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(items)
            .map_err(|e| cart_write_failed(self.path.display().to_string(), e.to_string()))?;
        std::fs::write(&self.path, content)
            .map_err(|e| cart_write_failed(self.path.display().to_string(), e.to_string()))
    }
}

impl CartStore for JsonCartStore {
    fn add(&mut self, item: CartLineItem) -> Result<()> {
        let mut items = self.load()?;
        items.push(item);
        self.save(&items)
    }

    fn items(&self) -> Result<Vec<CartLineItem>> {
        self.load()
    }

    fn remove(&mut self, id: &str) -> Result<CartLineItem> {
        let mut items = self.load()?;
        let position = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| RentdeskError::LineItemNotFound { id: id.to_string() })?;
        let removed = items.remove(position);
        self.save(&items)?;
        Ok(removed)
    }

    fn clear(&mut self) -> Result<()> {
        self.save(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigurationState;
    use tempfile::TempDir;

    fn item(id: &str, price: u64) -> CartLineItem {
        CartLineItem {
            id: id.to_string(),
            name: format!("Custom RDP {id}"),
            configuration: ConfigurationState::default(),
            price,
        }
    }

    fn store_in(temp: &TempDir) -> JsonCartStore {
        JsonCartStore::new(temp.path().join("cart.json"))
    }

    #[test]
    fn test_empty_store_has_no_items() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert!(store.items().unwrap().is_empty());
    }

    #[test]
    fn test_add_and_list_preserves_insertion_order() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        store.add(item("rdp-1", 82)).unwrap();
        store.add(item("rdp-2", 143)).unwrap();

        let items = store.items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "rdp-1");
        assert_eq!(items[1].id, "rdp-2");
    }

    #[test]
    fn test_items_survive_a_new_store_instance() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cart.json");
        JsonCartStore::new(&path).add(item("rdp-1", 82)).unwrap();

        let reopened = JsonCartStore::new(&path);
        assert_eq!(reopened.items().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_returns_the_item() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        store.add(item("rdp-1", 82)).unwrap();
        store.add(item("rdp-2", 143)).unwrap();

        let removed = store.remove("rdp-1").unwrap();
        assert_eq!(removed.price, 82);

        let items = store.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "rdp-2");
    }

    #[test]
    fn test_remove_unknown_id_fails() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        let err = store.remove("rdp-missing").unwrap_err();
        assert!(matches!(err, RentdeskError::LineItemNotFound { .. }));
    }

    #[test]
    fn test_clear_empties_the_cart() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        store.add(item("rdp-1", 82)).unwrap();
        store.clear().unwrap();
        assert!(store.items().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_cart_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cart.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonCartStore::new(&path);
        let err = store.items().unwrap_err();
        assert!(matches!(err, RentdeskError::CartParseFailed { .. }));
    }
}
