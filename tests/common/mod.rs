//! Common test utilities for Rentdesk integration tests

use std::path::PathBuf;

use tempfile::TempDir;

/// A throwaway cart/settings sandbox for integration tests
#[allow(dead_code)]
pub struct TestSandbox {
    /// Temporary directory
    pub temp: TempDir,
}

#[allow(dead_code)]
impl TestSandbox {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        Self { temp }
    }

    /// Path of the sandboxed cart file (not created until a command writes it)
    pub fn cart_path(&self) -> PathBuf {
        self.temp.path().join("cart.json")
    }

    /// Write a settings file and return its path
    pub fn write_settings(&self, content: &str) -> PathBuf {
        let path = self.temp.path().join("settings.yaml");
        std::fs::write(&path, content).expect("Failed to write settings file");
        path
    }

    /// Parse the cart file as JSON
    pub fn read_cart(&self) -> serde_json::Value {
        let content =
            std::fs::read_to_string(self.cart_path()).expect("Failed to read cart file");
        serde_json::from_str(&content).expect("Cart file is not valid JSON")
    }

    /// Line item ids currently in the cart
    pub fn cart_item_ids(&self) -> Vec<String> {
        self.read_cart()
            .as_array()
            .expect("Cart file is not a JSON array")
            .iter()
            .map(|item| {
                item.get("id")
                    .and_then(|id| id.as_str())
                    .expect("Line item has no id")
                    .to_string()
            })
            .collect()
    }
}
