//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the domain crates:
//! - `TestDataFile`: scratch JSON document with automatic cleanup
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Helpers for the `{success, ...}` response envelopes
//!
//! # Usage
//!
//! ```rust,no_run
//! use serde_json::json;
//! use test_utils::{TestDataBuilder, TestDataFile};
//!
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let file = TestDataFile::with_items(json!([builder.item(1, "Office", 9.5)]));
//!
//! let stored = file.read_json();
//! assert_eq!(stored[0]["id"], 1);
//! ```

use serde_json::{Value, json};

mod data_file;

pub use data_file::TestDataFile;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by deriving data from a seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_item");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("item", "main");
    /// // Returns: "test-item-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Stored item document for `id`, named deterministically
    pub fn item(&self, id: i64, category: &str, price: f64) -> Value {
        json!({
            "id": id,
            "name": self.name("item", &id.to_string()),
            "category": category,
            "price": price,
        })
    }
}

/// Test assertion helpers
pub mod assertions {
    use serde_json::Value;

    /// Assert a success envelope and return its `data`
    pub fn assert_success(body: &Value, context: &str) -> Value {
        assert_eq!(
            body["success"],
            Value::Bool(true),
            "{}: expected success envelope, got {}",
            context,
            body
        );
        body["data"].clone()
    }

    /// Assert an error envelope with the given status and return its message
    pub fn assert_error(body: &Value, status: u16, context: &str) -> String {
        assert_eq!(
            body["success"],
            Value::Bool(false),
            "{}: expected error envelope, got {}",
            context,
            body
        );
        assert_eq!(
            body["error"]["status"],
            Value::from(status),
            "{}: expected status {}, got {}",
            context,
            status,
            body
        );
        body["error"]["message"]
            .as_str()
            .unwrap_or_else(|| panic!("{}: error envelope without message", context))
            .to_string()
    }
}
