//! Schema configuration files
//!
//! A JSON document overriding a form's UI map and field order:
//!
//! ```json
//! {
//!   "field_order": ["title", "category"],
//!   "ui": {
//!     "title": { "label": "Title", "widget": "input" },
//!     "category": {
//!       "label": "Category",
//!       "widget": "select",
//!       "options": [{ "value": "tool", "label": "Tool" }]
//!     }
//!   }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::{FieldOrder, UiMap};

/// UI map plus field order loaded from disk
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub field_order: FieldOrder,
    #[serde(default)]
    pub ui: UiMap,
}

impl SchemaConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            fields = config.field_order.len(),
            "loaded schema config"
        );
        Ok(config)
    }

    /// Field names in the order that have no UI entry
    pub fn unmapped_fields(&self) -> Vec<&str> {
        self.field_order
            .iter()
            .filter(|name| !self.ui.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }
}
