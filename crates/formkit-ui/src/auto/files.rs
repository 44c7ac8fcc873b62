//! Adapter from Dioxus' file engine to [`FileSource`]

use std::sync::Arc;

use dioxus::html::FileEngine;
use formkit_core::FileSource;

/// Files picked in a native file input
pub struct EngineFiles(pub Arc<dyn FileEngine>);

impl FileSource for EngineFiles {
    fn file_names(&self) -> Vec<String> {
        self.0.files()
    }

    async fn read(&self, name: &str) -> Option<Vec<u8>> {
        self.0.read_file(name).await
    }
}
