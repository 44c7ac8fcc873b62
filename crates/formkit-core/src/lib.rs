//! formkit Core Library
//!
//! Form state, field metadata and schema plumbing behind the formkit
//! widgets. Nothing here renders; the `formkit-ui` crate turns
//! [`FieldPlan`]s into Dioxus elements.
//!
//! ## Quick Start
//!
//! ```
//! use formkit_core::{plan_fields, FieldMeta, FieldWidget, FormValues, UiMap};
//!
//! let ui = UiMap::from([("title".to_string(), FieldMeta::input("Title"))]);
//! let form = FormValues::new().with("title", "Seed library");
//!
//! let plans = plan_fields(&["title", "notes"], &ui, &form);
//! assert_eq!(plans[0].binding.value, "Seed library");
//! assert_eq!(plans[1].widget, FieldWidget::Default);
//! ```

pub mod auto;
pub mod config;
pub mod error;
pub mod file;
pub mod form;
pub mod schema;
pub mod transport;

// Re-exports
pub use auto::{plan_field, plan_fields, table_columns, FieldPlan, FieldWidget, TableColumn};
pub use config::SchemaConfig;
pub use error::{FieldIssue, FormError, Result};
pub use file::{load_file_field, read_selection, DataUrl, FileSource, IMAGE_ACCEPT};
pub use form::{FieldBinding, FormState, FormValues, SetValueOptions};
pub use schema::{FieldMeta, FieldOrder, Schema, SelectOption, UiMap, WidgetKind};
pub use transport::{make_schema_transport, SchemaModule, SchemaTransport};
pub use serde_json::Value;
