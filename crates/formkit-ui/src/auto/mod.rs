//! Schema-driven rendering
//!
//! `AutoFields` renders a form from a UI map and field order; `AutoTable`
//! lists submitted values using the same metadata.

mod fields;
mod files;
mod table;

pub use fields::*;
pub use files::EngineFiles;
pub use table::*;
