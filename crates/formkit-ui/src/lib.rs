//! formkit UI Components
//!
//! Dioxus widgets for building forms, plus `AutoFields`, which renders a
//! whole form from a UI metadata map and a field order.
//!
//! ## Pieces
//!
//! - **Widgets**: `Input`, `TextArea`, `Select` (+ custom dropdown parts),
//!   `Checkbox`, `Radio`, `RadioGroup`, `Switch`, `Label`, table parts
//! - **Form layout**: `FormItem`, `FormLabel`, `FormControl`,
//!   `FormDescription`, `FormMessage`
//! - **State**: [`FormHandle`] / [`use_form`], the signal-backed form state
//! - **Auto rendering**: `AutoFields`, `AutoTable`
//! - **Styles**: [`FORMKIT_STYLES`]

pub mod auto;
pub mod class;
pub mod components;
mod form_handle;
pub mod theme;

pub use auto::*;
pub use class::merge_class;
pub use components::*;
pub use form_handle::{use_form, FormHandle};
pub use theme::FORMKIT_STYLES;
