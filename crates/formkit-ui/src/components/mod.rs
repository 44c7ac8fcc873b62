//! Form widgets
//!
//! Every widget is stateless: it renders one native element, merges its
//! base class with the caller's `class`, and forwards events as-is.

mod checkbox;
mod form;
mod input;
mod label;
mod radio;
mod select;
mod switch;
mod table;

pub use checkbox::*;
pub use form::*;
pub use input::*;
pub use label::*;
pub use radio::*;
pub use select::*;
pub use switch::*;
pub use table::*;
