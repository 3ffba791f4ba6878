//! Domain state: form entries, display items and dialog interaction state

mod dialog_state;
mod display_item;
mod form_entry;

pub use dialog_state::*;
pub use display_item::*;
pub use form_entry::*;
