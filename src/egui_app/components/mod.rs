//! Picker UI Components
//!
//! Reusable pieces of the counterparty picker.

pub mod search_bar;
pub mod user_item;
pub mod list_footer;
