//! Counterparty search
//!
//! State and controller behind the `ChoixVendeur` screen.

pub mod controller;
pub mod scroll;
pub mod state;

pub use controller::SearchController;
pub use scroll::is_end_reached;
pub use state::SearchState;
