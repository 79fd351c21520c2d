//! Directory Module
//!
//! The in-memory user directory behind `user/search` and `user/loadMore`.
//!
//! - **`seed`** - Account seeds (JSON file or built-in demo set)
//! - **`store`** - `Directory`: matching and paging
//! - **`handlers`** - Axum handlers

pub mod seed;
pub mod store;
pub mod handlers;

pub use seed::{demo_seeds, load_seeds, AccountSeed};
pub use store::{Account, Directory, DEFAULT_PAGE_SIZE};
pub use handlers::{load_more, search};
