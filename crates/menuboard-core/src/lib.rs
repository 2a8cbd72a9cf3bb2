//! menuboard core: domain models, error taxonomy, repository traits,
//! and the pure helpers (slugs, menu grouping) shared by every crate.

pub mod error;
pub mod menu_view;
pub mod models;
pub mod repository;
pub mod slug;

pub use error::{MenuError, MenuResult};
