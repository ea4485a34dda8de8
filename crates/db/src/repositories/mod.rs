//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&Catalog` as the first argument.
//!
//! Lock order is fixed: the items store is always locked before the
//! suggestions store, never the other way round.

pub mod item_repo;
pub mod suggestion_repo;

pub use item_repo::ItemRepo;
pub use suggestion_repo::SuggestionRepo;
