//! Service layer for the item store.
//! - Domain types and the storage abstraction live in [`items`].
//! - [`items::ItemService`] is what the HTTP layer calls.

pub mod errors;
pub mod items;
