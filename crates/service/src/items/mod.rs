//! Items module: three-layer architecture (domain, repository, service).
//!
//! The only shipped repository is the process-local [`repo::memory::InMemoryItemRepository`];
//! handlers talk to [`ItemService`] and never see the storage directly.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{Item, ItemId, ItemInput};
pub use repo::memory::InMemoryItemRepository;
pub use repository::ItemRepository;
pub use service::ItemService;
