use thiserror::Error;

use crate::items::ItemId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("item {0} not found")]
    NotFound(ItemId),
}
