//! Persistence layer
//!
//! A single redb database plays the role of the browser's durable
//! key-value substrate; collections are JSON arrays stored under string
//! keys.

pub mod store;

pub use store::{KvStore, StagedWrite, StoreError, StoreResult, HOTELS, ROOMS, USERS};
