// Passfile — Store Module
//
// The record-storage core: a fixed-capacity slot table persisted as a flat
// binary image, the open/load/flush/close lifecycle around it, and the CRUD
// repository layered on top. This module never logs or prints — it returns
// typed outcomes and leaves presentation to the CLI.

mod db;
mod error;
mod record;
mod repository;
mod table;

pub use db::Database;
pub use error::StoreError;
pub use record::{Record, CAPACITY, DIGEST_SIZE, RECORD_SIZE, TABLE_SIZE, USERNAME_SIZE};
pub use repository::{SlotRepository, UserRepository};
pub use table::Table;

pub(crate) use record::pad_digest;
