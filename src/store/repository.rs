// Passfile — Slot repository
//
// The CRUD API over the store: register claims the lowest free slot and
// persists the whole image, lookups delegate to the table. The repository
// trusts its caller for input validation (the CLI owns that) and does not
// enforce username uniqueness among occupied slots.

use super::db::Database;
use super::error::StoreError;
use super::record::Record;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over credential CRUD operations.
pub trait UserRepository {
    /// Claim the lowest free slot for `username` with its password digest
    /// and persist the table. Returns the claimed slot id.
    fn register(&mut self, username: &str, digest: &[u8]) -> Result<u32, StoreError>;

    /// The record at `index`, bounds-checked.
    fn get(&self, index: usize) -> Result<&Record, StoreError>;

    /// First occupied record whose username matches byte-for-byte.
    fn find_by_username(&self, username: &str) -> Result<&Record, StoreError>;

    /// All occupied records in slot order. Lazy; every call yields a fresh
    /// iterator with identical results absent intervening mutation.
    fn list(&self) -> Box<dyn Iterator<Item = &Record> + '_>;

    /// Overwrite the store with a freshly created empty table.
    fn reset(&mut self) -> Result<(), StoreError>;
}

// ─── File-backed Implementation ──────────────────────────────────────────────

pub struct SlotRepository<'a> {
    db: &'a mut Database,
}

impl<'a> SlotRepository<'a> {
    pub fn new(db: &'a mut Database) -> Self {
        Self { db }
    }
}

impl UserRepository for SlotRepository<'_> {
    fn register(&mut self, username: &str, digest: &[u8]) -> Result<u32, StoreError> {
        let index = self.db.table().first_free()?;
        self.db.table_mut().claim(index, username, digest)?;

        // A failed flush leaves the in-memory table one registration ahead
        // of the disk image; it is not rolled back.
        self.db.flush()?;

        Ok(index as u32)
    }

    fn get(&self, index: usize) -> Result<&Record, StoreError> {
        self.db.table().slot(index)
    }

    fn find_by_username(&self, username: &str) -> Result<&Record, StoreError> {
        self.db.table().find_by_username(username)
    }

    fn list(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        Box::new(self.db.table().occupied())
    }

    fn reset(&mut self) -> Result<(), StoreError> {
        self.db.reset()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
