// Passfile — Store file management
//
// Owns the backing file and the in-memory table, and is the only component
// that touches the file. The lifecycle is open → load → mutate → flush →
// close: `load` replaces the table with the persisted image, `flush` writes
// the whole image back from offset zero and syncs it to the medium, and
// `close` consumes the store so a released handle cannot be used again.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use super::error::StoreError;
use super::record::TABLE_SIZE;
use super::table::Table;

/// A table plus its backing file. Exclusive owner of both: the table cannot
/// outlive a closed store.
pub struct Database {
    file: File,
    table: Table,
}

impl Database {
    /// Acquire a read/write handle at `path`, creating the file if absent.
    /// Nothing is read yet — the in-memory table starts empty.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;
        Ok(Self {
            file,
            table: Table::new(),
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Read the persisted image into the owned table, replacing its
    /// contents. A file shorter than one full table image is corrupt —
    /// never silently zero-filled.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let available = self.file.metadata()?.len() as usize;
        if available < TABLE_SIZE {
            return Err(StoreError::Corrupt {
                expected: TABLE_SIZE,
                actual: available,
            });
        }

        let mut buf = vec![0u8; TABLE_SIZE];
        self.file.seek(SeekFrom::Start(0))?;
        self.file.read_exact(&mut buf)?;
        self.table = Table::from_bytes(&buf)?;
        Ok(())
    }

    /// Write the full in-memory image from offset zero and force it to the
    /// underlying medium. A pure export: the table is unchanged whether the
    /// write succeeds or fails.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        let image = self.table.to_bytes();
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(&image)?;
        self.file.sync_all()?;
        Ok(())
    }

    /// Overwrite the store with a freshly created empty table.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.table = Table::new();
        self.flush()
    }

    /// Sync and release the handle. Consumes the store: the table does not
    /// outlive the closed handle.
    pub fn close(self) -> Result<(), StoreError> {
        self.file.sync_all()?;
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn store_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
        dir.path().join("passfile.db")
    }

    #[test]
    fn test_open_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        assert!(!path.exists());

        let db = Database::open(&path).unwrap();
        assert!(path.exists());
        db.close().unwrap();
    }

    #[test]
    fn test_flush_then_load_round_trips_the_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let mut db = Database::open(&path).unwrap();
        db.table_mut().claim(0, "alice", b"digest-a").unwrap();
        db.table_mut().claim(1, "bob", b"digest-b").unwrap();
        db.flush().unwrap();
        db.close().unwrap();

        // A fresh handle sees an identical table, slot for slot.
        let mut reopened = Database::open(&path).unwrap();
        reopened.load().unwrap();
        let rec = reopened.table().find_by_username("alice").unwrap();
        assert_eq!(rec.id(), 0);
        let rec = reopened.table().find_by_username("bob").unwrap();
        assert_eq!(rec.id(), 1);
        assert_eq!(reopened.table().occupied().count(), 2);
    }

    #[test]
    fn test_load_on_empty_file_is_corrupt_not_zero_filled() {
        let dir = tempfile::tempdir().unwrap();
        let mut db = Database::open(&store_path(&dir)).unwrap();

        let err = db.load().unwrap_err();
        assert!(matches!(
            err,
            StoreError::Corrupt {
                expected: TABLE_SIZE,
                actual: 0
            }
        ));
    }

    #[test]
    fn test_load_on_truncated_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        std::fs::write(&path, vec![0u8; TABLE_SIZE - 1]).unwrap();

        let mut db = Database::open(&path).unwrap();
        let err = db.load().unwrap_err();
        assert!(matches!(
            err,
            StoreError::Corrupt { expected, actual }
                if expected == TABLE_SIZE && actual == TABLE_SIZE - 1
        ));
    }

    #[test]
    fn test_file_size_is_constant() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let mut db = Database::open(&path).unwrap();
        db.flush().unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len() as usize, TABLE_SIZE);

        db.table_mut().claim(0, "alice", b"digest").unwrap();
        db.flush().unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len() as usize, TABLE_SIZE);
    }

    #[test]
    fn test_reset_overwrites_with_fresh_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let mut db = Database::open(&path).unwrap();
        db.table_mut().claim(0, "alice", b"digest").unwrap();
        db.flush().unwrap();
        db.reset().unwrap();
        db.close().unwrap();

        let mut reopened = Database::open(&path).unwrap();
        reopened.load().unwrap();
        assert_eq!(reopened.table().occupied().count(), 0);
    }
}
