// Passfile — Fixed-capacity slot table
//
// The in-memory image of the store: exactly CAPACITY record slots, indexed
// 0..CAPACITY. The length never changes — registration claims the lowest
// free slot in place, and a reset replaces the whole table. Lookup is a
// linear scan over occupied slots in index order.

use super::error::StoreError;
use super::record::{Record, CAPACITY, RECORD_SIZE, TABLE_SIZE};

/// Fixed-length ordered sequence of record slots. Slot index doubles as the
/// record's stable id.
#[derive(Debug)]
pub struct Table {
    slots: Vec<Record>,
}

impl Table {
    /// A fresh table: CAPACITY slots, each unoccupied with `id == index`.
    pub fn new() -> Self {
        let slots = (0..CAPACITY).map(|i| Record::empty(i as u32)).collect();
        Self { slots }
    }

    /// Number of slots. Constant; exposed for callers that report capacity.
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// The record at `index`, bounds-checked.
    pub fn slot(&self, index: usize) -> Result<&Record, StoreError> {
        self.slots.get(index).ok_or(StoreError::OutOfRange {
            index,
            capacity: CAPACITY,
        })
    }

    /// Lowest unoccupied slot index, or `TableFull` when every slot is
    /// claimed.
    pub fn first_free(&self) -> Result<usize, StoreError> {
        self.slots
            .iter()
            .position(|rec| !rec.is_occupied())
            .ok_or(StoreError::TableFull)
    }

    /// First occupied slot whose username equals `name`, byte-for-byte.
    /// The scan is lazy and stops at the first match.
    pub fn find_by_username(&self, name: &str) -> Result<&Record, StoreError> {
        self.occupied()
            .find(|rec| rec.username_bytes() == name.as_bytes())
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Claim the slot at `index` for a registration. The slot's id is left
    /// untouched.
    pub fn claim(&mut self, index: usize, username: &str, digest: &[u8]) -> Result<(), StoreError> {
        let rec = self.slots.get_mut(index).ok_or(StoreError::OutOfRange {
            index,
            capacity: CAPACITY,
        })?;
        rec.fill(username, digest);
        Ok(())
    }

    /// Occupied records in index order. Lazy; each call yields a fresh,
    /// restartable iterator.
    pub fn occupied(&self) -> impl Iterator<Item = &Record> {
        self.slots.iter().filter(|rec| rec.is_occupied())
    }

    /// Serialize the whole table as one contiguous image, record by record
    /// from slot 0.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; TABLE_SIZE];
        for (rec, chunk) in self.slots.iter().zip(buf.chunks_exact_mut(RECORD_SIZE)) {
            rec.encode_into(chunk);
        }
        buf
    }

    /// Deserialize a persisted image. The image must be exactly `TABLE_SIZE`
    /// bytes — anything shorter (or longer) is a corrupt store, never
    /// zero-filled or truncated into shape.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        if bytes.len() != TABLE_SIZE {
            return Err(StoreError::Corrupt {
                expected: TABLE_SIZE,
                actual: bytes.len(),
            });
        }
        let slots = bytes.chunks_exact(RECORD_SIZE).map(Record::decode).collect();
        Ok(Self { slots })
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
