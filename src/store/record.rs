// Passfile — Credential record model and binary layout
//
// SECURITY: The `digest` field is intentionally private. It is never
// included in Debug output, log messages, or listing output. Access is
// via `digest()`, which exists for verification only.
//
// A record is serialized field by field at fixed offsets — the on-disk
// format is a contract, not a memory dump.

use std::borrow::Cow;
use std::fmt;

// ─── Layout Constants ────────────────────────────────────────────────────────

/// Number of slots in a table. Fixed for the life of the store file.
pub const CAPACITY: usize = 100;

/// Width of the username field: 10 characters plus NUL padding.
pub const USERNAME_SIZE: usize = 11;

/// Width of the digest field. Sized for SHA-256; shorter hash outputs are
/// NUL-padded up to this width.
pub const DIGEST_SIZE: usize = 32;

const ID_SIZE: usize = 4;
const OCCUPIED_SIZE: usize = 1;

const ID_OFFSET: usize = 0;
const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
const DIGEST_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;
const OCCUPIED_OFFSET: usize = DIGEST_OFFSET + DIGEST_SIZE;

/// Serialized width of one record: id (4, little-endian) + username (11) +
/// digest (32) + occupied flag (1).
pub const RECORD_SIZE: usize = ID_SIZE + USERNAME_SIZE + DIGEST_SIZE + OCCUPIED_SIZE;

/// Serialized width of the whole table. The store file is always exactly
/// this long.
pub const TABLE_SIZE: usize = CAPACITY * RECORD_SIZE;

// ─── Record ──────────────────────────────────────────────────────────────────

/// One credential slot. Either fully empty (`occupied == false`, username and
/// digest all zero) or fully populated — no partial state escapes `fill`.
#[derive(Clone, PartialEq, Eq)]
pub struct Record {
    id: u32,
    username: [u8; USERNAME_SIZE],
    /// The password digest — NEVER printed, logged, or Debug-displayed.
    digest: [u8; DIGEST_SIZE],
    occupied: bool,
}

impl Record {
    /// An unoccupied slot. The id is the slot's table index and is never
    /// reassigned afterward.
    pub(crate) fn empty(id: u32) -> Self {
        Self {
            id,
            username: [0u8; USERNAME_SIZE],
            digest: [0u8; DIGEST_SIZE],
            occupied: false,
        }
    }

    /// Populate the slot with a registration. Both fields are NUL-padded to
    /// their fixed widths; the id is left untouched.
    pub(crate) fn fill(&mut self, username: &str, digest: &[u8]) {
        self.username = to_fixed(username.as_bytes());
        self.digest = pad_digest(digest);
        self.occupied = true;
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// The logical username bytes, without trailing NUL padding. Lookup
    /// compares these byte-for-byte against the query.
    pub fn username_bytes(&self) -> &[u8] {
        let end = self
            .username
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(USERNAME_SIZE);
        &self.username[..end]
    }

    /// The username as text, for presentation.
    pub fn username(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.username_bytes())
    }

    /// The full padded digest field, for verification only.
    pub fn digest(&self) -> &[u8; DIGEST_SIZE] {
        &self.digest
    }

    /// Serialize into `buf`, which must be exactly `RECORD_SIZE` bytes.
    pub(crate) fn encode_into(&self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len(), RECORD_SIZE);
        buf[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());
        buf[USERNAME_OFFSET..DIGEST_OFFSET].copy_from_slice(&self.username);
        buf[DIGEST_OFFSET..OCCUPIED_OFFSET].copy_from_slice(&self.digest);
        buf[OCCUPIED_OFFSET] = self.occupied as u8;
    }

    /// Deserialize from `buf`, which must be exactly `RECORD_SIZE` bytes.
    pub(crate) fn decode(buf: &[u8]) -> Self {
        debug_assert_eq!(buf.len(), RECORD_SIZE);
        let mut id_bytes = [0u8; ID_SIZE];
        id_bytes.copy_from_slice(&buf[ID_OFFSET..ID_OFFSET + ID_SIZE]);

        let mut username = [0u8; USERNAME_SIZE];
        username.copy_from_slice(&buf[USERNAME_OFFSET..DIGEST_OFFSET]);

        let mut digest = [0u8; DIGEST_SIZE];
        digest.copy_from_slice(&buf[DIGEST_OFFSET..OCCUPIED_OFFSET]);

        Self {
            id: u32::from_le_bytes(id_bytes),
            username,
            digest,
            occupied: buf[OCCUPIED_OFFSET] != 0,
        }
    }
}

/// Custom Debug implementation that NEVER reveals the digest.
impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("id", &self.id)
            .field("username", &self.username())
            .field("digest", &"[REDACTED]")
            .field("occupied", &self.occupied)
            .finish()
    }
}

/// Human-readable slot summary, without the digest.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:>3}] {}", self.id, self.username())
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Copy `input` into a zeroed fixed-width buffer, truncating if longer.
fn to_fixed<const N: usize>(input: &[u8]) -> [u8; N] {
    let mut buf = [0u8; N];
    let len = input.len().min(N);
    buf[..len].copy_from_slice(&input[..len]);
    buf
}

/// NUL-pad a hash output to the record's fixed digest width. Verification
/// pads the computed digest the same way before comparing.
pub(crate) fn pad_digest(digest: &[u8]) -> [u8; DIGEST_SIZE] {
    to_fixed(digest)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants_are_stable() {
        // The on-disk contract: 48-byte records, 4800-byte file.
        assert_eq!(RECORD_SIZE, 48);
        assert_eq!(TABLE_SIZE, 4800);
        assert_eq!(OCCUPIED_OFFSET + OCCUPIED_SIZE, RECORD_SIZE);
    }

    #[test]
    fn test_empty_record_is_fully_zeroed() {
        let rec = Record::empty(7);
        assert_eq!(rec.id(), 7);
        assert!(!rec.is_occupied());
        assert!(rec.username_bytes().is_empty());
        assert_eq!(rec.digest(), &[0u8; DIGEST_SIZE]);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let mut rec = Record::empty(42);
        rec.fill("alice", b"some-32-byte-digest-lookalike!!!");

        let mut buf = [0u8; RECORD_SIZE];
        rec.encode_into(&mut buf);
        let decoded = Record::decode(&buf);

        assert_eq!(decoded, rec);
        assert_eq!(decoded.id(), 42);
        assert_eq!(decoded.username_bytes(), b"alice");
        assert!(decoded.is_occupied());
    }

    #[test]
    fn test_fill_pads_short_fields_with_nul() {
        let mut rec = Record::empty(0);
        rec.fill("bob", b"short");

        let mut buf = [0u8; RECORD_SIZE];
        rec.encode_into(&mut buf);

        // Username: 3 bytes of text, 8 bytes of padding.
        assert_eq!(&buf[USERNAME_OFFSET..USERNAME_OFFSET + 3], b"bob");
        assert!(buf[USERNAME_OFFSET + 3..DIGEST_OFFSET].iter().all(|&b| b == 0));

        // Digest: 5 bytes of hash, 27 bytes of padding.
        assert_eq!(&buf[DIGEST_OFFSET..DIGEST_OFFSET + 5], b"short");
        assert!(buf[DIGEST_OFFSET + 5..OCCUPIED_OFFSET].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_debug_redacts_digest() {
        let mut rec = Record::empty(1);
        rec.fill("carol", b"hunter2-digest-material-0123456");

        let debug_output = format!("{:?}", rec);
        assert!(
            debug_output.contains("[REDACTED]"),
            "Debug output must contain [REDACTED]"
        );
        assert!(
            !debug_output.contains("hunter2"),
            "Debug output must NEVER contain digest bytes"
        );
    }

    #[test]
    fn test_display_shows_id_and_username_only() {
        let mut rec = Record::empty(3);
        rec.fill("dave", b"digest-bytes");

        let display_output = format!("{}", rec);
        assert!(display_output.contains("dave"));
        assert!(!display_output.contains("digest-bytes"));
    }

    #[test]
    fn test_decode_treats_any_nonzero_flag_as_occupied() {
        let mut buf = [0u8; RECORD_SIZE];
        buf[OCCUPIED_OFFSET] = 0xff;
        assert!(Record::decode(&buf).is_occupied());
    }
}
