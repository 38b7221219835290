//! Budget state record
//!
//! The whole durable state is two amounts: the monthly budget and what has
//! been spent. Records are written as
//!
//! ```text
//! magic "FDDB" | version u8 | monthly_budget i64 LE | spent i64 LE
//! ```
//!
//! Untagged legacy records (two native-endian integers, 32 or 64 bit wide,
//! budget first) are still accepted on read and replaced by the tagged layout
//! on the next write.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FddError, FddResult};
use crate::models::{BudgetPeriod, Money};

use super::file_io::{read_bytes, write_bytes_atomic};

/// Leading tag of a versioned record
pub const MAGIC: [u8; 4] = *b"FDDB";

/// Current record layout version
pub const FORMAT_VERSION: u8 = 1;

const HEADER_LEN: usize = MAGIC.len() + 1;

/// Size of a versioned record in bytes
pub const RECORD_LEN: usize = HEADER_LEN + 2 * std::mem::size_of::<i64>();

const LEGACY_I32_LEN: usize = 2 * std::mem::size_of::<i32>();
const LEGACY_I64_LEN: usize = 2 * std::mem::size_of::<i64>();

/// Loads and stores the budget record at a fixed path
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store for the record at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the record
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a record has been written yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the record
    ///
    /// A missing file is a persistence error: there is no budget to spend
    /// against until a month has been initialized.
    pub fn load(&self) -> FddResult<BudgetPeriod> {
        let bytes = read_bytes(&self.path)?;
        let period = decode(&bytes).map_err(|reason| FddError::corrupt(&self.path, reason))?;
        debug!(
            path = %self.path.display(),
            monthly_budget = period.monthly_budget.cents(),
            spent = period.spent.cents(),
            "loaded budget state"
        );
        Ok(period)
    }

    /// Write the record, replacing any previous one in a single atomic step
    pub fn save(&self, period: &BudgetPeriod) -> FddResult<()> {
        write_bytes_atomic(&self.path, &encode(period))?;
        debug!(
            path = %self.path.display(),
            monthly_budget = period.monthly_budget.cents(),
            spent = period.spent.cents(),
            "saved budget state"
        );
        Ok(())
    }
}

/// Serialize a period into the versioned record layout
pub fn encode(period: &BudgetPeriod) -> [u8; RECORD_LEN] {
    let mut buf = [0u8; RECORD_LEN];
    buf[..MAGIC.len()].copy_from_slice(&MAGIC);
    buf[MAGIC.len()] = FORMAT_VERSION;
    buf[HEADER_LEN..HEADER_LEN + 8].copy_from_slice(&period.monthly_budget.cents().to_le_bytes());
    buf[HEADER_LEN + 8..].copy_from_slice(&period.spent.cents().to_le_bytes());
    buf
}

/// Parse a record in either the versioned or a legacy layout
pub fn decode(bytes: &[u8]) -> Result<BudgetPeriod, String> {
    let (monthly_budget, spent) = match bytes.len() {
        RECORD_LEN if bytes.starts_with(&MAGIC) => {
            let version = bytes[MAGIC.len()];
            if version != FORMAT_VERSION {
                return Err(format!("unsupported record version {}", version));
            }
            let body = &bytes[HEADER_LEN..];
            (read_i64(&body[..8], i64::from_le_bytes), read_i64(&body[8..], i64::from_le_bytes))
        }
        LEGACY_I32_LEN => {
            let budget = i32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            let spent = i32::from_ne_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
            (i64::from(budget), i64::from(spent))
        }
        LEGACY_I64_LEN => (
            read_i64(&bytes[..8], i64::from_ne_bytes),
            read_i64(&bytes[8..], i64::from_ne_bytes),
        ),
        RECORD_LEN => return Err("missing record tag".to_string()),
        other => return Err(format!("unexpected record size of {} bytes", other)),
    };

    BudgetPeriod::new(Money::from_cents(monthly_budget), Money::from_cents(spent))
        .map_err(|e| e.to_string())
}

fn read_i64(bytes: &[u8], convert: fn([u8; 8]) -> i64) -> i64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[..8]);
    convert(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn period(budget: i64, spent: i64) -> BudgetPeriod {
        BudgetPeriod::new(Money::from_cents(budget), Money::from_cents(spent)).unwrap()
    }

    #[test]
    fn test_record_layout() {
        let bytes = encode(&period(3100, 1550));

        assert_eq!(bytes.len(), 21);
        assert_eq!(&bytes[..4], b"FDDB");
        assert_eq!(bytes[4], 1);
        assert_eq!(&bytes[5..13], &3100i64.to_le_bytes());
        assert_eq!(&bytes[13..], &1550i64.to_le_bytes());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = StateStore::new(temp_dir.path().join("budget.dat"));

        assert!(!store.exists());
        store.save(&period(2800, 420)).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), period(2800, 420));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = StateStore::new(temp_dir.path().join("budget.dat"));

        let err = store.load().unwrap_err();
        assert!(matches!(err, FddError::PersistenceUnavailable { .. }));
    }

    #[test]
    fn test_legacy_i32_record() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&3000i32.to_ne_bytes());
        bytes.extend_from_slice(&250i32.to_ne_bytes());

        assert_eq!(decode(&bytes).unwrap(), period(3000, 250));
    }

    #[test]
    fn test_legacy_i64_record() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&3000i64.to_ne_bytes());
        bytes.extend_from_slice(&250i64.to_ne_bytes());

        assert_eq!(decode(&bytes).unwrap(), period(3000, 250));
    }

    #[test]
    fn test_rejects_bad_records() {
        assert!(decode(&[]).is_err());
        assert!(decode(&[0u8; 5]).is_err());
        assert!(decode(&[0u8; RECORD_LEN]).unwrap_err().contains("tag"));

        let mut wrong_version = encode(&period(1, 0));
        wrong_version[4] = 9;
        assert!(decode(&wrong_version).unwrap_err().contains("version 9"));
    }

    #[test]
    fn test_rejects_negative_fields() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(-5i32).to_ne_bytes());
        bytes.extend_from_slice(&0i32.to_ne_bytes());

        assert!(decode(&bytes).is_err());
    }

    #[test]
    fn test_corrupt_file_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.dat");
        std::fs::write(&path, b"garbage").unwrap();

        let err = StateStore::new(&path).load().unwrap_err();
        assert!(matches!(err, FddError::CorruptState { .. }));
        assert!(err.to_string().contains("budget.dat"));
    }
}
