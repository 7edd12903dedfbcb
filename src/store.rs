//! Rate store client over sled.
//!
//! Keys are currency codes, values are the rate's decimal text representation.
//! Opening the database doubles as the startup connectivity probe.

use std::collections::BTreeMap;
use std::path::Path;

use sled::Batch;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(#[from] sled::Error),
    #[error("corrupt rate value for '{key}': {reason}")]
    Corrupt { key: String, reason: String },
}

/// Handle to the exchange-rate key-value store.
#[derive(Clone, Debug)]
pub struct RateStore {
    db: sled::Db,
}

impl RateStore {
    /// Open (or create) the store at `path`. Failure here is fatal to startup.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// In-memory store backed by a temp file, dropped on close. Test use only,
    /// but kept in the non-test API so integration suites can reach it.
    pub fn temporary() -> Result<Self, StoreError> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    /// Look up the rate for a currency code. Absence is `Ok(None)`, never an error.
    pub fn get(&self, code: &str) -> Result<Option<f64>, StoreError> {
        let Some(raw) = self.db.get(code.as_bytes())? else {
            return Ok(None);
        };
        let text = std::str::from_utf8(&raw).map_err(|e| StoreError::Corrupt {
            key: code.to_string(),
            reason: e.to_string(),
        })?;
        let rate = text.parse::<f64>().map_err(|e| StoreError::Corrupt {
            key: code.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(rate))
    }

    /// Write a single rate, overwriting any existing value for the code.
    pub fn put(&self, code: &str, rate: f64) -> Result<(), StoreError> {
        self.db.insert(code.as_bytes(), rate.to_string().as_bytes())?;
        Ok(())
    }

    /// Upsert every entry in `rates`, leaving other keys untouched.
    /// All writes land in one batch so readers see the update as a unit.
    pub fn merge_all(&self, rates: &BTreeMap<String, f64>) -> Result<(), StoreError> {
        let mut batch = Batch::default();
        for (code, rate) in rates {
            batch.insert(code.as_bytes(), rate.to_string().as_bytes());
        }
        self.db.apply_batch(batch)?;
        Ok(())
    }

    /// Replace the entire store contents with `rates`.
    ///
    /// Removals of stale keys and inserts of the new payload go into a single
    /// batch, so a concurrent reader sees either the old mapping or the new
    /// one, never an empty or half-written store.
    pub fn replace_all(&self, rates: &BTreeMap<String, f64>) -> Result<(), StoreError> {
        let mut batch = Batch::default();
        for kv in self.db.iter() {
            let (key, _) = kv?;
            let keep = std::str::from_utf8(&key)
                .map(|k| rates.contains_key(k))
                .unwrap_or(false);
            if !keep {
                batch.remove(key);
            }
        }
        for (code, rate) in rates {
            batch.insert(code.as_bytes(), rate.to_string().as_bytes());
        }
        self.db.apply_batch(batch)?;
        Ok(())
    }

    /// Number of stored rate entries.
    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Liveness probe: force a sync with the backing storage.
    pub fn ping(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }

    /// Flush pending writes, used on shutdown.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }
}
