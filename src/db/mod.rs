//! The document store: one JSON document with `menus`, `cart` and `orders`
//! collections, loaded once and written back in full after every mutation.

pub mod cart;
mod file;
pub mod menus;
pub mod orders;

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{CartItem, Menu, Order};

pub use file::JsonFileStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid store document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence seam between the dispatcher and wherever the document lives.
pub trait DocumentStore: Send + Sync {
    fn load(&self) -> Result<Database, StoreError>;
    /// Synchronous; blocks the calling async worker until the write completes.
    fn persist(&self, db: &Database) -> Result<(), StoreError>;
}

// ── Document ──────────────────────────────────────────────────────────────────

/// Last id handed out per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequences {
    #[serde(default)]
    pub cart: u64,
    #[serde(default)]
    pub orders: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub menus: Vec<Menu>,
    #[serde(default)]
    pub cart: Vec<CartItem>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub sequences: Sequences,
    /// Other top-level collections, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Database {
    pub fn with_menus(menus: Vec<Menu>) -> Self {
        Self {
            menus,
            ..Self::default()
        }
    }

    /// Raise every counter to at least the largest id already present, so a
    /// document edited by hand never hands out a duplicate id.
    pub fn reconcile_sequences(&mut self) {
        let max_cart = self.cart.iter().map(|c| c.id).max().unwrap_or(0);
        let max_order = self.orders.iter().map(|o| o.id).max().unwrap_or(0);
        self.sequences.cart = self.sequences.cart.max(max_cart);
        self.sequences.orders = self.sequences.orders.max(max_order);
    }

    pub fn next_cart_id(&mut self) -> u64 {
        self.sequences.cart += 1;
        self.sequences.cart
    }

    pub fn next_order_id(&mut self) -> u64 {
        self.sequences.orders += 1;
        self.sequences.orders
    }

    /// Whole document as JSON, keyed by collection name.
    pub fn to_value(&self) -> Result<Value, StoreError> {
        Ok(serde_json::to_value(self)?)
    }
}

// ── In-memory store ───────────────────────────────────────────────────────────

/// Keeps the last persisted snapshot in memory; nothing touches the disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<Database>,
}

impl MemoryStore {
    pub fn new(db: Database) -> Self {
        Self {
            snapshot: Mutex::new(db),
        }
    }

    pub fn snapshot(&self) -> Database {
        self.snapshot
            .lock()
            .map(|db| db.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Database, StoreError> {
        let mut db = self.snapshot();
        db.reconcile_sequences();
        Ok(db)
    }

    fn persist(&self, db: &Database) -> Result<(), StoreError> {
        match self.snapshot.lock() {
            Ok(mut guard) => *guard = db.clone(),
            Err(poisoned) => *poisoned.into_inner() = db.clone(),
        }
        Ok(())
    }
}
