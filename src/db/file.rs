use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{Database, DocumentStore, StoreError};

/// The whole document in a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, or create it from `seed` when the file does not exist.
    pub fn load_or_seed(&self, seed: impl FnOnce() -> Database) -> Result<Database, StoreError> {
        if self.path.exists() {
            return self.load();
        }
        let mut db = seed();
        db.reconcile_sequences();
        self.persist(&db)?;
        info!(
            path = %self.path.display(),
            menus = db.menus.len(),
            "Created store document from seed data"
        );
        Ok(db)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<Database, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let mut db: Database = if raw.trim().is_empty() {
            Database::default()
        } else {
            serde_json::from_str(&raw)?
        };
        db.reconcile_sequences();
        debug!(
            path = %self.path.display(),
            menus = db.menus.len(),
            cart = db.cart.len(),
            orders = db.orders.len(),
            "Loaded store document"
        );
        Ok(db)
    }

    fn persist(&self, db: &Database) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(db)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            match fs::create_dir_all(parent) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
                Err(e) => return Err(self.io_error(e)),
            }
        }
        fs::write(&self.path, body).map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CartItem, Menu};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn temp_path(tag: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "menu-mock-server-{}-{}-{}.json",
            tag,
            std::process::id(),
            n
        ))
    }

    #[test]
    fn seeds_missing_file_then_reloads() {
        let path = temp_path("seed");
        let store = JsonFileStore::new(&path);
        let db = store
            .load_or_seed(|| Database::with_menus(vec![Menu::new(1, "Soto", "s.jpg", 20)]))
            .unwrap();
        assert_eq!(db.menus.len(), 1);
        assert!(path.exists());

        // Second call reads the file instead of seeding again.
        let again = store.load_or_seed(Database::default).unwrap();
        assert_eq!(again, db);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn persist_writes_pretty_json() {
        let path = temp_path("persist");
        let store = JsonFileStore::new(&path);
        let mut db = Database::with_menus(vec![Menu::new(1, "Soto", "s.jpg", 20)]);
        let id = db.next_cart_id();
        db.cart.push(CartItem { id, menu_id: 1, quantity: 2, amount: 40 });
        store.persist(&db).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"menus\": ["));
        assert!(raw.contains("\"menuId\": 1"));
        assert_eq!(store.load().unwrap(), db);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn empty_file_loads_as_empty_document() {
        let path = temp_path("empty");
        fs::write(&path, "").unwrap();
        let db = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(db, Database::default());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn malformed_file_is_a_json_error() {
        let path = temp_path("bad");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
        fs::remove_file(&path).ok();
    }
}
