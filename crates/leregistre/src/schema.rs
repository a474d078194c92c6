// Storage schema and database management

use rusqlite::{Connection, Result as SqliteResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database path
    pub db_path: String,

    /// Whether to enable WAL mode
    pub wal_enabled: bool,

    /// Cache size in pages
    pub cache_size_pages: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: "lechamp.db".to_string(),
            wal_enabled: true,
            cache_size_pages: Some(10000),
        }
    }
}

/// Main storage interface
pub struct Storage {
    conn: Connection,
    config: StorageConfig,
}

impl Storage {
    /// Open storage with default config
    pub fn open<P: AsRef<Path>>(path: P) -> SqliteResult<Self> {
        Self::open_with_config(path, StorageConfig::default())
    }

    /// Open storage with custom config
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: StorageConfig) -> SqliteResult<Self> {
        let conn = Connection::open(path)?;

        // Enable WAL mode for better concurrency
        if config.wal_enabled {
            conn.pragma_update(None, "journal_mode", "WAL")?;
        }

        if let Some(cache_size) = config.cache_size_pages {
            conn.pragma_update(None, "cache_size", cache_size)?;
        }

        let mut storage = Self { conn, config };

        storage.initialize_schema()?;

        Ok(storage)
    }

    /// Initialize database schema
    fn initialize_schema(&mut self) -> SqliteResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS farmers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                phone TEXT,
                location TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS crop_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                farmer_id INTEGER,
                crop_name TEXT NOT NULL,
                yield_kg REAL,
                date_recorded TEXT,
                notes TEXT,
                FOREIGN KEY(farmer_id) REFERENCES farmers(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS soil_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                farmer_id INTEGER,
                ph REAL,
                nitrogen REAL,
                phosphorus REAL,
                potassium REAL,
                moisture REAL,
                soil_type TEXT,
                date_recorded TEXT,
                notes TEXT,
                FOREIGN KEY(farmer_id) REFERENCES farmers(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS water_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                farmer_id INTEGER,
                ph REAL,
                ec REAL,
                tds REAL,
                amount_l REAL,
                date_recorded TEXT,
                notes TEXT,
                FOREIGN KEY(farmer_id) REFERENCES farmers(id)
            )",
            [],
        )?;

        // Indexes for per-farmer lookups
        let record_indexes = [
            "CREATE INDEX IF NOT EXISTS idx_crop_records_farmer ON crop_records(farmer_id)",
            "CREATE INDEX IF NOT EXISTS idx_soil_records_farmer ON soil_records(farmer_id)",
            "CREATE INDEX IF NOT EXISTS idx_water_records_farmer ON water_records(farmer_id)",
        ];
        for index_sql in record_indexes {
            self.conn.execute(index_sql, [])?;
        }

        debug!("record schema initialized");

        Ok(())
    }

    /// Get the underlying connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Get mutable connection
    pub fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Close the storage connection and ensure WAL is checkpointed
    ///
    /// Checkpoints the WAL to the main database file so the `-wal` and
    /// `-shm` file locks are released before the connection goes away.
    pub fn close(&mut self) -> SqliteResult<()> {
        if self.config.wal_enabled {
            self.conn.execute("PRAGMA wal_checkpoint(TRUNCATE)", [])?;
        }
        Ok(())
    }
}
