// Crop record persistence operations

use crate::schema::Storage;
use rusqlite::{params, OptionalExtension, Result as SqliteResult};
use serde::{Deserialize, Serialize};

/// Crop record for database storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecord {
    /// Unique database ID
    pub id: Option<i64>,
    /// Owning farmer, if any
    pub farmer_id: Option<i64>,
    /// Name of the crop
    pub crop_name: String,
    /// Harvested yield in kilograms
    pub yield_kg: Option<f64>,
    /// Free-text date the reading was taken
    pub date_recorded: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
}

/// Crop record store for CRUD operations
pub struct CropStore<'a> {
    storage: &'a mut Storage,
}

impl<'a> CropStore<'a> {
    /// Create a new crop store
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Insert a crop record
    pub fn insert(&mut self, record: &CropRecord) -> SqliteResult<i64> {
        self.storage.conn().execute(
            "INSERT INTO crop_records (farmer_id, crop_name, yield_kg, date_recorded, notes)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.farmer_id,
                record.crop_name,
                record.yield_kg,
                record.date_recorded,
                record.notes,
            ],
        )?;

        Ok(self.storage.conn().last_insert_rowid())
    }

    /// Get crop record by ID
    pub fn get(&self, id: i64) -> SqliteResult<Option<CropRecord>> {
        let mut stmt = self.storage.conn().prepare(
            "SELECT id, farmer_id, crop_name, yield_kg, date_recorded, notes
             FROM crop_records WHERE id = ?1",
        )?;

        stmt.query_row(params![id], Self::map_row).optional()
    }

    /// List all crop records in insertion order
    pub fn list(&self) -> SqliteResult<Vec<CropRecord>> {
        let mut stmt = self.storage.conn().prepare(
            "SELECT id, farmer_id, crop_name, yield_kg, date_recorded, notes
             FROM crop_records ORDER BY id",
        )?;

        let records = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(records)
    }

    /// Update a crop record, returning whether the row existed
    pub fn update(&mut self, id: i64, record: &CropRecord) -> SqliteResult<bool> {
        let changed = self.storage.conn().execute(
            "UPDATE crop_records
             SET farmer_id = ?1, crop_name = ?2, yield_kg = ?3, date_recorded = ?4, notes = ?5
             WHERE id = ?6",
            params![
                record.farmer_id,
                record.crop_name,
                record.yield_kg,
                record.date_recorded,
                record.notes,
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    /// Delete a crop record, returning whether the row existed
    pub fn delete(&mut self, id: i64) -> SqliteResult<bool> {
        let changed = self
            .storage
            .conn()
            .execute("DELETE FROM crop_records WHERE id = ?1", params![id])?;

        Ok(changed > 0)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> SqliteResult<CropRecord> {
        Ok(CropRecord {
            id: Some(row.get(0)?),
            farmer_id: row.get(1)?,
            crop_name: row.get(2)?,
            yield_kg: row.get(3)?,
            date_recorded: row.get(4)?,
            notes: row.get(5)?,
        })
    }
}
