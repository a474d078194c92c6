// Soil record persistence operations

use crate::schema::Storage;
use rusqlite::{params, OptionalExtension, Result as SqliteResult};
use serde::{Deserialize, Serialize};

/// Soil record for database storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilRecord {
    /// Unique database ID
    pub id: Option<i64>,
    /// Owning farmer, if any
    pub farmer_id: Option<i64>,
    /// Soil acidity (pH)
    pub ph: Option<f64>,
    /// Nitrogen reading
    pub nitrogen: Option<f64>,
    /// Phosphorus reading
    pub phosphorus: Option<f64>,
    /// Potassium reading
    pub potassium: Option<f64>,
    /// Moisture percentage
    pub moisture: Option<f64>,
    /// Free-text soil type
    pub soil_type: Option<String>,
    /// Free-text date the reading was taken
    pub date_recorded: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
}

/// Soil record store for CRUD operations
pub struct SoilStore<'a> {
    storage: &'a mut Storage,
}

impl<'a> SoilStore<'a> {
    /// Create a new soil store
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Insert a soil record
    pub fn insert(&mut self, record: &SoilRecord) -> SqliteResult<i64> {
        self.storage.conn().execute(
            "INSERT INTO soil_records (farmer_id, ph, nitrogen, phosphorus, potassium, moisture, soil_type, date_recorded, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                record.farmer_id,
                record.ph,
                record.nitrogen,
                record.phosphorus,
                record.potassium,
                record.moisture,
                record.soil_type,
                record.date_recorded,
                record.notes,
            ],
        )?;

        Ok(self.storage.conn().last_insert_rowid())
    }

    /// Get soil record by ID
    pub fn get(&self, id: i64) -> SqliteResult<Option<SoilRecord>> {
        let mut stmt = self.storage.conn().prepare(
            "SELECT id, farmer_id, ph, nitrogen, phosphorus, potassium, moisture, soil_type, date_recorded, notes
             FROM soil_records WHERE id = ?1",
        )?;

        stmt.query_row(params![id], Self::map_row).optional()
    }

    /// List all soil records in insertion order
    pub fn list(&self) -> SqliteResult<Vec<SoilRecord>> {
        let mut stmt = self.storage.conn().prepare(
            "SELECT id, farmer_id, ph, nitrogen, phosphorus, potassium, moisture, soil_type, date_recorded, notes
             FROM soil_records ORDER BY id",
        )?;

        let records = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(records)
    }

    /// Update a soil record, returning whether the row existed
    pub fn update(&mut self, id: i64, record: &SoilRecord) -> SqliteResult<bool> {
        let changed = self.storage.conn().execute(
            "UPDATE soil_records
             SET farmer_id = ?1, ph = ?2, nitrogen = ?3, phosphorus = ?4, potassium = ?5,
                 moisture = ?6, soil_type = ?7, date_recorded = ?8, notes = ?9
             WHERE id = ?10",
            params![
                record.farmer_id,
                record.ph,
                record.nitrogen,
                record.phosphorus,
                record.potassium,
                record.moisture,
                record.soil_type,
                record.date_recorded,
                record.notes,
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    /// Delete a soil record, returning whether the row existed
    pub fn delete(&mut self, id: i64) -> SqliteResult<bool> {
        let changed = self
            .storage
            .conn()
            .execute("DELETE FROM soil_records WHERE id = ?1", params![id])?;

        Ok(changed > 0)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> SqliteResult<SoilRecord> {
        Ok(SoilRecord {
            id: Some(row.get(0)?),
            farmer_id: row.get(1)?,
            ph: row.get(2)?,
            nitrogen: row.get(3)?,
            phosphorus: row.get(4)?,
            potassium: row.get(5)?,
            moisture: row.get(6)?,
            soil_type: row.get(7)?,
            date_recorded: row.get(8)?,
            notes: row.get(9)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Storage;
    use tempfile::NamedTempFile;

    fn soil_reading() -> SoilRecord {
        SoilRecord {
            id: None,
            farmer_id: None,
            ph: Some(6.1),
            nitrogen: Some(42.0),
            phosphorus: Some(18.0),
            potassium: Some(140.0),
            moisture: Some(31.0),
            soil_type: Some("sandy loam".to_string()),
            date_recorded: Some("2025-06-15".to_string()),
            notes: Some("post-monsoon sample".to_string()),
        }
    }

    #[test]
    fn test_soil_insert_and_get() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut storage = Storage::open(temp_file.path()).unwrap();
        let mut store = SoilStore::new(&mut storage);

        let id = store.insert(&soil_reading()).unwrap();
        let retrieved = store.get(id).unwrap().unwrap();
        assert_eq!(retrieved.ph, Some(6.1));
        assert_eq!(retrieved.soil_type.as_deref(), Some("sandy loam"));
    }

    #[test]
    fn test_soil_sparse_record() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut storage = Storage::open(temp_file.path()).unwrap();
        let mut store = SoilStore::new(&mut storage);

        // Readings arrive piecemeal in practice; every column is nullable
        let record = SoilRecord {
            id: None,
            farmer_id: None,
            ph: Some(7.2),
            nitrogen: None,
            phosphorus: None,
            potassium: None,
            moisture: None,
            soil_type: None,
            date_recorded: None,
            notes: None,
        };

        let id = store.insert(&record).unwrap();
        let retrieved = store.get(id).unwrap().unwrap();
        assert_eq!(retrieved.ph, Some(7.2));
        assert!(retrieved.nitrogen.is_none());
    }

    #[test]
    fn test_soil_update_and_delete() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut storage = Storage::open(temp_file.path()).unwrap();
        let mut store = SoilStore::new(&mut storage);

        let id = store.insert(&soil_reading()).unwrap();

        let mut updated = soil_reading();
        updated.moisture = Some(18.0);
        assert!(store.update(id, &updated).unwrap());
        assert_eq!(store.get(id).unwrap().unwrap().moisture, Some(18.0));

        assert!(store.delete(id).unwrap());
        assert!(!store.delete(id).unwrap());
    }
}
