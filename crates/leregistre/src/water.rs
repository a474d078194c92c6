// Water record persistence operations

use crate::schema::Storage;
use rusqlite::{params, OptionalExtension, Result as SqliteResult};
use serde::{Deserialize, Serialize};

/// Water record for database storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterRecord {
    /// Unique database ID
    pub id: Option<i64>,
    /// Owning farmer, if any
    pub farmer_id: Option<i64>,
    /// Water acidity (pH)
    pub ph: Option<f64>,
    /// Electrical conductivity
    pub ec: Option<f64>,
    /// Total dissolved solids
    pub tds: Option<f64>,
    /// Amount applied, in litres
    pub amount_l: Option<f64>,
    /// Free-text date the reading was taken
    pub date_recorded: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
}

/// Water record store for CRUD operations
pub struct WaterStore<'a> {
    storage: &'a mut Storage,
}

impl<'a> WaterStore<'a> {
    /// Create a new water store
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Insert a water record
    pub fn insert(&mut self, record: &WaterRecord) -> SqliteResult<i64> {
        self.storage.conn().execute(
            "INSERT INTO water_records (farmer_id, ph, ec, tds, amount_l, date_recorded, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.farmer_id,
                record.ph,
                record.ec,
                record.tds,
                record.amount_l,
                record.date_recorded,
                record.notes,
            ],
        )?;

        Ok(self.storage.conn().last_insert_rowid())
    }

    /// Get water record by ID
    pub fn get(&self, id: i64) -> SqliteResult<Option<WaterRecord>> {
        let mut stmt = self.storage.conn().prepare(
            "SELECT id, farmer_id, ph, ec, tds, amount_l, date_recorded, notes
             FROM water_records WHERE id = ?1",
        )?;

        stmt.query_row(params![id], Self::map_row).optional()
    }

    /// List all water records in insertion order
    pub fn list(&self) -> SqliteResult<Vec<WaterRecord>> {
        let mut stmt = self.storage.conn().prepare(
            "SELECT id, farmer_id, ph, ec, tds, amount_l, date_recorded, notes
             FROM water_records ORDER BY id",
        )?;

        let records = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(records)
    }

    /// Update a water record, returning whether the row existed
    pub fn update(&mut self, id: i64, record: &WaterRecord) -> SqliteResult<bool> {
        let changed = self.storage.conn().execute(
            "UPDATE water_records
             SET farmer_id = ?1, ph = ?2, ec = ?3, tds = ?4, amount_l = ?5, date_recorded = ?6, notes = ?7
             WHERE id = ?8",
            params![
                record.farmer_id,
                record.ph,
                record.ec,
                record.tds,
                record.amount_l,
                record.date_recorded,
                record.notes,
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    /// Delete a water record, returning whether the row existed
    pub fn delete(&mut self, id: i64) -> SqliteResult<bool> {
        let changed = self
            .storage
            .conn()
            .execute("DELETE FROM water_records WHERE id = ?1", params![id])?;

        Ok(changed > 0)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> SqliteResult<WaterRecord> {
        Ok(WaterRecord {
            id: Some(row.get(0)?),
            farmer_id: row.get(1)?,
            ph: row.get(2)?,
            ec: row.get(3)?,
            tds: row.get(4)?,
            amount_l: row.get(5)?,
            date_recorded: row.get(6)?,
            notes: row.get(7)?,
        })
    }
}
