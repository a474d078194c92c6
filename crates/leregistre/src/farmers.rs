// Farmer persistence operations

use crate::schema::Storage;
use rusqlite::{params, OptionalExtension, Result as SqliteResult};
use serde::{Deserialize, Serialize};

/// Farmer profile for database storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerRecord {
    /// Unique database ID
    pub id: Option<i64>,
    /// Farmer name
    pub name: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Village or region
    pub location: Option<String>,
    /// Creation timestamp, set by the database
    pub created_at: Option<String>,
}

/// Farmer store for CRUD operations
pub struct FarmerStore<'a> {
    storage: &'a mut Storage,
}

impl<'a> FarmerStore<'a> {
    /// Create a new farmer store
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Insert a farmer record
    pub fn insert(&mut self, record: &FarmerRecord) -> SqliteResult<i64> {
        self.storage.conn().execute(
            "INSERT INTO farmers (name, phone, location) VALUES (?1, ?2, ?3)",
            params![record.name, record.phone, record.location],
        )?;

        Ok(self.storage.conn().last_insert_rowid())
    }

    /// Get farmer by ID
    pub fn get(&self, id: i64) -> SqliteResult<Option<FarmerRecord>> {
        let mut stmt = self.storage.conn().prepare(
            "SELECT id, name, phone, location, created_at FROM farmers WHERE id = ?1",
        )?;

        stmt.query_row(params![id], Self::map_row).optional()
    }

    /// List all farmers in insertion order
    pub fn list(&self) -> SqliteResult<Vec<FarmerRecord>> {
        let mut stmt = self.storage.conn().prepare(
            "SELECT id, name, phone, location, created_at FROM farmers ORDER BY id",
        )?;

        let farmers = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(farmers)
    }

    /// Update a farmer record, returning whether the row existed
    pub fn update(&mut self, id: i64, record: &FarmerRecord) -> SqliteResult<bool> {
        let changed = self.storage.conn().execute(
            "UPDATE farmers SET name = ?1, phone = ?2, location = ?3 WHERE id = ?4",
            params![record.name, record.phone, record.location, id],
        )?;

        Ok(changed > 0)
    }

    /// Delete a farmer record, returning whether the row existed
    pub fn delete(&mut self, id: i64) -> SqliteResult<bool> {
        let changed = self
            .storage
            .conn()
            .execute("DELETE FROM farmers WHERE id = ?1", params![id])?;

        Ok(changed > 0)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> SqliteResult<FarmerRecord> {
        Ok(FarmerRecord {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            phone: row.get(2)?,
            location: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Storage;
    use tempfile::NamedTempFile;

    fn farmer(name: &str) -> FarmerRecord {
        FarmerRecord {
            id: None,
            name: name.to_string(),
            phone: Some("9876500000".to_string()),
            location: Some("Nashik".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_farmer_insert_and_get() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut storage = Storage::open(temp_file.path()).unwrap();
        let mut store = FarmerStore::new(&mut storage);

        let id = store.insert(&farmer("Ramesh")).unwrap();
        assert!(id > 0);

        let retrieved = store.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Ramesh");
        assert_eq!(retrieved.location.as_deref(), Some("Nashik"));
        assert!(retrieved.created_at.is_some());
    }

    #[test]
    fn test_farmer_list_order() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut storage = Storage::open(temp_file.path()).unwrap();
        let mut store = FarmerStore::new(&mut storage);

        store.insert(&farmer("Ramesh")).unwrap();
        store.insert(&farmer("Suresh")).unwrap();

        let farmers = store.list().unwrap();
        assert_eq!(farmers.len(), 2);
        assert_eq!(farmers[0].name, "Ramesh");
        assert_eq!(farmers[1].name, "Suresh");
    }

    #[test]
    fn test_farmer_update() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut storage = Storage::open(temp_file.path()).unwrap();
        let mut store = FarmerStore::new(&mut storage);

        let id = store.insert(&farmer("Ramesh")).unwrap();

        let mut updated = farmer("Ramesh Patil");
        updated.location = Some("Pune".to_string());
        assert!(store.update(id, &updated).unwrap());

        let retrieved = store.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Ramesh Patil");
        assert_eq!(retrieved.location.as_deref(), Some("Pune"));
    }

    #[test]
    fn test_farmer_delete() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut storage = Storage::open(temp_file.path()).unwrap();
        let mut store = FarmerStore::new(&mut storage);

        let id = store.insert(&farmer("Ramesh")).unwrap();
        assert!(store.delete(id).unwrap());
        assert!(store.get(id).unwrap().is_none());

        // Deleting again reports a missing row
        assert!(!store.delete(id).unwrap());
    }

    #[test]
    fn test_farmer_update_missing_row() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut storage = Storage::open(temp_file.path()).unwrap();
        let mut store = FarmerStore::new(&mut storage);

        assert!(!store.update(404, &farmer("Nobody")).unwrap());
    }
}
