// Dashboard record counts

use crate::schema::Storage;
use rusqlite::Result as SqliteResult;
use serde::{Deserialize, Serialize};

/// Row counts for each record table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCounts {
    /// Number of farmer profiles
    pub farmers: i64,
    /// Number of crop records
    pub crops: i64,
    /// Number of soil records
    pub soil: i64,
    /// Number of water records
    pub water: i64,
}

/// Count the rows of every record table in one pass.
pub fn record_counts(storage: &Storage) -> SqliteResult<RecordCounts> {
    let count = |table: &str| -> SqliteResult<i64> {
        storage
            .conn()
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
    };

    Ok(RecordCounts {
        farmers: count("farmers")?,
        crops: count("crop_records")?,
        soil: count("soil_records")?,
        water: count("water_records")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::farmers::{FarmerRecord, FarmerStore};
    use crate::schema::Storage;
    use crate::soil::{SoilRecord, SoilStore};
    use tempfile::NamedTempFile;

    #[test]
    fn test_counts_on_empty_database() {
        let temp_file = NamedTempFile::new().unwrap();
        let storage = Storage::open(temp_file.path()).unwrap();

        let counts = record_counts(&storage).unwrap();
        assert_eq!(
            counts,
            RecordCounts {
                farmers: 0,
                crops: 0,
                soil: 0,
                water: 0
            }
        );
    }

    #[test]
    fn test_counts_track_inserts() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut storage = Storage::open(temp_file.path()).unwrap();

        FarmerStore::new(&mut storage)
            .insert(&FarmerRecord {
                id: None,
                name: "Ramesh".to_string(),
                phone: None,
                location: None,
                created_at: None,
            })
            .unwrap();

        let mut soil_store = SoilStore::new(&mut storage);
        for _ in 0..3 {
            soil_store
                .insert(&SoilRecord {
                    id: None,
                    farmer_id: Some(1),
                    ph: Some(6.5),
                    nitrogen: None,
                    phosphorus: None,
                    potassium: None,
                    moisture: None,
                    soil_type: None,
                    date_recorded: None,
                    notes: None,
                })
                .unwrap();
        }

        let counts = record_counts(&storage).unwrap();
        assert_eq!(counts.farmers, 1);
        assert_eq!(counts.soil, 3);
        assert_eq!(counts.crops, 0);
    }
}
