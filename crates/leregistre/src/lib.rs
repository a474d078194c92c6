//! leregistre - Farm Record Storage
//!
//! *Le Registre* (The Register) - SQLite schema and CRUD stores for the
//! four LeChamp entities: farmers and their crop, soil, and water records.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Storage and retrieval of crop records.
pub mod crops;
/// Storage and retrieval of farmer profiles.
pub mod farmers;
/// Database schema and connection management.
pub mod schema;
/// Storage and retrieval of soil records.
pub mod soil;
/// Record counts for the dashboard.
pub mod stats;
/// Storage and retrieval of water records.
pub mod water;

pub use crops::{CropRecord, CropStore};
pub use farmers::{FarmerRecord, FarmerStore};
pub use schema::{Storage, StorageConfig};
pub use soil::{SoilRecord, SoilStore};
pub use stats::{record_counts, RecordCounts};
pub use water::{WaterRecord, WaterStore};
