//! API response types
//!
//! These mirror the JSON shapes the dashboard frontend already consumes.
//! In particular a farmer's `location` column is exposed as `region`.

use leregistre::{CropRecord, FarmerRecord, RecordCounts, SoilRecord, WaterRecord};
use serde::{Deserialize, Serialize};

/// Farmer as returned by list/detail endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerResponse {
    /// Database ID
    pub id: i64,
    /// Farmer name
    pub name: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Village or region (the `location` column)
    pub region: Option<String>,
}

impl From<FarmerRecord> for FarmerResponse {
    fn from(record: FarmerRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            name: record.name,
            phone: record.phone,
            region: record.location,
        }
    }
}

/// Response for farmer create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerSaved {
    /// Database ID
    pub id: i64,
    /// Farmer name after the write
    pub name: String,
}

/// Crop record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropResponse {
    /// Database ID
    pub id: i64,
    /// Owning farmer, if any
    pub farmer_id: Option<i64>,
    /// Name of the crop
    pub crop_name: String,
    /// Harvested yield in kilograms
    pub yield_kg: Option<f64>,
    /// Date the reading was taken
    pub date_recorded: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
}

impl From<CropRecord> for CropResponse {
    fn from(record: CropRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            farmer_id: record.farmer_id,
            crop_name: record.crop_name,
            yield_kg: record.yield_kg,
            date_recorded: record.date_recorded,
            notes: record.notes,
        }
    }
}

/// Soil record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilResponse {
    /// Database ID
    pub id: i64,
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
    /// Date the reading was taken
    pub date_recorded: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
}

impl From<SoilRecord> for SoilResponse {
    fn from(record: SoilRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            farmer_id: record.farmer_id,
            ph: record.ph,
            nitrogen: record.nitrogen,
            phosphorus: record.phosphorus,
            potassium: record.potassium,
            moisture: record.moisture,
            soil_type: record.soil_type,
            date_recorded: record.date_recorded,
            notes: record.notes,
        }
    }
}

/// Water record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterResponse {
    /// Database ID
    pub id: i64,
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
    /// Date the reading was taken
    pub date_recorded: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
}

impl From<WaterRecord> for WaterResponse {
    fn from(record: WaterRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            farmer_id: record.farmer_id,
            ph: record.ph,
            ec: record.ec,
            tds: record.tds,
            amount_l: record.amount_l,
            date_recorded: record.date_recorded,
            notes: record.notes,
        }
    }
}

/// Response for record create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSaved {
    /// Database ID
    pub id: i64,
}

/// Response for delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deleted {
    /// Always true; failures surface as errors instead
    pub success: bool,
}

/// Dashboard record counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Number of farmer profiles
    pub farmers: i64,
    /// Number of crop records
    pub crops: i64,
    /// Number of soil records
    pub soil: i64,
    /// Number of water records
    pub water: i64,
}

impl From<RecordCounts> for StatsResponse {
    fn from(counts: RecordCounts) -> Self {
        Self {
            farmers: counts.farmers,
            crops: counts.crops,
            soil: counts.soil,
            water: counts.water,
        }
    }
}
