//! Rule families and the evaluation entry point

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::advice::{AdviceRequest, AdviceResult, Recommendation};

/// Evaluate every rule family against a request.
///
/// The function is total: any combination of present and absent fields
/// produces a result, and `suggestions` is never empty. Families run in
/// a fixed order (acidity, moisture, crop, soil type), then the
/// balanced-soil fallback, then irrigation recency.
///
/// The fallback check looks only at the first four families. Irrigation
/// recency is evaluated after it on purpose, so a result can carry both
/// the balanced-soil entry and a recency entry. Downstream consumers
/// rely on that ordering; do not reorder the families.
pub fn evaluate(request: &AdviceRequest) -> AdviceResult {
    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    let mut suggestions = Vec::new();

    acidity_rules(request.soil_ph, &mut suggestions);
    moisture_rules(request.moisture, &mut suggestions);
    crop_rules(request.crop.as_deref(), &mut suggestions);
    soil_type_rules(request.soil_type.as_deref(), &mut suggestions);

    if suggestions.is_empty() {
        suggestions.push(Recommendation::new(
            "Soil looks balanced — maintain organic practices",
            "No specific issues detected from provided inputs",
            0.5,
        ));
    }

    recency_rules(request.days_since_last_water, &mut suggestions);

    debug!(suggestions = suggestions.len(), "advice evaluated");

    AdviceResult {
        generated_at,
        suggestions,
    }
}

/// Soil pH thresholds. At most one branch fires; the balanced band
/// (6.5..=8.0) stays silent.
fn acidity_rules(soil_ph: Option<f64>, out: &mut Vec<Recommendation>) {
    let Some(ph) = soil_ph else { return };

    if ph < 5.5 {
        out.push(Recommendation::new(
            "Apply lime (chalk) carefully",
            format!("soil pH={ph} (very acidic) — lime raises pH"),
            0.8,
        ));
    } else if ph < 6.5 {
        out.push(Recommendation::new(
            "Apply organic compost / jivamrut",
            format!("soil pH={ph} (slightly acidic) — organic matter buffers pH"),
            0.7,
        ));
    } else if ph > 8.0 {
        out.push(Recommendation::new(
            "Reduce alkalinity — use acidifying organic matter",
            format!("soil pH={ph} (alkaline)"),
            0.6,
        ));
    }
}

/// Moisture percentage thresholds; 20..=80 stays silent.
fn moisture_rules(moisture: Option<f64>, out: &mut Vec<Recommendation>) {
    let Some(moisture) = moisture else { return };

    if moisture < 20.0 {
        out.push(Recommendation::new(
            "Increase irrigation frequency",
            format!("moisture={moisture}% — soil is dry"),
            0.9,
        ));
    } else if moisture > 80.0 {
        out.push(Recommendation::new(
            "Improve drainage and reduce watering",
            format!("moisture={moisture}% — soil is waterlogged"),
            0.85,
        ));
    }
}

/// Crop-specific tips. Case-insensitive substring match, so "chili"
/// matches "Chili Pepper Hybrid". The two checks are independent and
/// may both fire.
fn crop_rules(crop: Option<&str>, out: &mut Vec<Recommendation>) {
    let Some(crop) = crop else { return };
    let crop = crop.to_lowercase();

    if crop.contains("mirchi") || crop.contains("chili") {
        out.push(Recommendation::new(
            "Mulch and drip irrigation",
            "Mirchi benefits from consistent moisture and mulching",
            0.8,
        ));
    }
    if crop.contains("methi") || crop.contains("fenugreek") {
        out.push(Recommendation::new(
            "Avoid over-watering; light irrigation",
            "Methi prefers well-drained soil",
            0.75,
        ));
    }
}

/// Soil-type tips, same containment matching as the crop rules.
fn soil_type_rules(soil_type: Option<&str>, out: &mut Vec<Recommendation>) {
    let Some(soil_type) = soil_type else { return };
    let soil_type = soil_type.to_lowercase();

    if soil_type.contains("sandy") {
        out.push(Recommendation::new(
            "Increase organic matter and mulch",
            "Sandy soils hold less water and nutrients",
            0.8,
        ));
    }
    if soil_type.contains("clay") {
        out.push(Recommendation::new(
            "Improve drainage, consider raised beds",
            "Clay soils may compact and hold too much water",
            0.75,
        ));
    }
}

/// Days since last watering. Runs after the fallback check so the
/// recency entry can accompany the balanced-soil entry.
fn recency_rules(days: Option<i64>, out: &mut Vec<Recommendation>) {
    let Some(days) = days else { return };

    if days >= 10 {
        out.push(Recommendation::new(
            "Immediate irrigation advised",
            format!("No watering for {days} days — risk of crop stress"),
            0.9,
        ));
    } else if days >= 5 {
        out.push(Recommendation::new(
            "Check soil moisture; consider irrigation",
            format!("{days} days since last water"),
            0.7,
        ));
    }
}
