//! Best-seller and urgent-reorder rankings

use crate::app::models::InventoryRecord;
use crate::constants::{URGENCY_SALES_EXPONENT, URGENCY_SEASONAL_BOOST};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// Top sellers by current-week sales, descending
///
/// Ties keep record order (stable sort), so repeated calls on the same set
/// return the same slice.
pub fn best_sellers(records: &[InventoryRecord], limit: usize) -> Vec<&InventoryRecord> {
    let mut ranked: Vec<&InventoryRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.current_week_sales.cmp(&a.current_week_sales));
    ranked.truncate(limit);
    ranked
}

/// Composite urgency score for a record
///
/// Sales velocity is over-weighted by the exponent; the half-unit added to
/// stock keeps zero-stock items finite while still dominating the ranking;
/// the seasonal boost reinforces the in-season filter applied upstream.
pub fn urgency_score(record: &InventoryRecord) -> f64 {
    let velocity = (record.current_week_sales as f64).powf(URGENCY_SALES_EXPONENT);
    let scarcity = record.current_stock as f64 + 0.5;
    let seasonal = if record.is_seasonal_fit {
        URGENCY_SEASONAL_BOOST
    } else {
        1.0
    };

    velocity / scarcity * seasonal
}

/// Most urgent reorder candidates, descending by urgency score
///
/// Only records with current sales, an in-season SKU, and an id outside the
/// actioned set participate. Equal scores keep record order, making the
/// ranking deterministic across re-runs.
pub fn urgent_reorders<'a>(
    records: &'a [InventoryRecord],
    actioned: &HashSet<String>,
    limit: usize,
) -> Vec<&'a InventoryRecord> {
    let mut scored: Vec<(&InventoryRecord, f64)> = records
        .iter()
        .filter(|r| r.current_week_sales > 0 && r.is_seasonal_fit && !actioned.contains(&r.id))
        .map(|r| (r, urgency_score(r)))
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    let candidates = scored.len();
    scored.truncate(limit);

    debug!(
        "Urgency ranking: {} candidates after filtering, {} returned",
        candidates,
        scored.len()
    );

    scored.into_iter().map(|(r, _)| r).collect()
}
