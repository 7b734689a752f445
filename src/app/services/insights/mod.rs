//! Derived views over the reconstructed record set
//!
//! All views are pure functions of the current record set (and, for the
//! urgent-reorder ranking, an externally supplied set of already-actioned
//! record ids). Nothing here owns state: views are recomputed on demand and
//! are safe to call repeatedly or concurrently against the same records.
//!
//! - [`rankings`] - Best-seller and urgency-scored reorder slices
//! - [`summary`] - Status partition counts and aggregate totals

pub mod rankings;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use rankings::{best_sellers, urgency_score, urgent_reorders};
pub use summary::InventorySummary;
