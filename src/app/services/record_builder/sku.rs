//! SKU metadata decoding
//!
//! The catalogue encodes product metadata at fixed positions within the
//! 15-character SKU: the season code at position 3 and the sub-category
//! code at positions 5-6. The sub-category maps to an item type and its
//! replenishment lead time through the tables in [`crate::constants`].

use crate::app::models::{ItemType, Season, SkuMeta};
use crate::constants::{
    FALLBACK_LEAD_TIME_DAYS, GENERAL_LEAD_TIME_DAYS, OUTER_LEAD_TIME_DAYS,
    OUTER_SUBCATEGORY_CODES, PADDING_LEAD_TIME_DAYS, PADDING_SUBCATEGORY_CODES,
    SKU_MIN_DECODE_LEN, SKU_SEASON_POS, SKU_SUBCATEGORY_END, SKU_SUBCATEGORY_START,
};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Decode season, item type and lead time from a SKU
///
/// Codes shorter than the decodable minimum yield the generic fallback:
/// AllSeason (always a seasonal fit), item type general, and the fallback
/// lead time. Unknown season characters are likewise treated as AllSeason
/// so a typo in a hand-edited code cannot hide a product from the views.
pub fn decode_sku(sku: &str) -> SkuMeta {
    let chars: Vec<char> = sku.trim().chars().collect();

    if chars.len() < SKU_MIN_DECODE_LEN {
        debug!("SKU '{}' too short to decode, using generic fallback", sku);
        return SkuMeta {
            season: Season::AllSeason,
            item_type: ItemType::General,
            lead_time_days: FALLBACK_LEAD_TIME_DAYS,
        };
    }

    let season = Season::from_code(chars[SKU_SEASON_POS]).unwrap_or(Season::AllSeason);

    let subcategory: String = chars[SKU_SUBCATEGORY_START..SKU_SUBCATEGORY_END]
        .iter()
        .collect::<String>()
        .to_ascii_uppercase();
    let (item_type, lead_time_days) = item_type_for_subcategory(&subcategory);

    SkuMeta {
        season,
        item_type,
        lead_time_days,
    }
}

/// Map a sub-category code to its item type and lead time
///
/// Consults the explicit tables in [`crate::constants`]; codes absent from
/// both tables default to general.
pub fn item_type_for_subcategory(code: &str) -> (ItemType, u32) {
    if PADDING_SUBCATEGORY_CODES.contains(&code) {
        (ItemType::Padding, PADDING_LEAD_TIME_DAYS)
    } else if OUTER_SUBCATEGORY_CODES.contains(&code) {
        (ItemType::Outer, OUTER_LEAD_TIME_DAYS)
    } else {
        (ItemType::General, GENERAL_LEAD_TIME_DAYS)
    }
}

/// Whether the decoded season is a fit for the as-of date
///
/// A pure function of (season, date); the as-of date is injected so
/// seasonal-fit evaluation is deterministic in tests and recomputed on
/// every ingestion pass rather than cached across date boundaries.
pub fn seasonal_fit(season: Season, as_of: NaiveDate) -> bool {
    season.is_fit_for_month(as_of.month())
}
