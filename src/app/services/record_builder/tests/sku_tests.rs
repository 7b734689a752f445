//! Tests for SKU metadata decoding and seasonal fit

use crate::app::models::{ItemType, Season};
use crate::app::services::record_builder::sku::{
    decode_sku, item_type_for_subcategory, seasonal_fit,
};
use crate::constants::{FALLBACK_LEAD_TIME_DAYS, GENERAL_LEAD_TIME_DAYS};
use chrono::NaiveDate;

fn march() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

fn november() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 15).unwrap()
}

#[test]
fn test_decode_full_sku() {
    // Season code at position 3, sub-category code at positions 5-6
    let meta = decode_sku("NFDW5JK00420001");
    assert_eq!(meta.season, Season::Winter);
    assert_eq!(meta.item_type, ItemType::Outer);
    assert_eq!(meta.lead_time_days, 35);
}

#[test]
fn test_decode_padding_sku() {
    let meta = decode_sku("NFDW5PD00980003");
    assert_eq!(meta.item_type, ItemType::Padding);
    assert_eq!(meta.lead_time_days, 50);
}

#[test]
fn test_decode_unknown_subcategory_is_general() {
    let meta = decode_sku("NFDS5TS00110002");
    assert_eq!(meta.season, Season::Spring);
    assert_eq!(meta.item_type, ItemType::General);
    assert_eq!(meta.lead_time_days, GENERAL_LEAD_TIME_DAYS);
}

#[test]
fn test_undersized_sku_generic_fallback() {
    for sku in ["", "N", "NFD001", "ABC"] {
        let meta = decode_sku(sku);
        assert_eq!(meta.season, Season::AllSeason, "sku: {:?}", sku);
        assert_eq!(meta.item_type, ItemType::General, "sku: {:?}", sku);
        assert_eq!(meta.lead_time_days, FALLBACK_LEAD_TIME_DAYS, "sku: {:?}", sku);
        assert!(seasonal_fit(meta.season, november()));
    }
}

#[test]
fn test_unknown_season_code_treated_as_all_season() {
    let meta = decode_sku("NFD95JK00420001");
    assert_eq!(meta.season, Season::AllSeason);
    assert!(seasonal_fit(meta.season, march()));
    assert!(seasonal_fit(meta.season, november()));
}

#[test]
fn test_lowercase_codes_decode() {
    let meta = decode_sku("nfdw5pd00980003");
    assert_eq!(meta.season, Season::Winter);
    assert_eq!(meta.item_type, ItemType::Padding);
}

#[test]
fn test_spring_fit_march_not_november() {
    let meta = decode_sku("NFDS5TS00110002");
    assert!(seasonal_fit(meta.season, march()));
    assert!(!seasonal_fit(meta.season, november()));
}

#[test]
fn test_subcategory_tables() {
    assert_eq!(item_type_for_subcategory("PD").0, ItemType::Padding);
    assert_eq!(item_type_for_subcategory("DW").0, ItemType::Padding);
    assert_eq!(item_type_for_subcategory("JK").0, ItemType::Outer);
    assert_eq!(item_type_for_subcategory("CT").0, ItemType::Outer);
    assert_eq!(item_type_for_subcategory("VT").0, ItemType::Outer);
    assert_eq!(item_type_for_subcategory("TS").0, ItemType::General);
    assert_eq!(item_type_for_subcategory("").0, ItemType::General);
}
