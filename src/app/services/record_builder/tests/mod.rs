//! Tests for record reconstruction

pub mod sku_tests;
