//! Tests for derived views


use crate::app::models::{Forecast, InventoryRecord, ItemType, StockStatus};

/// Minimal record fixture for view tests
pub fn record(
    id: &str,
    current_week_sales: u32,
    current_stock: u32,
    is_seasonal_fit: bool,
    status: StockStatus,
) -> InventoryRecord {
    InventoryRecord {
        id: id.to_string(),
        category: "Outerwear".to_string(),
        brand: "Northfield".to_string(),
        product_name: format!("Product {}", id),
        barcode: "8800001".to_string(),
        sku: "NFDA5TS00110001".to_string(),
        current_stock,
        in_production_stock: 0,
        safety_stock: 10,
        reorder_point: 20,
        current_week_sales,
        last_week_sales: current_week_sales,
        daily_sales_avg: current_week_sales as f64 / 7.0,
        sales_growth: 0.0,
        lead_time_days: 21,
        unit_cost: 50,
        days_to_stockout: 100,
        expected_stockout: Forecast::Stable,
        suggested_order: Forecast::Stable,
        status,
        item_type: ItemType::General,
        is_seasonal_fit,
    }
}
