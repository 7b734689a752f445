//! Sales arithmetic, stock-out forecasting and status classification
//!
//! Pure functions over the raw counts; the as-of date is always an explicit
//! parameter. The classification thresholds are evaluated in fixed order so
//! a record meeting the Critical condition is never downgraded.

use crate::app::models::{Forecast, StockStatus};
use crate::constants::{
    CRITICAL_HORIZON_DAYS, CRITICAL_STOCK_RATIO, SALES_WINDOW_DAYS, STABLE_HORIZON_DAYS,
    STOCKOUT_SENTINEL_DAYS, WARNING_HORIZON_DAYS,
};
use chrono::{Duration, NaiveDate};

/// Current-week sales spread over the trailing sales window
pub fn daily_sales_avg(current_week_sales: u32) -> f64 {
    current_week_sales as f64 / SALES_WINDOW_DAYS
}

/// Week-over-week sales change in percent
///
/// A zero previous week cannot be divided through; it yields 100 when the
/// current week has any sales (new or revived demand) and 0 otherwise.
pub fn sales_growth(current_week_sales: u32, last_week_sales: u32) -> f64 {
    if last_week_sales == 0 {
        if current_week_sales > 0 {
            100.0
        } else {
            0.0
        }
    } else {
        (current_week_sales as f64 - last_week_sales as f64) / last_week_sales as f64 * 100.0
    }
}

/// Projected days until on-hand stock reaches zero at current velocity
///
/// Zero velocity means no imminent risk; the sentinel horizon stands in for
/// "not forecastable under current sales".
pub fn days_to_stockout(current_stock: u32, daily_avg: f64) -> i64 {
    if daily_avg > 0.0 {
        (current_stock as f64 / daily_avg).floor() as i64
    } else {
        STOCKOUT_SENTINEL_DAYS
    }
}

/// Forecast stock-out date from the as-of date and horizon
///
/// Horizons beyond the stable threshold carry the stable marker instead of
/// a far-future date.
pub fn stockout_forecast(as_of: NaiveDate, days_to_stockout: i64) -> Forecast {
    if days_to_stockout > STABLE_HORIZON_DAYS {
        Forecast::Stable
    } else {
        Forecast::Date(as_of + Duration::days(days_to_stockout))
    }
}

/// Suggested reorder date: stock-out minus lead time
///
/// The stable marker propagates; a date in the past is returned as-is and
/// means "order now".
pub fn order_forecast(stockout: Forecast, lead_time_days: u32) -> Forecast {
    match stockout {
        Forecast::Date(date) => Forecast::Date(date - Duration::days(lead_time_days as i64)),
        Forecast::Stable => Forecast::Stable,
    }
}

/// Classify reorder risk from stock level, reorder point and horizon
///
/// Evaluated in fixed order: Critical first (half the reorder point or a
/// horizon of ten days or less), then Warning (at the reorder point or a
/// horizon of twenty days or less), then Safe.
pub fn classify(current_stock: u32, reorder_point: u32, days_to_stockout: i64) -> StockStatus {
    let stock = current_stock as f64;

    if stock <= reorder_point as f64 * CRITICAL_STOCK_RATIO
        || days_to_stockout <= CRITICAL_HORIZON_DAYS
    {
        StockStatus::Critical
    } else if current_stock <= reorder_point || days_to_stockout <= WARNING_HORIZON_DAYS {
        StockStatus::Warning
    } else {
        StockStatus::Safe
    }
}
