use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request for the sales analytics dashboard
///
/// Both bounds travel as query parameters in RFC 3339 form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRequest {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Response for the sales analytics dashboard
///
/// Aggregated snapshot for one date range, replaced wholesale on each
/// fetch. The backend serialises field names in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    /// Total revenue over the requested period
    pub total_revenue: f64,
    /// Average order value over the requested period
    pub avg_order_value: f64,
    /// Revenue grouped by region
    pub region_sales: Vec<RegionRevenue>,
    /// Best-selling products, typically pre-sorted by revenue
    pub top_products: Vec<TopProduct>,
    /// Highest-spending customers, typically pre-sorted by revenue
    pub top_customers: Vec<TopCustomer>,
}

impl AnalyticsResponse {
    /// True when the period produced no aggregates at all
    pub fn is_empty(&self) -> bool {
        self.region_sales.is_empty() && self.top_products.is_empty() && self.top_customers.is_empty()
    }
}

/// Revenue of a single region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRevenue {
    pub region: String,
    pub revenue: f64,
}

/// One row of the top-products table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product_id: String,
    pub name: String,
    pub revenue: f64,
}

/// One row of the top-customers table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomer {
    pub customer_id: String,
    pub name: String,
    pub revenue: f64,
}
