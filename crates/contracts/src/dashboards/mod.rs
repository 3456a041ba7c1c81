pub mod sales_analytics;
