mod dto;

pub use dto::{AnalyticsRequest, AnalyticsResponse, RegionRevenue, TopCustomer, TopProduct};
