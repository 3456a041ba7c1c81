use crate::shared::api_utils::api_url;
use chrono::SecondsFormat;
use contracts::dashboards::sales_analytics::{AnalyticsRequest, AnalyticsResponse};
use gloo_net::http::Request;

/// Query string с границами периода в RFC 3339
fn range_query(request: &AnalyticsRequest) -> String {
    let start = request.start_date.to_rfc3339_opts(SecondsFormat::Secs, true);
    let end = request.end_date.to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        "startDate={}&endDate={}",
        urlencoding::encode(&start),
        urlencoding::encode(&end),
    )
}

/// Получить агрегаты продаж за период
///
/// Ни повторов, ни кеширования: каждый вызов идёт на сервер.
pub async fn fetch_analytics(request: &AnalyticsRequest) -> Result<AnalyticsResponse, String> {
    let url = format!("{}?{}", api_url("/api/sales"), range_query(request));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: AnalyticsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
