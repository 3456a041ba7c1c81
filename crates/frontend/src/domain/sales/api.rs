use crate::shared::api_utils::api_url;
use contracts::domain::sales::SaleRecord;
use gloo_net::http::Request;

/// Получить плоский список продаж
///
/// Безусловный GET: без пагинации и серверной фильтрации.
pub async fn fetch_sales() -> Result<Vec<SaleRecord>, String> {
    let url = api_url("/sales");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}
