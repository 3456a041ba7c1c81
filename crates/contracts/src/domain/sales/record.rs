use serde::{Deserialize, Serialize};

/// Raw sale record as stored by the backend
///
/// Read-only on the client; the list endpoint returns a flat array with
/// no pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Backend document id (Mongo-style "_id" on the wire)
    #[serde(rename = "_id")]
    pub id: String,
    pub product: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_shape() {
        let json = r#"[{"_id": "65a1", "product": "Widget", "amount": 19.99}]"#;
        let records: Vec<SaleRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "65a1");
        assert_eq!(records[0].product, "Widget");
        assert_eq!(records[0].amount, 19.99);
    }
}
