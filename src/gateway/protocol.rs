//! Wire contract with the sheet script.
//!
//! Reads come back with the sheet's Japanese column headers (see
//! [`crate::catalog::RawItem`]); mutations go out as an `action`-tagged JSON
//! body with English field names. That asymmetry is the endpoint's, not
//! ours.

use serde::{Deserialize, Serialize};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockDirection {
    In,
    Out,
}

impl StockDirection {
    /// Japanese label used in confirmation prompts.
    pub fn label(&self) -> &'static str {
        match self {
            StockDirection::In => "入庫",
            StockDirection::Out => "出庫",
        }
    }
}

/// POST body for all mutations, tagged by `action`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum MutationRequest {
    Update {
        id: i64,
        #[serde(rename = "type")]
        direction: StockDirection,
        qty: u32,
    },
    Delete {
        id: i64,
    },
    Add {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        publisher: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        isbn: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        location: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        subject: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        grade: Option<String>,
        stock: i64,
        alert: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        cost: Option<i64>,
    },
}

/// Response to every POST. Anything that does not parse as one of these two
/// shapes is treated as a communication error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse {
    Success,
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_shape() {
        let request = MutationRequest::Update {
            id: 12,
            direction: StockDirection::Out,
            qty: 3,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"action": "update", "id": 12, "type": "out", "qty": 3})
        );
    }

    #[test]
    fn test_delete_request_shape() {
        let request = MutationRequest::Delete { id: 7 };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"action": "delete", "id": 7})
        );
    }

    #[test]
    fn test_add_request_omits_absent_columns() {
        let request = MutationRequest::Add {
            name: "高校数学I".to_string(),
            publisher: Some("数研出版".to_string()),
            isbn: None,
            location: None,
            subject: None,
            grade: None,
            stock: 1,
            alert: 5,
            cost: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "action": "add",
                "name": "高校数学I",
                "publisher": "数研出版",
                "stock": 1,
                "alert": 5,
            })
        );
    }

    #[test]
    fn test_response_success() {
        let response: ApiResponse = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert_eq!(response, ApiResponse::Success);
    }

    #[test]
    fn test_response_error_carries_message() {
        let response: ApiResponse =
            serde_json::from_str(r#"{"status": "error", "message": "在庫が不足しています"}"#)
                .unwrap();
        assert_eq!(
            response,
            ApiResponse::Error {
                message: "在庫が不足しています".to_string()
            }
        );
    }

    #[test]
    fn test_response_other_shapes_fail_to_parse() {
        assert!(serde_json::from_str::<ApiResponse>(r#"{"ok": true}"#).is_err());
        assert!(serde_json::from_str::<ApiResponse>(r#"{"status": "error"}"#).is_err());
    }
}
