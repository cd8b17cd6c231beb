//! Wire-level data models mirrored from the mailbox API.
//!
//! These carry no invariants of their own; the server is trusted for
//! validation, so optional wire fields simply default when absent.

use serde::{Deserialize, Serialize};

/// A stored email message as returned by the API.
///
/// List endpoints omit the body fields and include only a `preview`;
/// the detail endpoint returns everything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Server-assigned message id.
    pub id: String,
    /// Recipient address.
    pub to_addr: String,
    /// Sender address.
    pub from_addr: String,
    /// Subject line; may be empty.
    #[serde(default)]
    pub subject: String,
    /// Plain-text body.
    #[serde(default)]
    pub body_text: String,
    /// Sanitized HTML body, empty when the message was text-only.
    #[serde(default)]
    pub body_html: String,
    /// Receipt time as unix seconds.
    #[serde(default)]
    pub received_at: i64,
    /// Whether an HTML part exists alongside the text part.
    #[serde(default)]
    pub has_html: bool,
    /// Short body excerpt for list views.
    #[serde(default)]
    pub preview: String,
}

/// Envelope for `GET /messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<Message>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

/// Envelope for `GET /messages/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
    pub data: Message,
}

/// Envelope for `GET /messages/latest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestResponse {
    pub data: Vec<Message>,
}

/// Request body for `POST /messages/batch-delete`.
#[derive(Debug, Clone, Serialize)]
pub struct BatchDeleteRequest {
    pub ids: Vec<String>,
}

/// Envelope for `POST /messages/batch-delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDeleteResponse {
    pub deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_decodes_with_optional_fields_absent() {
        let raw = r#"{"id":"m1","to_addr":"a@test.dev","from_addr":"b@test.dev","received_at":1700000000}"#;
        let msg: Message = serde_json::from_str(raw).unwrap();
        assert_eq!(msg.id, "m1");
        assert_eq!(msg.subject, "");
        assert_eq!(msg.body_text, "");
        assert!(!msg.has_html);
        assert_eq!(msg.preview, "");
    }

    #[test]
    fn list_response_decodes_documented_shape() {
        let raw = r#"{
            "data": [{
                "id": "m1",
                "to_addr": "a@test.dev",
                "from_addr": "b@test.dev",
                "subject": "hello",
                "received_at": 1700000000,
                "has_html": true,
                "preview": "hi there"
            }],
            "total": 42,
            "limit": 20,
            "offset": 0
        }"#;
        let resp: ListResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.total, 42);
        assert_eq!(resp.data.len(), 1);
        assert!(resp.data[0].has_html);
    }

    #[test]
    fn list_response_tolerates_missing_paging_fields() {
        let resp: ListResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert_eq!(resp.total, 0);
        assert_eq!(resp.limit, 0);
        assert!(resp.data.is_empty());
    }

    #[test]
    fn batch_delete_request_serializes_ids_key() {
        let body = BatchDeleteRequest {
            ids: vec!["a".into(), "b".into()],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"ids": ["a", "b"]}));
    }
}
