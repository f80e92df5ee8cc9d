//! Frontend Models
//!
//! Data structures matching the grocery API payloads.

use serde::{Deserialize, Serialize};

/// Grocery item (server-owned)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
}

/// `GET /list` response body
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub list: Vec<GroceryItem>,
}

/// `POST /list` request body
#[derive(Debug, Serialize)]
pub struct AddItemRequest<'a> {
    #[serde(rename = "upcCode")]
    pub upc_code: &'a str,
}

/// `POST /list` success body
#[derive(Debug, Clone, Deserialize)]
pub struct ItemResponse {
    pub item: GroceryItem,
}

/// Failure body carrying a user-facing message
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_reads_mongo_style_ids() {
        let body = r#"{"list":[{"_id":"1","name":"Milk"},{"id":"2","name":"Eggs"}]}"#;
        let parsed: ListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.list,
            vec![
                GroceryItem { id: "1".into(), name: "Milk".into() },
                GroceryItem { id: "2".into(), name: "Eggs".into() },
            ]
        );
    }

    #[test]
    fn test_add_request_uses_camel_case() {
        let json = serde_json::to_string(&AddItemRequest { upc_code: "012345678905" }).unwrap();
        assert_eq!(json, r#"{"upcCode":"012345678905"}"#);
    }
}
