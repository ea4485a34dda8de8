//! Item (catalog product) model and DTOs.

use glossary_core::types::RecordId;
use serde::{Deserialize, Serialize};

use super::empty_as_none;
use super::suggestion::Suggestion;

// ---------------------------------------------------------------------------
// Stored record
// ---------------------------------------------------------------------------

/// An entry in `items.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub shipping_method: String,
    #[serde(default)]
    pub box_quantity: String,
    /// File name inside the image directory, if the item has an image.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_file: Option<String>,
}

/// An item together with the suggestions that reference it.
#[derive(Debug, Clone, Serialize)]
pub struct ItemDetail {
    #[serde(flatten)]
    pub item: Item,
    pub suggestions: Vec<Suggestion>,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Fields for a new item. `name` is required; the rest default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub shipping_method: Option<String>,
    pub box_quantity: Option<String>,
}

/// Partial update: `None` keeps the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub shipping_method: Option<String>,
    pub box_quantity: Option<String>,
}

/// Raw uploaded image as received from the client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let item: Item = serde_json::from_str(r#"{"id":"a","name":"Widget"}"#).unwrap();
        assert_eq!(item.description, "");
        assert_eq!(item.shipping_method, "");
        assert_eq!(item.image_file, None);
    }

    #[test]
    fn empty_image_file_reads_as_absent() {
        let item: Item =
            serde_json::from_str(r#"{"id":"a","name":"W","imageFile":""}"#).unwrap();
        assert_eq!(item.image_file, None);

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("imageFile").is_none());
    }

    #[test]
    fn serializes_camel_case() {
        let item = Item {
            id: "a".into(),
            name: "W".into(),
            description: String::new(),
            shipping_method: "truck".into(),
            box_quantity: "12".into(),
            image_file: Some("x.png".into()),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["shippingMethod"], "truck");
        assert_eq!(json["boxQuantity"], "12");
        assert_eq!(json["imageFile"], "x.png");
    }
}
