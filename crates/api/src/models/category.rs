//! Catalog category model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use remedia_core::CategoryId;

/// An admin-managed catalog category.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial category update; absent fields keep their stored value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_image_is_optional() {
        let payload: NewCategory = serde_json::from_str(r#"{"name": "Antibiotic"}"#).unwrap();
        assert_eq!(payload.name, "Antibiotic");
        assert!(payload.image_url.is_none());
    }

    #[test]
    fn test_update_category_accepts_partial_payload() {
        let payload: UpdateCategory =
            serde_json::from_str(r#"{"imageUrl": "https://cdn.example/antibiotic.png"}"#).unwrap();
        assert!(payload.name.is_none());
        assert_eq!(
            payload.image_url.as_deref(),
            Some("https://cdn.example/antibiotic.png")
        );
    }
}
