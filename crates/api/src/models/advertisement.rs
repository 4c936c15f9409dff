//! Advertisement model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use remedia_core::{AdvertisementId, Email};

/// A seller's advertisement request.
///
/// Sellers submit advertisements for their listings; an admin decides which
/// ones appear in the homepage slider by toggling `in_slide`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    pub id: AdvertisementId,
    /// Owning seller; taken from the authenticated session, never the body.
    pub seller_email: Email,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Whether an admin has placed this advertisement in the slider.
    pub in_slide: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting an advertisement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdvertisement {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Payload for the admin slide toggle.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideToggle {
    pub in_slide: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_advertisement_defaults() {
        let payload: NewAdvertisement =
            serde_json::from_str(r#"{"title": "Napa Extra 500mg"}"#).unwrap();
        assert_eq!(payload.title, "Napa Extra 500mg");
        assert!(payload.description.is_empty());
        assert!(payload.image_url.is_none());
    }

    #[test]
    fn test_slide_toggle_camel_case() {
        let payload: SlideToggle = serde_json::from_str(r#"{"inSlide": true}"#).unwrap();
        assert!(payload.in_slide);
    }
}
