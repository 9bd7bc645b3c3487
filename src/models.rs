use serde::{Deserialize, Serialize};

/// A normalized recommendation, the shape every renderer agrees on
///
/// Ids are opaque and only unique within one fetched batch. `kind` is an open
/// string tag ("sponsored", "organic", and whatever a vendor adds next) —
/// deliberately not an enum, so new kinds can be supported by registering a
/// renderer without touching this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Absolute URL, or empty string when the item has no image
    pub image_url: String,
    /// Destination when the item is activated
    pub url: String,
    pub kind: String,
    /// Present only for kinds that define it (currently "sponsored").
    /// `None` means "brand not applicable", never `Some("")`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<String>,
}

// ============================================================================
// Taboola API Types
// ============================================================================

/// One raw item from the Taboola recommendations.get response
///
/// Everything is optional: the vendor omits or nulls fields freely and the
/// normalizer must never fail on that.
#[derive(Debug, Clone, Deserialize)]
pub struct TaboolaItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Vec<TaboolaThumbnail>>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub branding: Option<String>,
}

/// Thumbnail entry; the vendor also sends width/height as strings, which the
/// widget does not use
#[derive(Debug, Clone, Deserialize)]
pub struct TaboolaThumbnail {
    #[serde(default)]
    pub url: Option<String>,
}

impl From<TaboolaItem> for Recommendation {
    fn from(item: TaboolaItem) -> Self {
        let image_url = item
            .thumbnail
            .as_ref()
            .and_then(|thumbs| thumbs.first())
            .and_then(|thumb| thumb.url.clone())
            .unwrap_or_default();

        let kind = item.origin.unwrap_or_default();

        // Branding is carried over only when the kind defines it, and only
        // when the vendor actually supplied a value. An absent field and an
        // empty field both mean "no brand".
        let branding = if kind == "sponsored" {
            item.branding.filter(|b| !b.is_empty())
        } else {
            None
        };

        Recommendation {
            id: item.id.unwrap_or_default(),
            title: item.name.unwrap_or_default(),
            description: item.description.unwrap_or_default(),
            image_url,
            url: item.url.unwrap_or_default(),
            kind,
            branding,
        }
    }
}
