//! Raw ad records as returned by the ads archive.
//!
//! Every field is optional: the scraper omits fields freely and sends `null`
//! for others. Text fields of the wrong JSON type read as absent and carousel
//! cards that are not objects are dropped. Accessors on [`RawAd`] resolve
//! nested paths and default absent ones instead of failing.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One advertisement from the ads archive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAd {
    /// Archive identifier of the ad.
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub ad_archive_id: Option<String>,
    /// Identifier of the advertiser page running the ad.
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub page_id: Option<String>,
    /// Advertiser page name.
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub page_name: Option<String>,
    /// Creation time, passed through as sent (epoch seconds or a date string).
    #[serde(default)]
    pub ad_creation_time: Option<Value>,
    /// Delivery start time, passed through as sent.
    #[serde(default)]
    pub ad_delivery_start_time: Option<Value>,
    /// Creative content.
    #[serde(default)]
    pub snapshot: Option<Snapshot>,
}

/// Creative content of an ad.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub link_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_cards")]
    pub cards: Option<Vec<Card>>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub caption: Option<String>,
    #[serde(default)]
    pub body: Option<Body>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub page_name: Option<String>,
}

/// One carousel card.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Card {
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub link_url: Option<String>,
}

/// Ad body text: either a plain string or an object with a `text` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Body {
    Text(String),
    Structured {
        #[serde(default)]
        text: Option<String>,
    },
    /// Any other JSON shape, searched as its serialized text.
    Other(Value),
}

impl RawAd {
    /// Main destination URL of the creative.
    pub fn link_url(&self) -> Option<&str> {
        self.snapshot.as_ref()?.link_url.as_deref()
    }

    /// Destination URLs of the carousel cards, in card order.
    pub fn card_link_urls(&self) -> impl Iterator<Item = &str> {
        self.snapshot
            .as_ref()
            .and_then(|s| s.cards.as_deref())
            .unwrap_or_default()
            .iter()
            .filter_map(|card| card.link_url.as_deref())
    }

    /// Caption text (usually the display domain).
    pub fn caption(&self) -> Option<&str> {
        self.snapshot.as_ref()?.caption.as_deref()
    }

    /// Body text, resolving structured bodies to their `text` field.
    pub fn body_text(&self) -> Option<Cow<'_, str>> {
        match self.snapshot.as_ref()?.body.as_ref()? {
            Body::Text(text) => Some(Cow::Borrowed(text.as_str())),
            Body::Structured { text } => text.as_deref().map(Cow::Borrowed),
            Body::Other(Value::Null) => None,
            Body::Other(value) => Some(Cow::Owned(value.to_string())),
        }
    }

    /// Advertiser page identifier.
    pub fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Advertiser page name, preferring the top-level field over the snapshot.
    pub fn page_name(&self) -> Option<&str> {
        self.page_name
            .as_deref()
            .or_else(|| self.snapshot.as_ref()?.page_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// Accepts identifiers sent either as strings or as numbers.
fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Keeps string values only; any other JSON type reads as absent.
fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Keeps the cards that decode; `null` or scalar entries are dropped.
fn deserialize_cards<'de, D>(deserializer: D) -> Result<Option<Vec<Card>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}
