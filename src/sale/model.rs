use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A live auction sale as described by the `data.sale` fragment of the static data payload.
///
/// Only `id` is required; everything else falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveSale {
    /// The sale's unique identifier.
    pub id: String,
    /// Human-readable sale name.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form sale description.
    #[serde(default)]
    pub description: Option<String>,
    /// ISO 4217 code bids are placed in (e.g., "USD").
    #[serde(default)]
    pub currency: Option<String>,
    /// Display symbol for the currency (e.g., "$").
    #[serde(default)]
    pub symbol: Option<String>,
    /// When bidding opens.
    #[serde(default)]
    pub start_at: Option<DateTime<Utc>>,
    /// When the sale is scheduled to close.
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    /// Lots in running order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sale_artworks: Vec<SaleArtwork>,
}

/// One lot within a [`LiveSale`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleArtwork {
    /// The lot's unique identifier.
    pub id: String,
    /// Running order within the sale.
    #[serde(default, deserialize_with = "de_u32_from_any_number")]
    pub position: Option<u32>,
    /// The label shown to bidders (e.g., "12A").
    #[serde(default)]
    pub lot_label: Option<String>,
    /// The work offered in this lot.
    #[serde(default)]
    pub artwork: Option<Artwork>,
}

/// The artwork offered in a [`SaleArtwork`] lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// The artwork's unique identifier.
    pub id: String,
    /// The artwork's title.
    #[serde(default)]
    pub title: Option<String>,
    /// Display name of the artist or artists.
    #[serde(default)]
    pub artist_name: Option<String>,
    /// URL of the large rendition of the artwork's main image.
    ///
    /// Read from the nested `image { url }` node of the payload.
    #[serde(default, rename(deserialize = "image"), deserialize_with = "image_url")]
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
struct ImageNode {
    #[serde(default)]
    url: Option<String>,
}

fn image_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ImageNode>::deserialize(deserializer)?.and_then(|image| image.url))
}

// GraphQL answers `null` rather than `[]` for an unpublished lot list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn de_u32_from_any_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyNumber {
        U32(u32),
        F64(f64),
    }

    match Option::<AnyNumber>::deserialize(deserializer)? {
        Some(AnyNumber::U32(u)) => Ok(Some(u)),
        Some(AnyNumber::F64(f)) => {
            if f.fract() == 0.0 && f >= 0.0 && f <= f64::from(u32::MAX) {
                Ok(Some(f as u32))
            } else {
                Err(serde::de::Error::custom(format!(
                    "cannot convert float {f} to u32"
                )))
            }
        }
        None => Ok(None),
    }
}
