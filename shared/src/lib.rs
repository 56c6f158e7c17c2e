//! Shared data model for the PedalSwap frontend.
//!
//! Everything here is target-independent so that the browse lifecycle,
//! response decoding and card text can be exercised natively, outside the
//! browser.

use serde::{Deserialize, Serialize};

pub mod decode;
pub mod error;
pub mod state;

pub use decode::decode_listings;
pub use error::FetchError;
pub use state::LoadState;

/// One bike offered for trade, as returned by `GET /api/bikes`.
///
/// Values are displayed verbatim; nothing is validated or normalized.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Listing {
    /// Backend identifier, unique within one fetched collection.
    pub id: u64,
    /// Headline shown on the card.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Manufacturer.
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    /// Model name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,
    /// Bike category (MTB, Road, Gravel...).
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// Model year.
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    /// Frame size label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,
    /// Seller-reported condition.
    #[serde(default, deserialize_with = "null_as_default")]
    pub condition: String,
    /// Asking price as text, without currency symbol.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,
    /// Free-form description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Groupset / component notes.
    #[serde(default)]
    pub components: Option<String>,
    /// Wheelset notes.
    #[serde(default)]
    pub wheelset: Option<String>,
    /// Wheel diameter label.
    #[serde(default)]
    pub wheel_size: Option<String>,
    /// Tire size label.
    #[serde(default)]
    pub tire_size: Option<String>,
    /// Image filenames, resolved against the image-serving prefix.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

impl Listing {
    /// `"{year} {brand} {model}"`, the line under the card title.
    pub fn subtitle(&self) -> String {
        format!("{} {} {}", self.year, self.brand, self.model)
    }

    /// Price with the currency symbol prepended.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    /// Size and condition on one line.
    pub fn spec_line(&self) -> String {
        format!("Size: {} | Condition: {}", self.size, self.condition)
    }

    /// Filename of the first image, if the listing has any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// An explicit `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::Listing;

    fn trail_bike() -> Listing {
        Listing {
            id: 1,
            title: "Trail Bike".to_string(),
            brand: "Kona".to_string(),
            model: "Process".to_string(),
            kind: "MTB".to_string(),
            year: 2019,
            size: "M".to_string(),
            condition: "Good".to_string(),
            price: "450".to_string(),
            description: "Great trail bike, lightly used.".to_string(),
            ..Listing::default()
        }
    }

    #[test]
    fn card_text_helpers() {
        let bike = trail_bike();
        assert_eq!(bike.subtitle(), "2019 Kona Process");
        assert_eq!(bike.price_label(), "$450");
        assert_eq!(bike.spec_line(), "Size: M | Condition: Good");
    }

    #[test]
    fn price_text_is_not_reformatted() {
        let bike = Listing {
            price: "1,200.50 OBO".to_string(),
            ..trail_bike()
        };
        assert_eq!(bike.price_label(), "$1,200.50 OBO");
    }

    #[test]
    fn cover_image_is_first_entry() {
        let mut bike = trail_bike();
        assert_eq!(bike.cover_image(), None);

        bike.images = vec!["front.jpg".to_string(), "side.jpg".to_string()];
        assert_eq!(bike.cover_image(), Some("front.jpg"));
    }

    #[test]
    fn type_field_maps_to_kind() {
        let bike: Listing =
            serde_json::from_str(r#"{"id":7,"type":"Gravel","images":null}"#).expect("listing");
        assert_eq!(bike.kind, "Gravel");
        assert!(bike.images.is_empty());
        assert_eq!(bike.components, None);
    }

    #[test]
    fn null_fields_read_as_blank() {
        let bike: Listing = serde_json::from_str(
            r#"{"id":9,"title":null,"brand":null,"model":null,"type":null,"year":null,
                "size":null,"condition":null,"price":null,"description":null,"images":null}"#,
        )
        .expect("listing");
        assert_eq!(
            bike,
            Listing {
                id: 9,
                ..Listing::default()
            }
        );
        assert_eq!(bike.price_label(), "$");
    }
}
