//! Charging station records.
//!
//! These types map directly onto Open Charge Map POI JSON. The provider
//! sends `null` or omits many descriptive fields, so everything except the
//! identifier and position is optional.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A charging point location returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Station {
    #[serde(rename = "ID")]
    pub id: i64,

    pub address_info: AddressInfo,
}

/// Address and contact details for a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressInfo {
    #[serde(rename = "ID", default)]
    pub id: i64,

    /// Display name of the site.
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub address_line1: Option<String>,

    #[serde(default)]
    pub address_line2: Option<String>,

    #[serde(default)]
    pub town: Option<String>,

    #[serde(default)]
    pub state_or_province: Option<String>,

    /// Postal code, compared verbatim when filtering.
    #[serde(default)]
    pub postcode: Option<String>,

    #[serde(rename = "CountryID", default)]
    pub country_id: Option<i64>,

    /// Only present in verbose (non-compact) responses.
    #[serde(default)]
    pub country: Option<Country>,

    pub latitude: f64,

    pub longitude: f64,

    #[serde(default)]
    pub contact_telephone1: Option<String>,

    #[serde(default)]
    pub contact_telephone2: Option<String>,

    #[serde(default)]
    pub contact_email: Option<String>,

    #[serde(default)]
    pub access_comments: Option<String>,

    #[serde(rename = "RelatedURL", default)]
    pub related_url: Option<String>,
}

impl AddressInfo {
    /// The station position.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Whether the postal code is exactly `postal_code`.
    ///
    /// No case folding or trimming: "04101 " does not match "04101".
    pub fn has_postcode(&self, postal_code: &str) -> bool {
        self.postcode.as_deref() == Some(postal_code)
    }
}

/// Country reference data embedded in an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Country {
    #[serde(rename = "ID")]
    pub id: i64,

    #[serde(rename = "ISOCode", default)]
    pub iso_code: Option<String>,

    #[serde(default)]
    pub continent_code: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}
