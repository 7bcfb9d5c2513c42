//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Coordinate;
use crate::locate::LocatedStation;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the lookup form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Prefilled reference latitude.
    pub latitude: String,
    /// Prefilled reference longitude.
    pub longitude: String,
    /// Whether the server holds its own API key.
    pub has_server_key: bool,
}

impl IndexTemplate {
    pub fn new(reference: Coordinate, has_server_key: bool) -> Self {
        Self {
            latitude: reference.latitude.to_string(),
            longitude: reference.longitude.to_string(),
            has_server_key,
        }
    }
}

// ============================================================================
// Fragment Templates (no base.html)
// ============================================================================

/// Station listing fragment.
#[derive(Template)]
#[template(path = "charger_list.html")]
pub struct ChargerListTemplate {
    pub chargers: Vec<ChargerView>,
}

impl ChargerListTemplate {
    pub fn from_located(located: &[LocatedStation]) -> Self {
        Self {
            chargers: located.iter().map(ChargerView::from_located).collect(),
        }
    }
}

/// Error fragment.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One station block in the listing.
#[derive(Debug, Clone)]
pub struct ChargerView {
    pub title: String,
    /// Address and contact lines, in display order, blanks removed.
    pub details: Vec<String>,
    pub related_url: Option<String>,
    pub distance_miles: u32,
    pub latitude: String,
    pub longitude: String,
}

impl ChargerView {
    /// Create from a located station.
    pub fn from_located(located: &LocatedStation) -> Self {
        let info = &located.station.address_info;

        let country = info.country.as_ref().and_then(|c| c.title.as_ref());

        let details = [
            info.address_line1.as_ref(),
            info.address_line2.as_ref(),
            info.town.as_ref(),
            info.state_or_province.as_ref(),
            info.postcode.as_ref(),
            country,
            info.contact_telephone1.as_ref(),
            info.contact_telephone2.as_ref(),
            info.contact_email.as_ref(),
            info.access_comments.as_ref(),
        ]
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

        Self {
            title: info
                .title
                .clone()
                .unwrap_or_else(|| format!("Station {}", located.station.id)),
            details,
            related_url: info
                .related_url
                .as_deref()
                .map(str::trim)
                .filter(|u| is_web_link(u))
                .map(str::to_string),
            distance_miles: located.distance.whole_miles(),
            latitude: format!("{:.6}", info.latitude),
            longitude: format!("{:.6}", info.longitude),
        }
    }

    /// The related link, or an empty string.
    pub fn link(&self) -> &str {
        self.related_url.as_deref().unwrap_or("")
    }

    /// Whether the station has a related link.
    pub fn has_link(&self) -> bool {
        self.related_url.is_some()
    }
}

/// Only `http` and `https` links are rendered; provider URLs are untrusted.
fn is_web_link(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    ["http://", "https://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len())
}
