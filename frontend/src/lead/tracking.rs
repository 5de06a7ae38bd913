use log::{error, info};
use web_sys::window;

use crate::config;
use crate::lead::query::QueryParams;
use crate::lead::record::{Attribution, TRACKING_KEYS};

pub fn parse_snapshot(json: &str) -> Result<Attribution, serde_json::Error> {
    serde_json::from_str(json)
}

/// Builds the attribution snapshot for a first visit.
pub fn capture(search: &str, referrer: &str, entry_url: &str) -> Attribution {
    let params = QueryParams::parse(search);
    let mut attribution = Attribution::default();
    for key in TRACKING_KEYS {
        if let Some(value) = params.get_non_empty(key) {
            attribution.set(key, value.to_string());
        }
    }
    attribution.referring_url = referrer.to_string();
    attribution.entry_url = entry_url.to_string();
    attribution
}

fn session_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.session_storage().ok()).flatten()
}

/// JSON to store for this visit, or `None` when the session already has an
/// entry. A malformed entry still counts as taken.
pub fn snapshot_to_store(
    existing: Option<&str>,
    search: &str,
    referrer: &str,
    entry_url: &str,
) -> Result<Option<String>, serde_json::Error> {
    if existing.is_some() {
        return Ok(None);
    }
    serde_json::to_string(&capture(search, referrer, entry_url)).map(Some)
}

/// Stores this visit's attribution unless the session already has one.
pub fn remember_landing() {
    let Some(window) = window() else {
        return;
    };
    let Some(storage) = session_storage() else {
        return;
    };
    let existing = storage
        .get_item(config::TRACKING_STORAGE_KEY)
        .ok()
        .flatten();
    let location = window.location();
    let search = location.search().unwrap_or_default();
    let href = location.href().unwrap_or_default();
    let referrer = window
        .document()
        .map(|d| d.referrer())
        .unwrap_or_default();

    match snapshot_to_store(existing.as_deref(), &search, &referrer, &href) {
        Ok(Some(json)) => match storage.set_item(config::TRACKING_STORAGE_KEY, &json) {
            Ok(()) => info!("Stored landing attribution"),
            Err(e) => error!("Error storing tracking data: {:?}", e),
        },
        Ok(None) => {}
        Err(e) => error!("Error encoding tracking data: {}", e),
    }
}

/// Reads the session attribution once. Malformed entries are dropped.
pub fn load_attribution() -> Option<Attribution> {
    let json = session_storage()?
        .get_item(config::TRACKING_STORAGE_KEY)
        .ok()
        .flatten()?;
    match parse_snapshot(&json) {
        Ok(attribution) => Some(attribution),
        Err(e) => {
            error!("Error parsing tracking data: {}", e);
            None
        }
    }
}
