use serde::{Deserialize, Serialize};

pub const CONCERN_OPTIONS: &[&str] = &[
    "Yes, I expect to receive one this tax season",
    "I'm not sure — help me find out",
];

pub const ACTIVITY_OPTIONS: &[&str] = &[
    "DeFi / DEX Power User",
    "Mining",
    "High-Volume Trading",
    "NFTs & Minting",
    "Staking & Rewards",
    "Trading Bots",
    "Basic HODLing",
];

pub const CHALLENGE_OPTIONS: &[&str] = &[
    "My transaction history is a total mess",
    "Too many wallets and exchanges to sync",
    "Generic software is failing on my DeFi data",
    "I am worried about an IRS audit",
    "I have multiple years of unreconciled data",
];

pub const TIMELINE_OPTIONS: &[&str] = &[
    "Immediately (ASAP)",
    "Before the April deadline",
    "In the next few months",
    "Just exploring options",
];

/// Query keys forwarded to the consultation and booking pages, in order.
pub const TRACKING_KEYS: [&str; 10] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "gclid",
    "fbclid",
    "msclkid",
    "ttclid",
    "li_fat_id",
];

/// Every attribution field, tracking keys first.
pub const ATTRIBUTION_KEYS: [&str; 12] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "gclid",
    "fbclid",
    "msclkid",
    "ttclid",
    "li_fat_id",
    "referring_url",
    "entry_url",
];

/// Paid-click identifiers that can earn a scoring bonus.
pub const CLICK_ID_KEYS: [&str; 5] = ["gclid", "fbclid", "msclkid", "ttclid", "li_fat_id"];

/// Marketing attribution captured on landing and carried through the funnel.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Attribution {
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub utm_term: String,
    pub utm_content: String,
    pub gclid: String,
    pub fbclid: String,
    pub msclkid: String,
    pub ttclid: String,
    pub li_fat_id: String,
    pub referring_url: String,
    pub entry_url: String,
}

impl Attribution {
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "utm_source" => &self.utm_source,
            "utm_medium" => &self.utm_medium,
            "utm_campaign" => &self.utm_campaign,
            "utm_term" => &self.utm_term,
            "utm_content" => &self.utm_content,
            "gclid" => &self.gclid,
            "fbclid" => &self.fbclid,
            "msclkid" => &self.msclkid,
            "ttclid" => &self.ttclid,
            "li_fat_id" => &self.li_fat_id,
            "referring_url" => &self.referring_url,
            "entry_url" => &self.entry_url,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Returns false for keys that are not attribution fields.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        let slot = match key {
            "utm_source" => &mut self.utm_source,
            "utm_medium" => &mut self.utm_medium,
            "utm_campaign" => &mut self.utm_campaign,
            "utm_term" => &mut self.utm_term,
            "utm_content" => &mut self.utm_content,
            "gclid" => &mut self.gclid,
            "fbclid" => &mut self.fbclid,
            "msclkid" => &mut self.msclkid,
            "ttclid" => &mut self.ttclid,
            "li_fat_id" => &mut self.li_fat_id,
            "referring_url" => &mut self.referring_url,
            "entry_url" => &mut self.entry_url,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Non-empty fields in `ATTRIBUTION_KEYS` order.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        ATTRIBUTION_KEYS
            .iter()
            .filter_map(|key| match self.get(key) {
                Some(value) if !value.is_empty() => Some((*key, value)),
                _ => None,
            })
            .collect()
    }

    pub fn has_click_id(&self) -> bool {
        CLICK_ID_KEYS
            .iter()
            .any(|key| self.get(key).map_or(false, |v| !v.is_empty()))
    }

    pub fn is_empty(&self) -> bool {
        *self == Attribution::default()
    }
}

/// Everything the qualification form collects about one lead.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadRecord {
    pub concern_1099da: String,
    pub activity: Vec<String>,
    pub challenge: String,
    pub timeline: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub consent: bool,
    /// Honeypot. Hidden from people, filled in by form bots.
    pub website: String,
    attribution: Attribution,
    attribution_hydrated: bool,
}

impl LeadRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the session attribution. Only the first call has any effect.
    pub fn hydrate_attribution(&mut self, attribution: Attribution) -> bool {
        if self.attribution_hydrated {
            return false;
        }
        self.attribution = attribution;
        self.attribution_hydrated = true;
        true
    }

    pub fn attribution(&self) -> &Attribution {
        &self.attribution
    }

    pub fn toggle_activity(&mut self, item: &str) {
        if let Some(pos) = self.activity.iter().position(|a| a == item) {
            self.activity.remove(pos);
        } else {
            self.activity.push(item.to_string());
        }
    }

    pub fn has_activity(&self, item: &str) -> bool {
        self.activity.iter().any(|a| a == item)
    }

    pub fn is_suspected_bot(&self) -> bool {
        !self.website.is_empty()
    }

    /// First word of the trimmed name, and the remaining words.
    pub fn split_name(&self) -> (String, String) {
        let mut parts = self.name.split_whitespace();
        let first = parts.next().unwrap_or_default().to_string();
        let last = parts.collect::<Vec<_>>().join(" ");
        (first, last)
    }

    pub fn activity_list(&self) -> String {
        self.activity.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_attribution() -> Attribution {
        Attribution {
            utm_source: "google".to_string(),
            gclid: "abc123".to_string(),
            ..Attribution::default()
        }
    }

    #[test]
    fn attribution_is_write_once() {
        let mut record = LeadRecord::new();
        assert!(record.hydrate_attribution(sample_attribution()));

        let mut other = Attribution::default();
        other.utm_source = "facebook".to_string();
        assert!(!record.hydrate_attribution(other));
        assert_eq!(record.attribution().utm_source, "google");
    }

    #[test]
    fn empty_hydration_still_locks() {
        let mut record = LeadRecord::new();
        assert!(record.hydrate_attribution(Attribution::default()));
        assert!(!record.hydrate_attribution(sample_attribution()));
        assert!(record.attribution().is_empty());
    }

    #[test]
    fn toggle_activity_adds_then_removes() {
        let mut record = LeadRecord::new();
        record.toggle_activity("Mining");
        record.toggle_activity("Trading Bots");
        assert_eq!(record.activity_list(), "Mining, Trading Bots");

        record.toggle_activity("Mining");
        assert!(!record.has_activity("Mining"));
        assert_eq!(record.activity, vec!["Trading Bots".to_string()]);
    }

    #[test]
    fn split_name_handles_extra_whitespace() {
        let mut record = LeadRecord::new();
        record.name = "  Ada   King Lovelace ".to_string();
        assert_eq!(
            record.split_name(),
            ("Ada".to_string(), "King Lovelace".to_string())
        );

        record.name = "Cher".to_string();
        assert_eq!(record.split_name(), ("Cher".to_string(), String::new()));

        record.name = String::new();
        assert_eq!(record.split_name(), (String::new(), String::new()));
    }

    #[test]
    fn pairs_skip_empty_fields_and_keep_key_order() {
        let mut attribution = sample_attribution();
        attribution.entry_url = "https://moontax.com/?gclid=abc123".to_string();
        assert_eq!(
            attribution.pairs(),
            vec![
                ("utm_source", "google"),
                ("gclid", "abc123"),
                ("entry_url", "https://moontax.com/?gclid=abc123"),
            ]
        );
    }

    #[test]
    fn click_id_detection() {
        assert!(sample_attribution().has_click_id());

        let mut attribution = Attribution::default();
        attribution.utm_campaign = "spring".to_string();
        assert!(!attribution.has_click_id());
        attribution.li_fat_id = "x".to_string();
        assert!(attribution.has_click_id());
    }

    #[test]
    fn set_rejects_unknown_keys() {
        let mut attribution = Attribution::default();
        assert!(!attribution.set("name", "Mallory".to_string()));
        assert!(attribution.set("msclkid", "m-1".to_string()));
        assert_eq!(attribution.get("msclkid"), Some("m-1"));
        assert_eq!(attribution.get("name"), None);
    }

    #[test]
    fn honeypot_flags_bots() {
        let mut record = LeadRecord::new();
        assert!(!record.is_suspected_bot());
        record.website = "http://spam.example".to_string();
        assert!(record.is_suspected_bot());
    }
}
