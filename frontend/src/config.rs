use crate::lead::score::{Priority, ScoreProfile};

#[cfg(debug_assertions)]
pub fn get_webhook_url() -> &'static str {
    "http://localhost:3001/hooks/lead"  // Local capture endpoint when running with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_url() -> &'static str {
    "https://services.leadconnectorhq.com/hooks/wdySJSgT6vvj48a9VuHu/webhook-trigger/8e70c8c9-62c2-48bc-ba02-89798bbf3f51"
}

/// Session storage key the attribution snapshot lives under.
pub const TRACKING_STORAGE_KEY: &str = "moontax_tracking";

/// Scoring variant used by the qualification form.
pub const SCORE_PROFILE: ScoreProfile = ScoreProfile::STANDARD;

pub const SUPPORT_EMAIL: &str = "hello@moontax.com";

/// Consultation page a finished lead is sent to.
pub fn redirect_base_url(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "https://consultation.moontax.com/hp",
        Priority::Medium => "https://consultation.moontax.com/mp",
        Priority::Low => "https://consultation.moontax.com/lp",
    }
}

/// Booking widget embedded on the /booking page.
pub fn calendar_base_url(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "https://link.moontax.com/widget/booking/y2tkzj3S5lWUjZ9jOVF1",
        Priority::Medium => "https://link.moontax.com/widget/booking/RrlGl6e9DKVBvIEnxSxs",
        Priority::Low => "https://link.moontax.com/widget/booking/aA9L4145p0DmjUGBnBPq",
    }
}
