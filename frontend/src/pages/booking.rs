use log::debug;
use yew::prelude::*;
use yew_hooks::use_timeout;
use yew_router::prelude::*;

use crate::config;
use crate::lead::query::QueryParams;
use crate::lead::record::TRACKING_KEYS;
use crate::lead::score::Priority;

const PROCESSING_MS: u32 = 2000;
const PRIMARY_COLOR: &str = "f97316";

/// Calendar embed URL for the lead described by the page's query string.
pub fn calendar_embed_url(params: &QueryParams) -> String {
    let priority = Priority::from_query(params.get("priority"));

    let mut calendar = QueryParams::new();
    calendar.set("embed", "true");
    // Without the leading # so the widget keeps its own accent handling
    calendar.set("primaryColor", PRIMARY_COLOR);

    if let Some(name) = params.get_non_empty("full_name") {
        calendar.set("name", name);
        calendar.set("full_name", name);
    }
    if let Some(email) = params.get_non_empty("email") {
        calendar.set("email", email);
    }
    // Already normalized to ten digits by the form
    if let Some(phone) = params.get_non_empty("phone") {
        calendar.set("phone", phone);
    }
    if let Some(first_name) = params.get_non_empty("first_name") {
        calendar.set("first_name", first_name);
    }
    if let Some(last_name) = params.get_non_empty("last_name") {
        calendar.set("last_name", last_name);
    }
    for key in TRACKING_KEYS {
        if let Some(value) = params.get_non_empty(key) {
            calendar.set(key, value);
        }
    }

    calendar.append_to(config::calendar_base_url(priority))
}

#[function_component(Booking)]
pub fn booking() -> Html {
    let processing = use_state(|| true);
    let location = use_location();

    {
        let processing = processing.clone();
        // Cancelled automatically if the page unmounts first
        use_timeout(move || processing.set(false), PROCESSING_MS);
    }

    let iframe_url = use_memo(
        |query: &String| calendar_embed_url(&QueryParams::parse(query)),
        location.map(|l| l.query_str().to_string()).unwrap_or_default(),
    );

    {
        let iframe_url = iframe_url.clone();
        use_effect_with_deps(move |_| {
            debug!("Booking calendar url: {}", iframe_url);
            || ()
        }, ());
    }

    let content_style = format!(
        "opacity: {}; transition: opacity 0.5s ease-in-out; will-change: opacity;",
        if *processing { "0" } else { "1" }
    );

    html! {
        <div class="booking-page">
            <style>
                {r#"
                    .booking-page { width: 100%; padding: 6rem 1.5rem 0; }
                    .booking-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #000;
                    }
                    .booking-overlay h2 { font-size: 1.5rem; font-weight: 600; color: #fff; margin-bottom: 0.75rem; text-align: center; }
                    .booking-overlay p { color: #a1a1aa; text-align: center; padding: 0 1.5rem; }
                    .booking-spinner {
                        width: 4rem;
                        height: 4rem;
                        margin-bottom: 2rem;
                        border: 4px solid rgba(249, 115, 22, 0.2);
                        border-top-color: #f97316;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .booking-header { text-align: center; margin-bottom: 3rem; }
                    .booking-header h1 { font-size: 3.75rem; font-weight: 700; color: #fff; margin-bottom: 1rem; }
                    .booking-header h2 { font-size: 1.5rem; color: #a1a1aa; }
                    .booking-footnote { text-align: center; font-size: 0.875rem; color: #71717a; margin-top: 3rem; padding-bottom: 3rem; }
                    .booking-footnote a { color: #f97316; }
                    .booking-footnote a:hover { color: #fb923c; }
                    @media (max-width: 768px) {
                        .booking-header h1 { font-size: 2.25rem; }
                        .booking-header h2 { font-size: 1.25rem; }
                    }
                "#}
            </style>
            if *processing {
                <div class="booking-overlay">
                    <div class="booking-spinner"></div>
                    <h2>{"Analyzing your tax situation..."}</h2>
                    <p>{"Matching you with the right specialist."}</p>
                </div>
            }
            <div style={content_style}>
                <div class="booking-header">
                    <h1>{"You qualify for a priority consultation."}</h1>
                    <h2>{"Select a time below and we'll send you a confirmation."}</h2>
                </div>
                <iframe
                    src={(*iframe_url).clone()}
                    width="100%"
                    height="800"
                    frameborder="0"
                    title="Scheduling Calendar"
                    allow="geolocation; microphone; camera; payment; autoplay"
                    sandbox="allow-same-origin allow-scripts allow-forms allow-popups allow-popups-to-escape-sandbox allow-top-navigation allow-modals"
                />
                <p class="booking-footnote">
                    {"Can't find a time that works? Email us at "}
                    <a href={format!("mailto:{}", config::SUPPORT_EMAIL)}>{config::SUPPORT_EMAIL}</a>
                </p>
            </div>
        </div>
    }
}
