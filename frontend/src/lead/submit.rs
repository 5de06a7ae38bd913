use gloo_net::http::Request;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::lead::phone;
use crate::lead::query::QueryParams;
use crate::lead::record::{Attribution, LeadRecord};
use crate::lead::score::{evaluate, Priority, ScoreProfile, ScoreResult};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode lead payload: {0}")]
    Encode(String),
    #[error("webhook request failed: {0}")]
    Network(String),
    #[error("webhook rejected lead with status {0}")]
    Rejected(u16),
}

/// JSON body posted to the CRM webhook.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WebhookPayload {
    pub concern_1099da: String,
    pub activity: Vec<String>,
    pub challenge: String,
    pub timeline: String,
    pub name: String,
    pub email: String,
    /// CRM format, country code included.
    pub phone: String,
    pub consent: bool,
    pub website: String,
    #[serde(flatten)]
    pub attribution: Attribution,
    pub lead_score: u32,
    pub priority_level: Priority,
    pub full_name: String,
    pub activity_list: String,
}

impl WebhookPayload {
    pub fn new(record: &LeadRecord, result: &ScoreResult) -> Self {
        Self {
            concern_1099da: record.concern_1099da.clone(),
            activity: record.activity.clone(),
            challenge: record.challenge.clone(),
            timeline: record.timeline.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            phone: phone::crm_phone(&record.phone),
            consent: record.consent,
            website: record.website.clone(),
            attribution: record.attribution().clone(),
            lead_score: result.score,
            priority_level: result.priority,
            full_name: record.name.clone(),
            activity_list: record.activity_list(),
        }
    }
}

/// Consultation page URL for a scored lead, contact details and attribution in the query.
pub fn redirect_url(record: &LeadRecord, priority: Priority) -> String {
    let (first_name, last_name) = record.split_name();
    let mut params = QueryParams::new();
    params.set("priority", priority.as_str());
    params.set("full_name", &record.name);
    params.set("first_name", &first_name);
    params.set("last_name", &last_name);
    params.set("email", &record.email);
    params.set("phone", &phone::query_phone(&record.phone));
    for (key, value) in record.attribution().pairs() {
        params.set(key, value);
    }
    params.append_to(config::redirect_base_url(priority))
}

/// Everything derived from a finished record, computed once.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub result: ScoreResult,
    pub payload: WebhookPayload,
    pub redirect_url: String,
}

impl Submission {
    pub fn prepare(record: &LeadRecord, profile: &ScoreProfile) -> Self {
        let result = evaluate(record, profile);
        Self {
            result,
            payload: WebhookPayload::new(record, &result),
            redirect_url: redirect_url(record, result.priority),
        }
    }
}

/// Destination for finished leads.
#[allow(async_fn_in_trait)]
pub trait LeadSink {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<(), SubmitError>;
}

pub struct Webhook {
    url: String,
}

impl Webhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn from_config() -> Self {
        Self::new(config::get_webhook_url())
    }
}

impl LeadSink for Webhook {
    async fn deliver(&self, payload: &WebhookPayload) -> Result<(), SubmitError> {
        let response = Request::post(&self.url)
            .json(payload)
            .map_err(|e| SubmitError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(SubmitError::Rejected(response.status()))
        }
    }
}

/// Delivers the lead and returns where to send the visitor.
/// Delivery failures are logged only; the redirect is the same either way.
pub async fn submit_lead<S: LeadSink>(
    sink: &S,
    record: &LeadRecord,
    profile: &ScoreProfile,
) -> String {
    let submission = Submission::prepare(record, profile);
    info!(
        "Submitting lead with score {} ({})",
        submission.result.score,
        submission.result.priority.as_str()
    );
    match sink.deliver(&submission.payload).await {
        Ok(()) => info!("Lead successfully submitted to CRM"),
        Err(e) => error!("Error submitting lead to webhook: {}", e),
    }
    submission.redirect_url
}
