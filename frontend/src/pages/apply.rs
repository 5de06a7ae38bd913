use gloo_timers::callback::Timeout;
use log::{error, info};
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::config;
use crate::lead::phone;
use crate::lead::record::{
    LeadRecord, ACTIVITY_OPTIONS, CHALLENGE_OPTIONS, CONCERN_OPTIONS, TIMELINE_OPTIONS,
};
use crate::lead::steps::{Advance, Step, StepSequencer, AUTO_ADVANCE_MS, PROGRESS_GROW_MS, TOTAL_STEPS};
use crate::lead::submit::{submit_lead, Webhook};
use crate::lead::tracking;

pub enum QualifyMsg {
    SelectConcern(String),
    ToggleActivity(String),
    SelectChallenge(String),
    SelectTimeline(String),
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    SetConsent(bool),
    SetWebsite(String),
    Advance,
    GrowProgress,
    Redirect(String),
}

pub struct QualifyForm {
    record: LeadRecord,
    sequencer: StepSequencer,
    progress: u32,
    processing: bool,
    // Dropping these on unmount cancels the timers
    _auto_advance: Option<Timeout>,
    _progress_timer: Option<Timeout>,
}

impl QualifyForm {
    fn schedule_progress(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self._progress_timer = Some(Timeout::new(PROGRESS_GROW_MS, move || {
            link.send_message(QualifyMsg::GrowProgress);
        }));
    }

    fn schedule_advance(&mut self, ctx: &Context<Self>) {
        if !self.sequencer.current().auto_advances() {
            return;
        }
        let link = ctx.link().clone();
        self._auto_advance = Some(Timeout::new(AUTO_ADVANCE_MS, move || {
            link.send_message(QualifyMsg::Advance);
        }));
    }

    fn choice_list(&self, ctx: &Context<Self>, options: &[&str], selected: &str, msg: fn(String) -> QualifyMsg) -> Html {
        html! {
            <div class="choice-list">
                { for options.iter().map(|option| {
                    let is_selected = *option == selected;
                    let value = option.to_string();
                    let onclick = ctx.link().callback(move |_| msg(value.clone()));
                    html! {
                        <button class={classes!("choice", is_selected.then(|| "selected"))} {onclick}>
                            <span>{*option}</span>
                            <div class={classes!("choice-dot", is_selected.then(|| "selected"))}></div>
                        </button>
                    }
                }) }
            </div>
        }
    }

    fn text_field(&self, ctx: &Context<Self>, name: &'static str, kind: &'static str, label: &'static str, value: &str, msg: fn(String) -> QualifyMsg) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            msg(input.value())
        });
        html! {
            <div class="field">
                <input type={kind} name={name} id={name} value={value.to_string()} {oninput} required={true} placeholder={label} />
                <label for={name}>{label}</label>
            </div>
        }
    }

    fn render_step(&self, ctx: &Context<Self>) -> Html {
        let record = &self.record;
        match self.sequencer.current() {
            Step::Concern => html! {
                <div class="step">
                    <h2>{"Are you concerned about 1099-DA mismatch on your tax return?"}</h2>
                    <p class="step-hint">{"This helps us understand your situation."}</p>
                    { self.choice_list(ctx, CONCERN_OPTIONS, &record.concern_1099da, QualifyMsg::SelectConcern) }
                </div>
            },
            Step::Activity => html! {
                <div class="step">
                    <h2>{"What best describes your crypto activity?"}</h2>
                    <p class="step-hint">{"Select all that apply to your situation."}</p>
                    <div class="activity-grid">
                        { for ACTIVITY_OPTIONS.iter().map(|item| {
                            let value = item.to_string();
                            let onclick = ctx.link().callback(move |_| QualifyMsg::ToggleActivity(value.clone()));
                            html! {
                                <button class={classes!("choice", record.has_activity(item).then(|| "selected"))} {onclick}>
                                    {*item}
                                </button>
                            }
                        }) }
                    </div>
                </div>
            },
            Step::Challenge => html! {
                <div class="step">
                    <h2>{"What's your biggest challenge?"}</h2>
                    <p class="step-hint">{"Help us understand what needs fixing."}</p>
                    { self.choice_list(ctx, CHALLENGE_OPTIONS, &record.challenge, QualifyMsg::SelectChallenge) }
                </div>
            },
            Step::Timeline => html! {
                <div class="step">
                    <h2>{"When do you need this resolved?"}</h2>
                    <p class="step-hint">{"We'll prioritize your audit based on your timeline."}</p>
                    { self.choice_list(ctx, TIMELINE_OPTIONS, &record.timeline, QualifyMsg::SelectTimeline) }
                </div>
            },
            Step::Contact => {
                let onwebsite = ctx.link().callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    QualifyMsg::SetWebsite(input.value())
                });
                let onconsent = ctx.link().callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    QualifyMsg::SetConsent(input.checked())
                });
                html! {
                    <div class="step">
                        <h2>{"Final step: Your contact details"}</h2>
                        <p class="step-hint">{"Where should we send your audit results?"}</p>
                        <div class="honeypot" aria-hidden="true">
                            <input type="text" name="website" value={record.website.clone()} oninput={onwebsite} tabindex="-1" autocomplete="off" />
                        </div>
                        { self.text_field(ctx, "name", "text", "Full Name", &record.name, QualifyMsg::SetName) }
                        { self.text_field(ctx, "email", "email", "Email Address", &record.email, QualifyMsg::SetEmail) }
                        { self.text_field(ctx, "phone", "tel", "Phone Number", &record.phone, QualifyMsg::SetPhone) }
                        <label class="consent" for="consent">
                            <input type="checkbox" id="consent" name="consent" checked={record.consent} onchange={onconsent} />
                            <span>
                                {"By checking this box, you agree to be contacted by MoonTax specialists regarding your crypto tax situation via email, phone, or SMS. You can opt-out at any time."}
                            </span>
                        </label>
                    </div>
                }
            }
            Step::Received => html! {
                <div class="step received">
                    <h2>{"Thank you for your submission!"}</h2>
                    <p class="step-hint">
                        {"We have received your details. Our team will review your information and reach out if there's a fit."}
                    </p>
                    <a href="/" class="home-link">{"Return to Homepage"}</a>
                </div>
            },
        }
    }
}

impl Component for QualifyForm {
    type Message = QualifyMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut record = LeadRecord::new();
        let attribution = tracking::load_attribution().unwrap_or_default();
        if !attribution.is_empty() {
            info!("Loaded attribution for this session");
        }
        record.hydrate_attribution(attribution);

        let mut form = Self {
            record,
            sequencer: StepSequencer::new(),
            progress: 0,
            processing: false,
            _auto_advance: None,
            _progress_timer: None,
        };
        form.schedule_progress(ctx);
        form
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        // Only the redirect is handled once the lead is on its way
        if self.processing && !matches!(msg, QualifyMsg::Redirect(_)) {
            return false;
        }
        match msg {
            QualifyMsg::SelectConcern(option) => {
                self.record.concern_1099da = option;
                self.schedule_advance(ctx);
                true
            }
            QualifyMsg::ToggleActivity(item) => {
                self.record.toggle_activity(&item);
                true
            }
            QualifyMsg::SelectChallenge(option) => {
                self.record.challenge = option;
                self.schedule_advance(ctx);
                true
            }
            QualifyMsg::SelectTimeline(option) => {
                self.record.timeline = option;
                self.schedule_advance(ctx);
                true
            }
            QualifyMsg::SetName(name) => {
                self.record.name = name;
                true
            }
            QualifyMsg::SetEmail(email) => {
                self.record.email = email;
                true
            }
            QualifyMsg::SetPhone(value) => {
                self.record.phone = phone::format_input(&value);
                true
            }
            QualifyMsg::SetConsent(consent) => {
                self.record.consent = consent;
                true
            }
            QualifyMsg::SetWebsite(website) => {
                self.record.website = website;
                false
            }
            QualifyMsg::GrowProgress => {
                self.progress = self.sequencer.progress_percent();
                true
            }
            QualifyMsg::Advance => {
                match self.sequencer.advance(&self.record) {
                    Advance::Moved(step) => {
                        info!("Moved to step {} ({})", step.number(), step.title());
                        self.schedule_progress(ctx);
                        true
                    }
                    Advance::Rejected => {
                        self.schedule_progress(ctx);
                        true
                    }
                    Advance::Blocked => false,
                    Advance::Submit => {
                        self.processing = true;
                        let record = self.record.clone();
                        ctx.link().send_future(async move {
                            let sink = Webhook::from_config();
                            let url = submit_lead(&sink, &record, &config::SCORE_PROFILE).await;
                            QualifyMsg::Redirect(url)
                        });
                        true
                    }
                }
            }
            QualifyMsg::Redirect(url) => {
                info!("Redirecting to consultation page");
                if let Some(window) = window() {
                    if let Err(e) = window.location().set_href(&url) {
                        error!("Error redirecting to {}: {:?}", url, e);
                    }
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let current = self.sequencer.current();
        let can_continue = self.sequencer.can_advance(&self.record);

        html! {
            <>
            <style>
                {r#"
                    .qualify-page {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 6rem 1.5rem;
                    }
                    .qualify-logo {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        display: flex;
                        justify-content: center;
                        padding-top: 2.75rem;
                        z-index: 50;
                    }
                    .qualify-logo img { height: 2rem; width: auto; }
                    .qualify-card {
                        width: 100%;
                        max-width: 42rem;
                        overflow: hidden;
                        border-radius: 2.5rem;
                        background: rgba(9, 9, 11, 0.75);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                        position: relative;
                        z-index: 60;
                    }
                    .progress-track { height: 4px; width: 100%; background: rgba(255, 255, 255, 0.05); position: relative; }
                    .progress-fill {
                        position: absolute;
                        top: 0;
                        left: 0;
                        height: 100%;
                        background: #f97316;
                        transition: width 1s ease-out;
                    }
                    .qualify-body { padding: 3rem; }
                    .step-meta {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 2rem;
                        font-family: monospace;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .step-meta .count { color: #f97316; }
                    .step-meta .title { color: #71717a; }
                    .step h2 { font-size: 2.25rem; font-weight: 600; color: #fff; margin-bottom: 1rem; }
                    .step-hint { color: #a1a1aa; margin-bottom: 2rem; }
                    .choice-list { display: grid; grid-template-columns: 1fr; gap: 0.75rem; }
                    .activity-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
                    .choice {
                        padding: 1rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        color: #a1a1aa;
                        text-align: left;
                        font-size: 0.875rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .choice:hover { border-color: rgba(255, 255, 255, 0.2); }
                    .choice.selected { background: rgba(249, 115, 22, 0.1); border-color: #f97316; color: #fff; }
                    .choice-dot { width: 1.25rem; height: 1.25rem; border-radius: 50%; border: 1px solid #3f3f46; }
                    .choice-dot.selected { border-color: #fff; background: #fff; }
                    .honeypot { position: absolute; left: -9999px; opacity: 0; height: 0; overflow: hidden; }
                    .field { position: relative; margin-bottom: 1rem; }
                    .field input {
                        width: 100%;
                        padding: 1.5rem 1rem 0.5rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                    }
                    .field input::placeholder { color: transparent; }
                    .field label { position: absolute; left: 1rem; top: 0.5rem; font-size: 0.75rem; color: #71717a; }
                    .consent { display: flex; gap: 0.75rem; align-items: flex-start; color: #71717a; font-size: 0.75rem; cursor: pointer; }
                    .continue-row { margin-top: 2.5rem; display: flex; justify-content: flex-end; }
                    .continue-button {
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        border: none;
                        font-weight: 600;
                        background: #fff;
                        color: #000;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .continue-button:hover { background: #f97316; color: #fff; }
                    .continue-button:disabled { background: rgba(255, 255, 255, 0.1); color: #52525b; cursor: not-allowed; }
                    .processing { display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 400px; padding: 6rem 1.5rem; text-align: center; }
                    .processing h2 { font-size: 1.5rem; font-weight: 600; color: #fff; margin-bottom: 0.75rem; }
                    .processing p { color: #a1a1aa; }
                    .spinner {
                        width: 4rem;
                        height: 4rem;
                        margin-bottom: 2rem;
                        border: 4px solid rgba(249, 115, 22, 0.2);
                        border-top-color: #f97316;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .home-link { display: inline-block; margin-top: 1rem; color: #f97316; }
                    @media (max-width: 768px) {
                        .qualify-body { padding: 2rem; }
                        .step h2 { font-size: 1.875rem; }
                        .activity-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="qualify-logo">
                <a href="https://moontax.com">
                    <img src="https://cdn.prod.website-files.com/6602e1800d6eea53ab44d610/66030d3bba8bcd44a766d010_MoonTax%20Full.svg" alt="MoonTax" />
                </a>
            </div>
            <div class="qualify-page">
                <div class="qualify-card">
                {
                    if self.processing {
                        html! {
                            <div class="processing">
                                <div class="spinner"></div>
                                <h2>{"Analyzing your tax situation..."}</h2>
                                <p>{"Matching you with the right specialist."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <>
                            <div class="progress-track">
                                <div class="progress-fill" style={format!("width: {}%;", self.progress)}></div>
                            </div>
                            <div class="qualify-body">
                                <div class="step-meta">
                                    <span class="count">{format!("Step {} of {}", current.number().min(TOTAL_STEPS), TOTAL_STEPS)}</span>
                                    <span class="title">{current.title()}</span>
                                </div>
                                { self.render_step(ctx) }
                                {
                                    if let Some(label) = current.continue_label() {
                                        html! {
                                            <div class="continue-row">
                                                <button
                                                    class="continue-button"
                                                    disabled={!can_continue}
                                                    onclick={ctx.link().callback(|_| QualifyMsg::Advance)}
                                                >
                                                    {label}{" →"}
                                                </button>
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                            </>
                        }
                    }
                }
                </div>
            </div>
            </>
        }
    }
}
