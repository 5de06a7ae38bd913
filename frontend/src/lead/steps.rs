use crate::lead::record::LeadRecord;

/// Number of visible steps; the hidden `Received` screen is not counted.
pub const TOTAL_STEPS: u32 = 5;
/// Delay between picking a single-choice answer and moving on.
pub const AUTO_ADVANCE_MS: u32 = 300;
/// Delay before the progress bar grows to the new step's width.
pub const PROGRESS_GROW_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Concern,
    Activity,
    Challenge,
    Timeline,
    Contact,
    /// Shown instead of submitting when the honeypot is filled.
    Received,
}

impl Step {
    pub fn number(&self) -> u32 {
        match self {
            Step::Concern => 1,
            Step::Activity => 2,
            Step::Challenge => 3,
            Step::Timeline => 4,
            Step::Contact => 5,
            Step::Received => 6,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Concern => "1099-DA",
            Step::Activity => "Activity",
            Step::Challenge => "Challenge",
            Step::Timeline => "Timeline",
            Step::Contact => "Contact",
            Step::Received => "Booking",
        }
    }

    fn next(&self) -> Option<Step> {
        match self {
            Step::Concern => Some(Step::Activity),
            Step::Activity => Some(Step::Challenge),
            Step::Challenge => Some(Step::Timeline),
            Step::Timeline => Some(Step::Contact),
            Step::Contact | Step::Received => None,
        }
    }

    pub fn progress_percent(&self) -> u32 {
        (self.number() * 100 / TOTAL_STEPS).min(100)
    }

    pub fn is_valid(&self, record: &LeadRecord) -> bool {
        match self {
            Step::Concern => !record.concern_1099da.is_empty(),
            Step::Activity => !record.activity.is_empty(),
            Step::Challenge => !record.challenge.is_empty(),
            Step::Timeline => !record.timeline.is_empty(),
            Step::Contact => {
                !record.name.is_empty()
                    && !record.email.is_empty()
                    && !record.phone.is_empty()
                    && record.consent
            }
            Step::Received => true,
        }
    }

    /// Single-choice steps move on by themselves once answered.
    pub fn auto_advances(&self) -> bool {
        matches!(self, Step::Concern | Step::Challenge | Step::Timeline)
    }

    /// Label of the explicit continue button, for steps that have one.
    pub fn continue_label(&self) -> Option<&'static str> {
        match self {
            Step::Activity => Some("Continue"),
            Step::Contact => Some("Get My Free Audit"),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Moved(Step),
    /// Current step is unanswered or already terminal.
    Blocked,
    /// Contact details are complete; the lead should be submitted.
    Submit,
    /// Honeypot tripped; now on `Received` and nothing is sent.
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepSequencer {
    current: Step,
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSequencer {
    pub fn new() -> Self {
        Self { current: Step::Concern }
    }

    pub fn current(&self) -> Step {
        self.current
    }

    pub fn progress_percent(&self) -> u32 {
        self.current.progress_percent()
    }

    pub fn can_advance(&self, record: &LeadRecord) -> bool {
        self.current != Step::Received && self.current.is_valid(record)
    }

    pub fn advance(&mut self, record: &LeadRecord) -> Advance {
        if !self.can_advance(record) {
            return Advance::Blocked;
        }
        match self.current.next() {
            Some(step) => {
                self.current = step;
                Advance::Moved(step)
            }
            None if record.is_suspected_bot() => {
                log::warn!("Bot detected via honeypot");
                self.current = Step::Received;
                Advance::Rejected
            }
            None => Advance::Submit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qualified() -> LeadRecord {
        let mut record = LeadRecord::new();
        record.concern_1099da = "Yes, I expect to receive one this tax season".to_string();
        record.toggle_activity("Mining");
        record.challenge = "I am worried about an IRS audit".to_string();
        record.timeline = "Immediately (ASAP)".to_string();
        record.name = "Ada Lovelace".to_string();
        record.email = "ada@example.com".to_string();
        record.phone = "(555) 123-4567".to_string();
        record.consent = true;
        record
    }

    #[test]
    fn progress_tracks_step_number() {
        let steps = [
            (Step::Concern, 20),
            (Step::Activity, 40),
            (Step::Challenge, 60),
            (Step::Timeline, 80),
            (Step::Contact, 100),
            (Step::Received, 100),
        ];
        for (step, expected) in steps {
            assert_eq!(step.progress_percent(), expected, "{:?}", step);
            assert_eq!(
                step.progress_percent(),
                (step.number() * 100 / TOTAL_STEPS).min(100)
            );
        }
    }

    #[test]
    fn walks_every_step_then_submits() {
        let record = qualified();
        let mut sequencer = StepSequencer::new();
        assert_eq!(sequencer.advance(&record), Advance::Moved(Step::Activity));
        assert_eq!(sequencer.advance(&record), Advance::Moved(Step::Challenge));
        assert_eq!(sequencer.advance(&record), Advance::Moved(Step::Timeline));
        assert_eq!(sequencer.advance(&record), Advance::Moved(Step::Contact));
        assert_eq!(sequencer.progress_percent(), 100);
        assert_eq!(sequencer.advance(&record), Advance::Submit);
        assert_eq!(sequencer.current(), Step::Contact);
    }

    #[test]
    fn unanswered_steps_block() {
        let mut record = LeadRecord::new();
        let mut sequencer = StepSequencer::new();
        assert_eq!(sequencer.advance(&record), Advance::Blocked);
        assert_eq!(sequencer.current(), Step::Concern);

        record.concern_1099da = "I'm not sure — help me find out".to_string();
        assert_eq!(sequencer.advance(&record), Advance::Moved(Step::Activity));
        assert_eq!(sequencer.advance(&record), Advance::Blocked);
    }

    #[test]
    fn contact_step_needs_every_field_and_consent() {
        let full = qualified();
        assert!(Step::Contact.is_valid(&full));

        let mut missing = full.clone();
        missing.consent = false;
        assert!(!Step::Contact.is_valid(&missing));

        let clears: [fn(&mut LeadRecord); 3] = [
            |r| r.name.clear(),
            |r| r.email.clear(),
            |r| r.phone.clear(),
        ];
        for clear in clears {
            let mut record = full.clone();
            clear(&mut record);
            assert!(!Step::Contact.is_valid(&record));
        }
    }

    #[test]
    fn honeypot_rejects_instead_of_submitting() {
        let mut record = qualified();
        record.website = "https://buy-links.example".to_string();
        let mut sequencer = StepSequencer::new();
        for _ in 0..4 {
            assert!(matches!(sequencer.advance(&record), Advance::Moved(_)));
        }
        assert_eq!(sequencer.advance(&record), Advance::Rejected);
        assert_eq!(sequencer.current(), Step::Received);
        assert_eq!(sequencer.advance(&record), Advance::Blocked);
    }

    #[test]
    fn auto_advance_and_continue_controls_partition_steps() {
        for step in [Step::Concern, Step::Activity, Step::Challenge, Step::Timeline, Step::Contact] {
            assert_ne!(step.auto_advances(), step.continue_label().is_some(), "{:?}", step);
        }
        assert_eq!(Step::Contact.continue_label(), Some("Get My Free Audit"));
    }
}
