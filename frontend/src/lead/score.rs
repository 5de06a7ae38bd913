use serde::Serialize;

use crate::lead::record::LeadRecord;

/// Lead priority, ordered Low < Medium < High.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Reads the `priority` query value. Missing or unknown values mean Low.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("high") => Priority::High,
            Some("medium") => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

/// Tier cutoffs plus the optional click-id bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreProfile {
    pub high_cutoff: u32,
    pub medium_cutoff: u32,
    pub click_id_bonus: u32,
}

impl ScoreProfile {
    pub const STANDARD: ScoreProfile = ScoreProfile {
        high_cutoff: 9,
        medium_cutoff: 5,
        click_id_bonus: 0,
    };

    pub const COMPACT: ScoreProfile = ScoreProfile {
        high_cutoff: 7,
        medium_cutoff: 4,
        click_id_bonus: 1,
    };

    pub fn priority(&self, score: u32) -> Priority {
        if score >= self.high_cutoff {
            Priority::High
        } else if score >= self.medium_cutoff {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u32,
    pub priority: Priority,
}

pub fn concern_points(concern: &str) -> u32 {
    let concern = concern.to_lowercase();
    if concern.contains("expect to receive") {
        2
    } else if concern.contains("not sure") {
        1
    } else {
        0
    }
}

fn activity_weight(item: &str) -> u32 {
    if item.contains("DeFi") || item.contains("High-Volume") || item.contains("Trading Bots") {
        3
    } else if item.contains("Mining") || item.contains("Staking") {
        2
    } else if item.contains("NFTs") || item.contains("HODLing") {
        1
    } else {
        0
    }
}

/// Heaviest selected activity wins; selections do not add up.
pub fn activity_points(activity: &[String]) -> u32 {
    activity
        .iter()
        .map(|item| activity_weight(item))
        .max()
        .unwrap_or(0)
}

pub fn challenge_points(challenge: &str) -> u32 {
    let challenge = challenge.to_lowercase();
    if challenge.contains("irs audit") || challenge.contains("years of unreconciled") {
        3
    } else if challenge.contains("mess")
        || challenge.contains("wallets")
        || challenge.contains("generic software")
    {
        2
    } else {
        0
    }
}

pub fn timeline_points(timeline: &str) -> u32 {
    if timeline.contains("ASAP") {
        3
    } else if timeline.contains("Before the April") {
        2
    } else if timeline.contains("next few months") {
        1
    } else {
        0
    }
}

pub fn lead_score(record: &LeadRecord, profile: &ScoreProfile) -> u32 {
    let bonus = if record.attribution().has_click_id() {
        profile.click_id_bonus
    } else {
        0
    };

    concern_points(&record.concern_1099da)
        + activity_points(&record.activity)
        + challenge_points(&record.challenge)
        + timeline_points(&record.timeline)
        + bonus
}

pub fn evaluate(record: &LeadRecord, profile: &ScoreProfile) -> ScoreResult {
    let score = lead_score(record, profile);
    ScoreResult {
        score,
        priority: profile.priority(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::record::{
        Attribution, ACTIVITY_OPTIONS, CHALLENGE_OPTIONS, CONCERN_OPTIONS, TIMELINE_OPTIONS,
    };
    use proptest::prelude::*;

    fn record(concern: &str, activity: &[&str], challenge: &str, timeline: &str) -> LeadRecord {
        let mut record = LeadRecord::new();
        record.concern_1099da = concern.to_string();
        record.activity = activity.iter().map(|a| a.to_string()).collect();
        record.challenge = challenge.to_string();
        record.timeline = timeline.to_string();
        record
    }

    #[test]
    fn option_weights_match_form_copy() {
        let concern: Vec<u32> = CONCERN_OPTIONS.iter().map(|o| concern_points(o)).collect();
        assert_eq!(concern, vec![2, 1]);

        let activity: Vec<u32> = ACTIVITY_OPTIONS.iter().map(|o| activity_weight(o)).collect();
        assert_eq!(activity, vec![3, 2, 3, 1, 2, 3, 1]);

        let challenge: Vec<u32> = CHALLENGE_OPTIONS.iter().map(|o| challenge_points(o)).collect();
        assert_eq!(challenge, vec![2, 2, 2, 3, 3]);

        let timeline: Vec<u32> = TIMELINE_OPTIONS.iter().map(|o| timeline_points(o)).collect();
        assert_eq!(timeline, vec![3, 2, 1, 0]);
    }

    #[test]
    fn activity_takes_max_not_sum() {
        let picks = vec!["Basic HODLing".to_string(), "Mining".to_string(), "NFTs & Minting".to_string()];
        assert_eq!(activity_points(&picks), 2);
        assert_eq!(activity_points(&[]), 0);
    }

    #[test]
    fn hottest_lead_is_high_priority() {
        let lead = record(
            CONCERN_OPTIONS[0],
            &["DeFi / DEX Power User"],
            "I am worried about an IRS audit",
            "Immediately (ASAP)",
        );
        let result = evaluate(&lead, &ScoreProfile::STANDARD);
        assert_eq!(result.score, 11);
        assert_eq!(result.priority, Priority::High);
    }

    #[test]
    fn standard_cutoffs() {
        let profile = ScoreProfile::STANDARD;
        assert_eq!(profile.priority(4), Priority::Low);
        assert_eq!(profile.priority(5), Priority::Medium);
        assert_eq!(profile.priority(8), Priority::Medium);
        assert_eq!(profile.priority(9), Priority::High);
    }

    #[test]
    fn compact_cutoffs_and_click_bonus() {
        let mut lead = record(CONCERN_OPTIONS[1], &["Mining"], "", "Just exploring options");
        assert_eq!(evaluate(&lead, &ScoreProfile::COMPACT).score, 3);
        assert_eq!(evaluate(&lead, &ScoreProfile::COMPACT).priority, Priority::Low);

        lead.hydrate_attribution(Attribution {
            fbclid: "fb.1".to_string(),
            ..Attribution::default()
        });
        let result = evaluate(&lead, &ScoreProfile::COMPACT);
        assert_eq!(result.score, 4);
        assert_eq!(result.priority, Priority::Medium);

        // Standard never awards the bonus.
        assert_eq!(lead_score(&lead, &ScoreProfile::STANDARD), 3);
    }

    #[test]
    fn priority_from_query_defaults_low() {
        assert_eq!(Priority::from_query(Some("high")), Priority::High);
        assert_eq!(Priority::from_query(Some("medium")), Priority::Medium);
        assert_eq!(Priority::from_query(Some("HIGH")), Priority::Low);
        assert_eq!(Priority::from_query(Some("")), Priority::Low);
        assert_eq!(Priority::from_query(None), Priority::Low);
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"medium\"");
    }

    fn arb_lead() -> impl Strategy<Value = (usize, Vec<bool>, usize, usize, bool)> {
        (
            0..CONCERN_OPTIONS.len() + 1,
            proptest::collection::vec(any::<bool>(), ACTIVITY_OPTIONS.len()),
            0..CHALLENGE_OPTIONS.len() + 1,
            0..TIMELINE_OPTIONS.len() + 1,
            any::<bool>(),
        )
    }

    fn build(
        (concern, picks, challenge, timeline, clicked): &(usize, Vec<bool>, usize, usize, bool),
    ) -> LeadRecord {
        let mut lead = LeadRecord::new();
        lead.concern_1099da = CONCERN_OPTIONS.get(*concern).unwrap_or(&"").to_string();
        lead.activity = ACTIVITY_OPTIONS
            .iter()
            .zip(picks)
            .filter(|(_, picked)| **picked)
            .map(|(option, _)| option.to_string())
            .collect();
        lead.challenge = CHALLENGE_OPTIONS.get(*challenge).unwrap_or(&"").to_string();
        lead.timeline = TIMELINE_OPTIONS.get(*timeline).unwrap_or(&"").to_string();
        if *clicked {
            lead.hydrate_attribution(Attribution {
                gclid: "g-1".to_string(),
                ..Attribution::default()
            });
        }
        lead
    }

    proptest! {
        #[test]
        fn scoring_is_deterministic(input in arb_lead()) {
            for profile in [ScoreProfile::STANDARD, ScoreProfile::COMPACT] {
                prop_assert_eq!(evaluate(&build(&input), &profile), evaluate(&build(&input), &profile));
            }
        }

        #[test]
        fn adding_an_activity_never_lowers_score(input in arb_lead(), extra in 0..ACTIVITY_OPTIONS.len()) {
            let before = build(&input);
            let mut after = before.clone();
            if !after.has_activity(ACTIVITY_OPTIONS[extra]) {
                after.toggle_activity(ACTIVITY_OPTIONS[extra]);
            }
            for profile in [ScoreProfile::STANDARD, ScoreProfile::COMPACT] {
                prop_assert!(evaluate(&after, &profile).score >= evaluate(&before, &profile).score);
                prop_assert!(evaluate(&after, &profile).priority >= evaluate(&before, &profile).priority);
            }
        }

        #[test]
        fn click_id_never_lowers_score(input in arb_lead()) {
            let mut without = input.clone();
            without.4 = false;
            let mut with = input;
            with.4 = true;
            for profile in [ScoreProfile::STANDARD, ScoreProfile::COMPACT] {
                prop_assert!(lead_score(&build(&with), &profile) >= lead_score(&build(&without), &profile));
            }
        }

        #[test]
        fn tier_is_monotonic_in_score(a in 0u32..20, b in 0u32..20) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            for profile in [ScoreProfile::STANDARD, ScoreProfile::COMPACT] {
                prop_assert!(profile.priority(low) <= profile.priority(high));
            }
        }
    }
}
