//! Intent classifier.
//!
//! Maps a normalized utterance to an [`Intent`] by walking an ordered table
//! of phrase sets. The first row with a phrase contained in the utterance
//! wins, so row order is the only disambiguation between overlapping sets
//! ("who was detected" appears under both identity and detection result;
//! identity is checked first).

use once_cell::sync::Lazy;

use super::intent::Intent;
use super::utterance::Utterance;

/// One row of the classification table.
#[derive(Debug, Clone)]
pub struct IntentRule {
    /// Intent returned when the row matches.
    pub intent: Intent,
    /// Lower-case phrases; any one contained in the utterance is a match.
    pub phrases: Vec<String>,
}

impl IntentRule {
    /// Creates a rule from static phrases.
    pub fn new(intent: Intent, phrases: &[&str]) -> Self {
        Self {
            intent,
            phrases: phrases.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// Returns true if any phrase occurs in the utterance.
    pub fn matches(&self, utterance: &Utterance) -> bool {
        self.phrases.iter().any(|phrase| utterance.contains(phrase))
    }
}

const IDENTITY_PHRASES: &[&str] = &[
    "who is the person in camera",
    "who is in camera",
    "who is in the frame",
    "who am i",
    "what's my name",
    "what is my name",
    "my name",
    "who is that person",
    "who is that",
    "who was detected",
    "who is detected",
    "person in camera",
    "person detected",
];

const FOLLOWUP_PHRASES: &[&str] = &[
    "tell me more about them",
    "tell me more about that person",
    "more about them",
    "more about that person",
];

const DRONE_STATUS_PHRASES: &[&str] = &[
    "is drone connected",
    "drone status",
    "are you connected to drone",
    "drone connection status",
];

const DRONE_CONNECT_PHRASES: &[&str] = &[
    "connect to drone",
    "connect drone",
    "reconnect drone",
    "please connect to drone",
];

const DETECT_PHRASES: &[&str] = &["detect the person", "recognize person"];

const ATTACK_PHRASES: &[&str] = &[
    "attack person",
    "attack detected person",
    "attack the person",
    "attack target",
];

const DETECTION_RESULT_PHRASES: &[&str] =
    &["person detection result", "who was detected", "detection result"];

const ATTACK_RESULT_PHRASES: &[&str] = &["attack result", "attack status", "was attack successful"];

static STANDARD: Lazy<IntentClassifier> = Lazy::new(IntentClassifier::default);

/// Table-driven intent classifier.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    /// Creates a classifier over the given rows, evaluated in order.
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// Returns the shared classifier with the built-in table.
    pub fn standard() -> &'static IntentClassifier {
        &STANDARD
    }

    /// Classifies an utterance; `Fallback` when no row matches.
    pub fn classify(&self, utterance: &Utterance) -> Intent {
        self.rules
            .iter()
            .find(|rule| rule.matches(utterance))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Fallback)
    }

    /// Convenience wrapper over raw text.
    pub fn classify_text(&self, text: &str) -> Intent {
        self.classify(&Utterance::new(text))
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(vec![
            IntentRule::new(Intent::PersonIdentity, IDENTITY_PHRASES),
            IntentRule::new(Intent::PersonFollowup, FOLLOWUP_PHRASES),
            IntentRule::new(Intent::DroneStatus, DRONE_STATUS_PHRASES),
            IntentRule::new(Intent::DroneConnect, DRONE_CONNECT_PHRASES),
            IntentRule::new(Intent::PersonDetect, DETECT_PHRASES),
            IntentRule::new(Intent::PersonAttack, ATTACK_PHRASES),
            IntentRule::new(Intent::DetectionResult, DETECTION_RESULT_PHRASES),
            IntentRule::new(Intent::AttackResult, ATTACK_RESULT_PHRASES),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classify(text: &str) -> Intent {
        IntentClassifier::standard().classify_text(text)
    }

    #[test]
    fn identity_phrases_classify_as_person_identity() {
        for phrase in IDENTITY_PHRASES {
            assert_eq!(classify(phrase), Intent::PersonIdentity, "phrase: {}", phrase);
        }
    }

    #[test]
    fn identity_ignores_case_and_punctuation() {
        assert_eq!(classify("Who Is In Camera?"), Intent::PersonIdentity);
        assert_eq!(classify("  WHO AM I!!  "), Intent::PersonIdentity);
        assert_eq!(classify("...what's my name..."), Intent::PersonIdentity);
    }

    #[test]
    fn who_was_detected_prefers_identity_over_detection_result() {
        assert_eq!(classify("who was detected"), Intent::PersonIdentity);
    }

    #[test]
    fn followup_phrases_classify() {
        assert_eq!(classify("Tell me more about them"), Intent::PersonFollowup);
        assert_eq!(classify("more about that person please"), Intent::PersonFollowup);
    }

    #[test]
    fn drone_status_and_connect() {
        assert_eq!(classify("Drone status"), Intent::DroneStatus);
        assert_eq!(classify("is drone connected?"), Intent::DroneStatus);
        assert_eq!(classify("please connect to drone"), Intent::DroneConnect);
        assert_eq!(classify("reconnect drone"), Intent::DroneConnect);
    }

    #[test]
    fn detect_and_attack() {
        assert_eq!(classify("detect the person"), Intent::PersonDetect);
        assert_eq!(classify("attack target now"), Intent::PersonAttack);
    }

    #[test]
    fn results_are_classified() {
        assert_eq!(classify("detection result"), Intent::DetectionResult);
        assert_eq!(classify("person detection result?"), Intent::DetectionResult);
        assert_eq!(classify("attack status"), Intent::AttackResult);
        assert_eq!(classify("was attack successful"), Intent::AttackResult);
    }

    #[test]
    fn unmatched_input_falls_back() {
        assert_eq!(classify("asdkjf"), Intent::Fallback);
        assert_eq!(classify("take off"), Intent::Fallback);
        assert_eq!(classify(""), Intent::Fallback);
    }

    #[test]
    fn earlier_rows_win() {
        let classifier = IntentClassifier::new(vec![
            IntentRule::new(Intent::AttackResult, &["status"]),
            IntentRule::new(Intent::DroneStatus, &["drone status"]),
        ]);

        assert_eq!(classifier.classify_text("drone status"), Intent::AttackResult);
    }

    proptest! {
        #[test]
        fn identity_phrase_matches_under_any_casing_and_wrapping(
            idx in 0..IDENTITY_PHRASES.len(),
            upper in proptest::collection::vec(any::<bool>(), 40),
            prefix in "[ \t.!?]{0,4}",
            suffix in "[ \t.!?]{0,4}",
        ) {
            let phrase: String = IDENTITY_PHRASES[idx]
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                .collect();
            let input = format!("{}{}{}", prefix, phrase, suffix);
            prop_assert_eq!(classify(&input), Intent::PersonIdentity);
        }
    }
}
