//! Drone directives and the rule table that turns them into actions.
//!
//! Rules are evaluated top to bottom and the first match wins. The plain
//! "left"/"right" rows exclude "yaw" and "roll" so compound phrases reach
//! their own rows further down; "up"/"down" carry no such guard, so
//! "yaw up" resolves to an ascent.

use std::fmt;

use super::action::{DroneAction, ASCEND_CM, DEFAULT_MOVE_CM, ROTATE_DEGREES};
use crate::domain::conversation::normalize;

/// Predicate value meaning "no pending directive".
pub const NO_DIRECTIVE: &str = "none";

/// A pending movement command taken from the responder's side channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive(String);

impl Directive {
    /// Creates a directive from free text, normalizing it.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(normalize(text.as_ref()))
    }

    /// Reads a predicate value; empty or `"none"` means nothing is pending.
    pub fn from_predicate(value: Option<&str>) -> Option<Self> {
        let value = normalize(value?);
        if value.is_empty() || value == NO_DIRECTIVE {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Returns the normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the directive table.
#[derive(Debug, Clone)]
pub struct DirectiveRule {
    /// Matches when any of these substrings is present.
    pub any_of: &'static [&'static str],
    /// Vetoes the match when any of these substrings is present.
    pub none_of: &'static [&'static str],
    /// Action produced on a match.
    pub action: DroneAction,
}

impl DirectiveRule {
    const fn new(any_of: &'static [&'static str], action: DroneAction) -> Self {
        Self {
            any_of,
            none_of: &[],
            action,
        }
    }

    const fn unless(mut self, none_of: &'static [&'static str]) -> Self {
        self.none_of = none_of;
        self
    }

    /// Returns true if the directive triggers this rule.
    pub fn matches(&self, directive: &Directive) -> bool {
        let text = directive.as_str();
        self.any_of.iter().any(|t| text.contains(t))
            && !self.none_of.iter().any(|t| text.contains(t))
    }
}

const COMPOUND_TURNS: &[&str] = &["yaw", "roll"];

const STANDARD_RULES: &[DirectiveRule] = &[
    DirectiveRule::new(&["take off"], DroneAction::Takeoff),
    DirectiveRule::new(&["land"], DroneAction::Land),
    DirectiveRule::new(&["forward", "pitch up"], DroneAction::MoveForward(DEFAULT_MOVE_CM)),
    DirectiveRule::new(&["backward", "pitch down"], DroneAction::MoveBack(DEFAULT_MOVE_CM)),
    DirectiveRule::new(&["left"], DroneAction::MoveLeft(DEFAULT_MOVE_CM)).unless(COMPOUND_TURNS),
    DirectiveRule::new(&["right"], DroneAction::MoveRight(DEFAULT_MOVE_CM)).unless(COMPOUND_TURNS),
    DirectiveRule::new(&["up"], DroneAction::MoveUp(ASCEND_CM)),
    DirectiveRule::new(&["down"], DroneAction::MoveDown(DEFAULT_MOVE_CM)),
    DirectiveRule::new(&["flip"], DroneAction::FlipBack),
    DirectiveRule::new(&["yaw left"], DroneAction::RotateCcw(ROTATE_DEGREES)),
    DirectiveRule::new(&["yaw right"], DroneAction::RotateCw(ROTATE_DEGREES)),
    DirectiveRule::new(&["roll left"], DroneAction::MoveLeft(DEFAULT_MOVE_CM)),
    DirectiveRule::new(&["roll right"], DroneAction::MoveRight(DEFAULT_MOVE_CM)),
];

/// Ordered directive table.
#[derive(Debug, Clone, Copy)]
pub struct DirectiveRules {
    rules: &'static [DirectiveRule],
}

impl DirectiveRules {
    /// The built-in table.
    pub const fn standard() -> Self {
        Self {
            rules: STANDARD_RULES,
        }
    }

    /// Resolves a directive to the first matching action.
    pub fn resolve(&self, directive: &Directive) -> Option<DroneAction> {
        self.rules
            .iter()
            .find(|rule| rule.matches(directive))
            .map(|rule| rule.action)
    }
}

impl Default for DirectiveRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str) -> Option<DroneAction> {
        DirectiveRules::standard().resolve(&Directive::new(text))
    }

    #[test]
    fn resolves_each_row() {
        assert_eq!(resolve("take off"), Some(DroneAction::Takeoff));
        assert_eq!(resolve("land"), Some(DroneAction::Land));
        assert_eq!(resolve("forward"), Some(DroneAction::MoveForward(30)));
        assert_eq!(resolve("pitch up"), Some(DroneAction::MoveForward(30)));
        assert_eq!(resolve("backward"), Some(DroneAction::MoveBack(30)));
        assert_eq!(resolve("pitch down"), Some(DroneAction::MoveBack(30)));
        assert_eq!(resolve("left"), Some(DroneAction::MoveLeft(30)));
        assert_eq!(resolve("right"), Some(DroneAction::MoveRight(30)));
        assert_eq!(resolve("up"), Some(DroneAction::MoveUp(50)));
        assert_eq!(resolve("down"), Some(DroneAction::MoveDown(30)));
        assert_eq!(resolve("flip"), Some(DroneAction::FlipBack));
        assert_eq!(resolve("yaw left"), Some(DroneAction::RotateCcw(45)));
        assert_eq!(resolve("yaw right"), Some(DroneAction::RotateCw(45)));
        assert_eq!(resolve("roll left"), Some(DroneAction::MoveLeft(30)));
        assert_eq!(resolve("roll right"), Some(DroneAction::MoveRight(30)));
    }

    #[test]
    fn yaw_left_rotates_instead_of_moving_left() {
        assert_eq!(resolve("Yaw Left"), Some(DroneAction::RotateCcw(45)));
    }

    #[test]
    fn pitch_up_is_forward_not_ascend() {
        assert_eq!(resolve("pitch up 30"), Some(DroneAction::MoveForward(30)));
    }

    #[test]
    fn yaw_up_keeps_unguarded_ascent() {
        assert_eq!(resolve("yaw up"), Some(DroneAction::MoveUp(50)));
    }

    #[test]
    fn land_wins_over_later_rows() {
        assert_eq!(resolve("land then flip"), Some(DroneAction::Land));
    }

    #[test]
    fn unknown_directive_resolves_to_nothing() {
        assert_eq!(resolve("hover"), None);
        assert_eq!(resolve("yaw"), None);
    }

    #[test]
    fn predicate_none_is_not_a_directive() {
        assert_eq!(Directive::from_predicate(None), None);
        assert_eq!(Directive::from_predicate(Some("")), None);
        assert_eq!(Directive::from_predicate(Some("None")), None);
        assert_eq!(
            Directive::from_predicate(Some(" Take Off ")),
            Some(Directive::new("take off"))
        );
    }
}
