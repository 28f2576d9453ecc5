//! Drone domain module.
//!
//! Hardware actions and the ordered rule table that maps free-text
//! directives onto them.

mod action;
mod directive;

pub use action::{DroneAction, ASCEND_CM, DEFAULT_MOVE_CM, ROTATE_DEGREES};
pub use directive::{Directive, DirectiveRule, DirectiveRules, NO_DIRECTIVE};
