//! Drone actions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default translation distance in centimetres.
pub const DEFAULT_MOVE_CM: u32 = 30;

/// Distance used when ascending.
pub const ASCEND_CM: u32 = 50;

/// Rotation step in degrees.
pub const ROTATE_DEGREES: u32 = 45;

/// A single hardware call the dispatcher can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "amount", rename_all = "snake_case")]
pub enum DroneAction {
    Takeoff,
    Land,
    MoveForward(u32),
    MoveBack(u32),
    MoveLeft(u32),
    MoveRight(u32),
    MoveUp(u32),
    MoveDown(u32),
    FlipBack,
    RotateCcw(u32),
    RotateCw(u32),
}

impl DroneAction {
    /// Human-readable description used in progress logs.
    pub fn describe(&self) -> &'static str {
        match self {
            DroneAction::Takeoff => "Taking off",
            DroneAction::Land => "Landing",
            DroneAction::MoveForward(_) => "Moving forward",
            DroneAction::MoveBack(_) => "Moving backward",
            DroneAction::MoveLeft(_) => "Moving left",
            DroneAction::MoveRight(_) => "Moving right",
            DroneAction::MoveUp(_) => "Ascending",
            DroneAction::MoveDown(_) => "Descending",
            DroneAction::FlipBack => "Flipping",
            DroneAction::RotateCcw(_) => "Rotating counter-clockwise",
            DroneAction::RotateCw(_) => "Rotating clockwise",
        }
    }

    /// Text command understood by Tello-compatible firmware.
    pub fn sdk_command(&self) -> String {
        match self {
            DroneAction::Takeoff => "takeoff".to_string(),
            DroneAction::Land => "land".to_string(),
            DroneAction::MoveForward(cm) => format!("forward {}", cm),
            DroneAction::MoveBack(cm) => format!("back {}", cm),
            DroneAction::MoveLeft(cm) => format!("left {}", cm),
            DroneAction::MoveRight(cm) => format!("right {}", cm),
            DroneAction::MoveUp(cm) => format!("up {}", cm),
            DroneAction::MoveDown(cm) => format!("down {}", cm),
            DroneAction::FlipBack => "flip b".to_string(),
            DroneAction::RotateCcw(deg) => format!("ccw {}", deg),
            DroneAction::RotateCw(deg) => format!("cw {}", deg),
        }
    }
}

impl fmt::Display for DroneAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DroneAction::Takeoff => write!(f, "takeoff()"),
            DroneAction::Land => write!(f, "land()"),
            DroneAction::MoveForward(cm) => write!(f, "move_forward({})", cm),
            DroneAction::MoveBack(cm) => write!(f, "move_back({})", cm),
            DroneAction::MoveLeft(cm) => write!(f, "move_left({})", cm),
            DroneAction::MoveRight(cm) => write!(f, "move_right({})", cm),
            DroneAction::MoveUp(cm) => write!(f, "move_up({})", cm),
            DroneAction::MoveDown(cm) => write!(f, "move_down({})", cm),
            DroneAction::FlipBack => write!(f, "flip_back()"),
            DroneAction::RotateCcw(deg) => write!(f, "rotate_counter_clockwise({})", deg),
            DroneAction::RotateCw(deg) => write!(f, "rotate_clockwise({})", deg),
        }
    }
}
