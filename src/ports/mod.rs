//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the command core and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `DetectionStore` - Last detected person and detection outcome
//! - `UserDirectory` - Registered user lookup by email or full name
//! - `AttackResultStore` - The last-attack-result slot
//!
//! ## Responder Ports
//!
//! - `ConversationalResponder` - Opaque fallback engine
//! - `PredicateStore` - Side channel the responder writes directives into
//!
//! ## Capability Ports
//!
//! - `DroneDriver` - Drone hardware (real or simulated)
//! - `AttackLauncher` - Attack routine
//! - `DetectionLauncher` - One-shot face detection pass

mod attack_launcher;
mod attack_result_store;
mod conversational_responder;
mod detection_launcher;
mod detection_store;
mod drone_driver;
mod predicate_store;
mod user_directory;

pub use attack_launcher::{AttackError, AttackLauncher};
pub use attack_result_store::AttackResultStore;
pub use conversational_responder::{ConversationalResponder, ResponderError};
pub use detection_launcher::{DetectionLaunchError, DetectionLauncher, DetectionRun};
pub use detection_store::DetectionStore;
pub use drone_driver::{DroneDriver, DroneError};
pub use predicate_store::{PredicateStore, DIRECTION_PREDICATE};
pub use user_directory::UserDirectory;
