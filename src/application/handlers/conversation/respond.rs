//! Respond command handler.
//!
//! One conversational turn: classify the utterance, answer built-in intents
//! from the stores and the drone link, hand everything else to the
//! responder, then forward any drone directive the responder left behind.
//! Nothing here returns an error; every failure degrades to a reply string.

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::application::background::{spawn_with_sink, AttackResultSink};
use crate::application::handlers::drone::{ActionDispatcher, DispatchOutcome};
use crate::application::handlers::identity::IdentityResolver;
use crate::domain::conversation::{ConversationContext, Intent, IntentClassifier, Utterance};
use crate::domain::drone::{Directive, NO_DIRECTIVE};
use crate::ports::{
    AttackLauncher, AttackResultStore, ConversationalResponder, DetectionStore, PredicateStore,
    UserDirectory, DIRECTION_PREDICATE,
};

pub const DRONE_CONNECTED: &str = "Drone is connected.";
pub const DRONE_NOT_CONNECTED: &str = "Drone is not connected.";
pub const CONNECT_SUCCEEDED: &str = "Drone connected successfully!";
pub const CONNECT_FAILED: &str = "Failed to connect to drone.";
pub const NO_PERSON_DETECTED: &str =
    "No person detected or identity unknown. Please ensure live face detection is running.";
pub const ATTACK_STARTING: &str = "Starting attack...";
pub const ATTACK_STARTED: &str = "Attack sequence started!";
pub const ATTACK_NO_TARGET: &str = "No detected person to attack. Please detect a person first.";
pub const ATTACK_ACKNOWLEDGED: &str =
    "Attack sequence initiated. (processing in background, please check attack result in a few seconds)";
pub const NO_DETECTION_RESULT: &str = "No detection result yet.";
pub const NO_ATTACK_RESULT: &str = "No attack result yet.";
pub const NOT_UNDERSTOOD: &str = "Sorry, I don't understand that.";

/// Collaborators the engine talks to.
#[derive(Clone)]
pub struct ConversationPorts {
    pub detections: Arc<dyn DetectionStore>,
    pub users: Arc<dyn UserDirectory>,
    pub attack_results: Arc<dyn AttackResultStore>,
    pub responder: Arc<dyn ConversationalResponder>,
    pub predicates: Arc<dyn PredicateStore>,
    pub attack: Arc<dyn AttackLauncher>,
}

/// Result of one turn, including handles to the work it started.
#[derive(Debug)]
pub struct TurnOutcome {
    pub reply: String,
    pub intent: Intent,
    /// Drone dispatch started from the direction predicate.
    pub dispatched: Option<JoinHandle<DispatchOutcome>>,
    /// Background attack, resolving to the recorded outcome.
    pub attack: Option<JoinHandle<String>>,
}

/// The command core.
#[derive(Clone)]
pub struct ConversationEngine {
    classifier: IntentClassifier,
    identity: IdentityResolver,
    dispatcher: ActionDispatcher,
    ports: ConversationPorts,
}

impl ConversationEngine {
    pub fn new(ports: ConversationPorts, dispatcher: ActionDispatcher) -> Self {
        Self {
            classifier: IntentClassifier::standard().clone(),
            identity: IdentityResolver::new(ports.detections.clone(), ports.users.clone()),
            dispatcher,
            ports,
        }
    }

    pub fn dispatcher(&self) -> &ActionDispatcher {
        &self.dispatcher
    }

    /// Answers an utterance.
    pub async fn respond(&self, text: &str, context: &ConversationContext) -> String {
        self.handle(text, context).await.reply
    }

    /// Answers an utterance and returns handles to any background work.
    #[tracing::instrument(skip(self, text, context), fields(intent = tracing::field::Empty))]
    pub async fn handle(&self, text: &str, context: &ConversationContext) -> TurnOutcome {
        let utterance = Utterance::new(text);
        let intent = self.classifier.classify(&utterance);
        tracing::Span::current().record("intent", intent.as_str());
        tracing::debug!(utterance = %utterance.normalized(), "classified utterance");

        let mut attack = None;
        let reply = match intent {
            Intent::DroneStatus => self.drone_status().await,
            Intent::DroneConnect => self.connect_drone().await,
            Intent::PersonIdentity => self.identity.resolve_person(context).await.to_string(),
            Intent::PersonFollowup => self.identity.resolve_followup().await.to_string(),
            Intent::PersonDetect => self.detected_person().await,
            Intent::PersonAttack => {
                attack = Some(self.start_attack().await);
                ATTACK_ACKNOWLEDGED.to_string()
            }
            Intent::DetectionResult => self.detection_result().await,
            Intent::AttackResult => self.attack_result().await,
            Intent::Fallback => self.fallback(utterance.raw()).await,
        };

        let dispatched = self.forward_directive().await;

        TurnOutcome {
            reply,
            intent,
            dispatched,
            attack,
        }
    }

    async fn drone_status(&self) -> String {
        if self.dispatcher.link().is_connected().await {
            DRONE_CONNECTED.to_string()
        } else {
            DRONE_NOT_CONNECTED.to_string()
        }
    }

    async fn connect_drone(&self) -> String {
        if self.dispatcher.link().connect().await {
            CONNECT_SUCCEEDED.to_string()
        } else {
            CONNECT_FAILED.to_string()
        }
    }

    async fn detected_person(&self) -> String {
        match self.identity.best_match().await {
            Some(name) => format!("Person detected: {}", name),
            None => NO_PERSON_DETECTED.to_string(),
        }
    }

    async fn start_attack(&self) -> JoinHandle<String> {
        if let Err(e) = self.ports.attack_results.set_last_attack_result(ATTACK_STARTING).await {
            tracing::warn!(error = %e, "failed to record attack start");
        }

        let detections = self.ports.detections.clone();
        let launcher = self.ports.attack.clone();
        let sink = Arc::new(AttackResultSink::new(self.ports.attack_results.clone()));

        spawn_with_sink("attack", run_attack(detections, launcher), sink)
    }

    async fn detection_result(&self) -> String {
        match self.ports.detections.last_person_detection_result().await {
            Ok(Some(result)) => result,
            Ok(None) => NO_DETECTION_RESULT.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read detection result");
                NO_DETECTION_RESULT.to_string()
            }
        }
    }

    async fn attack_result(&self) -> String {
        match self.ports.attack_results.last_attack_result().await {
            Ok(Some(result)) => result,
            Ok(None) => NO_ATTACK_RESULT.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read attack result");
                NO_ATTACK_RESULT.to_string()
            }
        }
    }

    async fn fallback(&self, raw: &str) -> String {
        match self.ports.responder.respond(raw).await {
            Ok(Some(reply)) => reply,
            Ok(None) => NOT_UNDERSTOOD.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "responder failed");
                NOT_UNDERSTOOD.to_string()
            }
        }
    }

    /// Consumes the direction predicate, dispatching it when set.
    async fn forward_directive(&self) -> Option<JoinHandle<DispatchOutcome>> {
        let value = self.ports.predicates.predicate(DIRECTION_PREDICATE).await;
        let directive = Directive::from_predicate(value.as_deref())?;
        self.ports
            .predicates
            .set_predicate(DIRECTION_PREDICATE, NO_DIRECTIVE)
            .await;
        tracing::info!(directive = %directive.as_str(), "forwarding drone directive");
        Some(self.dispatcher.dispatch(directive))
    }
}

async fn run_attack(detections: Arc<dyn DetectionStore>, launcher: Arc<dyn AttackLauncher>) -> String {
    let target = match detections.last_detected_person().await {
        Ok(person) => person.filter(|p| p.has_face()),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read attack target");
            None
        }
    };
    if target.is_none() {
        return ATTACK_NO_TARGET.to_string();
    }

    match launcher.attack().await {
        Ok(()) => ATTACK_STARTED.to_string(),
        Err(e) => format!("Attack error: {}", e),
    }
}
