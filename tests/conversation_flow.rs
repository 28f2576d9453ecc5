//! Integration tests for full conversational turns.
//!
//! These tests wire the engine the way the server does, with in-memory
//! stores, the pattern responder and a simulated drone, and verify:
//! 1. Built-in intents answer from the stores and the drone link
//! 2. Responder directives reach the drone exactly once
//! 3. Background attacks record their outcome for polling

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use eaglewings::adapters::drone::SimulatedDrone;
use eaglewings::adapters::memory::InMemoryIdentityStore;
use eaglewings::adapters::responder::PatternResponder;
use eaglewings::application::handlers::conversation::{
    ATTACK_ACKNOWLEDGED, ATTACK_NO_TARGET, ATTACK_STARTED, DRONE_NOT_CONNECTED, NOT_UNDERSTOOD,
};
use eaglewings::application::handlers::{
    ActionDispatcher, ConversationEngine, ConversationPorts, DispatchOutcome, DroneLink,
};
use eaglewings::domain::conversation::{ConversationContext, Intent};
use eaglewings::domain::drone::DroneAction;
use eaglewings::domain::foundation::Timestamp;
use eaglewings::domain::identity::{DetectedPerson, FaceDescriptor, UserRecord};
use eaglewings::ports::{AttackError, AttackLauncher, PredicateStore, DIRECTION_PREDICATE};

// =============================================================================
// Test Infrastructure
// =============================================================================

const RULES: &str = r#"
categories:
  - pattern: "HELLO"
    template: "Hello! Ask me to fly."
  - pattern: "FLY *"
    template: "Flying {star}."
    set:
      direction: "{star}"
  - pattern: "DO A FLIP"
    template: "Watch this!"
    set:
      direction: flip
  - pattern: "STAY PUT"
    template: "Staying put."
    set:
      direction: none
"#;

#[derive(Default)]
struct RecordingLauncher {
    calls: AtomicUsize,
}

#[async_trait]
impl AttackLauncher for RecordingLauncher {
    async fn attack(&self) -> Result<(), AttackError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct World {
    engine: ConversationEngine,
    store: InMemoryIdentityStore,
    responder: Arc<PatternResponder>,
    launcher: Arc<RecordingLauncher>,
    dummy: SimulatedDrone,
}

fn world() -> World {
    let store = InMemoryIdentityStore::new();
    let responder = Arc::new(PatternResponder::from_yaml_str(RULES).unwrap());
    let launcher = Arc::new(RecordingLauncher::default());
    let dummy = SimulatedDrone::new();
    let link = Arc::new(DroneLink::new(Arc::new(dummy.clone()), Arc::new(dummy.clone())));

    let ports = ConversationPorts {
        detections: Arc::new(store.clone()),
        users: Arc::new(store.clone()),
        attack_results: Arc::new(store.clone()),
        responder: responder.clone(),
        predicates: responder.clone(),
        attack: launcher.clone(),
    };

    World {
        engine: ConversationEngine::new(ports, ActionDispatcher::new(link)),
        store,
        responder,
        launcher,
        dummy,
    }
}

fn signed_in(email: &str) -> ConversationContext {
    ConversationContext::for_email(email)
}

// =============================================================================
// Identity
// =============================================================================

#[tokio::test]
async fn identity_questions_follow_the_answer_tiers() {
    let w = world();
    let joined = Timestamp::from_unix_secs(1_600_000_000);
    w.store
        .add_user(UserRecord::new("Alice", "alice@example.com").with_created_at(joined))
        .await;
    w.store
        .add_user(UserRecord::new("Bob Stone", "bob@example.com"))
        .await;
    let bob = signed_in("bob@example.com");

    assert_eq!(
        w.engine.respond("Who am I?", &bob).await,
        "According to my database, you are Bob Stone."
    );

    w.store.set_detected_person(Some(DetectedPerson::named("Alice"))).await;
    assert_eq!(
        w.engine.respond("WHO IS IN THE FRAME", &bob).await,
        "I see Alice in the camera. Your full name in my records is Alice."
    );
    assert_eq!(
        w.engine.respond("tell me more about them", &bob).await,
        format!("They joined on {} and use email alice@example.com.", joined)
    );

    w.store.set_detected_person(Some(DetectedPerson::named("Mallory"))).await;
    assert_eq!(
        w.engine.respond("who is that?", &bob).await,
        "I see Mallory in the camera."
    );
    assert_eq!(
        w.engine.respond("more about that person", &bob).await,
        "Sorry, I don't have more information about them."
    );
}

// =============================================================================
// Drone directives
// =============================================================================

#[tokio::test]
async fn responder_directive_drives_the_drone_once() {
    let w = world();

    let outcome = w.engine.handle("fly yaw left", &signed_in("a@b.c")).await;

    assert_eq!(outcome.intent, Intent::Fallback);
    assert_eq!(outcome.reply, "Flying yaw left.");
    assert_eq!(
        outcome.dispatched.unwrap().await.unwrap(),
        DispatchOutcome::Simulated(DroneAction::RotateCcw(45))
    );
    assert_eq!(w.dummy.calls(), vec![DroneAction::RotateCcw(45)]);
    assert_eq!(
        w.responder.predicate(DIRECTION_PREDICATE).await.as_deref(),
        Some("none")
    );
}

#[tokio::test]
async fn none_directive_dispatches_nothing() {
    let w = world();

    let outcome = w.engine.handle("stay put", &ConversationContext::anonymous()).await;

    assert_eq!(outcome.reply, "Staying put.");
    assert!(outcome.dispatched.is_none());
    assert_eq!(w.dummy.call_count(), 0);
}

#[tokio::test]
async fn status_and_chit_chat_leave_the_drone_alone() {
    let w = world();
    let anon = ConversationContext::anonymous();

    assert_eq!(w.engine.respond("is drone connected", &anon).await, DRONE_NOT_CONNECTED);
    assert_eq!(w.engine.respond("hello", &anon).await, "Hello! Ask me to fly.");
    assert_eq!(w.engine.respond("asdkjf", &anon).await, NOT_UNDERSTOOD);

    let flip = w.engine.handle("do a flip", &anon).await;
    flip.dispatched.unwrap().await.unwrap();
    assert_eq!(w.dummy.calls(), vec![DroneAction::FlipBack]);
}

// =============================================================================
// Attack
// =============================================================================

#[tokio::test]
async fn attack_requires_a_face_and_records_outcome() {
    let w = world();
    let anon = ConversationContext::anonymous();

    let first = w.engine.handle("attack detected person", &anon).await;
    assert_eq!(first.reply, ATTACK_ACKNOWLEDGED);
    first.attack.unwrap().await.unwrap();
    assert_eq!(w.launcher.calls.load(Ordering::SeqCst), 0);
    assert_eq!(w.engine.respond("attack result", &anon).await, ATTACK_NO_TARGET);

    w.store
        .set_detected_person(Some(DetectedPerson::recognized(
            "Eve",
            FaceDescriptor::new(vec![0.3; 128]),
        )))
        .await;
    let second = w.engine.handle("attack target", &anon).await;
    second.attack.unwrap().await.unwrap();

    assert_eq!(w.launcher.calls.load(Ordering::SeqCst), 1);
    assert_eq!(w.engine.respond("attack status", &anon).await, ATTACK_STARTED);
}
