//! ResolvePerson query handler.
//!
//! Answers "who is in the camera / who am I" from the last face detection,
//! the user directory and the caller's session, in that order of preference.
//! Store failures are logged and treated as a miss so the next tier answers.

use std::sync::Arc;

use crate::domain::conversation::ConversationContext;
use crate::domain::identity::{FollowupAnswer, IdentityKey, PersonAnswer, UserRecord};
use crate::ports::{DetectionStore, UserDirectory};

/// Handler for identity questions.
#[derive(Clone)]
pub struct IdentityResolver {
    detections: Arc<dyn DetectionStore>,
    users: Arc<dyn UserDirectory>,
}

impl IdentityResolver {
    pub fn new(detections: Arc<dyn DetectionStore>, users: Arc<dyn UserDirectory>) -> Self {
        Self { detections, users }
    }

    /// Name of the person currently in view, if recognized.
    pub async fn best_match(&self) -> Option<String> {
        match self.detections.last_detected_person().await {
            Ok(person) => person.and_then(|p| p.best_match().map(str::to_string)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read last detected person");
                None
            }
        }
    }

    async fn lookup(&self, key: &IdentityKey) -> Option<UserRecord> {
        match self.users.find(key).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, ?key, "user lookup failed");
                None
            }
        }
    }

    /// Resolves who is visible, or who the caller is.
    pub async fn resolve_person(&self, context: &ConversationContext) -> PersonAnswer {
        if let Some(seen) = self.best_match().await {
            let user = self.lookup(&IdentityKey::from_detected_name(&seen)).await;
            let confirmed = user
                .as_ref()
                .filter(|u| u.is_named(&seen))
                .and_then(UserRecord::display_name);
            return match confirmed {
                Some(full_name) => PersonAnswer::Confirmed {
                    full_name: full_name.to_string(),
                    seen,
                },
                None => PersonAnswer::Sighted { seen },
            };
        }

        if let Some(email) = context.email() {
            let user = self.lookup(&IdentityKey::Email(email.to_string())).await;
            if let Some(full_name) = user.as_ref().and_then(|u| u.display_name()) {
                return PersonAnswer::FromSession {
                    full_name: full_name.to_string(),
                };
            }
        }

        PersonAnswer::NobodyVisible
    }

    /// Resolves details about the person last seen.
    pub async fn resolve_followup(&self) -> FollowupAnswer {
        let Some(seen) = self.best_match().await else {
            return FollowupAnswer::NoMoreInformation;
        };

        match self.lookup(&IdentityKey::from_detected_name(&seen)).await {
            Some(user) => FollowupAnswer::Details {
                created_at: user.created_at,
                email: user.email,
            },
            None => FollowupAnswer::NoMoreInformation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryIdentityStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::identity::DetectedPerson;

    fn resolver(store: &InMemoryIdentityStore) -> IdentityResolver {
        IdentityResolver::new(Arc::new(store.clone()), Arc::new(store.clone()))
    }

    #[tokio::test]
    async fn detected_person_with_matching_record_is_confirmed() {
        let store = InMemoryIdentityStore::new();
        store.add_user(UserRecord::new("Alice", "alice@example.com")).await;
        store.set_detected_person(Some(DetectedPerson::named("Alice"))).await;

        let answer = resolver(&store).resolve_person(&ConversationContext::anonymous()).await;

        assert_eq!(
            answer.to_string(),
            "I see Alice in the camera. Your full name in my records is Alice."
        );
    }

    #[tokio::test]
    async fn confirmation_ignores_case_beyond_ascii() {
        let store = InMemoryIdentityStore::new();
        store.add_user(UserRecord::new("ÉLODIE", "elodie@example.com")).await;
        store.set_detected_person(Some(DetectedPerson::named("élodie"))).await;

        let answer = resolver(&store).resolve_person(&ConversationContext::anonymous()).await;

        assert_eq!(
            answer.to_string(),
            "I see élodie in the camera. Your full name in my records is ÉLODIE."
        );
    }

    #[tokio::test]
    async fn detected_person_without_record_is_only_sighted() {
        let store = InMemoryIdentityStore::new();
        store.set_detected_person(Some(DetectedPerson::named("Carol"))).await;

        let answer = resolver(&store)
            .resolve_person(&ConversationContext::for_email("bob@example.com"))
            .await;

        assert_eq!(answer, PersonAnswer::Sighted { seen: "Carol".to_string() });
    }

    #[tokio::test]
    async fn email_detection_is_looked_up_by_email() {
        let store = InMemoryIdentityStore::new();
        store.add_user(UserRecord::new("Dave Jones", "dave@example.com")).await;
        store
            .set_detected_person(Some(DetectedPerson::named("dave@example.com")))
            .await;

        let answer = resolver(&store).resolve_followup().await;

        assert_eq!(
            answer,
            FollowupAnswer::Details {
                created_at: None,
                email: Some("dave@example.com".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn unknown_detection_falls_back_to_session() {
        let store = InMemoryIdentityStore::new();
        store.add_user(UserRecord::new("Bob Stone", "bob@example.com")).await;
        store.set_detected_person(Some(DetectedPerson::named("Unknown"))).await;

        let answer = resolver(&store)
            .resolve_person(&ConversationContext::for_email("bob@example.com"))
            .await;

        assert_eq!(answer.to_string(), "According to my database, you are Bob Stone.");
    }

    #[tokio::test]
    async fn nobody_without_detection_or_session() {
        let store = InMemoryIdentityStore::new();

        let answer = resolver(&store).resolve_person(&ConversationContext::anonymous()).await;

        assert_eq!(answer, PersonAnswer::NobodyVisible);
    }

    #[tokio::test]
    async fn store_failure_degrades_instead_of_erroring() {
        let store = InMemoryIdentityStore::new();
        store.add_user(UserRecord::new("Alice", "alice@example.com")).await;
        store.set_detected_person(Some(DetectedPerson::named("Alice"))).await;
        store.set_failing(true);

        let resolver = resolver(&store);
        let ctx = ConversationContext::for_email("alice@example.com");

        assert_eq!(resolver.resolve_person(&ctx).await, PersonAnswer::NobodyVisible);
        assert_eq!(resolver.resolve_followup().await, FollowupAnswer::NoMoreInformation);
    }

    #[tokio::test]
    async fn followup_reports_join_date_and_email() {
        let store = InMemoryIdentityStore::new();
        let joined = Timestamp::from_unix_secs(1_700_000_000);
        store
            .add_user(UserRecord::new("Alice", "alice@example.com").with_created_at(joined))
            .await;
        store.set_detected_person(Some(DetectedPerson::named("alice"))).await;

        let answer = resolver(&store).resolve_followup().await;

        assert_eq!(
            answer.to_string(),
            format!("They joined on {} and use email alice@example.com.", joined)
        );
    }
}
