// Card lifecycle - fetch-on-activation state machine
//
// The card owns a view state only while it is active. Activation creates
// the state in Loading and hands back a generation number; the caller
// spawns the fetch with that number and feeds the outcome back through
// complete(). Outcomes from an older generation are dropped, so a card
// that was deactivated (or deactivated and re-activated) mid-flight never
// sees a late write.
//
// State Diagram:
//
//   [Idle] ──activate──▶ [Loading] ──Ok──▶ [Loaded]
//     ▲                     │
//     │                     └──Err──▶ [Failed]
//     │                                   │
//     └────────────deactivate─────────────┘  (from any active state)
//
// activate() while already active is a no-op: re-rendering never
// re-triggers the fetch.

pub mod content;

use crate::fetch::{FetchError, ProfileClient};
use crate::profile::UserProfile;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub use content::{CardContent, DisplayOptions};

/// Coarse phase, mostly for the status bar and logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Loaded => "loaded",
            Phase::Failed => "failed",
        }
    }
}

/// View state of an active card
///
/// One enum instead of three loose fields: a loaded card cannot carry an
/// error and a failed card cannot carry a profile.
#[derive(Debug, Clone, PartialEq)]
pub enum CardState {
    Loading,
    Loaded(UserProfile),
    /// Holds the user-facing message only
    Failed(String),
}

impl CardState {
    pub fn loading(&self) -> bool {
        matches!(self, CardState::Loading)
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            CardState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CardState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            CardState::Loading => Phase::Loading,
            CardState::Loaded(_) => Phase::Loaded,
            CardState::Failed(_) => Phase::Failed,
        }
    }
}

/// Result of one fetch, tagged with the activation that started it
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<UserProfile, FetchError>,
}

#[derive(Debug)]
struct Activation {
    generation: u64,
    state: CardState,
}

/// Lifecycle of one card instance
#[derive(Debug, Default)]
pub struct CardLifecycle {
    /// Generation handed to the most recent activation
    generation: u64,
    active: Option<Activation>,
}

impl CardLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view state, `None` while idle
    pub fn state(&self) -> Option<&CardState> {
        self.active.as_ref().map(|a| &a.state)
    }

    pub fn phase(&self) -> Phase {
        self.state().map(CardState::phase).unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Card became visible
    ///
    /// Returns the generation to fetch for, or `None` when already active.
    pub fn activate(&mut self) -> Option<u64> {
        if self.active.is_some() {
            return None;
        }

        self.generation += 1;
        self.active = Some(Activation {
            generation: self.generation,
            state: CardState::Loading,
        });

        tracing::debug!(generation = self.generation, "Card activated");
        Some(self.generation)
    }

    /// Card left the screen - its view state is dropped
    ///
    /// The in-flight request (if any) keeps running; its outcome will be
    /// discarded by `complete`.
    pub fn deactivate(&mut self) {
        if let Some(activation) = self.active.take() {
            tracing::debug!(
                generation = activation.generation,
                phase = activation.state.phase().label(),
                "Card deactivated"
            );
        }
    }

    /// Apply a fetch outcome. Returns true when it changed the view state.
    pub fn complete(&mut self, outcome: FetchOutcome) -> bool {
        let Some(activation) = self.active.as_mut() else {
            tracing::debug!(
                generation = outcome.generation,
                "Dropping fetch outcome for inactive card"
            );
            return false;
        };

        if activation.generation != outcome.generation {
            tracing::debug!(
                stale = outcome.generation,
                current = activation.generation,
                "Dropping stale fetch outcome"
            );
            return false;
        }

        // Terminal states stay terminal
        if !activation.state.loading() {
            return false;
        }

        activation.state = match outcome.result {
            Ok(profile) => {
                tracing::info!(name = %profile.full_name(), "Profile loaded");
                CardState::Loaded(profile)
            }
            Err(e) => {
                tracing::warn!(cause = e.kind(), "Profile fetch failed: {}", e);
                CardState::Failed(e.user_message().to_string())
            }
        };
        true
    }
}

/// Spawn the fetch for one activation
///
/// The task reports back over `tx`. If the receiver is gone (app shut
/// down) the outcome is simply dropped.
pub fn spawn_fetch(
    client: ProfileClient,
    generation: u64,
    tx: mpsc::Sender<FetchOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = client.fetch_profile().await;
        if tx.send(FetchOutcome { generation, result }).await.is_err() {
            tracing::debug!(generation, "Fetch finished after receiver closed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{sample_profile, SAMPLE_RESPONSE};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ok(generation: u64) -> FetchOutcome {
        FetchOutcome {
            generation,
            result: Ok(sample_profile()),
        }
    }

    fn failed(generation: u64) -> FetchOutcome {
        FetchOutcome {
            generation,
            result: Err(FetchError::EmptyResults),
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let card = CardLifecycle::new();
        assert_eq!(card.phase(), Phase::Idle);
        assert!(card.state().is_none());
    }

    #[test]
    fn test_activate_starts_loading() {
        let mut card = CardLifecycle::new();
        assert_eq!(card.activate(), Some(1));

        let state = card.state().unwrap();
        assert!(state.loading());
        assert!(state.profile().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_activate_twice_does_not_refetch() {
        let mut card = CardLifecycle::new();
        assert_eq!(card.activate(), Some(1));
        assert_eq!(card.activate(), None);
        assert_eq!(card.phase(), Phase::Loading);
    }

    #[test]
    fn test_success_flow() {
        let mut card = CardLifecycle::new();
        let generation = card.activate().unwrap();
        assert!(card.complete(ok(generation)));

        let state = card.state().unwrap();
        assert!(!state.loading());
        assert_eq!(state.profile().unwrap().full_name(), "Amelia Moreau");
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failure_flow_keeps_message_generic() {
        let mut card = CardLifecycle::new();
        let generation = card.activate().unwrap();
        assert!(card.complete(failed(generation)));

        let state = card.state().unwrap();
        assert!(!state.loading());
        assert!(state.profile().is_none());
        assert_eq!(state.error(), Some("Failed to fetch user data"));
    }

    #[test]
    fn test_loading_clears_exactly_once() {
        let mut card = CardLifecycle::new();
        let generation = card.activate().unwrap();
        assert!(card.complete(failed(generation)));

        // A second outcome for the same generation cannot flip it back
        assert!(!card.complete(ok(generation)));
        assert_eq!(card.phase(), Phase::Failed);
        assert!(card.state().unwrap().profile().is_none());
    }

    #[test]
    fn test_outcome_after_deactivate_is_dropped() {
        let mut card = CardLifecycle::new();
        let generation = card.activate().unwrap();
        card.deactivate();

        assert!(!card.complete(ok(generation)));
        assert_eq!(card.phase(), Phase::Idle);
    }

    #[test]
    fn test_reactivation_resets_and_ignores_stale() {
        let mut card = CardLifecycle::new();
        let first = card.activate().unwrap();
        assert!(card.complete(ok(first)));

        card.deactivate();
        let second = card.activate().unwrap();
        assert_eq!(second, first + 1);
        assert_eq!(card.phase(), Phase::Loading);

        // Late outcome from the first activation
        assert!(!card.complete(failed(first)));
        assert_eq!(card.phase(), Phase::Loading);

        assert!(card.complete(ok(second)));
        assert_eq!(card.phase(), Phase::Loaded);
    }

    #[tokio::test]
    async fn test_spawned_fetch_reports_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_RESPONSE))
            .expect(2)
            .mount(&server)
            .await;

        let client = ProfileClient::new(server.uri(), "abc", None).unwrap();
        let (tx, mut rx) = mpsc::channel(4);
        let mut card = CardLifecycle::new();

        let first = card.activate().unwrap();
        spawn_fetch(client.clone(), first, tx.clone());
        let outcome = rx.recv().await.unwrap();
        assert!(card.complete(outcome));
        assert_eq!(card.phase(), Phase::Loaded);

        // Re-activation issues exactly one more request
        card.deactivate();
        let second = card.activate().unwrap();
        assert_eq!(card.activate(), None);
        spawn_fetch(client, second, tx);
        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.generation, second);
        assert!(card.complete(outcome));
        assert_eq!(card.phase(), Phase::Loaded);
    }
}
