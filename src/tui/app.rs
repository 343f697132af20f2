// TUI application state
//
// Owns the card lifecycle and decides when it is active: the card is
// active exactly while the Card view is on screen. Switching away drops
// its state; switching back starts a fresh fetch.

use crate::card::{spawn_fetch, CardContent, CardLifecycle, FetchOutcome};
use crate::config::Config;
use crate::fetch::ProfileClient;
use crate::logging::LogBuffer;
use crate::theme::Theme;
use tokio::sync::mpsc;

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Card,
    Logs,
    Help,
}

impl View {
    /// Get display name for status bar
    pub fn name(&self) -> &'static str {
        match self {
            View::Card => "Card",
            View::Logs => "Logs",
            View::Help => "Help",
        }
    }
}

/// Main application state for the TUI
pub struct App {
    /// Currently displayed view
    pub view: View,

    /// Profile card lifecycle (active only while `view == Card`)
    pub card: CardLifecycle,

    client: ProfileClient,

    /// Spawned fetches report back here; the event loop owns the receiver
    fetch_tx: mpsc::Sender<FetchOutcome>,

    pub theme: Theme,
    pub config: Config,

    /// Log buffer for the logs view
    pub log_buffer: LogBuffer,

    pub should_quit: bool,

    /// Animation frame counter for spinner and shimmer
    pub animation_frame: usize,
}

impl App {
    pub fn new(
        config: Config,
        client: ProfileClient,
        log_buffer: LogBuffer,
        fetch_tx: mpsc::Sender<FetchOutcome>,
    ) -> Self {
        Self {
            view: View::default(),
            card: CardLifecycle::new(),
            client,
            fetch_tx,
            theme: Theme::resolve(&config.theme, config.use_theme_background),
            config,
            log_buffer,
            should_quit: false,
            animation_frame: 0,
        }
    }

    /// First frame: the initial view is the card, so activate it
    pub fn start(&mut self) {
        if self.view == View::Card && !self.card.is_active() {
            self.activate_card();
        }
    }

    /// Switch views, activating or deactivating the card as it comes
    /// into or out of sight
    pub fn set_view(&mut self, view: View) {
        if view == self.view {
            return;
        }

        tracing::debug!(from = self.view.name(), to = view.name(), "View changed");
        if self.view == View::Card {
            self.card.deactivate();
        }
        self.view = view;
        if view == View::Card {
            self.activate_card();
        }
    }

    fn activate_card(&mut self) {
        if let Some(generation) = self.card.activate() {
            spawn_fetch(self.client.clone(), generation, self.fetch_tx.clone());
        }
    }

    /// Apply a finished fetch (stale ones are dropped by the lifecycle)
    pub fn on_fetch_outcome(&mut self, outcome: FetchOutcome) {
        self.card.complete(outcome);
    }

    /// What the card view shows right now
    pub fn card_content(&self) -> CardContent {
        CardContent::from_state(self.card.state(), &self.config.display_options())
    }

    /// Advance animation frame (called on each tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Phase;
    use crate::profile::SAMPLE_RESPONSE;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn app_for(server: &MockServer) -> (App, mpsc::Receiver<FetchOutcome>) {
        let config = Config {
            api_url: server.uri(),
            ..Config::default()
        };
        let client = ProfileClient::from_config(&config).unwrap();
        let (tx, rx) = mpsc::channel(8);
        (App::new(config, client, LogBuffer::new(), tx), rx)
    }

    async fn mount_ok(server: &MockServer, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(query_param("seed", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_RESPONSE))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_start_fetches_once_and_loads() {
        let server = MockServer::start().await;
        mount_ok(&server, 1).await;
        let (mut app, mut rx) = app_for(&server).await;

        app.start();
        assert_eq!(app.card.phase(), Phase::Loading);
        assert_eq!(app.card_content(), CardContent::Skeleton);

        // Re-selecting the current view is not a re-activation
        app.set_view(View::Card);

        let outcome = rx.recv().await.unwrap();
        app.on_fetch_outcome(outcome);
        assert_eq!(app.card.phase(), Phase::Loaded);
        assert!(matches!(app.card_content(), CardContent::Profile(_)));
    }

    #[tokio::test]
    async fn test_leaving_card_drops_state_and_late_result() {
        let server = MockServer::start().await;
        mount_ok(&server, 1).await;
        let (mut app, mut rx) = app_for(&server).await;

        app.start();
        app.set_view(View::Logs);
        assert!(!app.card.is_active());

        let outcome = rx.recv().await.unwrap();
        app.on_fetch_outcome(outcome);
        assert_eq!(app.card.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_returning_to_card_refetches() {
        let server = MockServer::start().await;
        mount_ok(&server, 2).await;
        let (mut app, mut rx) = app_for(&server).await;

        app.start();
        let first = rx.recv().await.unwrap();
        app.on_fetch_outcome(first);
        assert_eq!(app.card.phase(), Phase::Loaded);

        app.set_view(View::Help);
        app.set_view(View::Card);
        assert_eq!(app.card.phase(), Phase::Loading);

        let second = rx.recv().await.unwrap();
        assert_eq!(second.generation, 2);
        app.on_fetch_outcome(second);
        assert_eq!(app.card.phase(), Phase::Loaded);
    }

    #[tokio::test]
    async fn test_server_error_shows_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let (mut app, mut rx) = app_for(&server).await;

        app.start();
        let outcome = rx.recv().await.unwrap();
        app.on_fetch_outcome(outcome);

        assert_eq!(
            app.card_content(),
            CardContent::Error("Failed to fetch user data".to_string())
        );
    }

    #[tokio::test]
    async fn test_tick_wraps() {
        let (tx, _rx) = mpsc::channel(1);
        let client = ProfileClient::new("http://localhost", "abc", None).unwrap();
        let mut app = App::new(Config::default(), client, LogBuffer::new(), tx);
        app.animation_frame = usize::MAX;
        app.tick_animation();
        assert_eq!(app.animation_frame, 0);
    }
}
