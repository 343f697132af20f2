// Status bar component
//
// Bottom line: fetch phase, seed, endpoint host and key hints.

use crate::card::Phase;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::{Component, RenderContext};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct StatusBar<'a> {
    pub phase: Phase,
    pub view_name: &'a str,
    pub seed: &'a str,
    pub api_url: &'a str,
}

impl StatusBar<'_> {
    /// Status text; compact terminals drop the endpoint and long hints
    pub fn text(&self, ctx: &RenderContext) -> String {
        let phase = match self.phase {
            Phase::Loading => format!("{} {}", ctx.spinner_char(), self.phase.label()),
            _ => self.phase.label().to_string(),
        };

        if !ctx.breakpoint.at_least(Breakpoint::Normal) {
            return format!(" {} │ {} │ ? help", self.view_name, phase);
        }

        format!(
            " {} │ {} │ seed {} │ {} │ c card · l logs · ? help · q quit",
            self.view_name,
            phase,
            self.seed,
            host_of(self.api_url),
        )
    }
}

impl Component for StatusBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let status = Paragraph::new(self.text(ctx))
            .style(Style::default().fg(ctx.theme.status_bar))
            .block(Block::default().borders(Borders::TOP));
        f.render_widget(status, area);
    }
}

/// "https://randomuser.me/api/" -> "randomuser.me"
fn host_of(url: &str) -> &str {
    let rest = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    rest.split('/').next().unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn bar(phase: Phase) -> StatusBar<'static> {
        StatusBar {
            phase,
            view_name: "Card",
            seed: "abc",
            api_url: "https://randomuser.me/api/",
        }
    }

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("https://randomuser.me/api/"), "randomuser.me");
        assert_eq!(host_of("http://127.0.0.1:8080"), "127.0.0.1:8080");
        assert_eq!(host_of("localhost/api"), "localhost");
    }

    #[test]
    fn test_wide_text() {
        let theme = Theme::auto();
        let ctx = RenderContext::new(&theme, 0, 120);
        let text = bar(Phase::Loaded).text(&ctx);
        assert_eq!(
            text,
            " Card │ loaded │ seed abc │ randomuser.me │ c card · l logs · ? help · q quit"
        );
    }

    #[test]
    fn test_loading_has_spinner_and_compact_is_short() {
        let theme = Theme::auto();
        let ctx = RenderContext::new(&theme, 1, 40);
        assert_eq!(bar(Phase::Loading).text(&ctx), " Card │ ◓ loading │ ? help");
    }
}
