//! Pill-shaped label (used for gender)

use crate::theme::Theme;
use crate::tui::traits::{Component, RenderContext};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

pub struct Badge<'a> {
    pub label: &'a str,
}

impl Badge<'_> {
    pub fn span(&self, theme: &Theme) -> Span<'static> {
        Span::styled(
            format!(" {} ", self.label),
            Style::default()
                .fg(theme.badge_fg)
                .bg(theme.badge_bg)
                .add_modifier(Modifier::BOLD),
        )
    }
}

impl Component for Badge<'_> {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        f.render_widget(Paragraph::new(self.span(ctx.theme)), area);
    }
}
