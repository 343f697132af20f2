//! Profile image slot
//!
//! A terminal can't show the photo itself, so the slot draws a rounded
//! frame with the user's initials, a star marker beneath it, and the
//! picture URL (or the placeholder path) as the last line.

use crate::tui::layout::IMAGE_WIDTH;
use crate::tui::traits::{Component, RenderContext};
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

/// Rows taken by the framed portrait
pub const PORTRAIT_HEIGHT: u16 = 9;

pub struct Avatar<'a> {
    pub initials: &'a str,
    pub picture: &'a str,
}

impl Component for Avatar<'_> {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let [portrait, star, url] = Layout::vertical([
            Constraint::Length(PORTRAIT_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent));
        let inner = block.inner(portrait);
        f.render_widget(block, portrait);

        // Initials on the middle row
        let pad = inner.height.saturating_sub(1) / 2;
        let mut lines: Vec<Line> = (0..pad).map(|_| Line::default()).collect();
        lines.push(Line::styled(
            self.initials.to_string(),
            Style::default()
                .fg(theme.name_text)
                .add_modifier(Modifier::BOLD),
        ));
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

        f.render_widget(
            Paragraph::new("★")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.star)),
            star,
        );

        let max = url.width.min(IMAGE_WIDTH) as usize;
        f.render_widget(
            Paragraph::new(truncate_to_width(self.picture, max))
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted)),
            url,
        );
    }
}
