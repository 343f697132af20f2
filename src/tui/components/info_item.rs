//! Icon + text row in the contact grid

use crate::card::content::InfoIcon;
use crate::tui::traits::{Component, RenderContext};
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct InfoItem<'a> {
    pub icon: InfoIcon,
    pub text: &'a str,
}

impl Component for InfoItem<'_> {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        // icon + space
        let text_width = (area.width as usize).saturating_sub(2);
        let line = Line::from(vec![
            Span::styled(self.icon.glyph(), Style::default().fg(ctx.theme.icon)),
            Span::raw(" "),
            Span::styled(
                truncate_to_width(self.text, text_width),
                Style::default().fg(ctx.theme.text),
            ),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}
