//! Decorative social buttons
//!
//! Cosmetic only: they render in brand colors and do nothing else.

use crate::card::content::SocialIcon;
use crate::theme::Theme;
use crate::tui::traits::{Component, RenderContext};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct SocialButton {
    pub icon: SocialIcon,
}

impl SocialButton {
    pub fn brand_color(&self, theme: &Theme) -> Color {
        match self.icon {
            SocialIcon::Facebook => theme.facebook,
            SocialIcon::Twitter => theme.twitter,
            SocialIcon::Instagram => theme.instagram,
        }
    }

    pub fn span(&self, theme: &Theme) -> Span<'static> {
        Span::styled(
            format!(" {} ", self.icon.mark()),
            Style::default()
                .fg(Color::White)
                .bg(self.brand_color(theme))
                .add_modifier(Modifier::BOLD),
        )
    }
}

/// Right-aligned row of buttons with a one-column gap
pub struct SocialRow<'a> {
    pub icons: &'a [SocialIcon],
}

impl Component for SocialRow<'_> {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut spans = Vec::with_capacity(self.icons.len() * 2);
        for (i, icon) in self.icons.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(SocialButton { icon: *icon }.span(ctx.theme));
        }
        f.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::buffer_text;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_row_is_right_aligned_with_gaps() {
        let theme = Theme::auto();
        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, 0, 20);
                SocialRow {
                    icons: &SocialIcon::ALL,
                }
                .render(f, f.area(), &ctx);
            })
            .unwrap();

        // 12 columns of buttons, 8 of padding on the left
        let expected = format!("{} f   t   ig ", " ".repeat(8));
        assert_eq!(buffer_text(terminal.backend().buffer()), expected);
    }

    #[test]
    fn test_button_uses_brand_color() {
        let theme = Theme::dracula();
        let button = SocialButton {
            icon: SocialIcon::Twitter,
        };
        assert_eq!(button.span(&theme).style.bg, Some(theme.twitter));
        assert_eq!(button.span(&theme).content, " t ");
    }
}
