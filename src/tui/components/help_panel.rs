// Help panel component
//
// Key bindings plus a short summary of the effective configuration.

use crate::theme::Theme;
use crate::tui::traits::{Component, RenderContext};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph},
    Frame,
};

pub struct HelpPanel<'a> {
    pub seed: &'a str,
    pub api_url: &'a str,
    pub config_path: Option<&'a str>,
}

impl Component for HelpPanel<'_> {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let key_style = Style::default().fg(theme.accent);
        let desc_style = Style::default().fg(theme.foreground);
        let header_style = Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD);
        let divider_style = Style::default().fg(theme.border);

        // "    key         description"
        let kb = |key: &str, desc: &str| -> Line {
            Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("{:<12}", key), key_style),
                Span::styled(desc.to_string(), desc_style),
            ])
        };
        let setting = |name: &str, value: &str| -> Line {
            Line::from(vec![
                Span::styled(format!("  {:<10}", name), desc_style),
                Span::styled(value.to_string(), key_style),
            ])
        };

        let content = Text::from(vec![
            Line::raw(""),
            Line::from(Span::styled("  Views", header_style)),
            kb("F1, c", "Profile card (fetches on open)"),
            kb("F2, l", "System logs"),
            kb("F3, ?", "Help (this screen)"),
            Line::raw(""),
            Line::from(Span::styled("  General", header_style)),
            kb("q", "Quit"),
            kb("Ctrl+C", "Quit"),
            Line::raw(""),
            Line::from(Span::styled(
                "  ──────────────────────────────────",
                divider_style,
            )),
            setting("Theme:", &theme.name),
            setting("Themes:", &Theme::names().join(", ")),
            setting("Seed:", self.seed),
            setting("Endpoint:", self.api_url),
            setting("Config:", self.config_path.unwrap_or("(unavailable)")),
        ]);

        let block = Block::bordered()
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Help ");
        f.render_widget(Paragraph::new(content).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::buffer_text;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_help_lists_keys_and_settings() {
        let theme = Theme::by_name("nord");
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, 0, 80);
                HelpPanel {
                    seed: "abc",
                    api_url: "https://randomuser.me/api/",
                    config_path: None,
                }
                .render(f, f.area(), &ctx);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Profile card"));
        assert!(text.contains("System logs"));
        assert!(text.contains("nord"));
        assert!(text.contains("abc"));
        assert!(text.contains("(unavailable)"));
    }
}
