//! The profile card
//!
//! Renders one of three layouts from [`CardContent`]:
//! - Error: the message centered on screen, nothing else
//! - Skeleton: card frame with placeholder shapes
//! - Profile: avatar, name, badge, info grid, caption, social buttons

use super::avatar::{Avatar, PORTRAIT_HEIGHT};
use super::badge::Badge;
use super::info_item::InfoItem;
use super::skeleton::Skeleton;
use super::social_button::SocialRow;
use crate::card::content::{CardContent, ProfileView};
use crate::tui::layout::{centered_rect, CardGeometry, IMAGE_WIDTH};
use crate::tui::traits::{Component, RenderContext};
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

/// Skeleton text bar widths (title, subtitle, detail)
const SKELETON_BARS: [u16; 3] = [30, 25, 20];

pub struct CardPanel<'a> {
    pub content: &'a CardContent,
}

impl Component for CardPanel<'_> {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        match self.content {
            CardContent::Error(message) => render_error(f, area, message, ctx),
            CardContent::Skeleton => {
                let geometry = CardGeometry::compute(area);
                render_frame(f, geometry.card, ctx);
                render_skeleton(f, &geometry, ctx);
            }
            CardContent::Profile(view) => {
                let geometry = CardGeometry::compute(area);
                render_frame(f, geometry.card, ctx);
                render_profile(f, &geometry, view, ctx);
            }
        }
    }
}

fn render_error(f: &mut Frame, area: Rect, message: &str, ctx: &RenderContext) {
    let line_area = centered_rect(area.width, 1, area);
    f.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(ctx.theme.error)),
        line_area,
    );
}

fn render_frame(f: &mut Frame, card: Rect, ctx: &RenderContext) {
    let block = Block::bordered()
        .border_type(ctx.theme.border_type)
        .border_style(Style::default().fg(ctx.theme.accent))
        .style(Style::default().bg(ctx.theme.background));
    f.render_widget(block, card);
}

fn render_skeleton(f: &mut Frame, geometry: &CardGeometry, ctx: &RenderContext) {
    let portrait = Rect {
        width: geometry.image.width.min(IMAGE_WIDTH),
        height: geometry.image.height.min(PORTRAIT_HEIGHT),
        ..geometry.image
    };
    Skeleton::circle().render(f, portrait, ctx);

    let [first, _, second, _, third] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(geometry.body);

    for (area, width) in [first, second, third].into_iter().zip(SKELETON_BARS) {
        let bar = Rect {
            width: width.min(area.width),
            ..area
        };
        Skeleton::bar().render(f, bar, ctx);
    }
}

fn render_profile(f: &mut Frame, geometry: &CardGeometry, view: &ProfileView, ctx: &RenderContext) {
    let theme = ctx.theme;

    Avatar {
        initials: &view.initials,
        picture: &view.picture,
    }
    .render(f, geometry.image, ctx);

    let info_rows = 4 / geometry.info_columns.max(1);
    let [name, badge, _, info, _, caption, _, socials] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(info_rows),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(geometry.body);

    f.render_widget(
        Paragraph::new(Line::styled(
            truncate_to_width(&view.name, name.width as usize),
            Style::default()
                .fg(theme.name_text)
                .add_modifier(Modifier::BOLD),
        )),
        name,
    );

    Badge { label: &view.badge }.render(f, badge, ctx);

    render_info_grid(f, info, view, geometry.info_columns, ctx);

    f.render_widget(
        Paragraph::new(Line::styled(
            truncate_to_width(&format!("\"{}\"", view.caption), caption.width as usize),
            Style::default()
                .fg(theme.caption)
                .add_modifier(Modifier::ITALIC),
        )),
        caption,
    );

    SocialRow {
        icons: &view.socials,
    }
    .render(f, socials, ctx);
}

/// Row-major grid: with two columns, phone/email share the first row
fn render_info_grid(
    f: &mut Frame,
    area: Rect,
    view: &ProfileView,
    columns: u16,
    ctx: &RenderContext,
) {
    let columns = columns.max(1);
    let column_width = area.width / columns;

    for (i, row) in view.info.iter().enumerate() {
        let i = i as u16;
        let cell = Rect::new(
            area.x + (i % columns) * column_width,
            area.y + i / columns,
            column_width,
            1,
        )
        .intersection(area);

        InfoItem {
            icon: row.icon,
            text: &row.text,
        }
        .render(f, cell, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardState, DisplayOptions};
    use crate::profile::sample_profile;
    use crate::theme::Theme;
    use crate::tui::test_support::buffer_text;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(content: &CardContent, width: u16, height: u16) -> String {
        let theme = Theme::auto();
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, 0, width);
                CardPanel { content }.render(f, f.area(), &ctx);
            })
            .unwrap();

        buffer_text(terminal.backend().buffer())
    }

    fn loaded() -> CardContent {
        CardContent::from_state(
            Some(&CardState::Loaded(sample_profile())),
            &DisplayOptions::default(),
        )
    }

    #[test]
    fn test_profile_renders_all_fields_wide() {
        let text = draw(&loaded(), 120, 30);

        assert!(text.contains("Amelia Moreau"));
        assert!(text.contains(" Female "));
        assert!(text.contains("04-61-20-77-35"));
        assert!(text.contains("amelia.moreau@example.com"));
        assert!(text.contains("Montpellier, France"));
        assert!(text.contains("3/7/1988"));
        assert!(text.contains("\"Life is an adventure waiting to be explored.\""));
        assert!(text.contains(" f   t   ig "));
        assert!(text.contains("AM"));
        assert!(!text.contains('░'));
    }

    #[test]
    fn test_two_column_grid_shares_rows() {
        let text = draw(&loaded(), 120, 30);
        let phone_row = text
            .lines()
            .find(|line| line.contains("04-61-20-77-35"))
            .unwrap();
        assert!(phone_row.contains("amelia.moreau@example.com"));
    }

    #[test]
    fn test_profile_renders_narrow() {
        let text = draw(&loaded(), 50, 40);
        assert!(text.contains("Amelia Moreau"));
        assert!(text.contains("Montpellier, France"));

        // Single column: phone and email on separate rows
        let phone_row = text
            .lines()
            .find(|line| line.contains("04-61-20-77-35"))
            .unwrap();
        assert!(!phone_row.contains("amelia.moreau"));
    }

    #[test]
    fn test_skeleton_shows_no_profile_fields() {
        let text = draw(&CardContent::Skeleton, 120, 30);
        assert!(text.contains('░'));
        assert!(!text.contains("Amelia"));
        assert!(!text.contains("Failed"));
    }

    #[test]
    fn test_error_shows_only_message() {
        let content = CardContent::Error("Failed to fetch user data".to_string());
        let text = draw(&content, 80, 20);

        assert!(text.contains("Failed to fetch user data"));
        assert!(!text.contains('░'));
        assert!(!text.contains('╭'));
        assert!(!text.contains("Amelia"));
    }

    #[test]
    fn test_placeholder_picture_path_shown() {
        let mut profile = sample_profile();
        profile.picture_url = None;
        let content = CardContent::from_state(
            Some(&CardState::Loaded(profile)),
            &DisplayOptions::default(),
        );
        assert!(draw(&content, 120, 30).contains("/placeholder.svg"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        draw(&loaded(), 4, 3);
        draw(&CardContent::Skeleton, 4, 3);
    }
}
