// Views module - screen-level rendering
//
// Every frame: theme background, the active view in the content area,
// and the status bar along the bottom.

use super::app::{App, View};
use super::components::{CardPanel, HelpPanel, LogsPanel, StatusBar};
use super::traits::{Component, RenderContext};
use crate::config::Config;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    // Apply theme background to entire frame (respects use_theme_background toggle)
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let ctx = RenderContext::new(&app.theme, app.animation_frame, f.area().width);
    let [content, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(f.area());

    match app.view {
        View::Card => {
            let card = app.card_content();
            CardPanel { content: &card }.render(f, content, &ctx);
        }
        View::Logs => {
            let entries = app.log_buffer.get_all();
            LogsPanel { entries: &entries }.render(f, content, &ctx);
        }
        View::Help => {
            let path = Config::config_path().map(|p| p.display().to_string());
            HelpPanel {
                seed: &app.config.seed,
                api_url: &app.config.api_url,
                config_path: path.as_deref(),
            }
            .render(f, content, &ctx);
        }
    }

    StatusBar {
        phase: app.card.phase(),
        view_name: app.view.name(),
        seed: &app.config.seed,
        api_url: &app.config.api_url,
    }
    .render(f, status, &ctx);
}
