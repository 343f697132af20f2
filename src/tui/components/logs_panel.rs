//! Logs panel component
//!
//! Shows the tail of the in-memory log buffer, newest at the bottom.
//! This is where fetch failure causes end up; the card itself only ever
//! shows the generic message.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::traits::{Component, RenderContext};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, List, ListItem},
    Frame,
};

pub struct LogsPanel<'a> {
    pub entries: &'a [LogEntry],
}

impl Component for LogsPanel<'_> {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::bordered()
            .border_type(ctx.theme.border_type)
            .border_style(Style::default().fg(ctx.theme.border))
            .title(format!(" System Logs ({}) ", self.entries.len()));

        // Auto-follow: only the entries that fit, newest last
        let visible = block.inner(area).height as usize;
        let skip = self.entries.len().saturating_sub(visible);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .skip(skip)
            .map(|entry| {
                ListItem::new(format_log_entry(entry))
                    .style(log_level_style(&entry.level, ctx.theme))
            })
            .collect();

        f.render_widget(List::new(items).block(block), area);
    }
}

/// "[HH:MM:SS] LEVEL target: message"
pub fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.target,
        entry.message
    )
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(theme.error),
        LogLevel::Warn => Style::default().fg(theme.highlight),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}
