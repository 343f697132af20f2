//! Skeleton placeholder shapes shown while the profile loads

use crate::tui::traits::{Component, RenderContext};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

/// Columns between shimmer bands
const SHIMMER_PERIOD: usize = 12;
/// Width of the bright band
const SHIMMER_BAND: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonShape {
    /// Rounded outline standing in for the avatar
    Circle,
    /// Solid bar standing in for a line of text
    Bar,
}

/// A placeholder block with a moving shimmer
#[derive(Debug, Clone, Copy)]
pub struct Skeleton {
    pub shape: SkeletonShape,
}

impl Skeleton {
    pub fn circle() -> Self {
        Self {
            shape: SkeletonShape::Circle,
        }
    }

    pub fn bar() -> Self {
        Self {
            shape: SkeletonShape::Bar,
        }
    }
}

impl Component for Skeleton {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let style = Style::default().fg(ctx.theme.skeleton);

        let fill_area = match self.shape {
            SkeletonShape::Circle => {
                let block = Block::bordered()
                    .border_type(ratatui::widgets::BorderType::Rounded)
                    .border_style(style);
                let inner = block.inner(area);
                f.render_widget(block, area);
                inner
            }
            SkeletonShape::Bar => area,
        };

        let lines: Vec<Line> = (0..fill_area.height)
            .map(|row| Line::from(shimmer_row(fill_area.width, row, ctx.animation_frame)))
            .collect();
        f.render_widget(Paragraph::new(lines).style(style), fill_area);
    }
}

/// One row of shade characters; the band shifts right as `frame` advances
pub(crate) fn shimmer_row(width: u16, row: u16, frame: usize) -> String {
    (0..width as usize)
        .map(|col| {
            let phase = (col + SHIMMER_PERIOD * 4 + row as usize - frame % SHIMMER_PERIOD)
                % SHIMMER_PERIOD;
            if phase < SHIMMER_BAND {
                '▒'
            } else {
                '░'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_has_requested_width() {
        assert_eq!(shimmer_row(30, 0, 0).chars().count(), 30);
        assert_eq!(shimmer_row(0, 0, 0), "");
    }

    #[test]
    fn test_band_moves_with_frame() {
        let first = shimmer_row(24, 0, 0);
        let next = shimmer_row(24, 0, 1);
        assert_ne!(first, next);

        // Band starts at column 0 and shifts one column per frame
        assert!(first.starts_with("▒▒▒░"));
        assert!(next.starts_with("░▒▒▒░"));
    }

    #[test]
    fn test_pattern_repeats_every_period() {
        assert_eq!(shimmer_row(24, 0, 0), shimmer_row(24, 0, SHIMMER_PERIOD));
    }
}
