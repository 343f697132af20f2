//! Responsive breakpoint system for TUI layout decisions.
//!
//! Single source of truth for width thresholds - no magic numbers scattered in render code.

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100-139 cols: Full terminal
    Wide,
    /// 140+ cols: Ultrawide monitor
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Card geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Widest the card gets, even on huge terminals
pub const CARD_MAX_WIDTH: u16 = 96;

/// Image column: avatar box + star row + URL row
pub const IMAGE_WIDTH: u16 = 22;
pub const IMAGE_HEIGHT: u16 = 11;

/// Gap between image and text block
const COLUMN_GAP: u16 = 3;

/// Border (1) + padding (2) on each side horizontally
const CARD_CHROME_X: u16 = 6;
/// Border (1) + padding (1) on each side vertically
const CARD_CHROME_Y: u16 = 4;

/// Where the card's pieces go for a given terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGeometry {
    /// Outer card rectangle (border included)
    pub card: Rect,
    pub image: Rect,
    pub body: Rect,
    /// Info grid columns (1 or 2)
    pub info_columns: u16,
}

impl CardGeometry {
    /// Image beside text from Normal up, stacked below that;
    /// two-column info grid from Wide up.
    pub fn compute(area: Rect) -> Self {
        let bp = Breakpoint::from_width(area.width);
        let side_by_side = bp.at_least(Breakpoint::Normal);
        let info_columns = if bp.at_least(Breakpoint::Wide) { 2 } else { 1 };
        let body_height = body_height(info_columns);

        let inner_height = if side_by_side {
            IMAGE_HEIGHT.max(body_height)
        } else {
            IMAGE_HEIGHT + 1 + body_height
        };

        let card = centered_rect(
            CARD_MAX_WIDTH,
            inner_height + CARD_CHROME_Y,
            area,
        );
        let inner = Rect::new(
            card.x.saturating_add(CARD_CHROME_X / 2),
            card.y.saturating_add(CARD_CHROME_Y / 2),
            card.width.saturating_sub(CARD_CHROME_X),
            card.height.saturating_sub(CARD_CHROME_Y),
        );

        let (image, body) = if side_by_side {
            let image_width = IMAGE_WIDTH.min(inner.width);
            let image = Rect::new(inner.x, inner.y, image_width, IMAGE_HEIGHT.min(inner.height));
            let offset = (image_width + COLUMN_GAP).min(inner.width);
            let body = Rect::new(inner.x + offset, inner.y, inner.width - offset, inner.height);
            (image, body)
        } else {
            let image_height = IMAGE_HEIGHT.min(inner.height);
            let image = centered_rect(
                IMAGE_WIDTH,
                image_height,
                Rect::new(inner.x, inner.y, inner.width, image_height),
            );
            let offset = (image_height + 1).min(inner.height);
            let body = Rect::new(inner.x, inner.y + offset, inner.width, inner.height - offset);
            (image, body)
        };

        Self {
            card,
            image,
            body,
            info_columns,
        }
    }
}

/// name, badge, gap, info rows, gap, caption, gap, socials
fn body_height(info_columns: u16) -> u16 {
    7 + 4 / info_columns.max(1)
}

/// A `width` x `height` rectangle centered in `area`, clamped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
