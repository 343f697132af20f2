//! Core component trait - the foundation of the UI system

use crate::theme::Theme;
use crate::tui::layout::Breakpoint;
use ratatui::{layout::Rect, Frame};

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Animation frame counter (skeleton shimmer)
    pub animation_frame: usize,

    /// Width class of the whole terminal
    pub breakpoint: Breakpoint,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, animation_frame: usize, terminal_width: u16) -> Self {
        Self {
            theme,
            animation_frame,
            breakpoint: Breakpoint::from_width(terminal_width),
        }
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
///
/// # Example
///
/// ```ignore
/// struct Caption<'a>(&'a str);
///
/// impl Component for Caption<'_> {
///     fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
///         let style = Style::default().fg(ctx.theme.caption);
///         f.render_widget(Paragraph::new(self.0).style(style), area);
///     }
/// }
/// ```
pub trait Component {
    /// Render the component to the given area
    ///
    /// # Arguments
    ///
    /// * `f` - The frame to render to
    /// * `area` - The rectangular area allocated for this component
    /// * `ctx` - Immutable render context (theme, animation, breakpoint)
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
