//! Component trait for the card's building blocks
//!
//! Every visual element (avatar, badge, skeleton, info row, social button,
//! and the card itself) implements [`Component`]. Elements hold only the
//! data they display; theme and animation state arrive through
//! [`RenderContext`], so rendering stays a pure function of its inputs.

mod component;

pub use component::{Component, RenderContext};
