//! Terminal presentation primitives
//!
//! Color and icon tokens, capability detection, and the resolved
//! `UiContext` that the console sink and error printer render against.

pub mod context;
pub mod icon;
pub mod terminal;
pub mod text;
pub mod theme;

pub use context::UiContext;
pub use icon::Icon;
pub use text::ColoredText;
