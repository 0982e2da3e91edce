//! hwpm-ui: Higher-level UI abstractions built on `SdiBackend`.
//!
//! This crate provides layout helpers, a themed drawing context, and a small
//! widget toolkit. All rendering goes through `SdiBackend` trait methods --
//! no output-specific code.

pub mod context;
pub mod layout;
pub mod list_view;
pub mod panel;
pub mod progress_bar;
pub mod theme;
pub mod widget;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use context::DrawContext;
pub use layout::Rect;
pub use theme::Theme;
pub use widget::Widget;
