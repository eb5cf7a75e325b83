//! Render sink contract for the edit box.
//!
//! The engine never draws. `build_frame` turns the current model into a
//! `Frame` (visible rows with gutter numbers, selection rectangles, caret
//! rectangle) using only the layout and the coordinate translator; a
//! `RenderSink` turns that into pixels, terminal cells, or text.
//!
//! Coordinates in a `Frame` are relative to the edit box's top-left corner.
//! Rows partially scrolled off the top get a negative `y`.

pub mod blink;
pub mod frame;
pub mod sink;

pub use blink::CaretBlink;
pub use frame::{Frame, Rect, RowFrame, build_frame};
pub use sink::{RenderSink, TextSink, render};
