//! Terminal presentation of engine results.

pub mod report;
mod ui_text;

pub use ui_text::UI_TEXT;
