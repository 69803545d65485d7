//! Terminal display module
//!
//! Prints tool lists and chat answers as styled Markdown.

mod formatter;
mod terminal;

pub use formatter::print_markdown;
pub use terminal::ColorMode;
