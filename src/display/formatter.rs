//! Markdown terminal output using termimad

use termimad::crossterm::style::{Attribute, Color::*};
use termimad::{gray, MadSkin};
use tracing::warn;

use super::terminal::ColorMode;

/// Print markdown styled when colors are enabled, plain otherwise
pub fn print_markdown(markdown: &str, mode: ColorMode) {
    if mode.enabled() {
        if let Err(e) = print_rich(markdown) {
            warn!(error = %e, "Terminal rendering failed, using plain output");
            println!("{}", markdown);
        }
    } else {
        println!("{}", markdown);
    }
}

fn print_rich(markdown: &str) -> Result<(), termimad::Error> {
    tool_skin().print_text(markdown);
    Ok(())
}

/// Skin for tool cards: names stand out, categories and sources read as tags
fn tool_skin() -> MadSkin {
    let mut skin = MadSkin::default();

    skin.headers[1].set_fg(Cyan);
    skin.headers[1].add_attr(Attribute::Bold);
    skin.headers[2].set_fg(Magenta);
    skin.headers[2].add_attr(Attribute::Bold);

    skin.inline_code.set_fg(Yellow);
    skin.inline_code.set_bg(gray(3));

    skin.bold.set_fg(White);
    skin.bold.add_attr(Attribute::Bold);
    skin.italic.add_attr(Attribute::Italic);
    skin.horizontal_rule.set_fg(gray(8));

    skin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_markdown_plain() {
        print_markdown("### Tool\n\n**Category:** `finance`", ColorMode::Never);
    }

    #[test]
    fn test_tool_skin_builds() {
        let skin = tool_skin();
        assert_eq!(skin.headers.len(), 8);
    }
}
