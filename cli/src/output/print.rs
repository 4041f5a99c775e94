use anyhow::Result;
use serde_json::Value;
use termcolor::{Color, ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

/// Represents something printable as plain text.
pub trait Print {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()>;
}

impl Print for Value {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        writeln!(writer, "{}", serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Writes a line with the given foreground color, then resets it.
pub fn write_colored(
    writer: &mut dyn WriteColor,
    color: Color,
    bold: bool,
    text: &str,
) -> Result<()> {
    writer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold))?;
    write!(writer, "{}", text)?;
    writer.reset()?;
    writeln!(writer)?;
    Ok(())
}

/// Wraps a text to the given display width, breaking on whitespace and
/// prefixing every line with `indent`. Words larger than the width are
/// kept whole.
pub fn wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    let width = width.saturating_sub(indent.width()).max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.width() + 1 + word.width() > width {
            lines.push(format!("{}{}", indent, line));
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(format!("{}{}", indent, line));
    }

    lines
}
