//! Terminal output utilities.
//!
//! Box drawing, the strength bar, ANSI helpers. Box helpers return their
//! line instead of printing so the same frames work in raw mode, where
//! lines must end in `\r\n`.

use crossterm::terminal::disable_raw_mode;
use passforge::{Label, StrengthResult};
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const AMBER: &str = "\x1b[38;5;214m";
pub const GREEN: &str = "\x1b[38;5;41m";
pub const DARK_GREEN: &str = "\x1b[38;5;28m";

// ============================================================================
// Terminal Control
// ============================================================================

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m\x1b[?25h");
    flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                                        │
pub fn box_line(content: &str) -> String {
    let display_len = console_width(content);
    if display_len <= INNER_WIDTH {
        format!("│ {}{} │", content, " ".repeat(INNER_WIDTH - display_len))
    } else {
        format!("│ {} │", content)
    }
}

/// │          content          │
pub fn box_line_center(content: &str) -> String {
    let display_len = console_width(content);
    if display_len <= INNER_WIDTH {
        let total_padding = INNER_WIDTH - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        )
    } else {
        format!("│ {} │", content)
    }
}

pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Help option row with flag column, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) -> Vec<String> {
    let flag_col = 16;
    let desc_col = INNER_WIDTH - flag_col;

    let flag_padded = format!("{:<width$}", flag, width = flag_col);

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let indent = " ".repeat(flag_col);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 { flag_padded.as_str() } else { indent.as_str() };
            box_line(&format!("{lead}{line}"))
        })
        .collect()
}

/// A titled frame around `lines`.
pub fn framed(title: &str, lines: &[&str]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(box_top(title));
    out.extend(lines.iter().map(|l| box_line(l)));
    out.push(box_bottom());
    out
}

/// Display width ignoring ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Bar
// ============================================================================

pub fn label_color(label: Option<Label>) -> &'static str {
    match label {
        Some(Label::Excellent) => DARK_GREEN,
        Some(Label::Strong) => GREEN,
        Some(Label::Medium) => AMBER,
        Some(Label::Weak) | None => RED,
    }
}

/// Label text, or a dash for the neutral result.
pub fn label_text(result: &StrengthResult) -> &'static str {
    result.label.map(Label::as_str).unwrap_or("—")
}

/// Coloured bar `width` cells wide, filled to the result's percentage.
pub fn strength_bar(result: &StrengthResult, width: usize) -> String {
    let filled = (usize::from(result.percentage) * width).div_ceil(100).min(width);
    format!(
        "{}{}{RESET}{DIM}{}{RESET}",
        label_color(result.label),
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

/// `[bar] 83% Excellent`
pub fn strength_line(result: &StrengthResult) -> String {
    format!(
        "{} {:>3}% {}{}{RESET}",
        strength_bar(result, 40),
        result.percentage,
        label_color(result.label),
        label_text(result)
    )
}
