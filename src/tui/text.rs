use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub const NO_SELECTION: &str = "Choose at least one character type";

pub fn key_hint() -> &'static str {
    "g/Enter: generate | r: regenerate | c: copy | s: save | ?: help | q: quit"
}

pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        box_top("Help"),
        box_line_center("Every selected character type appears at least once"),
        box_line(""),
        box_line("KEYS:"),
    ];
    lines.extend(box_opt("  g, Enter", "Generate a new password"));
    lines.extend(box_opt("  r", "Regenerate with the same settings"));
    lines.extend(box_opt("  c", "Copy the password to the clipboard. If the clipboard is unavailable the password is framed below for manual copying."));
    lines.extend(box_opt("  1 2 3 4", "Toggle lowercase, uppercase, digits, symbols"));
    lines.extend(box_opt("  + / -", "Change the length (arrow keys work too)"));
    lines.extend(box_opt("  s", "Save length and character types as defaults"));
    lines.extend(box_opt("  ?", "Show or hide this help"));
    lines.extend(box_opt("  q, Esc", "Quit"));
    lines.push(box_line(""));
    lines.push(box_line("STRENGTH:"));
    lines.extend(box_opt("  length", "One point each at 8, 12 and 16 characters"));
    lines.extend(box_opt("  variety", "One point per character type present, at most three"));
    lines.extend(box_opt("  label", "Excellent 80%+, Strong 60%+, Medium 40%+, else Weak"));
    lines.push(box_bottom());
    lines
}
