//! Interactive screen state.
//!
//! `App` owns everything the screen shows. Key handling and rendering are
//! plain methods so they can be driven without a terminal.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use passforge::{
    CharacterClass, GenerationRequest, Generated, Password, Rand, StrengthResult, estimate,
    generate,
};
use zeroize::{Zeroize, Zeroizing};

use super::text::{NO_SELECTION, help_lines, key_hint};
use crate::clipboard::{Clipboard, TOAST_MILLIS};
use crate::settings::Settings;
use crate::terminal::{
    BOX_WIDTH, RED, RESET, box_bottom, box_line, box_line_center, box_rule, box_top,
    strength_line,
};

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 128;

const TOAST_DURATION: Duration = Duration::from_millis(TOAST_MILLIS);
const IDLE_POLL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

enum Shown {
    Password(Password),
    NoSelection,
}

struct Toast {
    message: &'static str,
    shown_at: Instant,
}

pub struct App {
    settings: Settings,
    rng: Rand,
    clipboard: Clipboard,
    shown: Shown,
    strength: StrengthResult,
    toast: Option<Toast>,
    manual_copy: Option<Zeroizing<String>>,
    show_help: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self::with_parts(settings, Rand::new(), Clipboard::new())
    }

    pub fn with_parts(settings: Settings, rng: Rand, clipboard: Clipboard) -> Self {
        let mut app = Self {
            settings,
            rng,
            clipboard,
            shown: Shown::NoSelection,
            strength: StrengthResult::NEUTRAL,
            toast: None,
            manual_copy: None,
            show_help: false,
        };
        app.settings.pass_length = app.settings.pass_length.clamp(MIN_LENGTH, MAX_LENGTH);
        app.regenerate();
        app
    }

    #[cfg(test)]
    pub fn password(&self) -> Option<&Password> {
        match &self.shown {
            Shown::Password(p) => Some(p),
            Shown::NoSelection => None,
        }
    }

    #[cfg(test)]
    pub fn strength(&self) -> &StrengthResult {
        &self.strength
    }

    #[cfg(test)]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn toast(&self) -> Option<&'static str> {
        self.toast.as_ref().map(|t| t.message)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('g') | KeyCode::Char('r') | KeyCode::Enter => self.regenerate(),
            KeyCode::Char('c') => self.copy(),
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('?') | KeyCode::Char('h') => self.show_help = !self.show_help,
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Up => {
                self.adjust_length(1)
            }
            KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => self.adjust_length(-1),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.toggle_class(CharacterClass::ALL[idx]);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn regenerate(&mut self) {
        self.manual_copy = None;

        let request = match GenerationRequest::new(self.settings.pass_length, self.settings.classes)
        {
            Ok(request) => request,
            Err(e) => {
                log::warn!("refusing to generate: {e}");
                return;
            }
        };

        match generate(&request, &mut self.rng) {
            Generated::Password(password) => {
                self.strength = estimate(&password);
                self.shown = Shown::Password(password);
            }
            Generated::NoClassesSelected => self.clear_selection(),
        }
    }

    fn clear_selection(&mut self) {
        self.shown = Shown::NoSelection;
        self.strength = StrengthResult::NEUTRAL;
    }

    fn toggle_class(&mut self, class: CharacterClass) {
        self.settings.classes.toggle(class);
        if self.settings.classes.is_empty() {
            self.manual_copy = None;
            self.clear_selection();
        } else {
            self.regenerate();
        }
    }

    /// Length changes take effect on the next generation; the current
    /// password is re-scored as shown.
    fn adjust_length(&mut self, delta: isize) {
        self.settings.pass_length = self
            .settings
            .pass_length
            .saturating_add_signed(delta)
            .clamp(MIN_LENGTH, MAX_LENGTH);
        self.strength = match &self.shown {
            Shown::Password(p) => estimate(p),
            Shown::NoSelection => StrengthResult::NEUTRAL,
        };
    }

    fn copy(&mut self) {
        let mut sink = Vec::new();
        let text = match &self.shown {
            Shown::Password(p) => Some(p.as_str()),
            Shown::NoSelection => None,
        };
        let outcome = self.clipboard.copy(text, &mut sink);
        if !sink.is_empty() {
            self.manual_copy = Some(Zeroizing::new(String::from_utf8_lossy(&sink).into_owned()));
        }
        sink.zeroize();
        self.notify(outcome.message());
    }

    fn save(&mut self) {
        match self.settings.save_to_file() {
            Ok(()) => self.notify("Settings saved"),
            Err(e) => {
                log::warn!("failed to save settings: {e}");
                self.notify("Failed to save settings");
            }
        }
    }

    fn notify(&mut self, message: &'static str) {
        self.toast = Some(Toast {
            message,
            shown_at: Instant::now(),
        });
    }

    /// Drop the toast once it has been visible long enough.
    pub fn tick(&mut self, now: Instant) {
        if let Some(toast) = &self.toast
            && now.duration_since(toast.shown_at) >= TOAST_DURATION
        {
            self.toast = None;
        }
    }

    /// How long the event loop may block before the screen needs redrawing.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match &self.toast {
            Some(toast) => (toast.shown_at + TOAST_DURATION).saturating_duration_since(now),
            None => IDLE_POLL,
        }
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![box_top("passforge"), box_line("")];

        match &self.shown {
            Shown::Password(password) => {
                let chars: Vec<char> = password.chars().collect();
                for chunk in chars.chunks(BOX_WIDTH - 4) {
                    let mut row: String = chunk.iter().collect();
                    lines.push(box_line_center(&row));
                    row.zeroize();
                }
            }
            Shown::NoSelection => lines.push(box_line_center(&format!("{RED}{NO_SELECTION}{RESET}"))),
        }

        lines.push(box_line(""));
        lines.push(box_line(&format!("Strength: {}", strength_line(&self.strength))));
        lines.push(box_rule());
        lines.push(box_line(&format!(
            "Length: {:>3}   (-/+ to adjust, {MIN_LENGTH}-{MAX_LENGTH})",
            self.settings.pass_length
        )));
        let classes = CharacterClass::ALL
            .iter()
            .enumerate()
            .map(|(i, class)| {
                let mark = if self.settings.class_enabled(*class) { 'x' } else { ' ' };
                format!("{}) [{mark}] {class}", i + 1)
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(box_line(&classes));
        lines.push(box_rule());
        lines.push(box_line_center(key_hint()));
        lines.push(box_bottom());

        if !self.rng.is_secure() {
            lines.push(format!(
                "{RED}WARNING: secure random source unavailable, using {}. Passwords are not cryptographically strong.{RESET}",
                self.rng.source_name()
            ));
        }

        if let Some(block) = &self.manual_copy {
            lines.extend(block.lines().map(str::to_owned));
        }

        lines.push(self.toast().unwrap_or("").to_string());

        if self.show_help {
            lines.extend(help_lines());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use passforge::ClassSet;

    use super::*;

    fn app() -> App {
        App::with_parts(Settings::default(), Rand::new(), Clipboard::unavailable())
    }

    fn press(app: &mut App, code: KeyCode) -> Flow {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn starts_with_a_scored_password() {
        let app = app();
        let password = app.password().unwrap();
        assert_eq!(password.len(), 16);
        assert_eq!(*app.strength(), estimate(password));
    }

    #[test]
    fn regenerate_replaces_password() {
        let mut app = app();
        let before = app.password().unwrap().to_string();
        press(&mut app, KeyCode::Char('r'));
        assert_ne!(app.password().unwrap().as_str(), before);
    }

    #[test]
    fn disabling_every_class_shows_prompt_and_neutral_strength() {
        let mut app = app();
        for key in ['1', '2', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert!(app.password().is_none());
        assert!(app.strength().is_neutral());
        assert!(app.render().iter().any(|l| l.contains(NO_SELECTION)));

        press(&mut app, KeyCode::Char('3'));
        let password = app.password().unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn toggling_a_class_regenerates() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert!(!app.settings().class_enabled(CharacterClass::Symbol));
        assert!(app.password().unwrap().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn length_is_clamped() {
        let mut app = App::with_parts(
            Settings {
                pass_length: MIN_LENGTH,
                ..Settings::default()
            },
            Rand::new(),
            Clipboard::unavailable(),
        );
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.settings().pass_length, MIN_LENGTH);
        for _ in 0..MAX_LENGTH + 5 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.settings().pass_length, MAX_LENGTH);
    }

    #[test]
    fn length_change_applies_on_next_generation() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.password().unwrap().len(), 16);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.password().unwrap().len(), 17);
    }

    #[test]
    fn copy_without_clipboard_frames_password() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        let password = app.password().unwrap().to_string();
        let screen = app.render();
        let frame = screen
            .iter()
            .position(|l| l.contains("Copy manually"))
            .expect("manual copy frame");
        assert!(screen[frame + 1].contains(&password));
        assert_eq!(app.toast(), Some("Clipboard unavailable - select the password to copy it"));
    }

    #[test]
    fn copy_with_no_selection_has_nothing_to_copy() {
        let mut app = App::with_parts(
            Settings {
                classes: ClassSet::empty(),
                ..Settings::default()
            },
            Rand::new(),
            Clipboard::unavailable(),
        );
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.toast(), Some("No password to copy"));
    }

    #[test]
    fn toast_expires_after_duration() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        let shown = Instant::now();
        assert!(app.poll_timeout(shown) <= TOAST_DURATION);

        app.tick(shown);
        assert!(app.toast().is_some());
        app.tick(shown + TOAST_DURATION + Duration::from_millis(10));
        assert!(app.toast().is_none());
        assert_eq!(app.poll_timeout(Instant::now()), IDLE_POLL);
    }

    #[test]
    fn fallback_source_shows_persistent_warning() {
        let mut app = App::with_parts(Settings::default(), Rand::fallback(), Clipboard::unavailable());
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('r'));
            assert!(app.render().iter().any(|l| l.contains("not cryptographically strong")));
        }
        assert!(!self::app().render().iter().any(|l| l.contains("not cryptographically strong")));
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Esc), Flow::Quit);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Flow::Quit
        );
    }

    #[test]
    fn help_toggles() {
        let mut app = app();
        let plain = app.render().len();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.render().len() > plain);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.render().len(), plain);
    }
}
