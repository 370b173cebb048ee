//! Interactive terminal screen.

mod app;
mod text;

use std::io::{self, Write};
use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind};

use crate::settings::Settings;
use crate::terminal::{RED, RESET, RawModeGuard, reset_terminal};

pub use app::{App, Flow};

/// Run interactive mode until the user quits.
pub fn run() {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings, using defaults: {e}");
        Settings::default()
    });

    let mut app = App::new(settings);
    if let Err(e) = event_loop(&mut app) {
        reset_terminal();
        eprintln!("{RED}Terminal error: {e}{RESET}");
        std::process::exit(1);
    }
}

fn event_loop(app: &mut App) -> io::Result<()> {
    let _guard = RawModeGuard::new()?;

    loop {
        draw(&app.render())?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key) == Flow::Quit
        {
            break;
        }

        app.tick(Instant::now());
    }
    Ok(())
}

fn draw(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(b"\x1b[H\x1b[2J")?;
    for line in lines {
        write!(out, "{line}\r\n")?;
    }
    out.flush()
}
