//! Command-line mode.

mod context;
mod flags;
pub mod prompts;

use clap::Parser;

pub use context::{Context, Error};
pub use flags::CliFlags;

/// Parse `args`, generate, and exit with a failure status on error.
pub fn run(args: Vec<String>) {
    let flags = match CliFlags::try_parse_from(args) {
        Ok(flags) => flags,
        Err(e) => e.exit(),
    };

    let mut ctx = Context::new(flags);
    if let Err(e) = ctx.run() {
        if !matches!(e, Error::NoClassesSelected | Error::CopyFailed(_)) {
            prompts::error(&e.to_string());
        }
        std::process::exit(e.exit_code());
    }
}
