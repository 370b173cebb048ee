use clap::Parser;
use passforge::CharacterClass;

#[derive(Debug, Default, Parser)]
#[command(
    name = "passforge",
    version,
    about = "Generate passwords with at least one character from every selected class",
    after_help = "Run without arguments for the interactive screen."
)]
pub struct CliFlags {
    /// Characters per password (raised to the number of selected classes)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    pub number: usize,

    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Exclude uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Print a strength estimate for each password to stderr
    #[arg(short = 'S', long)]
    pub strength: bool,

    /// Suppress everything except passwords and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Start from the saved settings instead of the defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Save the resulting settings for future runs
    #[arg(long)]
    pub save: bool,

    /// Seed a reproducible generator (testing only)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl CliFlags {
    /// Classes switched off on the command line.
    pub fn excluded(&self) -> impl Iterator<Item = CharacterClass> {
        [
            (CharacterClass::Lowercase, self.no_lower),
            (CharacterClass::Uppercase, self.no_upper),
            (CharacterClass::Digit, self.no_digits),
            (CharacterClass::Symbol, self.no_symbols),
        ]
        .into_iter()
        .filter_map(|(class, off)| off.then_some(class))
    }
}
