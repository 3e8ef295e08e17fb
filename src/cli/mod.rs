// src/cli/mod.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate randomized passwords from selectable character classes", long_about = None)]
pub struct Args {
    /// Password length
    #[arg(long, short, env = "DEFAULT_PASSWORD_LENGTH")]
    pub length: Option<usize>,

    /// Exclude lowercase characters (a-z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude uppercase characters (A-Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude digits (0-9)
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols (!@#$%^&*(){}[]=<>/,.)
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy the generated password to the clipboard
    #[arg(long, short)]
    pub copy: bool,

    /// Seed the random source for reproducible output (not secure)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use JSON for output (for scripted use)
    #[arg(long)]
    pub json: bool,
}
