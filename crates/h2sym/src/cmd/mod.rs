use clap::{Args, Subcommand};
use h2sym_registry::Category;

use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod code;
pub mod envinfo;
pub mod list;
pub mod lookup;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve numeric codes to canonical names.
    Lookup(LookupArgs),
    /// Resolve a canonical name back to its code.
    Code(CodeArgs),
    /// Print the code table of one or all categories.
    List(ListArgs),
    /// Show version information.
    Version(VersionArgs),
    /// Print build and environment diagnostics.
    Envinfo(EnvinfoArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Lookup(args) => lookup::run(args, format),
        Command::Code(args) => code::run(args, format),
        Command::List(args) => list::run(args, format),
        Command::Version(args) => version::run(args),
        Command::Envinfo(args) => envinfo::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Category: frame-type, settings-parameter or error-code.
    pub category: Category,
    /// Codes to resolve, decimal or 0x-prefixed hex.
    #[arg(required = true)]
    pub codes: Vec<String>,
    /// Exit with a data error if any code is unrecognized.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct CodeArgs {
    /// Category: frame-type, settings-parameter or error-code.
    pub category: Category,
    /// Canonical name (exact, case-sensitive).
    pub name: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Category to list. Default: all categories.
    pub category: Option<Category>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[derive(Args, Debug, Default)]
pub struct EnvinfoArgs {}

/// Parse a code given as decimal (`11`) or hex (`0xb`).
pub fn parse_code(input: &str) -> CliResult<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "code must not be empty"));
    }

    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => input.parse::<u32>(),
    };

    parsed.map_err(|_| CliError::new(USAGE, format!("invalid code: {input}")))
}
