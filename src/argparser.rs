use clap::{builder::TypedValueParser, Parser, ValueEnum};
use methylome::{DEFAULT_DECIMALS, MAX_DECIMALS};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Detect gzip from the magic bytes of the input.
    Auto,
    Gzip,
    Plain,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        required = true,
        help = "CGmap file, plain or gzip compressed. Use '-' to read from stdin."
    )]
    pub input: PathBuf,

    #[arg(
        short,
        long,
        help = "Write the methylKit table to this file instead of stdout."
    )]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,

    #[arg(
        long,
        default_value_t = false,
        help = "Do not prepend 'chr' to chromosome names."
    )]
    pub no_chr_prefix: bool,

    #[arg(
        long,
        default_value_t = DEFAULT_DECIMALS,
        value_parser = clap::value_parser!(u8).range(0..=MAX_DECIMALS as i64).map(usize::from),
        help = "Decimal places kept for freqC and freqT."
    )]
    pub decimals: usize,

    #[arg(short, long, default_value_t = false, help = "Hide the progress spinner.")]
    pub quiet: bool,
}
