use anyhow::{Context, Result};
use clap::Parser;
use humantime::format_duration;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use methylome::FormatOptions;
use std::{
    fs,
    io::{self, BufWriter, Write},
    time::Instant,
};

mod argparser;
mod data_load;
mod processing;

use argparser::Args;
use data_load::open_cgmap;
use processing::convert_cgmap;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("Running cgmap2methylkit");

    let options = FormatOptions {
        chr_prefix: !args.no_chr_prefix,
        decimals: args.decimals,
    };

    let (reader, format) = open_cgmap(&args.input, args.input_format)?;
    info!("Input format: {:?}", format);

    let writer: Box<dyn Write> = match &args.output {
        Some(outpath) => {
            if let Some(parent) = outpath.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Could not create parent directory: {:?}", parent)
                    })?;
                }
            }
            let outfile = fs::File::create(outpath)
                .with_context(|| format!("Failed to create file at: {:?}", outpath))?;
            info!("Writing methylKit table to: {:?}", outpath);
            Box::new(BufWriter::new(outfile))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} lines")
                .context("Invalid progress template")?,
        );
        pb
    };

    let start = Instant::now();
    let result = convert_cgmap(reader, writer, &options, &pb);
    pb.finish_and_clear();
    let summary = result.with_context(|| format!("Failed to convert CGmap: {:?}", args.input))?;

    summary.log();
    info!(
        "Conversion took: {}",
        format_duration(start.elapsed()).to_string()
    );

    Ok(())
}
