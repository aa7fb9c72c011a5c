use ahash::AHashMap;
use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use indicatif::ProgressBar;
use log::{debug, info, warn};
use methylome::{CGmapRecord, FormatOptions, MethylKitRecord, Strand, METHYLKIT_HEADER};
use std::io::{BufRead, Write};

const PROGRESS_UPDATE_INTERVAL: u64 = 100_000;

#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub lines_read: u64,
    pub rows_written: u64,
    /// Records dropped per dinucleotide context.
    pub skipped_contexts: AHashMap<String, u64>,
    /// Strand codes other than C/G, written as reverse strand.
    pub unknown_strand_codes: AHashMap<String, u64>,
}

impl ConversionSummary {
    pub fn records_skipped(&self) -> u64 {
        self.skipped_contexts.values().sum()
    }

    pub fn log(&self) {
        info!(
            "Read {} CGmap lines. Wrote {} CG rows, skipped {} non-CG records.",
            self.lines_read,
            self.rows_written,
            self.records_skipped()
        );

        for (context, count) in sorted_counts(&self.skipped_contexts) {
            info!("Skipped context '{}': {}", context, count);
        }

        for (code, count) in sorted_counts(&self.unknown_strand_codes) {
            warn!(
                "Strand code '{}' seen {} times and written as reverse strand",
                code, count
            );
        }
    }
}

fn sorted_counts(counts: &AHashMap<String, u64>) -> Vec<(&String, &u64)> {
    let mut sorted: Vec<(&String, &u64)> = counts.iter().collect();
    sorted.sort();
    sorted
}

/// Converts CGmap lines from `reader` into a methylKit table on `writer`.
///
/// The header is always written. Only CG context records produce rows and
/// the input order is kept. The first malformed line aborts the conversion;
/// rows written before it are flushed to `writer` before the error is returned.
pub fn convert_cgmap<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    options: &FormatOptions,
    pb: &ProgressBar,
) -> Result<ConversionSummary> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    wtr.write_record(METHYLKIT_HEADER)
        .context("Failed to write methylKit header")?;

    let mut summary = ConversionSummary::default();
    let result = write_methylkit_rows(reader, &mut wtr, options, pb, &mut summary);

    wtr.flush().context("Failed to flush methylKit output")?;
    result?;

    pb.set_position(summary.lines_read);
    Ok(summary)
}

fn write_methylkit_rows<R: BufRead, W: Write>(
    mut reader: R,
    wtr: &mut csv::Writer<W>,
    options: &FormatOptions,
    pb: &ProgressBar,
    summary: &mut ConversionSummary,
) -> Result<()> {
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .with_context(|| format!("Error reading CGmap line {}", summary.lines_read + 1))?;
        if bytes_read == 0 {
            break;
        }
        summary.lines_read += 1;

        if summary.lines_read % PROGRESS_UPDATE_INTERVAL == 0 {
            pb.set_position(summary.lines_read);
        }

        let record = CGmapRecord::from_line(&line, summary.lines_read as usize)?;

        if !record.context.is_cg() {
            *summary
                .skipped_contexts
                .entry(record.context.to_string())
                .or_insert(0) += 1;
            continue;
        }

        if !Strand::is_known_cgmap_code(&record.strand_code) {
            let count = summary
                .unknown_strand_codes
                .entry(record.strand_code.clone())
                .or_insert(0);
            if *count == 0 {
                warn!(
                    "Unexpected strand code '{}' at line {}. Writing as reverse strand.",
                    record.strand_code, summary.lines_read
                );
            }
            *count += 1;
        }

        let row = MethylKitRecord::from_cgmap(&record, options);
        debug!("Line {}: {}", summary.lines_read, row.chr_base);

        wtr.serialize(&row).with_context(|| {
            format!("Failed to write methylKit row for line {}", summary.lines_read)
        })?;
        summary.rows_written += 1;
    }

    Ok(())
}
