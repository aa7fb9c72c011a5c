use serde::{Serialize, Serializer};
use std::fmt::Display;

use crate::{CGmapRecord, Strand};

pub const METHYLKIT_HEADER: [&str; 7] = [
    "chrBase", "chr", "base", "strand", "coverage", "freqC", "freqT",
];

pub const DEFAULT_DECIMALS: usize = 2;
/// Beyond this f64 can no longer hold a percentage to the requested precision.
pub const MAX_DECIMALS: usize = 10;

/// Controls how CGmap records are rendered as methylKit rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Prepend `chr` to the chromosome name in `chrBase` and `chr`.
    pub chr_prefix: bool,
    /// Decimal places kept for `freqC` and `freqT`.
    pub decimals: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            chr_prefix: true,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

/// A percentage rounded to a fixed number of decimals.
///
/// Written with trailing zeros trimmed but always with at least one
/// fractional digit, so `80` is written as `80.0` and `57.330` as `57.33`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentage {
    value: f64,
    decimals: usize,
}

impl Percentage {
    pub fn new(value: f64, decimals: usize) -> Self {
        let decimals = decimals.min(MAX_DECIMALS);
        let scale = 10f64.powi(decimals as i32);
        let mut rounded = (value * scale).round() / scale;
        // -0.0 prints with a sign
        if rounded == 0.0 {
            rounded = 0.0;
        }
        Self {
            value: rounded,
            decimals,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The remainder up to 100, at the same precision.
    pub fn complement(&self) -> Self {
        Self::new(100.0 - self.value, self.decimals)
    }
}

impl Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut txt = format!("{:.*}", self.decimals, self.value);
        if txt.contains('.') {
            let trimmed_len = txt.trim_end_matches('0').len();
            txt.truncate(trimmed_len);
            if txt.ends_with('.') {
                txt.push('0');
            }
        } else {
            txt.push_str(".0");
        }
        write!(f, "{}", txt)
    }
}

impl Serialize for Percentage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One row of a methylKit input table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethylKitRecord {
    #[serde(rename = "chrBase")]
    pub chr_base: String,
    pub chr: String,
    pub base: String,
    pub strand: Strand,
    pub coverage: String,
    #[serde(rename = "freqC")]
    pub freq_c: Percentage,
    #[serde(rename = "freqT")]
    pub freq_t: Percentage,
}

impl MethylKitRecord {
    /// Builds the methylKit row for a CGmap record. Context filtering is left
    /// to the caller.
    pub fn from_cgmap(record: &CGmapRecord, options: &FormatOptions) -> Self {
        let chr = if options.chr_prefix {
            format!("chr{}", record.chromosome)
        } else {
            record.chromosome.clone()
        };

        let freq_c = Percentage::new(record.methylation_fraction * 100.0, options.decimals);
        let freq_t = freq_c.complement();

        Self {
            chr_base: format!("{}.{}", chr, record.position),
            chr,
            base: record.position.clone(),
            strand: record.strand(),
            coverage: record.coverage.clone(),
            freq_c,
            freq_t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_percentage_formatting() {
        assert_eq!(Percentage::new(80.0, 2).to_string(), "80.0");
        assert_eq!(Percentage::new(25.0, 2).to_string(), "25.0");
        assert_eq!(Percentage::new(57.33, 2).to_string(), "57.33");
        assert_eq!(Percentage::new(57.3, 2).to_string(), "57.3");
        assert_eq!(Percentage::new(0.0, 2).to_string(), "0.0");
        assert_eq!(Percentage::new(100.0, 2).to_string(), "100.0");
        assert_eq!(Percentage::new(33.3333, 0).to_string(), "33.0");
        assert_eq!(Percentage::new(33.3333, 3).to_string(), "33.333");
    }

    #[test]
    fn test_percentage_max_decimals() {
        let pct = Percentage::new(0.3333 * 100.0, MAX_DECIMALS);
        assert_eq!(pct.to_string(), "33.33");
        assert_eq!(pct.complement().to_string(), "66.67");

        // Requests above the cap are clamped
        assert_eq!(Percentage::new(0.3333 * 100.0, 15).to_string(), "33.33");
    }

    #[test]
    fn test_negative_zero_is_written_as_zero() {
        assert_eq!(Percentage::new(-0.001 * 100.0, 0).to_string(), "0.0");
        assert_eq!(Percentage::new(-0.0, 2).to_string(), "0.0");
    }

    #[test]
    fn test_percentage_rounds_float_noise() {
        // 0.57 * 100 is 56.99999999999999 in f64
        let pct = Percentage::new(0.57 * 100.0, 2);
        assert_eq!(pct.to_string(), "57.0");
        assert_eq!(pct.complement().to_string(), "43.0");
    }

    #[test]
    fn test_percentage_complement() {
        let pct = Percentage::new(0.3333 * 100.0, 2);
        assert_eq!(pct.to_string(), "33.33");
        assert_eq!(pct.complement().to_string(), "66.67");
        assert!((pct.value() + pct.complement().value() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_cgmap_forward() -> Result<()> {
        let cgmap = CGmapRecord::from_line("1  C  100  W  CG  0.8  4  5", 1)?;
        let row = MethylKitRecord::from_cgmap(&cgmap, &FormatOptions::default());

        assert_eq!(row.chr_base, "chr1.100");
        assert_eq!(row.chr, "chr1");
        assert_eq!(row.base, "100");
        assert_eq!(row.strand, Strand::Forward);
        assert_eq!(row.coverage, "5");
        assert_eq!(row.freq_c.to_string(), "80.0");
        assert_eq!(row.freq_t.to_string(), "20.0");

        Ok(())
    }

    #[test]
    fn test_from_cgmap_reverse() -> Result<()> {
        let cgmap = CGmapRecord::from_line("2  G  250  W  CG  0.25  1  4", 1)?;
        let row = MethylKitRecord::from_cgmap(&cgmap, &FormatOptions::default());

        assert_eq!(row.chr_base, "chr2.250");
        assert_eq!(row.chr, "chr2");
        assert_eq!(row.strand, Strand::Reverse);
        assert_eq!(row.freq_c.to_string(), "25.0");
        assert_eq!(row.freq_t.to_string(), "75.0");

        Ok(())
    }

    #[test]
    fn test_from_cgmap_without_prefix() -> Result<()> {
        let cgmap = CGmapRecord::from_line("scaffold_7\tC\t42\tCG\tCG\t1.0\t9\t9", 1)?;
        let options = FormatOptions {
            chr_prefix: false,
            ..FormatOptions::default()
        };
        let row = MethylKitRecord::from_cgmap(&cgmap, &options);

        assert_eq!(row.chr_base, "scaffold_7.42");
        assert_eq!(row.chr, "scaffold_7");
        assert_eq!(row.freq_c.to_string(), "100.0");
        assert_eq!(row.freq_t.to_string(), "0.0");

        Ok(())
    }
}
