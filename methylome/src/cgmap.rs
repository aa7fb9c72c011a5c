use anyhow::{bail, Context, Result};

use crate::{DinucleotideContext, Strand};

pub const CGMAP_FIELD_COUNT: usize = 8;

/// One line of a CGmap file.
///
/// Position and coverage are kept as the text found in the file and are
/// written back out unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct CGmapRecord {
    pub chromosome: String,
    pub strand_code: String,
    pub position: String,
    pub call_type: String,
    pub context: DinucleotideContext,
    pub methylation_fraction: f64,
    pub methylated_count: String,
    pub coverage: String,
}

impl CGmapRecord {
    /// Parses a whitespace delimited CGmap line. `line_number` is 1-based and
    /// only used for error messages.
    ///
    /// # Errors
    /// Returns an error if the line does not have exactly eight fields or if
    /// the methylation fraction is not a finite number.
    pub fn from_line(line: &str, line_number: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() != CGMAP_FIELD_COUNT {
            bail!(
                "Malformed CGmap record at line {}: expected {} fields, found {}",
                line_number,
                CGMAP_FIELD_COUNT,
                fields.len()
            );
        }

        let methylation_fraction: f64 = fields[5].parse().with_context(|| {
            format!(
                "Malformed CGmap record at line {}: invalid methylation fraction '{}'",
                line_number, fields[5]
            )
        })?;
        if !methylation_fraction.is_finite() {
            bail!(
                "Malformed CGmap record at line {}: invalid methylation fraction '{}'",
                line_number,
                fields[5]
            );
        }

        Ok(Self {
            chromosome: fields[0].to_string(),
            strand_code: fields[1].to_string(),
            position: fields[2].to_string(),
            call_type: fields[3].to_string(),
            context: DinucleotideContext::parse(fields[4]),
            methylation_fraction,
            methylated_count: fields[6].to_string(),
            coverage: fields[7].to_string(),
        })
    }

    pub fn strand(&self) -> Strand {
        Strand::from_cgmap_code(&self.strand_code)
    }
}
