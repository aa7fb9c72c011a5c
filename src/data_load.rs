use anyhow::{Context, Result};
use bytesize::ByteSize;
use flate2::read::MultiGzDecoder;
use log::info;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::Path,
};

use crate::argparser::InputFormat;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Opens a CGmap file for line reading. `-` reads from stdin.
///
/// With `InputFormat::Auto` the first bytes are peeked and gzip is detected
/// from its magic bytes. Returns the reader together with the format that
/// was used.
pub fn open_cgmap<P: AsRef<Path>>(
    path: P,
    format: InputFormat,
) -> Result<(Box<dyn BufRead>, InputFormat)> {
    let path = path.as_ref();

    let source: Box<dyn Read> = if path == Path::new("-") {
        info!("Reading CGmap from stdin");
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(path)
            .with_context(|| format!("Failed to open CGmap at: {:?}", path))?;
        if let Ok(metadata) = file.metadata() {
            info!(
                "Reading CGmap: {:?} ({})",
                path,
                ByteSize::b(metadata.len())
            );
        }
        Box::new(file)
    };

    let reader = BufReader::new(source);
    wrap_decoder(reader, format).with_context(|| format!("Failed to read CGmap at: {:?}", path))
}

fn wrap_decoder<R: BufRead + 'static>(
    mut reader: R,
    format: InputFormat,
) -> Result<(Box<dyn BufRead>, InputFormat)> {
    let resolved = match format {
        InputFormat::Auto => {
            if is_gzip(&mut reader)? {
                InputFormat::Gzip
            } else {
                InputFormat::Plain
            }
        }
        explicit => explicit,
    };

    let reader: Box<dyn BufRead> = match resolved {
        InputFormat::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(reader))),
        _ => Box::new(reader),
    };

    Ok((reader, resolved))
}

/// Peeks at the buffered input without consuming it.
fn is_gzip<R: BufRead>(reader: &mut R) -> Result<bool> {
    let buf = reader.fill_buf()?;
    Ok(buf.starts_with(&GZIP_MAGIC))
}
