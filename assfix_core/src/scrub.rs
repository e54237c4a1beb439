use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::Context;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::filter::{strip_color_manager, StripOutcome};

/// What [`scrub_file`] did to one archive.
pub struct ScrubReport {
    /// True iff a construct matched and the file was recompressed in place.
    pub rewritten: bool,
    /// The removed lines, in stream order.
    pub dropped: Vec<String>,
}

/// Decompress one `.ass.gz` archive, strip the color_manager constructs,
/// and — only if something matched — recompress over the original path.
///
/// The read side is fully consumed and closed before the output file is
/// created, so the rewrite never truncates a stream it is still reading.
/// On any error the file is left exactly as it was found.
pub fn scrub_file(path: &Path) -> anyhow::Result<ScrubReport> {
    let outcome = {
        let file =
            File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let decoder = GzDecoder::new(file);
        strip_color_manager(BufReader::new(decoder))
            .with_context(|| format!("decompressing {}", path.display()))?
    };

    if !outcome.matched {
        return Ok(ScrubReport {
            rewritten: false,
            dropped: outcome.dropped,
        });
    }

    let StripOutcome {
        retained,
        tail,
        dropped,
        ..
    } = outcome;

    let file =
        File::create(path).with_context(|| format!("recreating {}", path.display()))?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(retained.as_bytes())?;
    encoder.write_all(&tail)?;
    encoder
        .finish()
        .with_context(|| format!("recompressing {}", path.display()))?;

    Ok(ScrubReport {
        rewritten: true,
        dropped,
    })
}
