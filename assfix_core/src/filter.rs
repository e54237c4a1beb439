use std::io::BufRead;

use anyhow::Context;

/// Prefix of the single-line directive. The trailing space is significant:
/// it is what separates `color_manager <value>` from the block keyword.
/// Checked against the line with surrounding spaces trimmed.
const DIRECTIVE_PREFIX: &str = "color_manager ";

/// Prefix of the multi-line block opener. Checked against the untrimmed
/// line, so an indented opener is NOT recognized.
const BLOCK_PREFIX: &str = "color_manager_syncolor";

/// Where the line classifier currently is in the stream.
enum State {
    /// Classifying lines one by one.
    Scanning,
    /// Inside a `color_manager_syncolor` block; every line is discarded
    /// until the closing `}`.
    InBlock,
}

/// Result of filtering one decompressed stream.
pub struct StripOutcome {
    /// Lines kept during the scan, each re-terminated with a single `\n`.
    pub retained: String,
    /// Raw bytes after the first block's closing `}`, copied without being
    /// split into lines. Empty when no block closed before end of input.
    pub tail: Vec<u8>,
    /// True iff at least one construct was removed. The caller rewrites the
    /// file iff this is set; otherwise the file must stay untouched.
    pub matched: bool,
    /// The removed lines, in stream order, for progress reporting.
    pub dropped: Vec<String>,
}

/// Scan a decompressed scene-description stream and strip the two
/// color-management constructs.
///
/// # State machine
/// While `Scanning`, each line (line ending stripped) is classified:
/// 1. trimmed line starts with `color_manager ` → dropped;
/// 2. untrimmed line starts with `color_manager_syncolor` → dropped,
///    enter `InBlock`;
/// 3. anything else → retained.
///
/// While `InBlock` every line is dropped. The line whose trimmed content is
/// exactly `}` closes the block: a single blank line marks the removal
/// point, then the rest of the stream is drained as raw bytes into
/// [`StripOutcome::tail`] and scanning stops for good. Only the first block
/// gets this treatment — directives occurring after it land in the tail
/// verbatim.
///
/// # Read termination
/// A read or decode failure before any line was read is propagated (a gzip
/// stream that bad never produced data). After the first line, any failure
/// is treated the same as end of input: the scan stops with whatever was
/// accumulated.
pub fn strip_color_manager<R: BufRead>(mut reader: R) -> anyhow::Result<StripOutcome> {
    let mut retained = String::new();
    let mut tail = Vec::new();
    let mut dropped = Vec::new();
    let mut matched = false;
    let mut state = State::Scanning;
    let mut lines_read = 0u64;
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => lines_read += 1,
            Err(err) if lines_read == 0 => {
                return Err(err).context("reading decompressed stream");
            }
            Err(_) => break,
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        match state {
            State::Scanning => {
                if line.trim_matches(' ').starts_with(DIRECTIVE_PREFIX) {
                    matched = true;
                    dropped.push(line.clone());
                } else if line.starts_with(BLOCK_PREFIX) {
                    matched = true;
                    dropped.push(line.clone());
                    state = State::InBlock;
                } else {
                    retained.push_str(&line);
                    retained.push('\n');
                }
            }
            State::InBlock => {
                dropped.push(line.clone());
                if line.trim_matches(' ') == "}" {
                    // Closing delimiter: the removed block leaves one blank
                    // line behind, then the remainder of the stream is copied
                    // as raw bytes with no further line classification.
                    retained.push('\n');
                    // A failure part-way through the tail keeps whatever was
                    // already read.
                    let _ = reader.read_to_end(&mut tail);
                    break;
                }
            }
        }
    }

    Ok(StripOutcome {
        retained,
        tail,
        matched,
        dropped,
    })
}
