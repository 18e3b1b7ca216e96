//! Score handoff file
//!
//! The top-ranked letters are written as a JSON object, letter → metric, in rank order
//! and indented with four spaces. A chart renderer picks the file up later; reading it
//! back yields `None` whenever there is nothing usable.

use crate::error::{Result, SolverError};
use crate::solver::{LetterScore, Metric};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match *self {
            Self::Count(count) => serializer.serialize_u64(count as u64),
            Self::Bits(bits) => serializer.serialize_f64(bits),
        }
    }
}

/// Scores as a map, keeping their order
struct RankedLetters<'a>(&'a [LetterScore]);

impl Serialize for RankedLetters<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for score in self.0 {
            map.serialize_entry(&score.letter, &score.metric)?;
        }
        map.end()
    }
}

/// Write the first `top` scores to `path`, replacing any existing file
///
/// # Errors
///
/// Returns `SolverError::Handoff` if the file cannot be written.
pub fn write_handoff<P: AsRef<Path>>(path: P, scores: &[LetterScore], top: usize) -> Result<()> {
    let path = path.as_ref();
    let handoff_error = |source| SolverError::Handoff {
        path: path.to_path_buf(),
        source,
    };

    let ranked = RankedLetters(&scores[..top.min(scores.len())]);
    let mut writer = BufWriter::new(File::create(path).map_err(handoff_error)?);

    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    ranked.serialize(&mut serializer)?;
    writer.flush().map_err(handoff_error)?;

    log::info!("Wrote {} scores to {}", ranked.0.len(), path.display());
    Ok(())
}

/// Read a handoff file back as `(letter, value)` pairs in file order
///
/// Returns `None` if the file is missing, is not a JSON object or holds a non-numeric
/// value.
#[must_use]
pub fn read_handoff<P: AsRef<Path>>(path: P) -> Option<Vec<(String, f64)>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .inspect_err(|e| log::debug!("No handoff data at {}: {e}", path.display()))
        .ok()?;

    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&text)
        .inspect_err(|e| log::debug!("Unreadable handoff data in {}: {e}", path.display()))
        .ok()?;

    object
        .into_iter()
        .map(|(letter, value)| value.as_f64().map(|v| (letter, v)))
        .collect()
}
