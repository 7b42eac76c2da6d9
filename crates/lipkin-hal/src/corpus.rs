//! Legacy bitstring corpus formats.
//!
//! Two text layouts are in circulation:
//!
//! - [`CorpusFormat::Lines`]: one line per clique in clique order, each a
//!   comma-separated list of bitstrings with an optional trailing comma.
//!   A blank line keeps its position, so a register too small for the
//!   last cliques simply has fewer lines.
//! - [`CorpusFormat::Flat`]: one quoted list of every bitstring, possibly
//!   wrapped in brackets and spread over many lines, holding the four
//!   cliques back to back in equal-sized chunks.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use lipkin_prep::MeasurementBasis;

use crate::bitstring::{Bitstring, BitstringSample};
use crate::error::{HalError, HalResult};

/// Corpus text layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusFormat {
    /// One line per clique.
    #[default]
    Lines,
    /// A single list split into four equal chunks.
    Flat,
}

impl fmt::Display for CorpusFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusFormat::Lines => f.write_str("lines"),
            CorpusFormat::Flat => f.write_str("flat"),
        }
    }
}

impl FromStr for CorpusFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" => Ok(CorpusFormat::Lines),
            "flat" => Ok(CorpusFormat::Flat),
            other => Err(format!(
                "unknown corpus format '{other}' (expected lines or flat)"
            )),
        }
    }
}

impl CorpusFormat {
    /// Parse corpus text in this layout.
    pub fn parse(self, text: &str) -> HalResult<BitstringSample> {
        match self {
            CorpusFormat::Lines => parse_lines(text),
            CorpusFormat::Flat => parse_flat(text),
        }
    }
}

/// Read and parse a corpus file.
pub fn load(path: impl AsRef<Path>, format: CorpusFormat) -> HalResult<BitstringSample> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let sample = format.parse(&text)?;
    info!(
        path = %path.display(),
        %format,
        cliques = sample.len(),
        shots = sample.shots().unwrap_or(0),
        "loaded bitstring corpus"
    );
    Ok(sample)
}

/// Write a sample in the [`CorpusFormat::Lines`] layout.
pub fn save(path: impl AsRef<Path>, sample: &BitstringSample) -> HalResult<()> {
    let path = path.as_ref();
    fs::write(path, to_lines(sample))?;
    debug!(path = %path.display(), cliques = sample.len(), "wrote bitstring corpus");
    Ok(())
}

/// Render a sample in the [`CorpusFormat::Lines`] layout.
///
/// Lines run up to the last present clique; absent ones are left blank.
pub fn to_lines(sample: &BitstringSample) -> String {
    let last = sample.bases().map(MeasurementBasis::clique).max().unwrap_or(0);
    let mut out = String::new();
    for basis in MeasurementBasis::ALL.into_iter().take(last) {
        if let Some(batch) = sample.get(basis) {
            for b in batch {
                out.push_str(&b.to_string());
                out.push(',');
            }
        }
        out.push('\n');
    }
    out
}

fn parse_lines(text: &str) -> HalResult<BitstringSample> {
    let mut sample = BitstringSample::new();
    for (i, line) in text.lines().enumerate() {
        let batch = parse_tokens(line.split(','))?;
        if batch.is_empty() {
            continue;
        }
        let basis = MeasurementBasis::ALL.get(i).copied().ok_or_else(|| {
            HalError::Corpus(format!("line {} is beyond the fourth clique", i + 1))
        })?;
        sample.insert(basis, batch);
    }
    Ok(sample)
}

fn parse_flat(text: &str) -> HalResult<BitstringSample> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '[' | ']') && !c.is_whitespace())
        .collect();
    let all = parse_tokens(cleaned.split(','))?;

    if all.len() % 4 != 0 {
        return Err(HalError::Corpus(format!(
            "{} bitstrings do not split into four equal cliques",
            all.len()
        )));
    }
    let chunk = all.len() / 4;
    let mut sample = BitstringSample::new();
    if chunk == 0 {
        return Ok(sample);
    }
    for (basis, batch) in MeasurementBasis::ALL.into_iter().zip(all.chunks(chunk)) {
        sample.insert(basis, batch.to_vec());
    }
    Ok(sample)
}

fn parse_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> HalResult<Vec<Bitstring>> {
    tokens
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<Bitstring>())
        .collect()
}
