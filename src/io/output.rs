use std::io::Write;

use serde::Serialize;

use crate::aligner::AlignmentResult;
use crate::errors::SeqAlignError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Score line followed by the two gapped sequences as FASTA records
    #[default]
    Text,

    /// A single JSON object including names and aligned ranges
    Json,
}

#[derive(Serialize)]
struct NamedAlignment<'a> {
    name1: &'a str,
    name2: &'a str,

    #[serde(flatten)]
    alignment: &'a AlignmentResult,
}

/// Write an alignment to `writer`.
///
/// Infinite scores (e.g., Hamming distance between sequences of unequal length) are written as
/// `inf` in text output and as `null` in JSON.
pub fn write_alignment<W: Write>(
    writer: &mut W,
    alignment: &AlignmentResult,
    name1: &str,
    name2: &str,
    format: OutputFormat,
) -> Result<(), SeqAlignError> {
    match format {
        OutputFormat::Text => {
            writeln!(writer, "{}", alignment.score)?;
            writeln!(writer, ">{name1}")?;
            writeln!(writer, "{}", alignment.seq1)?;
            writeln!(writer, ">{name2}")?;
            writeln!(writer, "{}", alignment.seq2)?;
        },
        OutputFormat::Json => {
            let named = NamedAlignment { name1, name2, alignment };
            serde_json::to_writer_pretty(&mut *writer, &named)?;
            writeln!(writer)?;
        },
    }

    Ok(())
}
