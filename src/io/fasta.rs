use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::errors::SeqAlignError;

/// A named sequence read from a FASTA file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FastaSequence {
    pub name: String,
    pub sequence: Vec<u8>,
}

/// Open a FASTA file, transparently decompressing it if the filename ends with `.gz`.
pub fn open_fasta(path: &Path) -> Result<fasta::io::Reader<Box<dyn BufRead>>, SeqAlignError> {
    let is_gzipped = path
        .file_name()
        .map(|v| v.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false);

    let file = File::open(path).map_err(|source| SeqAlignError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let reader_inner: Box<dyn BufRead> = if is_gzipped {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(fasta::io::Reader::new(reader_inner))
}

/// Read the first record of a FASTA file. Any further records are ignored.
pub fn load_first_record(path: &Path) -> Result<FastaSequence, SeqAlignError> {
    let mut reader = open_fasta(path)?;

    let Some(result) = reader.records().next() else {
        return Err(SeqAlignError::NoFastaRecords(path.to_path_buf()));
    };

    let record = result?;
    let sequence: &[u8] = record.sequence().as_ref();

    Ok(FastaSequence {
        name: String::from_utf8_lossy(record.name()).into_owned(),
        sequence: sequence.to_vec(),
    })
}
