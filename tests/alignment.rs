use std::path::{Path, PathBuf};

use seqalign::aligner::{Aligner, AlignmentMode, PairwiseAligner};
use seqalign::errors::SeqAlignError;
use seqalign::io::{load_first_record, load_scoring_matrix, write_alignment, OutputFormat};
use seqalign::scoring::{HammingScoring, LcsScoring, MatrixScoring, SimpleScoring};

fn data(fname: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(fname)
}

/// Scoring used by the command line tool when no options are given
fn cli_defaults() -> SimpleScoring {
    SimpleScoring::new(1.0, -1.0, -12.0, -2.0)
}

#[test]
fn test_load_first_record() {
    let record = load_first_record(&data("acgt_ref.fa")).unwrap();

    assert_eq!(record.name, "acgt_ref");
    assert_eq!(record.sequence, b"ACGTTGCAACGT");
}

#[test]
fn test_load_gzipped_record() {
    let record = load_first_record(&data("acgt_del.fa.gz")).unwrap();

    assert_eq!(record.name, "acgt_del");
    assert_eq!(record.sequence, b"ACGTGCAACGT");
}

#[test]
fn test_load_errors() {
    assert!(matches!(
        load_first_record(&data("empty.fa")),
        Err(SeqAlignError::NoFastaRecords(_))
    ));

    assert!(matches!(
        load_first_record(&data("does_not_exist.fa")),
        Err(SeqAlignError::FileReadError { .. })
    ));

    assert!(matches!(
        load_scoring_matrix(&data("malformed.mat")),
        Err(SeqAlignError::MalformedMatrix { line: 3, .. })
    ));
}

#[test]
fn test_global_from_fasta() {
    let seq1 = load_first_record(&data("acgt_ref.fa")).unwrap();
    let seq2 = load_first_record(&data("acgt_del.fa.gz")).unwrap();

    let aligner = Aligner::new(cli_defaults());
    let aln = aligner.align(&seq1.sequence, &seq2.sequence).unwrap();

    assert_eq!(aln.score, -3.0);
    assert_eq!(aln.seq1, "ACGTTGCAACGT");
    assert_eq!(aln.seq2, "ACG-TGCAACGT");
    assert_eq!(aln.num_gaps(), 1);

    let mut buf = Vec::new();
    write_alignment(&mut buf, &aln, &seq1.name, &seq2.name, OutputFormat::Text).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "-3\n>acgt_ref\nACGTTGCAACGT\n>acgt_del\nACG-TGCAACGT\n"
    );
}

#[test]
fn test_local_from_fasta() {
    let seq1 = load_first_record(&data("flanked_t.fa")).unwrap();
    let seq2 = load_first_record(&data("flanked_c.fa")).unwrap();

    let aligner = Aligner::with_mode(cli_defaults(), AlignmentMode::Local);
    let aln = aligner.align(&seq1.sequence, &seq2.sequence).unwrap();

    assert_eq!(aln.score, 7.0);
    assert_eq!(aln.seq1, "GATTACA");
    assert_eq!(aln.seq2, "GATTACA");
    assert_eq!(aln.seq1_range, 4..11);
    assert_eq!(aln.seq2_range, 2..9);

    let mut buf = Vec::new();
    write_alignment(&mut buf, &aln, &seq1.name, &seq2.name, OutputFormat::Json).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(json["name1"], "flanked_t");
    assert_eq!(json["score"], 7.0);
    assert_eq!(json["seq2_range"]["start"], 2);
}

#[test]
fn test_matrix_from_file() {
    let matrix = load_scoring_matrix(&data("nuc.mat")).unwrap();
    assert_eq!(matrix.symbols(), b"ATGC");

    let by_matrix = Aligner::new(MatrixScoring::new(matrix, -5.0, -1.0));
    let by_identity = Aligner::new(SimpleScoring::new(5.0, -4.0, -5.0, -1.0));

    let seq1 = load_first_record(&data("acgt_ref.fa")).unwrap();
    let seq2 = load_first_record(&data("acgt_del.fa.gz")).unwrap();

    let expected = by_identity.align(&seq1.sequence, &seq2.sequence).unwrap();
    let aln = by_matrix.align(&seq1.sequence, &seq2.sequence).unwrap();
    assert_eq!(aln, expected);
}

#[test]
fn test_lcs_and_hamming_from_fasta() {
    let seq1 = load_first_record(&data("acgt_ref.fa")).unwrap();
    let seq2 = load_first_record(&data("acgt_del.fa.gz")).unwrap();

    let aln = Aligner::new(LcsScoring).align(&seq1.sequence, &seq2.sequence).unwrap();
    assert_eq!(aln.score, 11.0);
    assert_eq!(aln.num_matches(), 11);

    let aln = Aligner::new(HammingScoring).align(&seq1.sequence, &seq1.sequence).unwrap();
    assert_eq!(aln.score, 0.0);

    let aln = Aligner::new(HammingScoring).align(&seq1.sequence, &seq2.sequence).unwrap();
    assert!(aln.score.is_infinite());
}
