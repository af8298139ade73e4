use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use seqalign::io::OutputFormat;


/// The output formats supported by seqalign
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputType {
    /// Score followed by both aligned sequences in FASTA format
    Text,

    /// JSON object with score, aligned sequences and aligned ranges
    Json,
}

impl From<OutputType> for OutputFormat {
    fn from(value: OutputType) -> Self {
        match value {
            OutputType::Text => OutputFormat::Text,
            OutputType::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<CliSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliSubcommand {
    /// Globally align two sequences with affine gap penalties
    Global(AffineArgs),

    /// Find the best local alignment between two sequences
    Local(AffineArgs),

    /// Align two sequences such that the score equals their longest common subsequence
    Lcs(CommonArgs),

    /// Compute the Hamming distance between two sequences of equal length
    Hamming(CommonArgs),
}

impl CliSubcommand {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Self::Global(v) | Self::Local(v) => &v.common,
            Self::Lcs(v) | Self::Hamming(v) => v,
        }
    }
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// First sequence in FASTA format. Only the first record is used.
    #[clap(help_heading = "Inputs")]
    pub seq1: PathBuf,

    /// Second sequence in FASTA format. Only the first record is used.
    #[clap(help_heading = "Inputs")]
    pub seq2: PathBuf,

    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    pub output: Option<PathBuf>,

    /// Output file type.
    #[arg(value_enum, short = 'F', long, default_value = "text")]
    #[clap(help_heading = "Outputs")]
    pub output_format: OutputType,

    /// Repeat the alignment the given number of times and report the elapsed time
    #[arg(short, long)]
    #[clap(help_heading = "Run configuration")]
    pub time: Option<u32>,

    /// Log the DP tables of each alignment. Only useful for short sequences.
    #[arg(short = 'D', long)]
    #[clap(help_heading = "Run configuration")]
    pub debug: bool,
}

#[derive(Args, Debug)]
pub struct AffineArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Score for opening a gap
    #[arg(short = 'O', long, default_value_t = -12.0, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub gap_open: f64,

    /// Score for each gapped position, including the first
    #[arg(short = 'C', long, default_value_t = -2.0, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub gap_continue: f64,

    /// Score for two identical symbols
    #[arg(long = "match", default_value_t = 1.0, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub match_score: f64,

    /// Score for two different symbols
    #[arg(long = "mismatch", default_value_t = -1.0, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    pub mismatch_score: f64,

    /// Substitution matrix file, e.g., BLOSUM62. Overrides the match and mismatch scores.
    #[arg(short, long)]
    #[clap(help_heading = "Alignment configuration")]
    pub matrix: Option<PathBuf>,
}
