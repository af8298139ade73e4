use std::fs;
use std::fs::File;
use std::io::{self, stdout, BufWriter, IsTerminal, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, span, Level};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

use seqalign::aligner::utils::print_alignment;
use seqalign::aligner::{Aligner, AlignmentMode, PairwiseAligner};
use seqalign::io::{load_first_record, load_scoring_matrix, write_alignment};
use seqalign::scoring::{HammingScoring, LcsScoring, MatrixScoring, ScoringSchema, SimpleScoring};

mod cli;

type BoxedSchema = Box<dyn ScoringSchema + Send + Sync>;

/// Log level derived from the command line. DP tables are only logged at trace level.
fn log_level(verbose: u8, debug_tables: bool) -> &'static str {
    if debug_tables {
        return "trace";
    }

    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the stderr logger. `RUST_LOG` takes precedence over the command line verbosity.
fn init_logging(verbose: u8, debug_tables: bool) -> Result<()> {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level(verbose, debug_tables)))
        .context("Invalid log filter")?;

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter_layer);

    Registry::default().with(stderr_log).init();

    Ok(())
}

fn build_affine_schema(args: &cli::AffineArgs) -> Result<BoxedSchema> {
    if let Some(path) = &args.matrix {
        let matrix = load_scoring_matrix(path)
            .with_context(|| format!("Could not load scoring matrix {}", path.display()))?;

        Ok(Box::new(MatrixScoring::new(matrix, args.gap_open, args.gap_continue)))
    } else {
        Ok(Box::new(SimpleScoring::new(
            args.match_score,
            args.mismatch_score,
            args.gap_open,
            args.gap_continue,
        )))
    }
}

fn perform_alignment<A: PairwiseAligner>(aligner: &A, args: &cli::CommonArgs) -> Result<()> {
    let seq1 = load_first_record(&args.seq1)
        .with_context(|| format!("Could not read first sequence from {}", args.seq1.display()))?;
    let seq2 = load_first_record(&args.seq2)
        .with_context(|| format!("Could not read second sequence from {}", args.seq2.display()))?;

    info!("Aligning {} ({} bp) to {} ({} bp)...",
        seq1.name, seq1.sequence.len(), seq2.name, seq2.sequence.len());

    let repeats = args.time.unwrap_or(1).max(1);
    let start = Instant::now();

    let mut result = aligner.align(&seq1.sequence, &seq2.sequence)?;
    for _ in 1..repeats {
        result = aligner.align(&seq1.sequence, &seq2.sequence)?;
    }

    let elapsed = start.elapsed();
    if args.time.is_some() {
        info!("{} alignments took {:?} in total, {:?} per alignment.",
            repeats, elapsed, elapsed / repeats);
    }

    info!("Done. Alignment score: {}", result.score);
    debug!("\n{}", print_alignment(&result));

    let mut writer: Box<dyn Write> = if let Some(path) = &args.output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create directory {}", parent.display()))?;
        }

        let file = File::create(path)
            .with_context(|| format!("Could not create output file {}", path.display()))?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(stdout().lock()) as Box<dyn Write>
    };

    write_alignment(&mut writer, &result, &seq1.name, &seq2.name, args.output_format.into())?;
    writer.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    let Some(command) = &args.command else {
        anyhow::bail!("No subcommand given. Run with --help to see the available subcommands.");
    };

    init_logging(args.verbose, command.common().debug)?;

    let span = span!(Level::INFO, "seqalign");
    let _enter = span.enter();

    match command {
        cli::CliSubcommand::Global(v) => {
            let aligner = Aligner::with_mode(build_affine_schema(v)?, AlignmentMode::Global);
            perform_alignment(&aligner, &v.common)?
        },
        cli::CliSubcommand::Local(v) => {
            let aligner = Aligner::with_mode(build_affine_schema(v)?, AlignmentMode::Local);
            perform_alignment(&aligner, &v.common)?
        },
        cli::CliSubcommand::Lcs(v) => perform_alignment(&Aligner::new(LcsScoring), v)?,
        cli::CliSubcommand::Hamming(v) => perform_alignment(&Aligner::new(HammingScoring), v)?,
    }

    Ok(())
}
