pub mod fasta;
pub mod matrix;
pub mod output;

pub use fasta::{load_first_record, FastaSequence};
pub use matrix::load_scoring_matrix;
pub use output::{write_alignment, OutputFormat};
