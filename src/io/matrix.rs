use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::SeqAlignError;
use crate::scoring::ScoringMatrix;

/// Read and parse a substitution matrix file, e.g., a BLOSUM or nucleotide matrix.
pub fn load_scoring_matrix(path: &Path) -> Result<ScoringMatrix, SeqAlignError> {
    let text = fs::read_to_string(path).map_err(|source| SeqAlignError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let matrix: ScoringMatrix = text.parse()?;
    debug!(path = %path.display(), symbols = matrix.symbols().len(), "Loaded scoring matrix");

    Ok(matrix)
}
