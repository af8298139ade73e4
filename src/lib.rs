pub mod errors;
pub mod scoring;
pub mod aligner;
pub mod io;
