pub mod candidate_file;
pub mod drag;
