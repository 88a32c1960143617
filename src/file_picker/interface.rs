use std::path::PathBuf;

pub trait FilePicker: Send + Sync {
    /// Blocks until the user closes the dialog. Cancelling yields an empty list.
    fn pick_files(&self) -> Vec<PathBuf>;
}
