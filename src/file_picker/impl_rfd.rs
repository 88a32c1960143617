use crate::file_picker::interface::FilePicker;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct FilePickerRfd {}

impl FilePickerRfd {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePicker for FilePickerRfd {
    fn pick_files(&self) -> Vec<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select images")
            .add_filter(
                "Images",
                &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"],
            )
            .add_filter("All files", &["*"])
            .pick_files()
            .unwrap_or_default()
    }
}
