use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone, PartialEq)]
pub enum FileSource {
    Path(PathBuf),
    Bytes(Arc<[u8]>),
}

impl fmt::Debug for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            FileSource::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
        }
    }
}

/// A user-supplied file waiting to be checked and uploaded.
///
/// Bytes are not read at intake time; files that fail the media type check
/// are never opened.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFile {
    pub name: String,
    pub media_type: String,
    pub source: FileSource,
}

impl CandidateFile {
    pub fn from_path(path: PathBuf) -> Self {
        Self {
            name: file_name(&path),
            media_type: guess_media_type(&path),
            source: FileSource::Path(path),
        }
    }

    pub fn from_bytes(name: &str, media_type: &str, bytes: Arc<[u8]>) -> Self {
        Self {
            name: name.to_string(),
            media_type: media_type.to_string(),
            source: FileSource::Bytes(bytes),
        }
    }

    /// Native drops usually carry only a path and an empty mime, web drops carry
    /// bytes and a mime. Returns `None` when the drop has neither path nor bytes.
    pub fn from_dropped_file(dropped: &egui::DroppedFile) -> Option<Self> {
        let source = match (&dropped.bytes, &dropped.path) {
            (Some(bytes), _) => FileSource::Bytes(bytes.clone()),
            (None, Some(path)) => FileSource::Path(path.clone()),
            (None, None) => return None,
        };

        let name = match (&dropped.path, dropped.name.is_empty()) {
            (Some(path), true) => file_name(path),
            _ => dropped.name.clone(),
        };

        let media_type = if !dropped.mime.is_empty() {
            dropped.mime.clone()
        } else {
            guess_media_type(Path::new(&name))
        };

        Some(Self {
            name,
            media_type,
            source,
        })
    }

    pub fn is_image(&self, image_media_prefix: &str) -> bool {
        self.media_type.starts_with(image_media_prefix)
    }

    pub fn read_bytes(&self) -> std::io::Result<Vec<u8>> {
        match &self.source {
            FileSource::Path(path) => std::fs::read(path),
            FileSource::Bytes(bytes) => Ok(bytes.to_vec()),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn guess_media_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or_default()
        .to_string()
}
