use crate::intake::candidate_file::CandidateFile;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

/// RGBA pixels waiting to be uploaded as a texture. Dropped as soon as the
/// texture exists.
#[derive(Clone, PartialEq)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Arc<Vec<u8>>,
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecodedImage({}x{}, {} bytes)",
            self.width,
            self.height,
            self.rgba.len()
        )
    }
}

/// Decodes `file` and shrinks it, keeping the aspect ratio, so neither edge
/// exceeds `max_side`.
pub fn decode_preview(file: &CandidateFile, max_side: u32) -> Result<DecodedImage, PreviewError> {
    let bytes = file.read_bytes().map_err(|source| PreviewError::Read {
        name: file.name.clone(),
        source,
    })?;

    let dynamic = image::load_from_memory(&bytes).map_err(|source| PreviewError::Decode {
        name: file.name.clone(),
        source,
    })?;
    let max_side = max_side.max(1);
    let rgba = if dynamic.width() > max_side || dynamic.height() > max_side {
        dynamic.thumbnail(max_side, max_side).to_rgba8()
    } else {
        dynamic.to_rgba8()
    };

    Ok(DecodedImage {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        rgba: Arc::new(rgba.into_raw()),
    })
}

/// Opacity of a freshly inserted preview: 0 until `delay` has passed, then an
/// ease-in ramp to 1 over `duration`.
pub fn fade_opacity(since_insert: Duration, delay: Duration, duration: Duration) -> f32 {
    let Some(animating_for) = since_insert.checked_sub(delay) else {
        return 0.0;
    };
    if duration.is_zero() {
        return 1.0;
    }

    let t = (animating_for.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0);
    t * t
}
