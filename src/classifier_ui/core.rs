use crate::classifier_ui::preview::{DecodedImage, PreviewError};
use crate::config::Config;
use crate::intake::candidate_file::CandidateFile;
use crate::intake::drag::DragEvent;
use crate::prediction_client::interface::UploadError;
use crate::prediction_client::response::{interpret, PredictionOutcome};
use std::path::PathBuf;
use std::time::Instant;

pub const UPLOAD_FAILED_MESSAGE: &str = "Error processing the image";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Empty,
    Analyzing {
        upload_id: u64,
    },
    Rejected {
        file_name: String,
    },
    Outcome {
        upload_id: u64,
        outcome: PredictionOutcome,
    },
    UnexpectedFault,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    Decoding {
        upload_id: u64,
    },
    Ready {
        upload_id: u64,
        image: DecodedImage,
    },
    Shown {
        upload_id: u64,
        inserted_at: Instant,
    },
}

impl Preview {
    pub fn upload_id(&self) -> u64 {
        match self {
            Preview::Decoding { upload_id }
            | Preview::Ready { upload_id, .. }
            | Preview::Shown { upload_id, .. } => *upload_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    pub status: Status,
    pub preview: Option<Preview>,
    pub highlight: bool,
    pub picker_selection: Vec<PathBuf>,
    pub picker_open: bool,
    pub next_upload_id: u64,
}

#[derive(Debug)]
pub enum Event {
    Drag(DragEvent),
    DropZoneClicked,
    PickerClosed(Vec<PathBuf>),
    ResetClicked,
    UploadDone {
        upload_id: u64,
        file: CandidateFile,
        result: Result<serde_json::Value, UploadError>,
    },
    PreviewDecoded {
        upload_id: u64,
        result: Result<DecodedImage, PreviewError>,
    },
    PreviewLoaded {
        upload_id: u64,
        at: Instant,
    },
    UnexpectedFault(String),
}

impl Event {
    /// Drag-over fires every frame while hovering; not worth a log line.
    pub fn is_noisy(&self) -> bool {
        matches!(self, Event::Drag(DragEvent::Over))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    OpenPicker,
    Upload { upload_id: u64, file: CandidateFile },
    DecodePreview { upload_id: u64, file: CandidateFile },
    LogInfo(String),
    LogError(String),
}

pub fn init() -> (State, Vec<Effect>) {
    (
        State::default(),
        vec![Effect::LogInfo("Ready for images".to_string())],
    )
}

pub fn transition(config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    match event {
        Event::Drag(DragEvent::Enter) | Event::Drag(DragEvent::Over) => (
            State {
                highlight: true,
                ..state
            },
            vec![],
        ),
        Event::Drag(DragEvent::Leave) => (
            State {
                highlight: false,
                ..state
            },
            vec![],
        ),
        Event::Drag(DragEvent::Drop(files)) => intake_files(
            config,
            State {
                highlight: false,
                ..state
            },
            files,
        ),

        Event::DropZoneClicked => {
            if state.picker_open {
                return (state, vec![]);
            }
            (
                State {
                    picker_open: true,
                    ..state
                },
                vec![Effect::OpenPicker],
            )
        }

        Event::PickerClosed(paths) => {
            let state = State {
                picker_open: false,
                ..state
            };
            if paths.is_empty() || paths == state.picker_selection {
                return (state, vec![]);
            }
            let files = paths.iter().cloned().map(CandidateFile::from_path).collect();
            intake_files(
                config,
                State {
                    picker_selection: paths,
                    ..state
                },
                files,
            )
        }

        Event::ResetClicked => (
            State {
                next_upload_id: state.next_upload_id,
                picker_open: state.picker_open,
                ..State::default()
            },
            vec![],
        ),

        Event::UploadDone {
            upload_id,
            file,
            result: Ok(raw),
        } => {
            let outcome = interpret(raw);
            let mut effects = vec![];
            if let PredictionOutcome::Malformed { raw } = &outcome {
                effects.push(Effect::LogError(format!(
                    "Upload #{} unexpected prediction format. Raw response: {}",
                    upload_id, raw
                )));
            }
            effects.push(Effect::DecodePreview { upload_id, file });

            (
                State {
                    status: Status::Outcome { upload_id, outcome },
                    preview: Some(Preview::Decoding { upload_id }),
                    ..state
                },
                effects,
            )
        }
        Event::UploadDone {
            upload_id,
            result: Err(err),
            ..
        } => (
            State {
                status: Status::Outcome {
                    upload_id,
                    outcome: PredictionOutcome::failure(UPLOAD_FAILED_MESSAGE, err.to_string()),
                },
                ..state
            },
            vec![Effect::LogError(format!("Upload #{} failed: {}", upload_id, err))],
        ),

        Event::PreviewDecoded { upload_id, result } => {
            if !is_current_preview(&state, upload_id) {
                return (state, vec![]);
            }
            match result {
                Ok(image) => (
                    State {
                        preview: Some(Preview::Ready { upload_id, image }),
                        ..state
                    },
                    vec![],
                ),
                Err(err) => (
                    State {
                        preview: None,
                        ..state
                    },
                    vec![Effect::LogError(format!(
                        "Upload #{} preview unavailable: {}",
                        upload_id, err
                    ))],
                ),
            }
        }

        Event::PreviewLoaded { upload_id, at } => match state.preview {
            Some(Preview::Ready {
                upload_id: ready_id,
                ..
            }) if ready_id == upload_id => (
                State {
                    preview: Some(Preview::Shown {
                        upload_id,
                        inserted_at: at,
                    }),
                    ..state
                },
                vec![],
            ),
            _ => (state, vec![]),
        },

        // A buffer still waiting for its texture may be what failed.
        Event::UnexpectedFault(message) => (
            State {
                status: Status::UnexpectedFault,
                preview: match state.preview {
                    Some(Preview::Ready { .. }) => None,
                    preview => preview,
                },
                ..state
            },
            vec![Effect::LogError(format!("Global error: {}", message))],
        ),
    }
}

/// Each file is judged on its own: images are uploaded, anything else
/// overwrites the status with the rejection message. The status left behind
/// is the one set by the last file in the batch.
fn intake_files(
    config: &Config,
    mut state: State,
    files: Vec<CandidateFile>,
) -> (State, Vec<Effect>) {
    let mut effects = vec![];

    for file in files {
        if file.is_image(&config.image_media_prefix) {
            let upload_id = state.next_upload_id;
            state.next_upload_id += 1;
            state.status = Status::Analyzing { upload_id };
            effects.push(Effect::Upload { upload_id, file });
        } else {
            state.status = Status::Rejected {
                file_name: file.name.clone(),
            };
            effects.push(Effect::LogInfo(format!(
                "Rejected {} ({})",
                file.name,
                if file.media_type.is_empty() {
                    "unknown type"
                } else {
                    file.media_type.as_str()
                }
            )));
        }
    }

    (state, effects)
}

fn is_current_preview(state: &State, upload_id: u64) -> bool {
    matches!(state.preview, Some(Preview::Decoding { upload_id: current }) if current == upload_id)
}
