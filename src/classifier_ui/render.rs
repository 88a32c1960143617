use crate::classifier_ui::core::{Preview, State, Status};
use crate::classifier_ui::preview::fade_opacity;
use crate::config::Config;
use crate::prediction_client::response::PredictionOutcome;
use std::time::Instant;

pub const ANALYZING_MESSAGE: &str = "Analyzing image...";
pub const REJECTED_MESSAGE: &str = "Error: Only image files are allowed!";
pub const MALFORMED_MESSAGE: &str = "Error processing result: Unexpected prediction format";
pub const UNEXPECTED_FAULT_MESSAGE: &str = "An unexpected error occurred. Please try again.";
pub const NO_DETAILS: &str = "No details provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Error,
    Success,
    Warning,
}

impl Tone {
    pub fn color(self) -> egui::Color32 {
        match self {
            Tone::Info => egui::Color32::from_rgb(0x1e, 0x60, 0xd0),
            Tone::Error => egui::Color32::from_rgb(0xd0, 0x20, 0x20),
            Tone::Success => egui::Color32::from_rgb(0x1a, 0x8f, 0x2e),
            Tone::Warning => egui::Color32::from_rgb(0xe0, 0x80, 0x10),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusView {
    Empty,
    Text {
        text: String,
        tone: Tone,
    },
    Prediction {
        label: String,
        class_name: String,
        confidence_text: String,
        confidence_tone: Tone,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewView {
    Empty,
    Loading,
    Image {
        upload_id: u64,
        opacity: f32,
    },
}

impl PreviewView {
    pub fn is_animating(&self) -> bool {
        matches!(self, PreviewView::Image { opacity, .. } if *opacity < 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub status: StatusView,
    pub preview: PreviewView,
    pub highlight: bool,
}

pub fn render(config: &Config, state: &State, now: Instant) -> View {
    View {
        status: render_status(config, &state.status),
        preview: render_preview(config, state.preview.as_ref(), now),
        highlight: state.highlight,
    }
}

pub fn render_status(config: &Config, status: &Status) -> StatusView {
    match status {
        Status::Empty => StatusView::Empty,
        Status::Analyzing { .. } => StatusView::Text {
            text: ANALYZING_MESSAGE.to_string(),
            tone: Tone::Info,
        },
        Status::Rejected { .. } => StatusView::Text {
            text: REJECTED_MESSAGE.to_string(),
            tone: Tone::Error,
        },
        Status::Outcome { outcome, .. } => render_prediction(config, outcome),
        Status::UnexpectedFault => StatusView::Text {
            text: UNEXPECTED_FAULT_MESSAGE.to_string(),
            tone: Tone::Error,
        },
    }
}

pub fn render_prediction(config: &Config, outcome: &PredictionOutcome) -> StatusView {
    match outcome {
        PredictionOutcome::Failure { message, details } => StatusView::Text {
            text: format!(
                "Error: {}. Details: {}",
                message,
                details.as_deref().unwrap_or(NO_DETAILS)
            ),
            tone: Tone::Error,
        },
        PredictionOutcome::Success {
            class_name,
            confidence,
            ..
        } => StatusView::Prediction {
            label: config.predicted_class_label.clone(),
            class_name: class_name.clone(),
            confidence_text: format_confidence(*confidence),
            confidence_tone: confidence_tone(config, *confidence),
        },
        PredictionOutcome::Malformed { .. } => StatusView::Text {
            text: MALFORMED_MESSAGE.to_string(),
            tone: Tone::Error,
        },
    }
}

pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

pub fn confidence_tone(config: &Config, confidence: f64) -> Tone {
    if confidence > config.confidence_success_threshold {
        Tone::Success
    } else {
        Tone::Warning
    }
}

fn render_preview(config: &Config, preview: Option<&Preview>, now: Instant) -> PreviewView {
    match preview {
        None => PreviewView::Empty,
        Some(Preview::Decoding { .. }) | Some(Preview::Ready { .. }) => PreviewView::Loading,
        Some(Preview::Shown {
            upload_id,
            inserted_at,
        }) => PreviewView::Image {
            upload_id: *upload_id,
            opacity: fade_opacity(
                now.saturating_duration_since(*inserted_at),
                config.fade_delay,
                config.fade_duration,
            ),
        },
    }
}
