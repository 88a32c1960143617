use crate::classifier_ui::core::{Preview, State, Status};
use crate::classifier_ui::render::{
    confidence_tone, format_confidence, render, render_prediction, render_status, PreviewView,
    StatusView, Tone, ANALYZING_MESSAGE, MALFORMED_MESSAGE, REJECTED_MESSAGE,
    UNEXPECTED_FAULT_MESSAGE,
};
use crate::config::Config;
use crate::prediction_client::response::PredictionOutcome;
use serde_json::json;
use std::time::{Duration, Instant};

fn text(view: StatusView) -> (String, Tone) {
    match view {
        StatusView::Text { text, tone } => (text, tone),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn confidence_is_a_two_decimal_percentage() {
    assert_eq!(format_confidence(0.8234), "82.34%");
    assert_eq!(format_confidence(1.0), "100.00%");
    assert_eq!(format_confidence(0.0), "0.00%");
    assert_eq!(format_confidence(0.5), "50.00%");
}

#[test]
fn success_tone_requires_strictly_more_than_seventy_percent() {
    let config = Config::default();

    assert_eq!(confidence_tone(&config, 0.70), Tone::Warning);
    assert_eq!(confidence_tone(&config, 0.71), Tone::Success);
    assert_eq!(confidence_tone(&config, 0.2), Tone::Warning);
}

#[test]
fn success_renders_class_and_confidence() {
    let config = Config::default();

    let view = render_prediction(
        &config,
        &PredictionOutcome::Success {
            class_index: 2,
            class_name: "brown_blight".to_string(),
            confidence: 0.8234,
        },
    );

    assert_eq!(
        view,
        StatusView::Prediction {
            label: "Predicted Disease".to_string(),
            class_name: "brown_blight".to_string(),
            confidence_text: "82.34%".to_string(),
            confidence_tone: Tone::Success,
        }
    );
}

#[test]
fn failure_text_includes_details_or_placeholder() {
    let config = Config::default();

    let (with_details, tone) = text(render_prediction(
        &config,
        &PredictionOutcome::Failure {
            message: "bad".to_string(),
            details: Some("x".to_string()),
        },
    ));
    assert_eq!(with_details, "Error: bad. Details: x");
    assert_eq!(tone, Tone::Error);

    let (without_details, _) = text(render_prediction(
        &config,
        &PredictionOutcome::Failure {
            message: "bad".to_string(),
            details: None,
        },
    ));
    assert_eq!(without_details, "Error: bad. Details: No details provided");
}

#[test]
fn malformed_result_hides_raw_payload() {
    let config = Config::default();

    let (message, tone) = text(render_prediction(
        &config,
        &PredictionOutcome::Malformed {
            raw: json!({"secret": "internal"}),
        },
    ));

    assert_eq!(message, MALFORMED_MESSAGE);
    assert!(!message.contains("internal"));
    assert_eq!(tone, Tone::Error);
}

#[test]
fn status_messages_and_tones() {
    let config = Config::default();

    assert_eq!(render_status(&config, &Status::Empty), StatusView::Empty);
    assert_eq!(
        text(render_status(&config, &Status::Analyzing { upload_id: 0 })),
        (ANALYZING_MESSAGE.to_string(), Tone::Info)
    );
    assert_eq!(
        text(render_status(
            &config,
            &Status::Rejected {
                file_name: "a.txt".to_string()
            }
        )),
        (REJECTED_MESSAGE.to_string(), Tone::Error)
    );
    assert_eq!(
        text(render_status(&config, &Status::UnexpectedFault)),
        (UNEXPECTED_FAULT_MESSAGE.to_string(), Tone::Error)
    );
}

#[test]
fn reset_state_renders_nothing() {
    let config = Config::default();

    let view = render(&config, &State::default(), Instant::now());

    assert_eq!(view.status, StatusView::Empty);
    assert_eq!(view.preview, PreviewView::Empty);
    assert!(!view.highlight);
}

#[test]
fn preview_fades_in_after_insertion() {
    let config = Config::default();
    let inserted_at = Instant::now();
    let state = State {
        preview: Some(Preview::Shown {
            upload_id: 7,
            inserted_at,
        }),
        ..State::default()
    };

    let at_insert = render(&config, &state, inserted_at).preview;
    assert_eq!(
        at_insert,
        PreviewView::Image {
            upload_id: 7,
            opacity: 0.0
        }
    );
    assert!(at_insert.is_animating());

    let settled = render(&config, &state, inserted_at + Duration::from_secs(2)).preview;
    assert_eq!(
        settled,
        PreviewView::Image {
            upload_id: 7,
            opacity: 1.0
        }
    );
    assert!(!settled.is_animating());
}

#[test]
fn decoding_preview_is_not_yet_visible() {
    let config = Config::default();
    let state = State {
        preview: Some(Preview::Decoding { upload_id: 1 }),
        ..State::default()
    };

    assert_eq!(
        render(&config, &state, Instant::now()).preview,
        PreviewView::Loading
    );
}
