use crate::classifier_ui::preview::{decode_preview, fade_opacity, PreviewError};
use crate::classifier_ui::tests::fixture::{png_bytes, png_file, text_file};
use crate::intake::candidate_file::CandidateFile;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn decodes_image_into_rgba() {
    let image = decode_preview(&png_file("leaf.png"), 1024).unwrap();

    assert_eq!((image.width, image.height), (2, 3));
    assert_eq!(image.rgba.len(), 2 * 3 * 4);
    assert_eq!(&image.rgba[..4], &[10, 200, 30, 255]);
}

#[test]
fn undecodable_bytes_are_an_error() {
    let err = decode_preview(&text_file("notes.txt"), 1024).unwrap_err();

    assert!(matches!(err, PreviewError::Decode { .. }));
}

#[test]
fn wide_image_is_shrunk_to_fit_max_side() {
    let file = CandidateFile::from_bytes("panorama.png", "image/png", Arc::from(png_bytes(20000, 2)));

    let image = decode_preview(&file, 1024).unwrap();

    assert!(image.width <= 1024 && image.height <= 1024);
    assert!(image.width > 0 && image.height > 0);
    assert_eq!(image.rgba.len(), image.width * image.height * 4);
}

#[test]
fn tall_image_keeps_aspect_ratio_when_shrunk() {
    let file = CandidateFile::from_bytes("tall.png", "image/png", Arc::from(png_bytes(100, 400)));

    let image = decode_preview(&file, 200).unwrap();

    assert_eq!((image.width, image.height), (50, 200));
}

#[test]
fn opacity_stays_zero_during_delay() {
    let delay = Duration::from_millis(10);
    let duration = Duration::from_millis(500);

    assert_eq!(fade_opacity(Duration::ZERO, delay, duration), 0.0);
    assert_eq!(fade_opacity(Duration::from_millis(5), delay, duration), 0.0);
}

#[test]
fn opacity_eases_in_and_settles_at_one() {
    let delay = Duration::from_millis(10);
    let duration = Duration::from_millis(500);

    let half = fade_opacity(Duration::from_millis(260), delay, duration);
    assert!((half - 0.25).abs() < 1e-4);
    assert!(half < 0.5);

    assert_eq!(fade_opacity(Duration::from_millis(510), delay, duration), 1.0);
    assert_eq!(fade_opacity(Duration::from_secs(10), delay, duration), 1.0);
}

#[test]
fn zero_duration_shows_immediately_after_delay() {
    assert_eq!(
        fade_opacity(Duration::from_millis(20), Duration::from_millis(10), Duration::ZERO),
        1.0
    );
}
