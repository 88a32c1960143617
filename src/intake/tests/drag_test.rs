use crate::intake::candidate_file::CandidateFile;
use crate::intake::drag::{drag_events, DragEvent};
use std::path::PathBuf;

#[test]
fn hover_start_is_enter() {
    assert_eq!(drag_events(false, true, vec![]), vec![DragEvent::Enter]);
}

#[test]
fn continued_hover_is_over() {
    assert_eq!(drag_events(true, true, vec![]), vec![DragEvent::Over]);
}

#[test]
fn hover_end_without_files_is_leave() {
    assert_eq!(drag_events(true, false, vec![]), vec![DragEvent::Leave]);
}

#[test]
fn no_drag_activity_is_silent() {
    assert!(drag_events(false, false, vec![]).is_empty());
}

#[test]
fn dropped_files_end_the_gesture() {
    let file = CandidateFile::from_path(PathBuf::from("/tmp/leaf.png"));

    assert_eq!(
        drag_events(true, false, vec![file.clone()]),
        vec![DragEvent::Drop(vec![file])]
    );
}
