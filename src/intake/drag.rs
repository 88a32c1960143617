use crate::intake::candidate_file::CandidateFile;

#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
    Drop(Vec<CandidateFile>),
}

/// Turns two consecutive frame snapshots of the window's drag state into
/// drag lifecycle events. A drop always ends the gesture.
pub fn drag_events(
    was_hovering: bool,
    is_hovering: bool,
    dropped: Vec<CandidateFile>,
) -> Vec<DragEvent> {
    if !dropped.is_empty() {
        return vec![DragEvent::Drop(dropped)];
    }

    match (was_hovering, is_hovering) {
        (false, true) => vec![DragEvent::Enter],
        (true, true) => vec![DragEvent::Over],
        (true, false) => vec![DragEvent::Leave],
        (false, false) => vec![],
    }
}
