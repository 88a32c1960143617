use crate::classifier_ui::core::{Effect, Event};
use crate::classifier_ui::preview::decode_preview;
use crate::file_picker::interface::FilePicker;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::PredictionClient;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    prediction_client: Arc<dyn PredictionClient + Send + Sync>,
    file_picker: Arc<dyn FilePicker + Send + Sync>,
    event_sender: Sender<Event>,
    wake: Arc<dyn Fn() + Send + Sync>,
    preview_max_side: u32,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        prediction_client: Arc<dyn PredictionClient + Send + Sync>,
        file_picker: Arc<dyn FilePicker + Send + Sync>,
        event_sender: Sender<Event>,
        wake: Arc<dyn Fn() + Send + Sync>,
        preview_max_side: u32,
    ) -> Self {
        Self {
            logger,
            prediction_client,
            file_picker,
            event_sender,
            wake,
            preview_max_side,
        }
    }

    /// Log effects run inline. Everything else gets its own thread, so
    /// uploads started together run concurrently and finish in any order.
    pub fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LogInfo(_) | Effect::LogError(_) => self.run_effect(effect),
                effect => {
                    let self_clone = self.clone();
                    std::thread::spawn(move || self_clone.run_effect_guarded(effect));
                }
            }
        }
    }

    fn run_effect_guarded(&self, effect: Effect) {
        if let Err(payload) = catch_unwind(AssertUnwindSafe(|| self.run_effect(effect))) {
            self.send(Event::UnexpectedFault(panic_message(payload.as_ref())));
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::LogInfo(message) => {
                let _ = self.logger.info(&message);
            }
            Effect::LogError(message) => {
                let _ = self.logger.error(&message);
            }
            Effect::OpenPicker => {
                let _ = self.logger.info("Running effect: OpenPicker");
                let paths = self.file_picker.pick_files();
                self.send(Event::PickerClosed(paths));
            }
            Effect::Upload { upload_id, file } => {
                let _ = self.logger.info(&format!(
                    "Running effect: Upload #{} {} ({})",
                    upload_id, file.name, file.media_type
                ));
                let result = self.prediction_client.predict(&file);
                self.send(Event::UploadDone {
                    upload_id,
                    file,
                    result,
                });
            }
            Effect::DecodePreview { upload_id, file } => {
                let result = decode_preview(&file, self.preview_max_side);
                self.send(Event::PreviewDecoded { upload_id, result });
            }
        }
    }

    fn send(&self, event: Event) {
        if self.event_sender.send(event).is_ok() {
            (self.wake)();
        }
    }
}

pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
