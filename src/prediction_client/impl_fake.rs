use crate::intake::candidate_file::CandidateFile;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{PredictionClient, UploadError};
use rand::Rng;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Offline stand-in for the prediction endpoint. Answers with random
/// probabilities after a random delay.
pub struct PredictionClientFake {
    logger: Arc<dyn Logger + Send + Sync>,
    class_names: Vec<String>,
}

impl PredictionClientFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, class_names: Vec<String>) -> Self {
        Self {
            logger,
            class_names,
        }
    }
}

impl PredictionClient for PredictionClientFake {
    fn predict(&self, file: &CandidateFile) -> Result<serde_json::Value, UploadError> {
        let bytes = file.read_bytes().map_err(|source| UploadError::ReadFile {
            name: file.name.clone(),
            source,
        })?;

        let _ = self.logger.info(&format!(
            "PredictionClientFake::predict({}, {} bytes)",
            file.name,
            bytes.len()
        ));

        let mut rng = rand::rng();

        std::thread::sleep(Duration::from_millis(rng.random_range(200..800)));

        let raw: Vec<f64> = self
            .class_names
            .iter()
            .map(|_| rng.random_range(0.0..1.0))
            .collect();
        let total: f64 = raw.iter().sum();
        let prediction: Vec<f64> = raw.iter().map(|score| score / total).collect();

        Ok(json!({
            "prediction": prediction,
            "class_names": self.class_names,
        }))
    }
}
