use crate::intake::candidate_file::CandidateFile;
use crate::prediction_client::interface::{PredictionClient, UploadError};
use reqwest::blocking::multipart::{Form, Part};
use std::time::Duration;

pub struct PredictionClientHttp {
    http: reqwest::blocking::Client,
    predict_url: String,
}

impl PredictionClientHttp {
    pub fn new(
        predict_url: &str,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            predict_url: predict_url.to_string(),
        })
    }

    fn build_form(&self, file: &CandidateFile) -> Result<Form, UploadError> {
        let bytes = file.read_bytes().map_err(|source| UploadError::ReadFile {
            name: file.name.clone(),
            source,
        })?;

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.media_type)
            .map_err(|err| UploadError::Request(err.to_string()))?;

        Ok(Form::new().part("file", part))
    }
}

impl PredictionClient for PredictionClientHttp {
    fn predict(&self, file: &CandidateFile) -> Result<serde_json::Value, UploadError> {
        let form = self.build_form(file)?;

        tracing::debug!(url = %self.predict_url, file = %file.name, "posting image for prediction");

        let response = self
            .http
            .post(&self.predict_url)
            .multipart(form)
            .send()
            .map_err(|err| UploadError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "prediction endpoint rejected upload");
            return Err(UploadError::HttpStatus(status.as_u16()));
        }

        response
            .json::<serde_json::Value>()
            .map_err(|err| UploadError::Decode(err.to_string()))
    }
}
