use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub predict_url: String,
    pub request_timeout: Duration,
    pub image_media_prefix: String,
    pub confidence_success_threshold: f64,
    pub predicted_class_label: String,
    pub fade_delay: Duration,
    pub fade_duration: Duration,
    /// Longest edge of a decoded preview, in pixels.
    pub preview_max_side: u32,
    pub fake_class_names: Vec<String>,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predict_url: "http://127.0.0.1:5000/predict".to_string(),
            request_timeout: Duration::from_secs(60),
            image_media_prefix: "image/".to_string(),
            confidence_success_threshold: 0.70,
            predicted_class_label: "Predicted Disease".to_string(),
            fade_delay: Duration::from_millis(10),
            fade_duration: Duration::from_millis(500),
            preview_max_side: 1024,
            fake_class_names: tea_leaf_class_names(),
            logger_timezone: local_offset(),
        }
    }
}

fn tea_leaf_class_names() -> Vec<String> {
    [
        "Anthracnose",
        "algal leaf",
        "bird eye spot",
        "brown_blight",
        "gray light",
        "healthy",
        "red leaf spot",
        "white spot",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}

fn local_offset() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
