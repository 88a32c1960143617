use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Success {
        class_index: usize,
        class_name: String,
        confidence: f64,
    },
    Failure {
        message: String,
        details: Option<String>,
    },
    Malformed {
        raw: Value,
    },
}

impl PredictionOutcome {
    pub fn failure(message: &str, details: impl Into<String>) -> Self {
        PredictionOutcome::Failure {
            message: message.to_string(),
            details: Some(details.into()),
        }
    }
}

/// Reads a response body that is either `{error, details?}` or
/// `{prediction: [f64], class_names: [String]}`.
pub fn interpret(raw: Value) -> PredictionOutcome {
    let Some(body) = raw.as_object() else {
        return PredictionOutcome::Malformed { raw };
    };

    if let Some(error) = body.get("error").filter(|value| is_truthy(value)) {
        return PredictionOutcome::Failure {
            message: value_text(error),
            details: body
                .get("details")
                .filter(|value| is_truthy(value))
                .map(value_text),
        };
    }

    let Some(prediction) = body.get("prediction").and_then(Value::as_array) else {
        return PredictionOutcome::Malformed { raw };
    };

    let scores: Option<Vec<f64>> = prediction.iter().map(Value::as_f64).collect();
    let Some((class_index, confidence)) = scores.as_deref().and_then(argmax) else {
        return PredictionOutcome::Malformed { raw };
    };

    let class_name = body
        .get("class_names")
        .and_then(Value::as_array)
        .and_then(|names| names.get(class_index))
        .and_then(Value::as_str)
        .map(str::to_string);

    match class_name {
        Some(class_name) => PredictionOutcome::Success {
            class_index,
            class_name,
            confidence,
        },
        None => PredictionOutcome::Malformed { raw },
    }
}

/// Index and value of the largest score. Ties resolve to the first index.
pub fn argmax(scores: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &score) in scores.iter().enumerate() {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
