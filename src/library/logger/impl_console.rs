use crate::library::logger::interface::Logger;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoggerConsole {
    namespace: Option<String>,
    timezone: chrono::FixedOffset,
}

impl LoggerConsole {
    pub fn new(timezone: chrono::FixedOffset) -> Self {
        Self {
            namespace: None,
            timezone,
        }
    }

    fn format_line(&self, at: DateTime<Utc>, level: &str, message: &str) -> String {
        let local_time = at.with_timezone(&self.timezone);
        let formatted = local_time.format("%Y-%m-%d %I:%M:%S%.3f %p");
        match &self.namespace {
            Some(namespace) => format!("[{}] {} {}: {}", formatted, level, namespace, message),
            None => format!("[{}] {} {}", formatted, level, message),
        }
    }
}

impl Logger for LoggerConsole {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        println!("{}", self.format_line(Utc::now(), "INFO", message));
        Ok(())
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        eprintln!("{}", self.format_line(Utc::now(), "ERROR", message));
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerConsole {
            namespace: Some(new_namespace),
            timezone: self.timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerConsole;
    use chrono::{FixedOffset, TimeZone, Utc};

    #[test]
    fn formats_timestamp_in_configured_offset() {
        let logger = LoggerConsole::new(FixedOffset::east_opt(2 * 3600).unwrap());
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap();

        let line = logger.format_line(at, "INFO", "hello");

        assert_eq!(line, "[2024-03-01 12:15:30.000 PM] INFO hello");
    }

    #[test]
    fn formats_namespaced_line() {
        let logger = LoggerConsole {
            namespace: Some("app".to_string()),
            timezone: FixedOffset::east_opt(0).unwrap(),
        };
        let nested = LoggerConsole {
            namespace: Some("app:upload".to_string()),
            ..logger.clone()
        };
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

        assert_eq!(
            nested.format_line(at, "ERROR", "boom"),
            "[2024-03-01 12:00:00.000 AM] ERROR app:upload: boom"
        );
    }
}
