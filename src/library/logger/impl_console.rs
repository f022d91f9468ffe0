use crate::library::logger::interface::Logger;
use chrono::Utc;
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

    fn format_line(&self, timestamp: &str, message: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("[{}] {}: {}", timestamp, namespace, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }
}

impl Logger for LoggerConsole {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error>> {
        let utc_now = Utc::now();
        let local_time = utc_now.with_timezone(&self.timezone);
        let formatted = local_time.format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        println!("{}", self.format_line(&formatted, message));
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger> {
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
    use super::*;

    #[test]
    fn test_nested_namespaces_are_colon_joined() {
        let logger = LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap());
        let nested = LoggerConsole {
            namespace: Some("anomaly_evaluation:grid_search".to_string()),
            ..logger.clone()
        };

        assert_eq!(logger.format_line("t", "hello"), "[t] hello");
        assert_eq!(
            nested.format_line("t", "gamma=0.1, nu=0.01"),
            "[t] anomaly_evaluation:grid_search: gamma=0.1, nu=0.01"
        );
        assert!(logger.with_namespace("a").info("message").is_ok());
    }
}
