use std::sync::Arc;

pub trait Logger {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error>>;
    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger>;
}
