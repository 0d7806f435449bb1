use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Adapter wiring the domain `Logger` port onto the `tracing` facade.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "basket_service", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "basket_service", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "basket_service", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "basket_service", "{}", message);
    }
}
