use log::{info, warn};

/// Thin scoped wrapper over the `log` facade used by workflow code.
pub struct RunLog {
    scope: &'static str,
}

impl RunLog {
    pub fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.scope, message);
    }

    pub fn record_warning(&self, message: &str) {
        warn!("[{}] {}", self.scope, message);
    }
}
