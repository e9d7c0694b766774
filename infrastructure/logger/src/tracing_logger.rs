use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards storefront log lines to the installed `tracing` subscriber.
///
/// Every event is emitted under the `storefront` target and tagged with the
/// component that produced it, so `RUST_LOG=storefront=debug` covers the whole
/// core while the `component` field tells cart, checkout and soil apart.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("core")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "storefront", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "storefront", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "storefront", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "storefront", component = self.component, "{}", message);
    }
}
