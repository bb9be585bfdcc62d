// Diagnostic sink for asset failures

use log::error;

/// Fire-and-forget error sink
pub trait Diagnostics {
    fn log_error(&self, tag: &str, message: &str);
}

/// Forwards diagnostics to the `log` facade, using the tag as log target
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn log_error(&self, tag: &str, message: &str) {
        error!(target: tag, "{}", message);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn log_error(&self, tag: &str, message: &str) {
        (**self).log_error(tag, message)
    }
}
