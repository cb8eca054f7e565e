use crate::domain::diagnostic::Diagnostic;
use crate::utils::error::Result;

/// The host's error-reporting channel.
///
/// Either method may fail; the reporter decides which failures matter.
pub trait DiagnosticSink {
    fn warning(&mut self, diagnostic: &Diagnostic) -> Result<()>;
    fn fatal(&mut self, diagnostic: &Diagnostic) -> Result<()>;
}

