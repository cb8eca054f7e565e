use crate::domain::diagnostic::Diagnostic;
use crate::domain::model::SourceLocation;
use crate::domain::ports::DiagnosticSink;
use crate::utils::error::Result;

/// Wraps the host's diagnostic channel and counts what got through.
///
/// Warnings are best-effort: a failing sink never aborts the pass. Fatal
/// delivery failures propagate to the caller.
pub struct Reporter<'a, S: DiagnosticSink + ?Sized> {
    sink: &'a mut S,
    warnings: usize,
    fatals: usize,
    dropped_warnings: usize,
}

impl<'a, S: DiagnosticSink + ?Sized> Reporter<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self {
            sink,
            warnings: 0,
            fatals: 0,
            dropped_warnings: 0,
        }
    }

    pub fn warn(&mut self, message: impl Into<String>, location: Option<SourceLocation>) {
        let diagnostic = Diagnostic::warning(message, location);
        match self.sink.warning(&diagnostic) {
            Ok(()) => self.warnings += 1,
            Err(e) => {
                self.dropped_warnings += 1;
                tracing::debug!("Dropped warning '{}': {}", diagnostic.message, e);
            }
        }
    }

    pub fn fatal(&mut self, diagnostic: Diagnostic) -> Result<()> {
        debug_assert!(diagnostic.is_fatal());
        self.sink.fatal(&diagnostic)?;
        self.fatals += 1;
        Ok(())
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn fatals(&self) -> usize {
        self.fatals
    }

    pub fn dropped_warnings(&self) -> usize {
        self.dropped_warnings
    }
}
