use crate::domain::diagnostic::{Diagnostic, Severity};
use crate::domain::ports::DiagnosticSink;
use crate::utils::error::Result;

/// Keeps every diagnostic in memory, in delivery order.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn fatals(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Fatal)
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn warning(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        self.diagnostics.push(diagnostic.clone());
        Ok(())
    }

    fn fatal(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        self.diagnostics.push(diagnostic.clone());
        Ok(())
    }
}

/// Forwards diagnostics to `tracing`, compiler style.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warning(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        match &diagnostic.location {
            Some(location) => tracing::warn!(%location, "⚠️ {}", diagnostic.message),
            None => tracing::warn!("⚠️ {}", diagnostic.message),
        }
        Ok(())
    }

    fn fatal(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        match &diagnostic.location {
            Some(location) => tracing::error!(%location, "❌ {}", diagnostic.message),
            None => tracing::error!("❌ {}", diagnostic.message),
        }
        Ok(())
    }
}
