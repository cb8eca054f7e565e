use crate::core::extractor::{self, ExtractionPolicy, MISSING_FIELD};
use crate::core::injector;
use crate::core::reporter::Reporter;
use crate::core::resolver;
use crate::core::scanner;
use crate::domain::diagnostic::Diagnostic;
use crate::domain::model::{ClassModel, CustomizationId, Expr, FieldModel};
use crate::domain::ports::DiagnosticSink;
use crate::utils::error::{AttrInitError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassOptions {
    /// The pass is dormant unless this is set.
    pub enabled: bool,
    pub policy: ExtractionPolicy,
}

impl PassOptions {
    pub fn enabled(policy: ExtractionPolicy) -> Self {
        Self {
            enabled: true,
            policy,
        }
    }
}

/// Terminal state of a field that carried at least one recognized customization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FieldOutcome {
    Injected { expr: Expr },
    Rejected { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub class: String,
    pub field: String,
    #[serde(flatten)]
    pub outcome: FieldOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub enabled: bool,
    pub classes_visited: usize,
    pub fields_visited: usize,
    /// Fields with a recognized customization, in visiting order.
    pub fields: Vec<FieldReport>,
    /// Customizations the host should mark as consumed.
    pub acknowledged: BTreeSet<CustomizationId>,
    pub warnings: usize,
    pub fatals: usize,
}

impl PassReport {
    pub fn is_success(&self) -> bool {
        self.fatals == 0
    }

    pub fn injected(&self) -> impl Iterator<Item = (&FieldReport, &Expr)> {
        self.fields.iter().filter_map(|report| match &report.outcome {
            FieldOutcome::Injected { expr } => Some((report, expr)),
            FieldOutcome::Rejected { .. } => None,
        })
    }

    /// Turns a run with fatal diagnostics into an error.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AttrInitError::GenerationFailed { fatals: self.fatals })
        }
    }
}

/// A field that would be processed, as listed by [`AttrInitPass::survey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedField {
    pub class: String,
    pub field: String,
    pub customizations: usize,
}

pub struct AttrInitPass {
    options: PassOptions,
}

impl AttrInitPass {
    pub fn new(options: PassOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PassOptions {
        &self.options
    }

    /// Visits every field of every class once.
    ///
    /// A fatal diagnostic ends processing of its field only; siblings are
    /// still visited and the run reports failure through
    /// [`PassReport::is_success`]. Only a broken fatal channel aborts the run.
    pub fn run<S: DiagnosticSink + ?Sized>(&self, classes: &mut [ClassModel], sink: &mut S) -> Result<PassReport> {
        let mut report = PassReport {
            enabled: self.options.enabled,
            ..PassReport::default()
        };

        if !self.options.enabled {
            tracing::debug!("Pass is dormant; pass -{} to enable it", scanner::OPTION_NAME);
            return Ok(report);
        }

        tracing::debug!("Running initializer pass over {} classes ({} policy)", classes.len(), self.options.policy);

        let mut reporter = Reporter::new(sink);
        for class in classes.iter_mut() {
            report.classes_visited += 1;
            for field in class.fields.iter_mut() {
                report.fields_visited += 1;
                if let Some(outcome) = self.process_field(&class.name, field, &mut reporter, &mut report.acknowledged)? {
                    report.fields.push(FieldReport {
                        class: class.name.clone(),
                        field: field.name.clone(),
                        outcome,
                    });
                }
            }
        }

        report.warnings = reporter.warnings();
        report.fatals = reporter.fatals();
        if reporter.dropped_warnings() > 0 {
            tracing::debug!("{} warnings could not be delivered", reporter.dropped_warnings());
        }

        tracing::info!(
            "Initializer pass finished: {} fields visited, {} injected, {} warnings, {} errors",
            report.fields_visited,
            report.injected().count(),
            report.warnings,
            report.fatals
        );

        Ok(report)
    }

    /// Lists fields carrying a recognized customization without touching the model.
    pub fn survey(classes: &[ClassModel]) -> Vec<PlannedField> {
        classes
            .iter()
            .flat_map(|class| {
                class.fields.iter().filter_map(move |field| {
                    let customizations = scanner::scan(field).len();
                    (customizations > 0).then(|| PlannedField {
                        class: class.name.clone(),
                        field: field.name.clone(),
                        customizations,
                    })
                })
            })
            .collect()
    }

    fn process_field<S: DiagnosticSink + ?Sized>(
        &self,
        class: &str,
        field: &mut FieldModel,
        reporter: &mut Reporter<'_, S>,
        acknowledged: &mut BTreeSet<CustomizationId>,
    ) -> Result<Option<FieldOutcome>> {
        let (extracted, location) = {
            let matches = scanner::scan(field);
            let Some(resolution) = resolver::resolve(class, &field.name, matches, reporter) else {
                return Ok(None);
            };
            acknowledged.extend(resolution.acknowledged);
            let location = field
                .location
                .clone()
                .or_else(|| resolution.canonical.location.clone());
            (extractor::extract(self.options.policy, field, resolution.canonical), location)
        };

        let expr = match extracted {
            Ok(expr) => expr,
            Err(diagnostic) => return reject(class, field, diagnostic, reporter),
        };

        let previous = match field.declaration.as_mut() {
            Some(declaration) => injector::inject(declaration, expr.clone()),
            None => return reject(class, field, Diagnostic::fatal(MISSING_FIELD, location), reporter),
        };

        if let Some(previous) = previous {
            if previous != expr {
                tracing::debug!("{}.{}: replaced initializer {} with {}", class, field.name, previous, expr);
            }
        }
        tracing::debug!("{}.{}: initializer set to {}", class, field.name, expr);

        Ok(Some(FieldOutcome::Injected { expr }))
    }
}

fn reject<S: DiagnosticSink + ?Sized>(
    class: &str,
    field: &FieldModel,
    diagnostic: Diagnostic,
    reporter: &mut Reporter<'_, S>,
) -> Result<Option<FieldOutcome>> {
    tracing::debug!("{}.{}: {}", class, field.name, diagnostic.message);
    let message = diagnostic.message.clone();
    reporter.fatal(diagnostic)?;
    Ok(Some(FieldOutcome::Rejected { message }))
}
