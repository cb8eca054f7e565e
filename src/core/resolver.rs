use crate::core::reporter::Reporter;
use crate::core::scanner::Match;
use crate::domain::model::{Customization, CustomizationId};
use crate::domain::ports::DiagnosticSink;

pub const EXTRA_CUSTOMIZATION: &str = "ignoring extra initializer customization";

/// The customization that wins for a field, plus every match it consumed.
#[derive(Debug)]
pub struct Resolution<'a> {
    pub canonical: &'a Customization,
    pub acknowledged: Vec<CustomizationId>,
}

/// Picks the first match and warns about the rest.
///
/// Every match is acknowledged, including the discarded ones, so the host
/// does not later report them as unconsumed.
pub fn resolve<'a, S: DiagnosticSink + ?Sized>(
    class: &str,
    field: &str,
    matches: Vec<Match<'a>>,
    reporter: &mut Reporter<'_, S>,
) -> Option<Resolution<'a>> {
    let (first, extras) = matches.split_first()?;

    let acknowledged = matches
        .iter()
        .map(|m| CustomizationId {
            class: class.to_string(),
            field: field.to_string(),
            ordinal: m.ordinal,
        })
        .collect();

    for extra in extras {
        reporter.warn(EXTRA_CUSTOMIZATION, extra.customization.location.clone());
    }

    Some(Resolution {
        canonical: first.customization,
        acknowledged,
    })
}
