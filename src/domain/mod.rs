// Domain layer: the generated-class model, diagnostics and the sink port.

pub mod diagnostic;
pub mod model;
pub mod ports;
