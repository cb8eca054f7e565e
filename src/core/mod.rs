pub mod extractor;
pub mod injector;
pub mod literal;
pub mod pass;
pub mod reporter;
pub mod resolver;
pub mod scanner;

pub use crate::domain::diagnostic::{Diagnostic, Severity};
pub use crate::domain::model::{ClassModel, Customization, Expr, FieldModel};
pub use crate::domain::ports::DiagnosticSink;
pub use crate::utils::error::Result;
