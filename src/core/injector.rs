use crate::domain::model::{Expr, FieldDeclaration};

/// Sets the field initializer, returning whatever it replaced.
pub fn inject(declaration: &mut FieldDeclaration, expr: Expr) -> Option<Expr> {
    declaration.initializer.replace(expr)
}
