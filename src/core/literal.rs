//! Conversion of schema lexical values into field initializer literals.
//!
//! Lexical forms follow XML Schema datatypes: surrounding whitespace is
//! collapsed for every type except `string`, booleans accept `1`/`0`, and
//! floating point values accept `INF`, `-INF` and `NaN`.

use crate::domain::model::{EnumType, Expr, FieldType, FloatKind, IntKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("default value `{text}` is not a valid {ty} literal")]
pub struct InvalidLiteral {
    pub text: String,
    pub ty: String,
}

pub fn convert(lexical: &str, ty: &FieldType) -> Result<Expr, InvalidLiteral> {
    let text = lexical.trim();
    let expr = match ty {
        FieldType::String => Some(Expr::Str {
            value: lexical.to_string(),
        }),
        FieldType::Boolean => parse_bool(text).map(|value| Expr::Bool { value }),
        FieldType::Byte => bounded_int(text, IntKind::Byte, i8::MIN.into(), i8::MAX.into()),
        FieldType::Short => bounded_int(text, IntKind::Short, i16::MIN.into(), i16::MAX.into()),
        FieldType::Int => bounded_int(text, IntKind::Int, i32::MIN.into(), i32::MAX.into()),
        FieldType::Long => bounded_int(text, IntKind::Long, i64::MIN, i64::MAX),
        FieldType::Integer => big_int(text),
        FieldType::Float => float(text, FloatKind::Float),
        FieldType::Double => float(text, FloatKind::Double),
        FieldType::Decimal => decimal(text).map(|text| Expr::Decimal { text }),
        FieldType::Enum(enum_type) => enum_constant(text, enum_type),
    };

    expr.ok_or_else(|| InvalidLiteral {
        text: lexical.to_string(),
        ty: ty.to_string(),
    })
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn bounded_int(text: &str, kind: IntKind, min: i64, max: i64) -> Option<Expr> {
    let (_, digits) = split_sign(text);
    if digits.is_empty() || !all_digits(digits) {
        return None;
    }
    let value: i64 = text.parse().ok()?;
    if value < min || value > max {
        return None;
    }
    Some(Expr::Int {
        ty: kind,
        digits: value.to_string(),
    })
}

fn big_int(text: &str) -> Option<Expr> {
    let (negative, digits) = split_sign(text);
    if digits.is_empty() || !all_digits(digits) {
        return None;
    }
    let magnitude = digits.trim_start_matches('0');
    let digits = match (negative, magnitude.is_empty()) {
        (_, true) => "0".to_string(),
        (true, false) => format!("-{}", magnitude),
        (false, false) => magnitude.to_string(),
    };
    Some(Expr::Int {
        ty: IntKind::Big,
        digits,
    })
}

/// Canonical decimal text: no `+`, no redundant zeros, at least one integer digit.
fn decimal(text: &str) -> Option<String> {
    let (negative, body) = split_sign(text);
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let frac_part = frac_part.trim_end_matches('0');
    let is_zero = int_part == "0" && frac_part.is_empty();

    let mut canonical = String::new();
    if negative && !is_zero {
        canonical.push('-');
    }
    canonical.push_str(int_part);
    if !frac_part.is_empty() {
        canonical.push('.');
        canonical.push_str(frac_part);
    }
    Some(canonical)
}

fn float(text: &str, kind: FloatKind) -> Option<Expr> {
    let special = match text {
        "INF" | "+INF" => Some("INF"),
        "-INF" => Some("-INF"),
        "NaN" => Some("NaN"),
        _ => None,
    };
    if let Some(special) = special {
        return Some(Expr::Float {
            ty: kind,
            text: special.to_string(),
        });
    }

    let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
        Some(idx) => (&text[..idx], Some(&text[idx + 1..])),
        None => (text, None),
    };
    decimal(mantissa)?;
    if let Some(exponent) = exponent {
        let (_, digits) = split_sign(exponent);
        if digits.is_empty() || !all_digits(digits) {
            return None;
        }
    }

    let text = match kind {
        FloatKind::Float => render_float(f64::from(text.parse::<f32>().ok()?), |v| format!("{:?}", v as f32)),
        FloatKind::Double => render_float(text.parse::<f64>().ok()?, |v| format!("{:?}", v)),
    };
    Some(Expr::Float { ty: kind, text })
}

fn render_float(value: f64, render: impl Fn(f64) -> String) -> String {
    if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        render(value)
    }
}

fn enum_constant(text: &str, enum_type: &EnumType) -> Option<Expr> {
    enum_type
        .constants
        .iter()
        .find(|c| c.value == text)
        .map(|c| Expr::EnumConstant {
            enum_name: enum_type.name.clone(),
            constant: c.constant.clone(),
        })
}
