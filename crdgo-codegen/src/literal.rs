//! Scalar literal encoding.

use crdgo_ir::{Literal, ScalarKind, ScalarValue};

use crate::{builder::Expr, imports::ImportScope};

const MATH: &str = "math";

/// Encode a scalar as a Go literal.
///
/// Named scalar types are converted explicitly, e.g.
/// `v1.ResourceScope("Namespaced")`.
pub fn encode_literal(value: &ScalarValue, scope: &mut ImportScope<'_>) -> Expr {
    let primitive = primitive_literal(value, scope);
    match value.name() {
        Some(name) => Expr::call(scope.qualify(&name.package, &name.name), vec![primitive]),
        None => primitive,
    }
}

/// Encode a scalar as a literal of its underlying primitive type.
///
/// Kinds other than `int`, `float64`, `bool` and `string` are not the
/// default type of an untyped constant, so they carry a conversion.
pub fn primitive_literal(value: &ScalarValue, scope: &mut ImportScope<'_>) -> Expr {
    let kind = value.kind();
    match value.literal() {
        Literal::Bool(b) => Expr::raw(b.to_string()),
        Literal::String(s) => Expr::raw(quote(s)),
        Literal::Int(i) => match kind {
            ScalarKind::Int => Expr::raw(i.to_string()),
            _ => convert(kind, Expr::raw(i.to_string())),
        },
        Literal::Uint(u) => convert(kind, Expr::raw(format!("{:#x}", u))),
        Literal::Float(f) => match kind {
            ScalarKind::Float32 => convert(kind, float_literal(f64::from(*f as f32), true, scope)),
            _ => float_literal(*f, false, scope),
        },
    }
}

fn convert(kind: ScalarKind, expr: Expr) -> Expr {
    Expr::call(kind.as_str(), vec![expr])
}

fn float_literal(f: f64, single: bool, scope: &mut ImportScope<'_>) -> Expr {
    if f.is_nan() {
        return Expr::call(scope.qualify(MATH, "NaN"), vec![]);
    }
    if f.is_infinite() {
        let sign = if f > 0.0 { "1" } else { "-1" };
        return Expr::call(scope.qualify(MATH, "Inf"), vec![Expr::raw(sign)]);
    }
    if f == 0.0 && f.is_sign_negative() {
        return Expr::call(
            scope.qualify(MATH, "Copysign"),
            vec![Expr::raw("0"), Expr::raw("-1")],
        );
    }
    // Debug output always has a '.' or an exponent, so Go reads it as a float.
    if single {
        Expr::raw(format!("{:?}", f as f32))
    } else {
        Expr::raw(format!("{:?}", f))
    }
}

/// Quote a string the way Go's `strconv.Quote` does for printable text.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\u{0b}' => out.push_str("\\v"),
            c if (c as u32) < 0x80 && c.is_control() => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() || c == '\u{feff}' => {
                let code = c as u32;
                if code > 0xffff {
                    out.push_str(&format!("\\U{:08x}", code));
                } else {
                    out.push_str(&format!("\\u{:04x}", code));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
