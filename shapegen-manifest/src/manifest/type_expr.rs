//! Field type expressions.
//!
//! `Option<T>` and `*T` wrap nullable, a primitive name maps to a primitive,
//! a declared record name refers to that record, and anything else is an
//! opaque host type that renders as the unknown type.

use shapegen_ir::{Primitive, TypeDescriptor};

const OPTION_OPEN: &str = "Option<";

/// Parse a type expression.
///
/// `is_record` decides whether a bare name refers to a declared record.
/// Returns the reason when the expression is malformed.
pub fn parse_type_expr(
    expr: &str,
    is_record: &dyn Fn(&str) -> bool,
) -> std::result::Result<TypeDescriptor, &'static str> {
    let expr = expr.trim();
    if expr.is_empty() {
        return Err("type cannot be empty");
    }

    if let Some(rest) = expr.strip_prefix('*') {
        if rest.trim().is_empty() {
            return Err("'*' must be followed by a type");
        }
        return parse_type_expr(rest, is_record).map(TypeDescriptor::nullable);
    }

    if let Some(rest) = expr.strip_prefix(OPTION_OPEN) {
        let Some(inner) = rest.strip_suffix('>') else {
            return Err("unclosed 'Option<'");
        };
        if inner.trim().is_empty() {
            return Err("'Option<>' needs an inner type");
        }
        return parse_type_expr(inner, is_record).map(TypeDescriptor::nullable);
    }

    if let Some(primitive) = Primitive::from_name(expr) {
        return Ok(TypeDescriptor::primitive(primitive));
    }
    if is_record(expr) {
        return Ok(TypeDescriptor::record(expr));
    }
    Ok(TypeDescriptor::opaque(expr))
}
