//! Scalar writes: exact copies and the lossy fallback.
//!
//! Lossy conversion first consults a small ordered table of text/integer/bool
//! coercions, then falls back to Rust `as` semantics between numeric kinds.
//! Nothing here is range-checked: integer narrowing wraps and float to
//! integer saturates.

use crate::shape::{Scalar, ScalarMut};

/// Copies `source` into `destination` when both have the same kind.
pub fn assign_exact(source: Scalar<'_>, destination: &mut ScalarMut<'_>) -> bool {
    match (source, destination) {
        (Scalar::Bool(v), ScalarMut::Bool(d)) => **d = v,
        (Scalar::I8(v), ScalarMut::I8(d)) => **d = v,
        (Scalar::I16(v), ScalarMut::I16(d)) => **d = v,
        (Scalar::I32(v), ScalarMut::I32(d)) => **d = v,
        (Scalar::I64(v), ScalarMut::I64(d)) => **d = v,
        (Scalar::I128(v), ScalarMut::I128(d)) => **d = v,
        (Scalar::Isize(v), ScalarMut::Isize(d)) => **d = v,
        (Scalar::U8(v), ScalarMut::U8(d)) => **d = v,
        (Scalar::U16(v), ScalarMut::U16(d)) => **d = v,
        (Scalar::U32(v), ScalarMut::U32(d)) => **d = v,
        (Scalar::U64(v), ScalarMut::U64(d)) => **d = v,
        (Scalar::U128(v), ScalarMut::U128(d)) => **d = v,
        (Scalar::Usize(v), ScalarMut::Usize(d)) => **d = v,
        (Scalar::F32(v), ScalarMut::F32(d)) => **d = v,
        (Scalar::F64(v), ScalarMut::F64(d)) => **d = v,
        (Scalar::Char(v), ScalarMut::Char(d)) => **d = v,
        (Scalar::Str(v), ScalarMut::String(d)) => {
            d.clear();
            d.push_str(v);
        }
        _ => return false,
    }
    true
}

/// Result of consulting the coercion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableOutcome {
    Written,
    /// The pair is in the table but the value did not parse.
    Rejected,
    NotListed,
}

/// Writes a coerced `source` into `destination`. Returns `false` when no
/// coercion applies or parsing fails; the destination is then untouched.
pub fn convert_lossy(source: Scalar<'_>, destination: &mut ScalarMut<'_>) -> bool {
    match convert_listed(source, destination) {
        TableOutcome::Written => true,
        TableOutcome::Rejected => false,
        TableOutcome::NotListed => convert_generic(source, destination),
    }
}

fn convert_listed(source: Scalar<'_>, destination: &mut ScalarMut<'_>) -> TableOutcome {
    let source_kind = source.kind();
    let destination_kind = destination.kind();

    if source_kind.is_signed_integer() {
        if let ScalarMut::String(text) = destination {
            if let Some(value) = signed_value(source) {
                **text = value.to_string();
                return TableOutcome::Written;
            }
        }
        return TableOutcome::NotListed;
    }

    match (source, destination) {
        (Scalar::Str(text), destination) if destination_kind.is_signed_integer() => {
            match text.parse::<i64>() {
                Ok(value) => {
                    write_signed(value, destination);
                    TableOutcome::Written
                }
                Err(_) => TableOutcome::Rejected,
            }
        }
        (Scalar::Str(text), ScalarMut::Bool(flag)) => match parse_bool(text) {
            Some(value) => {
                **flag = value;
                TableOutcome::Written
            }
            None => TableOutcome::Rejected,
        },
        (Scalar::Bool(value), ScalarMut::String(text)) => {
            **text = value.to_string();
            TableOutcome::Written
        }
        _ => TableOutcome::NotListed,
    }
}

/// Boolean spellings accepted from text.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn signed_value(source: Scalar<'_>) -> Option<i128> {
    match source {
        Scalar::I8(v) => Some(i128::from(v)),
        Scalar::I16(v) => Some(i128::from(v)),
        Scalar::I32(v) => Some(i128::from(v)),
        Scalar::I64(v) => Some(i128::from(v)),
        Scalar::I128(v) => Some(v),
        Scalar::Isize(v) => Some(v as i128),
        _ => None,
    }
}

fn write_signed(value: i64, destination: &mut ScalarMut<'_>) {
    match destination {
        ScalarMut::I8(d) => **d = value as i8,
        ScalarMut::I16(d) => **d = value as i16,
        ScalarMut::I32(d) => **d = value as i32,
        ScalarMut::I64(d) => **d = value,
        ScalarMut::I128(d) => **d = i128::from(value),
        ScalarMut::Isize(d) => **d = value as isize,
        _ => {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
}

impl Number {
    fn of(source: Scalar<'_>) -> Option<Self> {
        let number = match source {
            Scalar::I8(_) | Scalar::I16(_) | Scalar::I32(_) | Scalar::I64(_) | Scalar::I128(_)
            | Scalar::Isize(_) => Number::Signed(signed_value(source)?),
            Scalar::U8(v) => Number::Unsigned(u128::from(v)),
            Scalar::U16(v) => Number::Unsigned(u128::from(v)),
            Scalar::U32(v) => Number::Unsigned(u128::from(v)),
            Scalar::U64(v) => Number::Unsigned(u128::from(v)),
            Scalar::U128(v) => Number::Unsigned(v),
            Scalar::Usize(v) => Number::Unsigned(v as u128),
            Scalar::F32(v) => Number::Float(f64::from(v)),
            Scalar::F64(v) => Number::Float(v),
            // A char behaves as its code point.
            Scalar::Char(v) => Number::Unsigned(u128::from(u32::from(v))),
            Scalar::Bool(_) | Scalar::Str(_) => return None,
        };
        Some(number)
    }
}

macro_rules! cast {
    ($number:expr, $ty:ty) => {
        match $number {
            Number::Signed(v) => v as $ty,
            Number::Unsigned(v) => v as $ty,
            Number::Float(v) => v as $ty,
        }
    };
}

fn convert_generic(source: Scalar<'_>, destination: &mut ScalarMut<'_>) -> bool {
    match (source, &mut *destination) {
        (Scalar::Char(v), ScalarMut::String(text)) => {
            **text = v.to_string();
            return true;
        }
        (Scalar::U8(v), ScalarMut::Char(d)) => {
            **d = char::from(v);
            return true;
        }
        _ => {}
    }

    let Some(number) = Number::of(source) else {
        return false;
    };
    match destination {
        ScalarMut::I8(d) => **d = cast!(number, i8),
        ScalarMut::I16(d) => **d = cast!(number, i16),
        ScalarMut::I32(d) => **d = cast!(number, i32),
        ScalarMut::I64(d) => **d = cast!(number, i64),
        ScalarMut::I128(d) => **d = cast!(number, i128),
        ScalarMut::Isize(d) => **d = cast!(number, isize),
        ScalarMut::U8(d) => **d = cast!(number, u8),
        ScalarMut::U16(d) => **d = cast!(number, u16),
        ScalarMut::U32(d) => **d = cast!(number, u32),
        ScalarMut::U64(d) => **d = cast!(number, u64),
        ScalarMut::U128(d) => **d = cast!(number, u128),
        ScalarMut::Usize(d) => **d = cast!(number, usize),
        ScalarMut::F32(d) => **d = cast!(number, f32),
        ScalarMut::F64(d) => **d = cast!(number, f64),
        ScalarMut::Bool(_) | ScalarMut::Char(_) | ScalarMut::String(_) => return false,
    }
    true
}
