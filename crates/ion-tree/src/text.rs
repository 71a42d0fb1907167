//! Ion text rendering for [`Element`]'s `Display` impl.
use core::fmt::{self, Write};

use base64::Engine as _;

use crate::{Element, IonType, Value};

const KEYWORDS: [&str; 4] = ["null", "true", "false", "nan"];

/// Writes `element` as compact Ion text.
pub(crate) fn write_element<W: Write>(element: &Element, f: &mut W) -> fmt::Result {
    for annotation in element.annotations() {
        write!(f, "{annotation}::")?;
    }
    match element.value() {
        Value::Null(IonType::Null) => f.write_str("null"),
        Value::Null(ion_type) => write!(f, "null.{ion_type}"),
        Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        Value::Int(i) => write!(f, "{i}"),
        Value::Float(n) => write_float(*n, f),
        Value::Decimal(d) => {
            let (coefficient, scale) = d.as_bigint_and_exponent();
            write!(f, "{coefficient}d{}", -i128::from(scale))
        }
        Value::Timestamp(t) => {
            f.write_str(&t.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
        }
        Value::String(s) => {
            f.write_char('"')?;
            write_escaped(s, '"', f)?;
            f.write_char('"')
        }
        Value::Symbol(token) => write!(f, "{token}"),
        Value::Blob(bytes) => {
            let encoded = base64::engine::general_purpose::STANDARD.encode(bytes.as_slice());
            write!(f, "{{{{{encoded}}}}}")
        }
        Value::Clob(bytes) => {
            f.write_str("{{\"")?;
            for &b in bytes.iter() {
                match b {
                    b'"' => f.write_str("\\\"")?,
                    b'\\' => f.write_str("\\\\")?,
                    0x20..=0x7E => f.write_char(char::from(b))?,
                    _ => write!(f, "\\x{b:02X}")?,
                }
            }
            f.write_str("\"}}")
        }
        Value::List(children) => {
            f.write_char('[')?;
            write_separated(children.iter(), ",", f)?;
            f.write_char(']')
        }
        Value::SExp(children) => {
            f.write_char('(')?;
            write_separated(children.iter(), " ", f)?;
            f.write_char(')')
        }
        Value::Struct(fields) => {
            f.write_char('{')?;
            let mut first = true;
            for (name, value) in fields {
                if !first {
                    f.write_char(',')?;
                }
                first = false;
                write!(f, "{name}:")?;
                write_element(value, f)?;
            }
            f.write_char('}')
        }
    }
}

fn write_separated<'a, W: Write>(
    children: impl Iterator<Item = &'a Element>,
    separator: &str,
    f: &mut W,
) -> fmt::Result {
    let mut first = true;
    for child in children {
        if !first {
            f.write_str(separator)?;
        }
        first = false;
        write_element(child, f)?;
    }
    Ok(())
}

fn write_float<W: Write>(n: f64, f: &mut W) -> fmt::Result {
    if n.is_nan() {
        f.write_str("nan")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "+inf" } else { "-inf" })
    } else {
        write!(f, "{n:e}")
    }
}

/// Writes symbol text bare when it reads back as an identifier, quoted
/// otherwise.
pub(crate) fn write_symbol_text<W: Write>(text: &str, f: &mut W) -> fmt::Result {
    if is_identifier(text) {
        f.write_str(text)
    } else {
        f.write_char('\'')?;
        write_escaped(text, '\'', f)?;
        f.write_char('\'')
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return false;
    }
    // `$10` would read back as a symbol id
    let symbol_id = first == '$' && text.len() > 1 && text[1..].bytes().all(|b| b.is_ascii_digit());
    !symbol_id && !KEYWORDS.contains(&text)
}

fn write_escaped<W: Write>(src: &str, quote: char, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c if c.is_ascii_control() => write!(f, "\\x{:02X}", c as u32)?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}
