//! Ion value payloads.
//!
//! [`Value`] is the tagged payload of an [`Element`]: one case per Ion kind,
//! scalars carrying their decoded value, containers carrying their children
//! and typed nulls carrying only the kind they stand in for.
use alloc::{string::String, vec::Vec};

use bigdecimal::BigDecimal;
use bstr::BString;
use chrono::{DateTime, FixedOffset};
use num_bigint::BigInt;

use crate::{Element, IonType, SymbolToken};

/// An Ion timestamp with its UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

/// The payload of an [`Element`].
///
/// # Examples
///
/// ```
/// use ion_tree::{IonType, Value};
///
/// let empty = Value::List(vec![]);
/// let null = Value::Null(IonType::List);
/// assert_eq!(empty.ion_type(), null.ion_type());
/// assert_ne!(empty, null);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug)]
pub enum Value {
    /// A null of the given kind, e.g. `null.list`. `Null(IonType::Null)` is
    /// the untyped `null`.
    Null(IonType),
    Bool(bool),
    Int(BigInt),
    Float(f64),
    Decimal(BigDecimal),
    Timestamp(Timestamp),
    String(String),
    Symbol(SymbolToken),
    Blob(BString),
    Clob(BString),
    Struct(Struct),
    List(Vec<Element>),
    SExp(Vec<Element>),
}

impl Value {
    /// The kind of this value. Typed nulls report their declared kind.
    #[must_use]
    pub fn ion_type(&self) -> IonType {
        match self {
            Self::Null(ion_type) => *ion_type,
            Self::Bool(_) => IonType::Bool,
            Self::Int(_) => IonType::Int,
            Self::Float(_) => IonType::Float,
            Self::Decimal(_) => IonType::Decimal,
            Self::Timestamp(_) => IonType::Timestamp,
            Self::String(_) => IonType::String,
            Self::Symbol(_) => IonType::Symbol,
            Self::Blob(_) => IonType::Blob,
            Self::Clob(_) => IonType::Clob,
            Self::Struct(_) => IonType::Struct,
            Self::List(_) => IonType::List,
            Self::SExp(_) => IonType::SExp,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null(_))
    }
}

/// Equality is on the Ion data model, not on the numbers represented.
///
/// Decimals must agree in coefficient and exponent (`1.0` is not `1.00`),
/// timestamps in instant and offset, and floats bit for bit (`-0e0` is not
/// `0e0`, and a NaN equals the same NaN).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null(a), Self::Null(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Decimal(a), Self::Decimal(b)) => {
                a.as_bigint_and_exponent() == b.as_bigint_and_exponent()
            }
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b && a.offset() == b.offset(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Blob(a), Self::Blob(b)) | (Self::Clob(a), Self::Clob(b)) => a == b,
            (Self::Struct(a), Self::Struct(b)) => a == b,
            (Self::List(a), Self::List(b)) | (Self::SExp(a), Self::SExp(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(BigInt::from(v))
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<BigDecimal> for Value {
    fn from(v: BigDecimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Self::Timestamp(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<SymbolToken> for Value {
    fn from(v: SymbolToken) -> Self {
        Self::Symbol(v)
    }
}

impl From<Struct> for Value {
    fn from(v: Struct) -> Self {
        Self::Struct(v)
    }
}

/// The fields of a non-null struct, in the order they were read.
///
/// Field names may repeat; every occurrence is kept.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Struct {
    fields: Vec<(SymbolToken, Element)>,
}

impl Struct {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field. Existing fields with the same name are kept.
    pub fn push(&mut self, name: impl Into<SymbolToken>, value: impl Into<Element>) {
        self.fields.push((name.into(), value.into()));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, (SymbolToken, Element)> {
        self.fields.iter()
    }

    /// The first field whose name has the text `name`.
    ///
    /// Names recorded only by symbol id never match; resolve them through
    /// [`Element::field_text`] instead.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Element> {
        self.fields
            .iter()
            .find(|(field, _)| field.text_value() == Some(name))
            .map(|(_, value)| value)
    }

    /// Every field whose name has the text `name`, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.fields
            .iter()
            .filter(move |(field, _)| field.text_value() == Some(name))
            .map(|(_, value)| value)
    }

    pub(crate) fn fields(&self) -> &[(SymbolToken, Element)] {
        &self.fields
    }
}

impl<'a> IntoIterator for &'a Struct {
    type Item = &'a (SymbolToken, Element);
    type IntoIter = core::slice::Iter<'a, (SymbolToken, Element)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Struct
where
    K: Into<SymbolToken>,
    V: Into<Element>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
