//! The materialized tree node.
//!
//! An [`Element`] is a [`Value`] plus the annotations attached to it and the
//! symbol table that was in effect where it was read. Elements are immutable:
//! everything is fixed when the element is constructed, and the accessors
//! below only ever hand out shared references.
use alloc::{string::String, sync::Arc, vec::Vec};
use core::{fmt, iter::FusedIterator, slice};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{IonType, Struct, SymbolTable, SymbolTableRef, SymbolToken, Timestamp, Value};

/// A fully owned Ion value with its annotations and symbol table.
///
/// # Examples
///
/// ```
/// use ion_tree::{Element, IonType, Value};
///
/// let e = Element::from("hello").with_annotations(["greeting"]);
/// assert_eq!(e.as_string(), Some("hello"));
/// assert!(e.has_annotation("greeting"));
///
/// let null = Element::from(Value::Null(IonType::String));
/// assert_eq!(null.as_string(), None);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug)]
pub struct Element {
    annotations: Vec<SymbolToken>,
    value: Value,
    #[cfg_attr(feature = "serde", serde(skip))]
    symbol_table: SymbolTableRef,
}

impl Element {
    #[must_use]
    pub fn new(annotations: Vec<SymbolToken>, value: Value, symbol_table: SymbolTableRef) -> Self {
        Self {
            annotations,
            value,
            symbol_table,
        }
    }

    /// Replaces the annotation list while the element is still being built.
    #[must_use]
    pub fn with_annotations<I, A>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<SymbolToken>,
    {
        self.annotations = annotations.into_iter().map(Into::into).collect();
        self
    }

    /// A copy of this element with no annotations. Children keep theirs.
    #[must_use]
    pub fn without_annotations(&self) -> Self {
        Self {
            annotations: Vec::new(),
            value: self.value.clone(),
            symbol_table: Arc::clone(&self.symbol_table),
        }
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[must_use]
    pub fn annotations(&self) -> &[SymbolToken] {
        &self.annotations
    }

    #[must_use]
    pub fn symbol_table(&self) -> &SymbolTableRef {
        &self.symbol_table
    }

    #[must_use]
    pub fn ion_type(&self) -> IonType {
        self.value.ion_type()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Whether any annotation resolves to `text`.
    #[must_use]
    pub fn has_annotation(&self, text: &str) -> bool {
        self.annotations
            .iter()
            .any(|a| self.symbol_table.resolve(a) == Some(text))
    }

    /// Resolves a field name, annotation or symbol through this element's
    /// symbol table.
    #[must_use]
    pub fn field_text<'a>(&'a self, token: &'a SymbolToken) -> Option<&'a str> {
        self.symbol_table.resolve(token)
    }

    /// Iterates over the contents of this element.
    ///
    /// A non-null list, sexp or struct yields its children in order (struct
    /// field values only). Anything else, typed nulls included, yields the
    /// element itself once.
    ///
    /// ```
    /// use ion_tree::Element;
    ///
    /// let scalar = Element::from("a");
    /// let mut it = scalar.as_iter();
    /// assert_eq!(it.next().and_then(Element::as_string), Some("a"));
    /// assert!(it.next().is_none());
    /// ```
    #[must_use]
    pub fn as_iter(&self) -> Contents<'_> {
        let inner = match &self.value {
            Value::List(children) | Value::SExp(children) => ContentsInner::Sequence(children.iter()),
            Value::Struct(fields) => ContentsInner::Fields(fields.fields().iter()),
            _ => ContentsInner::Single(Some(self)),
        };
        Contents { inner }
    }

    // ─── safe accessors ───────────────────────────────────────────────────
    //
    // Each returns `None` unless the element has the requested kind and is
    // not null.

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&BigInt> {
        match &self.value {
            Value::Int(i) => Some(i),
            _ => None,
        }
    }

    /// The integer value, if it fits in an `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        i64::try_from(self.as_int()?).ok()
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self.value {
            Value::Float(f) => Some(f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_decimal(&self) -> Option<&BigDecimal> {
        match &self.value {
            Value::Decimal(d) => Some(d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        match &self.value {
            Value::Timestamp(t) => Some(t),
            _ => None,
        }
    }

    /// The text of a string. Symbols are not strings; see [`Element::as_text`].
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match &self.value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_symbol(&self) -> Option<&SymbolToken> {
        match &self.value {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// The text of a string or symbol. Symbols whose text is unknown to the
    /// element's symbol table yield `None`.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            Value::String(s) => Some(s),
            Value::Symbol(s) => self.symbol_table.resolve(s),
            _ => None,
        }
    }

    /// The bytes of a blob or clob.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &self.value {
            Value::Blob(b) | Value::Clob(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    /// The children of a list or sexp.
    #[must_use]
    pub fn child_values(&self) -> Option<&[Element]> {
        match &self.value {
            Value::List(children) | Value::SExp(children) => Some(children),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_struct(&self) -> Option<&Struct> {
        match &self.value {
            Value::Struct(fields) => Some(fields),
            _ => None,
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.annotations == other.annotations && self.value == other.value
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Self::new(Vec::new(), value, Arc::new(SymbolTable::system()))
    }
}

macro_rules! element_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Element {
                fn from(v: $ty) -> Self {
                    Self::from(Value::from(v))
                }
            }
        )*
    };
}

element_from!(bool, i64, BigInt, f64, BigDecimal, Timestamp, &str, String, SymbolToken, Struct);

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::text::write_element(self, f)
    }
}

/// Iterator returned by [`Element::as_iter`].
#[derive(Clone, Debug)]
pub struct Contents<'a> {
    inner: ContentsInner<'a>,
}

#[derive(Clone, Debug)]
enum ContentsInner<'a> {
    Sequence(slice::Iter<'a, Element>),
    Fields(slice::Iter<'a, (SymbolToken, Element)>),
    Single(Option<&'a Element>),
}

impl<'a> Iterator for Contents<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ContentsInner::Sequence(it) => it.next(),
            ContentsInner::Fields(it) => it.next().map(|(_, value)| value),
            ContentsInner::Single(slot) => slot.take(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match &self.inner {
            ContentsInner::Sequence(it) => it.len(),
            ContentsInner::Fields(it) => it.len(),
            ContentsInner::Single(slot) => usize::from(slot.is_some()),
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for Contents<'_> {}

impl FusedIterator for Contents<'_> {}
