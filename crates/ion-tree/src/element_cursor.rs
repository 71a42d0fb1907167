//! A [`Cursor`] over elements that are already in memory.
//!
//! Useful for re-reading a materialized tree through the same pull interface
//! a decoding cursor offers, e.g. to feed it to code written against
//! [`Cursor`], or to copy a tree with [`crate::materialize`].
use alloc::{string::String, sync::Arc, vec, vec::Vec};

use bigdecimal::BigDecimal;
use bstr::BString;
use num_bigint::BigInt;

use crate::{
    Cursor, CursorError, Element, IonType, SymbolTable, SymbolTableRef, SymbolToken, Timestamp,
    Value,
};

#[derive(Debug, Clone, Copy)]
enum Children<'a> {
    Sequence(&'a [Element]),
    Fields(&'a [(SymbolToken, Element)]),
}

impl<'a> Children<'a> {
    fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Fields(fields) => fields.len(),
        }
    }

    fn get(&self, index: usize) -> Option<&'a Element> {
        match self {
            Self::Sequence(items) => items.get(index),
            Self::Fields(fields) => fields.get(index).map(|(_, value)| value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Before,
    At(usize),
    After,
}

#[derive(Debug, Clone)]
struct Frame<'a> {
    children: Children<'a>,
    position: Position,
}

impl<'a> Frame<'a> {
    fn new(children: Children<'a>) -> Self {
        Self {
            children,
            position: Position::Before,
        }
    }

    fn current(&self) -> Option<&'a Element> {
        match self.position {
            Position::At(index) => self.children.get(index),
            Position::Before | Position::After => None,
        }
    }
}

/// Walks a slice of top-level elements.
///
/// The symbol table reported for a value is the one the element was
/// materialized with. When the cursor is not on a value it reports the table
/// given at construction.
///
/// ```
/// use ion_tree::{Cursor, Element, ElementCursor, IonType, Value};
///
/// let doc = [Element::from(Value::List(vec![true.into()]))];
/// let mut cursor = ElementCursor::new(&doc);
/// assert_eq!(cursor.advance().unwrap(), Some(IonType::List));
/// cursor.step_in().unwrap();
/// assert_eq!(cursor.advance().unwrap(), Some(IonType::Bool));
/// assert!(cursor.read_bool().unwrap());
/// assert_eq!(cursor.advance().unwrap(), None);
/// cursor.step_out().unwrap();
/// assert_eq!(cursor.advance().unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct ElementCursor<'a> {
    frames: Vec<Frame<'a>>,
    symbol_table: SymbolTableRef,
}

impl<'a> ElementCursor<'a> {
    #[must_use]
    pub fn new(elements: &'a [Element]) -> Self {
        Self::with_symbol_table(elements, Arc::new(SymbolTable::system()))
    }

    #[must_use]
    pub fn with_symbol_table(elements: &'a [Element], symbol_table: SymbolTableRef) -> Self {
        Self {
            frames: vec![Frame::new(Children::Sequence(elements))],
            symbol_table,
        }
    }

    fn frame(&self) -> &Frame<'a> {
        // the top-level frame is never popped
        &self.frames[self.frames.len() - 1]
    }

    fn current(&self) -> Option<&'a Element> {
        self.frame().current()
    }

    fn positioned(&self) -> Result<&'a Element, CursorError> {
        self.current().ok_or(CursorError::NotPositioned)
    }

    /// The current value, checked to be a non-null `expected`.
    fn scalar(&self, expected: IonType) -> Result<&'a Value, CursorError> {
        let element = self.positioned()?;
        let found = element.ion_type();
        if element.is_null() {
            Err(CursorError::NullValue(found))
        } else if found == expected {
            Ok(element.value())
        } else {
            Err(CursorError::TypeMismatch { expected, found })
        }
    }
}

impl Cursor for ElementCursor<'_> {
    type Error = CursorError;

    fn advance(&mut self) -> Result<Option<IonType>, CursorError> {
        let last = self.frames.len() - 1;
        let frame = &mut self.frames[last];
        let next = match frame.position {
            Position::Before => 0,
            Position::At(index) => index + 1,
            Position::After => return Ok(None),
        };
        if let Some(element) = frame.children.get(next) {
            frame.position = Position::At(next);
            Ok(Some(element.ion_type()))
        } else {
            debug_assert!(next >= frame.children.len());
            frame.position = Position::After;
            Ok(None)
        }
    }

    fn ion_type(&self) -> Option<IonType> {
        self.current().map(Element::ion_type)
    }

    fn is_null(&self) -> bool {
        self.current().is_some_and(Element::is_null)
    }

    fn annotations(&self) -> Result<Vec<SymbolToken>, CursorError> {
        Ok(self.positioned()?.annotations().to_vec())
    }

    fn field_name(&self) -> Result<SymbolToken, CursorError> {
        let frame = self.frame();
        match (frame.children, frame.position) {
            (Children::Fields(fields), Position::At(index)) => fields
                .get(index)
                .map(|(name, _)| name.clone())
                .ok_or(CursorError::NotPositioned),
            (Children::Fields(_), _) => Err(CursorError::NotPositioned),
            (Children::Sequence(_), _) => Err(CursorError::NotInStruct),
        }
    }

    fn symbol_table(&self) -> SymbolTableRef {
        self.current().map_or_else(
            || Arc::clone(&self.symbol_table),
            |element| Arc::clone(element.symbol_table()),
        )
    }

    fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    fn step_in(&mut self) -> Result<(), CursorError> {
        let element = self.positioned()?;
        let children = match element.value() {
            Value::List(items) | Value::SExp(items) => Children::Sequence(items),
            Value::Struct(fields) => Children::Fields(fields.fields()),
            Value::Null(ion_type) => return Err(CursorError::NullValue(*ion_type)),
            other => return Err(CursorError::NotAContainer(other.ion_type())),
        };
        self.frames.push(Frame::new(children));
        Ok(())
    }

    fn step_out(&mut self) -> Result<(), CursorError> {
        if self.frames.len() == 1 {
            return Err(CursorError::AtTopLevel);
        }
        self.frames.pop();
        Ok(())
    }

    fn read_bool(&mut self) -> Result<bool, CursorError> {
        match self.scalar(IonType::Bool)? {
            Value::Bool(b) => Ok(*b),
            _ => unreachable!("checked by scalar()"),
        }
    }

    fn read_int(&mut self) -> Result<BigInt, CursorError> {
        match self.scalar(IonType::Int)? {
            Value::Int(i) => Ok(i.clone()),
            _ => unreachable!("checked by scalar()"),
        }
    }

    fn read_float(&mut self) -> Result<f64, CursorError> {
        match self.scalar(IonType::Float)? {
            Value::Float(f) => Ok(*f),
            _ => unreachable!("checked by scalar()"),
        }
    }

    fn read_decimal(&mut self) -> Result<BigDecimal, CursorError> {
        match self.scalar(IonType::Decimal)? {
            Value::Decimal(d) => Ok(d.clone()),
            _ => unreachable!("checked by scalar()"),
        }
    }

    fn read_timestamp(&mut self) -> Result<Timestamp, CursorError> {
        match self.scalar(IonType::Timestamp)? {
            Value::Timestamp(t) => Ok(*t),
            _ => unreachable!("checked by scalar()"),
        }
    }

    fn read_string(&mut self) -> Result<String, CursorError> {
        match self.scalar(IonType::String)? {
            Value::String(s) => Ok(s.clone()),
            _ => unreachable!("checked by scalar()"),
        }
    }

    fn read_symbol(&mut self) -> Result<SymbolToken, CursorError> {
        match self.scalar(IonType::Symbol)? {
            Value::Symbol(s) => Ok(s.clone()),
            _ => unreachable!("checked by scalar()"),
        }
    }

    fn read_blob(&mut self) -> Result<BString, CursorError> {
        match self.scalar(IonType::Blob)? {
            Value::Blob(b) => Ok(b.clone()),
            _ => unreachable!("checked by scalar()"),
        }
    }

    fn read_clob(&mut self) -> Result<BString, CursorError> {
        match self.scalar(IonType::Clob)? {
            Value::Clob(b) => Ok(b.clone()),
            _ => unreachable!("checked by scalar()"),
        }
    }
}
