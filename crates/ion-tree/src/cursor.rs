use alloc::vec::Vec;

use bigdecimal::BigDecimal;
use bstr::BString;
use num_bigint::BigInt;

use crate::{IonType, SymbolTableRef, SymbolToken, Timestamp};

/// A forward-only pull cursor over an Ion document.
///
/// The cursor walks one level of the document at a time. [`Cursor::advance`]
/// moves to the next value at the current level and reports its kind, or
/// `None` at the end of the container (or stream). [`Cursor::step_in`] and
/// [`Cursor::step_out`] move between levels; every `step_in` is matched by
/// exactly one `step_out`, which leaves the cursor after the container so that
/// the next `advance` reports the following sibling.
///
/// The `read_*` methods decode the current value. Each is only valid while the
/// cursor sits on a non-null value of the matching kind; a cursor reports
/// misuse through its own `Error` type.
///
/// A cursor is a single-threaded, single-pass object. Nothing here rewinds.
pub trait Cursor {
    /// Failures raised while decoding or navigating, typically malformed input.
    type Error: core::error::Error + 'static;

    fn advance(&mut self) -> Result<Option<IonType>, Self::Error>;

    /// The kind of the current value, or `None` when not positioned on one.
    fn ion_type(&self) -> Option<IonType>;

    /// Whether the current value is a (typed) null.
    fn is_null(&self) -> bool;

    fn annotations(&self) -> Result<Vec<SymbolToken>, Self::Error>;

    /// The field name of the current value. Only valid inside a struct.
    fn field_name(&self) -> Result<SymbolToken, Self::Error>;

    /// The symbol table in effect at the current position.
    fn symbol_table(&self) -> SymbolTableRef;

    /// Container nesting depth; 0 at the top level.
    fn depth(&self) -> usize;

    fn step_in(&mut self) -> Result<(), Self::Error>;
    fn step_out(&mut self) -> Result<(), Self::Error>;

    fn read_bool(&mut self) -> Result<bool, Self::Error>;
    fn read_int(&mut self) -> Result<BigInt, Self::Error>;
    fn read_float(&mut self) -> Result<f64, Self::Error>;
    fn read_decimal(&mut self) -> Result<BigDecimal, Self::Error>;
    fn read_timestamp(&mut self) -> Result<Timestamp, Self::Error>;
    fn read_string(&mut self) -> Result<alloc::string::String, Self::Error>;
    fn read_symbol(&mut self) -> Result<SymbolToken, Self::Error>;
    fn read_blob(&mut self) -> Result<BString, Self::Error>;
    fn read_clob(&mut self) -> Result<BString, Self::Error>;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Error = C::Error;

    fn advance(&mut self) -> Result<Option<IonType>, Self::Error> {
        (**self).advance()
    }

    fn ion_type(&self) -> Option<IonType> {
        (**self).ion_type()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn annotations(&self) -> Result<Vec<SymbolToken>, Self::Error> {
        (**self).annotations()
    }

    fn field_name(&self) -> Result<SymbolToken, Self::Error> {
        (**self).field_name()
    }

    fn symbol_table(&self) -> SymbolTableRef {
        (**self).symbol_table()
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }

    fn step_in(&mut self) -> Result<(), Self::Error> {
        (**self).step_in()
    }

    fn step_out(&mut self) -> Result<(), Self::Error> {
        (**self).step_out()
    }

    fn read_bool(&mut self) -> Result<bool, Self::Error> {
        (**self).read_bool()
    }

    fn read_int(&mut self) -> Result<BigInt, Self::Error> {
        (**self).read_int()
    }

    fn read_float(&mut self) -> Result<f64, Self::Error> {
        (**self).read_float()
    }

    fn read_decimal(&mut self) -> Result<BigDecimal, Self::Error> {
        (**self).read_decimal()
    }

    fn read_timestamp(&mut self) -> Result<Timestamp, Self::Error> {
        (**self).read_timestamp()
    }

    fn read_string(&mut self) -> Result<alloc::string::String, Self::Error> {
        (**self).read_string()
    }

    fn read_symbol(&mut self) -> Result<SymbolToken, Self::Error> {
        (**self).read_symbol()
    }

    fn read_blob(&mut self) -> Result<BString, Self::Error> {
        (**self).read_blob()
    }

    fn read_clob(&mut self) -> Result<BString, Self::Error> {
        (**self).read_clob()
    }
}
