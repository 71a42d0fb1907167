//! Builds owned [`Element`] trees from a [`Cursor`].
//!
//! The materializer reads exactly one value: the one the cursor is sitting
//! on. Scalars are decoded with the matching `read_*` call; containers are
//! stepped into, every child is materialized in turn, and the container is
//! stepped out of again, leaving the cursor right after it. Nothing is ever
//! re-read, so the cursor only moves forward.
use alloc::vec::Vec;

use tracing::trace;

use crate::{Cursor, Element, IonType, ReaderError, ReaderOptions, Struct, Value};

type Result<T, C> = core::result::Result<T, ReaderError<<C as Cursor>::Error>>;

/// Materializes the value the cursor is positioned on.
///
/// The returned element carries the cursor's annotations for the value and
/// the symbol table in effect at its position. On return the cursor sits
/// after the value; call [`Cursor::advance`] to move on.
///
/// # Errors
///
/// Cursor failures are returned as [`ReaderError::Cursor`]; the partially
/// built tree is dropped and the cursor is left wherever the failure
/// happened. A cursor that is not positioned on a value, or that reports a
/// non-null value of kind `null`, yields [`ReaderError::ContractViolation`].
///
/// # Examples
///
/// ```
/// use ion_tree::{Cursor, Element, ElementCursor, Value, materialize};
///
/// let doc = [Element::from(Value::List(vec![1_i64.into(), "a".into()]))];
/// let mut cursor = ElementCursor::new(&doc);
/// cursor.advance().unwrap();
/// let list = materialize(&mut cursor).unwrap();
/// assert_eq!(list, doc[0]);
/// assert_eq!(cursor.advance().unwrap(), None);
/// ```
pub fn materialize<C: Cursor>(cursor: &mut C) -> Result<Element, C> {
    materialize_with(cursor, &ReaderOptions::default())
}

/// [`materialize`] with explicit options.
///
/// # Errors
///
/// As [`materialize`], plus [`ReaderError::DepthLimitExceeded`] when the
/// value nests deeper than [`ReaderOptions::max_depth`].
pub fn materialize_with<C: Cursor>(cursor: &mut C, options: &ReaderOptions) -> Result<Element, C> {
    let depth = cursor.depth();
    read_element(cursor, depth, options)
}

fn read_element<C: Cursor>(cursor: &mut C, depth: usize, options: &ReaderOptions) -> Result<Element, C> {
    let Some(ion_type) = cursor.ion_type() else {
        return Err(ReaderError::ContractViolation(
            "cursor is not positioned on a value",
        ));
    };
    let annotations = cursor.annotations().map_err(ReaderError::Cursor)?;
    // captured before reading: the value must see the table it was encoded against
    let symbol_table = cursor.symbol_table();
    let value = if cursor.is_null() {
        Value::Null(ion_type)
    } else {
        read_value(cursor, ion_type, depth, options)?
    };
    Ok(Element::new(annotations, value, symbol_table))
}

fn read_value<C: Cursor>(
    cursor: &mut C,
    ion_type: IonType,
    depth: usize,
    options: &ReaderOptions,
) -> Result<Value, C> {
    let value = match ion_type {
        IonType::Null => {
            return Err(ReaderError::ContractViolation(
                "cursor reported a non-null value of kind null",
            ));
        }
        IonType::Bool => Value::Bool(cursor.read_bool().map_err(ReaderError::Cursor)?),
        IonType::Int => Value::Int(cursor.read_int().map_err(ReaderError::Cursor)?),
        IonType::Float => Value::Float(cursor.read_float().map_err(ReaderError::Cursor)?),
        IonType::Decimal => Value::Decimal(cursor.read_decimal().map_err(ReaderError::Cursor)?),
        IonType::Timestamp => {
            Value::Timestamp(cursor.read_timestamp().map_err(ReaderError::Cursor)?)
        }
        IonType::String => Value::String(cursor.read_string().map_err(ReaderError::Cursor)?),
        IonType::Symbol => Value::Symbol(cursor.read_symbol().map_err(ReaderError::Cursor)?),
        IonType::Blob => Value::Blob(cursor.read_blob().map_err(ReaderError::Cursor)?),
        IonType::Clob => Value::Clob(cursor.read_clob().map_err(ReaderError::Cursor)?),
        IonType::Struct => {
            let mut fields = Struct::new();
            for_each_child(cursor, ion_type, depth, options, |cursor, depth| {
                let name = cursor.field_name().map_err(ReaderError::Cursor)?;
                fields.push(name, read_element(cursor, depth, options)?);
                Ok(())
            })?;
            Value::Struct(fields)
        }
        IonType::List | IonType::SExp => {
            let mut children = Vec::new();
            for_each_child(cursor, ion_type, depth, options, |cursor, depth| {
                children.push(read_element(cursor, depth, options)?);
                Ok(())
            })?;
            if ion_type == IonType::List {
                Value::List(children)
            } else {
                Value::SExp(children)
            }
        }
    };
    Ok(value)
}

/// Steps into the current container, calls `f` once per child with the cursor
/// on that child, then steps back out.
fn for_each_child<C, F>(
    cursor: &mut C,
    ion_type: IonType,
    depth: usize,
    options: &ReaderOptions,
    mut f: F,
) -> Result<(), C>
where
    C: Cursor,
    F: FnMut(&mut C, usize) -> Result<(), C>,
{
    let child_depth = depth + 1;
    if let Some(limit) = options.max_depth.filter(|&limit| child_depth > limit) {
        return Err(ReaderError::DepthLimitExceeded { limit });
    }

    trace!(%ion_type, depth, "step in");
    cursor.step_in().map_err(ReaderError::Cursor)?;
    while cursor.advance().map_err(ReaderError::Cursor)?.is_some() {
        f(cursor, child_depth)?;
    }
    cursor.step_out().map_err(ReaderError::Cursor)?;
    trace!(%ion_type, depth, "step out");
    Ok(())
}
