//! Materializes Ion values from a forward-only token cursor into owned
//! element trees.
//!
//! A [`Cursor`] walks an encoded Ion document one token at a time. This crate
//! turns the value under the cursor into an [`Element`] with
//! [`materialize`], and wraps a cursor in an [`ElementReader`] that hands out
//! the document's top-level values one by one.
//!
//! ```
//! use ion_tree::{Element, ElementCursor, ElementReader, Struct, Value};
//!
//! let mut fields = Struct::new();
//! fields.push("a", 1_i64);
//! fields.push("a", 2_i64);
//! let doc = [Element::from(fields), Element::from("b")];
//!
//! let values: Vec<Element> = ElementReader::new(ElementCursor::new(&doc))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(values, doc);
//! assert_eq!(values[0].to_string(), "{a:1,a:2}");
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod element;
mod element_cursor;
mod error;
mod ion_type;
mod materialize;
mod options;
mod reader;
mod symbol;
mod text;
mod value;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use element::{Contents, Element};
pub use element_cursor::ElementCursor;
pub use error::{CursorError, ReaderError};
pub use ion_type::IonType;
pub use materialize::{materialize, materialize_with};
pub use options::ReaderOptions;
pub use reader::ElementReader;
pub use symbol::{SYSTEM_SYMBOLS, SymbolTable, SymbolTableRef, SymbolToken};
pub use value::{Struct, Timestamp, Value};
