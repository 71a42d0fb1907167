//! Symbol tokens and the tables that resolve them.
//!
//! Ion records field names, annotations and symbol values either as text or as
//! an integer id into the symbol table in effect at that point of the
//! document. A [`SymbolToken`] keeps whichever the cursor handed over; the
//! [`SymbolTable`] captured next to it turns ids back into text on demand.

use alloc::{collections::BTreeMap, string::String, sync::Arc, vec::Vec};
use core::fmt;

/// Shared handle to the symbol table that was active when an element was read.
///
/// Elements only hold the handle; the table itself is immutable and is never
/// changed through it.
pub type SymbolTableRef = Arc<SymbolTable>;

/// The Ion 1.0 system symbols, ids 1 through 9.
pub const SYSTEM_SYMBOLS: [&str; 9] = [
    "$ion",
    "$ion_1_0",
    "$ion_symbol_table",
    "name",
    "version",
    "imports",
    "symbols",
    "max_id",
    "$ion_shared_symbol_table",
];

/// A field name, annotation or symbol value: text, a local id, or both.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, Eq)]
pub struct SymbolToken {
    text: Option<String>,
    sid: Option<usize>,
}

impl SymbolToken {
    #[must_use]
    pub fn new(text: Option<String>, sid: Option<usize>) -> Self {
        Self { text, sid }
    }

    /// A token known only by its text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            sid: None,
        }
    }

    /// A token known only by its local symbol id.
    #[must_use]
    pub fn sid(sid: usize) -> Self {
        Self {
            text: None,
            sid: Some(sid),
        }
    }

    #[must_use]
    pub fn text_value(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn local_sid(&self) -> Option<usize> {
        self.sid
    }
}

impl PartialEq for SymbolToken {
    fn eq(&self, other: &Self) -> bool {
        match (&self.text, &other.text) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.sid == other.sid,
            _ => false,
        }
    }
}

impl From<&str> for SymbolToken {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for SymbolToken {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl fmt::Display for SymbolToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.text, self.sid) {
            (Some(text), _) => crate::text::write_symbol_text(text, f),
            (None, Some(sid)) => write!(f, "${sid}"),
            (None, None) => f.write_str("$0"),
        }
    }
}

/// Maps local symbol ids to text.
///
/// Ids start at 1. Id 0 is reserved for "unknown text" and never resolves.
/// Ids 1 through 9 are always the [`SYSTEM_SYMBOLS`]; only the local symbols
/// after them are stored. A local slot can be present without text, e.g. when
/// an imported table was unavailable to the cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    locals: Vec<Option<String>>,
    ids: BTreeMap<String, usize>,
}

impl SymbolTable {
    /// A table holding only the Ion 1.0 system symbols. Does not allocate.
    #[must_use]
    pub const fn system() -> Self {
        Self {
            locals: Vec::new(),
            ids: BTreeMap::new(),
        }
    }

    /// The system symbols followed by `locals`, which take ids from 10 upward.
    #[must_use]
    pub fn with_local_symbols<I, S>(locals: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let mut table = Self::system();
        for text in locals {
            let text: Option<String> = text.map(Into::into);
            let sid = table.max_id() + 1;
            if let Some(text) = &text {
                if system_sid(text).is_none() {
                    table.ids.entry(text.clone()).or_insert(sid);
                }
            }
            table.locals.push(text);
        }
        table
    }

    /// The largest id in the table.
    #[must_use]
    pub fn max_id(&self) -> usize {
        SYSTEM_SYMBOLS.len() + self.locals.len()
    }

    #[must_use]
    pub fn text_for(&self, sid: usize) -> Option<&str> {
        let index = sid.checked_sub(1)?;
        match index.checked_sub(SYSTEM_SYMBOLS.len()) {
            None => Some(SYSTEM_SYMBOLS[index]),
            Some(local) => self.locals.get(local)?.as_deref(),
        }
    }

    /// The lowest id assigned to `text`.
    #[must_use]
    pub fn sid_for(&self, text: &str) -> Option<usize> {
        system_sid(text).or_else(|| self.ids.get(text).copied())
    }

    /// The text of `token`, looked up by id when the token carries none.
    #[must_use]
    pub fn resolve<'a>(&'a self, token: &'a SymbolToken) -> Option<&'a str> {
        match token.text_value() {
            Some(text) => Some(text),
            None => self.text_for(token.local_sid()?),
        }
    }
}

fn system_sid(text: &str) -> Option<usize> {
    SYSTEM_SYMBOLS.iter().position(|&s| s == text).map(|index| index + 1)
}
