//! Pull-style iteration over the top-level values of a document.
use tracing::{debug, trace, warn};

use crate::{Cursor, Element, ReaderError, ReaderOptions, materialize::materialize_with};

/// Lookahead state of an [`ElementReader`].
#[derive(Debug)]
enum Lookahead {
    /// Nothing buffered; the next value has not been read yet.
    Fresh,
    /// One value has been read ahead and is waiting to be returned.
    Peeked(Element),
    /// The cursor reported the end of the stream. It is not touched again.
    Eof,
}

/// Materializes the top-level values of a cursor one at a time.
///
/// [`ElementReader::has_next`] reads at most one value ahead and keeps it
/// until [`ElementReader::next_element`] hands it out, so asking repeatedly
/// never skips or duplicates a value and the cursor advances exactly once per
/// top-level value.
///
/// The reader also implements [`Iterator`], yielding `Result`s and ending with
/// `None` at the end of the stream.
///
/// # Examples
///
/// ```
/// use ion_tree::{Element, ElementCursor, ElementReader};
///
/// let doc = [Element::from(1_i64), Element::from("a"), Element::from(false)];
/// let mut reader = ElementReader::new(ElementCursor::new(&doc));
///
/// assert!(reader.has_next().unwrap());
/// assert!(reader.has_next().unwrap());
/// assert_eq!(reader.next_element().unwrap().as_i64(), Some(1));
/// assert_eq!(reader.next_element().unwrap().as_string(), Some("a"));
/// assert_eq!(reader.next_element().unwrap().as_bool(), Some(false));
/// assert!(!reader.has_next().unwrap());
/// assert!(reader.next_element().is_err());
/// ```
#[derive(Debug)]
pub struct ElementReader<C: Cursor> {
    cursor: C,
    options: ReaderOptions,
    /// Depth of the values this reader hands out.
    depth: usize,
    state: Lookahead,
}

impl<C: Cursor> ElementReader<C> {
    /// Wraps a cursor positioned before the first top-level value.
    ///
    /// A cursor that has already stepped into a container works too: the
    /// reader then hands out the values at that depth.
    #[must_use]
    pub fn new(cursor: C) -> Self {
        Self::with_options(cursor, ReaderOptions::default())
    }

    /// As [`ElementReader::new`], materializing with `options`.
    #[must_use]
    pub fn with_options(cursor: C, options: ReaderOptions) -> Self {
        Self {
            depth: cursor.depth(),
            cursor,
            options,
            state: Lookahead::Fresh,
        }
    }

    /// Whether another top-level value remains.
    ///
    /// May read the next value ahead; calling this any number of times before
    /// [`ElementReader::next_element`] reads it only once.
    ///
    /// # Errors
    ///
    /// Fails if reading ahead fails; see [`crate::materialize`]. After a
    /// failure between values the reader stays usable. After a failure inside
    /// a container every further read fails with [`ReaderError::Stranded`].
    pub fn has_next(&mut self) -> Result<bool, ReaderError<C::Error>> {
        match self.state {
            Lookahead::Eof => Ok(false),
            Lookahead::Peeked(_) => Ok(true),
            Lookahead::Fresh => match self.fetch()? {
                Some(element) => {
                    self.state = Lookahead::Peeked(element);
                    Ok(true)
                }
                None => Ok(false),
            },
        }
    }

    /// Returns the next top-level value.
    ///
    /// # Errors
    ///
    /// [`ReaderError::EndOfIteration`] when no values remain, otherwise any
    /// error from materializing the value.
    pub fn next_element(&mut self) -> Result<Element, ReaderError<C::Error>> {
        match core::mem::replace(&mut self.state, Lookahead::Fresh) {
            Lookahead::Eof => {
                self.state = Lookahead::Eof;
                Err(ReaderError::EndOfIteration)
            }
            Lookahead::Peeked(element) => Ok(element),
            Lookahead::Fresh => self.fetch()?.ok_or(ReaderError::EndOfIteration),
        }
    }

    /// The next top-level value, without consuming it.
    ///
    /// # Errors
    ///
    /// As [`ElementReader::has_next`].
    pub fn peek(&mut self) -> Result<Option<&Element>, ReaderError<C::Error>> {
        self.has_next()?;
        match &self.state {
            Lookahead::Peeked(element) => Ok(Some(element)),
            Lookahead::Fresh | Lookahead::Eof => Ok(None),
        }
    }

    /// Removing values from the source is not supported.
    ///
    /// # Errors
    ///
    /// Always [`ReaderError::Unsupported`].
    pub fn remove(&mut self) -> Result<(), ReaderError<C::Error>> {
        Err(ReaderError::Unsupported("remove"))
    }

    /// The wrapped cursor.
    #[must_use]
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Returns the cursor. A value read ahead by `has_next` is dropped.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.cursor
    }

    /// Advances the cursor and materializes the value it lands on, moving to
    /// `Eof` when there is none. Only called in the `Fresh` state.
    fn fetch(&mut self) -> Result<Option<Element>, ReaderError<C::Error>> {
        debug_assert!(matches!(self.state, Lookahead::Fresh));
        let depth = self.cursor.depth();
        if depth != self.depth {
            warn!(depth, expected = self.depth, "cursor left inside a container");
            return Err(ReaderError::Stranded {
                depth,
                expected: self.depth,
            });
        }
        let Some(ion_type) = self.cursor.advance().map_err(ReaderError::Cursor)? else {
            debug!("end of stream");
            self.state = Lookahead::Eof;
            return Ok(None);
        };
        trace!(%ion_type, "reading top-level value");
        materialize_with(&mut self.cursor, &self.options).map(Some)
    }
}

impl<C: Cursor> Iterator for ElementReader<C> {
    type Item = Result<Element, ReaderError<C::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_element() {
            Err(ReaderError::EndOfIteration) => None,
            other => Some(other),
        }
    }
}
