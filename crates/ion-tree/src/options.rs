/// Configuration for materializing elements.
///
/// # Examples
///
/// ```rust
/// use ion_tree::{ElementCursor, ElementReader, ReaderOptions};
///
/// let options = ReaderOptions { max_depth: Some(64) };
/// let reader = ElementReader::with_options(ElementCursor::new(&[]), options);
/// ```
///
/// # Default
///
/// No limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Maximum container nesting the materializer will descend into.
    ///
    /// A top-level scalar is at depth 0 and the children of a top-level list
    /// are at depth 1. Stepping into a container whose children would sit
    /// deeper than this fails with [`crate::ReaderError::DepthLimitExceeded`].
    /// Materialization recurses once per level, so untrusted input should set
    /// a limit.
    ///
    /// # Default
    ///
    /// `None` (unlimited)
    pub max_depth: Option<usize>,
}
