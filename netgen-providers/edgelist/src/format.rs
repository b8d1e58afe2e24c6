//! Record layout options for edge-list files.

/// Separator between the two columns of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    /// A single `,`.
    Comma,
    /// A single tab character.
    Tab,
    /// Any run of whitespace.
    Whitespace,
}

impl Delimiter {
    /// Single-byte separator handed to the CSV reader, `None` for runs of
    /// whitespace.
    pub(crate) const fn byte(self) -> Option<u8> {
        match self {
            Self::Comma => Some(b','),
            Self::Tab => Some(b'\t'),
            Self::Whitespace => None,
        }
    }
}

/// Layout of an edge-list file.
///
/// # Examples
/// ```
/// use netgen_providers_edgelist::{Delimiter, EdgeListFormat};
///
/// let format = EdgeListFormat::new(Delimiter::Comma).with_header(true);
/// assert_eq!(format, EdgeListFormat::csv_with_header());
/// assert_eq!(EdgeListFormat::snap().comment_prefix(), Some(b'#'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeListFormat {
    delimiter: Delimiter,
    header: bool,
    comment_prefix: Option<u8>,
}

impl EdgeListFormat {
    /// Creates a header-less format without comment lines.
    #[must_use]
    pub const fn new(delimiter: Delimiter) -> Self {
        Self {
            delimiter,
            header: false,
            comment_prefix: None,
        }
    }

    /// Comma-separated records after a single header row.
    #[must_use]
    pub const fn csv_with_header() -> Self {
        Self::new(Delimiter::Comma).with_header(true)
    }

    /// Tab-separated records with `#` comment lines, as in SNAP datasets.
    #[must_use]
    pub const fn snap() -> Self {
        Self::new(Delimiter::Tab).with_comment_prefix(Some(b'#'))
    }

    /// Whitespace-separated records with `#` comment lines.
    #[must_use]
    pub const fn whitespace() -> Self {
        Self::new(Delimiter::Whitespace).with_comment_prefix(Some(b'#'))
    }

    /// Sets whether the first record is a header to skip.
    #[must_use]
    pub const fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Sets the ASCII byte that starts a comment line.
    #[must_use]
    pub const fn with_comment_prefix(mut self, prefix: Option<u8>) -> Self {
        self.comment_prefix = prefix;
        self
    }

    /// Returns the column delimiter.
    #[must_use]
    pub const fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Returns whether a header row is expected.
    #[must_use]
    pub const fn header(&self) -> bool {
        self.header
    }

    /// Returns the comment prefix, if any.
    #[must_use]
    pub const fn comment_prefix(&self) -> Option<u8> {
        self.comment_prefix
    }

    pub(crate) fn is_comment(&self, line: &str) -> bool {
        self.comment_prefix
            .is_some_and(|prefix| line.as_bytes().first() == Some(&prefix))
    }
}
