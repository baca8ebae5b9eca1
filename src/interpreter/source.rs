use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

/// A character stream consumed by the lexer.
///
/// `next_char` returns `None` once the input is exhausted and keeps returning
/// `None` afterwards.
pub trait Source {
    /// Returns the next character, or `None` at end of input.
    fn next_char(&mut self) -> Option<char>;
}

/// An in-memory source backed by a string.
///
/// # Example
/// ```
/// use currenscript::interpreter::source::{Source, StringSource};
///
/// let mut source = StringSource::new("ab");
///
/// assert_eq!(source.next_char(), Some('a'));
/// assert_eq!(source.next_char(), Some('b'));
/// assert_eq!(source.next_char(), None);
/// ```
pub struct StringSource {
    chars: std::vec::IntoIter<char>,
}

impl StringSource {
    /// Creates a source over a copy of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect::<Vec<_>>().into_iter(), }
    }
}

impl Source for StringSource {
    fn next_char(&mut self) -> Option<char> {
        self.chars.next()
    }
}

/// A source over the contents of a file.
///
/// The whole file is read and decoded as UTF-8 when the source is opened, and
/// the file handle is closed before `open` returns. Malformed UTF-8, including
/// a multi-byte sequence cut off at the end of the file, is an open error.
///
/// # Example
/// ```no_run
/// use currenscript::interpreter::source::{FileSource, Source};
///
/// let mut source = FileSource::open("program.cur").unwrap();
/// while let Some(c) = source.next_char() {
///     print!("{c}");
/// }
/// ```
pub struct FileSource {
    chars: StringSource,
}

impl FileSource {
    /// Opens the file at `path` and decodes its contents.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the file cannot be opened or read,
    /// and an [`io::ErrorKind::InvalidData`] error if it is not valid UTF-8.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        Ok(Self { chars: StringSource::new(&text), })
    }
}

impl Source for FileSource {
    fn next_char(&mut self) -> Option<char> {
        self.chars.next_char()
    }
}
