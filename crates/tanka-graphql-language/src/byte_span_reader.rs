/// A minimal forward-only cursor over an immutable byte buffer.
///
/// The reader starts *before* the first byte: [`position()`](Self::position)
/// returns `None` until the first [`advance()`](Self::advance) or
/// [`try_read()`](Self::try_read). This lets a caller inspect the leading
/// bytes (e.g. for a byte-order mark) before anything has been consumed.
///
/// Every read hands back either a single byte or a sub-slice of the original
/// buffer; nothing is copied. The only failure mode is running out of input,
/// which is reported through `bool`/`Option` return values.
#[derive(Clone, Debug)]
pub struct ByteSpanReader<'src> {
    span: &'src [u8],

    /// Number of bytes consumed so far. The next unread byte is
    /// `span[consumed]`.
    consumed: usize,
}

impl<'src> ByteSpanReader<'src> {
    pub fn new(span: &'src [u8]) -> Self {
        Self { span, consumed: 0 }
    }

    /// The whole underlying buffer.
    pub fn span(&self) -> &'src [u8] {
        self.span
    }

    /// Length of the underlying buffer in bytes.
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Offset of the most recently consumed byte, or `None` when nothing has
    /// been consumed yet.
    pub fn position(&self) -> Option<usize> {
        self.consumed.checked_sub(1)
    }

    /// Offset of the next unread byte. Equal to [`len()`](Self::len) once the
    /// input is exhausted.
    pub fn offset(&self) -> usize {
        self.consumed
    }

    /// The unread remainder of the buffer.
    pub fn remaining(&self) -> &'src [u8] {
        &self.span[self.consumed..]
    }

    /// Returns `true` when every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.consumed >= self.span.len()
    }

    /// Returns the next unread byte without consuming it.
    pub fn try_peek(&self) -> Option<u8> {
        self.span.get(self.consumed).copied()
    }

    /// Returns the byte `n` positions past the next unread byte without
    /// consuming anything. `try_peek_nth(0)` equals `try_peek()`.
    pub fn try_peek_nth(&self, n: usize) -> Option<u8> {
        self.span.get(self.consumed + n).copied()
    }

    /// Consumes one byte. Returns `false` (without moving) when the input is
    /// already exhausted.
    pub fn advance(&mut self) -> bool {
        self.advance_by(1)
    }

    /// Consumes `count` bytes. Returns `false` (without moving) when fewer
    /// than `count` bytes remain.
    pub fn advance_by(&mut self, count: usize) -> bool {
        if self.span.len() - self.consumed < count {
            return false;
        }
        self.consumed += count;
        true
    }

    /// Returns `true` if the unread input starts with `expected`.
    pub fn is_next(&self, expected: &[u8]) -> bool {
        self.remaining().starts_with(expected)
    }

    /// Consumes `expected` if the unread input starts with it.
    pub fn try_skip_next(&mut self, expected: &[u8]) -> bool {
        if self.is_next(expected) {
            self.consumed += expected.len();
            true
        } else {
            false
        }
    }

    /// Consumes and returns the next byte.
    pub fn try_read(&mut self) -> Option<u8> {
        let byte = self.try_peek()?;
        self.consumed += 1;
        Some(byte)
    }

    /// Consumes the longest run of bytes matching `predicate` and returns it
    /// as a slice of the underlying buffer. The slice is empty when the next
    /// byte does not match (or the input is exhausted).
    pub fn try_read_while_any(
        &mut self,
        predicate: impl Fn(u8) -> bool,
    ) -> &'src [u8] {
        let start = self.consumed;
        let run_len = self.span[start..]
            .iter()
            .take_while(|byte| predicate(**byte))
            .count();
        self.consumed += run_len;
        &self.span[start..self.consumed]
    }

    /// Returns the slice `[start, offset())` of the underlying buffer.
    pub fn slice_from(&self, start: usize) -> &'src [u8] {
        &self.span[start..self.consumed]
    }
}
