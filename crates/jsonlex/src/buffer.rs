//! Refillable scan buffer backing the lexer.

use std::io::Read;

use tracing::debug;

use crate::error::LexError;

/// Growable byte buffer presenting the source's bytes to the state machine.
///
/// The bytes of an in-progress token are always contiguous in `storage`,
/// starting at `token_start`. Refilling moves those bytes to the front of the
/// buffer (growing it when they would leave no room for fresh input), so a
/// token may be arbitrarily longer than the initial capacity.
#[derive(Debug)]
pub(crate) struct ScanBuffer {
    storage: Vec<u8>,
    read_pos: usize,
    limit: usize,
    token_start: Option<usize>,
    eof: bool,
}

impl ScanBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity.max(1)],
            read_pos: 0,
            limit: 0,
            token_start: None,
            eof: false,
        }
    }

    /// The next unconsumed byte, if any is buffered.
    pub(crate) fn peek(&self) -> Option<u8> {
        (self.read_pos < self.limit).then(|| self.storage[self.read_pos])
    }

    pub(crate) fn advance(&mut self) {
        debug_assert!(self.read_pos < self.limit);
        self.read_pos += 1;
    }

    pub(crate) fn read_pos(&self) -> usize {
        self.read_pos
    }

    /// True once the source has reported end-of-stream.
    pub(crate) fn is_eof(&self) -> bool {
        self.eof
    }

    /// Records the current read position as the start of a new token.
    pub(crate) fn mark_token_start(&mut self) {
        self.token_start = Some(self.read_pos);
    }

    pub(crate) fn clear_token(&mut self) {
        self.token_start = None;
    }

    pub(crate) fn token_start(&self) -> Option<usize> {
        self.token_start
    }

    pub(crate) fn byte_at(&self, index: usize) -> u8 {
        self.storage[index]
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &[u8] {
        &self.storage[start..end]
    }

    pub(crate) fn slice_mut(&mut self, start: usize, end: usize) -> &mut [u8] {
        &mut self.storage[start..end]
    }

    /// Makes room and reads more bytes from the source.
    ///
    /// With a token in progress, its already-consumed bytes
    /// `storage[token_start..read_pos]` are preserved at the front of the
    /// buffer, and the buffer doubles when that prefix reaches `token_start`
    /// (at which point reusing the buffer would leave half of it or less for
    /// fresh input). Idle, the whole buffer is recycled.
    ///
    /// The free region is filled until full or the source reports
    /// end-of-stream; a short read is not end-of-stream, so the source is
    /// called again.
    pub(crate) fn refill<R: Read>(&mut self, source: &mut R) -> Result<(), LexError> {
        match self.token_start {
            Some(start) => {
                let prefix_len = self.read_pos - start;
                if prefix_len >= start {
                    let new_capacity = 2 * self.storage.len();
                    debug!(
                        old = self.storage.len(),
                        new = new_capacity,
                        "growing scan buffer"
                    );
                    let mut grown = vec![0; new_capacity];
                    grown[..prefix_len].copy_from_slice(&self.storage[start..self.read_pos]);
                    self.storage = grown;
                } else {
                    self.storage.copy_within(start..self.read_pos, 0);
                }
                self.token_start = Some(0);
                self.read_pos = prefix_len;
            }
            None => {
                self.read_pos = 0;
            }
        }

        let mut filled = self.read_pos;
        while filled < self.storage.len() {
            let n = source.read(&mut self.storage[filled..])?;
            if n == 0 {
                self.eof = true;
                break;
            }
            filled += n;
        }
        self.limit = filled;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ScanBuffer;

    #[test]
    fn fills_from_source_and_flags_eof() {
        let mut source: &[u8] = b"abc";
        let mut buf = ScanBuffer::with_capacity(8);
        buf.refill(&mut source).unwrap();

        assert!(buf.is_eof());
        assert_eq!(buf.peek(), Some(b'a'));
        buf.advance();
        buf.advance();
        buf.advance();
        assert_eq!(buf.peek(), None);
    }

    #[test]
    fn source_larger_than_buffer() {
        let mut source: &[u8] = b"abcdefgh";
        let mut buf = ScanBuffer::with_capacity(4);
        buf.refill(&mut source).unwrap();

        assert!(!buf.is_eof());
        for expected in *b"abcd" {
            assert_eq!(buf.peek(), Some(expected));
            buf.advance();
        }
        assert_eq!(buf.peek(), None);

        buf.refill(&mut source).unwrap();
        assert_eq!(buf.peek(), Some(b'e'));
    }

    #[test]
    fn refill_preserves_token_prefix_without_growing() {
        let mut source: &[u8] = b"abcdefghij";
        let mut buf = ScanBuffer::with_capacity(8);
        buf.refill(&mut source).unwrap();

        for _ in 0..6 {
            buf.advance();
        }
        buf.mark_token_start();
        buf.advance();
        buf.advance();
        assert_eq!(buf.peek(), None);

        buf.refill(&mut source).unwrap();
        assert_eq!(buf.token_start(), Some(0));
        assert_eq!(buf.read_pos(), 2);
        assert_eq!(buf.slice(0, 4), b"ghij");
        assert!(buf.is_eof());
    }

    #[test]
    fn prefix_filling_the_buffer_triggers_growth() {
        let mut source: &[u8] = b"abcdefgh";
        let mut buf = ScanBuffer::with_capacity(4);
        buf.refill(&mut source).unwrap();

        buf.advance();
        buf.advance();
        buf.mark_token_start();
        buf.advance();
        buf.advance();
        assert_eq!(buf.peek(), None);

        // prefix_len (2) has reached token_start (2), so capacity doubles
        buf.refill(&mut source).unwrap();
        assert_eq!(buf.token_start(), Some(0));
        assert_eq!(buf.read_pos(), 2);
        assert_eq!(buf.slice(0, 6), b"cdefgh");
        assert!(buf.is_eof());
    }

    #[test]
    fn token_spanning_many_refills_stays_contiguous() {
        let mut source: &[u8] = b"0123456789abcdef";
        let mut buf = ScanBuffer::with_capacity(2);
        buf.refill(&mut source).unwrap();
        buf.mark_token_start();

        loop {
            match buf.peek() {
                Some(_) => buf.advance(),
                None if buf.is_eof() => break,
                None => buf.refill(&mut source).unwrap(),
            }
        }

        assert_eq!(buf.token_start(), Some(0));
        assert_eq!(buf.slice(0, buf.read_pos()), b"0123456789abcdef");
    }
}
