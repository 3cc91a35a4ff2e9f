//! Bounded status line buffer.

use std::fmt;

/// Returned when a segment does not fit in the remaining capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow {
    pub needed: usize,
    pub remaining: usize,
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "segment of {} bytes exceeds remaining capacity of {} bytes",
            self.needed, self.remaining
        )
    }
}

impl std::error::Error for Overflow {}

/// Text buffer with a fixed byte capacity.
///
/// `capacity` counts a terminator slot, so the stored text never exceeds
/// `capacity - 1` bytes. Segments are appended whole or not at all, which
/// also keeps the contents on a UTF-8 boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBuffer {
    text: String,
    capacity: usize,
}

impl StatusBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity.saturating_sub(1)),
            capacity,
        }
    }

    /// Creates a buffer pre-filled with `prefix`, truncated to fit.
    pub fn with_prefix(prefix: &str, capacity: usize) -> Self {
        let mut buf = Self::new(capacity);
        let mut end = prefix.len().min(buf.max_text_len());
        while !prefix.is_char_boundary(end) {
            end -= 1;
        }
        buf.text.push_str(&prefix[..end]);
        buf
    }

    /// Appends `segment`, or leaves the buffer untouched if it would not fit.
    pub fn push_segment(&mut self, segment: &str) -> Result<usize, Overflow> {
        let remaining = self.remaining();
        if segment.len() > remaining {
            return Err(Overflow {
                needed: segment.len(),
                remaining,
            });
        }
        self.text.push_str(segment);
        Ok(segment.len())
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.max_text_len() - self.text.len()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    fn max_text_len(&self) -> usize {
        self.capacity.saturating_sub(1)
    }
}

impl fmt::Display for StatusBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full_keeps_terminator_slot() {
        let mut buf = StatusBuffer::new(8);
        assert_eq!(buf.push_segment("abcd"), Ok(4));
        assert_eq!(buf.push_segment("efg"), Ok(3));
        assert_eq!(buf.len(), 7);
        assert_eq!(buf.remaining(), 0);
        assert_eq!(
            buf.push_segment("h"),
            Err(Overflow {
                needed: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn test_overflowing_segment_leaves_contents_untouched() {
        let mut buf = StatusBuffer::new(6);
        buf.push_segment("ab").unwrap();
        assert!(buf.push_segment("cdefg").is_err());
        assert_eq!(buf.as_str(), "ab");
        // a smaller segment still fits afterwards
        buf.push_segment("cd").unwrap();
        assert_eq!(buf.as_str(), "abcd");
    }

    #[test]
    fn test_with_prefix_truncates_on_char_boundary() {
        let buf = StatusBuffer::with_prefix("aé", 3);
        assert_eq!(buf.as_str(), "a");
    }

    #[test]
    fn test_zero_capacity_holds_nothing() {
        let mut buf = StatusBuffer::new(0);
        assert!(buf.push_segment("").is_ok());
        assert!(buf.push_segment("x").is_err());
        assert!(buf.is_empty());
    }
}
