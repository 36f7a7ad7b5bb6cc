//! Slide Cursor
//!
//! Index arithmetic for the image slider: exactly one slide visible,
//! wrapping in both directions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCursor {
    len: usize,
    index: usize,
}

impl SlideCursor {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.current() == Some(index)
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    pub fn prev(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + self.len - 1) % self.len;
        Some(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_forward_and_back() {
        let mut cursor = SlideCursor::new(3);
        assert_eq!(cursor.current(), Some(0));
        assert_eq!(cursor.prev(), Some(2));
        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.next(), Some(0));
        assert!(cursor.is_visible(0));
        assert!(!cursor.is_visible(1));
    }

    #[test]
    fn test_empty_slider_is_inert() {
        let mut cursor = SlideCursor::new(0);
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.prev(), None);
        assert!(!cursor.is_visible(0));
    }
}
