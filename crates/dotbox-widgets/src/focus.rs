//! Focus cycling across a form's fields.

/// Which of `len` fields has keyboard focus. Cycling wraps at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRing {
    focused: usize,
    len: usize,
}

impl FocusRing {
    /// Focus on the first of `len` fields.
    pub fn new(len: usize) -> Self {
        Self { focused: 0, len }
    }

    /// Index of the focused field.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Number of fields in the ring.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the ring has no fields.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next field. Returns `(previous, current)`.
    pub fn next(&mut self) -> (usize, usize) {
        let prev = self.focused;
        if self.len > 0 {
            self.focused = (self.focused + 1) % self.len;
        }
        (prev, self.focused)
    }

    /// Move to the previous field. Returns `(previous, current)`.
    pub fn prev(&mut self) -> (usize, usize) {
        let prev = self.focused;
        if self.len > 0 {
            self.focused = (self.focused + self.len - 1) % self.len;
        }
        (prev, self.focused)
    }

    /// Jump to `index`. Out-of-range indices are ignored. Returns
    /// `(previous, current)`.
    pub fn focus(&mut self, index: usize) -> (usize, usize) {
        let prev = self.focused;
        if index < self.len {
            self.focused = index;
        }
        (prev, self.focused)
    }

    /// Whether the field at `index` is focused.
    pub fn is_focused(&self, index: usize) -> bool {
        self.len > 0 && self.focused == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_and_reports_transition() {
        let mut ring = FocusRing::new(3);
        assert_eq!(ring.next(), (0, 1));
        assert_eq!(ring.next(), (1, 2));
        assert_eq!(ring.next(), (2, 0));
    }

    #[test]
    fn prev_wraps() {
        let mut ring = FocusRing::new(3);
        assert_eq!(ring.prev(), (0, 2));
        assert!(ring.is_focused(2));
    }

    #[test]
    fn empty_ring_is_inert() {
        let mut ring = FocusRing::new(0);
        assert!(ring.is_empty());
        assert_eq!(ring.next(), (0, 0));
        assert!(!ring.is_focused(0));
    }

    #[test]
    fn focus_jumps_within_range() {
        let mut ring = FocusRing::new(3);
        assert_eq!(ring.focus(2), (0, 2));
        assert_eq!(ring.focus(7), (2, 2));
    }
}
