//! Keyboard highlight over the rows of an open list.
//!
//! `Highlight` tracks which row (if any) is focused and the scroll offset
//! that keeps it inside the visible window. Movement wraps around both ends.

/// Direction of a keyboard navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row down (+1).
    Next,
    /// One row up (−1).
    Previous,
}

/// Focused row and scroll offset for a list of `count` rows showing
/// `visible` at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    index: Option<usize>,
    offset: usize,
    count: usize,
    visible: usize,
}

impl Highlight {
    /// No focused row.
    pub fn new(count: usize, visible: usize) -> Self {
        Self {
            index: None,
            offset: 0,
            count,
            visible: visible.max(1),
        }
    }

    /// The focused row, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// First visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of rows.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Rows shown at once.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Replace the rows: clears the focused row and scrolls to the top.
    pub fn reset(&mut self, count: usize) {
        self.count = count;
        self.index = None;
        self.offset = 0;
    }

    /// Change the window height.
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible.max(1);
        self.ensure_visible();
    }

    /// Move one step, wrapping. From no focused row, `Next` lands on the
    /// first row and `Previous` on the last.
    pub fn step(&mut self, direction: Direction) {
        if self.count == 0 {
            self.index = None;
            return;
        }
        let last = self.count - 1;
        self.index = Some(match (self.index, direction) {
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => last,
            (Some(i), Direction::Next) if i >= last => 0,
            (Some(i), Direction::Next) => i + 1,
            (Some(0), Direction::Previous) => last,
            (Some(i), Direction::Previous) => (i - 1).min(last),
        });
        self.ensure_visible();
    }

    /// Focus a specific row, clamped to the last one.
    pub fn focus(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        self.index = Some(index.min(self.count - 1));
        self.ensure_visible();
    }

    fn ensure_visible(&mut self) {
        let Some(index) = self.index else {
            return;
        };
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.visible {
            self.offset = index + 1 - self.visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unfocused() {
        let h = Highlight::new(5, 3);
        assert_eq!(h.index(), None);
        assert_eq!(h.offset(), 0);
    }

    #[test]
    fn first_step_picks_an_end() {
        let mut down = Highlight::new(4, 10);
        down.step(Direction::Next);
        assert_eq!(down.index(), Some(0));

        let mut up = Highlight::new(4, 10);
        up.step(Direction::Previous);
        assert_eq!(up.index(), Some(3));
    }

    #[test]
    fn next_wraps() {
        let mut h = Highlight::new(3, 10);
        h.focus(2);
        h.step(Direction::Next);
        assert_eq!(h.index(), Some(0));
    }

    #[test]
    fn previous_wraps() {
        let mut h = Highlight::new(3, 10);
        h.focus(0);
        h.step(Direction::Previous);
        assert_eq!(h.index(), Some(2));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for count in 1..6 {
            for start in 0..count {
                let mut h = Highlight::new(count, 2);
                h.focus(start);
                for _ in 0..count {
                    h.step(Direction::Next);
                }
                assert_eq!(h.index(), Some(start), "count {count} start {start}");
                for _ in 0..count {
                    h.step(Direction::Previous);
                }
                assert_eq!(h.index(), Some(start), "count {count} start {start}");
            }
        }
    }

    #[test]
    fn empty_stays_unfocused() {
        let mut h = Highlight::new(0, 5);
        h.step(Direction::Next);
        assert_eq!(h.index(), None);
        h.focus(3);
        assert_eq!(h.index(), None);
    }

    #[test]
    fn offset_follows_focus() {
        let mut h = Highlight::new(6, 2);
        h.step(Direction::Next); // 0
        h.step(Direction::Next); // 1
        assert_eq!(h.offset(), 0);
        h.step(Direction::Next); // 2
        assert_eq!(h.offset(), 1);
        h.step(Direction::Previous); // 1
        h.step(Direction::Previous); // 0
        assert_eq!(h.offset(), 0);
        h.step(Direction::Previous); // wraps to 5
        assert_eq!(h.offset(), 4);
    }

    #[test]
    fn reset_clears_focus_and_scroll() {
        let mut h = Highlight::new(10, 3);
        h.focus(8);
        h.reset(4);
        assert_eq!(h.index(), None);
        assert_eq!(h.offset(), 0);
        assert_eq!(h.count(), 4);
    }
}
