//! Display-width helpers for fitting labels into terminal cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of terminal columns `s` occupies.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate `s` to at most `max_width` columns, appending `tail` when cut.
///
/// The result, tail included, never exceeds `max_width`. When even the tail
/// does not fit, as much of the tail as fits is returned.
///
/// ```
/// use dotbox_widgets::text::truncate;
///
/// assert_eq!(truncate("Switzerland", 8, "…"), "Switzer…");
/// assert_eq!(truncate("Peru", 8, "…"), "Peru");
/// ```
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let tail_width = display_width(tail);
    if tail_width >= max_width {
        return take_columns(tail, max_width);
    }
    let mut out = take_columns(s, max_width - tail_width);
    out.push_str(tail);
    out
}

fn take_columns(s: &str, columns: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > columns {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_wide_chars_twice() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn fits_unchanged() {
        assert_eq!(truncate("Alpha", 5, "…"), "Alpha");
    }

    #[test]
    fn cuts_with_tail() {
        assert_eq!(truncate("Alphabet", 6, "..."), "Alp...");
    }

    #[test]
    fn wide_chars_are_not_split() {
        // 日本語 is 6 columns; 4 columns leave room for one ideograph + tail.
        assert_eq!(truncate("日本語", 4, "…"), "日…");
    }

    #[test]
    fn tail_wider_than_limit() {
        assert_eq!(truncate("Alphabet", 2, "..."), "..");
        assert_eq!(truncate("Alphabet", 0, "..."), "");
    }
}
