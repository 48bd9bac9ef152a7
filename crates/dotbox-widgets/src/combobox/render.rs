//! Drawing and hit-testing for [`Combobox`].
//!
//! `draw` lays the widget out, paints it, and records where each clickable
//! part landed. The next pointer press is resolved against that record.

use super::{Combobox, Row};
use crate::chrome::{field_block, FieldState};
use crate::config::LabelPosition;
use crate::option::label_for;
use crate::text::{display_width, truncate};
use crate::value::Selection;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Shown in place of rows when nothing matches.
pub(super) const EMPTY_TEXT: &str = "No options available";
/// Shown on an empty search line.
pub(super) const SEARCH_PLACEHOLDER: &str = "Search...";
/// Removes a tag.
pub(super) const TAG_CLOSE: &str = "×";
const ARROW_OPEN: &str = "▾";
const ARROW_CLOSED: &str = "▸";
const ELLIPSIS: &str = "…";

/// What a pointer press landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Hit {
    /// The close mark of the tag for this value.
    TagRemove(String),
    /// Anywhere else on the field box.
    Trigger,
    /// The checkbox of the option at this index.
    Checkbox(usize),
    /// A list row.
    Row(Row),
    /// The open list outside any row.
    Menu,
}

/// Screen regions recorded by the last `draw`.
#[derive(Debug, Default)]
pub(super) struct HitMap {
    trigger: Rect,
    tags: Vec<(Rect, String)>,
    menu: Rect,
    checkboxes: Vec<(Rect, usize)>,
    rows: Vec<(Rect, Row)>,
}

impl HitMap {
    /// Forget the open list's regions; the trigger and tags stay.
    pub(super) fn clear_list(&mut self) {
        self.menu = Rect::default();
        self.rows.clear();
        self.checkboxes.clear();
    }

    /// Resolve a press, or `None` when it fell outside the widget.
    pub(super) fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let at = Position::new(column, row);
        if let Some((_, value)) = self.tags.iter().find(|(r, _)| r.contains(at)) {
            return Some(Hit::TagRemove(value.clone()));
        }
        if self.trigger.contains(at) {
            return Some(Hit::Trigger);
        }
        if let Some((_, index)) = self.checkboxes.iter().find(|(r, _)| r.contains(at)) {
            return Some(Hit::Checkbox(*index));
        }
        if let Some((_, r)) = self.rows.iter().find(|(r, _)| r.contains(at)) {
            return Some(Hit::Row(*r));
        }
        if self.menu.contains(at) {
            return Some(Hit::Menu);
        }
        None
    }
}

/// Text of the trigger line for the current selection, or `None` when the
/// placeholder should show.
pub(super) fn summary(cb: &Combobox) -> Option<String> {
    match &cb.selection {
        Selection::Single(Some(v)) if !v.is_empty() => Some(label_for(&cb.options, v).to_string()),
        Selection::Single(_) => None,
        Selection::Multiple(vs) if vs.is_empty() => None,
        Selection::Multiple(vs) if vs.len() > 2 => Some(format!("{} items selected", vs.len())),
        Selection::Multiple(vs) => Some(
            vs.iter()
                .map(|v| label_for(&cb.options, v))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}

pub(super) fn draw(cb: &Combobox, frame: &mut Frame, area: Rect) {
    let mut hits = HitMap::default();
    if area.width >= 4 && area.height > 0 {
        let field = draw_label(cb, frame, area);
        if field.width >= 4 && field.height > 0 {
            let trigger = Rect {
                height: field.height.min(3),
                ..field
            };
            draw_trigger(cb, frame, trigger, &mut hits);
            if field.height > trigger.height {
                draw_error(cb, frame, Rect::new(field.x, trigger.bottom(), field.width, 1));
            }
            if cb.open {
                draw_menu(cb, frame, trigger, &mut hits);
            }
        }
    }
    *cb.hits.borrow_mut() = hits;
}

/// Draws the label, returns the area left for the field.
fn draw_label(cb: &Combobox, frame: &mut Frame, area: Rect) -> Rect {
    if cb.label.is_empty() {
        return area;
    }
    match cb.label_position {
        LabelPosition::Above => {
            if area.height < 2 {
                return area;
            }
            let text = truncate(&cb.label, area.width as usize, ELLIPSIS);
            frame.render_widget(
                Paragraph::new(Span::styled(text, cb.style.label)),
                Rect { height: 1, ..area },
            );
            Rect {
                y: area.y + 1,
                height: area.height - 1,
                ..area
            }
        }
        LabelPosition::Before => {
            let width = (display_width(&cb.label) as u16 + 1).min(area.width / 2);
            let y = if area.height >= 3 { area.y + 1 } else { area.y };
            let text = truncate(&cb.label, width.saturating_sub(1) as usize, ELLIPSIS);
            frame.render_widget(
                Paragraph::new(Span::styled(text, cb.style.label)),
                Rect::new(area.x, y, width, 1),
            );
            Rect {
                x: area.x + width,
                width: area.width - width,
                ..area
            }
        }
    }
}

fn draw_trigger(cb: &Combobox, frame: &mut Frame, trigger: Rect, hits: &mut HitMap) {
    let state = FieldState {
        focused: cb.focus && !cb.mount.transitions_suppressed(),
        has_error: cb.error.is_some(),
        disabled: cb.disabled,
    };
    let block = field_block(state);
    let inner = block.inner(trigger);
    frame.render_widget(block, trigger);
    hits.trigger = trigger;
    if inner.width < 3 || inner.height == 0 {
        return;
    }

    let line_area = Rect { height: 1, ..inner };
    let arrow = if cb.open { ARROW_OPEN } else { ARROW_CLOSED };
    frame.render_widget(
        Paragraph::new(Span::raw(arrow)),
        Rect::new(inner.right() - 1, inner.y, 1, 1),
    );

    let width = inner.width.saturating_sub(2) as usize;
    let content = Rect {
        width: width as u16,
        ..line_area
    };
    let line = if cb.multiple && cb.use_tags {
        tag_line(cb, content, hits)
    } else {
        match summary(cb) {
            Some(text) => Line::from(Span::styled(truncate(&text, width, ELLIPSIS), cb.style.value)),
            None => Line::from(Span::styled(
                truncate(&cb.placeholder, width, ELLIPSIS),
                cb.style.placeholder,
            )),
        }
    };
    frame.render_widget(Paragraph::new(line), content);
}

/// Selected values as `label ×` chips, then the inline search text.
fn tag_line(cb: &Combobox, area: Rect, hits: &mut HitMap) -> Line<'static> {
    let limit = area.width as usize;
    let mut spans = Vec::new();
    let mut used = 0usize;
    for value in cb.selection.values() {
        let chip = format!("{} {TAG_CLOSE}", label_for(&cb.options, value));
        let chip_width = display_width(&chip);
        let gap = usize::from(used > 0);
        if used + gap + chip_width > limit {
            spans.push(Span::styled(ELLIPSIS, cb.style.value));
            used = limit;
            break;
        }
        if gap > 0 {
            spans.push(Span::raw(" "));
        }
        let close_x = area.x + (used + gap + chip_width - 1) as u16;
        hits.tags.push((Rect::new(close_x, area.y, 1, 1), value.to_string()));
        spans.push(Span::styled(chip, cb.style.tag));
        used += gap + chip_width;
    }

    let searching = cb.open && cb.searchable;
    if searching && !cb.search_text.is_empty() && used < limit {
        let gap = usize::from(used > 0);
        let room = limit - used - gap;
        if room > 0 {
            if gap > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(truncate(&cb.search_text, room, ELLIPSIS), cb.style.value));
        }
    } else if spans.is_empty() {
        spans.push(Span::styled(truncate(&cb.placeholder, limit, ELLIPSIS), cb.style.placeholder));
    }
    Line::from(spans)
}

fn draw_error(cb: &Combobox, frame: &mut Frame, area: Rect) {
    if cb.error.is_none() {
        return;
    }
    let text = truncate(cb.error_text(), area.width as usize, ELLIPSIS);
    frame.render_widget(Paragraph::new(Span::styled(text, cb.style.error)), area);
}

fn draw_menu(cb: &Combobox, frame: &mut Frame, trigger: Rect, hits: &mut HitMap) {
    let rows = cb.rows();
    let search_line = cb.searchable && !(cb.multiple && cb.use_tags);
    let shown = rows.len().min(cb.highlight.visible()).max(1);
    let wanted = shown as u16 + u16::from(search_line) + 2;

    let screen = frame.area();
    let y = trigger.bottom();
    let height = wanted.min(screen.bottom().saturating_sub(y));
    if height < 3 {
        return;
    }
    let menu = Rect::new(trigger.x, y, trigger.width, height);
    frame.render_widget(Clear, menu);
    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(menu);
    frame.render_widget(block, menu);
    hits.menu = menu;

    let mut y = inner.y;
    let width = inner.width as usize;
    if search_line {
        let span = if cb.search_text.is_empty() {
            Span::styled(SEARCH_PLACEHOLDER, cb.style.muted)
        } else {
            Span::styled(truncate(&cb.search_text, width, ELLIPSIS), cb.style.value)
        };
        frame.render_widget(Paragraph::new(span), Rect { y, height: 1, ..inner });
        y += 1;
    }

    if rows.is_empty() {
        if y < inner.bottom() {
            frame.render_widget(
                Paragraph::new(Span::styled(truncate(EMPTY_TEXT, width, ELLIPSIS), cb.style.muted)),
                Rect { y, height: 1, ..inner },
            );
        }
        return;
    }

    let offset = cb.highlight.offset();
    for (i, row) in rows.iter().enumerate().skip(offset).take(shown) {
        if y >= inner.bottom() {
            break;
        }
        let area = Rect { y, height: 1, ..inner };
        let highlighted = cb.highlight.index() == Some(i);
        let line = match *row {
            Row::Option(index) => option_line(cb, index, highlighted, area, hits),
            Row::Create => {
                let text = format!("Create \"{}\"", cb.search_text);
                let mut style = cb.style.create;
                if highlighted {
                    style = style.patch(cb.style.highlighted_item);
                }
                Line::from(Span::styled(truncate(&text, width, ELLIPSIS), style))
            }
        };
        frame.render_widget(Paragraph::new(line), area);
        hits.rows.push((area, *row));
        y += 1;
    }
}

fn option_line(
    cb: &Combobox,
    index: usize,
    highlighted: bool,
    area: Rect,
    hits: &mut HitMap,
) -> Line<'static> {
    let item = &cb.options[index];
    let selected = cb.selection.contains(&item.value);

    let mut style = cb.style.item;
    if selected {
        style = style.patch(cb.style.selected_item);
    }
    if highlighted {
        style = style.patch(cb.style.highlighted_item);
    }

    let mut text = String::from(if highlighted { "▸ " } else { "  " });
    if cb.multiple && cb.use_checkboxes {
        hits.checkboxes.push((Rect::new(area.x + 2, area.y, 3, 1), index));
        text.push_str(if selected { "[x] " } else { "[ ] " });
    }
    let mark = if selected { " ✓" } else { "" };
    let room = (area.width as usize).saturating_sub(display_width(&text) + display_width(mark));
    text.push_str(&truncate(&item.label, room, ELLIPSIS));
    text.push_str(mark);
    Line::from(Span::styled(text, style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_for_each_selection_shape() {
        let options = [("us", "United States"), ("ca", "Canada"), ("mx", "Mexico")];
        let single = Combobox::new(options).with_value(Selection::single("ca"));
        assert_eq!(summary(&single).as_deref(), Some("Canada"));

        let unknown = Combobox::new(options).with_value(Selection::single("zz"));
        assert_eq!(summary(&unknown).as_deref(), Some("zz"));

        let none = Combobox::new(options);
        assert_eq!(summary(&none), None);

        let two = Combobox::new(options)
            .with_multiple(true)
            .with_value(Selection::multiple(["us", "mx"]));
        assert_eq!(summary(&two).as_deref(), Some("United States, Mexico"));

        let three = Combobox::new(options)
            .with_multiple(true)
            .with_value(Selection::multiple(["us", "ca", "mx"]));
        assert_eq!(summary(&three).as_deref(), Some("3 items selected"));
    }

    #[test]
    fn hit_prefers_tag_close_over_trigger() {
        let map = HitMap {
            trigger: Rect::new(0, 0, 20, 3),
            tags: vec![(Rect::new(5, 1, 1, 1), "a".into())],
            ..HitMap::default()
        };
        assert_eq!(map.hit(5, 1), Some(Hit::TagRemove("a".into())));
        assert_eq!(map.hit(4, 1), Some(Hit::Trigger));
        assert_eq!(map.hit(30, 1), None);
    }

    #[test]
    fn hit_prefers_checkbox_over_row() {
        let map = HitMap {
            menu: Rect::new(0, 3, 20, 4),
            checkboxes: vec![(Rect::new(3, 4, 3, 1), 0)],
            rows: vec![(Rect::new(1, 4, 18, 1), Row::Option(0))],
            ..HitMap::default()
        };
        assert_eq!(map.hit(4, 4), Some(Hit::Checkbox(0)));
        assert_eq!(map.hit(10, 4), Some(Hit::Row(Row::Option(0))));
        assert_eq!(map.hit(0, 5), Some(Hit::Menu));
    }

    #[test]
    fn clear_list_keeps_trigger_and_tags() {
        let mut map = HitMap {
            trigger: Rect::new(0, 0, 20, 3),
            tags: vec![(Rect::new(5, 1, 1, 1), "a".into())],
            menu: Rect::new(0, 3, 20, 4),
            checkboxes: vec![(Rect::new(3, 4, 3, 1), 0)],
            rows: vec![(Rect::new(1, 4, 18, 1), Row::Option(0))],
        };
        map.clear_list();
        assert_eq!(map.hit(4, 4), None);
        assert_eq!(map.hit(10, 4), None);
        assert_eq!(map.hit(5, 1), Some(Hit::TagRemove("a".into())));
        assert_eq!(map.hit(2, 1), Some(Hit::Trigger));
    }
}
