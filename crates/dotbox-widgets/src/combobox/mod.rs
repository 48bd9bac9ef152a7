//! Combobox: a dropdown that selects one or many options, with optional
//! search, option creation, tags and checkboxes.
//!
//! The widget is a single state machine. It rests `CLOSED`; opening it
//! clears the search and shows every option. While `OPEN` the arrow keys move
//! a highlight over the visible rows, `Enter` picks the highlighted row and
//! `Esc` or a click anywhere else closes it without touching the selection.
//! Committing a single selection closes the list; multi-select keeps it open
//! for further picks.
//!
//! Keys and mouse presses reach the widget through a host
//! [`Document`](dotbox_core::Document): [`Combobox::mount`] registers one
//! pointer-down and one key-down listener, and [`Combobox::unmount`] (or
//! dropping the widget) releases them. Listeners forward every event; the
//! widget decides from its own state whether the event concerns it.
//!
//! Notifications for the parent travel as [`Command`] messages:
//! [`Message::Changed`], [`Message::Input`], [`Message::TagRemoved`],
//! [`Message::Focused`] and [`Message::Blurred`].
//!
//! # Example
//!
//! ```ignore
//! use dotbox_widgets::combobox::Combobox;
//!
//! let mut toppings = Combobox::new(["olives", "cheese", "basil"])
//!     .with_label("Toppings")
//!     .with_multiple(true)
//!     .with_tags(true)
//!     .with_searchable(true)
//!     .with_creatable(true);
//! toppings.mount(&document.scope(AppMsg::Toppings));
//! ```

mod render;

use crate::base::Mount;
use crate::config::{ComboboxConfig, LabelPosition, DEFAULT_MAX_VISIBLE, DEFAULT_PLACEHOLDER};
use crate::highlight::{Direction, Highlight};
use crate::key::{typed_char, Binding, KeyCombination};
use crate::option::{filter_indices, find_by_value, OptionItem};
use crate::validation::{Rules, ValidationError};
use crate::value::Selection;
use dotbox_core::command::Command;
use dotbox_core::component::Component;
use dotbox_core::document::{EventTarget, ListenerGuard, ListenerKind};
use dotbox_core::event::HostEvent;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::Frame;
use render::{Hit, HitMap};
use std::cell::RefCell;

/// Messages for the combobox: inputs it reacts to, and the notifications it
/// reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Open the list if closed, close it if open.
    Toggle,
    /// Close the list.
    Close,
    /// Pick an option by value (toggles membership in multi mode).
    Select(String),
    /// Check or uncheck an option's checkbox (multi mode).
    CheckboxToggled {
        /// Option value.
        value: String,
        /// New checkbox state.
        checked: bool,
    },
    /// Remove a tag (multi mode).
    RemoveTag(String),
    /// Replace the search text.
    Search(String),
    /// Create an option from text and select it.
    Create(String),
    /// Move the row highlight.
    Navigate(Direction),
    /// Clear selection, search and errors.
    Reset,
    /// Input focus moved into the widget.
    Focus,
    /// Input focus left the widget.
    Blur,
    /// A key press seen by the host document.
    KeyDown(KeyEvent),
    /// A mouse press seen by the host document.
    PointerDown {
        /// Column of the press.
        column: u16,
        /// Row of the press.
        row: u16,
    },

    /// Notification: the selection changed.
    Changed(Selection),
    /// Notification: the search text changed.
    Input(String),
    /// Notification: a tag was removed.
    TagRemoved(String),
    /// Notification: the widget gained focus.
    Focused,
    /// Notification: the widget lost focus.
    Blurred,
}

/// A navigable line of the open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// The option at this index of [`Combobox::options`].
    Option(usize),
    /// The "create from search text" affordance.
    Create,
}

/// Key bindings used while the widget is focused or open.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Opens the closed list when the widget is focused.
    pub open: Binding,
    /// Closes the open list.
    pub close: Binding,
    /// Highlights the next row.
    pub next: Binding,
    /// Highlights the previous row.
    pub previous: Binding,
    /// Picks the highlighted row.
    pub activate: Binding,
    /// Flips the highlighted row's checkbox.
    pub toggle_check: Binding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            open: Binding::keys(&[KeyCode::Enter, KeyCode::Char(' '), KeyCode::Down], "open"),
            close: Binding::keys(&[KeyCode::Esc], "close"),
            next: Binding::new(
                vec![
                    KeyCombination::new(KeyCode::Down),
                    KeyCombination::ctrl(KeyCode::Char('n')),
                ],
                "next",
            ),
            previous: Binding::new(
                vec![
                    KeyCombination::new(KeyCode::Up),
                    KeyCombination::ctrl(KeyCode::Char('p')),
                ],
                "previous",
            ),
            activate: Binding::keys(&[KeyCode::Enter], "select"),
            toggle_check: Binding::keys(&[KeyCode::Char(' ')], "toggle"),
        }
    }
}

/// Visual style of the combobox.
#[derive(Debug, Clone)]
pub struct ComboboxStyle {
    /// Label text.
    pub label: Style,
    /// Selected value(s) in the trigger line.
    pub value: Style,
    /// Placeholder text.
    pub placeholder: Style,
    /// Unselected rows.
    pub item: Style,
    /// Rows whose value is selected.
    pub selected_item: Style,
    /// The highlighted row.
    pub highlighted_item: Style,
    /// Tag chips.
    pub tag: Style,
    /// The create row.
    pub create: Style,
    /// Empty-state and search placeholder text.
    pub muted: Style,
    /// Validation message.
    pub error: Style,
}

impl Default for ComboboxStyle {
    fn default() -> Self {
        Self {
            label: Style::default().add_modifier(Modifier::BOLD),
            value: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            item: Style::default(),
            selected_item: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            highlighted_item: Style::default().add_modifier(Modifier::REVERSED),
            tag: Style::default().fg(Color::Black).bg(Color::Cyan),
            create: Style::default().fg(Color::Green).add_modifier(Modifier::ITALIC),
            muted: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red),
        }
    }
}

struct MountedListeners {
    _pointer: ListenerGuard,
    _keys: ListenerGuard,
}

/// Dropdown / combobox over a list of options. See the [module docs](self).
pub struct Combobox {
    options: Vec<OptionItem>,
    selection: Selection,
    multiple: bool,
    searchable: bool,
    creatable: bool,
    use_checkboxes: bool,
    use_tags: bool,
    disabled: bool,
    rules: Rules,
    label: String,
    label_position: LabelPosition,
    placeholder: String,

    open: bool,
    search_text: String,
    filtered: Vec<usize>,
    highlight: Highlight,
    error: Option<ValidationError>,
    focus: bool,
    search_focused: bool,

    listeners: Option<MountedListeners>,
    mount: Mount,
    hits: RefCell<HitMap>,
    keys: KeyBindings,
    style: ComboboxStyle,
}

impl Combobox {
    /// A single-select combobox over `options`, nothing selected.
    pub fn new<I, O>(options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<OptionItem>,
    {
        let options: Vec<OptionItem> = options.into_iter().map(Into::into).collect();
        let filtered: Vec<usize> = (0..options.len()).collect();
        let highlight = Highlight::new(filtered.len(), DEFAULT_MAX_VISIBLE);
        Self {
            options,
            selection: Selection::empty(false),
            multiple: false,
            searchable: false,
            creatable: false,
            use_checkboxes: false,
            use_tags: false,
            disabled: false,
            rules: Rules::default(),
            label: String::new(),
            label_position: LabelPosition::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            open: false,
            search_text: String::new(),
            filtered,
            highlight,
            error: None,
            focus: false,
            search_focused: false,
            listeners: None,
            mount: Mount::default(),
            hits: RefCell::new(HitMap::default()),
            keys: KeyBindings::default(),
            style: ComboboxStyle::default(),
        }
    }

    /// Build a combobox from a configuration. The initial value is coerced
    /// to the configured mode and is not validated.
    pub fn from_config(config: ComboboxConfig) -> Self {
        let selection = config.initial_selection();
        let mut cb = Self::new(config.options)
            .with_label(config.label)
            .with_label_position(config.label_position)
            .with_placeholder(config.placeholder)
            .with_multiple(config.multiple)
            .with_searchable(config.searchable)
            .with_creatable(config.creatable)
            .with_checkboxes(config.use_checkboxes)
            .with_tags(config.use_tags)
            .with_required(config.required)
            .with_error_message(config.error_message)
            .with_disabled(config.disabled)
            .with_max_visible(config.max_visible);
        cb.selection = selection.into_mode(cb.multiple);
        cb
    }

    // --- Builders ---

    /// Set the label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set where the label is drawn.
    pub fn with_label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    /// Set the placeholder shown when nothing is selected.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the initial selection without validating it.
    pub fn with_value(mut self, selection: Selection) -> Self {
        self.selection = selection.into_mode(self.multiple);
        self
    }

    /// Switch between single and multi select.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.set_multiple(multiple);
        self
    }

    /// Enable the search line.
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Offer creating options from unmatched search text.
    pub fn with_creatable(mut self, creatable: bool) -> Self {
        self.creatable = creatable;
        self
    }

    /// Draw checkboxes on rows (multi mode only).
    pub fn with_checkboxes(mut self, enabled: bool) -> Self {
        self.use_checkboxes = enabled;
        self
    }

    /// Draw the selection as removable tags (multi mode only).
    pub fn with_tags(mut self, enabled: bool) -> Self {
        self.use_tags = enabled;
        self
    }

    /// Make an empty selection invalid.
    pub fn with_required(mut self, required: bool) -> Self {
        self.rules.required = required;
        self
    }

    /// Replace the default validation message.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.rules.error_message = message.into();
        self
    }

    /// Ignore all interaction.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set how many rows are visible before the list scrolls.
    pub fn with_max_visible(mut self, rows: usize) -> Self {
        self.highlight.set_visible(rows);
        self
    }

    /// Set the visual style.
    pub fn with_style(mut self, style: ComboboxStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the key bindings.
    pub fn with_key_bindings(mut self, keys: KeyBindings) -> Self {
        self.keys = keys;
        self
    }

    // --- Host lifecycle ---

    /// Register the pointer-down and key-down listeners on `target`.
    ///
    /// Mounting an already mounted widget does nothing, so the widget never
    /// holds more than one listener of each kind.
    pub fn mount<T: EventTarget<Message> + ?Sized>(&mut self, target: &T) {
        if self.listeners.is_some() {
            tracing::trace!("combobox already mounted");
            return;
        }
        let pointer = target.add_listener(
            ListenerKind::PointerDown,
            Box::new(|ev: &HostEvent| match *ev {
                HostEvent::PointerDown { column, row } => Some(Message::PointerDown { column, row }),
                _ => None,
            }),
        );
        let keys = target.add_listener(
            ListenerKind::KeyDown,
            Box::new(|ev: &HostEvent| ev.as_key().map(|k| Message::KeyDown(*k))),
        );
        self.listeners = Some(MountedListeners {
            _pointer: pointer,
            _keys: keys,
        });
        self.mount.attach();
        tracing::debug!(label = %self.label, "combobox mounted");
    }

    /// Release the host listeners and close the list.
    pub fn unmount(&mut self) {
        if self.listeners.take().is_some() {
            tracing::debug!(label = %self.label, "combobox unmounted");
        }
        self.mount.detach();
        self.close();
    }

    /// Whether host listeners are registered.
    pub fn is_mounted(&self) -> bool {
        self.listeners.is_some()
    }

    /// Whether the next frame is the first since mount.
    pub fn transitions_suppressed(&self) -> bool {
        self.mount.transitions_suppressed()
    }

    // --- Accessors ---

    /// Label text; empty when there is none.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// All options, in display order.
    pub fn options(&self) -> &[OptionItem] {
        &self.options
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Options matching the search text, in display order.
    pub fn filtered(&self) -> Vec<&OptionItem> {
        self.filtered.iter().map(|&i| &self.options[i]).collect()
    }

    /// Navigable rows of the open list.
    pub fn rows(&self) -> Vec<Row> {
        if !self.filtered.is_empty() {
            self.filtered.iter().map(|&i| Row::Option(i)).collect()
        } else if self.offers_create() {
            vec![Row::Create]
        } else {
            Vec::new()
        }
    }

    /// Whether the create row is offered.
    pub fn offers_create(&self) -> bool {
        self.creatable && self.filtered.is_empty() && !self.search_text.is_empty()
    }

    /// Whether the list is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Whether typed text goes to the search line.
    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    /// Index of the highlighted row within [`rows`](Self::rows).
    pub fn focused_index(&self) -> Option<usize> {
        self.highlight.index()
    }

    /// The highlighted row.
    pub fn focused_row(&self) -> Option<Row> {
        self.highlight
            .index()
            .and_then(|i| self.rows().get(i).copied())
    }

    /// Whether the last validation failed.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Message of the last failed validation, or `""`.
    pub fn error_text(&self) -> &str {
        match &self.error {
            Some(ValidationError::Required { message }) => message,
            None => "",
        }
    }

    /// The last validation failure.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Whether the widget ignores interaction.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the widget is in multi-select mode.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Whether the value at `value` is selected. Compared by value.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selection.contains(value)
    }

    // --- Setters ---

    /// Replace the options. Resets the search filter and the highlight.
    pub fn set_options<I, O>(&mut self, options: I)
    where
        I: IntoIterator<Item = O>,
        O: Into<OptionItem>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self.search_text.clear();
        self.refilter();
    }

    /// Replace the selection wholesale and re-validate.
    pub fn set_value(&mut self, selection: Selection) {
        self.selection = selection.into_mode(self.multiple);
        self.validate();
    }

    /// Switch between single and multi select, converting the selection.
    pub fn set_multiple(&mut self, multiple: bool) {
        self.multiple = multiple;
        let selection = std::mem::replace(&mut self.selection, Selection::empty(multiple));
        self.selection = selection.into_mode(multiple);
    }

    /// Enable or disable the widget. Disabling closes the list.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.close();
        }
    }

    /// Make an empty selection invalid (or not).
    pub fn set_required(&mut self, required: bool) {
        self.rules.required = required;
    }

    /// Replace the validation message.
    pub fn set_error_message(&mut self, message: impl Into<String>) {
        self.rules.error_message = message.into();
    }

    /// Enable or disable the search line.
    pub fn set_searchable(&mut self, searchable: bool) {
        self.searchable = searchable;
    }

    /// Enable or disable option creation.
    pub fn set_creatable(&mut self, creatable: bool) {
        self.creatable = creatable;
        self.refilter();
    }

    /// Set the label text.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    // --- Operations ---

    /// Open the list if closed, close it if open.
    pub fn toggle_open(&mut self) -> Command<Message> {
        if self.disabled {
            return Command::none();
        }
        if self.open {
            self.close();
        } else {
            self.open_list();
        }
        Command::none()
    }

    /// Pick `value`. Single mode replaces the selection and closes the list;
    /// multi mode toggles membership and keeps the list open.
    pub fn select_option(&mut self, value: &str) -> Command<Message> {
        if self.disabled {
            return Command::none();
        }
        if self.multiple {
            self.selection.toggle(value);
        } else {
            self.selection = Selection::single(value);
            self.close();
        }
        tracing::debug!(value, selection = ?self.selection, "option selected");
        self.commit()
    }

    /// Multi mode: add (`checked`) or remove `value`. The open state is
    /// left alone. Does nothing in single mode.
    pub fn toggle_by_checkbox(&mut self, value: &str, checked: bool) -> Command<Message> {
        if self.disabled || !self.multiple {
            return Command::none();
        }
        if checked {
            self.selection.insert(value);
        } else {
            self.selection.remove(value);
        }
        self.commit()
    }

    /// Multi mode: remove `value` and report it as a removed tag.
    pub fn remove_tag(&mut self, value: &str) -> Command<Message> {
        if self.disabled || !self.multiple {
            return Command::none();
        }
        self.selection.remove(value);
        tracing::debug!(value, "tag removed");
        let changed = self.commit();
        Command::batch([changed, Command::message(Message::TagRemoved(value.to_string()))])
    }

    /// Replace the search text and re-filter.
    pub fn search(&mut self, text: impl Into<String>) -> Command<Message> {
        if self.disabled {
            return Command::none();
        }
        self.search_text = text.into();
        self.refilter();
        Command::message(Message::Input(self.search_text.clone()))
    }

    /// Add an option whose value and label are `text`, and select it.
    ///
    /// Does nothing for empty text or when creation is not enabled. An
    /// existing option with the same value is selected instead of added
    /// again. In multi mode the value is added, never toggled off.
    pub fn create_option(&mut self, text: &str) -> Command<Message> {
        if self.disabled || !self.creatable || text.is_empty() {
            return Command::none();
        }
        if find_by_value(&self.options, text).is_none() {
            self.options.push(OptionItem::from(text));
            tracing::debug!(value = text, "option created");
        }
        if self.multiple {
            self.selection.insert(text);
        } else {
            self.selection = Selection::single(text);
            self.close();
        }
        self.search_text.clear();
        self.refilter();
        self.commit()
    }

    /// Check the selection, record the outcome, and return whether it passed.
    pub fn validate(&mut self) -> bool {
        self.error = self.rules.check(&self.selection).err();
        if let Some(err) = &self.error {
            tracing::debug!(label = %self.label, %err, "validation failed");
        }
        self.error.is_none()
    }

    /// Whether the selection currently passes validation. Unlike
    /// [`validate`](Self::validate) this records nothing.
    pub fn check_validity(&self) -> bool {
        self.rules.check(&self.selection).is_ok()
    }

    /// Clear the selection, the search and the error; close the list.
    pub fn reset(&mut self) {
        self.selection = Selection::empty(self.multiple);
        self.search_text.clear();
        self.error = None;
        self.close();
        self.refilter();
    }

    /// Move the row highlight while the list is open.
    pub fn navigate(&mut self, direction: Direction) {
        if self.disabled || !self.open {
            return;
        }
        self.highlight.step(direction);
    }

    /// Move input focus into the widget.
    pub fn focus(&mut self) -> Command<Message> {
        if self.focus {
            return Command::none();
        }
        self.focus = true;
        Command::message(Message::Focused)
    }

    /// Move input focus out of the widget, close the list and validate.
    pub fn blur(&mut self) -> Command<Message> {
        if !self.focus {
            return Command::none();
        }
        self.focus = false;
        self.close();
        self.validate();
        Command::message(Message::Blurred)
    }

    // --- Internals ---

    fn open_list(&mut self) {
        self.open = true;
        self.search_text.clear();
        self.refilter();
        self.search_focused = self.searchable;
        tracing::debug!(label = %self.label, "combobox opened");
    }

    fn close(&mut self) {
        if self.open {
            tracing::debug!(label = %self.label, "combobox closed");
        }
        self.open = false;
        self.search_focused = false;
        let rows = self.rows().len();
        self.highlight.reset(rows);
        self.hits.get_mut().clear_list();
    }

    // Row indices recorded by the last frame no longer line up after this.
    fn refilter(&mut self) {
        self.filtered = filter_indices(&self.options, &self.search_text);
        let rows = self.rows().len();
        self.highlight.reset(rows);
        self.hits.get_mut().clear_list();
    }

    fn commit(&mut self) -> Command<Message> {
        self.validate();
        Command::message(Message::Changed(self.selection.clone()))
    }

    fn activate_focused(&mut self) -> Command<Message> {
        match self.focused_row() {
            Some(Row::Option(i)) => match self.options.get(i).map(|o| o.value.clone()) {
                Some(value) => self.select_option(&value),
                None => Command::none(),
            },
            Some(Row::Create) => {
                let text = self.search_text.clone();
                self.create_option(&text)
            }
            None => Command::none(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        if self.disabled {
            return Command::none();
        }
        if !self.open {
            if !self.focus {
                return Command::none();
            }
            if self.searchable {
                if let Some(c) = typed_char(&key).filter(|c| *c != ' ') {
                    self.open_list();
                    return self.search(c.to_string());
                }
            }
            if self.keys.open.matches(&key) {
                return self.toggle_open();
            }
            return Command::none();
        }

        if self.keys.close.matches(&key) {
            self.close();
            return Command::none();
        }
        if self.keys.next.matches(&key) {
            self.navigate(Direction::Next);
            return Command::none();
        }
        if self.keys.previous.matches(&key) {
            self.navigate(Direction::Previous);
            return Command::none();
        }
        if self.keys.activate.matches(&key) {
            return self.activate_focused();
        }
        if self.multiple && self.use_checkboxes && self.keys.toggle_check.matches(&key) {
            if let Some(value) = self
                .focused_row()
                .and_then(|row| match row {
                    Row::Option(i) => self.options.get(i),
                    Row::Create => None,
                })
                .map(|o| o.value.clone())
            {
                let checked = !self.selection.contains(&value);
                return self.toggle_by_checkbox(&value, checked);
            }
        }
        if self.searchable {
            if key.code == KeyCode::Backspace {
                if self.search_text.is_empty() {
                    return Command::none();
                }
                let mut text = self.search_text.clone();
                text.pop();
                return self.search(text);
            }
            if let Some(c) = typed_char(&key) {
                let mut text = self.search_text.clone();
                text.push(c);
                return self.search(text);
            }
        }
        Command::none()
    }

    fn handle_pointer(&mut self, column: u16, row: u16) -> Command<Message> {
        let hit = self.hits.borrow().hit(column, row);
        let Some(hit) = hit else {
            if self.focus {
                tracing::debug!(column, row, "press outside, blurring");
                return self.blur();
            }
            if self.open {
                tracing::debug!(column, row, "press outside");
                self.close();
            }
            return Command::none();
        };
        if self.disabled {
            return Command::none();
        }
        match hit {
            Hit::TagRemove(value) => self.remove_tag(&value),
            Hit::Trigger => {
                let focused = self.focus();
                Command::batch([focused, self.toggle_open()])
            }
            Hit::Checkbox(_) | Hit::Row(_) | Hit::Menu if !self.open => Command::none(),
            Hit::Checkbox(i) => {
                let Some(value) = self.options.get(i).map(|o| o.value.clone()) else {
                    return Command::none();
                };
                let checked = !self.selection.contains(&value);
                self.toggle_by_checkbox(&value, checked)
            }
            Hit::Row(Row::Option(i)) => match self.options.get(i).map(|o| o.value.clone()) {
                Some(value) => self.select_option(&value),
                None => Command::none(),
            },
            Hit::Row(Row::Create) => {
                let text = self.search_text.clone();
                self.create_option(&text)
            }
            Hit::Menu => Command::none(),
        }
    }
}

impl Component for Combobox {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Toggle => self.toggle_open(),
            Message::Close => {
                self.close();
                Command::none()
            }
            Message::Select(value) => self.select_option(&value),
            Message::CheckboxToggled { value, checked } => self.toggle_by_checkbox(&value, checked),
            Message::RemoveTag(value) => self.remove_tag(&value),
            Message::Search(text) => self.search(text),
            Message::Create(text) => self.create_option(&text),
            Message::Navigate(direction) => {
                self.navigate(direction);
                Command::none()
            }
            Message::Reset => {
                self.reset();
                Command::none()
            }
            Message::Focus => self.focus(),
            Message::Blur => self.blur(),
            Message::KeyDown(key) => self.handle_key(key),
            Message::PointerDown { column, row } => self.handle_pointer(column, row),
            Message::Changed(_)
            | Message::Input(_)
            | Message::TagRemoved(_)
            | Message::Focused
            | Message::Blurred => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        render::draw(self, frame, area);
        self.mount.frame_rendered();
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
