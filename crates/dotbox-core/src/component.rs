use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) except that
/// [`view`](Component::view) receives the area to draw into, so a parent can
/// place several components within its own layout.
///
/// # Composition pattern
///
/// Wrap the child's message type in a variant of the parent message and use
/// [`Command::map`] to lift the child's notifications:
///
/// ```rust,ignore
/// enum AppMsg {
///     Country(combobox::Message),
/// }
///
/// fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///     match msg {
///         AppMsg::Country(combobox::Message::Changed(value)) => {
///             self.country = value;
///             Command::none()
///         }
///         AppMsg::Country(m) => self.country_picker.update(m).map(AppMsg::Country),
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's message type: inputs it reacts to and the
    /// notifications it reports to its parent.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] carrying
    /// any notifications.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area`. Overlays (such as an open option list) may draw
    /// past its bottom edge, but never outside the frame.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has input focus.
    ///
    /// The default implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
