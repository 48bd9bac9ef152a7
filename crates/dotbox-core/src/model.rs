use crate::command::Command;
use crate::document::Document;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives a continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`] for early side effects.
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. Host events (keys, mouse presses) are handed to the model's
///    [`Document`], whose listeners turn them into messages.
/// 4. [`update`](Model::update) processes each message, mutates state, and
///    optionally returns a [`Command`] for further work.
/// 5. Steps 2--4 repeat until a command quits.
///
/// # Example
///
/// ```rust,ignore
/// use dotbox_core::{Command, Document, EventTarget, ListenerKind, Model};
/// use ratatui::Frame;
///
/// struct App {
///     document: Document<Msg>,
///     picker: Combobox,
/// }
///
/// enum Msg {
///     Picker(combobox::Message),
/// }
///
/// impl Model for App {
///     type Message = Msg;
///     type Flags = Vec<String>;
///
///     fn init(options: Vec<String>) -> (Self, Command<Msg>) {
///         let document = Document::new();
///         let mut picker = Combobox::new(options);
///         picker.mount(&document.scope(Msg::Picker));
///         (App { document, picker }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Picker(m) => self.picker.update(m).map(Msg::Picker),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         let area = frame.area();
///         self.picker.view(frame, area);
///     }
///
///     fn document(&self) -> Option<&Document<Msg>> {
///         Some(&self.document)
///     }
/// }
/// ```
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// Called after every update and on the initial render. Widgets may
    /// record layout information here (for pointer hit-testing), but must
    /// not change anything observable through `update`.
    fn view(&self, frame: &mut Frame);

    /// The document host events are dispatched to.
    ///
    /// Returning `None` (the default) means the model receives no host
    /// events at all.
    fn document(&self) -> Option<&Document<Self::Message>> {
        None
    }
}
