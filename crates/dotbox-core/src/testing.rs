use crate::command::{Action, Command, CommandInner};
use crate::event::HostEvent;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// `TestProgram` exercises the init/update/view cycle in a plain `#[test]`
/// function: no tokio runtime or TTY required. Synchronous messages produced
/// by commands are queued and flushed by
/// [`drain_messages`](TestProgram::drain_messages); futures are ignored.
/// Host events go through the model's [`Document`](crate::Document) exactly
/// as the real runtime would route them.
///
/// # Example
///
/// ```rust,ignore
/// use dotbox_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<App>::new(flags);
/// prog.render_string(40, 10);                 // records layout for hit-testing
/// prog.dispatch(HostEvent::PointerDown { column: 2, row: 1 });
/// assert!(prog.model().picker.is_open());
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit: false,
        };
        program.collect_sync_messages(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// Synchronous messages returned by `update` are queued, not processed;
    /// call [`drain_messages`](TestProgram::drain_messages) to flush them.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Route a host event through the model's document, then drain.
    ///
    /// Returns the number of messages the document produced. A model
    /// without a document produces none.
    pub fn dispatch(&mut self, event: HostEvent) -> usize {
        let messages = match self.model.document() {
            Some(document) => document.dispatch(&event),
            None => Vec::new(),
        };
        let count = messages.len();
        for msg in messages {
            self.send(msg);
        }
        self.drain_messages();
        count
    }

    /// Process queued messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Whether any command so far asked the program to quit.
    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect_sync_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None | CommandInner::Future(_) => {}
            CommandInner::Action(Action::Message(msg)) => self.pending_messages.push(msg),
            CommandInner::Action(Action::Quit) => self.quit = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
        }
    }
}

/// Flatten a buffer into text, rows separated by newlines.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, EventTarget, ListenerGuard, ListenerKind};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::widgets::Paragraph;

    struct Tally {
        document: Document<TallyMsg>,
        presses: u32,
        echoes: Vec<String>,
        _keys: ListenerGuard,
    }

    #[derive(Debug)]
    enum TallyMsg {
        Pressed,
        Echo(String),
        Quit,
    }

    impl Model for Tally {
        type Message = TallyMsg;
        type Flags = ();

        fn init(_: ()) -> (Self, Command<TallyMsg>) {
            let document = Document::new();
            let keys = document.add_listener(
                ListenerKind::KeyDown,
                Box::new(|ev| match ev.as_key().map(|k| k.code) {
                    Some(KeyCode::Char('q')) => Some(TallyMsg::Quit),
                    Some(_) => Some(TallyMsg::Pressed),
                    None => None,
                }),
            );
            (
                Tally {
                    document,
                    presses: 0,
                    echoes: Vec::new(),
                    _keys: keys,
                },
                Command::message(TallyMsg::Echo("ready".into())),
            )
        }

        fn update(&mut self, msg: TallyMsg) -> Command<TallyMsg> {
            match msg {
                TallyMsg::Pressed => {
                    self.presses += 1;
                    Command::message(TallyMsg::Echo(format!("press {}", self.presses)))
                }
                TallyMsg::Echo(s) => {
                    self.echoes.push(s);
                    Command::none()
                }
                TallyMsg::Quit => Command::quit(),
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let text = format!("Presses: {}", self.presses);
            frame.render_widget(Paragraph::new(text), frame.area());
        }

        fn document(&self) -> Option<&Document<TallyMsg>> {
            Some(&self.document)
        }
    }

    fn key(c: char) -> HostEvent {
        HostEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn init_messages_wait_for_drain() {
        let mut prog = TestProgram::<Tally>::new(());
        assert!(prog.model().echoes.is_empty());
        prog.drain_messages();
        assert_eq!(prog.model().echoes, vec!["ready"]);
    }

    #[test]
    fn dispatch_routes_through_document_and_drains() {
        let mut prog = TestProgram::<Tally>::new(());
        assert_eq!(prog.dispatch(key('a')), 1);
        assert_eq!(prog.model().presses, 1);
        assert_eq!(prog.model().echoes, vec!["ready", "press 1"]);
    }

    #[test]
    fn pointer_events_without_listener_are_ignored() {
        let mut prog = TestProgram::<Tally>::new(());
        assert_eq!(prog.dispatch(HostEvent::PointerDown { column: 0, row: 0 }), 0);
        assert_eq!(prog.model().presses, 0);
    }

    #[test]
    fn quit_is_recorded() {
        let mut prog = TestProgram::<Tally>::new(());
        prog.dispatch(key('q'));
        assert!(prog.has_quit());
    }

    #[test]
    fn render_reflects_state() {
        let mut prog = TestProgram::<Tally>::new(());
        prog.dispatch(key('x'));
        prog.dispatch(key('y'));
        assert!(prog.render_string(20, 1).contains("Presses: 2"));
    }
}
