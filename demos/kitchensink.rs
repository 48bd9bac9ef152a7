//! # Kitchensink Example
//!
//! A form of comboboxes loaded from a TOML file:
//! - One `[[field]]` table per combobox, parsed into `ComboboxConfig`
//! - Every combobox mounted on the app's `Document`
//! - Focus cycling with `FocusRing` (Tab / Shift+Tab, or click a field)
//! - The latest notification shown in a status line
//!
//! Logs go to a file because the terminal belongs to the UI.
//!
//! Run with: `cargo run --example kitchensink -- --config demos/kitchensink.toml`

use anyhow::Context;
use clap::Parser;
use dotbox::crossterm::event::{KeyCode, KeyModifiers};
use dotbox::ratatui::layout::{Constraint, Layout, Rect};
use dotbox::ratatui::style::{Color, Modifier, Style};
use dotbox::ratatui::text::{Line, Span};
use dotbox::ratatui::widgets::Paragraph;
use dotbox::ratatui::Frame;
use dotbox::widgets::combobox::{self, Combobox};
use dotbox::widgets::config::ComboboxConfig;
use dotbox::widgets::focus::FocusRing;
use dotbox::{
    Command, Component, Document, EventTarget, HostEvent, ListenerGuard, ListenerKind, Model,
};
use serde::Deserialize;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Height of one field: label, bordered box, error line.
const FIELD_HEIGHT: u16 = 5;

#[derive(Parser, Debug)]
#[command(name = "kitchensink", about = "Every combobox mode on one screen")]
struct Cli {
    /// Form definition with one [[field]] table per combobox.
    #[arg(long, default_value = "demos/kitchensink.toml")]
    config: PathBuf,

    /// Log file.
    #[arg(long, default_value = "kitchensink.log")]
    log: PathBuf,
}

#[derive(Debug, Deserialize)]
struct FormFile {
    #[serde(default)]
    field: Vec<ComboboxConfig>,
}

struct App {
    document: Document<Msg>,
    fields: Vec<Combobox>,
    focus: FocusRing,
    status: String,
    /// Field that owned the open list when the current press arrived.
    pointer_owner: Option<usize>,
    _pointer: ListenerGuard,
    _keys: ListenerGuard,
}

#[derive(Debug)]
enum Msg {
    Field(usize, combobox::Message),
    PointerPressed,
    FocusNext,
    FocusPrev,
    Quit,
}

fn lift(index: usize) -> impl Fn(combobox::Message) -> Msg + Send + Sync + Clone + 'static {
    move |m| Msg::Field(index, m)
}

impl App {
    fn label(&self, index: usize) -> String {
        match self.fields[index].label() {
            "" => format!("field {}", index + 1),
            label => label.to_string(),
        }
    }

    fn describe(&self, index: usize, msg: &combobox::Message) -> Option<String> {
        let name = self.label(index);
        let text = match msg {
            combobox::Message::Changed(selection) => {
                format!("{name}: value is now {:?}", selection.values())
            }
            combobox::Message::Input(text) => format!("{name}: searching \"{text}\""),
            combobox::Message::TagRemoved(value) => format!("{name}: removed tag \"{value}\""),
            combobox::Message::Focused => format!("{name}: focused"),
            combobox::Message::Blurred => format!("{name}: blurred"),
            _ => return None,
        };
        Some(text)
    }

    fn move_focus(&mut self, (prev, cur): (usize, usize)) -> Command<Msg> {
        if prev == cur {
            return Command::none();
        }
        let blurred = self.fields[prev].blur().map(lift(prev));
        let focused = self.fields[cur].focus().map(lift(cur));
        Command::batch([blurred, focused])
    }
}

impl Model for App {
    type Message = Msg;
    type Flags = Vec<ComboboxConfig>;

    fn init(configs: Vec<ComboboxConfig>) -> (Self, Command<Msg>) {
        let document = Document::new();

        // Registered before the fields so it runs first on every press.
        let pointer = document.add_listener(
            ListenerKind::PointerDown,
            Box::new(|_: &HostEvent| Some(Msg::PointerPressed)),
        );

        let mut fields: Vec<Combobox> = configs.into_iter().map(Combobox::from_config).collect();
        for (i, field) in fields.iter_mut().enumerate() {
            field.mount(&document.scope(lift(i)));
        }

        let keys = document.add_listener(
            ListenerKind::KeyDown,
            Box::new(|ev: &HostEvent| {
                let key = ev.as_key()?;
                match (key.code, key.modifiers) {
                    (KeyCode::Char('c') | KeyCode::Char('q'), m)
                        if m.contains(KeyModifiers::CONTROL) =>
                    {
                        Some(Msg::Quit)
                    }
                    (KeyCode::Tab, _) => Some(Msg::FocusNext),
                    (KeyCode::BackTab, _) => Some(Msg::FocusPrev),
                    _ => None,
                }
            }),
        );

        let focus = FocusRing::new(fields.len());
        let init = match fields.first_mut() {
            Some(first) => first.focus().map(lift(0)),
            None => Command::none(),
        };
        tracing::info!(fields = fields.len(), "kitchensink started");

        (
            App {
                document,
                fields,
                focus,
                status: String::from("Tab to move between fields, Ctrl-Q to quit"),
                pointer_owner: None,
                _pointer: pointer,
                _keys: keys,
            },
            init,
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::PointerPressed => {
                self.pointer_owner = self.fields.iter().position(Combobox::is_open);
                Command::none()
            }
            Msg::Field(i, m) => {
                // An open list sits on top of the fields below it: while one is
                // open, presses belong to it alone.
                if matches!(m, combobox::Message::PointerDown { .. })
                    && self.pointer_owner.is_some_and(|owner| owner != i)
                {
                    return Command::none();
                }
                if let Some(text) = self.describe(i, &m) {
                    self.status = text;
                }
                let refocus = if m == combobox::Message::Focused {
                    let (prev, cur) = self.focus.focus(i);
                    if prev != cur {
                        self.fields[prev].blur().map(lift(prev))
                    } else {
                        Command::none()
                    }
                } else {
                    Command::none()
                };
                let cmd = self.fields[i].update(m).map(lift(i));
                Command::batch([refocus, cmd])
            }
            Msg::FocusNext => {
                let step = self.focus.next();
                self.move_focus(step)
            }
            Msg::FocusPrev => {
                let step = self.focus.prev();
                self.move_focus(step)
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        let [title_area, form_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new("dotbox kitchensink").style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            title_area,
        );

        let slots: Vec<Rect> = (0..self.fields.len())
            .map(|i| {
                let y = form_area.y + i as u16 * FIELD_HEIGHT;
                let height = FIELD_HEIGHT.min(form_area.bottom().saturating_sub(y));
                Rect::new(form_area.x, y, form_area.width.min(48), height)
            })
            .collect();

        // The open field last, so its list is drawn over the fields below.
        let open = self.fields.iter().position(Combobox::is_open);
        for (i, (field, slot)) in self.fields.iter().zip(&slots).enumerate() {
            if Some(i) != open && slot.height > 0 {
                field.view(frame, *slot);
            }
        }
        if let Some(i) = open {
            self.fields[i].view(frame, slots[i]);
        }

        frame.render_widget(
            Paragraph::new(self.status.as_str()).style(Style::default().fg(Color::Green)),
            status_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Tab", Style::default().fg(Color::Cyan)),
                Span::raw(" next  "),
                Span::styled("Shift+Tab", Style::default().fg(Color::Cyan)),
                Span::raw(" prev  "),
                Span::styled("Enter", Style::default().fg(Color::Cyan)),
                Span::raw(" open/select  "),
                Span::styled("Esc", Style::default().fg(Color::Cyan)),
                Span::raw(" close  "),
                Span::styled("Ctrl-Q", Style::default().fg(Color::Cyan)),
                Span::raw(" quit"),
            ]))
            .style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }

    fn document(&self) -> Option<&Document<Msg>> {
        Some(&self.document)
    }
}

fn init_logging(path: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let file = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("kitchensink.log"));
    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,dotbox_widgets=debug".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli.log);

    let text = std::fs::read_to_string(&cli.config)
        .with_context(|| format!("reading {}", cli.config.display()))?;
    let form: FormFile =
        toml::from_str(&text).with_context(|| format!("parsing {}", cli.config.display()))?;

    let app = dotbox::run::<App>(form.field)
        .await
        .context("running the kitchensink")?;
    let answers: Vec<_> = app.fields.iter().map(|f| f.selection().values().join(",")).collect();
    tracing::info!(?answers, "kitchensink finished");
    Ok(())
}
