//! **dotbox** -- a terminal combobox and the Elm-style runtime it lives in.
//!
//! This umbrella crate re-exports everything needed to build a dotbox
//! application from a single dependency:
//!
//! * All public items of [`dotbox_core`] at the crate root ([`Model`],
//!   [`Component`], [`Command`], [`Document`], [`Program`], [`run`], ...).
//! * [`widgets`], re-exporting [`dotbox_widgets`] (the combobox and its
//!   building blocks).
//! * [`ratatui`], [`crossterm`] and [`tokio`], so downstream crates do not
//!   need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use dotbox::widgets::combobox::{self, Combobox};
//! use dotbox::{Command, Component, Document, Model};
//! use ratatui::Frame;
//!
//! struct App {
//!     document: Document<Msg>,
//!     country: Combobox,
//! }
//!
//! enum Msg {
//!     Country(combobox::Message),
//! }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let document = Document::new();
//!         let mut country = Combobox::new([("pe", "Peru"), ("cl", "Chile")]).with_searchable(true);
//!         country.mount(&document.scope(Msg::Country));
//!         (App { document, country }, Command::none())
//!     }
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Country(m) => self.country.update(m).map(Msg::Country),
//!         }
//!     }
//!     fn view(&self, frame: &mut Frame) {
//!         let area = frame.area();
//!         self.country.view(frame, area);
//!     }
//!     fn document(&self) -> Option<&Document<Msg>> {
//!         Some(&self.document)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     dotbox::run::<App>(()).await.unwrap();
//! }
//! ```

pub use dotbox_core::*;
pub mod widgets {
    pub use dotbox_widgets::*;
}

pub use crossterm;
pub use ratatui;
pub use tokio;
