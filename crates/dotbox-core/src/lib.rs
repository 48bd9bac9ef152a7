//! Core runtime for **dotbox** terminal widgets.
//!
//! `dotbox-core` provides the traits, types, and runtime that dotbox widgets
//! live in. The design follows the [Elm Architecture]: state changes happen in
//! `update`, rendering in `view`, and side effects (including notifications a
//! widget reports to its parent) travel as [`Command`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Notifications and side effects returned from `update` |
//! | [`HostEvent`] | Key presses and pointer presses, as seen host-wide |
//! | [`Document`] | Registry of host-wide listeners with scoped lifetimes |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] |
//!
//! # Event flow
//!
//! 1. The runtime reads a terminal event and converts it into a [`HostEvent`].
//! 2. The model's [`Document`] hands it to every matching listener; each one
//!    maps it to a message (or declines).
//! 3. [`Model::update`] processes the messages and returns [`Command`]s.
//! 4. The runtime re-renders through [`Model::view`].
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod document;
pub mod event;
pub mod model;
pub mod runtime;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use document::{Document, EventTarget, ListenerGuard, ListenerId, ListenerKind, Scope};
pub use event::HostEvent;
pub use model::Model;
pub use runtime::{Program, ProgramError, ProgramOptions};

/// Run a dotbox application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
