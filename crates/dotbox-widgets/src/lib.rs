//! Form widgets for the **dotbox** terminal toolkit.
//!
//! Every widget implements [`dotbox_core::Component`], so it can be embedded
//! in any [`dotbox_core::Model`] and placed with ordinary [`ratatui`]
//! layouts. Widgets that need host-wide input (clicks outside their own
//! area, keys while open) attach to the model's
//! [`Document`](dotbox_core::Document) with `mount`.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`combobox`] | Dropdown with single/multi select, search, creation, tags and checkboxes |
//!
//! # Building blocks
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`option`] | [`OptionItem`](option::OptionItem) and option normalization |
//! | [`value`] | [`Selection`](value::Selection): one value or an ordered set |
//! | [`validation`] | Required-field rules and [`ValidationError`](validation::ValidationError) |
//! | [`config`] | TOML/serde configuration for widgets |
//! | [`highlight`] | Wrapping keyboard highlight with scroll offset |
//! | [`focus`] | [`FocusRing`](focus::FocusRing) for moving focus between widgets |
//! | [`key`] | Key-binding helpers |
//! | [`chrome`] | Field borders reflecting focus, error and disabled state |
//! | [`base`] | Mount bookkeeping shared by widgets |
//! | [`text`] | Display-width and truncation helpers |

pub mod base;
pub mod chrome;
pub mod combobox;
pub mod config;
pub mod focus;
pub mod highlight;
pub mod key;
pub mod option;
pub mod text;
pub mod validation;
pub mod value;
