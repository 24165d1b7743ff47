//! `orderdesk-console`
//!
//! **Responsibility:** the presentation layer over `orderdesk-dispatch`.
//!
//! This crate provides:
//! - Display escaping and table rendering (HTML fragment and plain text)
//! - Result notices for every user action
//! - Form-field coercion into validated-on-insert `NewOrder`s
//! - A line-oriented console with explicit view state
//!
//! The domain crates never depend on this one.

pub mod command;
pub mod config;
pub mod escape;
pub mod form;
pub mod notice;
pub mod render;
pub mod session;

pub use command::{CommandError, ConsoleCommand};
pub use config::{ConfigError, ConsoleConfig};
pub use escape::escape_for_display;
pub use form::OrderForm;
pub use notice::{Notice, NoticeKind};
pub use session::{Console, Response, ViewState};
