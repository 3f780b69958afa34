//! Streaming consumer for the revision relay.
//!
//! [`exchange::RelayClient`] sends a conversation to the relay and streams the
//! reply into a [`conversation::Conversation`], reporting progress through a
//! [`render::Render`] implementation. The `revise` binary wires these to the
//! terminal.

pub mod command;
pub mod conversation;
pub mod error;
pub mod exchange;
pub mod render;

pub use conversation::Conversation;
pub use error::ExchangeError;
pub use exchange::{DEFAULT_RELAY_URL, RelayClient, stream_reply};
pub use render::{Notice, Render, Terminal};
