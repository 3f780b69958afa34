//! Consumer-owned conversation state.
//!
//! The in-progress assistant reply is tracked by explicit index, set when the
//! reply placeholder is appended and cleared when the exchange settles. A
//! failed exchange removes that entry and nothing else, so the user's own
//! message survives for a resend.

use frames::Message;

use crate::error::ExchangeError;

#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    reply: Option<usize>,
    in_flight: bool,
}

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in chronological order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// The assistant reply currently being extended, if any.
    #[must_use]
    pub fn reply(&self) -> Option<&Message> {
        self.reply.and_then(|idx| self.messages.get(idx))
    }

    /// Append the user's message and mark an exchange in flight.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::Busy`] while another exchange is in flight;
    /// the conversation is left untouched.
    pub fn begin(&mut self, text: impl Into<String>) -> Result<(), ExchangeError> {
        if self.in_flight {
            return Err(ExchangeError::Busy);
        }
        self.messages.push(Message::user(text));
        self.in_flight = true;
        Ok(())
    }

    /// Append the empty assistant placeholder and return its index.
    pub fn start_reply(&mut self) -> usize {
        if let Some(idx) = self.reply {
            return idx;
        }
        self.messages.push(Message::assistant(String::new()));
        let idx = self.messages.len() - 1;
        self.reply = Some(idx);
        idx
    }

    /// Append `fragment` to the in-progress reply. No-op when none is open.
    pub fn extend_reply(&mut self, fragment: &str) {
        let Some(idx) = self.reply else {
            return;
        };
        if let Some(slot) = self.messages.get_mut(idx) {
            slot.content.push_str(fragment);
        }
    }

    /// Keep the reply and allow the next send.
    pub fn complete(&mut self) {
        self.reply = None;
        self.in_flight = false;
    }

    /// Drop the in-progress reply entirely and allow the next send.
    pub fn abort(&mut self) {
        if let Some(idx) = self.reply.take() {
            self.messages.remove(idx);
        }
        self.in_flight = false;
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
