//! Streaming exchange with the revision relay.
//!
//! DESIGN
//! ======
//! One exchange = one POST carrying the whole conversation. The response body
//! is read chunk by chunk; each chunk is fed to [`EventDecoder`] and every
//! fragment it yields is appended to the reply placeholder before the next
//! chunk is awaited. `[DONE]` stops reading at once and drops the connection.
//!
//! Any failure after `begin` settles the conversation the same way: the
//! placeholder is removed and one notice is raised.

use std::fmt::Display;

use frames::{ChatRequest, EventDecoder, Message, Mode, StreamEvent};
use futures_util::{Stream, StreamExt};
use tracing::{debug, warn};

use crate::conversation::Conversation;
use crate::error::ExchangeError;
use crate::render::Render;

/// Default relay endpoint for a locally running `server`.
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:3000/functions/v1/revision-assistant";

pub struct RelayClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl RelayClient {
    /// # Errors
    ///
    /// Returns [`ExchangeError::Transport`] if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Result<Self, ExchangeError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, url: url.into(), api_key })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send `text` as the next user message and stream the reply into
    /// `conversation`. Returns the full reply text.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::EmptyInput`] / [`ExchangeError::Busy`]: nothing sent,
    ///   conversation untouched, no notice
    /// - anything else: reply placeholder removed, notice raised
    pub async fn send<R: Render>(
        &self,
        conversation: &mut Conversation,
        text: &str,
        mode: Mode,
        render: &mut R,
    ) -> Result<String, ExchangeError> {
        if text.trim().is_empty() {
            return Err(ExchangeError::EmptyInput);
        }
        conversation.begin(text)?;

        let opened = self.open(conversation.messages(), mode).await;
        let outcome = match opened {
            Ok(response) => consume(response.bytes_stream(), conversation, render).await,
            Err(e) => Err(e),
        };
        settle(conversation, render, outcome)
    }

    async fn open(&self, messages: &[Message], mode: Mode) -> Result<reqwest::Response, ExchangeError> {
        let body = ChatRequest { messages: messages.to_vec(), mode };
        let mut request = self.http.post(&self.url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        debug!(url = %self.url, %mode, messages = messages.len(), "exchange: sending");
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ExchangeError::from_status(status.as_u16(), &body))
    }
}

/// Stream a reply from `chunks` into a conversation whose exchange has
/// already begun, then settle it. [`RelayClient::send`] does this with the
/// relay's response body.
///
/// # Errors
///
/// Returns [`ExchangeError::Stream`] if a chunk fails; the partial reply is
/// removed from `conversation`.
pub async fn stream_reply<S, B, E, R>(
    conversation: &mut Conversation,
    chunks: S,
    render: &mut R,
) -> Result<String, ExchangeError>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
    R: Render,
{
    let outcome = consume(chunks, conversation, render).await;
    settle(conversation, render, outcome)
}

async fn consume<S, B, E, R>(chunks: S, conversation: &mut Conversation, render: &mut R) -> Result<String, ExchangeError>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
    R: Render,
{
    conversation.start_reply();
    render.reply_started();

    let mut decoder = EventDecoder::new();
    let mut reply = String::new();
    let mut chunks = std::pin::pin!(chunks);
    while let Some(chunk) = chunks.next().await {
        let chunk = chunk.map_err(|e| ExchangeError::Stream(e.to_string()))?;
        apply(decoder.push(chunk.as_ref()), &mut reply, conversation, render);
        if decoder.is_finished() {
            break;
        }
    }
    apply(decoder.finish(), &mut reply, conversation, render);

    render.reply_finished();
    Ok(reply)
}

fn apply<R: Render>(events: Vec<StreamEvent>, reply: &mut String, conversation: &mut Conversation, render: &mut R) {
    for event in events {
        match event {
            StreamEvent::Fragment(text) => {
                reply.push_str(&text);
                conversation.extend_reply(&text);
                render.fragment(&text);
            }
            StreamEvent::Done => {}
        }
    }
}

fn settle<R: Render>(
    conversation: &mut Conversation,
    render: &mut R,
    outcome: Result<String, ExchangeError>,
) -> Result<String, ExchangeError> {
    match &outcome {
        Ok(reply) => {
            conversation.complete();
            debug!(chars = reply.chars().count(), "exchange: complete");
        }
        Err(e) => {
            conversation.abort();
            warn!(error = %e, "exchange: failed");
            if let Some(notice) = e.notice() {
                render.notice(notice);
            }
        }
    }
    outcome
}

#[cfg(test)]
#[path = "exchange_test.rs"]
mod tests;
