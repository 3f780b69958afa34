//! Presentation seam for streamed replies.

use std::io::{self, Stderr, Stdout, Write};

/// User-visible notice raised when an exchange fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    RateLimit,
    CreditsRequired,
    Failed,
}

impl Notice {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::RateLimit => "Rate Limit",
            Self::CreditsRequired => "Credits Required",
            Self::Failed => "Error",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::RateLimit => "Too many requests. Please wait a moment.",
            Self::CreditsRequired => "AI credits depleted. Please add more credits.",
            Self::Failed => "Failed to get response. Please try again.",
        }
    }
}

/// Receives reply progress. `fragment` is called once per appended fragment,
/// in arrival order.
pub trait Render {
    fn reply_started(&mut self) {}

    fn fragment(&mut self, text: &str);

    fn reply_finished(&mut self) {}

    fn notice(&mut self, notice: Notice);
}

/// Writes the reply to `out` as it streams and notices to `err`.
pub struct Terminal<O, E> {
    out: O,
    err: E,
    mid_reply: bool,
}

impl Terminal<Stdout, Stderr> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Terminal<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err, mid_reply: false }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

// Write failures are ignored.
impl<O: Write, E: Write> Render for Terminal<O, E> {
    fn reply_started(&mut self) {
        self.mid_reply = true;
        write!(self.out, "assistant> ").ok();
        self.out.flush().ok();
    }

    fn fragment(&mut self, text: &str) {
        self.out.write_all(text.as_bytes()).ok();
        self.out.flush().ok();
    }

    fn reply_finished(&mut self) {
        self.mid_reply = false;
        writeln!(self.out).ok();
        self.out.flush().ok();
    }

    fn notice(&mut self, notice: Notice) {
        if self.mid_reply {
            self.mid_reply = false;
            writeln!(self.out).ok();
            self.out.flush().ok();
        }
        writeln!(self.err, "[{}] {}", notice.title(), notice.description()).ok();
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
