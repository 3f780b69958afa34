//! Interactive input parsing for the `revise` REPL.

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Plain text to send as the next user message.
    Send(&'a str),
    /// `/mode <tag>`
    Mode(&'a str),
    /// `/modes`
    Modes,
    /// `/history`
    History,
    /// `/quit` or `/exit`
    Quit,
    /// A `/word` that is not a known command.
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Self::Send(line);
        };
        let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        match name {
            "mode" => Self::Mode(arg.trim()),
            "modes" => Self::Modes,
            "history" => Self::History,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(name),
        }
    }
}

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;
