use super::*;

#[test]
fn plain_text_is_sent_verbatim() {
    assert_eq!(Command::parse("Explain osmosis"), Command::Send("Explain osmosis"));
    assert_eq!(Command::parse("  spaced  "), Command::Send("  spaced  "));
    assert_eq!(Command::parse(""), Command::Send(""));
}

#[test]
fn mode_takes_trimmed_argument() {
    assert_eq!(Command::parse("/mode  flashcards "), Command::Mode("flashcards"));
    assert_eq!(Command::parse("/mode"), Command::Mode(""));
}

#[test]
fn bare_commands() {
    assert_eq!(Command::parse("/modes"), Command::Modes);
    assert_eq!(Command::parse("/history"), Command::History);
    assert_eq!(Command::parse(" /quit"), Command::Quit);
    assert_eq!(Command::parse("/exit"), Command::Quit);
}

#[test]
fn unknown_slash_word() {
    assert_eq!(Command::parse("/summarise this"), Command::Unknown("summarise"));
}
