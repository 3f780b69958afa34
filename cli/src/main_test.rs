use super::*;

#[test]
fn failures_with_a_notice_are_not_printed_again() {
    for err in [
        ExchangeError::RateLimited { message: "Rate limit exceeded. Please try again later.".into() },
        ExchangeError::CreditsExhausted { message: "AI credits depleted. Please add more credits.".into() },
        ExchangeError::Relay { status: 500, message: "AI service error".into() },
        ExchangeError::Stream("connection reset".into()),
    ] {
        assert_eq!(failure_message(&CliError::Exchange(err)), None);
    }
}

#[test]
fn failures_without_a_notice_print_their_message() {
    assert_eq!(failure_message(&CliError::Exchange(ExchangeError::EmptyInput)).as_deref(), Some("message is empty"));

    let input = CliError::Input(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed"));
    assert_eq!(failure_message(&input).as_deref(), Some("failed to read input: stdin closed"));
}
