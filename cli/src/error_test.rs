use super::*;

#[test]
fn from_status_reads_relay_error_body() {
    let err = ExchangeError::from_status(429, r#"{"error":"Rate limit exceeded. Please try again later."}"#);
    assert!(matches!(&err, ExchangeError::RateLimited { message } if message.starts_with("Rate limit exceeded")));
    assert_eq!(err.notice(), Some(Notice::RateLimit));
}

#[test]
fn from_status_maps_credits() {
    let err = ExchangeError::from_status(402, r#"{"error":"AI credits depleted. Please add more credits."}"#);
    assert_eq!(err.notice(), Some(Notice::CreditsRequired));
}

#[test]
fn from_status_other_codes_are_generic() {
    for status in [400, 500, 502] {
        let err = ExchangeError::from_status(status, r#"{"error":"AI service error"}"#);
        assert!(matches!(&err, ExchangeError::Relay { status: s, message } if *s == status && message == "AI service error"));
        assert_eq!(err.notice(), Some(Notice::Failed));
    }
}

#[test]
fn from_status_unreadable_body_keeps_category() {
    let err = ExchangeError::from_status(429, "<html>slow down</html>\n");
    assert!(matches!(&err, ExchangeError::RateLimited { message } if message == "<html>slow down</html>"));
    assert_eq!(ExchangeError::from_status(503, "").notice(), Some(Notice::Failed));
}

#[test]
fn rejected_sends_raise_no_notice() {
    assert_eq!(ExchangeError::Busy.notice(), None);
    assert_eq!(ExchangeError::EmptyInput.notice(), None);
}

#[test]
fn stream_failure_is_generic() {
    assert_eq!(ExchangeError::Stream("connection reset".into()).notice(), Some(Notice::Failed));
}
