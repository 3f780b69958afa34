use super::*;

fn terminal() -> Terminal<Vec<u8>, Vec<u8>> {
    Terminal::new(Vec::new(), Vec::new())
}

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("utf-8")
}

#[test]
fn streamed_reply_is_written_in_order() {
    let mut term = terminal();
    term.reply_started();
    term.fragment("A");
    term.fragment("B");
    term.fragment("C");
    term.reply_finished();

    let (out, err) = term.into_inner();
    assert_eq!(text(out), "assistant> ABC\n");
    assert!(err.is_empty());
}

#[test]
fn notice_goes_to_stderr_and_closes_partial_line() {
    let mut term = terminal();
    term.reply_started();
    term.fragment("half");
    term.notice(Notice::Failed);

    let (out, err) = term.into_inner();
    assert_eq!(text(out), "assistant> half\n");
    assert_eq!(text(err), "[Error] Failed to get response. Please try again.\n");
}

#[test]
fn notice_without_reply_leaves_stdout_alone() {
    let mut term = terminal();
    term.notice(Notice::RateLimit);
    let (out, err) = term.into_inner();
    assert!(out.is_empty());
    assert_eq!(text(err), "[Rate Limit] Too many requests. Please wait a moment.\n");
}

#[test]
fn notice_categories_have_distinct_titles() {
    let titles = [Notice::RateLimit.title(), Notice::CreditsRequired.title(), Notice::Failed.title()];
    assert_eq!(titles, ["Rate Limit", "Credits Required", "Error"]);
}
