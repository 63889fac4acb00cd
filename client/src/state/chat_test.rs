use super::*;

#[test]
fn starts_closed_with_greeting() {
    let chat = ChatState::default();
    assert!(!chat.open);
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].sender, Sender::Assistant);
    assert_eq!(chat.messages[0].text, GREETING);
}

#[test]
fn blank_draft_is_not_sent() {
    let mut chat = ChatState { draft: "   ".into(), ..ChatState::default() };
    assert!(!chat.send());
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.draft, "   ");
}

#[test]
fn send_trims_and_clears_draft() {
    let mut chat = ChatState { draft: "  hi there ".into(), ..ChatState::default() };
    assert!(chat.send());
    assert_eq!(chat.draft, "");
    let last = chat.messages.last().unwrap();
    assert_eq!(last.sender, Sender::Visitor);
    assert_eq!(last.text, "hi there");
}

#[test]
fn reply_is_canned() {
    let mut chat = ChatState::default();
    chat.push_reply();
    assert_eq!(chat.messages.last().unwrap().text, CANNED_REPLY);
    assert_eq!(REPLY_DELAY, Duration::from_secs(1));
}

#[test]
fn toggle_flips_open() {
    let mut chat = ChatState::default();
    chat.toggle();
    assert!(chat.open);
    chat.toggle();
    assert!(!chat.open);
}
