use super::*;
use catalog::ChatRole;
use catalog::chat::ASSISTANT_GREETING;

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_has_greeting_and_empty_input() {
    let state = ChatState::default();
    assert_eq!(state.transcript.len(), 1);
    assert_eq!(state.transcript.as_slice()[0].content, ASSISTANT_GREETING);
    assert!(state.input.is_empty());
}

// =============================================================
// Sending
// =============================================================

#[test]
fn send_appends_exactly_one_user_turn_and_clears_input() {
    let mut state = ChatState::default();
    let before: Vec<_> = state.transcript.as_slice().to_vec();
    state.input = "Looking for a budget espresso machine".to_owned();

    let id = state.send().expect("sent");

    assert_eq!(state.transcript.len(), before.len() + 1);
    assert_eq!(&state.transcript.as_slice()[..before.len()], before.as_slice());
    let last = state.transcript.last().expect("last");
    assert_eq!(last.id, id);
    assert_eq!(last.role, ChatRole::User);
    assert_eq!(last.content, "Looking for a budget espresso machine");
    assert!(state.input.is_empty());
}

#[test]
fn send_never_appends_assistant_reply() {
    let mut state = ChatState::default();
    state.input = "hello".to_owned();
    state.send();
    state.input = "anyone there?".to_owned();
    state.send();
    let roles: Vec<ChatRole> = state.transcript.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![ChatRole::Assistant, ChatRole::User, ChatRole::User]);
}

#[test]
fn send_stores_trimmed_content() {
    let mut state = ChatState::default();
    state.input = "  quiet keyboard under $80 \n".to_owned();
    state.send().expect("sent");
    assert_eq!(state.transcript.last().expect("last").content, "quiet keyboard under $80");
    assert!(state.input.is_empty());
}

#[test]
fn blank_input_is_ignored() {
    let mut state = ChatState::default();
    state.input = "   ".to_owned();
    assert!(state.send().is_none());
    assert_eq!(state.transcript.len(), 1);
    assert_eq!(state.input, "   ");
}

#[test]
fn receive_reply_appends_after_user_turns() {
    let mut state = ChatState::default();
    state.input = "Need a tent".to_owned();
    state.send();
    state.receive_reply("How many people?");
    let last = state.transcript.last().expect("last");
    assert_eq!(last.role, ChatRole::Assistant);
    assert_eq!(last.content, "How many people?");
    assert_eq!(state.transcript.len(), 3);
}
