use super::*;

// =============================================================
// ChatSessions
// =============================================================

#[test]
fn chat_sessions_default_empty_without_active() {
    let sessions = ChatSessions::default();
    assert!(sessions.items.is_empty());
    assert!(sessions.active().is_none());
    assert!(sessions.active_title().is_none());
}

#[test]
fn create_numbers_titles_from_list_length() {
    let mut sessions = ChatSessions::default();
    let first = sessions.create();
    let second = sessions.create();
    assert_eq!(first.title, "New chat 1");
    assert_eq!(second.title, "New chat 2");
    assert_eq!(sessions.items.len(), 2);
}

#[test]
fn create_activates_new_session() {
    let mut sessions = ChatSessions::default();
    sessions.create();
    let second = sessions.create();
    assert_eq!(sessions.active_id.as_deref(), Some(second.id.as_str()));
    assert_eq!(sessions.active_title(), Some("New chat 2"));
}

#[test]
fn open_switches_to_existing_session() {
    let mut sessions = ChatSessions::default();
    let first = sessions.create();
    sessions.create();
    assert!(sessions.open(&first.id));
    assert_eq!(sessions.active_title(), Some("New chat 1"));
}

#[test]
fn open_unknown_id_keeps_current_session() {
    let mut sessions = ChatSessions::default();
    let first = sessions.create();
    assert!(!sessions.open("missing"));
    assert_eq!(sessions.active_id.as_deref(), Some(first.id.as_str()));
}

// =============================================================
// start_new_chat
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn start_new_chat_opens_session_and_resets_stores() {
    use crate::state::selection::PendingFile;

    let mut sessions = ChatSessions::default();
    let mut chat = ChatState::default();
    let mut selection = SelectionStore::default();
    chat.push_user("old question");
    chat.push_bot("old answer");
    selection.add_batch([PendingFile::new("a.txt", 10, "text/plain")]);

    let session = start_new_chat(&mut sessions, &mut chat, &mut selection);

    assert_eq!(sessions.active_title(), Some("New chat 1"));
    assert_eq!(sessions.active_id.as_deref(), Some(session.id.as_str()));
    assert!(chat.bubbles.is_empty());
    assert!(chat.history.is_empty());
    assert!(selection.is_empty());
}

#[test]
fn greeting_lands_as_only_bubble_after_new_chat() {
    let mut sessions = ChatSessions::default();
    let mut chat = ChatState::default();
    let mut selection = SelectionStore::default();
    chat.push_user("old question");

    start_new_chat(&mut sessions, &mut chat, &mut selection);
    chat.push_bot(NEW_CHAT_GREETING);

    assert_eq!(chat.bubbles.len(), 1);
    assert_eq!(chat.bubbles[0].side, crate::state::chat::BubbleSide::Left);
    assert_eq!(chat.bubbles[0].text, NEW_CHAT_GREETING);
}

#[test]
fn second_new_chat_keeps_first_in_sidebar() {
    let mut sessions = ChatSessions::default();
    let mut chat = ChatState::default();
    let mut selection = SelectionStore::default();
    start_new_chat(&mut sessions, &mut chat, &mut selection);
    start_new_chat(&mut sessions, &mut chat, &mut selection);
    assert_eq!(sessions.items.len(), 2);
    assert_eq!(sessions.active_title(), Some("New chat 2"));
}

// =============================================================
// Constants
// =============================================================

#[test]
fn greeting_delay_is_short() {
    assert_eq!(GREETING_DELAY.as_millis(), 100);
    assert!(!NEW_CHAT_GREETING.is_empty());
}
