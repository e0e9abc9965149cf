use super::*;

#[test]
fn default_is_idle_and_empty() {
    let state = DirectoryState::<u32>::default();
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.is_empty());
}

#[test]
fn begin_clears_previous_error() {
    let mut state = DirectoryState::<u32> { error: Some("boom".to_owned()), ..DirectoryState::default() };
    state.begin();
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert!(!state.is_empty());
}

#[test]
fn finish_ok_replaces_items() {
    let mut state = DirectoryState { items: vec![1], ..DirectoryState::default() };
    state.begin();
    state.finish(Ok(vec![2, 3]));
    assert_eq!(state.items, vec![2, 3]);
    assert!(!state.loading);
}

#[test]
fn finish_err_keeps_items_and_uses_server_message() {
    let mut state = DirectoryState { items: vec![1], ..DirectoryState::default() };
    state.begin();
    state.finish(Err(ApiError::Status { status: 500, message: Some("Service unavailable".to_owned()) }));
    assert_eq!(state.items, vec![1]);
    assert_eq!(state.error.as_deref(), Some("Service unavailable"));
}

#[test]
fn finish_err_without_message_uses_fallback() {
    let mut state = DirectoryState::<u32>::default();
    state.finish(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_FALLBACK));
}
