use super::*;

// =============================================================
// ToastKind
// =============================================================

#[test]
fn toast_kind_default_is_info() {
    assert_eq!(ToastKind::default(), ToastKind::Info);
}

#[test]
fn toast_kind_parse_accepts_known_names() {
    assert_eq!(ToastKind::parse("warning"), ToastKind::Warning);
    assert_eq!(ToastKind::parse("Success"), ToastKind::Success);
    assert_eq!(ToastKind::parse(" error "), ToastKind::Error);
}

#[test]
fn toast_kind_parse_falls_back_to_info() {
    assert_eq!(ToastKind::parse("fatal"), ToastKind::Info);
    assert_eq!(ToastKind::parse(""), ToastKind::Info);
}

#[test]
fn toast_kind_serializes_lowercase() {
    let json = serde_json::to_string(&ToastKind::Warning).unwrap();
    assert_eq!(json, "\"warning\"");
}

// =============================================================
// ToastState lifecycle
// =============================================================

#[test]
fn push_appends_exactly_one_toast_per_kind() {
    for kind in [ToastKind::Info, ToastKind::Warning, ToastKind::Success, ToastKind::Error] {
        let mut state = ToastState::default();
        state.push("hello", kind, DEFAULT_TOAST_MS);
        assert_eq!(state.len(), 1);
        assert_eq!(state.toasts[0].kind, kind);
        assert_eq!(state.toasts[0].class_name(), format!("toast toast-{}", kind.as_str()));
    }
}

#[test]
fn push_keeps_call_order_and_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push("first", ToastKind::Info, 1000);
    let b = state.push("second", ToastKind::Error, 1000);
    assert_ne!(a, b);
    let messages = state.toasts.iter().map(|t| t.message.as_str()).collect::<Vec<_>>();
    assert_eq!(messages, vec!["first", "second"]);
}

#[test]
fn begin_leaving_sets_fade_style() {
    let mut state = ToastState::default();
    let id = state.push("bye", ToastKind::Info, 1000);
    assert_eq!(state.toasts[0].style(), "");
    assert!(state.begin_leaving(id));
    assert!(state.is_leaving(id));
    assert!(state.toasts[0].style().contains("opacity: 0"));
    assert!(state.toasts[0].style().contains("translateX(100%)"));
}

#[test]
fn remove_only_drops_the_target_toast() {
    let mut state = ToastState::default();
    let a = state.push("a", ToastKind::Info, 1000);
    let b = state.push("b", ToastKind::Info, 5000);
    state.begin_leaving(a);
    assert!(state.remove(a));
    assert_eq!(state.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    assert!(!state.toasts[0].leaving);
}

#[test]
fn remove_and_leave_on_missing_id_are_noops() {
    let mut state = ToastState::default();
    assert!(!state.begin_leaving(42));
    assert!(!state.remove(42));
    assert!(state.is_empty());
}

#[test]
fn lifetime_adds_fade_to_duration() {
    let mut state = ToastState::default();
    state.push("x", ToastKind::Info, DEFAULT_TOAST_MS);
    assert_eq!(state.toasts[0].lifetime_ms(TOAST_FADE_MS), 4300);
}
