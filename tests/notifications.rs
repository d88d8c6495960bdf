use std::time::Duration;

use sitepilot::notifications::ToastService;

#[test]
fn test_push_and_read_back() {
    let toasts = ToastService::default();
    assert!(toasts.is_empty());

    toasts.push("Title", "Description");
    let active = toasts.active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Title");
    assert_eq!(active[0].description, "Description");
}

#[test]
fn test_expired_toasts_are_dropped() {
    let toasts = ToastService::new(Duration::from_millis(0));
    toasts.push("gone", "immediately");

    // Zero lifetime: never visible
    assert!(toasts.active().is_empty());

    toasts.prune_expired();
    assert!(toasts.is_empty());
}

#[test]
fn test_clones_share_queue() {
    let toasts = ToastService::new(Duration::from_secs(60));
    let handle = toasts.clone();

    handle.push("from clone", "shared queue");
    assert_eq!(toasts.active().len(), 1);
}

#[test]
fn test_toasts_keep_insertion_order() {
    let toasts = ToastService::new(Duration::from_secs(60));
    toasts.push("first", "");
    toasts.push("second", "");

    let active = toasts.active();
    assert_eq!(active[0].title, "first");
    assert_eq!(active[1].title, "second");
}
