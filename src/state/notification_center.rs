// ============================================================================
// NOTIFICATION CENTER - toast queue with subscribers
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::Callback;

use crate::models::notification::{Notification, NotificationKind};
use crate::utils::storage::{load_json, save_json, KeyValueStore};
use crate::utils::STORAGE_KEY_PENDING_TOASTS;

#[derive(Clone, Default)]
pub struct NotificationCenter {
    items: Rc<RefCell<Vec<Notification>>>,
    subscribers: Rc<RefCell<Vec<Callback<Vec<Notification>>>>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) -> String {
        self.push(Notification::new(NotificationKind::Success, message))
    }

    pub fn error(&self, message: impl Into<String>) -> String {
        self.push(Notification::new(NotificationKind::Error, message))
    }

    pub fn info(&self, message: impl Into<String>) -> String {
        self.push(Notification::new(NotificationKind::Info, message))
    }

    /// Adds a notification and returns its id
    pub fn push(&self, notification: Notification) -> String {
        let id = notification.id.clone();
        self.items.borrow_mut().push(notification);
        self.notify();
        id
    }

    /// Stores a notification for the next page instead of showing it now.
    /// Used right before a navigation that reloads the document.
    pub fn defer(&self, store: &dyn KeyValueStore, kind: NotificationKind, message: impl Into<String>) {
        let mut pending: Vec<Notification> =
            load_json(store, STORAGE_KEY_PENDING_TOASTS).unwrap_or_default();
        pending.push(Notification::new(kind, message));
        if let Err(e) = save_json(store, STORAGE_KEY_PENDING_TOASTS, &pending) {
            log::error!("❌ Could not keep notification across navigation: {}", e);
        }
    }

    /// Shows and clears whatever a previous page deferred
    pub fn restore_deferred(&self, store: &dyn KeyValueStore) {
        let pending: Vec<Notification> =
            load_json(store, STORAGE_KEY_PENDING_TOASTS).unwrap_or_default();
        if let Err(e) = store.remove_item(STORAGE_KEY_PENDING_TOASTS) {
            log::warn!("⚠️ Could not clear deferred notifications: {}", e);
        }
        for notification in pending {
            self.push(notification);
        }
    }

    pub fn dismiss(&self, id: &str) {
        let removed = {
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|n| n.id != id);
            items.len() != before
        };
        if removed {
            self.notify();
        }
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.borrow().clone()
    }

    pub fn subscribe(&self, callback: Callback<Vec<Notification>>) {
        self.subscribers.borrow_mut().push(callback);
    }

    fn notify(&self) {
        let snapshot = self.items();
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber.emit(snapshot.clone());
        }
    }
}

impl PartialEq for NotificationCenter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn push_and_dismiss_notify_subscribers() {
        let center = NotificationCenter::new();
        let seen = Rc::new(RefCell::new(Vec::<usize>::new()));
        {
            let seen = seen.clone();
            center.subscribe(Callback::from(move |items: Vec<Notification>| {
                seen.borrow_mut().push(items.len())
            }));
        }

        let id = center.success("Logged out successfully");
        center.error("Request failed");
        assert_eq!(center.items()[0].kind, NotificationKind::Success);

        center.dismiss(&id);
        center.dismiss("unknown");
        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
        assert_eq!(center.items()[0].message, "Request failed");
    }

    #[test]
    fn deferred_notifications_show_on_the_next_page_once() {
        let store = MemoryStorage::new();
        let before = NotificationCenter::new();
        before.defer(&store, NotificationKind::Success, "Logged out successfully");
        before.defer(&store, NotificationKind::Info, "See you soon");
        assert!(before.items().is_empty());

        // a reload builds a fresh center over the same storage
        let after = NotificationCenter::new();
        after.restore_deferred(&store);
        let messages: Vec<_> = after.items().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec!["Logged out successfully", "See you soon"]);

        let again = NotificationCenter::new();
        again.restore_deferred(&store);
        assert!(again.items().is_empty());
    }
}
