// ============================================================================
// SESSION STORE - Single persisted slot for the authenticated session
// ============================================================================
// Never raises: unreadable data is "no session", failed writes are logged.
// ============================================================================

use std::rc::Rc;

use crate::models::session::Session;
use crate::utils::storage::{load_json, save_json, BrowserStorage, KeyValueStore};
use crate::utils::STORAGE_KEY_SESSION;

#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Store backed by `window.localStorage`
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    pub fn get(&self) -> Option<Session> {
        load_json::<Session>(self.backend.as_ref(), STORAGE_KEY_SESSION)
    }

    pub fn set(&self, session: &Session) {
        match save_json(self.backend.as_ref(), STORAGE_KEY_SESSION, session) {
            Ok(()) => log::info!("💾 Session saved for {}", session.user.email),
            Err(e) => log::error!("❌ Could not persist session: {}", e),
        }
    }

    pub fn remove(&self) {
        if let Err(e) = self.backend.remove_item(STORAGE_KEY_SESSION) {
            log::error!("❌ Could not clear session: {}", e);
        }
    }

    /// Token of the current session, if any
    pub fn token(&self) -> Option<String> {
        self.get().map(|s| s.token)
    }

    pub fn backend(&self) -> Rc<dyn KeyValueStore> {
        self.backend.clone()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}
