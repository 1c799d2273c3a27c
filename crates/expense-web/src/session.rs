//! Signed-in session, persisted in localStorage and shared through context

use expense_core::model::is_authenticated;
use expense_core::{Session, User};
use leptos::prelude::*;

const STORAGE_KEY: &str = "exesman.session";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn load_stored() -> Option<Session> {
    let raw = storage()?.get_item(STORAGE_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            web_sys::console::warn_1(&format!("Discarding stored session: {}", err).into());
            None
        }
    }
}

fn store(session: Option<&Session>) {
    let Some(storage) = storage() else {
        return;
    };
    let result = match session.map(serde_json::to_string) {
        Some(Ok(raw)) => storage.set_item(STORAGE_KEY, &raw),
        Some(Err(_)) | None => storage.remove_item(STORAGE_KEY),
    };
    if result.is_err() {
        web_sys::console::error_1(&"Could not update stored session".into());
    }
}

/// Current session, provided once by `App`
#[derive(Clone, Copy)]
pub struct SessionContext(RwSignal<Option<Session>>);

impl SessionContext {
    pub fn load() -> Self {
        Self(RwSignal::new(load_stored()))
    }

    pub fn user(&self) -> Option<User> {
        self.0.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn session(&self) -> Option<Session> {
        self.0.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.with(|s| is_authenticated(s.as_ref()))
    }

    pub fn sign_in(&self, session: Session) {
        store(Some(&session));
        self.0.set(Some(session));
    }

    pub fn logout(&self) {
        store(None);
        self.0.set(None);
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
