//! Session context for the frontend. The provider reads persisted tokens once
//! on mount through `SessionStore` and exposes derived signals for guards,
//! layouts, and admin clients. Tokens stay in storage and in this signal only.

use crate::app_lib::api::bearer_header;
use crate::app_lib::session::{BrowserStorage, SessionSnapshot, SessionStore};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<SessionSnapshot>,
    pub is_admin: Signal<bool>,
    pub is_user: Signal<bool>,
}

impl AuthContext {
    fn new(session: RwSignal<SessionSnapshot>) -> Self {
        let is_admin = Signal::derive(move || session.with(SessionSnapshot::is_admin));
        let is_user = Signal::derive(move || session.with(SessionSnapshot::is_user));
        Self {
            session,
            is_admin,
            is_user,
        }
    }

    pub fn store(&self) -> SessionStore<BrowserStorage> {
        SessionStore::new(BrowserStorage)
    }

    /// Re-reads storage after a login wrote new tokens.
    pub fn reload(&self) {
        self.session.set(self.store().init());
    }

    pub fn sign_out_user(&self) {
        self.store().clear_user();
        self.reload();
    }

    pub fn sign_out_admin(&self) {
        self.store().clear_admin();
        self.reload();
    }

    /// `Authorization` header for admin endpoints, empty when signed out.
    pub fn admin_headers(&self) -> Vec<(String, String)> {
        self.session
            .with_untracked(|snapshot| snapshot.admin_token.as_deref().map(bearer_header))
            .into_iter()
            .collect()
    }
}

/// Provides session context and hydrates it once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(SessionStore::new(BrowserStorage).init());
    provide_context(AuthContext::new(session));

    view! { {children()} }
}

/// Returns the current session context or a fallback signed-out context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(SessionSnapshot::default())))
}
