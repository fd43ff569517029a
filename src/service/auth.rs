// src/service/auth.rs
//
// The backend auth service is an opaque boundary: the core only ever asks
// "is there a current user" and subscribes to sign-in/sign-out changes.
use async_trait::async_trait;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    SignedOut,
    SignedIn(AuthUser),
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn current_user(&self) -> Option<AuthUser>;

    /// Receiver fires on every sign-in and sign-out.
    fn subscribe(&self) -> watch::Receiver<AuthState>;
}

/// In-process stand-in for the hosted auth SDK.
pub struct LocalAuthProvider {
    state: watch::Sender<AuthState>,
}

impl LocalAuthProvider {
    pub fn new() -> Self {
        let (state, _) = watch::channel(AuthState::SignedOut);
        LocalAuthProvider { state }
    }

    pub fn sign_in(&self, user: AuthUser) {
        // send_replace updates even when nothing subscribes yet
        self.state.send_replace(AuthState::SignedIn(user));
    }

    pub fn sign_out(&self) {
        self.state.send_replace(AuthState::SignedOut);
    }
}

impl Default for LocalAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    async fn current_user(&self) -> Option<AuthUser> {
        match &*self.state.borrow() {
            AuthState::SignedIn(user) => Some(user.clone()),
            AuthState::SignedOut => None,
        }
    }

    fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }
}
