//! Session state on top of a [`SessionStore`].

use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use crate::store::SessionStore;
use crate::types::StoredUser;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::RequestBuilder;
use tracing::{debug, info, warn};

/// Client-side view of the logged-in user.
///
/// Reads the bearer token and user record from the injected store on every
/// call; nothing is cached.
///
/// `is_admin` only decides what the UI shows. The API server must still
/// authorize every admin request on its own.
pub struct Session<S> {
    store: S,
    config: SessionConfig,
}

impl<S: SessionStore> Session<S> {
    /// Create a session with default slot names.
    pub fn new(store: S) -> Self {
        Self::with_config(store, SessionConfig::default())
    }

    pub fn with_config(store: S, config: SessionConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current bearer token, if any. An empty token counts as absent.
    pub fn token(&self) -> Result<Option<String>> {
        Ok(self
            .store
            .get(&self.config.token_key)?
            .filter(|token| !token.is_empty()))
    }

    /// Stored user record, if any.
    pub fn user(&self) -> Result<Option<StoredUser>> {
        match self.store.get(&self.config.user_key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Check if a token is stored.
    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.token()?.is_some())
    }

    /// Store the token and user record after a successful login.
    ///
    /// The user record is written first; the token only lands once it has,
    /// so a failed login never leaves a token without its user.
    pub fn login(&self, token: &str, user: &StoredUser) -> Result<()> {
        let record = serde_json::to_string(user)?;
        self.store.set(&self.config.user_key, &record)?;
        self.store.set(&self.config.token_key, token)?;

        info!(username = %user.username, role = %user.role, "Session started");
        Ok(())
    }

    /// Clear both slots.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(&self.config.token_key)?;
        self.store.remove(&self.config.user_key)?;

        info!("Logged out");
        Ok(())
    }

    /// Token present and stored role matches the configured admin role.
    ///
    /// An unreadable user record counts as not admin.
    pub fn is_admin(&self) -> Result<bool> {
        if self.token()?.is_none() {
            return Ok(false);
        }

        match self.user() {
            Ok(Some(user)) => Ok(user.role == self.config.admin_role),
            Ok(None) => Ok(false),
            Err(SessionError::CorruptRecord(e)) => {
                warn!(error = %e, "Ignoring unreadable user record");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// `Bearer <token>` when a token is stored.
    pub fn authorization_header(&self) -> Result<Option<String>> {
        Ok(self.token()?.map(|token| format!("Bearer {}", token)))
    }

    /// Headers to send with API requests; empty when logged out.
    pub fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(value) = self.authorization_header()? {
            let mut value = HeaderValue::from_str(&value)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Attach the bearer header to a request when a token is stored.
    pub fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let headers = self.auth_headers()?;
        if headers.is_empty() {
            debug!("No token stored, sending request without authorization");
            return Ok(request);
        }
        Ok(request.headers(headers))
    }
}
