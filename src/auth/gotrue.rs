//! GoTrue REST Client
//!
//! HTTP identity provider for a GoTrue-compatible auth service (the API
//! Supabase exposes under `/auth/v1`). The current session is kept in memory
//! and mirrored to the preference store so it survives restarts.

use super::listeners::{AuthListener, AuthListeners, Subscription};
use super::session::{AuthEvent, Session, User};
use super::{AuthError, AuthResult, IdentityProvider};
use crate::storage::{PreferenceError, PreferenceStore, SESSION_KEY};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Configuration for the GoTrue client
#[derive(Debug, Clone)]
pub struct GoTrueConfig {
    /// Project URL (e.g., "https://xyzcompany.supabase.co")
    pub url: String,
    /// Public anon key sent as the `apikey` header
    pub anon_key: String,
    /// Request timeout in milliseconds (ignored in the browser)
    pub request_timeout_ms: u64,
}

impl Default for GoTrueConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:54321".to_string(),
            anon_key: String::new(),
            request_timeout_ms: 10_000,
        }
    }
}

/// GoTrue-backed identity provider
pub struct GoTrueClient {
    client: Client,
    config: GoTrueConfig,
    storage: Rc<dyn PreferenceStore>,
    session: RefCell<Option<Session>>,
    listeners: AuthListeners,
}

impl GoTrueClient {
    /// Create a client, restoring any session persisted in `storage`
    pub fn new(config: GoTrueConfig, storage: Rc<dyn PreferenceStore>) -> AuthResult<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder =
            builder.timeout(std::time::Duration::from_millis(config.request_timeout_ms));
        let client = builder
            .build()
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let session = restore_session(storage.as_ref());
        if let Some(session) = &session {
            debug!(user = %session.user.id, "Restored persisted session");
        }

        Ok(Self {
            client,
            config,
            storage,
            session: RefCell::new(session),
            listeners: AuthListeners::new(),
        })
    }

    pub fn config(&self) -> &GoTrueConfig {
        &self.config
    }

    /// Session currently held, without expiry handling
    pub fn current_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    /// Send a password-reset email. The link lands on `redirect_to` when given.
    pub async fn request_password_recovery(
        &self,
        email: &str,
        redirect_to: Option<&str>,
    ) -> AuthResult<()> {
        let mut url = self.endpoint("recover");
        if let Some(redirect) = redirect_to {
            url.push_str("?redirect_to=");
            url.push_str(&urlencoding::encode(redirect));
        }

        let response = self
            .send(self.client.post(&url).json(&RecoverRequest { email }))
            .await?;
        expect_success(response).await?;

        info!("Password recovery email requested");
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url.trim_end_matches('/'), path)
    }

    async fn send(&self, request: RequestBuilder) -> AuthResult<Response> {
        request
            .header("apikey", &self.config.anon_key)
            .send()
            .await
            .map_err(request_error)
    }

    async fn refresh(&self, refresh_token: &str) -> AuthResult<Session> {
        let url = self.endpoint("token?grant_type=refresh_token");
        let response = self
            .send(self.client.post(&url).json(&RefreshRequest { refresh_token }))
            .await?;
        let token: TokenResponse = parse(expect_success(response).await?).await?;
        Ok(token.into_session())
    }

    /// Replace the held session, mirror it to storage, then notify listeners
    fn store_session(&self, session: Option<Session>, event: AuthEvent) -> AuthResult<()> {
        match &session {
            Some(s) => {
                let raw = serde_json::to_string(s).map_err(PreferenceError::from)?;
                self.storage.set(SESSION_KEY, &raw)?;
            }
            None => self.storage.remove(SESSION_KEY)?,
        }

        *self.session.borrow_mut() = session.clone();
        self.listeners.emit(event, session.as_ref());
        Ok(())
    }

    fn access_token(&self) -> Option<String> {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.access_token.clone())
    }
}

#[async_trait(?Send)]
impl IdentityProvider for GoTrueClient {
    fn subscribe(&self, listener: AuthListener) -> Subscription {
        self.listeners.subscribe(listener)
    }

    async fn get_session(&self) -> AuthResult<Option<Session>> {
        let Some(session) = self.current_session() else {
            return Ok(None);
        };

        if !session.is_expired() {
            return Ok(Some(session));
        }

        if session.refresh_token.is_empty() {
            self.store_session(None, AuthEvent::SignedOut)?;
            return Ok(None);
        }

        match self.refresh(&session.refresh_token).await {
            Ok(refreshed) => {
                debug!(user = %refreshed.user.id, "Refreshed expired session");
                self.store_session(Some(refreshed.clone()), AuthEvent::TokenRefreshed)?;
                Ok(Some(refreshed))
            }
            Err(e) => {
                warn!("Session refresh failed, signing out locally: {}", e);
                self.store_session(None, AuthEvent::SignedOut)?;
                Ok(None)
            }
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AuthResult<Session> {
        let url = self.endpoint("token?grant_type=password");
        let response = self
            .send(
                self.client
                    .post(&url)
                    .json(&PasswordGrantRequest { email, password }),
            )
            .await?;
        let token: TokenResponse = parse(expect_success(response).await?).await?;
        let session = token.into_session();

        info!(user = %session.user.id, "Signed in");
        self.store_session(Some(session.clone()), AuthEvent::SignedIn)?;
        Ok(session)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        if let Some(token) = self.access_token() {
            let url = self.endpoint("logout");
            let response = self
                .send(self.client.post(&url).bearer_auth(token))
                .await?;

            let status = response.status();
            // an already-invalid token still counts as signed out
            let stale = matches!(
                status,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
            );
            if !status.is_success() && !stale {
                let body = response.text().await.unwrap_or_default();
                return Err(api_error(status, &body));
            }
        }

        self.store_session(None, AuthEvent::SignedOut)
    }

    async fn update_password(&self, new_password: &str) -> AuthResult<User> {
        let token = self.access_token().ok_or(AuthError::NotAuthenticated)?;

        let url = self.endpoint("user");
        let response = self
            .send(
                self.client
                    .put(&url)
                    .bearer_auth(token)
                    .json(&UpdateUserRequest {
                        password: new_password,
                    }),
            )
            .await?;
        let user: User = parse::<WireUser>(expect_success(response).await?)
            .await?
            .into();

        let updated = self.current_session().map(|mut session| {
            session.user = user.clone();
            session
        });
        if updated.is_some() {
            self.store_session(updated, AuthEvent::UserUpdated)?;
        }

        info!(user = %user.id, "Password updated");
        Ok(user)
    }
}

fn restore_session(storage: &dyn PreferenceStore) -> Option<Session> {
    match storage.get(SESSION_KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Discarding unreadable persisted session: {}", e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!("Could not read persisted session: {}", e);
            None
        }
    }
}

fn request_error(e: reqwest::Error) -> AuthError {
    if e.is_timeout() {
        return AuthError::Timeout;
    }
    #[cfg(not(target_arch = "wasm32"))]
    if e.is_connect() {
        return AuthError::Unavailable;
    }
    AuthError::Request(e.to_string())
}

async fn expect_success(response: Response) -> AuthResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(api_error(status, &body))
}

async fn parse<T: for<'de> Deserialize<'de>>(response: Response) -> AuthResult<T> {
    response
        .json()
        .await
        .map_err(|e| AuthError::InvalidResponse(e.to_string()))
}

/// Build an API error from a GoTrue error body. Different GoTrue versions put
/// the human-readable message under different keys.
fn api_error(status: StatusCode, body: &str) -> AuthError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(String::from))
        })
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    AuthError::Api {
        status: status.as_u16(),
        message,
    }
}

// ============================================
// Request/Response DTOs
// ============================================

#[derive(Debug, Serialize)]
struct PasswordGrantRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateUserRequest<'a> {
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RecoverRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: WireUser,
}

impl TokenResponse {
    fn into_session(self) -> Session {
        let expires_at = self.expires_at.or_else(|| {
            self.expires_in
                .map(|secs| chrono::Utc::now().timestamp() + secs)
        });

        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: WireMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct WireMetadata {
    #[serde(default)]
    full_name: Option<String>,
}

impl From<WireUser> for User {
    fn from(wire: WireUser) -> Self {
        User {
            id: wire.id,
            email: wire.email,
            full_name: wire.user_metadata.full_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferences;

    fn memory() -> Rc<MemoryPreferences> {
        Rc::new(MemoryPreferences::new())
    }

    #[test]
    fn test_api_error_message_keys() {
        let err = api_error(
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(err.to_string(), "Invalid login credentials");

        let err = api_error(StatusCode::UNPROCESSABLE_ENTITY, r#"{"code":422,"msg":"Weak"}"#);
        assert_eq!(err.to_string(), "Weak");

        let err = api_error(StatusCode::BAD_GATEWAY, "");
        assert_eq!(err.to_string(), "Bad Gateway");
    }

    #[test]
    fn test_wire_user_maps_full_name() {
        let wire: WireUser = serde_json::from_str(
            r#"{"id":"u1","email":"a@b.c","user_metadata":{"full_name":"Asha Rao"}}"#,
        )
        .unwrap();
        let user: User = wire.into();
        assert_eq!(user.display_name(), Some("Asha Rao"));

        let bare: WireUser = serde_json::from_str(r#"{"id":"u2"}"#).unwrap();
        assert_eq!(User::from(bare).email, None);
    }

    #[test]
    fn test_restores_persisted_session() {
        let storage = memory();
        let session = Session {
            access_token: "a".into(),
            refresh_token: "r".into(),
            expires_at: None,
            user: User::new("u1", "a@b.c"),
        };
        storage
            .set(SESSION_KEY, &serde_json::to_string(&session).unwrap())
            .unwrap();

        let client = GoTrueClient::new(GoTrueConfig::default(), storage).unwrap();
        assert_eq!(client.current_session(), Some(session));
    }

    #[test]
    fn test_garbage_session_is_ignored() {
        let storage = memory();
        storage.set(SESSION_KEY, "{not json").unwrap();

        let client = GoTrueClient::new(GoTrueConfig::default(), storage).unwrap();
        assert_eq!(client.current_session(), None);
    }

    #[tokio::test]
    async fn test_update_password_requires_session() {
        let client = GoTrueClient::new(GoTrueConfig::default(), memory()).unwrap();
        let err = client.update_password("hunter22").await.unwrap_err();
        assert!(matches!(err, AuthError::NotAuthenticated));
    }

    #[cfg(feature = "native")]
    mod http {
        use super::*;
        use axum::extract::{Query, Json};
        use axum::http::{HeaderMap, StatusCode};
        use axum::routing::{post, put};
        use axum::Router;
        use serde_json::{json, Value};
        use std::cell::Cell;
        use std::collections::HashMap;

        fn user_json(email: &str) -> Value {
            json!({
                "id": "user-1",
                "email": email,
                "user_metadata": { "full_name": "Asha Rao" }
            })
        }

        async fn token(
            Query(query): Query<HashMap<String, String>>,
            headers: HeaderMap,
            Json(body): Json<Value>,
        ) -> (StatusCode, Json<Value>) {
            if headers.get("apikey").and_then(|v| v.to_str().ok()) != Some("anon") {
                return (StatusCode::UNAUTHORIZED, Json(json!({"message": "No API key found"})));
            }

            match query.get("grant_type").map(String::as_str) {
                Some("password") if body["password"] == "correct-horse" => (
                    StatusCode::OK,
                    Json(json!({
                        "access_token": "access-1",
                        "refresh_token": "refresh-1",
                        "expires_in": 3600,
                        "user": user_json(body["email"].as_str().unwrap_or_default()),
                    })),
                ),
                Some("refresh_token") if body["refresh_token"] == "refresh-1" => (
                    StatusCode::OK,
                    Json(json!({
                        "access_token": "access-2",
                        "refresh_token": "refresh-2",
                        "expires_in": 3600,
                        "user": user_json("asha@example.com"),
                    })),
                ),
                _ => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "invalid_grant",
                        "error_description": "Invalid login credentials"
                    })),
                ),
            }
        }

        async fn logout(headers: HeaderMap) -> StatusCode {
            match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                Some("Bearer access-1") => StatusCode::NO_CONTENT,
                Some("Bearer broken") => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::UNAUTHORIZED,
            }
        }

        async fn update_user(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
            let password = body["password"].as_str().unwrap_or_default();
            if password.len() < 8 {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({"code": 422, "msg": "Password should be at least 8 characters."})),
                );
            }
            (StatusCode::OK, Json(user_json("asha@example.com")))
        }

        async fn recover(Query(query): Query<HashMap<String, String>>) -> StatusCode {
            match query.get("redirect_to").map(String::as_str) {
                Some("http://localhost:3000/update-password") | None => StatusCode::OK,
                Some(_) => StatusCode::BAD_REQUEST,
            }
        }

        async fn spawn_stub() -> String {
            let app = Router::new()
                .route("/auth/v1/token", post(token))
                .route("/auth/v1/logout", post(logout))
                .route("/auth/v1/user", put(update_user))
                .route("/auth/v1/recover", post(recover));

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });
            format!("http://{}", addr)
        }

        async fn client(storage: Rc<MemoryPreferences>) -> GoTrueClient {
            let config = GoTrueConfig {
                url: spawn_stub().await,
                anon_key: "anon".to_string(),
                request_timeout_ms: 2_000,
            };
            GoTrueClient::new(config, storage).unwrap()
        }

        #[tokio::test]
        async fn test_sign_in_persists_and_notifies() {
            let storage = memory();
            let client = client(Rc::clone(&storage)).await;

            let events = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&events);
            let _sub = client.subscribe(Rc::new(move |event, _| sink.borrow_mut().push(event)));

            let session = client
                .sign_in_with_password("asha@example.com", "correct-horse")
                .await
                .unwrap();
            assert_eq!(session.access_token, "access-1");
            assert_eq!(session.user.display_name(), Some("Asha Rao"));
            assert!(session.expires_at.is_some());

            assert_eq!(*events.borrow(), vec![AuthEvent::SignedIn]);
            assert!(storage.get(SESSION_KEY).unwrap().is_some());
            assert_eq!(client.get_session().await.unwrap(), Some(session));
        }

        #[tokio::test]
        async fn test_bad_credentials_surface_message() {
            let client = client(memory()).await;
            let err = client
                .sign_in_with_password("asha@example.com", "wrong")
                .await
                .unwrap_err();

            match err {
                AuthError::Api { status, message } => {
                    assert_eq!(status, 400);
                    assert_eq!(message, "Invalid login credentials");
                }
                other => panic!("unexpected error: {other:?}"),
            }
            assert_eq!(client.current_session(), None);
        }

        #[tokio::test]
        async fn test_sign_out_clears_storage() {
            let storage = memory();
            let client = client(Rc::clone(&storage)).await;
            client
                .sign_in_with_password("asha@example.com", "correct-horse")
                .await
                .unwrap();

            let signed_out = Rc::new(Cell::new(false));
            let flag = Rc::clone(&signed_out);
            let _sub = client.subscribe(Rc::new(move |event, session| {
                if event == AuthEvent::SignedOut && session.is_none() {
                    flag.set(true);
                }
            }));

            client.sign_out().await.unwrap();
            assert!(signed_out.get());
            assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
            assert_eq!(client.get_session().await.unwrap(), None);
        }

        #[tokio::test]
        async fn test_sign_out_server_error_keeps_session() {
            let storage = memory();
            let session = Session {
                access_token: "broken".into(),
                refresh_token: String::new(),
                expires_at: None,
                user: User::new("user-1", "asha@example.com"),
            };
            storage
                .set(SESSION_KEY, &serde_json::to_string(&session).unwrap())
                .unwrap();
            let client = client(storage).await;

            let err = client.sign_out().await.unwrap_err();
            assert!(matches!(err, AuthError::Api { status: 500, .. }));
            assert!(client.current_session().is_some());
        }

        #[tokio::test]
        async fn test_stale_token_sign_out_still_succeeds() {
            let storage = memory();
            let session = Session {
                access_token: "revoked".into(),
                refresh_token: String::new(),
                expires_at: None,
                user: User::new("user-1", "asha@example.com"),
            };
            storage
                .set(SESSION_KEY, &serde_json::to_string(&session).unwrap())
                .unwrap();
            let client = client(storage).await;

            client.sign_out().await.unwrap();
            assert_eq!(client.current_session(), None);
        }

        #[tokio::test]
        async fn test_update_password_round_trip() {
            let client = client(memory()).await;
            client
                .sign_in_with_password("asha@example.com", "correct-horse")
                .await
                .unwrap();

            let err = client.update_password("short").await.unwrap_err();
            assert_eq!(err.to_string(), "Password should be at least 8 characters.");

            let user = client.update_password("long-enough").await.unwrap();
            assert_eq!(user.email.as_deref(), Some("asha@example.com"));
        }

        #[tokio::test]
        async fn test_expired_session_is_refreshed() {
            let storage = memory();
            let expired = Session {
                access_token: "access-0".into(),
                refresh_token: "refresh-1".into(),
                expires_at: Some(1),
                user: User::new("user-1", "asha@example.com"),
            };
            storage
                .set(SESSION_KEY, &serde_json::to_string(&expired).unwrap())
                .unwrap();
            let client = client(Rc::clone(&storage)).await;

            let session = client.get_session().await.unwrap().unwrap();
            assert_eq!(session.access_token, "access-2");
            assert!(storage.get(SESSION_KEY).unwrap().unwrap().contains("access-2"));
        }

        #[tokio::test]
        async fn test_failed_refresh_signs_out_locally() {
            let storage = memory();
            let expired = Session {
                access_token: "access-0".into(),
                refresh_token: "revoked".into(),
                expires_at: Some(1),
                user: User::new("user-1", "asha@example.com"),
            };
            storage
                .set(SESSION_KEY, &serde_json::to_string(&expired).unwrap())
                .unwrap();
            let client = client(Rc::clone(&storage)).await;

            assert_eq!(client.get_session().await.unwrap(), None);
            assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
        }

        #[tokio::test]
        async fn test_recovery_encodes_redirect() {
            let client = client(memory()).await;
            client
                .request_password_recovery(
                    "asha@example.com",
                    Some("http://localhost:3000/update-password"),
                )
                .await
                .unwrap();
        }

        #[tokio::test]
        async fn test_unreachable_provider() {
            let config = GoTrueConfig {
                url: "http://127.0.0.1:1".to_string(),
                anon_key: "anon".to_string(),
                request_timeout_ms: 500,
            };
            let client = GoTrueClient::new(config, memory()).unwrap();
            let err = client
                .sign_in_with_password("a@b.c", "correct-horse")
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::Unavailable | AuthError::Timeout));
        }
    }
}
