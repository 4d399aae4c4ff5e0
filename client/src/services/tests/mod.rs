//! Tests for the HTTP services against a local mock server


use shared::AppContext;
use wiremock::MockServer;

/// Context pointing at the mock server, optionally authenticated
pub fn context_for(server: &MockServer, token: Option<&str>) -> AppContext {
    let context = AppContext::new(&server.uri()).unwrap();
    match token {
        Some(token) => context.with_auth_token(token),
        None => context,
    }
}
