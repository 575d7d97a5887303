//! Token issuing
//!
//! Produces JWT-shaped access tokens and random refresh tokens. The
//! shape is deterministic (header.payload.signature, base64url) so the
//! frontend can display something that looks like a bearer token, but no
//! party anywhere parses or validates the signature. A real backend must
//! replace this with a signed token validated server-side.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;

const TOKEN_SECRET: &str = "vaova-secret-key-2025";

#[derive(Debug, Clone, Default)]
pub struct TokenIssuer;

impl TokenIssuer {
    pub fn new() -> Self {
        Self
    }

    /// Issue an opaque access token for the given user
    pub fn issue_access_token(
        &self,
        user_id: &str,
        email: &str,
        now_millis: i64,
        ttl_millis: i64,
    ) -> String {
        let header = URL_SAFE_NO_PAD.encode(
            serde_json::json!({ "alg": "HS256", "typ": "JWT" }).to_string(),
        );
        let payload = URL_SAFE_NO_PAD.encode(
            serde_json::json!({
                "userId": user_id,
                "email": email,
                "iat": now_millis,
                "exp": now_millis + ttl_millis,
            })
            .to_string(),
        );
        let signature =
            URL_SAFE_NO_PAD.encode(format!("{}.{}.{}", header, payload, TOKEN_SECRET));
        format!("{}.{}.{}", header, payload, signature)
    }

    /// Issue an opaque refresh token
    pub fn issue_refresh_token(&self, now_millis: i64) -> String {
        let nonce: u64 = rand::thread_rng().r#gen();
        URL_SAFE_NO_PAD.encode(format!("{}-{}-{}", now_millis, nonce, TOKEN_SECRET))
    }
}
