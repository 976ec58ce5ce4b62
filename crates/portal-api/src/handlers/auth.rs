//! Auth handlers: login, logout, refresh, me.
//!
//! The refresh token only ever travels in the HTTP-only cookie; response
//! bodies carry the access token alone.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite as CookieSameSite};

use portal_auth::session::SameSite;
use portal_auth::{SessionCookiePolicy, TokenPair};

use crate::dto::request::LoginRequest;
use crate::dto::response::{MeResponse, MessageResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<TokenResponse>), ApiError> {
    let outcome = state.session_manager.login(&req.username, &req.password)?;

    Ok(issue(state.session_manager.cookie_policy(), jar, outcome.tokens))
}

/// POST /logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let policy = state.session_manager.cookie_policy();
    let presented = jar.get(&policy.name);
    state
        .session_manager
        .logout(presented.map(Cookie::value));

    let mut removal = refresh_cookie(policy, String::new());
    removal.make_removal();

    (
        jar.add(removal),
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

/// POST /refresh
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<TokenResponse>), ApiError> {
    let policy = state.session_manager.cookie_policy();
    let presented = jar.get(&policy.name).map(|c| c.value().to_owned());

    let tokens = state.session_manager.refresh(presented.as_deref())?;

    Ok(issue(policy, jar, tokens))
}

/// GET /me
pub async fn me(auth: AuthUser) -> Json<MeResponse> {
    Json(MeResponse::from(auth.0))
}

fn issue(
    policy: &SessionCookiePolicy,
    jar: CookieJar,
    tokens: TokenPair,
) -> (CookieJar, Json<TokenResponse>) {
    let jar = jar.add(refresh_cookie(policy, tokens.refresh_token));
    (
        jar,
        Json(TokenResponse {
            access_token: tokens.access_token,
            expires_at: tokens.access_expires_at,
        }),
    )
}

fn refresh_cookie(policy: &SessionCookiePolicy, value: String) -> Cookie<'static> {
    let same_site = match policy.same_site {
        SameSite::Strict => CookieSameSite::Strict,
        SameSite::Lax => CookieSameSite::Lax,
        SameSite::None => CookieSameSite::None,
    };

    Cookie::build((policy.name.clone(), value))
        .http_only(policy.http_only)
        .secure(policy.secure)
        .same_site(same_site)
        .path(policy.path.clone())
        .max_age(time::Duration::seconds(policy.max_age_seconds))
        .build()
}
