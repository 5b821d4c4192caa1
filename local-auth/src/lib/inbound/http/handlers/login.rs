use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::credential::models::ClientCredentials;
use crate::credential::models::ProviderConfig;
use crate::credential::models::SessionId;
use crate::credential::session::AuthSession;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // Sessions opened over HTTP get a fresh parent session
    let parent = SessionId::new();

    let session = state
        .auth_provider
        .open_session(parent, &body.config, &body.credentials)
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, (&session).into()))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequestBody {
    credentials: ClientCredentials,
    #[serde(default)]
    config: ProviderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub session_id: String,
    pub user: String,
    pub provider_id: String,
    pub opened_at: DateTime<Utc>,
}

impl From<&AuthSession> for LoginResponseData {
    fn from(session: &AuthSession) -> Self {
        Self {
            session_id: session.parent().to_string(),
            user: session.user().to_string(),
            provider_id: session.provider_id().to_string(),
            opened_at: session.opened_at(),
        }
    }
}
