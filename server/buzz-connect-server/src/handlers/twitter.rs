use axum::{extract::State, Json};

use crate::error::ApiResult;
use crate::extractors::LenientQuery;
use crate::server::BuzzConnectServer;
use crate::services::{AuthInitiationResult, AuthRequestParams};

/// Start the Twitter/X authentication flow
///
/// Returns the provider authorization URL the client should redirect to.
/// The URL is a placeholder: it carries only the signed state.
#[utoipa::path(
    get,
    path = "/auth",
    tag = "authentication",
    params(AuthRequestParams),
    responses(
        (status = 200, description = "Authorization URL built, as `{message, data: {authUrl}}`", body = crate::services::AuthUrlData,
            example = json!({
                "message": "Twitter authentication initiated",
                "data": { "authUrl": "https://api.twitter.com/oauth/authorize?state=abc.def" }
            })),
        (status = 500, description = "State could not be built", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn twitter_auth(
    State(server): State<BuzzConnectServer>,
    LenientQuery(params): LenientQuery<AuthRequestParams>,
) -> ApiResult<Json<AuthInitiationResult>> {
    let result = server.twitter_auth.initiate(&params).await?;
    Ok(Json(result))
}
