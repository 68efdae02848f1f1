use crate::{
    extractor::AuthorizedUser,
    model::user::{CreateUserRequest, RegisteredUserResponse, UserResponse},
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::auth::event::CreateToken;
use registry::AppRegistry;
use shared::error::AppResult;

// Registration doubles as the first sign-in: a token is minted right away so
// the caller does not need a follow-up login call.
pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<RegisteredUserResponse>)> {
    req.validate(&())?;

    let user = registry.user_repository().create(req.into()).await?;
    let access_token = registry
        .auth_repository()
        .create_token(CreateToken::new(user.user_id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisteredUserResponse {
            user: user.into(),
            access_token: access_token.0,
        }),
    ))
}

pub async fn get_current_user(user: AuthorizedUser) -> Json<UserResponse> {
    Json(user.user.into())
}
