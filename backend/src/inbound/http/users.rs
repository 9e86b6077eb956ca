//! User registration and listing handlers.
//!
//! ```text
//! POST /api/users {"username":"ada"}
//! GET /api/users
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::CreateUserRequest;
use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::{JsonOrForm, into_inner};
use crate::inbound::http::state::HttpState;

/// Body for `POST /api/users`, JSON or form encoded.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserBody {
    #[schema(example = "ada")]
    pub username: Option<String>,
}

/// Public representation of a registered user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "ada")]
    pub username: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
        }
    }
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserBody,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Missing or duplicate username", body = Error),
        (status = 500, description = "Storage fault", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: JsonOrForm<CreateUserBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let CreateUserBody { username } = into_inner(payload);
    let user = state
        .users
        .create_user(CreateUserRequest { username })
        .await?;
    Ok(web::Json(UserResponse::from(&user)))
}

/// List every registered user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 500, description = "Storage fault", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.iter().map(UserResponse::from).collect()))
}
