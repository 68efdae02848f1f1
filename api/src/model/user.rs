use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    User,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::User => Self::User,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Admin => Self::Admin,
            RoleName::User => Self::User,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 8))]
    pub password: String,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            name,
            email,
            password,
        } = value;
        Self {
            name,
            email,
            password,
        }
    }
}

// Registration signs the new user in immediately, so the response carries a
// fresh access token alongside the created record.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUserResponse {
    pub user: UserResponse,
    pub access_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: RoleName,
    pub created_at: DateTime<Utc>,
    pub last_signed_in: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            name,
            email,
            role,
            created_at,
            last_signed_in,
        } = value;
        Self {
            user_id,
            name,
            email,
            role: RoleName::from(role),
            created_at,
            last_signed_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kernel::model::id::UserId;

    #[test]
    fn registration_response_carries_token_and_camel_case_user() {
        let user = User {
            user_id: UserId::new(),
            name: "Dana".into(),
            email: "dana@example.com".into(),
            role: Role::User,
            created_at: Utc::now(),
            last_signed_in: Utc::now(),
        };
        let res = RegisteredUserResponse {
            user: user.into(),
            access_token: "token-123".into(),
        };

        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["accessToken"], "token-123");
        assert_eq!(json["user"]["role"], "user");
        assert_eq!(json["user"]["email"], "dana@example.com");
    }
}
