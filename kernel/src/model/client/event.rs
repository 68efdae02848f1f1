use crate::model::id::{ClientId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CreateClient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub created_by: UserId,
}

#[derive(new)]
pub struct UpdateClient {
    pub client_id: ClientId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
}

#[derive(new)]
pub struct DeleteClient {
    pub client_id: ClientId,
}
