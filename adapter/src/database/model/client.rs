use kernel::model::{
    client::Client,
    id::{ClientId, UserId},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct ClientRow {
    pub client_id: ClientId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClientRow> for Client {
    fn from(value: ClientRow) -> Self {
        let ClientRow {
            client_id,
            name,
            email,
            phone,
            company,
            notes,
            created_by,
            created_at,
            updated_at,
        } = value;
        Client {
            client_id,
            name,
            email,
            phone,
            company,
            notes,
            created_by,
            created_at,
            updated_at,
        }
    }
}
