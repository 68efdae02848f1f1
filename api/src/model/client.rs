use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    client::{
        event::{CreateClient, UpdateClient},
        Client,
    },
    id::{ClientId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: Option<String>,
    #[garde(skip)]
    pub phone: Option<String>,
    #[garde(skip)]
    pub company: Option<String>,
    #[garde(skip)]
    pub notes: Option<String>,
}

#[derive(new)]
pub struct CreateClientRequestWithUserId(UserId, CreateClientRequest);

impl From<CreateClientRequestWithUserId> for CreateClient {
    fn from(value: CreateClientRequestWithUserId) -> Self {
        let CreateClientRequestWithUserId(
            created_by,
            CreateClientRequest {
                name,
                email,
                phone,
                company,
                notes,
            },
        ) = value;
        Self {
            name,
            email,
            phone,
            company,
            notes,
            created_by,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    #[garde(length(min = 1))]
    pub name: Option<String>,
    #[garde(email)]
    pub email: Option<String>,
    #[garde(skip)]
    pub phone: Option<String>,
    #[garde(skip)]
    pub company: Option<String>,
    #[garde(skip)]
    pub notes: Option<String>,
}

#[derive(new)]
pub struct UpdateClientRequestWithId(ClientId, UpdateClientRequest);

impl From<UpdateClientRequestWithId> for UpdateClient {
    fn from(value: UpdateClientRequestWithId) -> Self {
        let UpdateClientRequestWithId(
            client_id,
            UpdateClientRequest {
                name,
                email,
                phone,
                company,
                notes,
            },
        ) = value;
        Self {
            client_id,
            name,
            email,
            phone,
            company,
            notes,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientListQuery {
    // substring match over name, email and company
    #[garde(skip)]
    pub q: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientsResponse {
    pub items: Vec<ClientResponse>,
}

impl From<Vec<Client>> for ClientsResponse {
    fn from(value: Vec<Client>) -> Self {
        Self {
            items: value.into_iter().map(ClientResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
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

impl From<Client> for ClientResponse {
    fn from(value: Client) -> Self {
        let Client {
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
        Self {
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
