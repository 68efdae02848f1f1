use crate::model::{
    client::{
        event::{CreateClient, DeleteClient, UpdateClient},
        Client,
    },
    id::ClientId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn create(&self, event: CreateClient) -> AppResult<ClientId>;
    async fn find_all(&self) -> AppResult<Vec<Client>>;
    // substring match over name, email and company
    async fn search(&self, query: &str) -> AppResult<Vec<Client>>;
    async fn find_by_id(&self, client_id: ClientId) -> AppResult<Option<Client>>;
    async fn update(&self, event: UpdateClient) -> AppResult<()>;
    async fn delete(&self, event: DeleteClient) -> AppResult<()>;
}
