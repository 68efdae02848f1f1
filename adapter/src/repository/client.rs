use crate::database::{model::client::ClientRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    client::{
        event::{CreateClient, DeleteClient, UpdateClient},
        Client,
    },
    id::ClientId,
};
use kernel::repository::client::ClientRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ClientRepositoryImpl {
    db: ConnectionPool,
}

const CLIENT_COLUMNS: &str = r#"
    client_id,
    name,
    email,
    phone,
    company,
    notes,
    created_by,
    created_at,
    updated_at
"#;

#[async_trait]
impl ClientRepository for ClientRepositoryImpl {
    async fn create(&self, event: CreateClient) -> AppResult<ClientId> {
        let client_id = ClientId::new();
        sqlx::query(
            r#"
            INSERT INTO clients
            (client_id, name, email, phone, company, notes, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(client_id)
        .bind(&event.name)
        .bind(&event.email)
        .bind(&event.phone)
        .bind(&event.company)
        .bind(&event.notes)
        .bind(event.created_by)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(client_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Client>> {
        sqlx::query_as::<_, ClientRow>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients ORDER BY created_at DESC"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Client::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<Client>> {
        let pattern = format!("%{query}%");
        sqlx::query_as::<_, ClientRow>(&format!(
            r#"
            SELECT {CLIENT_COLUMNS}
            FROM clients
            WHERE name ILIKE $1 OR email ILIKE $1 OR company ILIKE $1
            ORDER BY name
            "#
        ))
        .bind(pattern)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Client::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, client_id: ClientId) -> AppResult<Option<Client>> {
        sqlx::query_as::<_, ClientRow>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE client_id = $1"
        ))
        .bind(client_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Client::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateClient) -> AppResult<()> {
        let res = sqlx::query(
            r#"
            UPDATE clients
            SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                company = COALESCE($5, company),
                notes = COALESCE($6, notes),
                updated_at = CURRENT_TIMESTAMP
            WHERE client_id = $1
            "#,
        )
        .bind(event.client_id)
        .bind(&event.name)
        .bind(&event.email)
        .bind(&event.phone)
        .bind(&event.company)
        .bind(&event.notes)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "client ({}) was not found",
                event.client_id
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteClient) -> AppResult<()> {
        // bookings referencing the client are left in place; references are not
        // enforced as foreign keys
        let res = sqlx::query("DELETE FROM clients WHERE client_id = $1")
            .bind(event.client_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "client ({}) was not found",
                event.client_id
            )));
        }

        Ok(())
    }
}
