// store/applicationdb.rs
use async_trait::async_trait;

use super::client::StoreClient;
use super::keys;
use crate::error::AppError;
use crate::models::applicationmodel::{Application, FormDraft};

#[async_trait]
pub trait ApplicationExt {
    /// Submitted applications, newest first.
    async fn list_applications(&self) -> Result<Vec<Application>, AppError>;

    async fn append_application(&self, application: Application) -> Result<(), AppError>;

    async fn save_draft(&self, property_id: &str, draft: &FormDraft) -> Result<(), AppError>;

    async fn load_draft(&self, property_id: &str) -> Result<Option<FormDraft>, AppError>;

    async fn delete_draft(&self, property_id: &str) -> Result<(), AppError>;
}

#[async_trait]
impl ApplicationExt for StoreClient {
    async fn list_applications(&self) -> Result<Vec<Application>, AppError> {
        let mut applications: Vec<Application> = self
            .get_json(keys::USER_APPLICATIONS)
            .await?
            .unwrap_or_default();
        applications.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(applications)
    }

    async fn append_application(&self, application: Application) -> Result<(), AppError> {
        // Read-modify-write with no transaction; the single-writer runtime
        // makes last-write-wins acceptable here.
        let mut applications: Vec<Application> = self
            .get_json(keys::USER_APPLICATIONS)
            .await?
            .unwrap_or_default();
        applications.push(application);
        self.set_json(keys::USER_APPLICATIONS, &applications).await
    }

    async fn save_draft(&self, property_id: &str, draft: &FormDraft) -> Result<(), AppError> {
        self.set_json(&keys::application_form_key(property_id), draft)
            .await
    }

    async fn load_draft(&self, property_id: &str) -> Result<Option<FormDraft>, AppError> {
        self.get_json(&keys::application_form_key(property_id)).await
    }

    async fn delete_draft(&self, property_id: &str) -> Result<(), AppError> {
        self.remove(&keys::application_form_key(property_id)).await
    }
}
