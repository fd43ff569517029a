// src/service/application_service.rs
use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::dtos::applicationdtos::{validate_step, FieldError, StepValidation};
use crate::error::AppError;
use crate::models::applicationmodel::{
    Application, ApplicationForm, ApplicationStatus, FormDraft, FormStep,
};
use crate::store::applicationdb::ApplicationExt;
use crate::store::client::StoreClient;
use crate::utils::reference::generate_reference;

/// What a forward step produced.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Moved(FormStep),
    /// The current step's predicate failed; the pointer did not move.
    Blocked(Vec<FieldError>),
    Submitted(Application),
}

#[derive(Clone)]
pub struct ApplicationService {
    store: Arc<StoreClient>,
    draft_ttl: Duration,
}

impl ApplicationService {
    pub fn new(store: Arc<StoreClient>, draft_ttl_hours: i64) -> Self {
        ApplicationService {
            store,
            draft_ttl: Duration::hours(draft_ttl_hours),
        }
    }

    /// Open the form for a property, restoring a saved draft when one exists
    /// and is younger than the TTL. A stale draft is dropped silently.
    pub async fn open(&self, property_id: &str) -> Result<FormSession, AppError> {
        let draft = self.store.load_draft(property_id).await?;

        let (form, step) = match draft {
            Some(draft) if Utc::now() - draft.saved_at <= self.draft_ttl => {
                tracing::debug!(
                    "Restored draft for {} at step {}",
                    property_id,
                    draft.step.number()
                );
                (draft.form, draft.step)
            }
            Some(_) => {
                tracing::debug!("Discarding expired draft for {}", property_id);
                self.store.delete_draft(property_id).await?;
                (ApplicationForm::default(), FormStep::FIRST)
            }
            None => (ApplicationForm::default(), FormStep::FIRST),
        };

        Ok(FormSession {
            store: self.store.clone(),
            property_id: property_id.to_string(),
            form,
            step,
            submitted: false,
        })
    }

    pub async fn applications(&self) -> Result<Vec<Application>, AppError> {
        self.store.list_applications().await
    }
}

/// The six-step application form for one property. Progress auto-saves on
/// every mutation; forward movement hard-blocks on the current step's
/// predicate, uniformly for every entry point.
pub struct FormSession {
    store: Arc<StoreClient>,
    property_id: String,
    form: ApplicationForm,
    step: FormStep,
    submitted: bool,
}

impl FormSession {
    pub fn property_id(&self) -> &str {
        &self.property_id
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    /// Apply a field mutation and auto-save the draft.
    pub async fn update<F>(&mut self, mutate: F)
    where
        F: FnOnce(&mut ApplicationForm),
    {
        mutate(&mut self.form);
        self.save_progress().await;
    }

    pub fn validate_current(&self) -> StepValidation {
        validate_step(self.step, &self.form)
    }

    /// Move forward one step if the current step's predicate holds; on the
    /// final step a passing predicate submits instead.
    pub async fn advance(&mut self) -> Result<StepOutcome, AppError> {
        let validation = self.validate_current();
        if !validation.valid {
            return Ok(StepOutcome::Blocked(validation.errors));
        }

        if self.step.is_last() {
            let application = self.submit().await?;
            return Ok(StepOutcome::Submitted(application));
        }

        // is_last() guarantees a successor
        self.step = self.step.next().unwrap_or(FormStep::LAST);
        self.save_progress().await;
        Ok(StepOutcome::Moved(self.step))
    }

    pub async fn back(&mut self) -> FormStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
            self.save_progress().await;
        }
        self.step
    }

    /// Jump directly to an already-visited step. Forward skips are rejected.
    pub async fn go_to(&mut self, step: FormStep) -> Result<FormStep, AppError> {
        if step > self.step {
            return Err(AppError::ForwardJump);
        }
        self.step = step;
        self.save_progress().await;
        Ok(self.step)
    }

    /// Final submission: recomputes every step's predicate, appends exactly
    /// one pending application with a fresh reference, and deletes the draft.
    pub async fn submit(&mut self) -> Result<Application, AppError> {
        if self.submitted {
            return Err(AppError::AlreadySubmitted(self.property_id.clone()));
        }

        let mut step = FormStep::FIRST;
        loop {
            if !validate_step(step, &self.form).valid {
                return Err(AppError::IncompleteStep(step));
            }
            match step.next() {
                Some(next) => step = next,
                None => break,
            }
        }

        let submitted_at = Utc::now();
        let application = Application {
            id: Uuid::new_v4(),
            property_id: self.property_id.clone(),
            status: ApplicationStatus::Pending,
            reference: generate_reference(submitted_at),
            submitted_at,
            form: self.form.clone(),
        };

        self.store.append_application(application.clone()).await?;
        self.store.delete_draft(&self.property_id).await?;
        self.submitted = true;

        tracing::info!(
            "Application {} submitted for {}",
            application.reference,
            self.property_id
        );
        Ok(application)
    }

    /// Auto-save is fire-and-forget: a failed write is logged and the
    /// in-memory state carries on (the save simply did not happen).
    async fn save_progress(&self) {
        let draft = FormDraft {
            form: self.form.clone(),
            step: self.step,
            saved_at: Utc::now(),
        };
        if let Err(e) = self.store.save_draft(&self.property_id, &draft).await {
            tracing::error!("Failed to save draft for {}: {}", self.property_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryStore;
    use regex::Regex;

    fn service() -> ApplicationService {
        let store = Arc::new(StoreClient::new(Arc::new(MemoryStore::default())));
        ApplicationService::new(store, 24)
    }

    fn fill_personal(form: &mut ApplicationForm) {
        form.first_name = Some("Lerato".to_string());
        form.surname = Some("Mokoena".to_string());
        form.email = Some("lerato@example.com".to_string());
        form.id_number = Some("0101015009087".to_string());
    }

    fn fill_study(form: &mut ApplicationForm) {
        form.institution = Some("University of Cape Town".to_string());
        form.course = Some("BSc Computer Science".to_string());
        form.year_of_study = Some("2".to_string());
        form.student_number = Some("MKXLER001".to_string());
    }

    fn fill_funder(form: &mut ApplicationForm) {
        form.funder_type = Some("bursary".to_string());
        form.funder_name = Some("MasterCard Foundation".to_string());
    }

    fn fill_kin(form: &mut ApplicationForm) {
        form.kin_name = Some("Naledi Mokoena".to_string());
        form.kin_relationship = Some("Mother".to_string());
        form.kin_phone = Some("+27821234567".to_string());
    }

    fn fill_documents(form: &mut ApplicationForm) {
        form.id_document = Some("file:///docs/id.pdf".to_string());
        form.proof_of_registration = Some("file:///docs/registration.pdf".to_string());
    }

    async fn complete_session(svc: &ApplicationService, property_id: &str) -> FormSession {
        let mut session = svc.open(property_id).await.unwrap();
        session.update(fill_personal).await;
        session.update(fill_study).await;
        session.update(fill_funder).await;
        session.update(fill_kin).await;
        session.update(fill_documents).await;
        session.update(|f| f.accepted_terms = Some(true)).await;
        session
    }

    #[tokio::test]
    async fn advance_blocks_on_incomplete_step() {
        let svc = service();
        let mut session = svc.open("p1").await.unwrap();

        match session.advance().await.unwrap() {
            StepOutcome::Blocked(errors) => assert!(!errors.is_empty()),
            other => panic!("expected Blocked, got {:?}", other),
        }
        assert_eq!(session.step(), FormStep::PersonalDetails);

        session.update(fill_personal).await;
        assert_eq!(
            session.advance().await.unwrap(),
            StepOutcome::Moved(FormStep::StudyDetails)
        );
    }

    #[tokio::test]
    async fn back_and_visited_jumps_work_but_forward_jumps_do_not() {
        let svc = service();
        let mut session = svc.open("p1").await.unwrap();
        session.update(fill_personal).await;
        session.advance().await.unwrap();
        session.update(fill_study).await;
        session.advance().await.unwrap();
        assert_eq!(session.step(), FormStep::ResidenceFunder);

        assert_eq!(session.back().await, FormStep::StudyDetails);
        session
            .go_to(FormStep::PersonalDetails)
            .await
            .unwrap();
        assert_eq!(session.step(), FormStep::PersonalDetails);

        assert!(matches!(
            session.go_to(FormStep::NextOfKin).await,
            Err(AppError::ForwardJump)
        ));
        assert_eq!(session.back().await, FormStep::PersonalDetails);
    }

    #[tokio::test]
    async fn draft_restores_within_ttl() {
        let store = Arc::new(StoreClient::new(Arc::new(MemoryStore::default())));
        let svc = ApplicationService::new(store, 24);

        let mut session = svc.open("p1").await.unwrap();
        session.update(fill_personal).await;
        session.advance().await.unwrap();
        let saved_form = session.form().clone();
        drop(session);

        let restored = svc.open("p1").await.unwrap();
        assert_eq!(restored.property_id(), "p1");
        assert_eq!(restored.step(), FormStep::StudyDetails);
        assert_eq!(restored.form(), &saved_form);
    }

    #[tokio::test]
    async fn expired_draft_is_discarded_and_removed() {
        let store = Arc::new(StoreClient::new(Arc::new(MemoryStore::default())));
        let svc = ApplicationService::new(store.clone(), 24);

        let mut stale_form = ApplicationForm::default();
        fill_personal(&mut stale_form);
        store
            .save_draft(
                "p1",
                &FormDraft {
                    form: stale_form,
                    step: FormStep::NextOfKin,
                    saved_at: Utc::now() - Duration::hours(25),
                },
            )
            .await
            .unwrap();

        let session = svc.open("p1").await.unwrap();
        assert_eq!(session.step(), FormStep::PersonalDetails);
        assert_eq!(session.form(), &ApplicationForm::default());
        assert_eq!(store.load_draft("p1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn submit_appends_one_application_and_deletes_the_draft() {
        let store = Arc::new(StoreClient::new(Arc::new(MemoryStore::default())));
        let svc = ApplicationService::new(store.clone(), 24);

        let mut session = complete_session(&svc, "p1").await;
        assert!(store.load_draft("p1").await.unwrap().is_some());

        let application = session.submit().await.unwrap();
        assert_eq!(application.property_id, "p1");
        assert_eq!(application.status, ApplicationStatus::Pending);
        assert_eq!(application.status.to_str(), "pending");
        assert!(Regex::new(r"^APP-\d{8}$")
            .unwrap()
            .is_match(&application.reference));

        let listed = svc.applications().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, application.id);
        assert_eq!(store.load_draft("p1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn submitting_twice_is_rejected() {
        let svc = service();
        let mut session = complete_session(&svc, "p1").await;
        session.submit().await.unwrap();
        assert!(matches!(
            session.submit().await,
            Err(AppError::AlreadySubmitted(_))
        ));
        assert_eq!(svc.applications().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn submit_refuses_an_incomplete_form() {
        let svc = service();
        let mut session = svc.open("p1").await.unwrap();
        session.update(fill_personal).await;
        assert!(matches!(
            session.submit().await,
            Err(AppError::IncompleteStep(FormStep::StudyDetails))
        ));
        assert!(svc.applications().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn advance_submits_from_the_review_step() {
        let svc = service();
        let mut session = complete_session(&svc, "p2").await;
        for _ in 0..5 {
            match session.advance().await.unwrap() {
                StepOutcome::Moved(_) => {}
                other => panic!("expected Moved, got {:?}", other),
            }
        }
        assert_eq!(session.step(), FormStep::Review);
        match session.advance().await.unwrap() {
            StepOutcome::Submitted(application) => {
                assert_eq!(application.property_id, "p2");
            }
            other => panic!("expected Submitted, got {:?}", other),
        }
    }
}
