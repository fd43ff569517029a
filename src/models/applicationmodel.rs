use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    Interview,
}

impl ApplicationStatus {
    pub fn to_str(&self) -> &str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Interview => "interview",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    PersonalDetails,
    StudyDetails,
    ResidenceFunder,
    NextOfKin,
    Documents,
    Review,
}

impl FormStep {
    pub const FIRST: FormStep = FormStep::PersonalDetails;
    pub const LAST: FormStep = FormStep::Review;

    pub fn number(&self) -> u8 {
        match self {
            FormStep::PersonalDetails => 1,
            FormStep::StudyDetails => 2,
            FormStep::ResidenceFunder => 3,
            FormStep::NextOfKin => 4,
            FormStep::Documents => 5,
            FormStep::Review => 6,
        }
    }

    pub fn from_number(n: u8) -> Option<FormStep> {
        match n {
            1 => Some(FormStep::PersonalDetails),
            2 => Some(FormStep::StudyDetails),
            3 => Some(FormStep::ResidenceFunder),
            4 => Some(FormStep::NextOfKin),
            5 => Some(FormStep::Documents),
            6 => Some(FormStep::Review),
            _ => None,
        }
    }

    pub fn next(&self) -> Option<FormStep> {
        FormStep::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<FormStep> {
        FormStep::from_number(self.number().wrapping_sub(1))
    }

    pub fn is_last(&self) -> bool {
        *self == FormStep::LAST
    }
}

/// The shared record every form step writes into. All fields are optional:
/// steps fill their own subset and the per-step predicates decide completeness.
/// Document fields hold opaque device file references and are never parsed.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApplicationForm {
    // Personal details
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub id_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,

    // Study details
    pub institution: Option<String>,
    pub campus: Option<String>,
    pub course: Option<String>,
    pub year_of_study: Option<String>,
    pub student_number: Option<String>,

    // Residence funder
    pub funder_type: Option<String>,
    pub funder_name: Option<String>,
    pub funder_contact: Option<String>,

    // Next of kin
    pub kin_name: Option<String>,
    pub kin_relationship: Option<String>,
    pub kin_phone: Option<String>,
    pub kin_email: Option<String>,

    // Document uploads (opaque file references)
    pub id_document: Option<String>,
    pub proof_of_registration: Option<String>,
    pub funder_letter: Option<String>,

    // Review
    pub accepted_terms: Option<bool>,
}

/// Auto-saved snapshot of an in-progress form, keyed by property id.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FormDraft {
    pub form: ApplicationForm,
    pub step: FormStep,
    pub saved_at: DateTime<Utc>,
}

/// A submitted application. Immutable after creation; only the (absent)
/// backend would ever move its status.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Application {
    pub id: Uuid,
    pub property_id: String,
    pub status: ApplicationStatus,
    pub reference: String,
    pub submitted_at: DateTime<Utc>,
    pub form: ApplicationForm,
}
