use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::applicationmodel::{ApplicationForm, FormStep};

/// One inline field error, as the form screens render them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StepValidation {
    pub step: FormStep,
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct PersonalDetailsDto {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Surname is required"))]
    pub surname: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "ID number is required"))]
    pub id_number: String,
}

impl PersonalDetailsDto {
    pub fn from_form(form: &ApplicationForm) -> Self {
        PersonalDetailsDto {
            first_name: form.first_name.clone().unwrap_or_default(),
            surname: form.surname.clone().unwrap_or_default(),
            email: form.email.clone().unwrap_or_default(),
            id_number: form.id_number.clone().unwrap_or_default(),
        }
    }
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct StudyDetailsDto {
    #[validate(length(min = 1, message = "Institution is required"))]
    pub institution: String,

    #[validate(length(min = 1, message = "Course is required"))]
    pub course: String,

    #[validate(length(min = 1, message = "Year of study is required"))]
    pub year_of_study: String,

    #[validate(length(min = 1, message = "Student number is required"))]
    pub student_number: String,
}

impl StudyDetailsDto {
    pub fn from_form(form: &ApplicationForm) -> Self {
        StudyDetailsDto {
            institution: form.institution.clone().unwrap_or_default(),
            course: form.course.clone().unwrap_or_default(),
            year_of_study: form.year_of_study.clone().unwrap_or_default(),
            student_number: form.student_number.clone().unwrap_or_default(),
        }
    }
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct ResidenceFunderDto {
    #[validate(length(min = 1, message = "Funder type is required"))]
    pub funder_type: String,

    #[validate(length(min = 1, message = "Funder name is required"))]
    pub funder_name: String,
}

impl ResidenceFunderDto {
    pub fn from_form(form: &ApplicationForm) -> Self {
        ResidenceFunderDto {
            funder_type: form.funder_type.clone().unwrap_or_default(),
            funder_name: form.funder_name.clone().unwrap_or_default(),
        }
    }
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct NextOfKinDto {
    #[validate(length(min = 1, message = "Next of kin name is required"))]
    pub kin_name: String,

    #[validate(length(min = 1, message = "Relationship is required"))]
    pub kin_relationship: String,

    #[validate(length(min = 1, message = "Next of kin phone is required"))]
    pub kin_phone: String,
}

impl NextOfKinDto {
    pub fn from_form(form: &ApplicationForm) -> Self {
        NextOfKinDto {
            kin_name: form.kin_name.clone().unwrap_or_default(),
            kin_relationship: form.kin_relationship.clone().unwrap_or_default(),
            kin_phone: form.kin_phone.clone().unwrap_or_default(),
        }
    }
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct DocumentsDto {
    #[validate(length(min = 1, message = "ID document is required"))]
    pub id_document: String,

    #[validate(length(min = 1, message = "Proof of registration is required"))]
    pub proof_of_registration: String,
}

impl DocumentsDto {
    pub fn from_form(form: &ApplicationForm) -> Self {
        DocumentsDto {
            id_document: form.id_document.clone().unwrap_or_default(),
            proof_of_registration: form.proof_of_registration.clone().unwrap_or_default(),
        }
    }
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct ReviewDto {
    #[validate(custom = "validate_terms_accepted")]
    pub accepted_terms: bool,
}

impl ReviewDto {
    pub fn from_form(form: &ApplicationForm) -> Self {
        ReviewDto {
            accepted_terms: form.accepted_terms.unwrap_or(false),
        }
    }
}

fn validate_terms_accepted(accepted: &bool) -> Result<(), validator::ValidationError> {
    if *accepted {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("terms_not_accepted");
        err.message = Some("Terms must be accepted before submitting".into());
        Err(err)
    }
}

/// Run one step's predicate over the shared form record. Pure; failures are
/// returned as field errors, never raised.
pub fn validate_step(step: FormStep, form: &ApplicationForm) -> StepValidation {
    let result = match step {
        FormStep::PersonalDetails => PersonalDetailsDto::from_form(form).validate(),
        FormStep::StudyDetails => StudyDetailsDto::from_form(form).validate(),
        FormStep::ResidenceFunder => ResidenceFunderDto::from_form(form).validate(),
        FormStep::NextOfKin => NextOfKinDto::from_form(form).validate(),
        FormStep::Documents => DocumentsDto::from_form(form).validate(),
        FormStep::Review => ReviewDto::from_form(form).validate(),
    };

    match result {
        Ok(()) => StepValidation {
            step,
            valid: true,
            errors: Vec::new(),
        },
        Err(errors) => StepValidation {
            step,
            valid: false,
            errors: collect_field_errors(&errors),
        },
    }
}

fn collect_field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            out.push(FieldError {
                field: field.to_string(),
                message,
            });
        }
    }
    // field_errors() iterates a HashMap; order the output for the screens
    out.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
    out
}
