use serde::Deserialize;

use crate::error::FieldViolation;

/// Raw submission payload as it arrives from the client. Numeric and boolean
/// fields accept either native JSON types or their form-encoded string
/// spellings; malformed values fail validation instead of being defaulted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitRequestPayload {
    pub pet_id: Option<i32>,
    pub applicant_name: Option<String>,
    pub applicant_email: Option<String>,
    pub applicant_phone: Option<String>,
    pub applicant_age: Option<IntField>,
    pub applicant_occupation: Option<String>,
    pub applicant_address: Option<String>,
    pub applicant_city: Option<String>,
    pub applicant_state: Option<String>,
    pub applicant_zip_code: Option<String>,
    pub living_situation: Option<String>,
    pub housing_type: Option<String>,
    pub landlord_approval: Option<BoolField>,
    pub landlord_contact: Option<String>,
    pub household_members: Option<IntField>,
    pub children_ages: Option<String>,
    pub other_pets: Option<BoolField>,
    pub other_pets_details: Option<String>,
    pub pet_experience: Option<String>,
    pub pet_alone_hours: Option<IntField>,
    pub pet_exercise_plan: Option<String>,
    pub pet_training_plan: Option<String>,
    pub financial_commitment: Option<String>,
    pub time_commitment: Option<String>,
    pub adoption_motivation: Option<String>,
    pub pet_expectations: Option<String>,
    pub additional_info: Option<String>,
}

/// Integer that may arrive as a JSON number or a numeric string ("27").
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IntField {
    Number(i64),
    Text(String),
}

impl IntField {
    fn value(&self) -> Option<i64> {
        match self {
            IntField::Number(v) => Some(*v),
            IntField::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for IntField {
    fn from(value: i64) -> Self {
        IntField::Number(value)
    }
}

/// Boolean that may arrive as JSON true/false or as a "yes"/"no" form value.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BoolField {
    Flag(bool),
    Text(String),
}

impl BoolField {
    fn value(&self) -> Option<bool> {
        match self {
            BoolField::Flag(v) => Some(*v),
            BoolField::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "yes" | "true" => Some(true),
                "no" | "false" => Some(false),
                _ => None,
            },
        }
    }
}

impl From<bool> for BoolField {
    fn from(value: bool) -> Self {
        BoolField::Flag(value)
    }
}

/// A fully validated application, ready to persist. Required-field presence
/// is guaranteed by construction; the store accepts nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedApplication {
    pub pet_id: i32,
    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_phone: String,
    pub applicant_age: i32,
    pub applicant_occupation: String,
    pub applicant_address: String,
    pub applicant_city: String,
    pub applicant_state: String,
    pub applicant_zip_code: String,
    pub living_situation: String,
    pub housing_type: String,
    pub landlord_approval: bool,
    pub landlord_contact: Option<String>,
    pub household_members: i32,
    pub children_ages: Option<String>,
    pub other_pets: bool,
    pub other_pets_details: Option<String>,
    pub pet_experience: String,
    pub pet_alone_hours: i32,
    pub pet_exercise_plan: String,
    pub pet_training_plan: String,
    pub financial_commitment: String,
    pub time_commitment: String,
    pub adoption_motivation: String,
    pub pet_expectations: String,
    pub additional_info: Option<String>,
}

/// Validates every field and reports all violations at once.
pub fn validate(payload: &SubmitRequestPayload) -> Result<ValidatedApplication, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let pet_id = match payload.pet_id {
        Some(id) if id > 0 => Some(id),
        Some(_) => {
            violations.push(FieldViolation::new("petId", "must be a positive identifier"));
            None
        }
        None => {
            violations.push(FieldViolation::new("petId", "is required"));
            None
        }
    };

    let applicant_name = required_text(&payload.applicant_name, "applicantName", &mut violations);
    let applicant_email = required_text(&payload.applicant_email, "applicantEmail", &mut violations)
        .and_then(|email| {
            if email.contains('@') {
                Some(email)
            } else {
                violations.push(FieldViolation::new("applicantEmail", "must be a valid email address"));
                None
            }
        });
    let applicant_phone = required_text(&payload.applicant_phone, "applicantPhone", &mut violations);
    let applicant_age = required_int(&payload.applicant_age, "applicantAge", 18, 120, &mut violations);
    let applicant_occupation =
        required_text(&payload.applicant_occupation, "applicantOccupation", &mut violations);
    let applicant_address =
        required_text(&payload.applicant_address, "applicantAddress", &mut violations);
    let applicant_city = required_text(&payload.applicant_city, "applicantCity", &mut violations);
    let applicant_state = required_text(&payload.applicant_state, "applicantState", &mut violations);
    let applicant_zip_code =
        required_text(&payload.applicant_zip_code, "applicantZipCode", &mut violations);

    let living_situation =
        required_text(&payload.living_situation, "livingSituation", &mut violations);
    let housing_type = required_text(&payload.housing_type, "housingType", &mut violations);
    let landlord_approval = bool_field(&payload.landlord_approval, "landlordApproval", &mut violations);
    let landlord_contact = optional_text(&payload.landlord_contact);
    let renting = matches!(&living_situation, Some(v) if v.eq_ignore_ascii_case("renting"));
    if renting && landlord_approval && landlord_contact.is_none() {
        violations.push(FieldViolation::new(
            "landlordContact",
            "is required when renting with landlord approval",
        ));
    }

    let household_members =
        required_int(&payload.household_members, "householdMembers", 1, 100, &mut violations);
    let children_ages = optional_text(&payload.children_ages);
    let other_pets = bool_field(&payload.other_pets, "otherPets", &mut violations);
    let other_pets_details = optional_text(&payload.other_pets_details);
    if other_pets && other_pets_details.is_none() {
        violations.push(FieldViolation::new(
            "otherPetsDetails",
            "is required when you have other pets",
        ));
    }

    let pet_experience = required_text(&payload.pet_experience, "petExperience", &mut violations);
    let pet_alone_hours = required_int(&payload.pet_alone_hours, "petAloneHours", 0, 24, &mut violations);
    let pet_exercise_plan =
        required_text(&payload.pet_exercise_plan, "petExercisePlan", &mut violations);
    let pet_training_plan =
        required_text(&payload.pet_training_plan, "petTrainingPlan", &mut violations);

    let financial_commitment =
        required_text(&payload.financial_commitment, "financialCommitment", &mut violations);
    let time_commitment = required_text(&payload.time_commitment, "timeCommitment", &mut violations);
    let adoption_motivation =
        required_text(&payload.adoption_motivation, "adoptionMotivation", &mut violations);
    let pet_expectations =
        required_text(&payload.pet_expectations, "petExpectations", &mut violations);
    let additional_info = optional_text(&payload.additional_info);

    let application = (|| {
        Some(ValidatedApplication {
            pet_id: pet_id?,
            applicant_name: applicant_name?,
            applicant_email: applicant_email?,
            applicant_phone: applicant_phone?,
            applicant_age: applicant_age?,
            applicant_occupation: applicant_occupation?,
            applicant_address: applicant_address?,
            applicant_city: applicant_city?,
            applicant_state: applicant_state?,
            applicant_zip_code: applicant_zip_code?,
            living_situation: living_situation?,
            housing_type: housing_type?,
            landlord_approval,
            landlord_contact,
            household_members: household_members?,
            children_ages,
            other_pets,
            other_pets_details,
            pet_experience: pet_experience?,
            pet_alone_hours: pet_alone_hours?,
            pet_exercise_plan: pet_exercise_plan?,
            pet_training_plan: pet_training_plan?,
            financial_commitment: financial_commitment?,
            time_commitment: time_commitment?,
            adoption_motivation: adoption_motivation?,
            pet_expectations: pet_expectations?,
            additional_info,
        })
    })();

    match application {
        Some(application) if violations.is_empty() => Ok(application),
        _ => Err(violations),
    }
}

fn required_text(
    value: &Option<String>,
    field: &'static str,
    out: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            out.push(FieldViolation::new(field, "is required"));
            None
        }
    }
}

fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn required_int(
    value: &Option<IntField>,
    field: &'static str,
    min: i64,
    max: i64,
    out: &mut Vec<FieldViolation>,
) -> Option<i32> {
    let Some(raw) = value else {
        out.push(FieldViolation::new(field, "is required"));
        return None;
    };
    match raw.value() {
        None => {
            out.push(FieldViolation::new(field, "must be a whole number"));
            None
        }
        Some(v) if v < min => {
            out.push(FieldViolation::new(field, format!("must be at least {min}")));
            None
        }
        Some(v) if v > max => {
            out.push(FieldViolation::new(field, format!("must be at most {max}")));
            None
        }
        Some(v) => Some(v as i32),
    }
}

// An absent checkbox reads as false; garbage text is still rejected.
fn bool_field(value: &Option<BoolField>, field: &'static str, out: &mut Vec<FieldViolation>) -> bool {
    match value {
        None => false,
        Some(raw) => match raw.value() {
            Some(v) => v,
            None => {
                out.push(FieldViolation::new(field, "must be yes or no"));
                false
            }
        },
    }
}
