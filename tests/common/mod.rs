#![allow(dead_code)]

use chrono::NaiveDate;
use sea_orm::prelude::DateTime;

use petlify_server::adoption::intake::{BoolField, IntField, SubmitRequestPayload};
use petlify_server::entities::{adoption_request, pet, user};

pub fn ts(day: u32, hour: u32) -> DateTime {
    NaiveDate::from_ymd_opt(2026, 7, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
}

pub fn sample_user(id: i32, is_admin: bool) -> user::Model {
    user::Model {
        id,
        email: format!("user{id}@example.com"),
        password_hash: "$argon2id$stub".to_string(),
        name: format!("User {id}"),
        is_admin,
        created_at: ts(1, 8),
        updated_at: ts(1, 8),
    }
}

pub fn sample_pet(id: i32) -> pet::Model {
    pet::Model {
        id,
        submitted_by: 1,
        name: "Biscuit".to_string(),
        species: "dog".to_string(),
        breed: "beagle".to_string(),
        age: 4,
        description: "Gentle beagle looking for a quiet home".to_string(),
        gender: Some("male".to_string()),
        size: Some("medium".to_string()),
        color: None,
        weight: Some(11.5),
        is_vaccinated: true,
        is_neutered: true,
        is_house_trained: false,
        health_issues: None,
        special_needs: None,
        temperament: Some("calm".to_string()),
        energy_level: Some("medium".to_string()),
        owner_mobile: None,
        owner_address: None,
        owner_city: None,
        owner_state: None,
        owner_zip_code: None,
        reason_for_rehoming: Some("Moving abroad".to_string()),
        rehoming_urgency: None,
        images: serde_json::json!([]),
        status: "approved".to_string(),
        created_at: ts(2, 9),
        updated_at: ts(2, 9),
    }
}

pub fn sample_request(id: i32, pet_id: i32, user_id: i32, status: &str) -> adoption_request::Model {
    adoption_request::Model {
        id,
        pet_id,
        user_id,
        applicant_name: "Dana Whitfield".to_string(),
        applicant_email: "dana@example.com".to_string(),
        applicant_phone: "555-0188".to_string(),
        applicant_age: 29,
        applicant_occupation: "Nurse".to_string(),
        applicant_address: "14 Alder Row".to_string(),
        applicant_city: "Portland".to_string(),
        applicant_state: "OR".to_string(),
        applicant_zip_code: "97205".to_string(),
        living_situation: "renting".to_string(),
        housing_type: "apartment".to_string(),
        landlord_approval: true,
        landlord_contact: Some("landlord@example.com".to_string()),
        household_members: 2,
        children_ages: None,
        other_pets: false,
        other_pets_details: None,
        pet_experience: "Grew up with dogs".to_string(),
        pet_alone_hours: 4,
        pet_exercise_plan: "Morning and evening walks".to_string(),
        pet_training_plan: "Weekend obedience classes".to_string(),
        financial_commitment: "Budgeted for food and vet care".to_string(),
        time_commitment: "Work from home three days a week".to_string(),
        adoption_motivation: "Companionship".to_string(),
        pet_expectations: "A calm family dog".to_string(),
        additional_info: None,
        status: status.to_string(),
        created_at: ts(10, 9),
        updated_at: ts(10, 9),
    }
}

pub fn complete_payload(pet_id: i32) -> SubmitRequestPayload {
    SubmitRequestPayload {
        pet_id: Some(pet_id),
        applicant_name: Some("Dana Whitfield".to_string()),
        applicant_email: Some("dana@example.com".to_string()),
        applicant_phone: Some("555-0188".to_string()),
        applicant_age: Some(IntField::from(29)),
        applicant_occupation: Some("Nurse".to_string()),
        applicant_address: Some("14 Alder Row".to_string()),
        applicant_city: Some("Portland".to_string()),
        applicant_state: Some("OR".to_string()),
        applicant_zip_code: Some("97205".to_string()),
        living_situation: Some("renting".to_string()),
        housing_type: Some("apartment".to_string()),
        landlord_approval: Some(BoolField::from(true)),
        landlord_contact: Some("landlord@example.com".to_string()),
        household_members: Some(IntField::from(2)),
        children_ages: None,
        other_pets: Some(BoolField::from(false)),
        other_pets_details: None,
        pet_experience: Some("Grew up with dogs".to_string()),
        pet_alone_hours: Some(IntField::from(4)),
        pet_exercise_plan: Some("Morning and evening walks".to_string()),
        pet_training_plan: Some("Weekend obedience classes".to_string()),
        financial_commitment: Some("Budgeted for food and vet care".to_string()),
        time_commitment: Some("Work from home three days a week".to_string()),
        adoption_motivation: Some("Companionship".to_string()),
        pet_expectations: Some("A calm family dog".to_string()),
        additional_info: None,
    }
}
