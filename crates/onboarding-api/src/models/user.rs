//! User request/response models
//!
//! The request carries the plaintext password; the response never does.
//! `address` is derived at serialization time from the stored street, city,
//! state, and zip columns and is not itself a column.

use chrono::NaiveDate;
use onboarding_core::{NewUserRecord, UserRecord};
use serde::{Deserialize, Serialize};

/// Request payload for creating an onboarding applicant.
///
/// # Example
/// ```json
/// {
///   "email": "jane@example.com",
///   "password": "s3cret",
///   "aboutMe": "Hi there",
///   "street": "1 Main St",
///   "city": "Metropolis",
///   "state": "NY",
///   "zip": "10001",
///   "birthdate": "1990-04-02"
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default, rename = "aboutMe")]
    pub about_me: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub birthdate: Option<NaiveDate>,
}

impl CreateUserRequest {
    pub fn into_record(self) -> NewUserRecord {
        NewUserRecord {
            email: self.email,
            password: self.password,
            about_me: self.about_me,
            street: self.street,
            city: self.city,
            state: self.state,
            zip: self.zip,
            birthdate: self.birthdate,
        }
    }
}

/// Client-safe projection of a stored user. No password field exists here at
/// all, so it cannot leak on any read path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: Option<String>,
    #[serde(rename = "aboutMe")]
    pub about_me: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub address: String,
    pub birthdate: Option<NaiveDate>,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        let address = record.display_address();
        UserResponse {
            id: record.id,
            email: record.email,
            about_me: record.about_me,
            street: record.street,
            city: record.city,
            state: record.state,
            zip: record.zip,
            address,
            birthdate: record.birthdate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthdate_wire_format() {
        let json = r#"{"email": "a@b.c", "birthdate": "1990-04-02"}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.birthdate, NaiveDate::from_ymd_opt(1990, 4, 2));

        let record = request.into_record();
        let response = UserResponse::from(UserRecord {
            id: 7,
            email: record.email,
            password: record.password,
            about_me: record.about_me,
            street: record.street,
            city: record.city,
            state: record.state,
            zip: record.zip,
            birthdate: record.birthdate,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["birthdate"], "1990-04-02");
    }

    #[test]
    fn test_response_has_no_password_key() {
        let response = UserResponse::from(UserRecord {
            id: 1,
            email: Some("a@b.c".to_string()),
            password: Some("s3cret".to_string()),
            about_me: None,
            street: None,
            city: Some("Metropolis".to_string()),
            state: None,
            zip: None,
            birthdate: None,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["address"], "Metropolis");
    }
}
