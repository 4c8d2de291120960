use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{entities::owner::OwnerId, errors::AppError, utils::date::parse_date_applied};

// ───── Constants ──────────────────────────────────────────────────────
const MIN_TEXT_LENGTH: u64 = 1;
const MAX_TEXT_LENGTH: u64 = 200;

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "application_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
    Accepted,
}

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub id: Uuid,
    pub owner_id: OwnerId,
    pub company: String,
    pub role: String,
    pub status: ApplicationStatus,
    pub date_applied: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields for a new record. The owner is supplied separately.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationFields {
    pub company: String,
    pub role: String,
    pub status: ApplicationStatus,
    pub date_applied: NaiveDate,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationChanges {
    pub company: Option<String>,
    pub role: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub date_applied: Option<NaiveDate>,
}

impl ApplicationChanges {
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.role.is_none()
            && self.status.is_none()
            && self.date_applied.is_none()
    }

    /// Applies the present fields to `record` in place.
    pub fn apply_to(&self, record: &mut ApplicationRecord) {
        if let Some(company) = &self.company {
            record.company = company.clone();
        }
        if let Some(role) = &self.role {
            record.role = role.clone();
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(date_applied) = self.date_applied {
            record.date_applied = date_applied;
        }
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

/// Body of `POST /applications`.
///
/// Anything else the client sends (`id`, `ownerId`, `userId`, `createdAt`)
/// is dropped during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewApplicationRequest {
    #[validate(length(min = MIN_TEXT_LENGTH, max = MAX_TEXT_LENGTH, message = "Company cannot be empty or longer than 200 characters"))]
    pub company: String,

    #[validate(length(min = MIN_TEXT_LENGTH, max = MAX_TEXT_LENGTH, message = "Role cannot be empty or longer than 200 characters"))]
    pub role: String,

    pub status: ApplicationStatus,

    pub date_applied: String,
}

impl NewApplicationRequest {
    /// Trims free-text fields so whitespace-only input fails validation.
    pub fn normalized(self) -> Self {
        NewApplicationRequest {
            company: self.company.trim().to_string(),
            role: self.role.trim().to_string(),
            ..self
        }
    }
}

impl TryFrom<NewApplicationRequest> for ApplicationFields {
    type Error = AppError;

    fn try_from(request: NewApplicationRequest) -> Result<Self, Self::Error> {
        Ok(ApplicationFields {
            date_applied: parse_date_applied(&request.date_applied)?,
            company: request.company,
            role: request.role,
            status: request.status,
        })
    }
}

/// Body of `PUT /applications/{id}`; any subset of the mutable fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateApplicationRequest {
    #[validate(length(min = MIN_TEXT_LENGTH, max = MAX_TEXT_LENGTH, message = "Company cannot be empty or longer than 200 characters"))]
    pub company: Option<String>,

    #[validate(length(min = MIN_TEXT_LENGTH, max = MAX_TEXT_LENGTH, message = "Role cannot be empty or longer than 200 characters"))]
    pub role: Option<String>,

    pub status: Option<ApplicationStatus>,

    pub date_applied: Option<String>,
}

impl UpdateApplicationRequest {
    pub fn normalized(self) -> Self {
        UpdateApplicationRequest {
            company: self.company.map(|c| c.trim().to_string()),
            role: self.role.map(|r| r.trim().to_string()),
            ..self
        }
    }
}

impl TryFrom<UpdateApplicationRequest> for ApplicationChanges {
    type Error = AppError;

    fn try_from(request: UpdateApplicationRequest) -> Result<Self, Self::Error> {
        let date_applied = request
            .date_applied
            .as_deref()
            .map(parse_date_applied)
            .transpose()?;

        Ok(ApplicationChanges {
            company: request.company,
            role: request.role,
            status: request.status,
            date_applied,
        })
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteApplicationResponse {
    pub message: String,
}

impl Default for DeleteApplicationResponse {
    fn default() -> Self {
        DeleteApplicationResponse {
            message: "Application deleted successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> ApplicationRecord {
        ApplicationRecord {
            id: Uuid::new_v4(),
            owner_id: OwnerId::new("user-1").unwrap(),
            company: "Acme".into(),
            role: "Eng".into(),
            status: ApplicationStatus::Applied,
            date_applied: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn status_serializes_in_upper_case() {
        assert_eq!(serde_json::to_value(ApplicationStatus::Offer).unwrap(), json!("OFFER"));
        let parsed: ApplicationStatus = serde_json::from_value(json!("INTERVIEW")).unwrap();
        assert_eq!(parsed, ApplicationStatus::Interview);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_value::<ApplicationStatus>(json!("GHOSTED")).is_err());
        assert!(serde_json::from_value::<ApplicationStatus>(json!("accepted")).is_err());
        assert!(serde_json::from_value::<ApplicationStatus>(json!(" OFFER")).is_err());
    }

    #[test]
    fn record_uses_camel_case_and_plain_dates() {
        let value = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(value["ownerId"], "user-1");
        assert_eq!(value["dateApplied"], "2024-01-10");
        assert_eq!(value["status"], "APPLIED");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn spoofed_owner_fields_are_dropped() {
        let request: NewApplicationRequest = serde_json::from_value(json!({
            "company": "Acme",
            "role": "Eng",
            "status": "APPLIED",
            "dateApplied": "2024-01-10",
            "ownerId": "someone-else",
            "userId": "someone-else"
        }))
        .unwrap();

        let fields = ApplicationFields::try_from(request).unwrap();
        assert_eq!(fields.company, "Acme");
        assert_eq!(fields.date_applied, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }

    #[test]
    fn blank_company_fails_validation_after_normalizing() {
        let request = NewApplicationRequest {
            company: "   ".into(),
            role: "Eng".into(),
            status: ApplicationStatus::Applied,
            date_applied: "2024-01-10".into(),
        }
        .normalized();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("company"));
    }

    #[test]
    fn empty_update_body_is_an_empty_change_set() {
        let request: UpdateApplicationRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.validate().is_ok());

        let changes = ApplicationChanges::try_from(request).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn apply_to_only_touches_present_fields() {
        let mut record = sample_record();
        let original = record.clone();

        ApplicationChanges {
            status: Some(ApplicationStatus::Interview),
            ..Default::default()
        }
        .apply_to(&mut record);

        assert_eq!(record.status, ApplicationStatus::Interview);
        assert_eq!(record.company, original.company);
        assert_eq!(record.role, original.role);
        assert_eq!(record.date_applied, original.date_applied);
        assert_eq!(record.owner_id, original.owner_id);
    }

    #[test]
    fn malformed_update_date_is_a_validation_error() {
        let request = UpdateApplicationRequest {
            date_applied: Some("next tuesday".into()),
            ..Default::default()
        };

        assert!(matches!(
            ApplicationChanges::try_from(request),
            Err(AppError::ValidationError(_))
        ));
    }
}
