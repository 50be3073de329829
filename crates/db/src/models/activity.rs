//! Activity entity model and request/response schemas.

use oasis_core::activity::{ActivityCategory, ActivityDuration};
use oasis_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// An activity row from the `activities` table.
#[derive(Debug, Clone, FromRow)]
pub struct Activity {
    pub id: DbId,
    pub name: String,
    pub category: ActivityCategory,
    pub duration_minutes: ActivityDuration,
    pub instructions: String,
    pub created_at: Timestamp,
}

/// Request body for `POST /activities`.
///
/// Unknown categories and durations outside 5/10/15/20/30 fail during
/// deserialization; length limits are checked by [`Validate`].
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateActivity {
    #[validate(length(max = 100))]
    #[schema(max_length = 100, example = "Box breathing")]
    pub name: String,
    pub category: ActivityCategory,
    /// One of 5, 10, 15, 20 or 30.
    #[schema(value_type = i32, example = 5)]
    pub duration_minutes: ActivityDuration,
    pub instructions: String,
}

/// Response body for an activity.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivityResponse {
    #[schema(value_type = String, format = Uuid)]
    pub id: DbId,
    pub name: String,
    pub category: ActivityCategory,
    #[schema(value_type = i32, example = 5)]
    pub duration_minutes: ActivityDuration,
    pub instructions: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name,
            category: activity.category,
            duration_minutes: activity.duration_minutes,
            instructions: activity.instructions,
            created_at: activity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_payload_parses_enums() {
        let input: CreateActivity = serde_json::from_value(json!({
            "name": "Box breathing",
            "category": "breathwork",
            "duration_minutes": 5,
            "instructions": "Inhale 4, hold 4, exhale 4, hold 4."
        }))
        .unwrap();

        assert_eq!(input.category, ActivityCategory::Breathwork);
        assert_eq!(input.duration_minutes, ActivityDuration::FiveMinutes);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn create_payload_requires_every_field() {
        let result = serde_json::from_value::<CreateActivity>(json!({
            "name": "Walk",
            "category": "movement",
            "duration_minutes": 10
        }));
        assert!(result.is_err());
    }

    #[test]
    fn overlong_name_fails_validation() {
        let input = CreateActivity {
            name: "x".repeat(101),
            category: ActivityCategory::Nature,
            duration_minutes: ActivityDuration::ThirtyMinutes,
            instructions: "Go outside.".into(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
