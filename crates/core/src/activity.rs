//! Closed value sets describing an activity.
//!
//! Both enums are validated when a request body is deserialized and are
//! stored as their primitive form: the category as its snake_case name in
//! a `TEXT` column, the duration as its minute count in an `INTEGER`
//! column. The `CHECK` constraints in the `activities` migration list the
//! same values.

use serde::{Deserialize, Serialize};
use strum::{IntoStaticStr, VariantArray};

use crate::error::CoreError;

/// Kind of mood-boosting exercise.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    VariantArray,
    strum::Display,
    sqlx::Type,
    utoipa::ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[sqlx(type_name = "text", rename_all = "snake_case")]
pub enum ActivityCategory {
    Breathwork,
    Grounding,
    Journaling,
    SensoryMindfulness,
    Movement,
    Nature,
    Connection,
    ColdExposure,
    Meditation,
}

impl ActivityCategory {
    /// The stored and serialized form, e.g. `"cold_exposure"`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Fixed length of an activity, in minutes.
///
/// Serializes as a bare integer (`5`, `10`, ...). Any other integer is
/// rejected at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum ActivityDuration {
    FiveMinutes = 5,
    TenMinutes = 10,
    FifteenMinutes = 15,
    TwentyMinutes = 20,
    ThirtyMinutes = 30,
}

impl ActivityDuration {
    /// Every allowed duration, shortest first.
    pub const ALL: [ActivityDuration; 5] = [
        ActivityDuration::FiveMinutes,
        ActivityDuration::TenMinutes,
        ActivityDuration::FifteenMinutes,
        ActivityDuration::TwentyMinutes,
        ActivityDuration::ThirtyMinutes,
    ];

    pub fn minutes(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ActivityDuration {
    type Error = CoreError;

    fn try_from(minutes: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|d| d.minutes() == minutes)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid duration {minutes}. Must be one of: 5, 10, 15, 20, 30"
                ))
            })
    }
}

impl From<ActivityDuration> for i32 {
    fn from(value: ActivityDuration) -> Self {
        value.minutes()
    }
}
