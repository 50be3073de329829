//! Fixtures shared by the repository integration tests.

#![allow(dead_code)]

use oasis_core::activity::{ActivityCategory, ActivityDuration};
use oasis_db::models::activity::{Activity, CreateActivity};
use oasis_db::models::flow::{CreateFlow, CreateFlowStep, Flow, FlowStep};
use oasis_db::models::user::{CreateUser, User};
use oasis_db::repositories::{ActivityRepo, FlowRepo, FlowStepRepo, UserRepo};
use sqlx::PgPool;

pub async fn seed_user(pool: &PgPool, email: &str, phone: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            hashed_password: "$argon2id$v=19$placeholder".to_string(),
            display_name: "Test User".to_string(),
            phone_number: phone.to_string(),
        },
    )
    .await
    .expect("create user")
}

pub async fn seed_activity(pool: &PgPool, name: &str) -> Activity {
    ActivityRepo::create(
        pool,
        &CreateActivity {
            name: name.to_string(),
            category: ActivityCategory::Breathwork,
            duration_minutes: ActivityDuration::FiveMinutes,
            instructions: "Breathe in for four counts, out for six.".to_string(),
        },
    )
    .await
    .expect("create activity")
}

pub async fn seed_flow(pool: &PgPool, name: &str) -> Flow {
    FlowRepo::create(
        pool,
        &CreateFlow {
            name: name.to_string(),
            description: "A short reset.".to_string(),
        },
    )
    .await
    .expect("create flow")
}

pub async fn seed_step(pool: &PgPool, flow: &Flow, activity: &Activity, order: i32) -> FlowStep {
    FlowStepRepo::create(
        pool,
        &CreateFlowStep {
            flow_id: flow.id,
            activity_id: activity.id,
            order,
            has_check_in: false,
        },
    )
    .await
    .expect("create flow step")
}
