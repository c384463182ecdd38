use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Freelance platform the account lives on, stored as a lowercase string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[sea_orm(string_value = "fiverr")]
    Fiverr,
    #[sea_orm(string_value = "upwork")]
    Upwork,
    #[sea_orm(string_value = "direct")]
    Direct,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Fiverr, Platform::Upwork, Platform::Direct];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Fiverr => "fiverr",
            Platform::Upwork => "upwork",
            Platform::Direct => "direct",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "paused")]
    Paused,
    #[sea_orm(string_value = "risk")]
    Risk,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Paused => "paused",
            AccountStatus::Risk => "risk",
        }
    }
}

/// SeaORM entity for the `accounts` table.
///
/// `(platform, email)` is unique — enforced by an index in the migration and
/// surfaced to callers as a Conflict error.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub platform: Platform,
    pub email: String,
    pub username: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub type_of_gigs: Option<String>,
    pub currency: String,
    pub status: AccountStatus,
    pub account_level: i32,
    #[sea_orm(column_type = "Double", nullable)]
    pub success_rate: Option<f64>,
    pub browser_type: Option<String>,
    pub proxy: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gigs::Entity")]
    Gigs,
    #[sea_orm(has_many = "super::shift_reports::Entity")]
    ShiftReports,
    #[sea_orm(has_many = "super::withdraws::Entity")]
    Withdraws,
    #[sea_orm(has_one = "super::payout_details::Entity")]
    PayoutDetails,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    CreatedBy,
}

impl Related<super::gigs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gigs.def()
    }
}

impl Related<super::shift_reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShiftReports.def()
    }
}

impl Related<super::withdraws::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Withdraws.def()
    }
}

impl Related<super::payout_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PayoutDetails.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccount {
    pub platform: Platform,
    pub email: String,
    pub username: String,
    pub type_of_gigs: Option<String>,
    pub currency: Option<String>,
    pub status: Option<AccountStatus>,
    pub account_level: Option<i32>,
    pub success_rate: Option<f64>,
    pub browser_type: Option<String>,
    pub proxy: Option<String>,
}

/// Partial update. The platform is fixed at creation time — changing it
/// would silently re-key the `(platform, email)` uniqueness constraint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAccount {
    pub email: Option<String>,
    pub username: Option<String>,
    pub type_of_gigs: Option<String>,
    pub currency: Option<String>,
    pub status: Option<AccountStatus>,
    pub account_level: Option<i32>,
    pub success_rate: Option<f64>,
    pub browser_type: Option<String>,
    pub proxy: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountListQuery {
    pub platform: Option<Platform>,
    pub status: Option<AccountStatus>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl AccountListQuery {
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(50).min(200)
    }

    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }
}

/// One entry of a bulk "accounts created" submission.
///
/// Legacy report blobs used `type` for the platform field, so it is accepted
/// as an alias on input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkAccountEntry {
    pub email: String,
    #[serde(alias = "type")]
    pub platform: Platform,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkFailure {
    pub email: String,
    pub error: String,
}

/// Outcome of a bulk create: per-item failures never abort the batch.
#[derive(Debug, Clone, Serialize)]
pub struct BulkCreateOutcome {
    pub created: usize,
    pub failed: Vec<BulkFailure>,
}
