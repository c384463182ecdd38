use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum GigType {
    #[sea_orm(string_value = "logo_design")]
    LogoDesign,
    #[sea_orm(string_value = "web_development")]
    WebDevelopment,
    #[sea_orm(string_value = "seo")]
    Seo,
    #[sea_orm(string_value = "video_editing")]
    VideoEditing,
    #[sea_orm(string_value = "content_writing")]
    ContentWriting,
    #[sea_orm(string_value = "data_entry")]
    DataEntry,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum GigStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "paused")]
    Paused,
    #[sea_orm(string_value = "deprecated")]
    Deprecated,
}

/// How a rated gig gets its rating purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum RatingType {
    #[sea_orm(string_value = "client")]
    Client,
    #[sea_orm(string_value = "paypal")]
    Paypal,
    #[sea_orm(string_value = "cash")]
    Cash,
}

/// SeaORM entity for the `gigs` table.
///
/// The four rating fields are only meaningful while `rated` is true, and
/// `rating_email` only while `rating_type` is paypal. Writes clear them
/// otherwise so stale rating data never reaches the rating report.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gigs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub gig_type: GigType,
    pub status: GigStatus,
    pub rated: bool,
    pub last_rated_date: Option<Date>,
    pub next_possible_rate_date: Option<Date>,
    pub rating_type: Option<RatingType>,
    pub rating_email: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id"
    )]
    Account,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGig {
    pub account_id: Uuid,
    pub name: String,
    pub gig_type: GigType,
    pub status: Option<GigStatus>,
    #[serde(default)]
    pub rated: bool,
    pub last_rated_date: Option<Date>,
    pub next_possible_rate_date: Option<Date>,
    pub rating_type: Option<RatingType>,
    pub rating_email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGig {
    pub name: Option<String>,
    pub gig_type: Option<GigType>,
    pub status: Option<GigStatus>,
    pub rated: Option<bool>,
    pub last_rated_date: Option<Date>,
    pub next_possible_rate_date: Option<Date>,
    pub rating_type: Option<RatingType>,
    pub rating_email: Option<String>,
}
