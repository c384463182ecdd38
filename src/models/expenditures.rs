use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ExpenditureType {
    #[sea_orm(string_value = "proxy")]
    Proxy,
    #[sea_orm(string_value = "subscription")]
    Subscription,
    #[sea_orm(string_value = "salary")]
    Salary,
    #[sea_orm(string_value = "equipment")]
    Equipment,
    #[sea_orm(string_value = "rating")]
    Rating,
    #[sea_orm(string_value = "other")]
    Other,
}

/// SeaORM entity for the `expenditures` table. Append-only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenditures")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub item_name: String,
    pub expenditure_type: ExpenditureType,
    #[sea_orm(column_type = "Double")]
    pub cost: f64,
    pub transaction_id: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpenditure {
    pub item_name: String,
    pub expenditure_type: ExpenditureType,
    pub cost: f64,
    pub transaction_id: Option<String>,
}
