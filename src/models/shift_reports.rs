use sea_orm::entity::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

/// One of the two daily reporting windows, stored as a lowercase string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "UPPERCASE")]
pub enum Shift {
    #[sea_orm(string_value = "am")]
    Am,
    #[sea_orm(string_value = "pm")]
    Pm,
}

impl Shift {
    pub const ALL: [Shift; 2] = [Shift::Am, Shift::Pm];

    /// PM ranks above AM when ordering reports within the same date.
    pub fn rank(&self) -> u8 {
        match self {
            Shift::Am => 0,
            Shift::Pm => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Am => "AM",
            Shift::Pm => "PM",
        }
    }
}

/// SeaORM entity for the `shift_reports` table.
///
/// `(account_id, report_date, shift)` is unique; the identity fields are
/// immutable once created while the metric fields stay editable.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shift_reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub account_id: Uuid,
    pub reported_by: Uuid,
    pub report_date: Date,
    pub shift: Shift,
    pub orders_completed: i32,
    pub pending_orders: i32,
    #[sea_orm(column_type = "Double")]
    pub available_balance: f64,
    #[sea_orm(column_type = "Double")]
    pub pending_balance: f64,
    #[sea_orm(column_type = "Double")]
    pub orders_in_progress_value: f64,
    pub ranking_page: Option<i32>,
    #[sea_orm(column_type = "Double", nullable)]
    pub success_rate: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub response_rate: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub earnings_to_date: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub rating: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub handed_over_to: Option<Uuid>,
    /// Untyped JSON in the store; parse with [`parse_orders_in_progress`].
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub orders_in_progress: Option<Json>,
    /// Untyped JSON in the store; parse with [`parse_created_accounts`].
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub accounts_created: Option<Json>,
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
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ReportedBy",
        to = "super::users::Column::Id"
    )]
    Reporter,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::HandedOverTo",
        to = "super::users::Column::Id"
    )]
    HandoverTarget,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reporter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── JSON blob schemas ──

/// One in-flight order carried on a shift report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInProgress {
    pub account: String,
    pub deadline: String,
    pub handler_phone: String,
}

/// One platform account opened during a shift, as recorded on the report.
///
/// Legacy blobs stored the platform under `type`; accept it as an alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedAccountEntry {
    pub email: String,
    #[serde(alias = "type")]
    pub platform: String,
}

/// Decode a stored JSON blob into a typed list.
///
/// Legacy rows may hold malformed JSON; those decode to an empty list rather
/// than an error.
fn parse_json_list<T: serde::de::DeserializeOwned>(raw: Option<&Json>) -> Vec<T> {
    raw.and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default()
}

pub fn parse_orders_in_progress(raw: Option<&Json>) -> Vec<OrderInProgress> {
    parse_json_list(raw)
}

pub fn parse_created_accounts(raw: Option<&Json>) -> Vec<CreatedAccountEntry> {
    parse_json_list(raw)
}

// ── Tri-state update for JSON-valued fields ──

/// Update semantics for a JSON list field: a payload that omits the field
/// leaves the stored value untouched, an explicit `null` clears it, and a
/// list replaces it. Omission and `null` are different operations, so the
/// three states are spelled out instead of sniffing `Option` sentinels.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonListUpdate<T> {
    Unchanged,
    Clear,
    Set(Vec<T>),
}

impl<T> Default for JsonListUpdate<T> {
    fn default() -> Self {
        JsonListUpdate::Unchanged
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for JsonListUpdate<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the field is present in the payload; `#[serde(default)]`
        // on the field covers the Unchanged case.
        let value = Option::<Vec<T>>::deserialize(deserializer)?;
        Ok(match value {
            None => JsonListUpdate::Clear,
            Some(list) => JsonListUpdate::Set(list),
        })
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateShiftReport {
    pub account_id: Uuid,
    pub report_date: Date,
    pub shift: Shift,
    #[serde(default)]
    pub orders_completed: i32,
    #[serde(default)]
    pub pending_orders: i32,
    #[serde(default)]
    pub available_balance: f64,
    #[serde(default)]
    pub pending_balance: f64,
    #[serde(default)]
    pub orders_in_progress_value: f64,
    pub ranking_page: Option<i32>,
    pub success_rate: Option<f64>,
    pub response_rate: Option<f64>,
    pub earnings_to_date: Option<f64>,
    pub rating: Option<f64>,
    pub notes: Option<String>,
    pub handed_over_to: Option<Uuid>,
    pub orders_in_progress: Option<Vec<OrderInProgress>>,
    pub accounts_created: Option<Vec<CreatedAccountEntry>>,
}

/// Partial update. Identity fields (account, date, shift) are not here —
/// they are fixed once the report exists.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShiftReport {
    pub orders_completed: Option<i32>,
    pub pending_orders: Option<i32>,
    pub available_balance: Option<f64>,
    pub pending_balance: Option<f64>,
    pub orders_in_progress_value: Option<f64>,
    pub ranking_page: Option<i32>,
    pub success_rate: Option<f64>,
    pub response_rate: Option<f64>,
    pub earnings_to_date: Option<f64>,
    pub rating: Option<f64>,
    pub notes: Option<String>,
    pub handed_over_to: Option<Uuid>,
    #[serde(default)]
    pub orders_in_progress: JsonListUpdate<OrderInProgress>,
    #[serde(default)]
    pub accounts_created: JsonListUpdate<CreatedAccountEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportListQuery {
    /// Trailing window in days, counted back from today (server-local).
    pub days: Option<i64>,
    pub account_id: Option<Uuid>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl ReportListQuery {
    pub fn days(&self) -> i64 {
        self.days.unwrap_or(7).clamp(1, 366)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(100).min(500)
    }

    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }
}
