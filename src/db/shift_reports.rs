use chrono::NaiveDate;
use sea_orm::*;
use uuid::Uuid;

use crate::models::shift_reports::{
    self, CreateShiftReport, JsonListUpdate, ReportListQuery, Shift, UpdateShiftReport,
};

fn to_json_column<T: serde::Serialize>(list: Option<Vec<T>>) -> Option<serde_json::Value> {
    list.map(|l| serde_json::to_value(l).unwrap_or_default())
}

/// Insert a new shift report. Callers check the `(account, date, shift)`
/// uniqueness first; the unique index backs them up under concurrent
/// submissions.
pub async fn insert_report(
    db: &DatabaseConnection,
    input: CreateShiftReport,
    reported_by: Uuid,
) -> Result<shift_reports::Model, DbErr> {
    let new_report = shift_reports::ActiveModel {
        id: Set(Uuid::new_v4()),
        account_id: Set(input.account_id),
        reported_by: Set(reported_by),
        report_date: Set(input.report_date),
        shift: Set(input.shift),
        orders_completed: Set(input.orders_completed),
        pending_orders: Set(input.pending_orders),
        available_balance: Set(input.available_balance),
        pending_balance: Set(input.pending_balance),
        orders_in_progress_value: Set(input.orders_in_progress_value),
        ranking_page: Set(input.ranking_page),
        success_rate: Set(input.success_rate),
        response_rate: Set(input.response_rate),
        earnings_to_date: Set(input.earnings_to_date),
        rating: Set(input.rating),
        notes: Set(input.notes),
        handed_over_to: Set(input.handed_over_to),
        orders_in_progress: Set(to_json_column(input.orders_in_progress)),
        accounts_created: Set(to_json_column(input.accounts_created)),
        created_at: Set(chrono::Utc::now()),
    };

    new_report.insert(db).await
}

/// Check whether a report already exists for `(account, date, shift)`.
pub async fn report_exists(
    db: &DatabaseConnection,
    account_id: Uuid,
    report_date: NaiveDate,
    shift: Shift,
) -> Result<bool, DbErr> {
    let found = shift_reports::Entity::find()
        .filter(shift_reports::Column::AccountId.eq(account_id))
        .filter(shift_reports::Column::ReportDate.eq(report_date))
        .filter(shift_reports::Column::Shift.eq(shift))
        .one(db)
        .await?;
    Ok(found.is_some())
}

/// Fetch a single report by ID.
pub async fn get_report_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<shift_reports::Model>, DbErr> {
    shift_reports::Entity::find_by_id(id).one(db).await
}

/// Fetch all reports (aggregation input).
pub async fn get_all_reports(db: &DatabaseConnection) -> Result<Vec<shift_reports::Model>, DbErr> {
    shift_reports::Entity::find().all(db).await
}

/// Fetch reports with `report_date >= from`, across all accounts.
pub async fn get_reports_since(
    db: &DatabaseConnection,
    from: NaiveDate,
) -> Result<Vec<shift_reports::Model>, DbErr> {
    shift_reports::Entity::find()
        .filter(shift_reports::Column::ReportDate.gte(from))
        .all(db)
        .await
}

/// Fetch all reports for one calendar date (missing-report detection).
pub async fn get_reports_for_date(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<Vec<shift_reports::Model>, DbErr> {
    shift_reports::Entity::find()
        .filter(shift_reports::Column::ReportDate.eq(date))
        .all(db)
        .await
}

/// Fetch reports matching the list filters, newest first (date, then shift).
pub async fn list_reports(
    db: &DatabaseConnection,
    query: &ReportListQuery,
    from: NaiveDate,
) -> Result<Vec<shift_reports::Model>, DbErr> {
    let mut find = shift_reports::Entity::find()
        .filter(shift_reports::Column::ReportDate.gte(from));

    if let Some(account_id) = query.account_id {
        find = find.filter(shift_reports::Column::AccountId.eq(account_id));
    }

    find.order_by_desc(shift_reports::Column::ReportDate)
        .order_by_desc(shift_reports::Column::Shift)
        .limit(query.limit())
        .offset(query.offset())
        .all(db)
        .await
}

/// Update the metric fields of an existing report.
///
/// The JSON-valued fields follow the tri-state contract: `Unchanged` leaves
/// the stored value alone, `Clear` nulls it, `Set` replaces it.
pub async fn update_report(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateShiftReport,
) -> Result<shift_reports::Model, DbErr> {
    let report = shift_reports::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Shift report not found".to_string()))?;

    let mut active: shift_reports::ActiveModel = report.into();

    if let Some(orders_completed) = input.orders_completed {
        active.orders_completed = Set(orders_completed);
    }
    if let Some(pending_orders) = input.pending_orders {
        active.pending_orders = Set(pending_orders);
    }
    if let Some(available_balance) = input.available_balance {
        active.available_balance = Set(available_balance);
    }
    if let Some(pending_balance) = input.pending_balance {
        active.pending_balance = Set(pending_balance);
    }
    if let Some(orders_in_progress_value) = input.orders_in_progress_value {
        active.orders_in_progress_value = Set(orders_in_progress_value);
    }
    if let Some(ranking_page) = input.ranking_page {
        active.ranking_page = Set(Some(ranking_page));
    }
    if let Some(success_rate) = input.success_rate {
        active.success_rate = Set(Some(success_rate));
    }
    if let Some(response_rate) = input.response_rate {
        active.response_rate = Set(Some(response_rate));
    }
    if let Some(earnings_to_date) = input.earnings_to_date {
        active.earnings_to_date = Set(Some(earnings_to_date));
    }
    if let Some(rating) = input.rating {
        active.rating = Set(Some(rating));
    }
    if let Some(notes) = input.notes {
        active.notes = Set(Some(notes));
    }
    if let Some(handed_over_to) = input.handed_over_to {
        active.handed_over_to = Set(Some(handed_over_to));
    }

    match input.orders_in_progress {
        JsonListUpdate::Unchanged => {}
        JsonListUpdate::Clear => active.orders_in_progress = Set(None),
        JsonListUpdate::Set(list) => {
            active.orders_in_progress = Set(to_json_column(Some(list)));
        }
    }
    match input.accounts_created {
        JsonListUpdate::Unchanged => {}
        JsonListUpdate::Clear => active.accounts_created = Set(None),
        JsonListUpdate::Set(list) => {
            active.accounts_created = Set(to_json_column(Some(list)));
        }
    }

    active.update(db).await
}
