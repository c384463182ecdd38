use chrono::NaiveDate;
use sea_orm::*;
use uuid::Uuid;

use crate::models::withdraws::{self, CreateWithdraw};

/// Insert a new withdraw ledger entry.
pub async fn insert_withdraw(
    db: &DatabaseConnection,
    input: CreateWithdraw,
) -> Result<withdraws::Model, DbErr> {
    let new_withdraw = withdraws::ActiveModel {
        id: Set(Uuid::new_v4()),
        account_id: Set(input.account_id),
        amount: Set(input.amount),
        withdraw_date: Set(input.withdraw_date),
        payment_means: Set(input.payment_means),
        notes: Set(input.notes),
        created_at: Set(chrono::Utc::now()),
    };

    new_withdraw.insert(db).await
}

/// Fetch all withdraws (finances roll-up input).
pub async fn get_all_withdraws(db: &DatabaseConnection) -> Result<Vec<withdraws::Model>, DbErr> {
    withdraws::Entity::find().all(db).await
}

/// Fetch withdraws with `withdraw_date >= from`, newest first.
pub async fn get_withdraws_since(
    db: &DatabaseConnection,
    from: NaiveDate,
) -> Result<Vec<withdraws::Model>, DbErr> {
    withdraws::Entity::find()
        .filter(withdraws::Column::WithdrawDate.gte(from))
        .order_by_desc(withdraws::Column::WithdrawDate)
        .all(db)
        .await
}

/// Fetch the withdraw ledger for one account, newest first.
pub async fn get_withdraws_by_account_id(
    db: &DatabaseConnection,
    account_id: Uuid,
) -> Result<Vec<withdraws::Model>, DbErr> {
    withdraws::Entity::find()
        .filter(withdraws::Column::AccountId.eq(account_id))
        .order_by_desc(withdraws::Column::WithdrawDate)
        .all(db)
        .await
}
