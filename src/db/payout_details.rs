use sea_orm::*;
use uuid::Uuid;

use crate::models::payout_details::{self, UpsertPayoutDetail};

/// Fetch the payout detail for an account, if any.
pub async fn get_by_account_id(
    db: &DatabaseConnection,
    account_id: Uuid,
) -> Result<Option<payout_details::Model>, DbErr> {
    payout_details::Entity::find()
        .filter(payout_details::Column::AccountId.eq(account_id))
        .one(db)
        .await
}

/// Upsert the payout detail for an account (at most one row per account).
pub async fn upsert_for_account(
    db: &DatabaseConnection,
    account_id: Uuid,
    input: UpsertPayoutDetail,
) -> Result<payout_details::Model, DbErr> {
    match get_by_account_id(db, account_id).await? {
        Some(existing) => {
            let mut active: payout_details::ActiveModel = existing.into();
            active.payment_gateway = Set(input.payment_gateway);
            active.mobile_number = Set(input.mobile_number);
            active.updated_at = Set(Some(chrono::Utc::now()));
            active.update(db).await
        }
        None => {
            let new_detail = payout_details::ActiveModel {
                id: Set(Uuid::new_v4()),
                account_id: Set(account_id),
                payment_gateway: Set(input.payment_gateway),
                mobile_number: Set(input.mobile_number),
                created_at: Set(chrono::Utc::now()),
                updated_at: Set(None),
            };
            new_detail.insert(db).await
        }
    }
}
