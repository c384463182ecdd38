use sea_orm::*;
use uuid::Uuid;

use crate::models::expenditures::{self, CreateExpenditure};

/// Insert a new expenditure entry.
pub async fn insert_expenditure(
    db: &DatabaseConnection,
    input: CreateExpenditure,
) -> Result<expenditures::Model, DbErr> {
    let new_expenditure = expenditures::ActiveModel {
        id: Set(Uuid::new_v4()),
        item_name: Set(input.item_name),
        expenditure_type: Set(input.expenditure_type),
        cost: Set(input.cost),
        transaction_id: Set(input.transaction_id),
        created_at: Set(chrono::Utc::now()),
    };

    new_expenditure.insert(db).await
}

/// Fetch all expenditures, newest first.
pub async fn get_all_expenditures(
    db: &DatabaseConnection,
) -> Result<Vec<expenditures::Model>, DbErr> {
    expenditures::Entity::find()
        .order_by_desc(expenditures::Column::CreatedAt)
        .all(db)
        .await
}
