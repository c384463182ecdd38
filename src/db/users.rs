use sea_orm::*;
use uuid::Uuid;

use crate::models::users::{self, CreateUserFromAuth, Roles};

/// Find the internal user for an external identity, creating it on first
/// sight (called by the auth extractor).
///
/// The very first user created becomes admin; everyone after that is an
/// operator.
pub async fn find_or_create_from_auth(
    db: &DatabaseConnection,
    input: CreateUserFromAuth,
) -> Result<users::Model, DbErr> {
    if let Some(existing) = users::Entity::find()
        .filter(users::Column::ClerkId.eq(&input.clerk_id))
        .one(db)
        .await?
    {
        return Ok(existing);
    }

    let existing_users = users::Entity::find().count(db).await?;
    let role = if existing_users == 0 {
        Roles::Admin
    } else {
        Roles::Operator
    };

    let new_user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        clerk_id: Set(input.clerk_id),
        email: Set(input.email),
        name: Set(input.name),
        role: Set(role),
        created_at: Set(chrono::Utc::now()),
    };

    new_user.insert(db).await
}

/// Fetch all users.
pub async fn get_all_users(db: &DatabaseConnection) -> Result<Vec<users::Model>, DbErr> {
    users::Entity::find().all(db).await
}

/// Fetch a single user by ID.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Fetch the users behind a set of IDs (leaderboard name resolution).
pub async fn get_users_by_ids(
    db: &DatabaseConnection,
    ids: Vec<Uuid>,
) -> Result<Vec<users::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    users::Entity::find()
        .filter(users::Column::Id.is_in(ids))
        .all(db)
        .await
}
