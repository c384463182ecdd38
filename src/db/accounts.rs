use sea_orm::*;
use uuid::Uuid;

use crate::models::accounts::{
    self, AccountListQuery, AccountStatus, CreateAccount, Platform, UpdateAccount,
};

/// Insert a new account. Callers check `(platform, email)` uniqueness first;
/// the unique index backs them up under concurrent inserts.
pub async fn insert_account(
    db: &DatabaseConnection,
    input: CreateAccount,
    created_by: Uuid,
) -> Result<accounts::Model, DbErr> {
    let new_account = accounts::ActiveModel {
        id: Set(Uuid::new_v4()),
        platform: Set(input.platform),
        email: Set(input.email),
        username: Set(input.username),
        type_of_gigs: Set(input.type_of_gigs),
        currency: Set(input.currency.unwrap_or_else(|| "USD".to_string())),
        status: Set(input.status.unwrap_or(AccountStatus::Active)),
        account_level: Set(input.account_level.unwrap_or(1)),
        success_rate: Set(input.success_rate),
        browser_type: Set(input.browser_type),
        proxy: Set(input.proxy),
        created_by: Set(created_by),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_account.insert(db).await
}

/// Fetch all accounts.
pub async fn get_all_accounts(db: &DatabaseConnection) -> Result<Vec<accounts::Model>, DbErr> {
    accounts::Entity::find().all(db).await
}

/// Fetch accounts matching the list filters, newest first.
pub async fn get_accounts(
    db: &DatabaseConnection,
    query: &AccountListQuery,
) -> Result<Vec<accounts::Model>, DbErr> {
    let mut find = accounts::Entity::find();

    if let Some(platform) = query.platform {
        find = find.filter(accounts::Column::Platform.eq(platform));
    }
    if let Some(status) = query.status {
        find = find.filter(accounts::Column::Status.eq(status));
    }

    find.order_by_desc(accounts::Column::CreatedAt)
        .limit(query.limit())
        .offset(query.offset())
        .all(db)
        .await
}

/// Fetch all active accounts (missing-report detection, completion rates).
pub async fn get_active_accounts(db: &DatabaseConnection) -> Result<Vec<accounts::Model>, DbErr> {
    accounts::Entity::find()
        .filter(accounts::Column::Status.eq(AccountStatus::Active))
        .all(db)
        .await
}

/// Fetch a single account by ID.
pub async fn get_account_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<accounts::Model>, DbErr> {
    accounts::Entity::find_by_id(id).one(db).await
}

/// Look up an account by its `(platform, email)` identity.
pub async fn find_by_platform_email(
    db: &DatabaseConnection,
    platform: Platform,
    email: &str,
) -> Result<Option<accounts::Model>, DbErr> {
    accounts::Entity::find()
        .filter(accounts::Column::Platform.eq(platform))
        .filter(accounts::Column::Email.eq(email))
        .one(db)
        .await
}

/// Update an existing account.
pub async fn update_account(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateAccount,
) -> Result<accounts::Model, DbErr> {
    let account = accounts::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Account not found".to_string()))?;

    let mut active: accounts::ActiveModel = account.into();

    if let Some(email) = input.email {
        active.email = Set(email);
    }
    if let Some(username) = input.username {
        active.username = Set(username);
    }
    if let Some(type_of_gigs) = input.type_of_gigs {
        active.type_of_gigs = Set(Some(type_of_gigs));
    }
    if let Some(currency) = input.currency {
        active.currency = Set(currency);
    }
    if let Some(status) = input.status {
        active.status = Set(status);
    }
    if let Some(account_level) = input.account_level {
        active.account_level = Set(account_level);
    }
    if let Some(success_rate) = input.success_rate {
        active.success_rate = Set(Some(success_rate));
    }
    if let Some(browser_type) = input.browser_type {
        active.browser_type = Set(Some(browser_type));
    }
    if let Some(proxy) = input.proxy {
        active.proxy = Set(Some(proxy));
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Delete an account by ID. Exists for completeness; the main flows never
/// hard-delete accounts.
pub async fn delete_account(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    accounts::Entity::delete_by_id(id).exec(db).await
}
