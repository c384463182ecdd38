use sea_orm::*;
use uuid::Uuid;

use crate::models::gigs::{self, CreateGig, GigStatus, RatingType, UpdateGig};

/// Insert a new gig.
///
/// Rating fields are normalized on the way in: an unrated gig stores no
/// rating data at all, and `rating_email` survives only for paypal ratings.
pub async fn insert_gig(db: &DatabaseConnection, input: CreateGig) -> Result<gigs::Model, DbErr> {
    let (last_rated, next_rate, rating_type, rating_email) = if input.rated {
        let email = match input.rating_type {
            Some(RatingType::Paypal) => input.rating_email,
            _ => None,
        };
        (
            input.last_rated_date,
            input.next_possible_rate_date,
            input.rating_type,
            email,
        )
    } else {
        (None, None, None, None)
    };

    let new_gig = gigs::ActiveModel {
        id: Set(Uuid::new_v4()),
        account_id: Set(input.account_id),
        name: Set(input.name),
        gig_type: Set(input.gig_type),
        status: Set(input.status.unwrap_or(GigStatus::Active)),
        rated: Set(input.rated),
        last_rated_date: Set(last_rated),
        next_possible_rate_date: Set(next_rate),
        rating_type: Set(rating_type),
        rating_email: Set(rating_email),
        created_at: Set(chrono::Utc::now()),
    };

    new_gig.insert(db).await
}

/// Fetch all gigs for one account.
pub async fn get_gigs_by_account_id(
    db: &DatabaseConnection,
    account_id: Uuid,
) -> Result<Vec<gigs::Model>, DbErr> {
    gigs::Entity::find()
        .filter(gigs::Column::AccountId.eq(account_id))
        .order_by_desc(gigs::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch all rated gigs (the rating information report).
pub async fn get_rated_gigs(db: &DatabaseConnection) -> Result<Vec<gigs::Model>, DbErr> {
    gigs::Entity::find()
        .filter(gigs::Column::Rated.eq(true))
        .order_by_asc(gigs::Column::NextPossibleRateDate)
        .all(db)
        .await
}

/// Fetch a single gig by ID.
pub async fn get_gig_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<gigs::Model>, DbErr> {
    gigs::Entity::find_by_id(id).one(db).await
}

/// Update an existing gig.
///
/// Setting `rated = false` clears all four rating fields rather than
/// leaving stale values behind; turning `rating_type` away from paypal
/// clears `rating_email`.
pub async fn update_gig(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateGig,
) -> Result<gigs::Model, DbErr> {
    let gig = gigs::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Gig not found".to_string()))?;

    let was_rated = gig.rated;
    let current_rating_type = gig.rating_type;

    let mut active: gigs::ActiveModel = gig.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(gig_type) = input.gig_type {
        active.gig_type = Set(gig_type);
    }
    if let Some(status) = input.status {
        active.status = Set(status);
    }

    let rated = input.rated.unwrap_or(was_rated);
    active.rated = Set(rated);

    if !rated {
        active.last_rated_date = Set(None);
        active.next_possible_rate_date = Set(None);
        active.rating_type = Set(None);
        active.rating_email = Set(None);
        return active.update(db).await;
    }

    if let Some(last_rated_date) = input.last_rated_date {
        active.last_rated_date = Set(Some(last_rated_date));
    }
    if let Some(next_possible_rate_date) = input.next_possible_rate_date {
        active.next_possible_rate_date = Set(Some(next_possible_rate_date));
    }

    let rating_type = input.rating_type.or(current_rating_type);
    active.rating_type = Set(rating_type);

    match rating_type {
        Some(RatingType::Paypal) => {
            if let Some(rating_email) = input.rating_email {
                active.rating_email = Set(Some(rating_email));
            }
        }
        _ => {
            active.rating_email = Set(None);
        }
    }

    active.update(db).await
}

/// Delete a gig by ID.
pub async fn delete_gig(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    gigs::Entity::delete_by_id(id).exec(db).await
}
