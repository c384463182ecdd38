pub mod accounts;
pub mod expenditures;
pub mod gigs;
pub mod payout_details;
pub mod shift_reports;
pub mod users;
pub mod withdraws;
