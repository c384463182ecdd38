use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::shift_reports::Model as Report;
use crate::models::users::Model as User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub reports_submitted: u64,
}

/// Reports submitted per operator within the window, most first.
///
/// Equal counts are tie-broken by email ascending so the ordering is
/// deterministic.
pub fn leaderboard(reports: &[Report], users: &[User]) -> Vec<LeaderboardEntry> {
    let mut counts: HashMap<Uuid, u64> = HashMap::new();
    for report in reports {
        *counts.entry(report.reported_by).or_insert(0) += 1;
    }

    let mut entries: Vec<LeaderboardEntry> = users
        .iter()
        .filter_map(|user| {
            counts.get(&user.id).map(|&reports_submitted| LeaderboardEntry {
                user_id: user.id,
                name: user.name.clone(),
                email: user.email.clone(),
                reports_submitted,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.reports_submitted
            .cmp(&a.reports_submitted)
            .then_with(|| a.email.cmp(&b.email))
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::{date, report};
    use crate::models::users::Roles;
    use chrono::Utc;

    fn user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            clerk_id: format!("user_{email}"),
            email: email.to_string(),
            name: None,
            role: Roles::Operator,
            created_at: Utc::now(),
        }
    }

    fn report_by(reporter: Uuid, day: u32) -> Report {
        let mut r = report(
            Uuid::new_v4(),
            date(2024, 5, day),
            crate::models::shift_reports::Shift::Am,
        );
        r.reported_by = reporter;
        r
    }

    #[test]
    fn counts_and_sorts_descending() {
        let alice = user("alice@example.com");
        let bob = user("bob@example.com");

        let reports = vec![
            report_by(alice.id, 1),
            report_by(alice.id, 2),
            report_by(bob.id, 1),
        ];

        let board = leaderboard(&reports, &[bob.clone(), alice.clone()]);
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].email, "alice@example.com");
        assert_eq!(board[0].reports_submitted, 2);
        assert_eq!(board[1].reports_submitted, 1);
    }

    #[test]
    fn equal_counts_tie_break_by_email() {
        let carol = user("carol@example.com");
        let dave = user("dave@example.com");

        let reports = vec![report_by(dave.id, 1), report_by(carol.id, 1)];

        let board = leaderboard(&reports, &[dave.clone(), carol.clone()]);
        assert_eq!(board[0].email, "carol@example.com");
        assert_eq!(board[1].email, "dave@example.com");
    }

    #[test]
    fn users_with_no_reports_are_absent() {
        let idle = user("idle@example.com");
        let board = leaderboard(&[], &[idle]);
        assert!(board.is_empty());
    }
}
