use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::{latest_report, round_money};
use crate::models::accounts::{Model as Account, Platform};
use crate::models::shift_reports::Model as Report;
use crate::models::withdraws::Model as Withdraw;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub account_id: Uuid,
    pub platform: Platform,
    pub username: String,
    pub currency: String,
    pub available_balance: f64,
    pub pending_balance: f64,
    pub total_withdrawn: f64,
    pub last_report_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancesSummary {
    pub total_available: f64,
    pub total_pending: f64,
    pub total_withdrawn: f64,
    pub accounts: Vec<AccountBalance>,
}

/// Balance roll-up across every account: current balances from each
/// account's latest report, plus the lifetime withdrawn total from the
/// ledger. Accounts are listed by `(platform, username)`.
pub fn finances(
    accounts: &[Account],
    reports: &[Report],
    withdraws: &[Withdraw],
) -> FinancesSummary {
    let mut reports_by_account: HashMap<Uuid, Vec<&Report>> = HashMap::new();
    for report in reports {
        reports_by_account
            .entry(report.account_id)
            .or_default()
            .push(report);
    }

    let mut withdrawn_by_account: HashMap<Uuid, f64> = HashMap::new();
    for withdraw in withdraws {
        *withdrawn_by_account.entry(withdraw.account_id).or_insert(0.0) += withdraw.amount;
    }

    let mut balances: Vec<AccountBalance> = accounts
        .iter()
        .map(|account| {
            let latest = reports_by_account
                .get(&account.id)
                .and_then(|rs| latest_report(rs.iter().copied()));

            let (available, pending, last_date) = match latest {
                Some(r) => (r.available_balance, r.pending_balance, Some(r.report_date)),
                None => (0.0, 0.0, None),
            };

            AccountBalance {
                account_id: account.id,
                platform: account.platform,
                username: account.username.clone(),
                currency: account.currency.clone(),
                available_balance: round_money(available),
                pending_balance: round_money(pending),
                total_withdrawn: round_money(
                    withdrawn_by_account.get(&account.id).copied().unwrap_or(0.0),
                ),
                last_report_date: last_date,
            }
        })
        .collect();

    balances.sort_by(|a, b| {
        a.platform
            .as_str()
            .cmp(b.platform.as_str())
            .then_with(|| a.username.cmp(&b.username))
    });

    let total_available = round_money(balances.iter().map(|b| b.available_balance).sum());
    let total_pending = round_money(balances.iter().map(|b| b.pending_balance).sum());
    let total_withdrawn = round_money(balances.iter().map(|b| b.total_withdrawn).sum());

    FinancesSummary {
        total_available,
        total_pending,
        total_withdrawn,
        accounts: balances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::{account, date, report};
    use crate::models::shift_reports::Shift;
    use chrono::Utc;

    fn withdraw(account_id: Uuid, amount: f64) -> Withdraw {
        Withdraw {
            id: Uuid::new_v4(),
            account_id,
            amount,
            withdraw_date: date(2024, 5, 1),
            payment_means: "payoneer".to_string(),
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn balances_come_from_the_latest_report() {
        let acct = account(Platform::Fiverr, "money");

        let mut old = report(acct.id, date(2024, 5, 1), Shift::Am);
        old.available_balance = 10.0;
        let mut new = report(acct.id, date(2024, 5, 1), Shift::Pm);
        new.available_balance = 42.42;
        new.pending_balance = 7.0;

        let summary = finances(&[acct.clone()], &[old, new], &[]);
        assert_eq!(summary.accounts.len(), 1);
        assert_eq!(summary.accounts[0].available_balance, 42.42);
        assert_eq!(summary.accounts[0].pending_balance, 7.0);
        assert_eq!(summary.accounts[0].last_report_date, Some(date(2024, 5, 1)));
        assert_eq!(summary.total_available, 42.42);
    }

    #[test]
    fn withdraws_sum_per_account() {
        let acct = account(Platform::Upwork, "ledger");
        let other = account(Platform::Direct, "other");

        let withdraws = vec![
            withdraw(acct.id, 100.0),
            withdraw(acct.id, 55.55),
            withdraw(other.id, 1.0),
        ];

        let summary = finances(&[acct.clone(), other], &[], &withdraws);
        let ledger = summary
            .accounts
            .iter()
            .find(|b| b.account_id == acct.id)
            .unwrap();
        assert_eq!(ledger.total_withdrawn, 155.55);
        assert_eq!(summary.total_withdrawn, 156.55);
    }

    #[test]
    fn account_without_reports_shows_zero_balances() {
        let acct = account(Platform::Direct, "empty");
        let summary = finances(&[acct], &[], &[]);
        assert_eq!(summary.accounts[0].available_balance, 0.0);
        assert!(summary.accounts[0].last_report_date.is_none());
    }
}
