use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::mock::seed::seeded_hash;
use crate::models::action::{ActionStatus, ActionType, CorporateAction};
use crate::models::company::Company;

const MAX_ACTIONS_PER_COMPANY: f64 = 3.0;
/// Action dates fall in [today - 30, today + 29]
const DATE_WINDOW_DAYS: f64 = 60.0;
const DATE_BACKSHIFT_DAYS: i64 = 30;

/// Index into `len` choices from one seed
fn pick(seed: &str, len: usize) -> usize {
    // seeded_hash < 1.0, so the floor stays below len
    (seeded_hash(seed) * len as f64).floor() as usize
}

/// Number of actions for one company, always 1..=3
pub fn action_count(ticker: &str) -> usize {
    (seeded_hash(&format!("{}act_count", ticker)) * MAX_ACTIONS_PER_COMPANY).floor() as usize + 1
}

/// Day offset from today for action `index` of `ticker`
pub fn date_offset(ticker: &str, index: usize) -> i64 {
    (seeded_hash(&format!("{}{}date", ticker, index)) * DATE_WINDOW_DAYS).floor() as i64
        - DATE_BACKSHIFT_DAYS
}

/// Builds the corporate action feed for `companies`, newest date first.
///
/// Type, status and date offset are seeded per (ticker, index). The dividend
/// amount and split ratio are drawn from `rng`.
pub fn synthesize_actions<R: Rng + ?Sized>(
    companies: &[Company],
    today: NaiveDate,
    rng: &mut R,
) -> Vec<CorporateAction> {
    let mut actions = Vec::new();

    for company in companies {
        let ticker = company.ticker.as_str();

        for i in 0..action_count(ticker) {
            let action_type = ActionType::ALL[pick(&format!("{}{}type", ticker, i), ActionType::ALL.len())];
            let status = ActionStatus::ALL[pick(&format!("{}{}status", ticker, i), ActionStatus::ALL.len())];
            let date = today + Duration::days(date_offset(ticker, i));

            let value = match action_type {
                ActionType::Dividend => Some(format!("${:.2}/share", rng.random::<f64>() * 2.0)),
                ActionType::StockSplit => Some(format!("{}:1", rng.random_range(2..=6))),
                _ => None,
            };

            actions.push(CorporateAction {
                id: format!("{}-{}", ticker, i),
                ticker: company.ticker.clone(),
                action_type,
                date,
                description: format!("{} {} for {}", status, action_type, company.name),
                status,
                value,
            });
        }
    }

    // stable: same-day actions keep company order
    actions.sort_by(|a, b| b.date.cmp(&a.date));
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::company::synthesize_all;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn without_values(actions: &[CorporateAction]) -> Vec<CorporateAction> {
        actions
            .iter()
            .cloned()
            .map(|a| CorporateAction { value: None, ..a })
            .collect()
    }

    #[test]
    fn test_count_per_company_in_range() {
        let companies = synthesize_all();
        let actions = synthesize_actions(&companies, today(), &mut StdRng::seed_from_u64(1));

        let mut per_ticker: HashMap<&str, usize> = HashMap::new();
        for a in &actions {
            *per_ticker.entry(a.ticker.as_str()).or_default() += 1;
        }

        assert_eq!(per_ticker.len(), companies.len());
        for c in &companies {
            let n = per_ticker[c.ticker.as_str()];
            assert!((1..=3).contains(&n), "{} has {} actions", c.ticker, n);
            assert_eq!(n, action_count(&c.ticker));
        }
    }

    #[test]
    fn test_seeded_fields_repeat_across_calls() {
        let companies = synthesize_all();
        let first = synthesize_actions(&companies, today(), &mut StdRng::seed_from_u64(1));
        let second = synthesize_actions(&companies, today(), &mut StdRng::seed_from_u64(99));
        assert_eq!(without_values(&first), without_values(&second));
    }

    #[test]
    fn test_sorted_newest_first_within_window() {
        let companies = synthesize_all();
        let actions = synthesize_actions(&companies, today(), &mut StdRng::seed_from_u64(3));

        for pair in actions.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
        for a in &actions {
            let offset = (a.date - today()).num_days();
            assert!((-30..30).contains(&offset), "{} offset {}", a.id, offset);
        }
    }

    #[test]
    fn test_values_and_descriptions() {
        let companies = synthesize_all();
        let actions = synthesize_actions(&companies, today(), &mut StdRng::seed_from_u64(5));
        let names: HashMap<&str, &str> = companies
            .iter()
            .map(|c| (c.ticker.as_str(), c.name.as_str()))
            .collect();

        for a in &actions {
            assert_eq!(
                a.description,
                format!("{} {} for {}", a.status, a.action_type, names[a.ticker.as_str()])
            );
            assert!(a.id.starts_with(&format!("{}-", a.ticker)));

            match a.action_type {
                ActionType::Dividend => {
                    let value = a.value.as_deref().unwrap();
                    let amount: f64 = value
                        .strip_prefix('$')
                        .and_then(|v| v.strip_suffix("/share"))
                        .unwrap()
                        .parse()
                        .unwrap();
                    assert!((0.0..=2.0).contains(&amount));
                }
                ActionType::StockSplit => {
                    let value = a.value.as_deref().unwrap();
                    let ratio: u32 = value.strip_suffix(":1").unwrap().parse().unwrap();
                    assert!((2..=6).contains(&ratio));
                }
                _ => assert!(a.value.is_none()),
            }
        }
    }

    #[test]
    fn test_dates_move_with_today() {
        let companies = synthesize_all();
        let base = synthesize_actions(&companies[..5], today(), &mut StdRng::seed_from_u64(1));
        let later = synthesize_actions(
            &companies[..5],
            today() + Duration::days(10),
            &mut StdRng::seed_from_u64(1),
        );

        for a in &base {
            let b = later.iter().find(|b| b.id == a.id).unwrap();
            assert_eq!((b.date - a.date).num_days(), 10);
        }
    }

    #[test]
    fn test_no_companies_no_actions() {
        let actions = synthesize_actions(&[], today(), &mut StdRng::seed_from_u64(1));
        assert!(actions.is_empty());
    }
}
