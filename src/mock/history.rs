use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::mock::company::synthesize_by_ticker;
use crate::models::price::StockPricePoint;
use crate::util::round2;

/// Anchor used when the ticker is not in the universe
pub const FALLBACK_PRICE: f64 = 50.0;
/// Longest series handed out by the data facade (about ten years)
pub const MAX_HISTORY_DAYS: usize = 3650;
const DAILY_VOLATILITY: f64 = 0.02;
const MIN_VOLUME: u64 = 500_000;
const VOLUME_SPAN: u64 = 10_000_000;

/// Daily series of `days` points ending today at the company's current price.
///
/// Built as a reverse random walk: start at today's price and step back one
/// day at a time, moving the price by up to 2% each step. Volume and the
/// steps come from `rng`; only the anchor is deterministic. The walk stops
/// early if it reaches the first representable date.
pub fn generate_price_history<R: Rng + ?Sized>(
    ticker: &str,
    days: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<StockPricePoint> {
    let mut current_price = synthesize_by_ticker(ticker)
        .map(|c| c.price)
        .unwrap_or(FALLBACK_PRICE);

    let mut data = Vec::new();
    for i in 0..days {
        let Some(date) = today.checked_sub_days(Days::new(i as u64)) else {
            break;
        };
        data.push(StockPricePoint {
            date,
            price: round2(current_price),
            volume: MIN_VOLUME + rng.random_range(0..VOLUME_SPAN),
        });

        let volatility = current_price * DAILY_VOLATILITY;
        let change = rng.random::<f64>() * volatility * 2.0 - volatility;
        current_price -= change;
    }

    data.reverse();
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    #[test]
    fn test_length_order_and_anchor() {
        let company = synthesize_by_ticker("NVDA").unwrap();
        let history = generate_price_history("NVDA", 90, today(), &mut StdRng::seed_from_u64(11));

        assert_eq!(history.len(), 90);
        for pair in history.windows(2) {
            assert_eq!((pair[1].date - pair[0].date).num_days(), 1);
        }
        let last = history.last().unwrap();
        assert_eq!(last.date, today());
        assert_eq!(last.price, company.price);
        assert_eq!(history[0].date, today() - chrono::Duration::days(89));
    }

    #[test]
    fn test_steps_within_two_percent() {
        let history = generate_price_history("KO", 60, today(), &mut StdRng::seed_from_u64(2));
        for pair in history.windows(2) {
            let (older, newer) = (pair[0].price, pair[1].price);
            // older = newer - u with |u| <= 2% of newer, plus rounding
            assert!((older - newer).abs() <= newer * DAILY_VOLATILITY + 0.02);
        }
        for p in &history {
            assert!((MIN_VOLUME..MIN_VOLUME + VOLUME_SPAN).contains(&p.volume));
        }
    }

    #[test]
    fn test_unknown_ticker_anchors_at_fallback() {
        let history = generate_price_history("NOPE", 5, today(), &mut StdRng::seed_from_u64(4));
        assert_eq!(history.len(), 5);
        assert_eq!(history.last().unwrap().price, FALLBACK_PRICE);
    }

    #[test]
    fn test_zero_days_is_empty() {
        assert!(generate_price_history("AAPL", 0, today(), &mut StdRng::seed_from_u64(4)).is_empty());
    }

    #[test]
    fn test_walk_stops_at_first_representable_date() {
        let today = NaiveDate::MIN + chrono::Duration::days(3);
        let history = generate_price_history("AAPL", usize::MAX, today, &mut StdRng::seed_from_u64(9));
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].date, NaiveDate::MIN);
        assert_eq!(history.last().unwrap().date, today);
    }

    #[test]
    fn test_walk_is_noise_but_anchor_is_not() {
        let a = generate_price_history("AAPL", 30, today(), &mut StdRng::seed_from_u64(1));
        let b = generate_price_history("AAPL", 30, today(), &mut StdRng::seed_from_u64(2));
        assert_eq!(a.last().unwrap().price, b.last().unwrap().price);
        assert_ne!(a, b);
    }
}
