use crate::mock::reference::ReferenceTable;
use crate::mock::seed::seeded_hash;
use crate::models::company::{Company, ReferenceEntry};
use crate::util::round2;

const MIN_PRICE: f64 = 50.0;
const PRICE_SPAN: f64 = 450.0;
const UP_THRESHOLD: f64 = 0.45;
const MAX_CHANGE_PERCENT: f64 = 5.0;
const MIN_MARKET_CAP: f64 = 1e10;
const MARKET_CAP_SPAN: f64 = 2e12;
const MAX_DIVIDEND_YIELD: f64 = 0.05;

/// Known-good logos for the largest names
const LOGO_OVERRIDES: &[(&str, &str)] = &[
    ("AAPL", "https://upload.wikimedia.org/wikipedia/commons/f/fa/Apple_logo_black.svg"),
    ("MSFT", "https://upload.wikimedia.org/wikipedia/commons/4/44/Microsoft_logo.svg"),
    ("TSLA", "https://upload.wikimedia.org/wikipedia/commons/e/e8/Tesla_logo.png"),
    ("NVDA", "https://upload.wikimedia.org/wikipedia/commons/2/21/Nvidia_logo.svg"),
    ("GOOGL", "https://upload.wikimedia.org/wikipedia/commons/2/2f/Google_2015_logo.svg"),
    ("AMZN", "https://upload.wikimedia.org/wikipedia/commons/a/a9/Amazon_logo.svg"),
    ("META", "https://upload.wikimedia.org/wikipedia/commons/7/7b/Meta_Platforms_Inc._logo.svg"),
    ("NFLX", "https://upload.wikimedia.org/wikipedia/commons/0/08/Netflix_2015_logo.svg"),
];

fn draw(ticker: &str, suffix: &str) -> f64 {
    seeded_hash(&format!("{}{}", ticker, suffix))
}

/// Builds the profile and quote for one reference entry.
///
/// Every numeric field is a function of the ticker alone.
pub fn synthesize_company(entry: &ReferenceEntry) -> Company {
    let ticker = entry.ticker;

    let base_price = MIN_PRICE + draw(ticker, "price") * PRICE_SPAN;
    let is_up = draw(ticker, "dir") > UP_THRESHOLD;
    let direction = if is_up { 1.0 } else { -1.0 };
    let change_percent = draw(ticker, "chg") * MAX_CHANGE_PERCENT * direction;
    let change = base_price * (change_percent / 100.0);

    Company {
        ticker: ticker.to_string(),
        name: entry.name.to_string(),
        description: format!(
            "{} is a leading player in the {} industry, known for its innovation and market presence.",
            entry.name, entry.industry
        ),
        sector: entry.sector.to_string(),
        industry: entry.industry.to_string(),
        logo_url: logo_url(entry),
        market_cap: MIN_MARKET_CAP + draw(ticker, "mcap") * MARKET_CAP_SPAN,
        price: round2(base_price),
        change: round2(change),
        change_percent: round2(change_percent),
        dividend_yield: draw(ticker, "div") * MAX_DIVIDEND_YIELD,
    }
}

/// Synthesizes the company for `ticker`, or None when it is not in the universe
pub fn synthesize_by_ticker(ticker: &str) -> Option<Company> {
    ReferenceTable::global().get(ticker).map(synthesize_company)
}

/// Every company in the universe, in reference order
pub fn synthesize_all() -> Vec<Company> {
    ReferenceTable::global()
        .entries()
        .iter()
        .map(synthesize_company)
        .collect()
}

fn logo_url(entry: &ReferenceEntry) -> String {
    LOGO_OVERRIDES
        .iter()
        .find(|(ticker, _)| *ticker == entry.ticker)
        .map(|(_, url)| url.to_string())
        .unwrap_or_else(|| placeholder_logo_url(entry.name))
}

/// Generated avatar image for a company name
pub fn placeholder_logo_url(name: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!(
        "https://ui-avatars.com/api/?name={}&background=random&color=fff&size=128",
        encoded
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_ticker_same_company() {
        let first = synthesize_by_ticker("AAPL").unwrap();
        let second = synthesize_by_ticker("AAPL").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_companies_deterministic_and_in_range() {
        let first = synthesize_all();
        let second = synthesize_all();
        assert_eq!(first, second);
        assert_eq!(first.len(), ReferenceTable::global().len());

        for c in &first {
            assert!((50.0..=500.0).contains(&c.price), "{} price {}", c.ticker, c.price);
            assert!((0.0..=0.05).contains(&c.dividend_yield), "{} yield {}", c.ticker, c.dividend_yield);
            assert!((1e10..=2.01e12).contains(&c.market_cap), "{} mcap {}", c.ticker, c.market_cap);
            assert!(c.change_percent.abs() <= 5.0);
            // change carries the same sign as change_percent
            assert!(c.change * c.change_percent >= 0.0);
        }
    }

    #[test]
    fn test_rounding() {
        for c in synthesize_all() {
            assert_eq!(round2(c.price), c.price);
            assert_eq!(round2(c.change), c.change);
            assert_eq!(round2(c.change_percent), c.change_percent);
        }
    }

    #[test]
    fn test_profile_fields_follow_reference() {
        let c = synthesize_by_ticker("JPM").unwrap();
        assert_eq!(c.name, "JPMorgan Chase");
        assert_eq!(c.sector, "Financial Services");
        assert_eq!(c.industry, "Banks - Diversified");
        assert_eq!(
            c.description,
            "JPMorgan Chase is a leading player in the Banks - Diversified industry, known for its innovation and market presence."
        );
    }

    #[test]
    fn test_logo_override_and_placeholder() {
        let apple = synthesize_by_ticker("AAPL").unwrap();
        assert_eq!(
            apple.logo_url,
            "https://upload.wikimedia.org/wikipedia/commons/f/fa/Apple_logo_black.svg"
        );

        let att = synthesize_by_ticker("T").unwrap();
        assert_eq!(
            att.logo_url,
            "https://ui-avatars.com/api/?name=AT%26T+Inc.&background=random&color=fff&size=128"
        );
    }

    #[test]
    fn test_unknown_ticker_is_a_miss() {
        assert!(synthesize_by_ticker("NOPE").is_none());
        assert!(synthesize_by_ticker("").is_none());
    }

    #[test]
    fn test_direction_is_biased_bullish() {
        let ups = synthesize_all().iter().filter(|c| c.change_percent > 0.0).count();
        // 55% expected; guard against a degenerate hash, not against noise
        assert!(ups > 40, "only {} of 128 up", ups);
    }
}
