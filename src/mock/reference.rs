use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::company::ReferenceEntry;

const fn entry(
    ticker: &'static str,
    name: &'static str,
    sector: &'static str,
    industry: &'static str,
) -> ReferenceEntry {
    ReferenceEntry { ticker, name, sector, industry }
}

/// Major US listings the mock universe is built from
pub const STOCK_UNIVERSE: &[ReferenceEntry] = &[
    entry("AAPL", "Apple Inc.", "Technology", "Consumer Electronics"),
    entry("MSFT", "Microsoft Corp.", "Technology", "Software - Infrastructure"),
    entry("NVDA", "NVIDIA Corp.", "Technology", "Semiconductors"),
    entry("GOOGL", "Alphabet Inc.", "Technology", "Internet Content & Info"),
    entry("AMZN", "Amazon.com Inc.", "Consumer Cyclical", "Internet Retail"),
    entry("META", "Meta Platforms", "Technology", "Internet Content & Info"),
    entry("TSLA", "Tesla Inc.", "Consumer Cyclical", "Auto Manufacturers"),
    entry("AVGO", "Broadcom Inc.", "Technology", "Semiconductors"),
    entry("ORCL", "Oracle Corp.", "Technology", "Software - Infrastructure"),
    entry("CRM", "Salesforce Inc.", "Technology", "Software - Application"),
    entry("AMD", "Advanced Micro Devices", "Technology", "Semiconductors"),
    entry("INTC", "Intel Corp.", "Technology", "Semiconductors"),
    entry("QCOM", "Qualcomm Inc.", "Technology", "Semiconductors"),
    entry("TXN", "Texas Instruments", "Technology", "Semiconductors"),
    entry("IBM", "IBM", "Technology", "IT Services"),
    entry("ADBE", "Adobe Inc.", "Technology", "Software - Infrastructure"),
    entry("CSCO", "Cisco Systems", "Technology", "Communication Equipment"),
    entry("NFLX", "Netflix Inc.", "Communication Services", "Entertainment"),
    entry("PYPL", "PayPal Holdings", "Financial Services", "Credit Services"),
    entry("INTU", "Intuit Inc.", "Technology", "Software - Application"),
    entry("AMAT", "Applied Materials", "Technology", "Semiconductor Equipment"),
    entry("NOW", "ServiceNow", "Technology", "Software - Application"),
    entry("UBER", "Uber Technologies", "Technology", "Software - Application"),
    entry("ABNB", "Airbnb Inc.", "Consumer Cyclical", "Travel Services"),
    entry("PLTR", "Palantir Technologies", "Technology", "Software - Infrastructure"),
    entry("SQ", "Block Inc.", "Technology", "Software - Infrastructure"),
    entry("SHOP", "Shopify Inc.", "Technology", "Software - Application"),
    entry("SNOW", "Snowflake Inc.", "Technology", "Software - Application"),
    entry("CRWD", "CrowdStrike", "Technology", "Software - Security"),
    entry("PANW", "Palo Alto Networks", "Technology", "Software - Security"),
    entry("MU", "Micron Technology", "Technology", "Semiconductors"),
    entry("LRCX", "Lam Research", "Technology", "Semiconductor Equipment"),
    entry("ADI", "Analog Devices", "Technology", "Semiconductors"),
    entry("MRVL", "Marvell Technology", "Technology", "Semiconductors"),
    entry("KLAC", "KLA Corp.", "Technology", "Semiconductor Equipment"),
    entry("SNPS", "Synopsys Inc.", "Technology", "Software - Infrastructure"),
    entry("CDNS", "Cadence Design", "Technology", "Software - Infrastructure"),
    entry("JPM", "JPMorgan Chase", "Financial Services", "Banks - Diversified"),
    entry("BAC", "Bank of America", "Financial Services", "Banks - Diversified"),
    entry("WFC", "Wells Fargo", "Financial Services", "Banks - Diversified"),
    entry("C", "Citigroup Inc.", "Financial Services", "Banks - Diversified"),
    entry("GS", "Goldman Sachs", "Financial Services", "Capital Markets"),
    entry("MS", "Morgan Stanley", "Financial Services", "Capital Markets"),
    entry("BLK", "BlackRock", "Financial Services", "Asset Management"),
    entry("V", "Visa Inc.", "Financial Services", "Credit Services"),
    entry("MA", "Mastercard Inc.", "Financial Services", "Credit Services"),
    entry("AXP", "American Express", "Financial Services", "Credit Services"),
    entry("BRK.B", "Berkshire Hathaway", "Financial Services", "Insurance"),
    entry("SPGI", "S&P Global", "Financial Services", "Financial Data"),
    entry("MCO", "Moody's Corp.", "Financial Services", "Financial Data"),
    entry("MMC", "Marsh & McLennan", "Financial Services", "Insurance Brokers"),
    entry("PGR", "Progressive Corp.", "Financial Services", "Insurance"),
    entry("CB", "Chubb Ltd.", "Financial Services", "Insurance"),
    entry("BK", "BNY Mellon", "Financial Services", "Asset Management"),
    entry("USB", "U.S. Bancorp", "Financial Services", "Banks - Regional"),
    entry("PNC", "PNC Financial", "Financial Services", "Banks - Regional"),
    entry("TFC", "Truist Financial", "Financial Services", "Banks - Regional"),
    entry("LLY", "Eli Lilly and Co.", "Healthcare", "Drug Manufacturers"),
    entry("UNH", "UnitedHealth Group", "Healthcare", "Healthcare Plans"),
    entry("JNJ", "Johnson & Johnson", "Healthcare", "Drug Manufacturers"),
    entry("MRK", "Merck & Co.", "Healthcare", "Drug Manufacturers"),
    entry("ABBV", "AbbVie Inc.", "Healthcare", "Drug Manufacturers"),
    entry("PFE", "Pfizer Inc.", "Healthcare", "Drug Manufacturers"),
    entry("TMO", "Thermo Fisher", "Healthcare", "Diagnostics & Research"),
    entry("ABT", "Abbott Laboratories", "Healthcare", "Medical Devices"),
    entry("DHR", "Danaher Corp.", "Healthcare", "Diagnostics & Research"),
    entry("BMY", "Bristol-Myers Squibb", "Healthcare", "Drug Manufacturers"),
    entry("AMGN", "Amgen Inc.", "Healthcare", "Drug Manufacturers"),
    entry("CVS", "CVS Health", "Healthcare", "Healthcare Plans"),
    entry("ELV", "Elevance Health", "Healthcare", "Healthcare Plans"),
    entry("ISRG", "Intuitive Surgical", "Healthcare", "Medical Instruments"),
    entry("SYK", "Stryker Corp.", "Healthcare", "Medical Devices"),
    entry("REGN", "Regeneron", "Healthcare", "Biotechnology"),
    entry("VRTX", "Vertex Pharmaceuticals", "Healthcare", "Biotechnology"),
    entry("HCA", "HCA Healthcare", "Healthcare", "Medical Care Facilities"),
    entry("MCK", "McKesson Corp.", "Healthcare", "Medical Distribution"),
    entry("WMT", "Walmart Inc.", "Consumer Defensive", "Discount Stores"),
    entry("PG", "Procter & Gamble", "Consumer Defensive", "Household & Personal"),
    entry("COST", "Costco Wholesale", "Consumer Defensive", "Discount Stores"),
    entry("KO", "Coca-Cola Co.", "Consumer Defensive", "Beverages"),
    entry("PEP", "PepsiCo Inc.", "Consumer Defensive", "Beverages"),
    entry("HD", "Home Depot", "Consumer Cyclical", "Home Improvement"),
    entry("LOW", "Lowe's Cos.", "Consumer Cyclical", "Home Improvement"),
    entry("MCD", "McDonald's Corp.", "Consumer Cyclical", "Restaurants"),
    entry("SBUX", "Starbucks Corp.", "Consumer Cyclical", "Restaurants"),
    entry("NKE", "Nike Inc.", "Consumer Cyclical", "Footwear & Accessories"),
    entry("TGT", "Target Corp.", "Consumer Defensive", "Discount Stores"),
    entry("CMG", "Chipotle Mexican Grill", "Consumer Cyclical", "Restaurants"),
    entry("LULU", "Lululemon Athletica", "Consumer Cyclical", "Apparel"),
    entry("MAR", "Marriott International", "Consumer Cyclical", "Lodging"),
    entry("HLT", "Hilton Worldwide", "Consumer Cyclical", "Lodging"),
    entry("MO", "Altria Group", "Consumer Defensive", "Tobacco"),
    entry("PM", "Philip Morris", "Consumer Defensive", "Tobacco"),
    entry("CL", "Colgate-Palmolive", "Consumer Defensive", "Household & Personal"),
    entry("GM", "General Motors", "Consumer Cyclical", "Auto Manufacturers"),
    entry("F", "Ford Motor Co.", "Consumer Cyclical", "Auto Manufacturers"),
    entry("XOM", "Exxon Mobil", "Energy", "Oil & Gas Integrated"),
    entry("CVX", "Chevron Corp.", "Energy", "Oil & Gas Integrated"),
    entry("COP", "ConocoPhillips", "Energy", "Oil & Gas E&P"),
    entry("SLB", "Schlumberger", "Energy", "Oil & Gas Equipment"),
    entry("EOG", "EOG Resources", "Energy", "Oil & Gas E&P"),
    entry("MPC", "Marathon Petroleum", "Energy", "Oil & Gas Refining"),
    entry("PSX", "Phillips 66", "Energy", "Oil & Gas Refining"),
    entry("GE", "General Electric", "Industrials", "Specialty Industrial"),
    entry("CAT", "Caterpillar Inc.", "Industrials", "Farm & Heavy Construction"),
    entry("DE", "Deere & Co.", "Industrials", "Farm & Heavy Construction"),
    entry("HON", "Honeywell", "Industrials", "Conglomerates"),
    entry("UNP", "Union Pacific", "Industrials", "Railroads"),
    entry("UPS", "United Parcel Service", "Industrials", "Integrated Freight"),
    entry("BA", "Boeing Co.", "Industrials", "Aerospace & Defense"),
    entry("LMT", "Lockheed Martin", "Industrials", "Aerospace & Defense"),
    entry("RTX", "Raytheon Technologies", "Industrials", "Aerospace & Defense"),
    entry("GD", "General Dynamics", "Industrials", "Aerospace & Defense"),
    entry("NOC", "Northrop Grumman", "Industrials", "Aerospace & Defense"),
    entry("ETN", "Eaton Corp.", "Industrials", "Specialty Industrial"),
    entry("ITW", "Illinois Tool Works", "Industrials", "Specialty Industrial"),
    entry("WM", "Waste Management", "Industrials", "Waste Management"),
    entry("FDX", "FedEx Corp.", "Industrials", "Integrated Freight"),
    entry("VZ", "Verizon", "Communication Services", "Telecom Services"),
    entry("T", "AT&T Inc.", "Communication Services", "Telecom Services"),
    entry("TMUS", "T-Mobile US", "Communication Services", "Telecom Services"),
    entry("CMCSA", "Comcast Corp.", "Communication Services", "Entertainment"),
    entry("CHTR", "Charter Communications", "Communication Services", "Entertainment"),
    entry("DIS", "Walt Disney Co.", "Communication Services", "Entertainment"),
    entry("NEE", "NextEra Energy", "Utilities", "Utilities - Regulated"),
    entry("SO", "Southern Company", "Utilities", "Utilities - Regulated"),
    entry("AMT", "American Tower", "Real Estate", "REIT - Specialty"),
    entry("PLD", "Prologis", "Real Estate", "REIT - Industrial"),
];

/// Immutable stock universe with a ticker index
pub struct ReferenceTable {
    entries: &'static [ReferenceEntry],
    ticker_index: HashMap<&'static str, usize>,
}

impl ReferenceTable {
    pub fn new(entries: &'static [ReferenceEntry]) -> Self {
        let ticker_index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.ticker, i))
            .collect();

        Self { entries, ticker_index }
    }

    /// Table over [`STOCK_UNIVERSE`], built on first use
    pub fn global() -> &'static ReferenceTable {
        static TABLE: OnceLock<ReferenceTable> = OnceLock::new();
        TABLE.get_or_init(|| ReferenceTable::new(STOCK_UNIVERSE))
    }

    pub fn entries(&self) -> &'static [ReferenceEntry] {
        self.entries
    }

    /// Exact, case-sensitive ticker lookup
    pub fn get(&self, ticker: &str) -> Option<&'static ReferenceEntry> {
        self.ticker_index.get(ticker).map(|&idx| &self.entries[idx])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
