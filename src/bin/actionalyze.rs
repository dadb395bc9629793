use actionalyze::config::{Config, KeyStore};
use actionalyze::data_provider::DataProvider;
use actionalyze::mock::MAX_HISTORY_DAYS;
use actionalyze::models::action::CorporateAction;
use actionalyze::models::company::Company;
use actionalyze::models::price::StockPricePoint;
use actionalyze::services::analysis_service::AnalysisService;
use actionalyze::util::{format_market_cap_billions, format_yield_percent};

use anyhow::{anyhow, Context};
use clap::{App, Arg, ArgMatches, SubCommand};
use log::{error, info};
use serde::Serialize;

fn ticker_arg() -> Arg<'static> {
    Arg::with_name("ticker")
        .short('t')
        .long("ticker")
        .value_name("TICKER")
        .help("Stock ticker, e.g. AAPL")
        .required(true)
        .takes_value(true)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_companies(companies: &[Company]) {
    println!("{:<8} {:<28} {:<24} {:>10} {:>8}", "Ticker", "Name", "Sector", "Price", "Chg%");
    println!("{:-<82}", "");
    for c in companies {
        println!(
            "{:<8} {:<28} {:<24} {:>10.2} {:>+8.2}",
            c.ticker, c.name, c.sector, c.price, c.change_percent
        );
    }
}

fn print_company(c: &Company) {
    println!("{} ({})", c.name, c.ticker);
    println!("{:-<60}", "");
    println!("Sector:         {}", c.sector);
    println!("Industry:       {}", c.industry);
    println!("Price:          ${:.2} ({:+.2}, {:+.2}%)", c.price, c.change, c.change_percent);
    println!("Market Cap:     ${}", format_market_cap_billions(c.market_cap));
    println!("Dividend Yield: {}", format_yield_percent(c.dividend_yield));
    println!("Logo:           {}", c.logo_url);
    println!();
    println!("{}", c.description);
}

fn print_actions(actions: &[CorporateAction]) {
    println!("{:<10} {:<8} {:<12} {:<10} {:<14} {}", "Date", "Ticker", "Type", "Status", "Value", "Id");
    println!("{:-<70}", "");
    for a in actions {
        println!(
            "{:<10} {:<8} {:<12} {:<10} {:<14} {}",
            a.date.format("%Y-%m-%d"),
            a.ticker,
            a.action_type.as_str(),
            a.status.as_str(),
            a.value.as_deref().unwrap_or("N/A"),
            a.id
        );
    }
}

fn print_history(points: &[StockPricePoint]) {
    println!("{:<10} {:>10} {:>12}", "Date", "Close", "Volume");
    println!("{:-<34}", "");
    for p in points {
        println!("{:<10} {:>10.2} {:>12}", p.date.format("%Y-%m-%d"), p.price, p.volume);
    }
}

fn parse_usize(matches: &ArgMatches, name: &str, default: usize) -> anyhow::Result<usize> {
    match matches.value_of(name) {
        Some(v) => v.parse::<usize>().with_context(|| format!("--{} must be a number, got {}", name, v)),
        None => Ok(default),
    }
}

/// Global args may be given before or after the subcommand
fn global_flag(matches: &ArgMatches, name: &str) -> bool {
    matches.is_present(name) || matches.subcommand().map_or(false, |(_, sub)| sub.is_present(name))
}

fn global_value<'a>(matches: &'a ArgMatches, name: &str) -> Option<&'a str> {
    matches
        .value_of(name)
        .or_else(|| matches.subcommand().and_then(|(_, sub)| sub.value_of(name)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = App::new("Actionalyze")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Corporate action dashboard data engine")
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print results as JSON")
                .global(true)
                .takes_value(false),
        )
        .arg(
            Arg::with_name("key-file")
                .long("key-file")
                .value_name("PATH")
                .help("Location of the local API key file")
                .global(true)
                .takes_value(true),
        )
        .subcommand(SubCommand::with_name("status").about("Show whether live market data and AI analysis are available"))
        .subcommand(
            SubCommand::with_name("company")
                .about("Show a company profile")
                .arg(ticker_arg()),
        )
        .subcommand(
            SubCommand::with_name("search")
                .about("Search companies by name or ticker")
                .arg(
                    Arg::with_name("query")
                        .short('q')
                        .long("query")
                        .value_name("QUERY")
                        .help("Search text; empty lists the default companies")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("movers")
                .about("Show the biggest movers")
                .arg(
                    Arg::with_name("limit")
                        .short('l')
                        .long("limit")
                        .value_name("LIMIT")
                        .takes_value(true)
                        .default_value("4"),
                ),
        )
        .subcommand(
            SubCommand::with_name("actions")
                .about("List corporate actions")
                .arg(
                    Arg::with_name("ticker")
                        .short('t')
                        .long("ticker")
                        .value_name("TICKER")
                        .help("Only this company's actions")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("limit")
                        .short('l')
                        .long("limit")
                        .value_name("LIMIT")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("history")
                .about("Show daily price history")
                .arg(ticker_arg())
                .arg(
                    Arg::with_name("days")
                        .short('d')
                        .long("days")
                        .value_name("DAYS")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("analyze")
                .about("AI impact analysis of one corporate action")
                .arg(ticker_arg())
                .arg(
                    Arg::with_name("action")
                        .short('a')
                        .long("action")
                        .value_name("ACTION_ID")
                        .help("Action id (e.g. AAPL-0); defaults to the company's latest action")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("image")
                .about("Generate an AI infographic for a company")
                .arg(ticker_arg()),
        )
        .subcommand(
            SubCommand::with_name("keys")
                .about("Store or clear local API keys")
                .arg(Arg::with_name("fmp").long("fmp").value_name("KEY").takes_value(true))
                .arg(Arg::with_name("gemini").long("gemini").value_name("KEY").takes_value(true))
                .arg(Arg::with_name("clear").long("clear").takes_value(false)),
        );

    let matches = app.get_matches();
    let json = global_flag(&matches, "json");

    let key_store = match global_value(&matches, "key-file") {
        Some(path) => KeyStore::new(path),
        None => KeyStore::default_location(),
    };

    if let Some(sub) = matches.subcommand_matches("keys") {
        if sub.is_present("clear") {
            key_store.clear()?;
            println!("Cleared keys at {}", key_store.path().display());
        } else {
            let keys = key_store.update(sub.value_of("fmp"), sub.value_of("gemini"))?;
            println!("Keys stored at {}", key_store.path().display());
            println!("FMP key:    {}", if keys.fmp_api_key.is_some() { "set" } else { "not set" });
            println!("Gemini key: {}", if keys.gemini_api_key.is_some() { "set" } else { "not set" });
        }
        return Ok(());
    }

    let config = Config::load(&key_store)?;
    let provider = DataProvider::new(&config)?;

    match matches.subcommand() {
        Some(("status", _)) => {
            let analysis = AnalysisService::new(&config)?;
            println!("Market data: {}", if provider.is_live() { "live (FMP)" } else { "mock" });
            println!("AI analysis: {}", if analysis.is_available() { "available" } else { "unavailable" });
        }
        Some(("company", sub)) => {
            let ticker = sub.value_of("ticker").unwrap_or_default().to_uppercase();
            match provider.get_company(&ticker).await {
                Some(company) if json => print_json(&company)?,
                Some(company) => print_company(&company),
                None => {
                    error!("Company {} not found", ticker);
                    return Err(anyhow!("Company data unavailable for {}", ticker));
                }
            }
        }
        Some(("search", sub)) => {
            let query = sub.value_of("query").unwrap_or_default();
            let results = provider.search_companies(query).await;
            info!("Search '{}' matched {} companies", query, results.len());
            if json {
                print_json(&results)?;
            } else if results.is_empty() {
                println!("Company \"{}\" not found in our database.", query);
            } else {
                print_companies(&results);
            }
        }
        Some(("movers", sub)) => {
            let limit = parse_usize(sub, "limit", 4)?;
            let movers = provider.market_movers(limit).await;
            if json {
                print_json(&movers)?;
            } else {
                print_companies(&movers);
            }
        }
        Some(("actions", sub)) => {
            let ticker = sub.value_of("ticker").map(str::to_uppercase);
            let mut actions = provider.get_corporate_actions(ticker.as_deref()).await;
            if sub.is_present("limit") {
                let limit = parse_usize(sub, "limit", actions.len())?;
                actions.truncate(limit);
            }
            if json {
                print_json(&actions)?;
            } else {
                print_actions(&actions);
            }
        }
        Some(("history", sub)) => {
            let ticker = sub.value_of("ticker").unwrap_or_default().to_uppercase();
            let days = parse_usize(sub, "days", config.default_history_days)?;
            if days > MAX_HISTORY_DAYS {
                return Err(anyhow!("--days must be at most {}, got {}", MAX_HISTORY_DAYS, days));
            }
            let history = provider.get_stock_history(&ticker, days).await;
            if json {
                print_json(&history)?;
            } else {
                print_history(&history);
            }
        }
        Some(("analyze", sub)) => {
            let ticker = sub.value_of("ticker").unwrap_or_default().to_uppercase();
            let company = provider
                .get_company(&ticker)
                .await
                .ok_or_else(|| anyhow!("Company data unavailable for {}", ticker))?;
            let actions = provider.get_corporate_actions(Some(&ticker)).await;

            let action = match sub.value_of("action") {
                Some(id) => actions.into_iter().find(|a| a.id == id),
                None => actions.into_iter().next(),
            }
            .ok_or_else(|| anyhow!("No matching corporate action for {}", ticker))?;

            let analysis = AnalysisService::new(&config)?;
            let text = analysis.analyze_action_impact(&company, &action).await;
            if json {
                print_json(&serde_json::json!({ "action": action, "analysis": text }))?;
            } else {
                println!("{}", action.description);
                println!("{:-<60}", "");
                println!("{}", text);
            }
        }
        Some(("image", sub)) => {
            let ticker = sub.value_of("ticker").unwrap_or_default().to_uppercase();
            let company = provider
                .get_company(&ticker)
                .await
                .ok_or_else(|| anyhow!("Company data unavailable for {}", ticker))?;

            let analysis = AnalysisService::new(&config)?;
            match analysis.generate_stock_image(&company).await {
                Some(data_uri) if json => print_json(&serde_json::json!({ "ticker": ticker, "image": data_uri }))?,
                Some(data_uri) => println!("{}", data_uri),
                None => println!("Image generation unavailable for {}", ticker),
            }
        }
        _ => {
            info!("No command specified. Use --help for usage information.");
            println!("No command specified. Use --help for usage information.");
        }
    }

    Ok(())
}
