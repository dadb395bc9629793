use actionalyze::config::Config;
use actionalyze::data_provider::DataProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Live data when FMP_API_KEY is set, synthesized otherwise
    let config = Config::from_env();
    let provider = DataProvider::new(&config)?;
    println!("Data mode: {}", if provider.is_live() { "live" } else { "mock" });

    let ticker = "AAPL";
    if let Some(company) = provider.get_company(ticker).await {
        println!("\nCompany: {} ({})", company.name, company.ticker);
        println!("Price: ${:.2} ({:+.2}%)", company.price, company.change_percent);

        println!("\nLast 5 days:");
        println!("{:<10} {:<10} {:<15}", "Date", "Close", "Volume");
        println!("{:-<40}", "");
        let history = provider.get_stock_history(ticker, 5).await;
        for point in &history {
            println!("{:<10} {:<10.2} {:<15}", point.date, point.price, point.volume);
        }
    } else {
        println!("Company not found: {}", ticker);
    }

    println!("\nCorporate actions:");
    for action in provider.get_corporate_actions(Some(ticker)).await {
        println!("{} {} {}", action.date, action.description, action.value.unwrap_or_default());
    }

    println!("\nMarket movers:");
    for company in provider.market_movers(4).await {
        println!("{:<8} {:+.2}%", company.ticker, company.change_percent);
    }

    Ok(())
}
