use dotenvy::dotenv;
use order_console::domain::filter::OrdersFilter;
use order_console::errors::ORDERS_UNAVAILABLE_MESSAGE;
use order_console::{build_service, ApiConfig};
use std::env;
use std::process::ExitCode;

/// 1-based page number from the first argument, page 1 when absent.
fn parse_page(raw: Option<String>) -> Result<u32, String> {
    let Some(raw) = raw else {
        return Ok(1);
    };
    match raw.parse::<u32>() {
        Ok(page) if page > 0 => Ok(page),
        _ => Err(format!("Page must be a positive number, got '{}'", raw)),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let page = match parse_page(env::args().nth(1)) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut filter = OrdersFilter::from_page_number(page);
    if let Ok(status) = env::var("STATUS") {
        filter = filter.with_status(status);
    }

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Loading orders from {}", config.base_url);

    let result = match build_service(&config) {
        Ok(service) => service.list_orders(&filter).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(page) => {
            for order in &page.orders {
                println!(
                    "{}  {}  {:<10}  {:<24}  {}",
                    order.order_id,
                    order.created_at.format("%Y-%m-%d %H:%M"),
                    order.status,
                    order.customer_name,
                    order.total
                );
            }
            println!(
                "Page {} of {} ({} orders)",
                page.meta.page_index + 1,
                page.meta.page_count().max(1),
                page.meta.total_count
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", ORDERS_UNAVAILABLE_MESSAGE);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(parse_page(None), Ok(1));
        assert_eq!(parse_page(Some("3".to_string())), Ok(3));
    }

    #[test]
    fn zero_and_garbage_pages_are_rejected() {
        assert_eq!(
            parse_page(Some("0".to_string())),
            Err("Page must be a positive number, got '0'".to_string())
        );
        assert!(parse_page(Some("-1".to_string())).is_err());
        assert!(parse_page(Some("two".to_string())).is_err());
    }
}
