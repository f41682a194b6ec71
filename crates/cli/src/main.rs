use crate::{env::EnvManager, error::CliError, shutdown::ShutdownCoordinator};
use clap::Parser;
use commands::Commands;
use connectors::{
    seed::{self, USER_DATA_TABLE},
    sql::mysql::{adapter::MySqlAdapter, config::MySqlConfig, source::MySqlPageFetcher},
};
use futures_util::{Stream, StreamExt};
use model::{core::value::Value, pagination::page::PageSize};
use serde_json::json;
use std::path::PathBuf;
use streaming::{aggregate::RunningAverage, error::StreamError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod env;
mod error;
mod output;
mod shutdown;

#[derive(Parser)]
#[command(
    name = "rowstream",
    version,
    about = "Lazily page through MySQL tables"
)]
struct Cli {
    #[arg(long, global = true, default_value = ".env", help = "Env file with MYSQL_* settings")]
    env_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut env = EnvManager::new();
    env.load_if_exists(&cli.env_file)?;
    let config = MySqlConfig::from_env(env.all())?;

    let shutdown = ShutdownCoordinator::new();
    shutdown.register_handlers();

    match cli.command {
        Commands::Seed { csv } => {
            info!("Seeding {} from {}", config, csv.display());
            let inserted = seed::run(&config, &csv).await?;
            println!("Inserted {inserted} rows (duplicates ignored).");
        }
        Commands::Paginate {
            page_size,
            table,
            order_by,
            max_pages,
        } => {
            let page_size = PageSize::new(page_size)?;
            let adapter = MySqlAdapter::new(config.database_opts());
            let fetcher = MySqlPageFetcher::new(adapter.clone(), &table)?.with_order_by(order_by)?;

            let pages = streaming::paginate(fetcher, page_size);
            let pages = match max_pages {
                Some(n) => pages.take(n).boxed(),
                None => pages,
            };

            let count = drain(pages, &shutdown, |page| output::print_json_line(&page)).await?;
            info!("Printed {} pages of up to {} rows", count, page_size);
            adapter.disconnect().await?;
        }
        Commands::Stream {
            page_size,
            table,
            limit,
        } => {
            let page_size = PageSize::new(page_size)?;
            let adapter = MySqlAdapter::new(config.database_opts());
            let fetcher = MySqlPageFetcher::new(adapter.clone(), &table)?;

            let rows = streaming::rows(fetcher, page_size);
            let rows = match limit {
                Some(n) => rows.take(n).boxed(),
                None => rows,
            };

            let count = drain(rows, &shutdown, |row| output::print_json_line(&row)).await?;
            info!("Streamed {} rows", count);
            adapter.disconnect().await?;
        }
        Commands::Average {
            column,
            page_size,
            table,
        } => {
            let page_size = PageSize::new(page_size)?;
            let adapter = MySqlAdapter::new(config.database_opts());
            let fetcher =
                MySqlPageFetcher::new(adapter.clone(), &table)?.with_columns(vec![column.clone()])?;

            let mut avg = RunningAverage::new();
            let values = streaming::column_values(fetcher, page_size, &column);
            drain(values, &shutdown, |value| {
                avg.push(value);
                Ok(())
            })
            .await?;

            println!("{}", average_line(&table, &column, &avg));
            adapter.disconnect().await?;
        }
        Commands::Query { sql, params } => {
            let adapter = MySqlAdapter::new(config.database_opts());
            let params = params.iter().map(|p| parse_param(p)).collect();
            let rows = adapter.query_rows(&sql, params).await?;
            for row in &rows {
                output::print_json_line(row)?;
            }
            info!("Query returned {} rows", rows.len());
            adapter.disconnect().await?;
        }
        Commands::Report { min_age } => {
            let adapter = MySqlAdapter::new(config.database_opts());
            let all_sql = format!("SELECT * FROM {USER_DATA_TABLE}");
            let older_sql = format!("SELECT * FROM {USER_DATA_TABLE} WHERE age > ?");

            // Each query checks out its own pooled connection.
            let (all, older, total) = tokio::try_join!(
                adapter.query_rows(&all_sql, Vec::new()),
                adapter.query_rows(&older_sql, vec![Value::Int(min_age)]),
                adapter.count_rows(USER_DATA_TABLE),
            )?;

            output::print_json_pretty(&json!({
                "all_users": all.len(),
                "older_than": { "age": min_age, "count": older.len() },
                "total": total,
            }))?;
            adapter.disconnect().await?;
        }
        Commands::TestConn => {
            info!("Pinging MySQL at {}", config);
            let adapter = MySqlAdapter::new(config.server_opts());
            adapter.ping().await?;
            println!("Connection to {config} succeeded");
            adapter.disconnect().await?;
        }
    }

    Ok(())
}

/// Pulls items until the stream ends, an error occurs or shutdown is requested.
/// Returns how many items were handled.
async fn drain<S, T, F>(
    mut stream: S,
    shutdown: &ShutdownCoordinator,
    mut on_item: F,
) -> Result<usize, CliError>
where
    S: Stream<Item = Result<T, StreamError>> + Unpin,
    F: FnMut(T) -> Result<(), CliError>,
{
    let token = shutdown.cancel_token();
    let mut count = 0;

    loop {
        tokio::select! {
            _ = token.cancelled() => {
                warn!("Interrupted after {} items", count);
                break;
            }
            next = stream.next() => match next {
                Some(item) => {
                    on_item(item?)?;
                    count += 1;
                }
                None => break,
            },
        }
    }

    Ok(count)
}

/// `Average age of users: 35.60` for the stock table, a generic line otherwise.
fn average_line(table: &str, column: &str, avg: &RunningAverage) -> String {
    let value = avg.average().unwrap_or(0.0);
    if table == USER_DATA_TABLE && column == "age" {
        format!("Average age of users: {value:.2}")
    } else {
        format!("Average {column} of {} rows in {table}: {value:.2}", avg.count())
    }
}

fn parse_param(raw: &str) -> Value {
    raw.parse::<i64>()
        .map(Value::Int)
        .unwrap_or_else(|_| Value::String(raw.to_string()))
}
