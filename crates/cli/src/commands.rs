use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database and table, then load users from a CSV file
    Seed {
        #[arg(long, help = "Path to the users CSV file")]
        csv: PathBuf,
    },
    /// Print a table page by page, one JSON document per page
    Paginate {
        #[arg(long, allow_negative_numbers = true, help = "Rows per page (must be positive)")]
        page_size: i64,

        #[arg(long, default_value = "user_data", help = "Table to read")]
        table: String,

        #[arg(long, help = "Column used to give pages a stable order")]
        order_by: Option<String>,

        #[arg(long, help = "Stop after this many pages")]
        max_pages: Option<usize>,
    },
    /// Print rows one by one as JSON, fetched lazily page by page
    Stream {
        #[arg(long, default_value_t = 100, allow_negative_numbers = true, help = "Rows per page")]
        page_size: i64,

        #[arg(long, default_value = "user_data", help = "Table to read")]
        table: String,

        #[arg(long, help = "Stop after this many rows")]
        limit: Option<usize>,
    },
    /// Average a numeric column without loading it into memory
    Average {
        #[arg(long, default_value = "age", help = "Numeric column to average")]
        column: String,

        #[arg(long, default_value_t = 100, allow_negative_numbers = true, help = "Rows per page")]
        page_size: i64,

        #[arg(long, default_value = "user_data", help = "Table to read")]
        table: String,
    },
    /// Run one statement on a scoped connection and print the rows
    Query {
        #[arg(long, help = "SQL statement, with ? placeholders")]
        sql: String,

        #[arg(long = "param", help = "Positional parameter (repeatable)")]
        params: Vec<String>,
    },
    /// Run the user queries concurrently and print a summary
    Report {
        #[arg(long, default_value_t = 30, help = "Age threshold for the older-users query")]
        min_age: i64,
    },
    /// Check that the configured server answers `SELECT 1`
    TestConn,
}
