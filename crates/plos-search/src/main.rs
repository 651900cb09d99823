//! PLOS article explorer - entry point.
//!
//! Line-oriented interactive session over stdin/stdout. One search fetches
//! the result list; every other command reworks the in-memory view.

use std::path::Path;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use plos_search::config::{Config, DEFAULT_PAGE_SIZE};
use plos_search::error::SessionError;
use plos_search::view::{SortOrder, TypeFilter};
use plos_search::{Session, export, formatters};

#[derive(Parser, Debug)]
#[command(name = "plos-search")]
#[command(about = "Terminal explorer for the PLOS article search API")]
#[command(version)]
struct Cli {
    /// Initial search query, run before the prompt appears
    query: Option<String>,

    /// Override the search endpoint URL
    #[arg(long, env = "PLOS_SEARCH_URL")]
    api_url: Option<String>,

    /// Articles per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

const HELP: &str = "\
Commands:
  search <query>      fetch articles matching the query
  sort newest|oldest  change date ordering
  type <name>|all     filter by article type
  types               list article types in the current results
  years [from] [to]   set inclusive year bounds ('-' keeps a bound unset)
  page <n>            jump to a page
  next, prev          step through pages
  show <row>          detail view for a row on the current page
  export [path]       write all results as CSV (default articles.csv)
  help                this message
  quit                exit
";

enum LoopControl {
    Continue,
    Quit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting plos-search");

    let mut config = Config::new();
    if let Some(url) = cli.api_url {
        config.search_api_url = url;
    }
    config.page_size = cli.page_size;

    let mut session = Session::new(config)?;

    let mut stdout = tokio::io::stdout();

    if let Some(query) = cli.query.as_deref() {
        let output = run_search(&mut session, query).await;
        stdout.write_all(output.as_bytes()).await?;
        stdout.flush().await?;
    }

    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            // EOF
            tracing::info!("stdin closed, shutting down");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (output, control) = dispatch(&mut session, trimmed).await;
        if !output.is_empty() {
            stdout.write_all(output.as_bytes()).await?;
            stdout.flush().await?;
        }

        if matches!(control, LoopControl::Quit) {
            break;
        }
    }

    Ok(())
}

async fn dispatch(session: &mut Session, line: &str) -> (String, LoopControl) {
    let mut parts = line.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    let output = match command {
        "search" | "s" => run_search(session, rest).await,
        "sort" => match rest {
            "newest" => {
                session.set_sort(SortOrder::Newest);
                render(session)
            }
            "oldest" => {
                session.set_sort(SortOrder::Oldest);
                render(session)
            }
            _ => "usage: sort newest|oldest\n".to_string(),
        },
        "type" => {
            if rest.is_empty() {
                "usage: type <name>|all\n".to_string()
            } else {
                let filter = if rest == "all" {
                    TypeFilter::All
                } else {
                    TypeFilter::Only(rest.to_string())
                };
                session.set_type_filter(filter);
                render(session)
            }
        }
        "types" => {
            let types = session.article_types();
            if types.is_empty() {
                "No article types in the current results.\n".to_string()
            } else {
                format!("{}\n", types.join("\n"))
            }
        }
        "years" => match parse_years(rest) {
            Ok((from, to)) => {
                session.set_year_range(from, to);
                render(session)
            }
            Err(message) => format!("{message}\n"),
        },
        "page" => match rest.parse::<usize>() {
            Ok(page) => {
                session.set_page(page);
                render(session)
            }
            Err(_) => "usage: page <number>\n".to_string(),
        },
        "next" => {
            session.next_page();
            render(session)
        }
        "prev" => {
            session.prev_page();
            render(session)
        }
        "show" => match rest.parse::<usize>() {
            Ok(row) => session.detail(row).map_or_else(
                || "No such row on this page.\n".to_string(),
                |article| formatters::format_detail(&article),
            ),
            Err(_) => "usage: show <row>\n".to_string(),
        },
        "export" => run_export(session, rest),
        "help" => HELP.to_string(),
        "quit" | "exit" => return (String::new(), LoopControl::Quit),
        _ => format!("Unknown command: {command}. Try 'help'.\n"),
    };

    (output, LoopControl::Continue)
}

async fn run_search(session: &mut Session, query: &str) -> String {
    match session.search(query).await {
        Ok(_) => render(session),
        // Blank input is ignored without a message, like the original form
        Err(SessionError::EmptyQuery) => String::new(),
        Err(err) => {
            tracing::warn!(error = %err, "search failed");
            format!("{}\n", err.user_message())
        }
    }
}

fn run_export(session: &Session, rest: &str) -> String {
    let path = if rest.is_empty() { Path::new(export::DEFAULT_FILENAME) } else { Path::new(rest) };

    match session.export_to(path) {
        Ok(true) => {
            format!("Exported {} articles to {}\n", session.store().len(), path.display())
        }
        // Empty store: no file, no message
        Ok(false) => String::new(),
        Err(err) => {
            tracing::warn!(error = %err, "export failed");
            format!("Export failed: {err}\n")
        }
    }
}

fn render(session: &Session) -> String {
    let page = session.current_page();

    let mut output = format!("{}\n", formatters::format_results_count(page.total));
    output.push_str(&formatters::format_page(&page, session.query()));

    let strip = formatters::format_pagination(page.total_pages, page.page);
    if !strip.is_empty() {
        output.push_str(&strip);
        output.push('\n');
    }

    output
}

fn parse_years(rest: &str) -> Result<(Option<i32>, Option<i32>), String> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() > 2 {
        return Err("usage: years [from] [to]".to_string());
    }

    let parse = |token: &str| -> Result<Option<i32>, String> {
        if token == "-" {
            return Ok(None);
        }
        token.parse().map(Some).map_err(|_| format!("not a year: {token}"))
    };

    let from = tokens.first().copied().map(parse).transpose()?.flatten();
    let to = tokens.get(1).copied().map(parse).transpose()?.flatten();

    Ok((from, to))
}
