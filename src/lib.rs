pub mod commands;
pub mod modules;
pub mod shared;

use anyhow::Context;
use clap::Parser;
use commands::{execute_line, BrowseSession};
use shared::{utils::init_logger, AppConfig};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Browse the TMDB catalog from the command line
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "marquee", version)]
#[command(about = "Render a catalog page as JSON, then optionally serve JSON commands on stdin")]
pub struct CliArgs {
    /// Route to open, e.g. `/`, `/popular` or `/movie/550`
    #[arg(default_value = "/")]
    pub route: String,

    /// Keep reading line-delimited JSON commands from stdin
    #[arg(short, long)]
    pub interactive: bool,
}

pub fn run() {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let args = CliArgs::parse();
    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
        .and_then(|runtime| runtime.block_on(run_app(args)));

    if let Err(e) = result {
        log::error!("marquee failed: {:#}", e);
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

/// Render `args.route` as JSON on stdout, then optionally serve line-delimited
/// JSON commands from stdin.
pub async fn run_app(args: CliArgs) -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    let session = BrowseSession::from_config(&config).context("failed to create TMDB client")?;

    let page = session
        .open(&args.route)
        .await
        .with_context(|| format!("cannot open '{}'", args.route))?;
    println!("{}", serde_json::to_string_pretty(&page)?);

    if !args.interactive {
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let reply = match execute_line(&session, &line).await {
            Ok(value) => serde_json::json!({ "ok": value }),
            Err(message) => serde_json::json!({ "error": message }),
        };
        println!("{}", reply);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("marquee").chain(list.iter().copied()))
    }

    #[test]
    fn test_cli_defaults_to_landing() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.route, "/");
        assert!(!parsed.interactive);
    }

    #[test]
    fn test_cli_route_and_flag() {
        let parsed = args(&["/movie/550", "--interactive"]).unwrap();
        assert_eq!(parsed.route, "/movie/550");
        assert!(parsed.interactive);

        assert!(args(&["/", "/popular"]).is_err());
        assert!(args(&["--verbose"]).is_err());
    }

    #[test]
    fn test_cli_short_flag() {
        let parsed = args(&["-i", "/popular"]).unwrap();
        assert_eq!(parsed.route, "/popular");
        assert!(parsed.interactive);
    }

    #[test]
    fn test_cli_help_is_not_a_route() {
        let err = args(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
