//! extension-helper command line front-end
//!
//! Exposes the helper operations for scripting and manual checks. Results are printed
//! to stdout as plain lines or JSON; logs go to stderr (`RUST_LOG` controls verbosity).

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use extension_helper::{BrowserSession, ChromeHost, ConnectionOptions, JsonSettings, LaunchOptions, get_current_tab,
                       get_extension_status, parse_txt, parse_url, set_badge, sleep};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

#[derive(Parser)]
#[command(name = "extension-helper")]
#[command(version)]
#[command(about = "Browser extension helper utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the usable lines of a text file (stdin when FILE is omitted)
    ParseTxt {
        file: Option<PathBuf>,
    },

    /// Parse a URL and print the result as JSON
    ParseUrl {
        url: String,
    },

    /// Print the stored extension status as JSON
    Status {
        /// JSON settings file
        #[arg(long, env = "EXTENSION_HELPER_SETTINGS", value_name = "FILE")]
        settings: PathBuf,
    },

    /// Print the current tab as JSON (or null)
    CurrentTab(BrowserArgs),

    /// Set the extension badge text
    Badge {
        text: String,

        #[command(flatten)]
        browser: BrowserArgs,
    },

    /// Wait for MS milliseconds
    Sleep {
        ms: u64,
    },
}

#[derive(Args)]
struct BrowserArgs {
    /// Connect to a running browser instead of launching one
    #[arg(long, value_name = "URL")]
    ws_url: Option<String>,

    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    executable_path: Option<PathBuf>,

    /// Unpacked extension to load (repeatable)
    #[arg(long = "extension", value_name = "DIR")]
    extensions: Vec<PathBuf>,
}

impl BrowserArgs {
    fn host(&self) -> anyhow::Result<ChromeHost> {
        let session = match &self.ws_url {
            Some(ws_url) => BrowserSession::connect(ConnectionOptions::new(ws_url.clone()))?,
            None => {
                let mut options = LaunchOptions::new().headless(!self.headed);
                if let Some(path) = &self.executable_path {
                    options = options.chrome_path(path);
                }
                for dir in &self.extensions {
                    options = options.extension(dir);
                }
                BrowserSession::launch(options)?
            }
        };

        Ok(ChromeHost::new(session))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::ParseTxt { file } => {
            let body = match file {
                Some(path) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut body = String::new();
                    tokio::io::stdin().read_to_string(&mut body).await.context("Failed to read stdin")?;
                    body
                }
            };

            for line in parse_txt(&body) {
                println!("{}", line);
            }
        }
        Command::ParseUrl { url } => {
            println!("{}", serde_json::to_string_pretty(&parse_url(&url))?);
        }
        Command::Status { settings } => {
            let store = JsonSettings::new(settings);
            let status = get_extension_status(&store).await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Command::CurrentTab(browser) => {
            let host = browser.host()?;
            let tab = get_current_tab(&host).await?;
            println!("{}", serde_json::to_string_pretty(&tab)?);
        }
        Command::Badge { text, browser } => {
            let host = browser.host()?;
            set_badge(&host, &text).await?;
            eprintln!("Badge set to {:?}", text);
        }
        Command::Sleep { ms } => {
            let start = std::time::Instant::now();
            sleep(ms).await;
            println!("{}", start.elapsed().as_millis());
        }
    }

    Ok(())
}
