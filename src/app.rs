use clap::{error::ErrorKind, Parser};

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::client::{self, ApiClient, ClientOptions};
use crate::config::{self, ConfigFile};
use crate::listing::paging;
use crate::tui::{self, App};

#[derive(Clone, Debug)]
struct RunConfig {
    api_url: String,
    timeout: u64,
    page_size: usize,
    proxy: Option<String>,
    no_color: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let api_url = args
        .api_url
        .or(cfg.api_url)
        .unwrap_or_else(|| client::DEFAULT_API_URL.to_string());
    reqwest::Url::parse(&api_url).map_err(|e| format!("invalid api url '{api_url}': {e}"))?;

    let timeout = args.timeout.or(cfg.timeout).unwrap_or(10);
    if timeout == 0 {
        return Err("invalid timeout, expected positive integer".to_string());
    }

    let page_size = args
        .page_size
        .or(cfg.page_size)
        .unwrap_or(paging::RECORDS_PER_PAGE);
    if page_size == 0 {
        return Err("invalid page-size, expected positive integer".to_string());
    }

    let proxy = args.proxy.or(cfg.proxy);

    Ok(RunConfig {
        api_url,
        timeout,
        page_size,
        proxy,
        no_color,
    })
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }

    let client = ApiClient::new(&ClientOptions {
        api_url: run.api_url.clone(),
        timeout_seconds: run.timeout,
        proxy: run.proxy.clone(),
    })
    .map_err(|e| format!("failed to build api client: {e}"))?;

    let app = App::new(client, run.page_size);
    tui::run_tui(app).await.map_err(|e| e.to_string())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    let cfg = match args.config.as_deref() {
        Some(path) => {
            let path = config::expand_tilde(path);
            config::load_config(&path, false)?
        }
        None => match config::default_config_path() {
            Some(path) => {
                config::ensure_default_config_file(&path)?;
                config::load_config(&path, true)?
            }
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(run_async(run))?;
    Ok(())
}
