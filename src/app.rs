use std::io::Write;
use std::time::Duration;

use clap::{error::ErrorKind, CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tokio::io::BufReader;
use tokio::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::loader::{self, ClientOptions};
use crate::output::OutputFormat;
use crate::session::{self, Session};
use crate::table::{Action, SelectAllPolicy, TableState};

fn format_kv_line(label: &str, value: &str) {
    eprintln!(":: {:<10}: {}", label, value);
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Clone, Debug)]
struct RunConfig {
    url: String,
    timeout: u64,
    proxy: Option<String>,
    select_all_policy: SelectAllPolicy,
    format: OutputFormat,
    no_color: bool,
    script: Option<String>,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let url = args
        .url
        .or(cfg.url)
        .map(|u| u.trim().to_string())
        .unwrap_or_else(|| loader::DEFAULT_MEMBERS_URL.to_string());
    reqwest::Url::parse(&url).map_err(|e| format!("invalid url '{url}': {e}"))?;

    let timeout = args.timeout.or(cfg.timeout).unwrap_or(10);
    if timeout == 0 {
        return Err("invalid timeout, expected positive integer".to_string());
    }

    let proxy = args
        .proxy
        .or(cfg.proxy)
        .filter(|p| !p.trim().is_empty());

    let select_all_policy = match args.select_all_policy.or(cfg.select_all_policy) {
        Some(raw) => SelectAllPolicy::parse(&raw)
            .ok_or_else(|| format!("invalid select-all-policy '{raw}'"))?,
        None => SelectAllPolicy::default(),
    };

    let format = match args.format.or(cfg.format) {
        Some(raw) => OutputFormat::parse(&raw).ok_or_else(|| format!("invalid format '{raw}'"))?,
        None => OutputFormat::default(),
    };

    let script = args
        .script
        .map(|p| config::expand_tilde(&p).to_string_lossy().to_string());

    Ok(RunConfig {
        url,
        timeout,
        proxy,
        select_all_policy,
        format,
        no_color,
        script,
    })
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }

    format_kv_line("Source", &run.url);
    format_kv_line("Timeout", &format!("{}s", run.timeout));
    format_kv_line("Select all", run.select_all_policy.label());
    format_kv_line("Format", run.format.label());
    format_kv_line("Color", format_bool(!run.no_color));

    let client = loader::build_client(&ClientOptions {
        timeout_seconds: run.timeout,
        proxy: run.proxy.clone(),
    })
    .map_err(|e| e.to_string())?;

    let pb = ProgressBar::new_spinner();
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {elapsed} {msg}")
            .map_err(|e| format!("invalid progress template: {e}"))?,
    );
    pb.set_message("fetching members");

    let now = Instant::now();
    let members = loader::load_members(&client, &run.url).await;
    pb.finish_and_clear();
    info!(
        elapsed_ms = now.elapsed().as_millis() as u64,
        "initial load finished"
    );

    let mut state = TableState::new(run.select_all_policy);
    state.apply(Action::Loaded(members));
    let mut session = Session::new(state, run.format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run.script.as_ref() {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .map_err(|e| format!("failed to open script file {path}: {e}"))?;
            session::run_session(&mut session, BufReader::new(file), &mut out, false).await?;
        }
        None => {
            eprintln!("type 'help' for commands");
            session::run_session(&mut session, BufReader::new(tokio::io::stdin()), &mut out, true)
                .await?;
        }
    }
    out.flush()
        .map_err(|e| format!("failed to flush output: {e}"))?;
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp => {
                print!("{}", CliArgs::command().render_long_help());
                return Ok(());
            }
            ErrorKind::DisplayVersion => {
                let cmd = CliArgs::command();
                print!("{}", cmd.render_version());
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    init_tracing(args.verbose);

    if args.init_config {
        let path = match args.config.as_ref() {
            Some(path) => config::expand_tilde(path),
            None => config::default_config_path()
                .ok_or_else(|| "could not determine home directory".to_string())?,
        };
        config::ensure_default_config_file(&path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let cfg = match args.config.as_ref() {
        Some(path) => config::load_config(&config::expand_tilde(path), false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(run_async(run))?;
    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn defaults_point_at_members_endpoint() {
        let args = CliArgs::parse_from(["memberdesk"]);
        let run = build_run_config(args, ConfigFile::default()).unwrap();
        assert_eq!(run.url, loader::DEFAULT_MEMBERS_URL);
        assert_eq!(run.timeout, 10);
        assert_eq!(run.select_all_policy, SelectAllPolicy::PageSize);
        assert_eq!(run.format, OutputFormat::Text);
        assert!(!run.no_color);
    }

    #[test]
    fn cli_overrides_config_file() {
        let args = CliArgs::parse_from(["memberdesk", "--timeout", "4", "--format", "json"]);
        let cfg = ConfigFile {
            url: Some("http://localhost:9000/m.json".to_string()),
            timeout: Some(30),
            format: Some("text".to_string()),
            select_all_policy: Some("visible-rows".to_string()),
            no_color: Some(true),
            ..ConfigFile::default()
        };
        let run = build_run_config(args, cfg).unwrap();
        assert_eq!(run.url, "http://localhost:9000/m.json");
        assert_eq!(run.timeout, 4);
        assert_eq!(run.format, OutputFormat::Json);
        assert_eq!(run.select_all_policy, SelectAllPolicy::VisibleRows);
        assert!(run.no_color);
    }

    #[test]
    fn color_flag_beats_config_no_color() {
        let args = CliArgs::parse_from(["memberdesk", "--color"]);
        let cfg = ConfigFile {
            no_color: Some(true),
            ..ConfigFile::default()
        };
        assert!(!build_run_config(args, cfg).unwrap().no_color);
    }

    #[test]
    fn invalid_config_values_are_rejected() {
        let args = CliArgs::parse_from(["memberdesk"]);
        let cfg = ConfigFile {
            select_all_policy: Some("everything".to_string()),
            ..ConfigFile::default()
        };
        assert!(build_run_config(args, cfg).is_err());

        let args = CliArgs::parse_from(["memberdesk"]);
        let cfg = ConfigFile {
            url: Some("::nope::".to_string()),
            ..ConfigFile::default()
        };
        assert!(build_run_config(args, cfg).is_err());
    }
}
