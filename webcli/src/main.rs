// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use bytes::Bytes;
use clap::{Arg, ArgMatches, Command, value_parser};
use directories::ProjectDirs;
use klug_client::{
    ClientConfig, FilePreferenceStore, Workflow,
    models::{dashboard::HISTORY_LABELS, import::ImportUpload, import_errors::ErrorPanel},
};
use klug_core::{HistoryQuery, ImportBatchId, ImportMode, MediaType, import::validate::ImportFile};
use uuid::Uuid;

mod environment;
use self::environment::Environment;

const DEFAULT_LOG_FILTER: &str = "info";

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

const SERVER_URL_ENV: &str = "KLUG_SERVER_URL";

const API_KEY_ENV: &str = "KLUG_API_KEY";

const PASSWORD_ENV: &str = "KLUG_PASSWORD";

const SERVER_URL_ARG: &str = "server-url";

const PROFILE_DIR_ARG: &str = "profile-dir";

const TIMEOUT_SECS_ARG: &str = "timeout-secs";

const API_KEY_ARG: &str = "api-key";

const PASSWORD_ARG: &str = "password";

const FILE_ARG: &str = "file";

const USER_ID_ARG: &str = "user-id";

const MODE_ARG: &str = "mode";

const DRY_RUN_ARG: &str = "dry-run";

const RESUME_ARG: &str = "resume";

const BATCH_ID_ARG: &str = "batch-id";

const LIMIT_ARG: &str = "limit";

const PAGE_ARG: &str = "page";

const MEDIA_TYPE_ARG: &str = "media-type";

const SHOW_ID_ARG: &str = "show-id";

type CliWorkflow = Workflow<Environment, FilePreferenceStore>;

fn batch_id_arg() -> Arg {
    Arg::new(BATCH_ID_ARG)
        .help("The id of the import batch")
        .num_args(1)
        .required(true)
        .value_parser(value_parser!(ImportBatchId))
}

fn limit_arg(help: &'static str) -> Arg {
    Arg::new(LIMIT_ARG)
        .long(LIMIT_ARG)
        .help(help)
        .num_args(1)
        .required(false)
        .value_parser(value_parser!(u32).range(1..))
}

fn command() -> Command {
    Command::new("klug-webcli")
        .about("Imports legacy backup files into the watch history")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg(
            Arg::new(SERVER_URL_ARG)
                .long(SERVER_URL_ARG)
                .help("The base URL of the server")
                .num_args(1)
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new(PROFILE_DIR_ARG)
                .long(PROFILE_DIR_ARG)
                .help("The directory for storing preferences")
                .num_args(1)
                .global(true)
                .required(false)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(TIMEOUT_SECS_ARG)
                .long(TIMEOUT_SECS_ARG)
                .help("Timeout for each request in seconds")
                .num_args(1)
                .global(true)
                .required(false)
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(API_KEY_ARG)
                .long(API_KEY_ARG)
                .help("Authenticate requests with an API key instead of a session")
                .num_args(1)
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new(PASSWORD_ARG)
                .long(PASSWORD_ARG)
                .help("Log in with this password before executing the command")
                .num_args(1)
                .global(true)
                .required(false),
        )
        .subcommand(Command::new("session").about("Checks the current session"))
        .subcommand(Command::new("login").about("Logs in with the given password"))
        .subcommand(Command::new("logout").about("Terminates the current session"))
        .subcommand(
            Command::new("import")
                .about("Uploads a legacy backup file (.json or .csv)")
                .arg(
                    Arg::new(FILE_ARG)
                        .long(FILE_ARG)
                        .help("The backup file")
                        .num_args(1)
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new(USER_ID_ARG)
                        .long(USER_ID_ARG)
                        .help("The UUID of the user (defaults to the saved preference)")
                        .num_args(1)
                        .required(false),
                )
                .arg(
                    Arg::new(MODE_ARG)
                        .long(MODE_ARG)
                        .help("The import mode (defaults to the saved preference)")
                        .num_args(1)
                        .required(false)
                        .value_parser([
                            ImportMode::Bootstrap.as_str(),
                            ImportMode::Incremental.as_str(),
                        ]),
                )
                .arg(
                    Arg::new(DRY_RUN_ARG)
                        .long(DRY_RUN_ARG)
                        .help("Validate without persisting (defaults to the saved preference)")
                        .num_args(1)
                        .required(false)
                        .value_parser(value_parser!(bool)),
                )
                .arg(
                    Arg::new(RESUME_ARG)
                        .long(RESUME_ARG)
                        .help("Resume from the latest cursor (defaults to the saved preference)")
                        .num_args(1)
                        .required(false)
                        .value_parser(value_parser!(bool)),
                ),
        )
        .subcommand(
            Command::new("errors")
                .about("Lists the row errors of an import batch")
                .arg(batch_id_arg())
                .arg(limit_arg("The maximum number of errors")),
        )
        .subcommand(
            Command::new("batches")
                .about("Lists the most recent import batches")
                .arg(limit_arg("The maximum number of batches")),
        )
        .subcommand(
            Command::new("reuse")
                .about("Reuses the settings of a recent import batch for the next import")
                .arg(batch_id_arg()),
        )
        .subcommand(Command::new("dashboard").about("Shows the dashboard of the current user"))
        .subcommand(
            Command::new("show")
                .about("Shows the episodes and the watch progress of a show")
                .arg(
                    Arg::new(SHOW_ID_ARG)
                        .help("The id of the show")
                        .num_args(1)
                        .required(true)
                        .value_parser(value_parser!(Uuid)),
                ),
        )
        .subcommand(
            Command::new("history")
                .about("Lists a page of the watch history")
                .arg(
                    Arg::new(PAGE_ARG)
                        .long(PAGE_ARG)
                        .help("The 1-based page number")
                        .num_args(1)
                        .required(false)
                        .default_value("1")
                        .value_parser(value_parser!(u32).range(1..)),
                )
                .arg(
                    Arg::new(MEDIA_TYPE_ARG)
                        .long(MEDIA_TYPE_ARG)
                        .help("Only list events of this media type")
                        .num_args(1)
                        .required(false)
                        .value_parser([
                            MediaType::Movie.as_str(),
                            MediaType::Show.as_str(),
                            MediaType::Episode.as_str(),
                        ]),
                )
                .arg(limit_arg("The number of events per page")),
        )
}

fn default_profile_dir() -> anyhow::Result<PathBuf> {
    ProjectDirs::from("org", "klug", "klug")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("no default profile directory available"))
}

fn client_config(matches: &ArgMatches) -> ClientConfig {
    let mut config = ClientConfig::default();
    let Some((subcommand, matches)) = matches.subcommand() else {
        return config;
    };
    let Some(limit) = matches.try_get_one::<u32>(LIMIT_ARG).ok().flatten() else {
        return config;
    };
    match subcommand {
        "errors" => config.error_page_size = *limit,
        "batches" => config.batch_history_page_size = *limit,
        "history" => config.history_page_size = *limit,
        _ => (),
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let matches = command().get_matches();

    let server_url = matches
        .get_one::<String>(SERVER_URL_ARG)
        .cloned()
        .or_else(|| env::var(SERVER_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_owned())
        .parse()?;
    let api_key = matches
        .get_one::<String>(API_KEY_ARG)
        .cloned()
        .or_else(|| env::var(API_KEY_ENV).ok());
    let timeout = matches
        .get_one::<u64>(TIMEOUT_SECS_ARG)
        .copied()
        .map(Duration::from_secs);
    let env = Environment::new(server_url, api_key.as_deref(), timeout)?;

    let profile_dir = match matches.get_one::<PathBuf>(PROFILE_DIR_ARG) {
        Some(profile_dir) => profile_dir.clone(),
        None => default_profile_dir()?,
    };
    let store = FilePreferenceStore::open(&profile_dir)?;
    log::info!("Using preferences file {}", store.file_path().display());

    let mut workflow = Workflow::new(env, store, client_config(&matches));

    let password = matches
        .get_one::<String>(PASSWORD_ARG)
        .cloned()
        .or_else(|| env::var(PASSWORD_ENV).ok());
    if let Some(password) = &password {
        if !workflow.login(password).await {
            anyhow::bail!("Login failed");
        }
        log::info!("{}", workflow.models().session.state());
    }

    run(&mut workflow, &matches, password.is_some()).await
}

async fn run(
    workflow: &mut CliWorkflow,
    matches: &ArgMatches,
    logged_in: bool,
) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("session", _)) => {
            let state = workflow.check_session().await;
            println!("{state}");
        }
        Some(("login", _)) => {
            // Login has already been performed
            if !logged_in {
                anyhow::bail!("--{PASSWORD_ARG} or {PASSWORD_ENV} required");
            }
        }
        Some(("logout", _)) => {
            let state = workflow.logout().await;
            println!("{state}");
        }
        Some(("import", matches)) => import(workflow, matches).await?,
        Some(("errors", matches)) => {
            let import_batch_id = *matches
                .get_one::<ImportBatchId>(BATCH_ID_ARG)
                .ok_or_else(|| anyhow::anyhow!("missing batch id"))?;
            let limit = workflow.config().error_page_size;
            workflow.fetch_errors(import_batch_id, limit).await;
            print_error_panel(workflow.models().import_errors.panel());
            if matches!(
                workflow.models().import_errors.panel(),
                ErrorPanel::Failed
            ) {
                anyhow::bail!("Failed to fetch errors");
            }
        }
        Some(("batches", _)) => {
            workflow.refresh_batch_history().await;
            print_batches(workflow);
        }
        Some(("reuse", matches)) => {
            let import_batch_id = *matches
                .get_one::<ImportBatchId>(BATCH_ID_ARG)
                .ok_or_else(|| anyhow::anyhow!("missing batch id"))?;
            workflow.refresh_batch_history().await;
            let settings = workflow.reuse_settings(import_batch_id)?;
            println!(
                "Reused settings of batch {import_batch_id}: mode {mode}, dry run {dry_run}, \
                 resume {resume}",
                mode = settings.mode,
                dry_run = settings.dry_run,
                resume = settings.resume_from_latest,
            );
        }
        Some(("dashboard", _)) => {
            if !workflow.start_session().await {
                anyhow::bail!("{}", workflow.models().session.state());
            }
            print_dashboard(workflow);
        }
        Some(("show", matches)) => {
            let show_id = *matches
                .get_one::<Uuid>(SHOW_ID_ARG)
                .ok_or_else(|| anyhow::anyhow!("missing show id"))?;
            workflow.load_show_detail(&show_id).await;
            let show_detail = &workflow.models().dashboard.show_detail;
            if let Some(detail) = show_detail.detail() {
                for line in detail.lines() {
                    println!("{line}");
                }
            }
            println!("{}", show_detail.status_message());
            if show_detail.detail().is_none() {
                anyhow::bail!("Failed to load show {show_id}");
            }
        }
        Some(("history", matches)) => {
            let page = matches.get_one::<u32>(PAGE_ARG).copied().unwrap_or(1);
            let media_type = matches
                .get_one::<String>(MEDIA_TYPE_ARG)
                .map(|media_type| media_type.parse::<MediaType>())
                .transpose()?;
            let limit = workflow.config().history_page_size;
            let query = HistoryQuery {
                limit,
                offset: limit.saturating_mul(page - 1),
                media_type,
            };
            workflow.load_history(query).await;
            print_history(workflow);
        }
        Some((subcommand, _)) => {
            unreachable!("Unknown subcommand {subcommand}");
        }
        None => (),
    }

    Ok(())
}

fn upload_file_name(path: &Path) -> anyhow::Result<String> {
    path.file_name()
        .and_then(|file_name| file_name.to_str())
        .map(ToOwned::to_owned)
        .ok_or_else(|| anyhow::anyhow!("invalid file name: {}", path.display()))
}

async fn import(workflow: &mut CliWorkflow, matches: &ArgMatches) -> anyhow::Result<()> {
    let mut settings = workflow.settings().clone();
    if let Some(user_id) = matches.get_one::<String>(USER_ID_ARG) {
        settings.user_id.clone_from(user_id);
    }
    if let Some(mode) = matches.get_one::<String>(MODE_ARG) {
        settings.mode = mode.parse()?;
    }
    if let Some(dry_run) = matches.get_one::<bool>(DRY_RUN_ARG) {
        settings.dry_run = *dry_run;
    }
    if let Some(resume_from_latest) = matches.get_one::<bool>(RESUME_ARG) {
        settings.resume_from_latest = *resume_from_latest;
    }
    workflow.update_settings(settings);

    let file_path = matches
        .get_one::<PathBuf>(FILE_ARG)
        .ok_or_else(|| anyhow::anyhow!("missing file"))?;
    let file = ImportFile {
        name: upload_file_name(file_path)?,
        size: tokio::fs::metadata(file_path).await?.len(),
    };
    let accepted = workflow.validate(Some(&file))?;
    log::info!(
        "Importing {} ({} byte(s)) as {}",
        file.name,
        file.size,
        accepted.format
    );
    let upload = ImportUpload {
        file_name: file.name,
        content: Bytes::from(tokio::fs::read(file_path).await?),
    };
    let result = workflow.submit(accepted.format, upload).await;
    let model = &workflow.models().import;
    if let Some(status_message) = model.status_message() {
        println!("{status_message}");
    }
    println!("cursor_before: {}", model.cursor_before());
    println!("cursor_after: {}", model.cursor_after());
    match result {
        Ok(summary) => {
            for line in summary.detail_lines() {
                println!("{line}");
            }
            print_error_panel(workflow.models().import_errors.panel());
            Ok(())
        }
        Err(failure) => {
            if let Some(payload) = model.last_error_payload() {
                println!("{payload:#}");
            }
            Err(failure.into())
        }
    }
}

fn print_error_panel(panel: &ErrorPanel) {
    for line in panel.lines() {
        println!("{line}");
    }
}

fn print_batches(workflow: &CliWorkflow) {
    let batch_history = &workflow.models().batch_history;
    println!("{}", batch_history.status_message());
    for entry in batch_history.entries() {
        println!("{}", entry.summary_line());
    }
}

fn print_history(workflow: &CliWorkflow) {
    let dashboard = &workflow.models().dashboard;
    let query = dashboard.history_query();
    println!(
        "{} (page {})",
        HISTORY_LABELS.status_message(dashboard.history.status()),
        query.page()
    );
    for event in dashboard.history.items() {
        println!("{event}");
    }
    if dashboard.has_next_history_page() {
        println!("More events on page {}", query.next_page().page());
    }
}

fn print_dashboard(workflow: &CliWorkflow) {
    let dashboard = &workflow.models().dashboard;
    let [shows_status, progress_status, _] = dashboard.status_messages();
    println!("{shows_status}");
    for show in dashboard.shows.items() {
        println!("{show}");
    }
    println!("{progress_status}");
    for progress in dashboard.progress.items() {
        println!("{progress}");
    }
    print_history(workflow);
    print_batches(workflow);
}
