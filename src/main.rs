// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::Config;
use crate::database::{DatabaseConnection, ProjectDraft, ProjectRepository};
use crate::errors::StoreError;
use crate::localization::Localizer;

mod app_config;
mod database;
mod errors;
mod export;
mod language_utils;
mod localization;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all tracked projects, newest first
    List,

    /// Add a new project
    Add {
        /// Project name
        name: String,
        /// Filesystem path or address where the project lives
        location: String,
    },

    /// Show one project by id
    Show {
        /// Project identifier
        id: i64,
    },

    /// Update a project's name and location
    Update {
        /// Project identifier
        id: i64,
        /// New project name
        name: String,
        /// New project location
        location: String,
    },

    /// Delete a project permanently
    Delete {
        /// Project identifier
        id: i64,
    },

    /// Export one project's details to a summary document
    Export {
        /// Project identifier
        id: i64,
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Set the display language and persist it to the config file
    Language {
        /// Language code (e.g., 'en', 'fr', 'ar')
        code: String,
    },
}

/// pipetrack - local project tracker
///
/// Tracks named projects with a storage location in a local SQLite
/// database and prints localized display text.
#[derive(Parser, Debug)]
#[command(name = "pipetrack")]
#[command(version = "1.0.0")]
#[command(about = "Local project tracker with localized display text")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Database file path (overrides the configured path)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");

            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => writeln!(
                    stderr,
                    "\x1B[1;31m{} ERROR {}\x1B[0m",
                    now,
                    record.args()
                ),
                Level::Warn => writeln!(
                    stderr,
                    "\x1B[1;33m{} WARN  {}\x1B[0m",
                    now,
                    record.args()
                ),
                Level::Info => writeln!(stderr, "{} {}", now, record.args()),
                _ => writeln!(stderr, "\x1B[2m{} {}\x1B[0m", now, record.args()),
            };
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    let options = CommandLineOptions::parse();

    // Start at info so config loading itself is visible; the effective
    // level is applied right after the config is read.
    CustomLogger::init(LevelFilter::Info)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    let mut config = load_or_create_config(&options.config_path)?;

    if let Some(cmd_log_level) = &options.log_level {
        config.log_level = cmd_log_level.clone().into();
    }
    log::set_max_level(config.log_level.into());

    config
        .validate()
        .context("Configuration validation failed")?;

    let localizer = Localizer::from_config(&config);

    run_command(options, config, localizer)
}

/// Load the configuration file, creating a default one when absent
fn load_or_create_config(config_path: &str) -> Result<Config> {
    if std::path::Path::new(config_path).exists() {
        Config::from_file(config_path)
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();
        config.save(config_path)?;
        Ok(config)
    }
}

/// Open the repository at the path from CLI, config, or the default location
fn open_repository(options: &CommandLineOptions, config: &Config) -> Result<ProjectRepository> {
    let db = match options.database.as_ref().or(config.database_path.as_ref()) {
        Some(path) => DatabaseConnection::new(path)?,
        None => DatabaseConnection::new_default()?,
    };
    Ok(ProjectRepository::new(db))
}

fn run_command(options: CommandLineOptions, config: Config, localizer: Localizer) -> Result<()> {
    match &options.command {
        Commands::List => {
            let repo = open_repository(&options, &config)?;

            // Storage hiccups degrade to an empty listing, matching the
            // interface contract: the list page never hard-fails.
            let projects = match repo.get_all_projects() {
                Ok(projects) => projects,
                Err(err) => {
                    error!("{}", err);
                    Vec::new()
                }
            };

            if projects.is_empty() {
                println!("{}", localizer.translate("project_list_empty"));
            } else {
                for project in &projects {
                    println!(
                        "{:>6}  {}  {}  ({})",
                        project.id, project.name, project.location, project.created_at
                    );
                }
            }
        }

        Commands::Add { name, location } => {
            let repo = open_repository(&options, &config)?;

            match repo.create_project(&ProjectDraft::new(name.clone(), location.clone())) {
                Ok(id) => {
                    info!("Project created with id {}", id);
                    println!("{} (id {})", localizer.translate("project_added"), id);
                }
                Err(StoreError::InvalidInput(err)) => print_validation_error(&localizer, err),
                Err(err) => error!("{}", err),
            }
        }

        Commands::Show { id } => {
            let repo = open_repository(&options, &config)?;

            match repo.get_project(*id) {
                Ok(project) => {
                    for (label, value) in export::project_fields(&project, &localizer) {
                        println!("{}: {}", label, value);
                    }
                }
                Err(StoreError::NotFound(id)) => {
                    println!("{} ({})", localizer.translate("project_not_found"), id);
                }
                Err(err) => error!("{}", err),
            }
        }

        Commands::Update { id, name, location } => {
            let repo = open_repository(&options, &config)?;

            match repo.update_project(*id, &ProjectDraft::new(name.clone(), location.clone())) {
                Ok(()) => println!("{}", localizer.translate("project_updated")),
                Err(StoreError::NotFound(id)) => {
                    println!("{} ({})", localizer.translate("project_not_found"), id);
                }
                Err(StoreError::InvalidInput(err)) => print_validation_error(&localizer, err),
                Err(err) => error!("{}", err),
            }
        }

        Commands::Delete { id } => {
            let repo = open_repository(&options, &config)?;

            match repo.delete_project(*id) {
                Ok(()) => println!("{}", localizer.translate("project_deleted")),
                Err(StoreError::NotFound(id)) => {
                    println!("{} ({})", localizer.translate("project_not_found"), id);
                }
                Err(err) => error!("{}", err),
            }
        }

        Commands::Export { id, output } => {
            let repo = open_repository(&options, &config)?;

            match repo.get_project(*id) {
                Ok(project) => {
                    let path = output
                        .clone()
                        .unwrap_or_else(|| PathBuf::from(format!("project-{}.txt", project.id)));

                    // Export failures are reported but never touch the store.
                    match export::write_summary(&path, &project, &localizer) {
                        Ok(()) => {
                            println!(
                                "{}: {}",
                                localizer.translate("export_written"),
                                path.display()
                            );
                        }
                        Err(err) => error!("{}", err),
                    }
                }
                Err(StoreError::NotFound(id)) => {
                    println!("{} ({})", localizer.translate("project_not_found"), id);
                }
                Err(err) => error!("{}", err),
            }
        }

        Commands::Language { code } => {
            language_utils::validate_language_code(code)?;

            let mut config = config;
            config.app_language = language_utils::normalize_language_code(code);
            config.save(&options.config_path)?;

            let localizer = Localizer::new(&config.languages_dir, &config.app_language);
            info!(
                "Display language set to '{}' (rtl: {})",
                localizer.current_language(),
                localizer.is_rtl()
            );
            println!("{}", localizer.translate("language_changed"));
        }
    }

    Ok(())
}

/// Print a correctable input error in the user's language
fn print_validation_error(localizer: &Localizer, err: crate::errors::ValidationError) {
    let key = match err {
        crate::errors::ValidationError::EmptyName => "error_name_required",
        crate::errors::ValidationError::EmptyLocation => "error_location_required",
    };
    println!("{}", localizer.translate(key));
}
