use crate::cli::commands::{Cli, Command};
use crate::cli::rt;
use anyhow::Context;
use clap::Parser;
use courses_core::client::{CourseApi, CourseClient};
use courses_core::config::reader::ConfigReader;
use courses_core::config::ClientConfig;
use courses_core::course::CourseDraft;
use courses_core::page::{render_listing, INDEX_HTML};
use courses_core::runtime::TargetRuntime;

pub async fn fork_run() -> anyhow::Result<()> {
    logger_init();
    let cli = Cli::parse();
    let runtime = rt::init();

    run(cli, runtime).await
}

async fn run(cli: Cli, runtime: TargetRuntime) -> anyhow::Result<()> {
    match cli.command {
        Command::List { config } => {
            let client = client(&runtime, config).await?;
            let courses = client.list_courses().await?;
            if courses.is_empty() {
                log::info!("No courses found");
            } else {
                display(render_listing(&courses));
            }
        }
        Command::Add {
            name,
            description,
            config,
        } => {
            let client = client(&runtime, config).await?;
            let draft = CourseDraft::new(name, description)?;
            let courses = client.add_course(draft).await?;
            log::info!("Course added, {} courses in total", courses.len());
        }
        Command::Delete { id, config } => {
            let client = client(&runtime, config).await?;
            let courses = client.delete_course(&id).await?;
            log::info!("Course {} deleted, {} courses left", id, courses.len());
        }
        Command::Page { out } => {
            runtime.file.write(&out, INDEX_HTML.as_bytes()).await?;
            log::info!("Course page written to {}", out);
        }
        Command::Check { config_path } => {
            let config_reader = ConfigReader::init(runtime);
            config_reader
                .read(&config_path)
                .await
                .with_context(|| format!("Invalid config: {}", config_path))?;
            log::info!("Config is valid");
        }
    }
    Ok(())
}

/// Client for the given config, or for the default local API when none is
/// passed.
async fn client(runtime: &TargetRuntime, config: Option<String>) -> anyhow::Result<CourseClient> {
    let config = match config {
        Some(path) => ConfigReader::init(runtime.clone()).read(path).await?,
        None => ClientConfig::default(),
    };
    let client = CourseClient::new(runtime.http.clone(), config);
    log::debug!("Course API at {}", client.config().api_url);
    Ok(client)
}

fn display<T: AsRef<str>>(content: T) {
    println!("{}", content.as_ref());
}

const LOG_LEVEL_VAR: &str = "COURSES_LOG_LEVEL";

/// Log filter read from `COURSES_LOG_LEVEL`, `info` when unset.
fn log_env() -> env_logger::Env<'static> {
    env_logger::Env::new().filter_or(LOG_LEVEL_VAR, "info")
}

fn logger_init() {
    env_logger::Builder::from_env(log_env()).init();
}
