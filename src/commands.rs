use crate::cli::{Command, ConfigArgs, search_options};
use bangumi_client::bangumi::{
    BangumiClient, create_http_client_with_timeout, current_season_window_start,
};
use bangumi_client::config::Config;
use bangumi_client::error::AppError;
use tracing::info;

/// Runs a subcommand. API commands print the JSON response to stdout.
pub async fn handle_command(command: &Command, config: &Config) -> Result<(), AppError> {
    let value = match command {
        Command::Season => return handle_season_command(),
        Command::Config(config_args) => return handle_config_command(config_args).await,
        Command::Calendar => client(config)?.get_calendar().await?,
        Command::Subject { id } => client(config)?.get_subject(*id).await?,
        Command::Comments { id, page } => {
            client(config)?.get_comments(*id, (*page).into()).await?
        }
        Command::Search {
            keyword,
            sort,
            types,
            page,
        } => {
            let options = search_options(*sort, types, *page);
            client(config)?.search_subjects(keyword, &options).await?
        }
        Command::Popular { page } => client(config)?.get_popular_anime((*page).into()).await?,
        Command::TopRated { page } => {
            client(config)?.get_top_rated_anime((*page).into()).await?
        }
    };

    println!("{value:#}");
    Ok(())
}

fn client(config: &Config) -> Result<BangumiClient, AppError> {
    let http = create_http_client_with_timeout(config.http_timeout_seconds)?;
    Ok(BangumiClient::new(http))
}

/// Handles the `season` command. No network access.
pub fn handle_season_command() -> Result<(), AppError> {
    let start = current_season_window_start();
    info!("Current season window starts at {start}");
    println!("{start}");
    Ok(())
}

/// Handles the `config` command: applies updates, or lists settings.
pub async fn handle_config_command(args: &ConfigArgs) -> Result<(), AppError> {
    if args.has_updates() {
        Config::update(|config| {
            if let Some(new_log_path) = &args.new_log_file_path {
                config.log_file_path = Some(new_log_path.clone());
            } else if args.clear_log_file_path {
                config.log_file_path = None;
            }

            if let Some(timeout) = args.new_http_timeout {
                config.http_timeout_seconds = timeout;
            }
        })
        .await?;

        if args.clear_log_file_path {
            println!("Custom log file path cleared. Using default location.");
        }
        println!("Config updated successfully!");
    }

    if args.list || !args.has_updates() {
        Config::display().await?;
    }

    Ok(())
}
