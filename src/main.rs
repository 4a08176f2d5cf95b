use clap::Parser;
use moodlens::cli::*;
use moodlens::AppConfig;
use moodlens::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    if cli.verbose {
        moodlens::logging::init_logging_with_level(&config.logging, "debug")?;
    } else {
        moodlens::logging::init_logging_with_config(&config.logging)?;
    }
    info!("Configuration loaded successfully");

    let result = match cli.command {
        Commands::Generate {
            messages,
            save,
            remote,
            seed,
        } => handle_generate_command(&config, &messages, save, remote, seed).await,
        Commands::List { limit } => handle_list_command(&config, limit),
        Commands::Show {
            id,
            json,
            character,
            nickname,
        } => handle_show_command(&config, &id, json, character, nickname).await,
        Commands::Delete { id } => handle_delete_command(&config, &id),
        Commands::Visual {
            stable_id,
            emotion,
            mood,
        } => handle_visual_command(&stable_id, emotion.into(), mood.map(Into::into)),
        Commands::Weekly {
            messages,
            week_start,
            today,
        } => handle_weekly_command(&messages, &week_start, today.as_deref()),
        Commands::Config => handle_config_command(&config),
    };

    if let Err(e) = &result {
        print_error(&e.to_string());
    }
    result
}
