//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

use crate::models::MoodLabel;
use crate::visual::DecorativeEmotion;

#[derive(Parser)]
#[command(name = "moodlens")]
#[command(about = "Emotion scoring and psychological reports for chat histories")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a TOML config file (default: config.toml, then config.example.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a report from a JSON message list
    Generate {
        /// JSON file holding an array of messages
        messages: PathBuf,
        /// Append the report to the saved list
        #[arg(short, long)]
        save: bool,
        /// Try the remote report service first
        #[arg(long)]
        remote: bool,
        /// Seed narrative selection for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List saved reports
    List {
        /// Maximum number of reports to show, newest first
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show a saved report
    Show {
        /// Report id
        id: String,
        /// Print raw JSON instead of the summary
        #[arg(long)]
        json: bool,
        /// Character commenting on the activities and soundtrack
        /// (default: the character the conversation was with)
        #[arg(long)]
        character: Option<String>,
        /// Nickname used in character comments
        #[arg(short, long)]
        nickname: Option<String>,
    },
    /// Delete a saved report and renumber episodes
    Delete {
        /// Report id
        id: String,
    },
    /// Print the gradient and tag for a stable identifier
    Visual {
        /// Report id, episode number or timestamp
        stable_id: String,
        /// Decorative emotion
        #[arg(short, long, value_enum, default_value = "calm")]
        emotion: EmotionArg,
        /// Dominant mood; its palette wins over the emotion palette
        #[arg(short, long, value_enum)]
        mood: Option<MoodArg>,
    },
    /// Day-by-day mood points for one week of messages
    Weekly {
        /// JSON file holding an array of messages
        messages: PathBuf,
        /// Monday the week starts on (YYYY-MM-DD)
        #[arg(long)]
        week_start: String,
        /// Last day to include (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<String>,
    },
    /// Show current configuration
    Config,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EmotionArg {
    Joy,
    Sad,
    Calm,
    Anger,
    Tired,
    Lonely,
}

impl From<EmotionArg> for DecorativeEmotion {
    fn from(value: EmotionArg) -> Self {
        match value {
            EmotionArg::Joy => Self::Joy,
            EmotionArg::Sad => Self::Sad,
            EmotionArg::Calm => Self::Calm,
            EmotionArg::Anger => Self::Anger,
            EmotionArg::Tired => Self::Tired,
            EmotionArg::Lonely => Self::Lonely,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MoodArg {
    Romance,
    Comfort,
    Conflict,
    Neutral,
}

impl From<MoodArg> for MoodLabel {
    fn from(value: MoodArg) -> Self {
        match value {
            MoodArg::Romance => Self::Romance,
            MoodArg::Comfort => Self::Comfort,
            MoodArg::Conflict => Self::Conflict,
            MoodArg::Neutral => Self::Neutral,
        }
    }
}
