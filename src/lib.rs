pub mod classifier;
pub mod cli;
pub mod comments;
pub mod config;
pub mod errors;
pub mod keywords;
pub mod lexicon;
pub mod logging;
pub mod models;
pub mod narrative;
pub mod pipeline;
pub mod remote;
pub mod scorer;
pub mod store;
pub mod text;
pub mod visual;
pub mod weekly;

#[cfg(test)]
mod errors_tests;
#[cfg(test)]
mod visual_tests;

pub use config::AppConfig;
pub use errors::*;
pub use models::Message;
pub use models::MoodLabel;
pub use models::Report;
pub use pipeline::ReportGenerator;
pub use visual::DecorativeEmotion;
pub use visual::VisualIdentity;
