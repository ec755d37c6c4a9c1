pub mod app_config;
pub mod attributes;
pub mod config;
pub mod place;
pub mod ranking;

pub use app_config::{AppConfig, Environment, SourceKind};
pub use attributes::{category_attributes, score_tier, CategoryAttributes, Color, Icon, ScoreTier};
pub use config::{load_app_config, load_app_config_from_env};
pub use place::{OpenStatus, Place};
pub use ranking::{
    available_categories, card_tier, category_filter, hero_place, secondary_places, CardTier,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
