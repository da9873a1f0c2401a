pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use crate::domain::model::SizeHint;
    use crate::utils::error::{LogoError, Result};
    use crate::utils::validation::{validate_range, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "ticker-logo")]
    #[command(about = "Resolve company logos for ticker symbols")]
    pub struct CliConfig {
        /// Ticker symbols to resolve; an empty string renders the neutral placeholder
        pub tickers: Vec<String>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(long, value_enum, default_value = "md")]
        pub size: SizeHint,

        /// Override loader.timeout_seconds from the config file
        #[arg(long)]
        pub timeout_seconds: Option<u64>,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        /// Print candidate URLs without loading anything
        #[arg(long)]
        pub dry_run: bool,
    }

    impl CliConfig {
        /// File configuration with command-line overrides applied.
        pub fn load_toml(&self) -> Result<TomlConfig> {
            let mut config = match &self.config {
                Some(path) => TomlConfig::from_file(path)?,
                None => TomlConfig::default(),
            };

            if let Some(timeout) = self.timeout_seconds {
                config.loader.timeout_seconds = Some(timeout);
            }

            config.validate()?;
            Ok(config)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if self.tickers.is_empty() {
                return Err(LogoError::MissingConfigError {
                    field: "tickers".to_string(),
                });
            }

            if let Some(timeout) = self.timeout_seconds {
                validate_range("timeout_seconds", timeout, 1, 120)?;
            }

            Ok(())
        }
    }

}
