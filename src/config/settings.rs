use crate::domain::model::SaltRate;
use crate::domain::ports::SaltRateProvider;
use crate::utils::error::{LevainError, Result};
use crate::utils::validation::validate_path;
use ini::Ini;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.ini";
pub const FORMULAS_SECTION: &str = "formules";
pub const SALT_RATE_KEY: &str = "taux_sel";

/// Settings read once at start-up from the INI configuration file.
///
/// The salt rate is checked while parsing, so a `Settings` value always
/// carries a rate in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Settings {
    salt_rate: SaltRate,
}

impl Settings {
    /// 從設定檔載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        validate_path("config", &path_str)?;

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LevainError::ConfigNotFound {
                path: path_str.clone(),
            },
            _ => LevainError::IoError(e),
        })?;

        let settings = Self::from_ini_str(&content)?;
        tracing::info!(
            path = %path_str,
            salt_rate = settings.salt_rate.value(),
            "configuration loaded"
        );
        Ok(settings)
    }

    /// Parses `[formules]` / `taux_sel = 0.02`. Other sections and keys are
    /// ignored; `key: value` and `;` or `#` comments are plain INI.
    pub fn from_ini_str(content: &str) -> Result<Self> {
        let ini = Ini::load_from_str(content).map_err(|e| LevainError::ConfigError {
            message: format!("INI parsing error: {}", e),
        })?;

        let section =
            ini.section(Some(FORMULAS_SECTION))
                .ok_or_else(|| LevainError::MissingConfigError {
                    field: format!("[{}]", FORMULAS_SECTION),
                })?;

        let salt_rate = match section.get(SALT_RATE_KEY) {
            None => SaltRate::default(),
            Some(raw) => {
                let rate =
                    raw.trim()
                        .parse::<f64>()
                        .map_err(|_| LevainError::InvalidConfigValueError {
                            field: format!("{}.{}", FORMULAS_SECTION, SALT_RATE_KEY),
                            value: raw.to_string(),
                            reason: "Salt rate must be a number".to_string(),
                        })?;
                SaltRate::new(rate)?
            }
        };

        Ok(Self { salt_rate })
    }

    /// `config.ini` next to the running executable, or in the working
    /// directory when the executable path is unknown.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }
}

impl SaltRateProvider for Settings {
    fn salt_rate(&self) -> SaltRate {
        self.salt_rate
    }
}
