use figment::{
    Error, Metadata, Profile, Provider,
    providers::{Env, Format, Toml},
    value::{Dict, Map},
};
use std::path::{Path, PathBuf};

/// A convenience provider to retrieve a toml file.
///
/// A missing file at the default location is fine, but a file that was asked for explicitly,
/// either through `env_var` or `--config`, must exist.
pub(crate) struct TomlFileProvider {
    pub env_var: Option<&'static str>,
    pub explicit: Option<PathBuf>,
    pub default: PathBuf,
}

impl TomlFileProvider {
    pub(crate) fn new(env_var: Option<&'static str>, default: impl Into<PathBuf>) -> Self {
        Self { env_var, explicit: None, default: default.into() }
    }

    /// Reads the given file instead of the env var or default location.
    pub(crate) fn with_explicit(mut self, explicit: Option<PathBuf>) -> Self {
        self.explicit = explicit;
        self
    }

    fn requested(&self) -> Option<PathBuf> {
        self.explicit.clone().or_else(|| self.env_var.and_then(Env::var).map(PathBuf::from))
    }

    fn file(&self) -> PathBuf {
        self.requested().unwrap_or_else(|| self.default.clone())
    }

    fn is_missing(&self) -> bool {
        self.requested().is_some_and(|file| !Path::new(&file).exists())
    }
}

impl Provider for TomlFileProvider {
    fn metadata(&self) -> Metadata {
        if self.is_missing() {
            Metadata::named("TOML file provider")
        } else {
            Toml::file(self.file()).metadata()
        }
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        use serde::de::Error as _;
        if self.is_missing() {
            let source = match (&self.explicit, self.env_var) {
                (None, Some(var)) => format!("env var `{var}`"),
                _ => "--config".to_string(),
            };
            return Err(Error::custom(format!(
                "Config file `{}` set in {source} does not exist",
                self.file().display()
            )));
        }
        Toml::file(self.file()).data()
    }
}
