use crate::Config;
use figment::{
    Error, Metadata, Profile, Provider,
    providers::{Env, Format, Toml},
    value::{Dict, Map, Value},
};
use std::path::{Path, PathBuf};

/// A convenience provider to retrieve a toml file.
///
/// The file lays its profiles out as `[profile.<name>]` tables; they are lifted into figment
/// profiles of the same name. This will return an error if the env var is set but the file
/// does not exist.
pub(crate) struct TomlFileProvider {
    pub env_var: Option<&'static str>,
    pub default: PathBuf,
}

impl TomlFileProvider {
    pub(crate) fn new(env_var: Option<&'static str>, default: impl Into<PathBuf>) -> Self {
        Self { env_var, default: default.into() }
    }

    fn env_val(&self) -> Option<String> {
        self.env_var.and_then(Env::var)
    }

    /// The file to read, made absolute so that `Toml::file` does not search parent directories.
    fn file(&self) -> PathBuf {
        let file = self.env_val().map(PathBuf::from).unwrap_or_else(|| self.default.clone());
        std::path::absolute(&file).unwrap_or(file)
    }

    fn is_missing(&self) -> bool {
        self.env_val().is_some_and(|file| !Path::new(&file).exists())
    }

    fn read(&self) -> Result<Map<Profile, Dict>, Error> {
        use serde::de::Error as _;
        if let Some(file) = self.env_val()
            && !Path::new(&file).exists()
        {
            return Err(Error::custom(format!(
                "Config file `{file}` set in env var `{}` does not exist",
                self.env_var.unwrap_or_default()
            )));
        }

        let mut profiles = Map::new();
        for (section, dict) in Toml::file(self.file()).nested().data()? {
            if section != Config::PROFILE_SECTION {
                return Err(Error::custom(format!(
                    "unknown section `[{section}]` in {}, expected `[{}.<name>]`",
                    Config::FILE_NAME,
                    Config::PROFILE_SECTION
                )));
            }
            for (name, value) in dict {
                let Value::Dict(_, profile) = value else {
                    return Err(Error::custom(format!(
                        "`{}.{name}` must be a table",
                        Config::PROFILE_SECTION
                    )));
                };
                profiles.insert(Profile::new(&name), profile);
            }
        }
        Ok(profiles)
    }
}

impl Provider for TomlFileProvider {
    fn metadata(&self) -> Metadata {
        if self.is_missing() {
            Metadata::named("TOML file provider")
        } else {
            Toml::file(self.file()).nested().metadata()
        }
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        self.read()
    }
}
