use std::fs;
use std::str::FromStr;
use serde::Deserialize;
use log::LevelFilter;
use url::Url;

use crate::{
    Error,
    core::{
        config::Config,
        Result
    },
};

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : String,
    #[serde(rename = "logFile")]
    file    : Option<String>,
}

#[derive(Clone, Default, Deserialize)]
struct Configuration {
    #[serde(rename = "apiBaseUrl")]
    base_url    : Option<String>,
    #[serde(rename = "apiKey")]
    api_key     : Option<String>,

    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,

    #[serde(skip)]
    deserde_level: Option<LevelFilter>,
}

pub struct Builder<'a> {
    base_url    : Option<&'a str>,
    api_key     : Option<&'a str>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<Configuration>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            base_url    : None,
            api_key     : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_base_url(&mut self, url: &'a str) -> &mut Self {
        self.base_url = Some(url);
        self
    }

    pub fn with_api_key(&mut self, key: &'a str) -> &mut Self {
        self.api_key = Some(key);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<Configuration>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let mut cfg = b.cfg.clone().unwrap_or_default();

        if let Some(url) = b.base_url {
            cfg.base_url = Some(url.to_string());
        }
        if let Some(key) = b.api_key {
            cfg.api_key = Some(key.to_string());
        }

        let Some(url) = cfg.base_url.as_ref() else {
            return Err(Error::Argument("Missing api base url".into()));
        };
        Url::parse(url).map_err(|e| {
            Error::Argument(format!("Invalid api base url {url}: {e}"))
        })?;
        cfg.base_url = Some(url.trim_end_matches('/').to_string());

        cfg.api_key = cfg.api_key
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if let Some(level) = b.log_level {
            cfg.logger = Some(LogCfg {
                level: level.to_string(),
                file: b.log_file.map(|v| v.to_string()),
            });
        }

        cfg.deserde_level = match cfg.logger.as_ref() {
            Some(logger) => Some(LevelFilter::from_str(&logger.level).map_err(|_| {
                Error::Argument(format!("Invalid log level {}", logger.level))
            })?),
            None => None,
        };

        Ok(cfg)
    }
}

impl Config for Configuration {
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or_default()
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn log_level(&self) -> LevelFilter {
        self.deserde_level.unwrap_or(LevelFilter::Info)
    }

    fn log_file(&self) -> Option<&str> {
        self.logger.as_ref().and_then(|v| v.file.as_deref())
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

#[cfg(feature = "inspect")]
impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "apiBaseUrl:{},", self.base_url())?;
        write!(f, "apiKey:{},", self.api_key.as_ref().map_or("N/A", |_| "******"))?;
        write!(f, "logLevel:{},", self.log_level())?;
        write!(f, "logFile:{}", self.log_file().unwrap_or("N/A"))
    }
}
