use log::LevelFilter;

pub trait Config: Send + Sync {
    /// Backend base URL without a trailing slash.
    fn base_url(&self) -> &str;
    fn api_key(&self) -> Option<&str>;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
