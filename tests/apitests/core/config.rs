use log::LevelFilter;
use contacts::{
    config::Config,
    configuration,
    ApiClient,
};

/**
# default_configuration::Builder
 - new
 - with_base_url
 - with_api_key
 - with_logger
 - load
 - build

# trait Config
 - base_url
 - api_key
 - log_level
 - log_file
 */
#[test]
fn test_build_cfg() {
    let cfg: Box<dyn Config> = configuration::Builder::new()
        .with_base_url("http://127.0.0.1:3000/")
        .with_api_key("abc")
        .with_logger(LevelFilter::Debug, Some("contacts.log"))
        .build()
        .unwrap();

    assert_eq!(cfg.base_url(), "http://127.0.0.1:3000");
    assert_eq!(cfg.api_key(), Some("abc"));
    assert_eq!(cfg.log_level(), LevelFilter::Debug);
    assert_eq!(cfg.log_file(), Some("contacts.log"));

    #[cfg(feature = "inspect")]
    cfg.dump();

    let client = ApiClient::from_config(&*cfg).unwrap();
    assert_eq!(client.base_url().as_str(), "http://127.0.0.1:3000/");
    assert_eq!(client.api_key(), Some("abc"));
}

#[test]
fn test_bad_log_level() {
    let path = std::env::temp_dir().join("rcontacts-apitests-level.conf");
    std::fs::write(&path, r#"{"apiBaseUrl": "http://localhost", "logger": {"level": "loud"}}"#).unwrap();

    let result = configuration::Builder::new()
        .load(path.to_str().unwrap())
        .unwrap()
        .build();
    assert!(result.is_err());

    _ = std::fs::remove_file(&path);
}
