use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.assets_dir.ends_with("assets"));
    assert_eq!(cfg.mailer, None);
    assert_eq!(cfg.contact_limits.max_requests, DEFAULT_CONTACT_RATE_LIMIT);
    assert_eq!(cfg.contact_limits.window, Duration::from_secs(DEFAULT_CONTACT_RATE_WINDOW_SECS));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("ASSETS_DIR", "/srv/site"),
        ("RESEND_API_KEY", "re_test"),
        ("CONTACT_FROM", "site@example.com"),
        ("CONTACT_TO", "me@example.com"),
        ("CONTACT_RATE_LIMIT", "2"),
        ("CONTACT_RATE_WINDOW_SECS", "30"),
    ]))
    .unwrap();

    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/site"));
    assert_eq!(
        cfg.mailer,
        Some(MailerConfig {
            api_key: "re_test".to_owned(),
            from: "site@example.com".to_owned(),
            to: "me@example.com".to_owned(),
        })
    );
    assert_eq!(cfg.contact_limits, ContactLimits { max_requests: 2, window: Duration::from_secs(30) });
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() });
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn from_lookup_blank_values_use_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("CONTACT_TO", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.mailer, None);
}

#[test]
fn from_lookup_partial_mailer_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("RESEND_API_KEY", "re_test"), ("CONTACT_TO", "me@x.com")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::PartialMailer { missing: "CONTACT_FROM" });

    let err = ServerConfig::from_lookup(lookup(&[("CONTACT_FROM", "a@x.com"), ("CONTACT_TO", "b@x.com")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::PartialMailer { missing: "RESEND_API_KEY" });
}

#[test]
fn missing_assets_reports_absent_cv() {
    let dir = tempfile::tempdir().unwrap();
    let assets = dir.path().to_str().unwrap().to_owned();
    let cfg = ServerConfig::from_lookup(lookup(&[("ASSETS_DIR", assets.as_str())])).unwrap();
    assert_eq!(cfg.missing_assets(), vec![dir.path().join("cv/resume.pdf")]);

    std::fs::create_dir_all(dir.path().join("cv")).unwrap();
    std::fs::write(dir.path().join("cv/resume.pdf"), b"%PDF-1.4").unwrap();
    assert!(cfg.missing_assets().is_empty());
}

#[test]
fn bundled_assets_include_cv() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert!(cfg.missing_assets().is_empty());
}
