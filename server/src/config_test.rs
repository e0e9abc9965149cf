use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let owned: Vec<(String, String)> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| owned.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_reads_host_and_port() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_lookup_blank_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", ""), ("CORS_ORIGIN", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.cors_origin, None);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() });
}

#[test]
fn from_lookup_rejects_bad_host() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("HOST", "not-an-ip")])).is_err());
}

#[test]
fn from_lookup_trims_cors_origin_slash() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("CORS_ORIGIN", "https://portal.example.com/")])).unwrap();
    assert_eq!(cfg.cors_origin.as_deref(), Some("https://portal.example.com"));
}
