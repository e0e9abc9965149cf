use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_to_same_origin() {
    let cfg = PortalConfig::from_lookup(lookup_from(&[])).unwrap();
    for service in Service::ALL {
        assert_eq!(cfg.base_url(service), "", "{service:?}");
    }
}

#[test]
fn shared_url_applies_to_every_service() {
    let cfg = PortalConfig::from_lookup(lookup_from(&[("PORTAL_API_URL", "https://api.example.com/")])).unwrap();
    for service in Service::ALL {
        assert_eq!(cfg.base_url(service), "https://api.example.com");
    }
}

#[test]
fn service_url_overrides_shared() {
    let cfg = PortalConfig::from_lookup(lookup_from(&[
        ("PORTAL_API_URL", "https://api.example.com"),
        ("PORTAL_AUTH_API_URL", "https://auth.example.com"),
        ("PORTAL_AI_API_URL", "/ai"),
    ]))
    .unwrap();
    assert_eq!(cfg.auth_url, "https://auth.example.com");
    assert_eq!(cfg.ai_url, "/ai");
    assert_eq!(cfg.quest_url, "https://api.example.com");
}

#[test]
fn blank_value_counts_as_unset() {
    let cfg = PortalConfig::from_lookup(lookup_from(&[
        ("PORTAL_API_URL", "https://api.example.com"),
        ("PORTAL_QUEST_API_URL", "   "),
    ]))
    .unwrap();
    assert_eq!(cfg.quest_url, "https://api.example.com");
}

#[test]
fn invalid_url_is_rejected() {
    let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_LISTENING_API_URL", "listening.local")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidUrl { key: "PORTAL_LISTENING_API_URL", value: "listening.local".to_owned() }
    );
}

#[test]
fn env_keys_are_distinct() {
    let mut keys: Vec<&str> = Service::ALL.iter().map(|s| s.env_key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), Service::ALL.len());
}
