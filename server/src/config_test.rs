use super::*;
use std::sync::Mutex;

/// Serializes tests that mutate the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const KEYS: [&str; 9] = [
    "PORT",
    "SITE_DIR",
    "CONTACT_DELIVERY_DELAY_MS",
    "RESEND_API_KEY",
    "CONTACT_TO_EMAIL",
    "CONTACT_FROM_EMAIL",
    "CONTACT_RATE_LIMIT",
    "CONTACT_GLOBAL_RATE_LIMIT",
    "CONTACT_RATE_WINDOW_SECS",
];

/// # Safety
/// Callers hold `ENV_LOCK`.
unsafe fn clear_env() {
    for key in KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn from_env_defaults_to_simulated_delivery() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_dir, None);
    assert_eq!(
        cfg.delivery,
        DeliveryConfig::Simulated { delay: Duration::from_millis(DEFAULT_DELIVERY_DELAY_MS) }
    );
    assert_eq!(cfg.rate_limit, RateLimitConfig::default());
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("SITE_DIR", "/srv/site");
        std::env::set_var("CONTACT_DELIVERY_DELAY_MS", "25");
        std::env::set_var("CONTACT_RATE_LIMIT", "2");
        std::env::set_var("CONTACT_GLOBAL_RATE_LIMIT", "9");
        std::env::set_var("CONTACT_RATE_WINDOW_SECS", "30");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_dir, Some(PathBuf::from("/srv/site")));
    assert_eq!(cfg.delivery, DeliveryConfig::Simulated { delay: Duration::from_millis(25) });
    assert_eq!(
        cfg.rate_limit,
        RateLimitConfig { per_client_limit: 2, global_limit: 9, window: Duration::from_secs(30) }
    );

    unsafe { clear_env() };
}

#[test]
fn from_env_invalid_port_errors() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));

    unsafe { clear_env() };
}

#[test]
fn from_env_unparseable_numbers_fall_back() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("CONTACT_RATE_LIMIT", "lots");
        std::env::set_var("CONTACT_DELIVERY_DELAY_MS", "-1");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.rate_limit.per_client_limit, DEFAULT_CONTACT_RATE_LIMIT);
    assert_eq!(
        cfg.delivery,
        DeliveryConfig::Simulated { delay: Duration::from_millis(DEFAULT_DELIVERY_DELAY_MS) }
    );

    unsafe { clear_env() };
}

#[test]
fn from_env_resend_requires_recipient() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("RESEND_API_KEY", "re_test");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::IncompleteResend { var: "CONTACT_TO_EMAIL" });
    assert!(err.to_string().contains("CONTACT_TO_EMAIL"));

    unsafe { clear_env() };
}

#[test]
fn from_env_resend_with_default_sender() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("RESEND_API_KEY", "re_test");
        std::env::set_var("CONTACT_TO_EMAIL", "me@example.com");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(
        cfg.delivery,
        DeliveryConfig::Resend {
            api_key: "re_test".to_owned(),
            from: DEFAULT_CONTACT_FROM.to_owned(),
            to: "me@example.com".to_owned(),
        }
    );

    unsafe { clear_env() };
}

#[test]
fn blank_values_are_treated_as_unset() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("PORT", "  ");
        std::env::set_var("RESEND_API_KEY", "");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(matches!(cfg.delivery, DeliveryConfig::Simulated { .. }));

    unsafe { clear_env() };
}
