#![allow(dead_code)]

pub mod mock_sheet;

use std::sync::Once;

use stockroom::config::EndpointConfig;
use stockroom::{Config, FeatureFlags};

static INIT: Once = Once::new();

/// Route tracing output through the test harness when `RUST_LOG` is set.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn test_config(url: &str, features: FeatureFlags) -> Config {
    Config {
        endpoint: EndpointConfig {
            url: url.to_string(),
            connect_timeout_seconds: 1,
        },
        features,
    }
}
