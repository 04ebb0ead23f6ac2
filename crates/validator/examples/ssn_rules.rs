//! Loads rule configuration from JSON and runs the `perform` step on a few
//! field values.
//!
//! Run with `RUST_LOG=debug` to see pattern resolution.

use idcheck_validator::config::RulesConfig;
use idcheck_validator::registry::SSN_RULE;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = r#"{ "ssn": { "format1": true, "format3": true, "with": "/^xxx-xx-\\d{4}$/i" } }"#;

    let registry = match RulesConfig::from_json_str(config).and_then(RulesConfig::into_registry) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("✗ configuration rejected: {e}");
            std::process::exit(1);
        }
    };

    for value in [
        Some("123-45-6789"),
        Some("123 45 6789"),
        Some("XXX-XX-6789"),
        Some("123456789"),
        Some(""),
        None,
    ] {
        match registry.perform(SSN_RULE, value) {
            Ok(()) => println!("✓ {value:?} accepted"),
            Err(e) => println!("✗ {value:?} rejected: {e}"),
        }
    }
}
