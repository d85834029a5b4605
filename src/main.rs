//! simd4 - Times the SIMD kernel against plain scalar math

use simd4::config::AppConfig;
use simd4::throughput;

fn main() {
    // Logging is configured from the loaded config, so a load failure is
    // reported once the logger exists.
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    log::info!(
        "Starting simd4: {} suites, {} iterations each",
        config.throughput.suites.len(),
        config.throughput.iterations
    );

    let reports = throughput::run_all(&config.throughput);
    print!("{}", throughput::format_table(&reports));
}
