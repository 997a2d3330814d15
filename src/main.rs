use anyhow::Result;

use reference_count_sample::config::DEFAULT_LOG_FILTER;

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .try_init()?;

    // Run the sample calls; results stay in-process.
    let results = reference_count_sample::run();
    log::info!("Completed 5 calls: {:?}", results);

    Ok(())
}
