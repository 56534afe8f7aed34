use pasture::{animation::LOOP_BOUND, app::PastureApp, config::AppConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    log::info!(
        "starting pasture: tick {:?}, loop bound {}, stars {:?}",
        config.tick,
        LOOP_BOUND,
        config.stars
    );

    let app = PastureApp::new(config).inspect_err(|err| log::error!("{err:#}"))?;
    app.run()
}
