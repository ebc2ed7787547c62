use snake_agent::config::config;
use snake_agent::interactor;

#[tokio::main]
async fn main() {
    init_logging();
    interactor::run().await;
}

fn init_logging() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {} {} {}",
                chrono::Local::now().format("%H:%M:%S%.6f"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(config().log_level.parse().unwrap_or(log::LevelFilter::Info))
        .chain(std::io::stdout())
        .apply()
        .expect("logging initialization failed");
}
