use clap::Parser;
use patient_finder_lib::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    patient_finder_lib::init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {error}");
        }
        std::process::exit(1);
    }

    patient_finder_lib::run(config).await
}
