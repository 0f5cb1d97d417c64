use anyhow::Context;
use dbenv_setup::domain::setup::models::config::SetupConfig;
use dbenv_setup::domain::setup::service::Service;
use dbenv_setup::inbound::console::ConsolePrompter;
use dbenv_setup::outbound::dotenv::DotenvFile;
use dbenv_setup::outbound::environment::ProcessEnvironment;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never land between a prompt and its answer.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = SetupConfig::default();
    let repo = DotenvFile::new(&config.env_path);
    let env_path = repo.path().to_path_buf();

    println!("\t\t\tHello and welcome\n");

    let mut service = Service::new(ConsolePrompter::stdio(), repo, ProcessEnvironment, config);
    let params = service
        .run()
        .context("database setup failed")?;

    println!(
        "Connection settings for database {} appended to {}",
        params.get_dbname(),
        env_path.display()
    );
    Ok(())
}
