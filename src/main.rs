use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stderr keeps log lines out of the interactive prompt output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    teller::app::run(std::env::args())?;
    Ok(())
}
