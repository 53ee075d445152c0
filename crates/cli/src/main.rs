use std::io::Write;

fn main() -> anyhow::Result<()> {
    cartkit_observability::init();

    let config = cartkit_cli::config::Config::from_env()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cartkit_cli::run(&config, &mut out)?;
    out.flush()?;

    Ok(())
}
