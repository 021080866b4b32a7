use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = vault_archiver::cli::parse();
    app::run(args)
}
