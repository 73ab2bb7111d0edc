#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

mod cli;
mod process;

fn main() -> anyhow::Result<()> {
    let cfg = cli::handle_cli()?;
    debug!(
        "Options read in - processing {} input file(s) in {} mode",
        cfg.files().len(),
        if cfg.paired() { "paired" } else { "single" }
    );
    process::process(&cfg)?;
    info!("Finished");
    Ok(())
}
