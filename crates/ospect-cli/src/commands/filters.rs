//! Filters command - list the registered filter names.

use clap::Args;

/// Arguments for the filters command.
#[derive(Args)]
pub struct FiltersArgs {}

pub fn run(_args: FiltersArgs) -> anyhow::Result<()> {
    for name in ospect_core::registry::names() {
        println!("{name}");
    }
    Ok(())
}
