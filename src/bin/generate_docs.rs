use anyhow::Result;
use clap::Parser;

use github_docs::cli::{GeneratorArgs, init_tracing};
use github_docs::services::DocGenerator;

#[derive(Parser)]
#[command(name = "generate-docs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Render milestones, label-grouped issues, changelog and release notes into <output_dir>/index.md"
)]
struct Cli {
    #[command(flatten)]
    inputs: GeneratorArgs,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let (config, snapshot) = cli.inputs.load_inputs()?;

    let path = DocGenerator::new(&config).write(&snapshot)?;
    println!("{}", path.display());

    Ok(())
}
