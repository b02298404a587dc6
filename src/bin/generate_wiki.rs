use anyhow::Result;
use clap::Parser;

use github_docs::cli::{GeneratorArgs, init_tracing};
use github_docs::services::WikiGenerator;

#[derive(Parser)]
#[command(name = "generate-wiki")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Render Milestones.md, one Issues_<label>.md per label and PRs_Merged.md into the wiki directory"
)]
struct Cli {
    #[command(flatten)]
    inputs: GeneratorArgs,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let (config, snapshot) = cli.inputs.load_inputs()?;

    let written = WikiGenerator::new(&config).write(&snapshot)?;
    for path in written {
        println!("{}", path.display());
    }

    Ok(())
}
