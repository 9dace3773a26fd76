use clap::Parser;

mod error;
mod model;
mod render;
mod runtime;
mod table;

use runtime::CliRuntime;

#[derive(Parser)]
#[command(name = "docker-graph")]
#[command(about = "Render container images and containers as a DOT graph", long_about = None)]
struct Cli {
    /// Container CLI to invoke for the image, history, and process tables.
    #[arg(long, default_value = "docker")]
    runtime: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1) Collect the three tables into the model.
    let runtime = CliRuntime::new(cli.runtime);
    let graph = model::build_image_graph(&runtime)?;

    // 2) Print the DOT document, ready for piping into `dot`.
    print!("{}", render::render_dot(&graph));

    Ok(())
}
