use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::load_config;
use crate::core::visualizer::Visualizer;
use crate::error::Result;
use crate::graph::builder::ParseWarning;
use crate::graph::viz::{self, GraphFormat};
use crate::source::{DependencySource, FreezeFileSource};
use crate::util::{logging, output};

#[derive(Parser, Debug)]
#[command(name = "depviz")]
#[command(about = "Render the installed dependencies of a package as a graph", long_about = None)]
pub struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[arg(short, long, global = true)]
    pub quiet: bool,
    #[arg(long, global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write dependency_graph.mmd and render it to an image
    Render(RenderArgs),
    /// Print the dependency graph without writing anything
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    /// JSON (or .toml) configuration file
    pub config: PathBuf,
    /// Read a saved freeze listing instead of running pip
    #[arg(long, value_name = "FILE")]
    pub from_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Stop after writing the graph document
    #[arg(long)]
    pub no_image: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    #[arg(long, default_value = "mermaid")]
    pub format: String,
}

pub fn run() {
    let cli = Cli::parse();
    output::configure(cli.quiet, cli.no_color);
    logging::init_tracing(cli.verbose, cli.no_color);
    if let Err(err) = dispatch(cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render(args) => handle_render(args),
        Commands::Show(args) => handle_show(args),
    }
}

fn load_visualizer(args: &SourceArgs) -> Result<Visualizer> {
    let config = load_config(&args.config)?;
    let visualizer = Visualizer::from_config(config);
    Ok(match &args.from_file {
        Some(path) => {
            let source: Box<dyn DependencySource> = Box::new(FreezeFileSource::new(path));
            visualizer.with_source(source)
        }
        None => visualizer,
    })
}

fn report_listing(record_count: usize, warnings: &[ParseWarning]) {
    if record_count == 0 {
        output::warn("No dependencies found");
    }
    for warning in warnings {
        output::warn(&format!("warning: {}", warning));
    }
}

fn handle_render(args: RenderArgs) -> Result<()> {
    let mut visualizer = load_visualizer(&args.source)?;
    if args.no_image {
        visualizer = visualizer.without_renderer();
    }
    output::info(&format!(
        "Collecting dependencies of {}",
        visualizer.config().root_package()
    ));
    let repository = &visualizer.config().repository_url;
    if !repository.is_empty() {
        output::info(&format!("Repository: {}", repository));
    }

    let summary = visualizer.run()?;
    report_listing(summary.record_count, &summary.warnings);
    output::info(&format!(
        "{}: {} packages, {} edges -> {}",
        summary.root,
        summary.node_count,
        summary.edge_count,
        summary.graph_file.display()
    ));
    match summary.image_file {
        Some(image) => output::success(&format!(
            "Graph generation completed successfully: {}",
            image.display()
        )),
        None => output::success("Graph document written"),
    }
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<()> {
    let format: GraphFormat = args.format.parse()?;
    let visualizer = load_visualizer(&args.source)?.without_renderer();
    let built = visualizer.collect()?;
    report_listing(built.record_count, &built.warnings);

    let rendered = viz::render(&built.graph, format)?;
    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}
