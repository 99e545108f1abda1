mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use model::{LoadOptions, Model, ModelOptions, ObjParser, Triangulation};

#[derive(Parser)]
#[command(name = "obj-inspect")]
#[command(about = "Loads a Wavefront obj file and prints what it contains")]
#[command(version)]
struct Args {
    /// Obj file to load
    path: PathBuf,

    /// Directory material libraries and textures are resolved against
    /// (defaults to the obj file's directory)
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Fail on the first warning
    #[arg(long)]
    strict: bool,

    /// Fan triangulate polygons with more than four corners instead of
    /// dropping them
    #[arg(long)]
    fan: bool,

    /// Flip the v texture coordinate
    #[arg(long = "flip-v")]
    flip_v: bool,

    /// Keep one vertex per face corner
    #[arg(long = "no-dedup")]
    no_dedup: bool,

    /// Log more (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn load_options(&self) -> LoadOptions {
        let load_options = LoadOptions::default().with_strict(self.strict);
        match &self.base_dir {
            Some(base_dir) => load_options.with_base_dir(base_dir),
            None => load_options,
        }
    }

    fn model_options(&self) -> ModelOptions {
        let triangulation = if self.fan {
            Triangulation::Fan
        } else {
            Triangulation::QuadsOnly
        };
        ModelOptions::default()
            .with_triangulation(triangulation)
            .with_flip_texture_v(self.flip_v)
            .with_deduplicate_vertices(!self.no_dedup)
    }

    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .target(env_logger::Target::Stderr)
        .init();

    let scene = ObjParser::new(args.load_options())
        .parse_file(&args.path)
        .with_context(|| format!("Failed to load \"{}\"", args.path.display()))?;
    let model = Model::from_scene(&scene, &args.model_options())
        .with_context(|| format!("Failed to expand \"{}\"", args.path.display()))?;

    report::print(&scene, &model);
    Ok(())
}
