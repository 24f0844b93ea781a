//! Entry point for the **gridarea** tool.
//!
//! Loads layout parameters from a JSON file, builds an in-memory page
//! (`#body` holding an `#elements` container with the requested number of
//! children), attaches the grid layout to the element named by `--id`,
//! renders, and prints every element's inline style.
//!
//! ```text
//! gridarea <params.json> [--children N] [--id ID] [--script]
//! ```
//!
//! `--script` prints the page bootstrap line instead.  Any error is logged
//! and the process exits with status 1.

use gridarea::config::{ConfigError, LayoutParams};
use gridarea::layout::{GridLayoutModule, LayoutError, DEFAULT_CONTAINER_ID};
use gridarea::memory::{MemoryDocument, MemoryElement};
use gridarea::script::bootstrap_script;
use log::{error, info};
use std::path::PathBuf;

const USAGE: &str = "usage: gridarea <params.json> [--children N] [--id ID] [--script]";

/// Identifier of the root element of the in-memory page.
const PAGE_ROOT_ID: &str = "body";

/// Parsed command-line arguments.
#[derive(Debug)]
struct Args {
    params_path: PathBuf,
    children: Option<usize>,
    id: String,
    script: bool,
}

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("failed to serialize params: {0}")]
    Script(#[from] serde_json::Error),
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut params_path = None;
    let mut children = None;
    let mut id = DEFAULT_CONTAINER_ID.to_string();
    let mut script = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--children" => {
                let n = args.next().ok_or("--children needs a value")?;
                children = Some(
                    n.parse()
                        .map_err(|_| format!("--children: not a number: {:?}", n))?,
                );
            }
            "--id" => id = args.next().ok_or("--id needs a value")?,
            "--script" => script = true,
            other if other.starts_with("--") => return Err(format!("unknown flag {}", other)),
            path if params_path.is_none() => params_path = Some(PathBuf::from(path)),
            _ => return Err(format!("unexpected argument {:?}", arg)),
        }
    }

    Ok(Args {
        params_path: params_path.ok_or("missing parameter file")?,
        children,
        id,
        script,
    })
}

/// Build the in-memory page: `#body` with one `#elements` child that has
/// `children` empty children.
fn build_page(children: usize) -> MemoryDocument {
    let mut root = MemoryElement::with_id(PAGE_ROOT_ID);
    root.push_child(MemoryElement::with_children(DEFAULT_CONTAINER_ID, children));
    let mut doc = MemoryDocument::new();
    doc.push(root);
    doc
}

/// Execute one invocation and return what should be printed.
fn run(args: &Args) -> Result<String, RunError> {
    let params = LayoutParams::load(&args.params_path)?;
    info!("loaded params from {}", args.params_path.display());

    if args.script {
        return Ok(format!("{}\n", bootstrap_script(&params)?));
    }

    let children = args.children.unwrap_or(params.grid_areas.len());
    let mut doc = build_page(children);
    {
        let mut module = GridLayoutModule::attach(&mut doc, &args.id, params)?;
        module.render(None)?;
    }

    Ok(doc.roots().iter().map(ToString::to_string).collect())
}

//  Main

fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            error!("{}", e);
            error!("{}", USAGE);
            std::process::exit(1);
        }
    };

    match run(&args) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
