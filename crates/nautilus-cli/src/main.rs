use nautilus::{Direction, Edge, LayoutOptions, Node, Strategy};
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Layout(nautilus::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Layout(err) => write!(f, "layout error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<nautilus::Error> for CliError {
    fn from(value: nautilus::Error) -> Self {
        Self::Layout(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Strategies,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    strategy: Option<String>,
    strict: bool,
    pretty: bool,
    direction: Option<Direction>,
    iterations: Option<usize>,
    focus: Option<String>,
}

/// Input document: a graph plus optional strategy and options.
#[derive(Debug, Deserialize)]
struct LayoutDoc {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    options: LayoutOptions,
}

const DEFAULT_STRATEGY: &str = "force";

fn usage() -> &'static str {
    "nautilus-cli\n\
\n\
USAGE:\n\
  nautilus-cli [layout] [--strategy hierarchical|force|radial] [--strict] [--pretty] [--direction TB|LR|BT|RL] [--iterations <n>] [--focus <id>] [<path>|-]\n\
  nautilus-cli strategies\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a JSON object: {\"nodes\": [...], \"edges\": [...], \"strategy\"?: ..., \"options\"?: {...}}.\n\
  - Flags override the document's strategy and options; the default strategy is force.\n\
  - Unknown strategies return the nodes unchanged unless --strict is given.\n\
  - Set NAUTILUS_LOG (e.g. NAUTILUS_LOG=debug) to enable logging on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "strategies" => args.command = Command::Strategies,
            "--strict" => args.strict = true,
            "--pretty" => args.pretty = true,
            "--strategy" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.strategy = Some(name.clone());
            }
            "--direction" => {
                let Some(dir) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.direction = Some(
                    dir.parse::<Direction>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--iterations" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.iterations = Some(n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--focus" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.focus = Some(id.clone());
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("NAUTILUS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Strategies => {
            for s in Strategy::ALL {
                println!("{s}");
            }
            Ok(())
        }
        Command::Layout => {
            let text = read_input(args.input.as_deref())?;
            let mut doc: LayoutDoc = serde_json::from_str(&text)?;

            if let Some(direction) = args.direction {
                doc.options.direction = Some(direction);
            }
            if let Some(iterations) = args.iterations {
                doc.options.iterations = Some(iterations);
            }
            if let Some(focus) = args.focus {
                doc.options.focus_node_id = Some(focus);
            }
            let strategy = args
                .strategy
                .or(doc.strategy)
                .unwrap_or_else(|| DEFAULT_STRATEGY.to_string());
            tracing::debug!(
                strategy = %strategy,
                nodes = doc.nodes.len(),
                edges = doc.edges.len(),
                "read layout document"
            );

            let out = if args.strict {
                nautilus::apply_layout_strict(&doc.nodes, &doc.edges, &strategy, &doc.options)?
            } else {
                nautilus::apply_layout(&doc.nodes, &doc.edges, &strategy, &doc.options)
            };
            write_json(&out, args.pretty)
        }
    }
}

fn main() {
    init_logging();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
