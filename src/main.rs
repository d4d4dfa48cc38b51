use anyhow::{anyhow, bail, Context, Result};
use clap::{arg, value_parser, ArgMatches, Command};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use u_orienteering::io::{read_course, read_map};
use u_orienteering::report;
use u_orienteering::search::{BranchAndBound, EdgeTraversal, SearchConfig};

fn cli() -> Command {
    Command::new("timeo")
        .about("Finds the best-scoring round trip on a time-windowed orienteering course")
        .arg_required_else_help(true)
        .arg(
            arg!(<MAP> "Map file: controls header and connection lines")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(<COURSE> "Course file: timelimit header and control lines")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(<PACE> "Multiplier applied to every travel time")
                .value_parser(value_parser!(f64)),
        )
        .arg(arg!(--json "Print the solution as JSON"))
        .arg(
            arg!(--"max-nodes" <N> "Stop after expanding N search nodes")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            arg!(--"time-budget" <SECS> "Stop after SECS seconds of search")
                .required(false)
                .value_parser(value_parser!(f64)),
        )
        .arg(arg!(--"forward-only" "Travel each connection only in its stored direction"))
        .arg(arg!(--"no-prune" "Disable score-bound pruning"))
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    enable_tracing();
    let matches = cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let map_path = matches
        .get_one::<PathBuf>("MAP")
        .ok_or_else(|| anyhow!("missing map file"))?;
    let course_path = matches
        .get_one::<PathBuf>("COURSE")
        .ok_or_else(|| anyhow!("missing course file"))?;
    let pace = *matches
        .get_one::<f64>("PACE")
        .ok_or_else(|| anyhow!("missing pace"))?;
    if !pace.is_finite() || pace <= 0.0 {
        bail!("pace must be a positive number, got {}", pace);
    }

    let config = search_config(matches)?;

    let mut network = read_map(map_path, pace)
        .with_context(|| format!("loading map {}", map_path.display()))?;
    let course = read_course(course_path, &mut network)
        .with_context(|| format!("loading course {}", course_path.display()))?;

    tracing::info!(
        vertices = network.graph().num_vertices(),
        edges = network.graph().num_edges(),
        controls = course.len(),
        time_limit = course.time_limit(),
        "solving"
    );

    let result = BranchAndBound::run(network.graph(), &course, network.start(), &config);
    if !result.stats.is_complete() {
        eprintln!(
            "Warning: search stopped after {} nodes; the result may not be optimal",
            result.stats.nodes
        );
    }

    if matches.get_flag("json") {
        println!("{}", report::to_json(&result.solution)?);
    } else {
        println!("{}", result.solution);
    }
    Ok(())
}

fn search_config(matches: &ArgMatches) -> Result<SearchConfig> {
    let mut config = SearchConfig::default().with_pruning(!matches.get_flag("no-prune"));
    if matches.get_flag("forward-only") {
        config = config.with_traversal(EdgeTraversal::Forward);
    }
    if let Some(&n) = matches.get_one::<u64>("max-nodes") {
        config = config.with_max_nodes(n);
    }
    if let Some(&secs) = matches.get_one::<f64>("time-budget") {
        let budget = Duration::try_from_secs_f64(secs)
            .map_err(|_| anyhow!("time budget must be a non-negative number of seconds"))?;
        config = config.with_time_budget(budget);
    }
    Ok(config)
}
