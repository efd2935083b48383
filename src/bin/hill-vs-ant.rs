use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tsp_heur::aco::{AsConfig, DegeneratePolicy, DepositRule};
use tsp_heur::compare::Comparison;
use tsp_heur::distance::DistanceMatrix;
use tsp_heur::hc::HcConfig;
use tsp_heur::instance::{random_points, DEFAULT_EXTENT};
use tsp_heur::random::rng_from;

fn cli() -> Command {
    Command::new("hill-vs-ant")
        .about("Compares Hill Climbing and Ant System on a random Euclidean TSP instance")
        .arg(
            arg!(--nodes [NODES] "Number of nodes in the instance")
                .default_value("20")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--seed [SEED] "Seed for the instance and both searches")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--"hc-iterations" [N] "Hill Climbing sweeps")
                .default_value("1000")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--iterations [N] "Ant System iterations")
                .default_value("100")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--ants [N] "Ants per iteration")
                .default_value("20")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--alpha [ALPHA] "Pheromone exponent")
                .default_value("1")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--beta [BETA] "Inverse-distance exponent")
                .default_value("5")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--evaporation [RHO] "Evaporation rate in [0, 1]")
                .default_value("0.5")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--q [Q] "Pheromone deposit constant")
                .default_value("100")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"deposit-rule" [RULE] "Edges each ant reinforces")
                .default_value("visited")
                .value_parser(["visited", "edge"]),
        )
        .arg(
            arg!(--"uniform-fallback" "Choose uniformly when an ant has nothing to sample")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--parallel "Run both searches concurrently and build ants in parallel")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = cli().get_matches();
    run(&matches)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let nodes = *matches.get_one::<usize>("nodes").unwrap();
    let seed = matches.get_one::<u64>("seed").copied();
    let parallel = matches.get_flag("parallel");

    let mut rng = rng_from(seed);
    let points = random_points(nodes, DEFAULT_EXTENT, &mut rng);
    let matrix = DistanceMatrix::from_points(&points);

    let mut hc = HcConfig::default()
        .with_max_iterations(*matches.get_one::<usize>("hc-iterations").unwrap());
    let mut ant = AsConfig::default()
        .with_iterations(*matches.get_one::<usize>("iterations").unwrap())
        .with_colony_size(*matches.get_one::<usize>("ants").unwrap())
        .with_alpha(*matches.get_one::<f64>("alpha").unwrap())
        .with_beta(*matches.get_one::<f64>("beta").unwrap())
        .with_evaporation(*matches.get_one::<f64>("evaporation").unwrap())
        .with_deposit_constant(*matches.get_one::<f64>("q").unwrap())
        .with_parallel(parallel);
    ant.deposit_rule = match matches.get_one::<String>("deposit-rule").unwrap().as_str() {
        "visited" => DepositRule::VisitedNode,
        "edge" => DepositRule::TraversedEdge,
        other => return Err(anyhow!("unknown deposit rule: {other}")),
    };
    if matches.get_flag("uniform-fallback") {
        ant.degenerate = DegeneratePolicy::Uniform;
    }
    if let Some(seed) = seed {
        hc = hc.with_seed(seed);
        ant = ant.with_seed(seed.wrapping_add(1));
    }

    let comparison = if parallel {
        Comparison::run_concurrent(&matrix, &hc, &ant)?
    } else {
        Comparison::run(&matrix, &hc, &ant)?
    };
    println!("{comparison}");
    Ok(())
}
