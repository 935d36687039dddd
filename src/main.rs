use std::process::ExitCode;

use anyhow::Context;
use clap::{error::ErrorKind, Parser};
use itertools::Itertools;
use log::LevelFilter;

use kmeanspp::logger::init_logger;
use kmeanspp::{load_joined, parse_count, parse_epsilon, ClusteringResult, Error, KMeans, Params, DEFAULT_MAX_ITER};

/// Cluster the inner join of two point files with k-means++.
#[derive(Parser, Debug)]
#[command(name = "kmeanspp", version)]
struct Opts {
    /// k [max_iter] epsilon file_a file_b
    #[arg(num_args = 4..=5, required = true, allow_negative_numbers = true, value_name = "ARGS")]
    args: Vec<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

struct Request {
    params: Params,
    file_a: String,
    file_b: String,
}

fn parse_request(args: &[String]) -> kmeanspp::Result<Request> {
    let (k, max_iter, epsilon, file_a, file_b) = match args {
        [k, epsilon, a, b] => (k, None, epsilon, a, b),
        [k, max_iter, epsilon, a, b] => (k, Some(max_iter), epsilon, a, b),
        _ => {
            return Err(Error::InvalidParameter {
                name: "args",
                message: "expected 4 or 5 arguments",
            })
        }
    };

    let k = parse_count("k", k)?;
    let max_iter = match max_iter {
        Some(text) => parse_count("max_iter", text)?,
        None => DEFAULT_MAX_ITER,
    };
    let epsilon = parse_epsilon(epsilon)?;

    let params = Params::new(k, epsilon).with_max_iter(max_iter);
    params.validate_scalars()?;

    Ok(Request {
        params,
        file_a: file_a.clone(),
        file_b: file_b.clone(),
    })
}

fn print_result(result: &ClusteringResult<String>) {
    println!("{}", result.seed_ids.iter().join(","));
    for centroid in result.centroids.outer_iter() {
        println!("{}", centroid.iter().map(|v| format!("{:.4}", v)).join(","));
    }
}

fn run(opts: &Opts) -> anyhow::Result<()> {
    let request = parse_request(&opts.args)?;
    let points = load_joined(&request.file_a, &request.file_b)
        .with_context(|| format!("loading {} and {}", request.file_a, request.file_b))?;
    let result = KMeans::new(request.params).fit(&points)?;
    print_result(&result);
    Ok(())
}

/// One-line message shown to the user for a failed run.
fn failure_message(error: &anyhow::Error) -> &'static str {
    match error.downcast_ref::<Error>() {
        Some(Error::InvalidClusterCount { .. })
        | Some(Error::InvalidParameter { name: "k", .. })
        | Some(Error::Parse { field: "k", .. }) => "invalid number of clusters!",
        Some(Error::InvalidParameter { name: "max_iter", .. })
        | Some(Error::Parse { field: "max_iter", .. }) => "invalid maximum iteration!",
        Some(Error::InvalidParameter { name: "epsilon", .. })
        | Some(Error::Parse { field: "epsilon", .. }) => "invalid epsilon!",
        _ => "An Error Has Occurred",
    }
}

fn main() -> ExitCode {
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("An Error Has Occurred");
            return ExitCode::FAILURE;
        }
    };

    let level = opts.verbose.then_some(LevelFilter::Debug);
    if init_logger(level).is_err() {
        println!("An Error Has Occurred");
        return ExitCode::FAILURE;
    }

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            println!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}
