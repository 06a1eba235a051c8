use eppstein_ksp::io::{format_answer, parse_query};
use eppstein_ksp::graph::Graph;
use eppstein_ksp::KShortestPaths;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

fn run() -> Result<String, Box<dyn std::error::Error>> {
    // Input file from the first argument, standard input otherwise
    let args: Vec<String> = env::args().collect();
    let input = match args.get(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let query = parse_query(&input)?;
    log::info!(
        "graph with {} vertices, query {} -> {} rank {}",
        query.graph.vertex_count(),
        query.source,
        query.target,
        query.k
    );

    let path = KShortestPaths::new().kth_path(&query.graph, query.source, query.target, query.k)?;
    if let Some(path) = &path {
        log::info!("rank {} cost {}", path.rank, path.cost);
    }
    Ok(format_answer(path.as_ref()))
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(answer) => {
            println!("{}", answer);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
