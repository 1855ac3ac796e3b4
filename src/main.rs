#![allow(non_snake_case)]
use RustedBCH::Utils::matrix_io::{save_matrix_to_csv, save_matrix_to_file};
use RustedBCH::Utils::profiling::elapsed_time;
use RustedBCH::lie::BCH_api::BCH;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

/// Calculates Z = log(exp(X)exp(Y)) for non-commuting square matrices X, Y
/// in the P. Hall basis of the free Lie algebra, truncated at the 5th order.
#[derive(Parser)]
#[command(
    name = "RustedBCH",
    about = "truncated Baker-Campbell-Hausdorff series for square matrices"
)]
struct Args {
    /// text file with the X matrix: each element separated by a space, each row on its own line
    #[arg(short = 'x', long = "arg1")]
    X_mat: PathBuf,

    /// text file with the Y matrix, same format and dimensions as X
    #[arg(short = 'y', long = "arg2")]
    Y_mat: PathBuf,

    /// loglevel: debug, info, warn, error or off
    #[arg(long, default_value = "info")]
    loglevel: String,

    /// additionally write the log into a timestamped file
    #[arg(long)]
    savelog: bool,

    /// save the resulting matrix into the given file (*.csv gets CSV layout)
    #[arg(long)]
    save: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    let start = Instant::now();

    let mut bch = BCH::new();
    bch.set_solver_params(Some(args.loglevel), args.savelog);
    if let Err(e) = bch.set_matrices_from_files(&args.X_mat, &args.Y_mat) {
        eprintln!("{}", e);
        process::exit(2);
    }

    match bch.solve() {
        Ok(Z) => {
            println!("Z = {}", Z);
            if let Some(path) = args.save {
                let is_csv = path.extension().map(|ext| ext == "csv").unwrap_or(false);
                let saved: Result<(), Box<dyn std::error::Error>> = if is_csv {
                    save_matrix_to_csv(&Z, &path)
                } else {
                    save_matrix_to_file(&Z, &path).map_err(|e| e.into())
                };
                if let Err(e) = saved {
                    eprintln!("failed to save result: {}", e);
                    process::exit(2);
                }
            }
            let total = elapsed_time(start.elapsed());
            println!("Total run time: {}{}", total.1, total.0);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
