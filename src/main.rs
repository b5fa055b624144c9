use std::process::ExitCode;

use log::info;

use tsp_insert_core::{
    ProblemInput, Result, SolverOptions, logging, save_tour, solve_cheapest_insertion,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let options = SolverOptions::from_args()?;
    logging::init_logger(&options)?;
    info!("options: {options}");

    let input = ProblemInput::read(options.input_path())?;
    let mode = options.distance.resolve(input.mode);

    let solution = solve_cheapest_insertion(&input.points, mode)?;
    save_tour(options.output_path(), &solution.tour, &options.id_prefix)?;

    println!("{}", solution.report());
    info!(
        "output: n={} total={:.0} longest={:.0}",
        solution.len(),
        solution.metrics.total,
        solution.metrics.longest
    );

    Ok(())
}
