use{
    super::*,
    std::path::Path,
    crate::{
        city_loader::*,
        error::*,
        misc_types::*,
        sir_model::*,
        trial_runner::*,
    },
};

pub fn run(filename: &Path, params: &SimParams, out: Option<&Path>) -> SirResult<()>
{
    let days_contagious = params.days_contagious.get();
    match params.task_type{
        TaskType::NoVax => {
            let city = load_city(filename)?;
            println!("Running simulation ...");
            let result = city.run_simulation(days_contagious);
            print_result(&result);
            if let Some(path) = out{
                write_city(path, params, &result)?;
            }
        },
        TaskType::Vax if params.num_trials.get() == 1 => {
            let vax_city = load_vax_city(filename)?;
            println!("Running one vax clinic and simulation ...");
            let mut rng = trial_rng(params.random_seed, 0);
            let result = vaccinate_and_simulate(&vax_city, days_contagious, &mut rng);
            print_result(&result);
            if let Some(path) = out{
                write_city(path, params, &result)?;
            }
        },
        TaskType::Vax => {
            let vax_city = load_vax_city(filename)?;
            println!("Running multiple trials of the vax clinic and simulation ...");
            let summary = run_trials(
                &vax_city,
                days_contagious,
                params.random_seed,
                params.num_trials
            );
            println!("Median number of days until infection transmission stops: {}", summary.median);
            if let Some(path) = out{
                let json = serde_json::to_value(params)?;
                SirWriter::new(path, &json)?
                    .write_trials(&summary)
                    .map_err(|source| SirError::write(path, source))?;
            }
        }
    }
    Ok(())
}

fn print_result(result: &SimulationResult)
{
    println!("Final city: {}", result.city);
    println!("Days simulated: {}", result.days);
}

fn write_city(path: &Path, params: &SimParams, result: &SimulationResult) -> SirResult<()>
{
    let json = serde_json::to_value(params)?;
    SirWriter::new(path, &json)?
        .write_city(result)
        .map_err(|source| SirError::write(path, source))
}
