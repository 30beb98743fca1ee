use{
    std::{
        num::*,
        path::PathBuf,
    },
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    crate::{
        error::*,
        json_parsing::*,
        logging::LevelFilter,
        misc_types::*,
    },
};

#[derive(Debug, StructOpt, Clone)]
/// Simulate an SIR epidemic on a ring of people, optionally after a vaccination clinic
pub struct RingSir{
    /// City file, one person per line: `<state> <days>` or,
    /// for the vax task, `<state> <days> <eagerness>`
    #[structopt(parse(from_os_str))]
    pub filename: PathBuf,

    /// Days an infected person stays contagious [default: 2]
    #[structopt(long)]
    pub days_contagious: Option<NonZeroU32>,

    /// Run the vaccination clinic before simulating? [default: no_vax]
    #[structopt(long, possible_values = &TaskType::VARIANTS)]
    pub task_type: Option<TaskType>,

    /// Seed for the vaccination clinic, trial i uses seed + i
    #[structopt(long)]
    pub random_seed: Option<u64>,

    /// Number of vaccination trials [default: 1]
    #[structopt(long)]
    pub num_trials: Option<NonZeroUsize>,

    /// Json file with parameters. Flags given on the command line take precedence
    #[structopt(long, parse(from_os_str))]
    pub json: Option<PathBuf>,

    /// Print the resolved parameters as json and exit
    #[structopt(long)]
    pub print_params: bool,

    /// Number of threads to use for trials
    #[structopt(long)]
    pub num_threads: Option<NonZeroUsize>,

    /// Also write the result to this file
    #[structopt(long, parse(from_os_str))]
    pub out: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[structopt(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl RingSir{
    /// Defaults, overwritten by the json file, overwritten by command line flags
    pub fn params(&self) -> SirResult<SimParams>
    {
        let mut params: SimParams = parse(self.json.as_deref())?;
        if let Some(days_contagious) = self.days_contagious{
            params.days_contagious = days_contagious;
        }
        if let Some(task_type) = self.task_type{
            params.task_type = task_type;
        }
        if self.random_seed.is_some(){
            params.random_seed = self.random_seed;
        }
        if let Some(num_trials) = self.num_trials{
            params.num_trials = num_trials;
        }
        Ok(params)
    }

    pub fn execute(&self) -> SirResult<()>
    {
        let params = self.params()?;
        if self.print_params{
            println!("{}", serde_json::to_string_pretty(&params)?);
            return Ok(());
        }
        log::info!("parameters: {params:?}");

        if let Some(j) = self.num_threads{
            // limit number of threads to j
            rayon::ThreadPoolBuilder::new().num_threads(j.get()).build_global()?;
        }
        super::execute::run(&self.filename, &params, self.out.as_deref())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimParams{
    pub days_contagious: NonZeroU32,
    pub task_type: TaskType,
    pub random_seed: Option<u64>,
    pub num_trials: NonZeroUsize,
}

impl Default for SimParams{
    fn default() -> Self{
        Self{
            days_contagious: DEFAULT_DAYS_CONTAGIOUS,
            task_type: TaskType::NoVax,
            random_seed: None,
            num_trials: DEFAULT_NUM_TRIALS,
        }
    }
}
