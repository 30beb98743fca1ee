use {
    std::num::*,
    crate::{
        indication_bar,
        sir_model::*,
        stats_methods::*,
    },
    rayon::prelude::*,
    rand_pcg::Pcg64,
    rand::SeedableRng,
};

/// Day counts of all trials, in trial order, and their statistics
#[derive(Clone, Debug, PartialEq)]
pub struct TrialSummary
{
    pub days: Vec<u32>,
    pub median: u32,
    pub stats: MeanVariance,
}

impl TrialSummary{
    pub fn from_days(days: Vec<u32>) -> Self
    {
        let median = median_at_half(&days);
        let stats = MeanVariance::from_slice(&days);
        Self{days, median, stats}
    }
}

/// Rng of trial `trial`. With a base seed every trial is reproducible,
/// trial `i` being seeded with `base + i`. Without one every trial draws from entropy.
pub fn trial_rng(random_seed: Option<u64>, trial: usize) -> Pcg64
{
    match random_seed{
        Some(seed) => Pcg64::seed_from_u64(seed.wrapping_add(trial as u64)),
        None => Pcg64::from_entropy()
    }
}

/// Run `num_trials` independent rounds of vaccination plus simulation
/// and summarize how many days transmission lasted.
/// Trials run in parallel on the current rayon pool, the result does not
/// depend on the number of threads.
pub fn run_trials(
    vax_city: &[VaxPerson],
    days_contagious: u32,
    random_seed: Option<u64>,
    num_trials: NonZeroUsize
) -> TrialSummary
{
    let bar = indication_bar(num_trials.get() as u64);
    bar.set_message("trials");

    let days: Vec<u32> = (0..num_trials.get())
        .into_par_iter()
        .map(
            |trial|
            {
                let mut rng = trial_rng(random_seed, trial);
                let result = vaccinate_and_simulate(vax_city, days_contagious, &mut rng);
                log::info!("trial {trial}: {} days", result.days);
                bar.inc(1);
                result.days
            }
        ).collect();
    bar.finish_with_message("Done");

    let summary = TrialSummary::from_days(days);
    log::info!(
        "median {} mean {} variance {} over {} trials",
        summary.median,
        summary.stats.mean(),
        summary.stats.variance(),
        num_trials
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use InfectionState::*;

    const TEST_SEED: u64 = 20170217;

    fn half_eager_city() -> Vec<VaxPerson>
    {
        let mut city = vec![VaxPerson::new(Susceptible, 0, 0.5); 40];
        city[0] = VaxPerson::new(Infected, 0, 0.0);
        city[20] = VaxPerson::new(Infected, 0, 0.0);
        city
    }

    fn trials(n: usize) -> NonZeroUsize
    {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn same_seed_same_summary()
    {
        let city = half_eager_city();
        let a = run_trials(&city, 3, Some(TEST_SEED), trials(25));
        let b = run_trials(&city, 3, Some(TEST_SEED), trials(25));
        assert_eq!(a, b);
    }

    #[test]
    fn trial_i_uses_base_seed_plus_i()
    {
        let city = half_eager_city();
        let summary = run_trials(&city, 2, Some(100), trials(8));
        for (i, &days) in summary.days.iter().enumerate(){
            let mut rng = Pcg64::seed_from_u64(100 + i as u64);
            assert_eq!(days, vaccinate_and_simulate(&city, 2, &mut rng).days);
        }
    }

    #[test]
    fn zero_is_a_real_seed()
    {
        let city = half_eager_city();
        let a = run_trials(&city, 2, Some(0), trials(5));
        let b = run_trials(&city, 2, Some(0), trials(5));
        assert_eq!(a.days, b.days);
        let mut rng = Pcg64::seed_from_u64(0);
        assert_eq!(a.days[0], vaccinate_and_simulate(&city, 2, &mut rng).days);
    }

    #[test]
    fn unseeded_trials_still_finish()
    {
        let city = half_eager_city();
        let summary = run_trials(&city, 2, None, trials(6));
        assert_eq!(summary.days.len(), 6);
        // two seeds, 18 people between them on either side
        assert!(summary.days.iter().all(|&d| d <= 10));
    }

    #[test]
    fn deterministic_city_gives_that_count()
    {
        // nobody wants a vaccine, so every trial is the same plain simulation
        let city = vec![
            VaxPerson::new(Infected, 0, 0.0),
            VaxPerson::new(Susceptible, 0, 0.0),
            VaxPerson::new(Susceptible, 0, 0.0),
            VaxPerson::new(Susceptible, 0, 0.0),
            VaxPerson::new(Susceptible, 0, 0.0),
        ];
        let summary = run_trials(&city, 2, None, trials(3));
        assert_eq!(summary.days, vec![2, 2, 2]);
        assert_eq!(summary.median, 2);
    }

    #[test]
    fn summary_median_is_index_half_of_sorted()
    {
        let summary = TrialSummary::from_days(vec![3, 1, 2]);
        assert_eq!(summary.median, 2);
        assert_eq!(summary.days, vec![3, 1, 2]);
        assert_eq!(summary.stats.mean(), 2.0);
        assert_eq!(summary.stats.variance(), 2.0 / 3.0);
    }
}
