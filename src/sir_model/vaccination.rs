use {
    super::{City, Person, SimulationResult, VaxPerson},
    rand::Rng,
};

/// Offer a vaccine to one person. Susceptible people consume exactly one
/// uniform draw in [0, 1) and accept if it lies below their eagerness.
pub fn vaccinate_person<R>(vax_person: &VaxPerson, rng: &mut R) -> Person
where R: Rng + ?Sized
{
    if vax_person.state.sus_check(){
        let draw: f64 = rng.gen();
        if draw < vax_person.eagerness{
            log::trace!("vaccinated, draw {draw} < eagerness {}", vax_person.eagerness);
            return Person::vaccinated();
        }
    }
    vax_person.person
}

/// Run the vaccination clinic over the whole city, in population order.
/// The order of draws is fixed, so a seeded rng always gives the same city.
pub fn vaccinate_city<R>(vax_city: &[VaxPerson], rng: &mut R) -> City
where R: Rng + ?Sized
{
    vax_city.iter()
        .map(|vax_person| vaccinate_person(vax_person, rng))
        .collect()
}

pub fn vaccinate_and_simulate<R>(
    vax_city: &[VaxPerson],
    days_contagious: u32,
    rng: &mut R
) -> SimulationResult
where R: Rng + ?Sized
{
    vaccinate_city(vax_city, rng)
        .run_simulation(days_contagious)
}
