use {
    super::{InfectionState, Person},
    serde::{Serialize, Deserialize},
    std::{fmt, ops::Deref},
};

/// Snapshot of every person in the city on one day.
/// Index `len-1` is the left neighbor of index `0`, the city is a ring.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[derive(Serialize, Deserialize)]
pub struct City{
    people: Vec<Person>
}

impl City{
    pub fn new(people: Vec<Person>) -> Self
    {
        Self{people}
    }

    pub fn count(&self, state: InfectionState) -> usize
    {
        self.people.iter()
            .filter(|p| p.state == state)
            .count()
    }

    #[inline]
    fn left_of(&self, location: usize) -> usize
    {
        (location + self.people.len() - 1) % self.people.len()
    }

    #[inline]
    fn right_of(&self, location: usize) -> usize
    {
        (location + 1) % self.people.len()
    }

    /// Does the susceptible person at `location` have an infected neighbor?
    ///
    /// # Panics
    /// if `location` is out of range or the person there is not susceptible
    pub fn has_an_infected_neighbor(&self, location: usize) -> bool
    {
        assert!(
            location < self.people.len(),
            "location {location} outside of city with {} people",
            self.people.len()
        );
        assert!(
            self.people[location].state.sus_check(),
            "neighbor check at {location} needs a susceptible person, found {}",
            self.people[location].state
        );

        self.people[self.left_of(location)].state.inf_check()
            || self.people[self.right_of(location)].state.inf_check()
    }

    /// State of the person at `location` after one more day.
    /// Only reads `self`, which is the city at the start of the day.
    pub fn advance_person_at_location(&self, location: usize, days_contagious: u32) -> Person
    {
        let person = self.people[location];
        match person.state{
            InfectionState::Susceptible if self.has_an_infected_neighbor(location) => {
                Person::infected(0)
            },
            InfectionState::Infected if person.days.checked_add(1) == Some(days_contagious) => {
                Person::recovered(0)
            },
            _ => person.aged()
        }
    }

    /// Builds the city of the next day. Every lookup goes to `self`,
    /// never to the generation being built
    pub fn simulate_one_day(&self, days_contagious: u32) -> City
    {
        let people = (0..self.people.len())
            .map(|location| self.advance_person_at_location(location, days_contagious))
            .collect();
        City{people}
    }

    /// true if at least one susceptible person has an infected neighbor
    pub fn is_transmission_possible(&self) -> bool
    {
        self.people.iter()
            .enumerate()
            .any(
                |(location, person)|
                person.state.sus_check() && self.has_an_infected_neighbor(location)
            )
    }

    /// Advance day by day for as long as transmission is possible.
    ///
    /// Terminates for every finite city: each simulated day turns at least
    /// one susceptible person into an infected one and nobody ever
    /// becomes susceptible again.
    pub fn run_simulation(self, days_contagious: u32) -> SimulationResult
    {
        debug_assert!(days_contagious > 0);
        let mut city = self;
        let mut days = 0;
        while city.is_transmission_possible()
        {
            city = city.simulate_one_day(days_contagious);
            days += 1;
            log::debug!(
                "day {days}: S {} I {} R {} V {}",
                city.count(InfectionState::Susceptible),
                city.count(InfectionState::Infected),
                city.count(InfectionState::Recovered),
                city.count(InfectionState::Vaccinated)
            );
        }
        SimulationResult{city, days}
    }
}

impl Deref for City{
    type Target = [Person];
    fn deref(&self) -> &Self::Target {
        &self.people
    }
}

impl From<Vec<Person>> for City{
    fn from(people: Vec<Person>) -> Self
    {
        Self{people}
    }
}

impl FromIterator<Person> for City{
    fn from_iter<T: IntoIterator<Item = Person>>(iter: T) -> Self
    {
        Self{people: iter.into_iter().collect()}
    }
}

impl fmt::Display for City{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "[")?;
        for (i, person) in self.people.iter().enumerate(){
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{person}")?;
        }
        write!(f, "]")
    }
}

/// Final city and the number of simulated days
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationResult{
    pub city: City,
    pub days: u32,
}
