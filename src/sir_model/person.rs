use {
    super::InfectionState,
    serde::{Serialize, Deserialize},
    std::{fmt, ops::Deref},
};

/// Disease state of one individual plus the number of consecutive days spent in it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[derive(Serialize, Deserialize)]
pub struct Person{
    pub state: InfectionState,
    pub days: u32,
}

impl Person{
    pub fn new(state: InfectionState, days: u32) -> Self
    {
        Self{state, days}
    }

    pub fn infected(days: u32) -> Self
    {
        Self::new(InfectionState::Infected, days)
    }

    pub fn recovered(days: u32) -> Self
    {
        Self::new(InfectionState::Recovered, days)
    }

    pub fn vaccinated() -> Self
    {
        Self::new(InfectionState::Vaccinated, 0)
    }

    /// same state, one more day in it. The count stops at `u32::MAX`
    pub fn aged(self) -> Self
    {
        Self::new(self.state, self.days.saturating_add(1))
    }
}

impl fmt::Display for Person{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "({}, {})", self.state, self.days)
    }
}

/// A [Person] as read before the vaccination clinic.
/// `eagerness` is the probability of accepting a vaccine and lies in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct VaxPerson{
    pub person: Person,
    pub eagerness: f64,
}

impl VaxPerson{
    pub fn new(state: InfectionState, days: u32, eagerness: f64) -> Self
    {
        Self{
            person: Person::new(state, days),
            eagerness
        }
    }
}

impl Deref for VaxPerson{
    type Target = Person;
    fn deref(&self) -> &Self::Target {
        &self.person
    }
}
