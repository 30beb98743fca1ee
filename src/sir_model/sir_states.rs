use {
    serde::{Serialize, Deserialize},
    std::{fmt, str::FromStr},
};

#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash)]
#[derive(Serialize, Deserialize)]
pub enum InfectionState{
    Susceptible,
    Infected,
    Recovered,
    Vaccinated,
}

impl InfectionState{
    pub fn sus_check(&self) -> bool{
        matches!(self, InfectionState::Susceptible)
    }
    pub fn inf_check(&self) -> bool{
        matches!(self, InfectionState::Infected)
    }

    /// single letter used in city files and printed cities
    pub fn letter(self) -> char
    {
        match self{
            Self::Susceptible => 'S',
            Self::Infected => 'I',
            Self::Recovered => 'R',
            Self::Vaccinated => 'V',
        }
    }

    fn from_letter(letter: &str) -> Option<Self>
    {
        match letter{
            "S" => Some(Self::Susceptible),
            "I" => Some(Self::Infected),
            "R" => Some(Self::Recovered),
            "V" => Some(Self::Vaccinated),
            _ => None
        }
    }
}

impl Default for InfectionState{
    fn default() -> Self{
        InfectionState::Susceptible
    }
}

impl fmt::Display for InfectionState{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStateLetter(pub String);

impl fmt::Display for UnknownStateLetter{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "unknown disease state '{}'", self.0)
    }
}

impl FromStr for InfectionState{
    type Err = UnknownStateLetter;
    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        Self::from_letter(s).ok_or_else(|| UnknownStateLetter(s.to_owned()))
    }
}
