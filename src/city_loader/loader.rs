use{
    std::{
        fs,
        path::Path,
    },
    crate::{
        error::*,
        sir_model::*,
    },
};

/// One line of a city file
pub trait CityRecord: Sized
{
    /// description of a valid line, shown when a line is rejected
    const EXPECTED: &'static str;

    /// `None` if the whitespace separated fields do not form a valid record
    fn from_fields(fields: &[&str]) -> Option<Self>;
}

fn parse_state_and_days(state: &str, days: &str) -> Option<(InfectionState, u32)>
{
    let state: InfectionState = state.parse().ok()?;
    let days = days.parse().ok()?;
    Some((state, days))
}

impl CityRecord for Person{
    const EXPECTED: &'static str =
        "persons are represented with a disease state ('S', 'I', 'R', 'V') and a non-negative integer.";

    fn from_fields(fields: &[&str]) -> Option<Self>
    {
        match *fields{
            [state, days] => {
                let (state, days) = parse_state_and_days(state, days)?;
                Some(Person::new(state, days))
            },
            _ => None
        }
    }
}

impl CityRecord for VaxPerson{
    const EXPECTED: &'static str =
        "vax tuples are represented with a disease state ('S', 'I', 'R', 'V'), \
        a non-negative integer, and a floating point value between 0 and 1.0.";

    fn from_fields(fields: &[&str]) -> Option<Self>
    {
        match *fields{
            [state, days, eagerness] => {
                let (state, days) = parse_state_and_days(state, days)?;
                let eagerness: f64 = eagerness.parse().ok()?;
                // NaN fails this check as well
                (0.0..=1.0).contains(&eagerness)
                    .then(|| VaxPerson::new(state, days, eagerness))
            },
            _ => None
        }
    }
}

/// Parse every line, or fail on the first bad one (0-indexed line number)
pub fn parse_records<T: CityRecord>(text: &str) -> SirResult<Vec<T>>
{
    text.lines()
        .enumerate()
        .map(
            |(line, content)|
            {
                let fields: Vec<_> = content.split_whitespace().collect();
                T::from_fields(&fields)
                    .ok_or_else(
                        || SirError::MalformedLine{
                            line,
                            expected: T::EXPECTED.to_owned()
                        }
                    )
            }
        ).collect()
}

pub fn load_records<T: CityRecord>(path: &Path) -> SirResult<Vec<T>>
{
    let text = fs::read_to_string(path)
        .map_err(|source| SirError::io(path, source))?;
    let records = parse_records(&text)?;
    if records.is_empty(){
        return Err(SirError::EmptyCity{path: path.to_owned()});
    }
    log::info!("loaded {} people from {}", records.len(), path.display());
    Ok(records)
}

pub fn load_city(path: &Path) -> SirResult<City>
{
    load_records::<Person>(path)
        .map(City::new)
}

pub fn load_vax_city(path: &Path) -> SirResult<Vec<VaxPerson>>
{
    load_records(path)
}
