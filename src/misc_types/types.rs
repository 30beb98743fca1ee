use{
    serde::{Serialize, Deserialize},
    std::{
        fmt,
        num::*,
        str::FromStr,
    },
};

pub const DEFAULT_DAYS_CONTAGIOUS: NonZeroU32 = match NonZeroU32::new(2){
    Some(v) => v,
    None => panic!("zero contagious days")
};
pub const DEFAULT_NUM_TRIALS: NonZeroUsize = match NonZeroUsize::new(1){
    Some(v) => v,
    None => panic!("zero trials")
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskType{
    /// simulate the city as read
    #[default]
    NoVax,
    /// run the vaccination clinic first
    Vax,
}

impl TaskType{
    pub const VARIANTS: [&'static str; 2] = ["no_vax", "vax"];

    pub fn name(self) -> &'static str
    {
        match self{
            Self::NoVax => "no_vax",
            Self::Vax => "vax",
        }
    }
}

impl fmt::Display for TaskType{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

impl FromStr for TaskType{
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s{
            "no_vax" => Ok(Self::NoVax),
            "vax" => Ok(Self::Vax),
            other => Err(format!("invalid task type '{other}', expected one of {:?}", Self::VARIANTS))
        }
    }
}
