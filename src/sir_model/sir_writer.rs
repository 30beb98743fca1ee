use{
    std::{
        fs::File,
        io::{Write, BufWriter},
        path::Path,
    },
    serde_json::Value,
    super::*,
    crate::error::*,
    crate::trial_runner::TrialSummary,
};

pub type CurveWriter = BufWriter<File>;

/// Writes result files.
/// Every file starts with `#` followed by the json of the parameters that produced it
pub struct SirWriter
{
    writer: CurveWriter,
}

impl SirWriter
{
    pub fn new(path: &Path, json: &Value) -> SirResult<Self>
    {
        log::info!("creating: {}", path.display());
        let file = File::create(path)
            .map_err(|source| SirError::write(path, source))?;
        let mut writer = BufWriter::new(file);
        let mut res = || -> std::io::Result<()> {
            write!(writer, "#")?;
            serde_json::to_writer(&mut writer, json)?;
            writeln!(writer)
        };
        res().map_err(|source| SirError::write(path, source))?;
        Ok(Self{writer})
    }

    pub fn write_city(&mut self, result: &SimulationResult) -> std::io::Result<()>
    {
        writeln!(self.writer, "#days_simulated {}", result.days)?;
        writeln!(self.writer, "#index state days")?;
        for (index, person) in result.city.iter().enumerate(){
            writeln!(self.writer, "{} {} {}", index, person.state, person.days)?;
        }
        self.writer.flush()
    }

    pub fn write_trials(&mut self, summary: &TrialSummary) -> std::io::Result<()>
    {
        writeln!(self.writer, "#median {}", summary.median)?;
        writeln!(self.writer, "#mean {} variance {}", summary.stats.mean(), summary.stats.variance())?;
        writeln!(self.writer, "#trial days")?;
        for (trial, days) in summary.days.iter().enumerate(){
            writeln!(self.writer, "{trial} {days}")?;
        }
        self.writer.flush()
    }
}
