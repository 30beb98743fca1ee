use{
    std::{
        fs::File,
        io::BufReader,
        path::Path,
    },
    serde::de::DeserializeOwned,
    crate::error::*,
};

/// Read parameters from a json file, or fall back to their defaults
pub fn parse<T>(file: Option<&Path>) -> SirResult<T>
where T: Default + DeserializeOwned
{
    match file{
        None => Ok(T::default()),
        Some(path) => {
            let file = File::open(path)
                .map_err(|source| SirError::io(path, source))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)
                .map_err(|source| SirError::Json{path: path.to_owned(), source})
        }
    }
}
