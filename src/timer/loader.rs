//! Load the activity list from activities.csv

use super::TimerConfig;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Embedded copy of the shipped activity list
pub const DEFAULT_ACTIVITIES_CSV: &str = include_str!("../../data/activities.csv");

/// Raw CSV row matching activities.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Id")]
    id: u32,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Description")]
    description: String,
}

impl CsvRow {
    fn to_config(self) -> TimerConfig {
        TimerConfig {
            id: self.id,
            title: self.title,
            description: self.description,
        }
    }
}

/// Load activity configs from a CSV file
pub fn load_activities<P: AsRef<Path>>(path: P) -> Result<Vec<TimerConfig>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut configs = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        configs.push(row.to_config());
    }

    Ok(configs)
}

/// Load activity configs from any reader (e.g., string buffer)
pub fn load_activities_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<TimerConfig>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut configs = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        configs.push(row.to_config());
    }

    Ok(configs)
}

/// Load the fixed list shipped with the application
pub fn load_default_activities() -> Result<Vec<TimerConfig>, Box<dyn Error>> {
    load_activities_from_reader(DEFAULT_ACTIVITIES_CSV.as_bytes())
}
