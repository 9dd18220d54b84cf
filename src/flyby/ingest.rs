//! Ingestion boundary: a delimited-text reader with an explicit row schema.
//!
//! The source dataset is a CSV file with a header row and (at least) the
//! columns named below; any other columns are ignored. Field parsing is
//! permissive: a malformed or empty numeric field becomes `0.0` and a
//! malformed or empty hazard flag becomes `false`, so a partially broken row
//! still loads. `name` and `close_approach_date` carry the identity and the
//! index key, so a row missing either is a hard error.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::error::Result;

/// One raw dataset row, validated once at this boundary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApproachRow {
    pub name: String,

    #[serde(default)]
    pub id: Option<String>,

    /// Minimum estimated diameter in kilometers; `0.0` when absent or
    /// malformed.
    #[serde(
        rename = "estimated_diameter_min_kilometers",
        default,
        deserialize_with = "de_km_or_zero"
    )]
    pub diameter_min_km: f64,

    /// Hazard flag; `false` when absent or malformed.
    #[serde(
        rename = "is_potentially_hazardous_asteroid",
        default,
        deserialize_with = "de_flag_or_false"
    )]
    pub is_hazardous: bool,

    /// Approach date, strict `YYYY-MM-DD`.
    #[serde(rename = "close_approach_date")]
    pub date: NaiveDate,

    /// Miss distance in kilometers; `0.0` when absent or malformed.
    #[serde(
        rename = "miss_distance_kilometers",
        default,
        deserialize_with = "de_km_or_zero"
    )]
    pub miss_distance_km: f64,
}

fn de_km_or_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0.0))
}

fn de_flag_or_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().eq_ignore_ascii_case("true"))
}

/// Read every data row from the CSV file at `path`.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<ApproachRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: ApproachRow = record?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "id,name,estimated_diameter_min_kilometers,\
        is_potentially_hazardous_asteroid,close_approach_date,\
        miss_distance_kilometers,orbiting_body";

    fn write_csv(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn reads_well_formed_rows() {
        let file = write_csv(&[
            "2000433,Eros,13.1,True,1995-01-07,28136442.5,Earth",
            "3092506,2001 SB170,0.0644,False,1995-01-08,52950316.4,Earth",
        ]);

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Eros");
        assert_eq!(rows[0].id.as_deref(), Some("2000433"));
        assert_eq!(rows[0].diameter_min_km, 13.1);
        assert!(rows[0].is_hazardous);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(1995, 1, 7).unwrap());
        assert_eq!(rows[1].miss_distance_km, 52950316.4);
        assert!(!rows[1].is_hazardous);
    }

    #[test]
    fn malformed_numerics_default_to_zero() {
        let file = write_csv(&["77,Tiny,not-a-number,True,2020-03-01,,Earth"]);

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows[0].diameter_min_km, 0.0);
        assert_eq!(rows[0].miss_distance_km, 0.0);
    }

    #[test]
    fn malformed_hazard_flag_defaults_to_false() {
        let file = write_csv(&["78,Odd,1.0,maybe?,2020-03-01,1000.0,Earth"]);

        let rows = read_rows(file.path()).unwrap();
        assert!(!rows[0].is_hazardous);
    }

    #[test]
    fn hazard_flag_is_case_insensitive() {
        let file = write_csv(&["79,Shouty,1.0,TRUE,2020-03-01,1000.0,Earth"]);

        let rows = read_rows(file.path()).unwrap();
        assert!(rows[0].is_hazardous);
    }

    #[test]
    fn unknown_columns_are_ignored() {
        // orbiting_body is in the header but not in the schema
        let file = write_csv(&["80,Extra,1.0,False,2020-03-01,1000.0,Venus"]);

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows[0].name, "Extra");
    }

    #[test]
    fn malformed_date_is_an_error() {
        let file = write_csv(&["81,Broken,1.0,False,last-tuesday,1000.0,Earth"]);

        assert!(read_rows(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_rows("/no/such/file.csv").is_err());
    }
}
