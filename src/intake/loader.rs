//! Load intake records from JSON documents

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::data::IntakeRecord;
use crate::error::LoadError;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<IntakeRecord>),
    One(Box<IntakeRecord>),
}

/// Load intakes from a JSON file holding one record or an array of records
pub fn load_intakes<P: AsRef<Path>>(path: P) -> Result<Vec<IntakeRecord>, LoadError> {
    let file = File::open(path)?;
    load_intakes_from_reader(BufReader::new(file))
}

/// Load intakes from any reader (e.g., request body, string buffer)
pub fn load_intakes_from_reader<R: Read>(reader: R) -> Result<Vec<IntakeRecord>, LoadError> {
    let parsed: OneOrMany = serde_json::from_reader(reader)?;
    Ok(match parsed {
        OneOrMany::Many(records) => records,
        OneOrMany::One(record) => vec![*record],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_object() {
        let json = r#"{"client": "Müller", "currentAge": 45, "pensionWishToday": 2200}"#;
        let intakes = load_intakes_from_reader(json.as_bytes()).unwrap();
        assert_eq!(intakes.len(), 1);
        assert_eq!(intakes[0].client.as_deref(), Some("Müller"));
        assert_eq!(intakes[0].pension_wish_today, 2200.0);
    }

    #[test]
    fn test_array() {
        let json = r#"[{"currentAge": 30}, {"currentAge": 52, "retirementAge": 63}]"#;
        let intakes = load_intakes_from_reader(json.as_bytes()).unwrap();
        assert_eq!(intakes.len(), 2);
        assert_eq!(intakes[1].retirement_age, Some(63));
    }

    #[test]
    fn test_malformed_json() {
        let err = load_intakes_from_reader("[{".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
