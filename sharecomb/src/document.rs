use sharecomb_traits::orchestration::CaseSource;
use sharecomb_traits::shares::{EncodedShare, ReconstructionCase, ThresholdParams};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Error that arises while reading or writing a case document.
#[derive(Debug)]
pub enum DocumentError {
    /// The document could not be read from or written to disk.
    Io(std::io::Error),
    /// The document is not a valid JSON encoding of a reconstruction case.
    Json(serde_json::Error),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Io(e) => write!(f, "error reading case document: {}", e),
            DocumentError::Json(e) => write!(f, "invalid case document: {}", e),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<std::io::Error> for DocumentError {
    fn from(e: std::io::Error) -> Self {
        DocumentError::Io(e)
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(e: serde_json::Error) -> Self {
        DocumentError::Json(e)
    }
}

/// Builds a reconstruction case from its JSON encoding.
pub fn from_json(data: &str) -> Result<ReconstructionCase, DocumentError> {
    Ok(serde_json::from_str(data)?)
}

/// Reads a reconstruction case from a JSON encoding on disk.
pub fn from_file(path: &Path) -> Result<ReconstructionCase, DocumentError> {
    from_json(&fs::read_to_string(path)?)
}

/// Writes a reconstruction case to disk as pretty-printed JSON.
pub fn to_file(path: &Path, case: &ReconstructionCase) -> Result<(), DocumentError> {
    Ok(fs::write(path, serde_json::to_string_pretty(case)?)?)
}

/// A [`CaseSource`] backed by JSON case documents on disk, yielding the cases in the order
/// the paths were given.
pub struct JsonFileSource {
    paths: Vec<PathBuf>,
}

impl JsonFileSource {
    /// Creates a source over the given document paths.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        JsonFileSource { paths }
    }
}

impl CaseSource for JsonFileSource {
    type Error = DocumentError;

    fn cases(&mut self) -> Result<Vec<ReconstructionCase>, DocumentError> {
        self.paths.iter().map(|path| from_file(path)).collect()
    }
}

fn encoded(x: i64, base: u32, value: &str) -> EncodedShare {
    EncodedShare {
        x,
        base,
        value: value.to_string(),
    }
}

/// The two reconstruction cases bundled with the original script, as typed values. The first
/// is a (3, 4) sharing of the secret 3; the second a (7, 10) sharing of 79836264049851 whose
/// share values run far beyond 64 bits.
pub fn sample_cases() -> Vec<ReconstructionCase> {
    vec![
        ReconstructionCase {
            params: ThresholdParams { n: 4, k: 3 },
            shares: vec![
                encoded(1, 10, "4"),
                encoded(2, 2, "111"),
                encoded(3, 10, "12"),
                encoded(6, 4, "213"),
            ],
        },
        ReconstructionCase {
            params: ThresholdParams { n: 10, k: 7 },
            shares: vec![
                encoded(1, 6, "13444211440455345511"),
                encoded(2, 15, "aed7015a346d63"),
                encoded(3, 15, "6aeeb69631c227c"),
                encoded(4, 16, "e1b5e05623d881f"),
                encoded(5, 8, "316034514573652620673"),
                encoded(6, 3, "2122212201122002221120200210011020220200"),
                encoded(7, 3, "20120221122211000100210021102001201112121"),
                encoded(8, 6, "20220554335330240002224253"),
                encoded(9, 12, "45153788322a1255483"),
                encoded(10, 7, "1101613130313526312514143"),
            ],
        },
    ]
}

/// Writes the bundled sample cases into `directory` as `testcase1.json`, `testcase2.json`,
/// ... and returns the paths written.
pub fn write_sample_fixtures(directory: &Path) -> Result<Vec<PathBuf>, DocumentError> {
    sample_cases()
        .iter()
        .enumerate()
        .map(|(index, case)| {
            let path = directory.join(format!("testcase{}.json", index + 1));
            to_file(&path, case)?;
            Ok(path)
        })
        .collect()
}
