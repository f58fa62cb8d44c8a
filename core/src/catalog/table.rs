use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::WriterBuilder;

use crate::catalog::record::{Candidate, RingRecord};
use crate::prelude::{HuntError, HuntResult};
use crate::telemetry::LogManager;

const CANDIDATE_HEADER: [&str; 5] = ["id", "lat", "lon", "hurst_I", "corr_IP"];

/// Loads the ring-metrics table from `path`.
pub fn load_rings<P: AsRef<Path>>(path: P) -> HuntResult<Vec<RingRecord>> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|err| {
        HuntError::Load(format!("opening {}: {}", path_ref.display(), err))
    })?;
    read_rings(file)
}

/// Reads ring records from any CSV source with a header row.
///
/// Extra columns are ignored; a missing required column or a non-numeric
/// value surfaces as a load error naming the offending row.
pub fn read_rings<R: Read>(source: R) -> HuntResult<Vec<RingRecord>> {
    let logger = LogManager::new();
    let mut reader = csv::Reader::from_reader(source);
    let mut records = Vec::new();

    for (index, row) in reader.deserialize().enumerate() {
        let record: RingRecord = row.map_err(|err| {
            HuntError::Load(format!("row {}: {}", index + 1, err))
        })?;
        for (name, value) in [
            ("theta", record.theta),
            ("phi", record.phi),
            ("hurst_I", record.hurst_i),
            ("corr_IP", record.corr_ip),
        ] {
            if !value.is_finite() {
                return Err(HuntError::Load(format!(
                    "row {}: column {} is not finite",
                    index + 1,
                    name
                )));
            }
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(HuntError::Load("metrics table contains no rows".into()));
    }
    logger.trace(&format!("loaded {} ring records", records.len()));
    Ok(records)
}

/// Writes the ranked-candidates artifact. The header row is emitted even
/// when the candidate set is empty.
pub fn write_candidates<P: AsRef<Path>>(
    path: P,
    candidates: &[Candidate],
) -> HuntResult<()> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|err| {
        HuntError::Write(format!("creating {}: {}", path_ref.display(), err))
    })?;
    write_candidate_rows(file, candidates)
}

fn write_candidate_rows<W: Write>(sink: W, candidates: &[Candidate]) -> HuntResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    writer
        .write_record(CANDIDATE_HEADER)
        .map_err(|err| HuntError::Write(err.to_string()))?;
    for candidate in candidates {
        writer
            .serialize(candidate)
            .map_err(|err| HuntError::Write(err.to_string()))?;
    }
    writer
        .flush()
        .map_err(|err| HuntError::Write(err.to_string()))?;
    Ok(())
}
