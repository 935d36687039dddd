use std::collections::{HashMap, HashSet};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use itertools::Itertools;

use crate::error::{Error, Result};
use crate::points::PointSet;

struct Row {
    id: f64,
    features: Vec<f64>,
}

fn check_extension(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") | Some("csv") => Ok(()),
        _ => Err(Error::InvalidParameter {
            name: "path",
            message: "expected a .txt or .csv file",
        }),
    }
}

fn parse_field(field: &'static str, text: &str) -> Result<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::Parse {
            field,
            value: text.to_string(),
        })
}

/// Canonical text for a numeric id, so `1`, `1.0` and `01` join together.
fn id_key(id: f64) -> String {
    format!("{}", id)
}

fn load_rows(path: &Path) -> Result<Vec<Row>> {
    check_extension(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    let mut seen = HashSet::new();
    for record in reader.records() {
        let record = record?;
        let mut fields = record.iter();
        let id = match fields.next() {
            Some(text) => parse_field("id", text)?,
            None => continue,
        };
        if !seen.insert(id_key(id)) {
            return Err(Error::DuplicateId { index: rows.len() });
        }
        let features = fields
            .map(|text| parse_field("feature", text))
            .collect::<Result<Vec<_>>>()?;
        rows.push(Row { id, features });
    }
    log::debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read two header-less comma separated files and inner-join them on their
/// first column. The joined rows are sorted by ascending id and carry the
/// features of `path_a` followed by those of `path_b`.
pub fn load_joined(path_a: impl AsRef<Path>, path_b: impl AsRef<Path>) -> Result<PointSet<String>> {
    let rows_a = load_rows(path_a.as_ref())?;
    let rows_b = load_rows(path_b.as_ref())?;

    let by_id: HashMap<String, &Row> = rows_b.iter().map(|row| (id_key(row.id), row)).collect();

    let joined = rows_a
        .iter()
        .filter_map(|row| {
            by_id.get(&id_key(row.id)).map(|other| {
                let features = row
                    .features
                    .iter()
                    .chain(other.features.iter())
                    .copied()
                    .collect_vec();
                (row.id, features)
            })
        })
        .sorted_by(|(a, _), (b, _)| a.total_cmp(b))
        .collect_vec();

    if joined.is_empty() {
        return Err(Error::EmptyInput);
    }
    log::info!("Joined {} of {} / {} rows", joined.len(), rows_a.len(), rows_b.len());

    let (ids, rows): (Vec<String>, Vec<Vec<f64>>) = joined
        .into_iter()
        .map(|(id, features)| (id_key(id), features))
        .unzip();
    PointSet::from_rows(ids, &rows)
}
