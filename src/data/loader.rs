use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::{Label, SampleRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sample set from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "features": "0.02,0.03,...", "label": "Rock", "description": "..." }, ...]`
/// * `.csv`  – columns `features`, `label` and optionally `description`
pub fn load_samples(path: &Path) -> Result<Vec<SampleRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let samples = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    if samples.is_empty() {
        bail!("{} contains no samples", path.display());
    }
    Ok(samples)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// [
///   {
///     "features": "0.02,0.0371,...",
///     "label": "Rock",
///     "description": "optional"
///   },
///   ...
/// ]
/// ```
///
/// `features` may also be given as an array of numbers; it is then rendered
/// back to comma-separated text.
fn load_json(path: &Path) -> Result<Vec<SampleRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    records
        .iter()
        .enumerate()
        .map(|(i, rec)| -> Result<SampleRecord> {
            let obj = rec
                .as_object()
                .with_context(|| format!("Row {i} is not a JSON object"))?;

            let features = json_features(obj.get("features"), i)?;
            let label = obj
                .get("label")
                .and_then(|v| v.as_str())
                .with_context(|| format!("Row {i}: missing or invalid 'label'"))
                .and_then(|s| parse_label(s, i))?;
            let description = obj
                .get("description")
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string);

            Ok(SampleRecord {
                features,
                label,
                description,
            })
        })
        .collect()
}

fn json_features(val: Option<&JsonValue>, row: usize) -> Result<String> {
    match val {
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(JsonValue::Array(arr)) => {
            let tokens = arr
                .iter()
                .enumerate()
                .map(|(j, v)| {
                    v.as_f64()
                        .map(|f| f.to_string())
                        .with_context(|| format!("Row {row}, features[{j}]: not a number"))
                })
                .collect::<Result<Vec<String>>>()?;
            Ok(tokens.join(","))
        }
        _ => bail!("Row {row}: missing or invalid 'features'"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout:  header row with column names.
/// The `features` column holds the comma-separated values in a quoted field:
///   `"0.02,0.0371,0.0428",Rock,optional description`
fn load_csv(path: &Path) -> Result<Vec<SampleRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let features_idx = headers
        .iter()
        .position(|h| h == "features")
        .context("CSV missing 'features' column")?;
    let label_idx = headers
        .iter()
        .position(|h| h == "label")
        .context("CSV missing 'label' column")?;
    let description_idx = headers.iter().position(|h| h == "description");

    let mut samples = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let features = record.get(features_idx).unwrap_or("").trim().to_string();
        if features.is_empty() {
            bail!("CSV row {row_no}: empty 'features'");
        }
        let label = parse_label(record.get(label_idx).unwrap_or(""), row_no)?;
        let description = description_idx
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        samples.push(SampleRecord {
            features,
            label,
            description,
        });
    }

    Ok(samples)
}

fn parse_label(s: &str, row: usize) -> Result<Label> {
    s.parse::<Label>().map_err(|e| anyhow!("Row {row}: {e}"))
}
