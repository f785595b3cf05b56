//! Append-only CSV sample dataset.
//!
//! Each accepted classification can be appended as one row: identity and
//! prediction columns, caller metadata, then the 33 landmarks flattened to
//! `lm_00_x .. lm_32_v`. The header is written once when the file is
//! created; the column set of a file is therefore fixed by its first row,
//! so callers should keep metadata keys stable per dataset.

use std::collections::BTreeMap;
use std::path::Path;

use skillpose::{Classification, Landmark};

/// Errors raised while appending a sample row.
#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "dataset io error: {}", e),
            Self::Csv(e) => write!(f, "dataset csv error: {}", e),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

/// Append one sample row, creating the file (with header) and parent
/// directories on first use. Returns the generated sample id.
///
/// Metadata keys are emitted in sorted order so the header is
/// deterministic.
pub fn append_sample(
    path: &Path,
    landmarks: &[Landmark],
    result: &Classification,
    user_label: Option<&str>,
    meta: &BTreeMap<String, String>,
) -> Result<String, DatasetError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let sample_id = uuid::Uuid::new_v4().to_string();
    let created_at = chrono::Utc::now().timestamp();

    let write_header = !path.exists();
    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;
    let mut writer = csv::Writer::from_writer(file);

    if write_header {
        let mut header: Vec<String> = vec![
            "sample_id".into(),
            "created_at".into(),
            "predicted_pose".into(),
            "confidence".into(),
            "user_label".into(),
        ];
        header.extend(meta.keys().map(|k| format!("meta_{}", k)));
        for i in 0..landmarks.len() {
            for axis in ["x", "y", "z", "v"] {
                header.push(format!("lm_{:02}_{}", i, axis));
            }
        }
        writer.write_record(&header)?;
    }

    let mut row: Vec<String> = vec![
        sample_id.clone(),
        created_at.to_string(),
        result.label.to_string(),
        result.confidence.to_string(),
        user_label.unwrap_or("").to_string(),
    ];
    row.extend(meta.values().cloned());
    for lm in landmarks {
        row.push(lm.x.to_string());
        row.push(lm.y.to_string());
        row.push(lm.z.to_string());
        row.push(lm.visibility.to_string());
    }
    writer.write_record(&row)?;
    writer.flush().map_err(DatasetError::Io)?;

    Ok(sample_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillpose::PoseClassifier;

    fn sample_frame() -> Vec<Landmark> {
        (0..33)
            .map(|i| Landmark::new(0.01 * i as f64, 0.5, -0.1, 0.9))
            .collect()
    }

    #[test]
    fn appends_header_once_and_unique_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/pose_samples.csv");

        let frame = sample_frame();
        let result = PoseClassifier::new().classify(&frame).unwrap();
        let mut meta = BTreeMap::new();
        meta.insert("mode".to_string(), "photo".to_string());
        meta.insert("client".to_string(), "web".to_string());

        let id1 = append_sample(&path, &frame, &result, None, &meta).unwrap();
        let id2 = append_sample(&path, &frame, &result, Some("Handstand"), &meta).unwrap();
        assert_ne!(id1, id2);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3, "header plus two rows");

        let header = lines[0];
        // Sorted meta keys: client before mode.
        assert!(header.starts_with(
            "sample_id,created_at,predicted_pose,confidence,user_label,meta_client,meta_mode,lm_00_x"
        ));
        assert!(header.ends_with("lm_32_v"));
        assert!(lines[1].contains(&id1));
        assert!(lines[2].contains(&id2));
        assert!(lines[2].contains("Handstand"));
    }

    #[test]
    fn row_width_matches_header_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pose_samples.csv");

        let frame = sample_frame();
        let result = PoseClassifier::new().classify(&frame).unwrap();
        append_sample(&path, &frame, &result, None, &BTreeMap::new()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let header_len = reader.headers().unwrap().len();
        assert_eq!(header_len, 5 + 33 * 4);
        for record in reader.records() {
            assert_eq!(record.unwrap().len(), header_len);
        }
    }
}
