use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};
use crate::landmarks::LandmarkSet;
use crate::origin;
use crate::types::RotationArray;

/// Serializes an object to a pretty-printed JSON file.
pub fn object_to_json<T: Serialize>(output_path: impl AsRef<Path>, object: &T) -> Result<()> {
    let j = serde_json::to_string_pretty(object)?;
    let mut file = std::fs::File::create(output_path)?;
    file.write_all(j.as_bytes())?;
    Ok(())
}

/// Deserializes an object from a JSON file.
pub fn object_from_json<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T> {
    let contents = std::fs::read_to_string(file_path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Rotations of one frame, keyed by landmark set name, with the root
/// location of every set that was processed.
#[derive(Debug, Default, Serialize)]
pub struct RotationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose: Option<RotationArray>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<RotationArray>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_hand: Option<RotationArray>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_hand: Option<RotationArray>,
    pub roots: BTreeMap<String, Option<[f32; 3]>>,
}

impl RotationReport {
    /// Stores `rotations` under `name` together with the root of `set`.
    /// Fails on names other than the four landmark sets.
    pub fn insert(&mut self, name: &str, set: &LandmarkSet, rotations: RotationArray) -> Result<()> {
        let slot = match name {
            "pose" => &mut self.pose,
            "face" => &mut self.face,
            "left_hand" => &mut self.left_hand,
            "right_hand" => &mut self.right_hand,
            _ => return Err(Error::UnknownSet(name.to_string())),
        };
        let root = origin::root_location(set, rotations.kind()).map(|p| p.to_array());
        *slot = Some(rotations);
        self.roots.insert(name.to_string(), root);
        Ok(())
    }
}

/// Human-readable summary of a report, one line per set.
pub fn write_summary(output_path: impl AsRef<Path>, report: &RotationReport) -> Result<()> {
    let mut s = String::new();
    let sets = [
        ("pose", &report.pose),
        ("face", &report.face),
        ("left_hand", &report.left_hand),
        ("right_hand", &report.right_hand),
    ];
    for (name, rotations) in sets {
        let Some(r) = rotations else { continue };
        let tracked = r.iter().filter(|j| j.is_tracked()).count();
        s += format!("{}: {} / {} joints tracked", name, tracked, r.len()).as_str();
        if r.is_absent() {
            s += " (absent)";
        }
        s += "\n";
    }
    std::fs::write(output_path, s)?;
    Ok(())
}
