// File: crates/chart-data/src/point.rs
// Summary: The record served by the chart data endpoint.

use linechart_core::Accessors;
use serde::{Deserialize, Serialize};

/// One sample. Only `x` and `y` are plotted; the other fields ride along for consumers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub target: f64,
    pub prediction: f64,
    #[serde(alias = "diagnosis_group_id")]
    pub diagnosis_group_id: i64,
}

impl DataPoint {
    /// Projections used to plot a `DataPoint`: `x` against `y`.
    pub fn accessors() -> Accessors<DataPoint> {
        Accessors::new(|d: &DataPoint| d.x, |d: &DataPoint| d.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_camel_case() {
        let json = r#"{"id":1,"x":2.5,"y":-1,"target":0,"prediction":1,"diagnosisGroupId":7}"#;
        let p: DataPoint = serde_json::from_str(json).unwrap();
        assert_eq!(p.diagnosis_group_id, 7);
        assert_eq!(p.y, -1.0);
        let back = serde_json::to_string(&p).unwrap();
        assert!(back.contains(r#""diagnosisGroupId":7"#));
    }

    #[test]
    fn accessors_project_x_and_y() {
        let p = DataPoint { id: 0, x: 3.0, y: 4.0, target: 0.0, prediction: 0.0, diagnosis_group_id: 0 };
        assert_eq!(DataPoint::accessors().project(&p), (3.0, 4.0));
    }
}
