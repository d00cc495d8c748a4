//! Diagnosis record printed on stdout

use serde::{Deserialize, Serialize};

use crate::catalog::{display_name, remedies_for};
use crate::utils::error::{PredictError, Result};

/// Localized result of one prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Vietnamese display name of the predicted class
    pub prediction: String,

    /// Remedy recommendations, in catalog order
    pub solutions: Vec<String>,
}

impl Diagnosis {
    /// Look up the display name and remedies of a registry class
    pub fn resolve(class_id: &str) -> Result<Self> {
        let prediction = display_name(class_id)?.to_string();
        let solutions = remedies_for(class_id)?
            .iter()
            .map(|s| s.to_string())
            .collect();

        Ok(Self {
            prediction,
            solutions,
        })
    }

    /// Serialize as JSON, on a single line unless `pretty`
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.map_err(|e| PredictError::Io(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CLASS_NAMES;

    #[test]
    fn test_tomato_healthy_json() {
        let diagnosis = Diagnosis::resolve("Tomato___healthy").unwrap();
        assert_eq!(
            diagnosis.to_json(false).unwrap(),
            r#"{"prediction":"Cà chua khỏe mạnh","solutions":["Tiếp tục chăm sóc tốt, tưới nước đều, bón phân cân đối và kiểm tra sâu bệnh."]}"#
        );
    }

    #[test]
    fn test_field_order() {
        let json = Diagnosis::resolve("Apple___Apple_scab")
            .unwrap()
            .to_json(true)
            .unwrap();
        let prediction = json.find("\"prediction\"").unwrap();
        let solutions = json.find("\"solutions\"").unwrap();
        assert!(prediction < solutions);
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_every_class_resolves() {
        for class in CLASS_NAMES {
            let diagnosis = Diagnosis::resolve(class).unwrap();
            assert!(!diagnosis.prediction.is_empty(), "{class}");
            assert!(!diagnosis.solutions.is_empty(), "{class}");

            let parsed: Diagnosis =
                serde_json::from_str(&diagnosis.to_json(false).unwrap()).unwrap();
            assert_eq!(parsed, diagnosis);
        }
    }

    #[test]
    fn test_unknown_class() {
        let err = Diagnosis::resolve("Tomato___Blight").unwrap_err();
        assert!(matches!(err, PredictError::MissingCatalogEntry { .. }));
    }
}
