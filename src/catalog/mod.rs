//! Class registry and disease catalog
//!
//! The registry is the ordered list of class identifiers the network was
//! trained on: output index `i` of the classifier means `CLASS_NAMES[i]`.
//! The catalog maps each identifier to a Vietnamese display name and a list of
//! remedies. All of it is immutable static data; lookups go through maps
//! built once on first use.

mod vi;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::utils::error::{PredictError, Result};

/// Number of classes the classifier distinguishes
pub const NUM_CLASSES: usize = 38;

/// Class names in training order
/// Format: "Plant___Disease" or "Plant___healthy"
pub const CLASS_NAMES: [&str; NUM_CLASSES] = [
    "Apple___Apple_scab",
    "Apple___Black_rot",
    "Apple___Cedar_apple_rust",
    "Apple___healthy",
    "Blueberry___healthy",
    "Cherry_(including_sour)___Powdery_mildew",
    "Cherry_(including_sour)___healthy",
    "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot",
    "Corn_(maize)___Common_rust_",
    "Corn_(maize)___Northern_Leaf_Blight",
    "Corn_(maize)___healthy",
    "Grape___Black_rot",
    "Grape___Esca_(Black_Measles)",
    "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)",
    "Grape___healthy",
    "Orange___Haunglongbing_(Citrus_greening)",
    "Peach___Bacterial_spot",
    "Peach___healthy",
    "Pepper,_bell___Bacterial_spot",
    "Pepper,_bell___healthy",
    "Potato___Early_blight",
    "Potato___Late_blight",
    "Potato___healthy",
    "Raspberry___healthy",
    "Soybean___healthy",
    "Squash___Powdery_mildew",
    "Strawberry___Leaf_scorch",
    "Strawberry___healthy",
    "Tomato___Bacterial_spot",
    "Tomato___Early_blight",
    "Tomato___Late_blight",
    "Tomato___Leaf_Mold",
    "Tomato___Septoria_leaf_spot",
    "Tomato___Spider_mites Two-spotted_spider_mite",
    "Tomato___Target_Spot",
    "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
    "Tomato___Tomato_mosaic_virus",
    "Tomato___healthy",
];

/// Get the class name for a given label index
pub fn class_name(label: usize) -> Option<&'static str> {
    CLASS_NAMES.get(label).copied()
}

/// Get the label index for a given class name
pub fn class_index(name: &str) -> Option<usize> {
    CLASS_NAMES.iter().position(|&n| n == name)
}

/// Check if a class represents a healthy plant (not diseased)
pub fn is_healthy_class(label: usize) -> bool {
    CLASS_NAMES
        .get(label)
        .map(|name| name.ends_with("healthy"))
        .unwrap_or(false)
}

/// Get the plant name from a class (e.g., "Tomato" from "Tomato___Bacterial_spot")
pub fn plant_name(label: usize) -> Option<&'static str> {
    CLASS_NAMES
        .get(label)
        .and_then(|name| name.split("___").next())
}

fn names() -> &'static HashMap<&'static str, &'static str> {
    static NAMES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    NAMES.get_or_init(|| vi::DISEASE_NAMES.iter().copied().collect())
}

fn remedies() -> &'static HashMap<&'static str, &'static [&'static str]> {
    static REMEDIES: OnceLock<HashMap<&'static str, &'static [&'static str]>> = OnceLock::new();
    REMEDIES.get_or_init(|| vi::REMEDIES.iter().copied().collect())
}

/// Localized display name for a class identifier
pub fn display_name(class: &str) -> Result<&'static str> {
    names()
        .get(class)
        .copied()
        .ok_or_else(|| PredictError::MissingCatalogEntry {
            class: class.to_string(),
            table: "name",
        })
}

/// Remedies for a class identifier, in presentation order
pub fn remedies_for(class: &str) -> Result<&'static [&'static str]> {
    match remedies().get(class) {
        Some(items) if !items.is_empty() => Ok(*items),
        _ => Err(PredictError::MissingCatalogEntry {
            class: class.to_string(),
            table: "remedy",
        }),
    }
}

/// Check that the registry and both tables describe exactly the same classes
pub fn verify_catalog() -> Result<()> {
    for class in CLASS_NAMES {
        display_name(class)?;
        remedies_for(class)?;
    }

    let extra = names()
        .keys()
        .chain(remedies().keys())
        .find(|key| class_index(key).is_none());
    if let Some(key) = extra {
        return Err(PredictError::MissingCatalogEntry {
            class: key.to_string(),
            table: "class registry",
        });
    }

    Ok(())
}
