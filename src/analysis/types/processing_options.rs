use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named numeric parameters handed to the engine alongside an image.
///
/// The mock engine accepts any mapping and consults none of it; the call
/// shape is kept stable for a real detection pipeline to slot into.
/// Insertion order is preserved so parameter listings stay predictable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    values: IndexMap<String, f64>,
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The product's balanced defaults for general landslide detection.
    pub fn standard() -> Self {
        let mut options = Self::new();
        options.insert("edge_detection_threshold", 30.0);
        options.insert("texture_analysis_depth", 65.0);
        options.insert("slope_threshold", 25.0);
        options.insert("moisture_detection", 50.0);
        options.insert("color_enhancement", 40.0);
        options
    }

    pub fn insert(&mut self, id: impl Into<String>, value: f64) {
        self.values.insert(id.into(), value);
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.values.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(id, value)| (id.as_str(), *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_carries_the_five_product_defaults() {
        let options = ProcessingOptions::standard();
        assert_eq!(options.len(), 5);
        assert_eq!(options.get("edge_detection_threshold"), Some(30.0));
        assert_eq!(options.get("texture_analysis_depth"), Some(65.0));
        assert_eq!(options.get("slope_threshold"), Some(25.0));
        assert_eq!(options.get("moisture_detection"), Some(50.0));
        assert_eq!(options.get("color_enhancement"), Some(40.0));
    }

    #[test]
    fn test_arbitrary_parameter_names_are_accepted() {
        let mut options = ProcessingOptions::new();
        options.insert("edgeDetectionThreshold", 30.0);
        options.insert("somethingNovel", 12.5);
        assert_eq!(options.get("edgeDetectionThreshold"), Some(30.0));
        assert_eq!(options.get("somethingNovel"), Some(12.5));
        assert_eq!(options.get("missing"), None);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let options = ProcessingOptions::standard();
        let ids: Vec<&str> = options.iter().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![
                "edge_detection_threshold",
                "texture_analysis_depth",
                "slope_threshold",
                "moisture_detection",
                "color_enhancement",
            ]
        );
    }
}
