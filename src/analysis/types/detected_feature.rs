use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Landslide-related phenomena the analysis can annotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    SlopeFailure,
    DebrisFlow,
    Rockfall,
    EarthFlow,
    PotentialTrigger,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 5] = [
        FeatureKind::SlopeFailure,
        FeatureKind::DebrisFlow,
        FeatureKind::Rockfall,
        FeatureKind::EarthFlow,
        FeatureKind::PotentialTrigger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::SlopeFailure => "slope_failure",
            FeatureKind::DebrisFlow => "debris_flow",
            FeatureKind::Rockfall => "rockfall",
            FeatureKind::EarthFlow => "earth_flow",
            FeatureKind::PotentialTrigger => "potential_trigger",
        }
    }

    /// Annotation copy for each kind. Same kind, same text.
    pub fn description(&self) -> &'static str {
        match self {
            FeatureKind::SlopeFailure => {
                "Area with potential slope instability and surface deformation"
            }
            FeatureKind::DebrisFlow => {
                "Channel with loose sediment susceptible to flow during precipitation"
            }
            FeatureKind::Rockfall => {
                "Steep slope with fractured rock formations prone to falling"
            }
            FeatureKind::EarthFlow => "Slow-moving mass of saturated soil and regolith",
            FeatureKind::PotentialTrigger => {
                "Environmental condition that could initiate landslide activity"
            }
        }
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rectangular region of the source image, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    pub fn contains_point(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// One annotated region of interest inside an analyzed image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedFeature {
    pub id: Uuid,
    pub kind: FeatureKind,
    /// Percentage in [0, 100].
    pub confidence: f64,
    pub region: BoundingBox,
    pub description: String,
}

impl DetectedFeature {
    pub fn new(kind: FeatureKind, confidence: f64, region: BoundingBox) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            confidence,
            region,
            description: kind.description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_wire_name_and_description() {
        for kind in FeatureKind::ALL {
            assert!(!kind.as_str().is_empty());
            assert!(!kind.description().is_empty());
        }
    }

    #[test]
    fn test_wire_names_match_serde_encoding() {
        for kind in FeatureKind::ALL {
            let encoded = serde_json::to_string(&kind).unwrap();
            assert_eq!(encoded, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_new_feature_uses_the_fixed_description() {
        let feature = DetectedFeature::new(
            FeatureKind::Rockfall,
            96.7,
            BoundingBox::new(320, 280, 110, 70),
        );
        assert_eq!(
            feature.description,
            "Steep slope with fractured rock formations prone to falling"
        );
    }

    #[test]
    fn test_bounding_box_geometry() {
        let region = BoundingBox::new(250, 320, 120, 80);
        assert_eq!(region.area(), 9600);
        assert!(region.contains_point(250, 320));
        assert!(region.contains_point(369, 399));
        assert!(!region.contains_point(370, 320));
        assert!(!region.contains_point(249, 320));
    }
}
