use crate::analysis::types::ProcessingOptions;

pub const EDGE_DETECTION_THRESHOLD: &str = "edge_detection_threshold";
pub const TEXTURE_ANALYSIS_DEPTH: &str = "texture_analysis_depth";
pub const SLOPE_THRESHOLD: &str = "slope_threshold";
pub const MOISTURE_DETECTION: &str = "moisture_detection";
pub const COLOR_ENHANCEMENT: &str = "color_enhancement";

/// One tunable analysis parameter, bounded for slider surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct TunableParameter {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl TunableParameter {
    fn clamped(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Named parameter profiles shipped with the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Standard,
    Detailed,
    Conservative,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Standard, Preset::Detailed, Preset::Conservative];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Standard => "Standard Analysis",
            Preset::Detailed => "Detailed Analysis",
            Preset::Conservative => "Conservative Analysis",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::Standard => "Balanced settings for general landslide detection",
            Preset::Detailed => "Higher sensitivity for detailed examination",
            Preset::Conservative => "Reduce false positives with conservative thresholds",
        }
    }

    fn values(&self) -> [(&'static str, f64); 5] {
        match self {
            Preset::Standard => [
                (EDGE_DETECTION_THRESHOLD, 30.0),
                (TEXTURE_ANALYSIS_DEPTH, 65.0),
                (SLOPE_THRESHOLD, 25.0),
                (MOISTURE_DETECTION, 50.0),
                (COLOR_ENHANCEMENT, 40.0),
            ],
            Preset::Detailed => [
                (EDGE_DETECTION_THRESHOLD, 20.0),
                (TEXTURE_ANALYSIS_DEPTH, 85.0),
                (SLOPE_THRESHOLD, 15.0),
                (MOISTURE_DETECTION, 70.0),
                (COLOR_ENHANCEMENT, 60.0),
            ],
            Preset::Conservative => [
                (EDGE_DETECTION_THRESHOLD, 45.0),
                (TEXTURE_ANALYSIS_DEPTH, 50.0),
                (SLOPE_THRESHOLD, 35.0),
                (MOISTURE_DETECTION, 40.0),
                (COLOR_ENHANCEMENT, 30.0),
            ],
        }
    }
}

/// State for the processing-options panel: five bounded parameters plus the
/// preset that last populated them, if any.
#[derive(Debug, Clone)]
pub struct OptionsForm {
    parameters: Vec<TunableParameter>,
    active_preset: Option<Preset>,
}

impl Default for OptionsForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsForm {
    /// A form at the standard defaults with no preset marked active.
    pub fn new() -> Self {
        Self {
            parameters: vec![
                TunableParameter {
                    id: EDGE_DETECTION_THRESHOLD,
                    name: "Edge Detection Threshold",
                    description: "Sensitivity for detecting edges in the image",
                    value: 30.0,
                    min: 0.0,
                    max: 100.0,
                    step: 1.0,
                },
                TunableParameter {
                    id: TEXTURE_ANALYSIS_DEPTH,
                    name: "Texture Analysis Depth",
                    description: "Level of detail in texture analysis",
                    value: 65.0,
                    min: 0.0,
                    max: 100.0,
                    step: 1.0,
                },
                TunableParameter {
                    id: SLOPE_THRESHOLD,
                    name: "Slope Threshold",
                    description: "Minimum slope angle to consider as a risk factor",
                    value: 25.0,
                    min: 0.0,
                    max: 90.0,
                    step: 1.0,
                },
                TunableParameter {
                    id: MOISTURE_DETECTION,
                    name: "Moisture Detection Sensitivity",
                    description: "Sensitivity for detecting soil moisture content",
                    value: 50.0,
                    min: 0.0,
                    max: 100.0,
                    step: 1.0,
                },
                TunableParameter {
                    id: COLOR_ENHANCEMENT,
                    name: "Color Enhancement",
                    description: "Enhances colors to better highlight risk areas",
                    value: 40.0,
                    min: 0.0,
                    max: 100.0,
                    step: 1.0,
                },
            ],
            active_preset: None,
        }
    }

    pub fn parameters(&self) -> &[TunableParameter] {
        &self.parameters
    }

    pub fn active_preset(&self) -> Option<Preset> {
        self.active_preset
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.parameters
            .iter()
            .find(|parameter| parameter.id == id)
            .map(|parameter| parameter.value)
    }

    /// Set one parameter, clamped into its bounds. A manual edit turns off
    /// whichever preset was active. Unknown ids report `false`.
    pub fn set(&mut self, id: &str, value: f64) -> bool {
        match self
            .parameters
            .iter_mut()
            .find(|parameter| parameter.id == id)
        {
            Some(parameter) => {
                parameter.value = parameter.clamped(value);
                self.active_preset = None;
                true
            }
            None => false,
        }
    }

    /// Overwrite every parameter with the preset's values and mark it
    /// active.
    pub fn apply_preset(&mut self, preset: Preset) {
        for (id, value) in preset.values() {
            if let Some(parameter) = self
                .parameters
                .iter_mut()
                .find(|parameter| parameter.id == id)
            {
                parameter.value = parameter.clamped(value);
            }
        }
        self.active_preset = Some(preset);
        tracing::debug!("Applied the {} preset", preset.name());
    }

    /// Snapshot the current values into the mapping handed to the engine.
    pub fn to_options(&self) -> ProcessingOptions {
        let mut options = ProcessingOptions::new();
        for parameter in &self.parameters {
            options.insert(parameter.id, parameter.value);
        }
        options
    }
}
