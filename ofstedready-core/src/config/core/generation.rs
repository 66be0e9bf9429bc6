use crate::config::constants::sampling;
use crate::gemini::models::{HarmBlockThreshold, HarmCategory, SafetySetting};
use serde::{Deserialize, Serialize};

/// Sampling and safety-filter settings sent with every request
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationSettings {
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Nucleus-sampling threshold
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    #[serde(default)]
    pub stop_sequences: Vec<String>,

    /// Threshold applied to every entry in `safety_categories`
    #[serde(default)]
    pub safety_threshold: HarmBlockThreshold,

    #[serde(default = "default_safety_categories")]
    pub safety_categories: Vec<HarmCategory>,
}

fn default_temperature() -> f64 {
    sampling::DEFAULT_TEMPERATURE
}
fn default_top_p() -> f64 {
    sampling::DEFAULT_TOP_P
}
fn default_safety_categories() -> Vec<HarmCategory> {
    HarmCategory::ALL.to_vec()
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            stop_sequences: Vec::new(),
            safety_threshold: HarmBlockThreshold::default(),
            safety_categories: default_safety_categories(),
        }
    }
}

impl GenerationSettings {
    pub fn safety_settings(&self) -> Vec<SafetySetting> {
        self.safety_categories
            .iter()
            .map(|category| SafetySetting {
                category: *category,
                threshold: self.safety_threshold,
            })
            .collect()
    }
}
