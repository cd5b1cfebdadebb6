use serde::Deserialize;

use crate::interactions::counter::CounterTiming;
use crate::interactions::error::InteractionError;
use crate::interactions::visibility::ObserverOptions;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "interaction-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub auto_advance_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub stats_threshold: f64,
    /// Height of the fixed navbar, subtracted from in-page scroll targets.
    pub nav_offset_px: f64,
    pub navbar_scroll_threshold_px: f64,
    pub submit_delay_ms: u32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        InteractionConfig {
            auto_advance_ms: 5000,
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            stats_threshold: 0.5,
            nav_offset_px: 80.0,
            navbar_scroll_threshold_px: 50.0,
            submit_delay_ms: 1500,
        }
    }
}

impl InteractionConfig {
    pub fn from_json(json: &str) -> Result<Self, InteractionError> {
        let config: InteractionConfig = serde_json::from_str(json)
            .map_err(|e| InteractionError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InteractionError> {
        if self.auto_advance_ms == 0 {
            return Err(InteractionError::InvalidConfig(
                "auto_advance_ms must be positive".to_string(),
            ));
        }
        if self.counter_tick_ms == 0 {
            return Err(InteractionError::InvalidConfig(
                "counter_tick_ms must be positive".to_string(),
            ));
        }
        for (name, value) in [
            ("reveal_threshold", self.reveal_threshold),
            ("stats_threshold", self.stats_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(InteractionError::InvalidConfig(format!(
                    "{} must be within 0..=1, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn counter_timing(&self) -> CounterTiming {
        CounterTiming::new(self.counter_duration_ms, self.counter_tick_ms)
    }

    pub fn reveal_options(&self) -> ObserverOptions {
        ObserverOptions::new(self.reveal_threshold, self.reveal_root_margin.clone())
    }

    pub fn stats_options(&self) -> ObserverOptions {
        ObserverOptions::new(self.stats_threshold, "0px")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timings() {
        let config = InteractionConfig::default();
        assert_eq!(config.auto_advance_ms, 5000);
        assert_eq!(config.counter_timing(), CounterTiming::new(2000, 16));
        assert_eq!(config.reveal_options().root_margin, "0px 0px -50px 0px");
        assert_eq!(config.stats_options().threshold, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = InteractionConfig::from_json(r#"{ "auto_advance_ms": 8000 }"#).unwrap();
        assert_eq!(config.auto_advance_ms, 8000);
        assert_eq!(config.counter_duration_ms, 2000);
        assert_eq!(config.submit_delay_ms, 1500);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(InteractionConfig::from_json(r#"{ "counter_tick_ms": 0 }"#).is_err());
        assert!(InteractionConfig::from_json(r#"{ "auto_advance_ms": 0 }"#).is_err());
        let err = InteractionConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).unwrap_err();
        assert!(err.to_string().contains("reveal_threshold"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = InteractionConfig::from_json("{ auto_advance_ms: ").unwrap_err();
        assert!(matches!(err, InteractionError::InvalidConfig(_)));
    }
}
