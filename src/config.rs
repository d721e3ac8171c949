use crate::error::{config_error, BleeperError, Result};
use crate::matcher::{parse_words, MatchMode, MatchOptions};

/// Bleep sound variants offered by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BleepSound {
    Bleep,
    Brown,
    Dolphin,
    Trex,
    Silence,
}

impl BleepSound {
    pub fn as_str(&self) -> &'static str {
        match self {
            BleepSound::Bleep => "bleep",
            BleepSound::Brown => "brown",
            BleepSound::Dolphin => "dolphin",
            BleepSound::Trex => "trex",
            BleepSound::Silence => "silence",
        }
    }
}

impl std::str::FromStr for BleepSound {
    type Err = BleeperError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bleep" => Ok(BleepSound::Bleep),
            "brown" => Ok(BleepSound::Brown),
            "dolphin" => Ok(BleepSound::Dolphin),
            "trex" => Ok(BleepSound::Trex),
            "silence" => Ok(BleepSound::Silence),
            _ => Err(config_error(
                "bleep_sound",
                format!(
                    "Invalid sound '{}'. Valid options: bleep, brown, dolphin, trex, silence",
                    s
                ),
            )),
        }
    }
}

/// Configuration for one censoring run
#[derive(Debug, Clone)]
pub struct Config {
    /// Normalized match words (lower-cased, trimmed, empties discarded)
    pub words: Vec<String>,
    pub mode: MatchMode,
    pub fuzzy_distance: usize,
    /// Symmetric expansion applied around every censor interval, in seconds
    pub buffer: f64,
    pub bleep_sound: BleepSound,
    /// Bleep volume as a percentage, 0-100
    pub bleep_volume: u8,
    /// Gain left on the original audio under the bleep, 0.0-1.0
    pub original_volume_reduction: f32,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            mode: self.mode,
            fuzzy_distance: self.fuzzy_distance,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(1..=3).contains(&self.fuzzy_distance) {
            return Err(config_error(
                "fuzzy_distance",
                format!(
                    "Fuzzy distance must be between 1 and 3, got {}",
                    self.fuzzy_distance
                ),
            ));
        }

        if !(0.0..=5.0).contains(&self.buffer) {
            return Err(config_error(
                "buffer",
                format!(
                    "Buffer must be between 0.0 and 5.0 seconds, got {}",
                    self.buffer
                ),
            ));
        }

        if self.bleep_volume > 100 {
            return Err(config_error(
                "bleep_volume",
                format!("Volume must be between 0 and 100, got {}", self.bleep_volume),
            ));
        }

        if !(0.0..=1.0).contains(&self.original_volume_reduction) {
            return Err(config_error(
                "original_volume_reduction",
                format!(
                    "Original volume must be between 0.0 and 1.0, got {}",
                    self.original_volume_reduction
                ),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            mode: MatchMode::default(),
            fuzzy_distance: 1,
            buffer: 0.0,
            bleep_sound: BleepSound::Bleep,
            bleep_volume: 80,
            original_volume_reduction: 0.0,
        }
    }
}

/// Builder pattern for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    words: Option<Vec<String>>,
    mode: Option<MatchMode>,
    fuzzy_distance: Option<usize>,
    buffer: Option<f64>,
    bleep_sound: Option<BleepSound>,
    bleep_volume: Option<u8>,
    original_volume_reduction: Option<f32>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Words arrive as one comma-separated line and are normalized here. An
    /// empty result is allowed; matching nothing is a valid outcome.
    pub fn words(mut self, input: &str) -> Self {
        self.words = Some(parse_words(input));
        self
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn fuzzy_distance(mut self, distance: usize) -> Result<Self> {
        if !(1..=3).contains(&distance) {
            return Err(config_error(
                "fuzzy_distance",
                format!("Fuzzy distance must be between 1 and 3, got {}", distance),
            ));
        }
        self.fuzzy_distance = Some(distance);
        Ok(self)
    }

    pub fn buffer(mut self, buffer: f64) -> Result<Self> {
        if !(0.0..=5.0).contains(&buffer) {
            return Err(config_error(
                "buffer",
                format!("Buffer must be between 0.0 and 5.0 seconds, got {}", buffer),
            ));
        }
        self.buffer = Some(buffer);
        Ok(self)
    }

    pub fn bleep_sound(mut self, sound: BleepSound) -> Self {
        self.bleep_sound = Some(sound);
        self
    }

    pub fn bleep_volume(mut self, volume: u8) -> Result<Self> {
        if volume > 100 {
            return Err(config_error(
                "bleep_volume",
                format!("Volume must be between 0 and 100, got {}", volume),
            ));
        }
        self.bleep_volume = Some(volume);
        Ok(self)
    }

    pub fn original_volume_reduction(mut self, value: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(config_error(
                "original_volume_reduction",
                format!("Original volume must be between 0.0 and 1.0, got {}", value),
            ));
        }
        self.original_volume_reduction = Some(value);
        Ok(self)
    }

    pub fn build(self) -> Result<Config> {
        let defaults = Config::default();
        let config = Config {
            words: self.words.unwrap_or(defaults.words),
            mode: self.mode.unwrap_or(defaults.mode),
            fuzzy_distance: self.fuzzy_distance.unwrap_or(defaults.fuzzy_distance),
            buffer: self.buffer.unwrap_or(defaults.buffer),
            bleep_sound: self.bleep_sound.unwrap_or(defaults.bleep_sound),
            bleep_volume: self.bleep_volume.unwrap_or(defaults.bleep_volume),
            original_volume_reduction: self
                .original_volume_reduction
                .unwrap_or(defaults.original_volume_reduction),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bleep_sound_parsing() {
        assert_eq!("trex".parse::<BleepSound>().unwrap(), BleepSound::Trex);
        assert_eq!("SILENCE".parse::<BleepSound>().unwrap(), BleepSound::Silence);
        assert!("boom".parse::<BleepSound>().is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::builder().build().unwrap();

        assert!(config.words.is_empty());
        assert!(config.mode.exact);
        assert!(!config.mode.partial);
        assert_eq!(config.fuzzy_distance, 1);
        assert_eq!(config.buffer, 0.0);
        assert_eq!(config.bleep_sound, BleepSound::Bleep);
        assert_eq!(config.bleep_volume, 80);
    }

    #[test]
    fn test_config_builder_normalizes_words() {
        let config = Config::builder()
            .words(" Shit, DAMN ,, hell ")
            .build()
            .unwrap();

        assert_eq!(config.words, vec!["shit", "damn", "hell"]);
    }

    #[test]
    fn test_fuzzy_distance_bounds() {
        assert!(Config::builder().fuzzy_distance(0).is_err());
        assert!(Config::builder().fuzzy_distance(4).is_err());

        let config = Config::builder()
            .fuzzy_distance(2)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.fuzzy_distance, 2);
    }

    #[test]
    fn test_volume_bounds() {
        assert!(Config::builder().bleep_volume(101).is_err());
        assert!(Config::builder().original_volume_reduction(1.5).is_err());
        assert!(Config::builder().original_volume_reduction(-0.1).is_err());
    }

    #[test]
    fn test_buffer_bounds() {
        assert!(Config::builder().buffer(-0.1).is_err());
        assert!(Config::builder().buffer(5.1).is_err());
        assert!(Config::builder().buffer(0.5).is_ok());
    }

    #[test]
    fn test_validate_catches_hand_built_config() {
        let config = Config {
            fuzzy_distance: 9,
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }
}
