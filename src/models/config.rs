use particle_bitmap::{BitmapEncoder, BlockStyle};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Image conversion settings
    #[serde(default)]
    pub image: ImageConfig,

    /// HTTP client settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Article-to-document conversion settings
    #[serde(default)]
    pub article: ArticleConfig,
}

/// Bounding box and presentation of converted images
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ImageConfig {
    pub max_width: u32,
    pub max_height: u32,
    pub scale: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_width: 300,
            max_height: 180,
            scale: 1,
            margin_top: 8,
            margin_bottom: 8,
        }
    }
}

impl ImageConfig {
    /// Reject settings that cannot describe a drawable image
    pub fn validate(&self) -> Result<(), String> {
        if self.max_width == 0 || self.max_height == 0 {
            return Err(format!(
                "image.max_width and image.max_height must be positive, got {}x{}",
                self.max_width, self.max_height
            ));
        }
        if self.scale == 0 {
            return Err("image.scale must be positive".to_string());
        }
        Ok(())
    }

    pub fn style(&self) -> BlockStyle {
        BlockStyle {
            scale: self.scale,
            margin_top: self.margin_top,
            margin_bottom: self.margin_bottom,
        }
    }

    /// Build the bitmap encoder these settings describe
    pub fn encoder(&self) -> BitmapEncoder {
        BitmapEncoder::new()
            .max_size(self.max_width, self.max_height)
            .style(self.style())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!("particle-news/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ArticleConfig {
    /// Longest document title, in characters, before truncation
    pub title_max_len: usize,

    /// Drop the last body paragraph (site fine print)
    pub drop_last_paragraph: bool,
}

impl Default for ArticleConfig {
    fn default() -> Self {
        Self {
            title_max_len: 40,
            drop_last_paragraph: true,
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let config: Self = serde_yaml::from_str(content)?;
        config
            .image
            .validate()
            .map_err(<serde_yaml::Error as serde::de::Error>::custom)?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        max_width = config.image.max_width,
                        max_height = config.image.max_height,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
