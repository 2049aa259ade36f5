use crate::layout::grid_dimensions;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tiling configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileOptions {
    /// Real-world poster width in inches
    pub poster_width_in: u32,
    /// Real-world poster length (height) in inches
    pub poster_length_in: u32,
    /// Crop geometry policy for multi-page sources
    #[cfg_attr(feature = "serde", serde(default))]
    pub page_geometry: PageGeometry,
}

impl TileOptions {
    pub fn new(poster_width_in: u32, poster_length_in: u32) -> Self {
        Self {
            poster_width_in,
            poster_length_in,
            ..Default::default()
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| TileError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TileError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.poster_width_in == 0 {
            return Err(TileError::Config(
                "Poster width must be a positive number of inches".to_string(),
            ));
        }
        if self.poster_length_in == 0 {
            return Err(TileError::Config(
                "Poster length must be a positive number of inches".to_string(),
            ));
        }

        grid_dimensions(self.poster_width_in, self.poster_length_in)?;
        Ok(())
    }
}
