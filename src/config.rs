use crate::booker::Booker;
use crate::error::BookingError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    /// Nightly rate applied when a reservation does not name one.
    pub default_rate: u32,
    pub max_block_rooms: usize,
}

impl Default for HotelConfig {
    fn default() -> Self {
        HotelConfig {
            default_rate: 200,
            max_block_rooms: 5,
        }
    }
}

impl HotelConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, BookingError> {
        let data = std::fs::read_to_string(path)?;
        let config: HotelConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BookingError> {
        if self.default_rate == 0 {
            return Err(BookingError::Config(
                "default_rate must be positive".to_string(),
            ));
        }
        if self.max_block_rooms == 0 || self.max_block_rooms > Booker::ROOM_COUNT as usize {
            return Err(BookingError::Config(format!(
                "max_block_rooms must be between 1 and {}",
                Booker::ROOM_COUNT
            )));
        }
        Ok(())
    }
}
