use crate::date_range::DateRange;
use crate::room::RoomId;
use serde::Serialize;
use std::fmt;

pub type BlockId = u64;

/// A group of rooms reserved together for one stay under a negotiated rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    id: BlockId,
    date_range: DateRange,
    rate: u32,
    room_ids: Vec<RoomId>,
}

impl Block {
    pub(crate) fn new(id: BlockId, date_range: DateRange, rate: u32, room_ids: Vec<RoomId>) -> Block {
        Block {
            id,
            date_range,
            rate,
            room_ids,
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    pub fn room_ids(&self) -> &[RoomId] {
        &self.room_ids
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BLOCK_{}", self.id)
    }
}
