use crate::block::{Block, BlockId};
use crate::date_range::DateRange;
use crate::error::BookingError;
use crate::room::{Room, RoomId};
use serde::Serialize;
use std::sync::Arc;

pub type ReservationId = u64;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Reservation {
    id: ReservationId,
    date_range: DateRange,
    room_id: RoomId,
    price: u32,
    block: Option<Arc<Block>>,
}

impl Reservation {
    /// Books `room` for `date_range` at a nightly `price` and links the new
    /// record into the room. Fails without touching the room when the range
    /// has no nights or another reservation on it overlaps the range.
    pub fn new(
        id: ReservationId,
        date_range: DateRange,
        room: &mut Room,
        price: u32,
        block: Option<Arc<Block>>,
    ) -> Result<Arc<Reservation>, BookingError> {
        if price == 0 {
            return Err(BookingError::InvalidRate);
        }
        if date_range.nights() == 0 {
            return Err(BookingError::EmptyStay { range: date_range });
        }
        if !room.is_available(&date_range) {
            return Err(BookingError::RoomUnavailable {
                room: room.id(),
                range: date_range,
            });
        }

        let reservation = Arc::new(Reservation {
            id,
            date_range,
            room_id: room.id(),
            price,
            block,
        });
        room.attach_reservation(reservation.clone());
        Ok(reservation)
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn block(&self) -> Option<&Arc<Block>> {
        self.block.as_ref()
    }

    pub fn block_id(&self) -> Option<BlockId> {
        self.block.as_ref().map(|b| b.id())
    }

    pub fn overlaps(&self, date_range: &DateRange) -> bool {
        self.date_range.overlaps(date_range)
    }

    pub fn total_price(&self) -> u64 {
        self.price as u64 * self.date_range.nights() as u64
    }
}
