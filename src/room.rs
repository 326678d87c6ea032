use crate::date_range::DateRange;
use crate::reservation::Reservation;
use std::sync::Arc;

pub type RoomId = u32;

#[derive(Debug)]
pub struct Room {
    id: RoomId,
    reservations: Vec<Arc<Reservation>>,
}

impl Room {
    pub fn new(id: RoomId) -> Room {
        Room {
            id,
            reservations: vec![],
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Reservations attached to this room, in the order they were made.
    pub fn reservations(&self) -> &[Arc<Reservation>] {
        &self.reservations
    }

    pub fn is_available(&self, date_range: &DateRange) -> bool {
        self.reservations.iter().all(|r| !r.overlaps(date_range))
    }

    // Only `Reservation::new` links a record to its room, once, after validation.
    pub(crate) fn attach_reservation(&mut self, reservation: Arc<Reservation>) {
        debug_assert_eq!(self.id, reservation.room_id());
        self.reservations.push(reservation);
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Room {}
