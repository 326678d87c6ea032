use crate::block::{Block, BlockId};
use crate::config::HotelConfig;
use crate::date_range::DateRange;
use crate::error::BookingError;
use crate::reservation::{Reservation, ReservationId};
use crate::room::{Room, RoomId};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Index of the lowest-numbered room free for the whole of `date_range`.
pub fn first_fit(rooms: &[Room], date_range: &DateRange) -> Option<usize> {
    first_fits(rooms, date_range, 1).into_iter().next()
}

/// Indices of up to `count` free rooms, lowest-numbered first.
pub fn first_fits(rooms: &[Room], date_range: &DateRange, count: usize) -> Vec<usize> {
    rooms
        .iter()
        .enumerate()
        .filter(|(_, room)| room.is_available(date_range))
        .map(|(idx, _)| idx)
        .take(count)
        .collect()
}

pub struct Booker {
    rooms: Vec<Room>,
    reservations: Vec<Arc<Reservation>>,
    blocks: Vec<Arc<Block>>,
    next_reservation_id: ReservationId,
    next_block_id: BlockId,
    config: HotelConfig,
}

impl Default for Booker {
    fn default() -> Self {
        Booker::new()
    }
}

impl Booker {
    pub const ROOM_COUNT: RoomId = 20;

    pub fn new() -> Booker {
        Booker {
            rooms: (1..=Self::ROOM_COUNT).map(Room::new).collect(),
            reservations: vec![],
            blocks: vec![],
            next_reservation_id: 1,
            next_block_id: 1,
            config: HotelConfig::default(),
        }
    }

    pub fn with_config(config: HotelConfig) -> Result<Booker, BookingError> {
        config.validate()?;
        Ok(Booker {
            config,
            ..Booker::new()
        })
    }

    pub fn config(&self) -> &HotelConfig {
        &self.config
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn reservations(&self) -> &[Arc<Reservation>] {
        &self.reservations
    }

    pub fn blocks(&self) -> &[Arc<Block>] {
        &self.blocks
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id() == id)
    }

    pub fn reservation(&self, id: ReservationId) -> Option<&Arc<Reservation>> {
        self.reservations.iter().find(|r| r.id() == id)
    }

    pub fn block(&self, id: BlockId) -> Option<&Arc<Block>> {
        self.blocks.iter().find(|b| b.id() == id)
    }

    /// Reserves the first free room for `DD-MM-YYYY` dates at the default rate.
    pub fn reserve(&mut self, start_date: &str, end_date: &str) -> Result<Arc<Reservation>, BookingError> {
        self.reserve_at(start_date, end_date, self.config.default_rate)
    }

    pub fn reserve_at(
        &mut self,
        start_date: &str,
        end_date: &str,
        price: u32,
    ) -> Result<Arc<Reservation>, BookingError> {
        let date_range = DateRange::parse(start_date, end_date)?;
        self.reserve_range(&date_range, price)
    }

    pub fn reserve_range(&mut self, date_range: &DateRange, price: u32) -> Result<Arc<Reservation>, BookingError> {
        let idx = self.select_room(date_range)?;
        let reservation = Reservation::new(
            self.next_reservation_id,
            *date_range,
            &mut self.rooms[idx],
            price,
            None,
        )?;
        self.next_reservation_id += 1;

        info!(
            reservation = reservation.id(),
            room = reservation.room_id(),
            range = %date_range,
            price,
            "reservation created"
        );
        self.reservations.push(reservation.clone());
        self.assert_invariants();
        Ok(reservation)
    }

    /// Room `reserve` would pick for `date_range`, without booking it.
    pub fn open_room(&self, date_range: &DateRange) -> Result<&Room, BookingError> {
        let idx = self.select_room(date_range)?;
        Ok(&self.rooms[idx])
    }

    pub fn available_rooms(&self, date_range: &DateRange) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| room.is_available(date_range))
            .collect()
    }

    pub fn reservations_by_date(&self, date_range: &DateRange) -> Vec<&Arc<Reservation>> {
        self.reservations
            .iter()
            .filter(|r| r.overlaps(date_range))
            .collect()
    }

    /// Reserves `room_count` rooms for the same stay at a shared rate. Either
    /// every room is booked or nothing changes.
    pub fn reserve_block(
        &mut self,
        date_range: &DateRange,
        room_count: usize,
        rate: u32,
    ) -> Result<Arc<Block>, BookingError> {
        let max = self.config.max_block_rooms;
        if room_count == 0 || room_count > max {
            return Err(BookingError::InvalidBlockSize {
                requested: room_count,
                max,
            });
        }
        if rate == 0 {
            return Err(BookingError::InvalidRate);
        }
        if date_range.nights() == 0 {
            return Err(BookingError::EmptyStay { range: *date_range });
        }

        let chosen = first_fits(&self.rooms, date_range, room_count);
        if chosen.len() < room_count {
            warn!(
                range = %date_range,
                requested = room_count,
                available = chosen.len(),
                "not enough rooms for block"
            );
            return Err(BookingError::NoAvailableRoom { range: *date_range });
        }

        let room_ids = chosen.iter().map(|idx| self.rooms[*idx].id()).collect();
        let block = Arc::new(Block::new(self.next_block_id, *date_range, rate, room_ids));

        // every chosen room was checked free above and appears once
        for idx in chosen {
            let reservation = Reservation::new(
                self.next_reservation_id,
                *date_range,
                &mut self.rooms[idx],
                rate,
                Some(block.clone()),
            )?;
            self.next_reservation_id += 1;
            self.reservations.push(reservation);
        }
        self.next_block_id += 1;

        info!(
            block = block.id(),
            rooms = ?block.room_ids(),
            range = %date_range,
            rate,
            "block created"
        );
        self.blocks.push(block.clone());
        self.assert_invariants();
        Ok(block)
    }

    pub fn block_reservations(&self, block_id: BlockId) -> Result<Vec<&Arc<Reservation>>, BookingError> {
        if self.block(block_id).is_none() {
            return Err(BookingError::UnknownBlock(block_id));
        }
        Ok(self
            .reservations
            .iter()
            .filter(|r| r.block_id() == Some(block_id))
            .collect())
    }

    pub fn cost_of(&self, reservation_id: ReservationId) -> Result<u64, BookingError> {
        self.reservation(reservation_id)
            .map(|r| r.total_price())
            .ok_or(BookingError::UnknownReservation(reservation_id))
    }

    fn select_room(&self, date_range: &DateRange) -> Result<usize, BookingError> {
        match first_fit(&self.rooms, date_range) {
            Some(idx) => {
                debug!(range = %date_range, room = self.rooms[idx].id(), "first fit");
                Ok(idx)
            }
            None => {
                warn!(range = %date_range, "no room available");
                Err(BookingError::NoAvailableRoom { range: *date_range })
            }
        }
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        debug_assert!(
            self.reservations.windows(2).all(|rs| rs[0].id() < rs[1].id()),
            "Reservation ids strictly increasing invariant violated"
        );

        debug_assert!(
            self.reservations.iter().all(|r| {
                self.room(r.room_id())
                    .is_some_and(|room| room.reservations().iter().any(|x| Arc::ptr_eq(x, r)))
            }),
            "Reservation <-> room link invariant violated"
        );

        debug_assert!(
            self.rooms.iter().all(|room| {
                let rs = room.reservations();
                rs.iter().enumerate().all(|(i, a)| {
                    rs.iter().skip(i + 1).all(|b| !a.overlaps(&b.date_range()))
                })
            }),
            "No overlapping reservations per room invariant violated"
        );

        debug_assert!(
            self.reservations.iter().all(|r| {
                r.block().is_none_or(|b| {
                    b.room_ids().contains(&r.room_id()) && b.date_range() == r.date_range()
                })
            }),
            "Block membership invariant violated"
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_invariants(&self) {}
}
