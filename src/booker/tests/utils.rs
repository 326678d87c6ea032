use crate::booker::Booker;
use crate::date_range::DateRange;
use crate::reservation::Reservation;
use chrono::{Duration, NaiveDate};
use proptest::prelude::Strategy;
use std::sync::Arc;

pub const START: &str = "03-04-2019";
pub const END: &str = "06-04-2019";

pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::parse(start, end).unwrap()
}

pub fn reserve_many(booker: &mut Booker, count: usize, start: &str, end: &str) -> Vec<Arc<Reservation>> {
    (0..count)
        .map(|_| booker.reserve(start, end).unwrap())
        .collect()
}

pub fn room_ids(booker: &Booker, date_range: &DateRange) -> Vec<u32> {
    booker
        .available_rooms(date_range)
        .iter()
        .map(|r| r.id())
        .collect()
}

pub fn arb_stay() -> impl Strategy<Value = DateRange> {
    (0..60i64, 1..10i64).prop_map(|(offset, nights)| {
        let base = NaiveDate::from_ymd_opt(2019, 4, 1).unwrap();
        let start = base + Duration::days(offset);
        DateRange::new(start, start + Duration::days(nights)).unwrap()
    })
}
