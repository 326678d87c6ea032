use crate::booker::tests::utils::{END, START, range, reserve_many, room_ids};
use crate::booker::{Booker, first_fit, first_fits};
use crate::error::BookingError;

#[test]
fn test_open_room_previews_reserve() {
    let mut booker = Booker::new();
    let date_range = range(START, END);
    let assigned = booker.open_room(&date_range).unwrap().id();

    assert!(booker.room(assigned).unwrap().is_available(&date_range));

    let reservation = booker.reserve(START, END).unwrap();
    assert_eq!(assigned, reservation.room_id());
    assert!(!booker.room(assigned).unwrap().is_available(&date_range));
    assert_eq!(2, booker.open_room(&date_range).unwrap().id());
}

#[test]
fn test_open_room_does_not_reserve() {
    let booker = Booker::new();
    booker.open_room(&range(START, END)).unwrap();
    assert!(booker.reservations().is_empty());
}

#[test]
fn test_open_room_none_available() {
    let mut booker = Booker::new();
    reserve_many(&mut booker, 20, START, END);

    let date_range = range("04-04-2019", "05-04-2019");
    assert_eq!(
        Err(BookingError::NoAvailableRoom { range: date_range }),
        booker.open_room(&date_range).map(|r| r.id())
    );
}

#[test]
fn test_first_fit_picks_lowest_free_room() {
    let mut booker = Booker::new();
    booker.reserve(START, END).unwrap();
    booker.reserve("01-04-2019", "04-04-2019").unwrap();
    booker.reserve("05-04-2019", "07-04-2019").unwrap();

    assert_eq!(Some(0), first_fit(booker.rooms(), &range("06-04-2019", "07-04-2019")));
    assert_eq!(Some(2), first_fit(booker.rooms(), &range("04-04-2019", "06-04-2019")));
    assert_eq!(None, first_fit(&[], &range(START, END)));
}

#[test]
fn test_first_fits_agrees_with_first_fit() {
    let mut booker = Booker::new();
    booker.reserve(START, END).unwrap();
    booker.reserve("10-04-2019", "12-04-2019").unwrap();
    booker.reserve(START, END).unwrap();

    let stay = range("04-04-2019", "07-04-2019");
    let chosen = first_fits(booker.rooms(), &stay, 3);
    assert_eq!(vec![2, 3, 4], chosen);
    assert_eq!(chosen.first().copied(), first_fit(booker.rooms(), &stay));
    assert_eq!(18, first_fits(booker.rooms(), &stay, 25).len());
    assert!(first_fits(booker.rooms(), &stay, 0).is_empty());
}

#[test]
fn test_available_rooms_all_free() {
    let booker = Booker::new();
    let available = room_ids(&booker, &range(START, END));
    assert_eq!((1..=20).collect::<Vec<u32>>(), available);
}

#[test]
fn test_available_rooms_excludes_overlapping() {
    let mut booker = Booker::new();
    booker.reserve(START, END).unwrap();
    booker.reserve(START, END).unwrap();
    booker.reserve("10-04-2019", "12-04-2019").unwrap();

    let available = room_ids(&booker, &range("05-04-2019", "11-04-2019"));
    assert_eq!((3..=20).collect::<Vec<u32>>(), available);

    let available = room_ids(&booker, &range(END, "10-04-2019"));
    assert_eq!((1..=20).collect::<Vec<u32>>(), available);
}

#[test]
fn test_available_rooms_empty_when_full() {
    let mut booker = Booker::new();
    reserve_many(&mut booker, 20, START, END);
    assert!(booker.available_rooms(&range(START, END)).is_empty());
}

#[test]
fn test_reservations_by_date() {
    let mut booker = Booker::new();
    let reservations = reserve_many(&mut booker, 5, START, END);

    let found = booker.reservations_by_date(&range(START, END));
    assert_eq!(5, found.len());
    for reservation in &reservations {
        assert!(found.contains(&reservation));
    }
}

#[test]
fn test_reservations_by_date_filters_and_keeps_order() {
    let mut booker = Booker::new();
    let early = booker.reserve("01-04-2019", START).unwrap();
    let mid = booker.reserve(START, END).unwrap();
    let late = booker.reserve("05-04-2019", "08-04-2019").unwrap();
    let later = booker.reserve("10-04-2019", "12-04-2019").unwrap();

    let found = booker
        .reservations_by_date(&range("04-04-2019", "06-04-2019"))
        .into_iter()
        .map(|r| r.id())
        .collect::<Vec<_>>();
    assert_eq!(vec![mid.id(), late.id()], found);

    let found = booker
        .reservations_by_date(&range("02-04-2019", "11-04-2019"))
        .into_iter()
        .map(|r| r.id())
        .collect::<Vec<_>>();
    assert_eq!(vec![early.id(), mid.id(), late.id(), later.id()], found);
}

#[test]
fn test_reservations_by_date_none() {
    let mut booker = Booker::new();
    assert!(booker.reservations_by_date(&range("03-05-2019", "06-05-2019")).is_empty());

    booker.reserve(START, END).unwrap();
    assert!(booker.reservations_by_date(&range("03-05-2019", "06-05-2019")).is_empty());
}
