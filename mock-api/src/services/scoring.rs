//! Derived hotel score
//!
//! A hotel's score is a pure function of its star rating and its current
//! room set:
//! - room volume (0-40): `min(total available / 50, 1) * 40`
//! - stars (0-30): `(stars / 5) * 30`
//! - amenity richness (0-30): `min(avg amenities per room / 10, 1) * 30`
//!
//! The score is recomputed and written in the SAME commit as any room
//! mutation or stars change, so a stale cached value is never observable.

use shared::models::Room;

/// Compute the 0..=100 score for a hotel given ITS rooms (pre-filtered)
pub fn compute_score<'a, I>(stars: u8, rooms: I) -> u8
where
    I: IntoIterator<Item = &'a Room>,
{
    let mut room_count = 0usize;
    let mut total_available = 0u32;
    let mut total_amenities = 0usize;
    for room in rooms {
        room_count += 1;
        total_available += room.available;
        total_amenities += room.amenities.len();
    }

    let room_score = ((total_available as f64 / 50.0) * 40.0).min(40.0);
    let star_score = (stars as f64 / 5.0) * 30.0;
    let avg_amenities = if room_count > 0 {
        total_amenities as f64 / room_count as f64
    } else {
        0.0
    };
    let amenity_score = ((avg_amenities / 10.0) * 30.0).min(30.0);

    (room_score + star_score + amenity_score).round() as u8
}

/// Compute the score for one hotel out of the full room collection
pub fn score_for(hotel_id: &str, stars: u8, all_rooms: &[Room]) -> u8 {
    compute_score(stars, all_rooms.iter().filter(|r| r.hotel_id == hotel_id))
}
