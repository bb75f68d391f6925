//! Star rating for breed popularity.

pub const STAR_COUNT: usize = 5;

pub const FILLED: &str = "★";
pub const EMPTY: &str = "☆";

/// Returns five units; unit `i` is filled iff `i < floor(popularity)`.
pub fn star_units(popularity: f32) -> [bool; STAR_COUNT] {
    let whole = popularity.floor();
    let mut units = [false; STAR_COUNT];
    for (i, unit) in units.iter_mut().enumerate() {
        *unit = (i as f32) < whole;
    }
    units
}

pub fn render_stars(popularity: f32) -> String {
    star_units(popularity)
        .iter()
        .map(|filled| if *filled { FILLED } else { EMPTY })
        .collect()
}
