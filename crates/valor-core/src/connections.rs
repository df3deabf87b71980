//! Distance-based lines between nearby particles.
//!
//! At the tuned particle count every pair is checked directly. Larger fields
//! bucket particles into a uniform grid whose cell edge equals the connection
//! distance, so only the 3x3 neighbourhood of a cell has to be visited. Both
//! paths yield the same pairs in the same ascending `(i, j)` order.

use crate::color::Rgba;
use crate::constants::{GRID_INDEX_MIN_PARTICLES, LINE_PULSE_TIME_SCALE};
use crate::params::FieldParams;
use crate::particle::Particle;
use fnv::FnvHashMap;
use glam::DVec2;
use smallvec::SmallVec;

/// One line to stroke this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub from_index: usize,
    pub to_index: usize,
    pub from: DVec2,
    pub to: DVec2,
    pub distance: f64,
    pub opacity: f64,
    pub width: f64,
    pub color: Rgba,
    /// Stroke a second time with a shadow blur.
    pub glow: bool,
}

/// Linear falloff: `max_opacity` at zero distance, nothing at or past `threshold`.
#[inline]
pub fn connection_opacity(distance: f64, threshold: f64, max_opacity: f64) -> Option<f64> {
    (distance < threshold).then(|| (1.0 - distance / threshold) * max_opacity)
}

/// Width multiplier in [0, 1] driven by frame time (ms) and the particle's phase.
#[inline]
pub fn line_width_pulse(time_ms: f64, pulse_phase: f64) -> f64 {
    (time_ms * LINE_PULSE_TIME_SCALE + pulse_phase).sin() * 0.5 + 0.5
}

/// All pairs `i < j` closer than `threshold`, with their distance.
pub fn pairs_within(particles: &[Particle], threshold: f64) -> Vec<(usize, usize, f64)> {
    if particles.len() < GRID_INDEX_MIN_PARTICLES {
        direct_pairs(particles, threshold)
    } else {
        grid_pairs(particles, threshold)
    }
}

pub fn direct_pairs(particles: &[Particle], threshold: f64) -> Vec<(usize, usize, f64)> {
    let mut out = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            let d = a.position.distance(b.position);
            if d < threshold {
                out.push((i, j, d));
            }
        }
    }
    out
}

type Cell = (i64, i64);

/// Largest cell coordinate that is still an exact integer in an `f64`.
const MAX_CELL_COORD: f64 = (1u64 << 52) as f64;

#[inline]
fn cell_of(p: DVec2, size: f64) -> Cell {
    ((p.x / size).floor() as i64, (p.y / size).floor() as i64)
}

#[inline]
fn cell_is_exact(p: DVec2, size: f64) -> bool {
    let c = p / size;
    c.x.abs() < MAX_CELL_COORD && c.y.abs() < MAX_CELL_COORD
}

/// The up to nine distinct cells around `(cx, cy)`.
fn neighbourhood((cx, cy): Cell) -> SmallVec<[Cell; 9]> {
    let mut cells = SmallVec::new();
    for dy in -1..=1i64 {
        for dx in -1..=1i64 {
            let cell = (cx.saturating_add(dx), cy.saturating_add(dy));
            if !cells.contains(&cell) {
                cells.push(cell);
            }
        }
    }
    cells
}

pub fn grid_pairs(particles: &[Particle], threshold: f64) -> Vec<(usize, usize, f64)> {
    // a cell edge this small relative to the coordinates cannot index anything
    if !particles.iter().all(|p| cell_is_exact(p.position, threshold)) {
        log::debug!("[connections] grid cell {} too fine, checking pairs directly", threshold);
        return direct_pairs(particles, threshold);
    }
    let mut grid: FnvHashMap<Cell, SmallVec<[usize; 8]>> = FnvHashMap::default();
    for (i, p) in particles.iter().enumerate() {
        grid.entry(cell_of(p.position, threshold)).or_default().push(i);
    }
    let mut out = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for cell in neighbourhood(cell_of(a.position, threshold)) {
            let Some(bucket) = grid.get(&cell) else {
                continue;
            };
            for &j in bucket {
                if j <= i {
                    continue;
                }
                let d = a.position.distance(particles[j].position);
                if d < threshold {
                    out.push((i, j, d));
                }
            }
        }
    }
    out.sort_unstable_by(|x, y| (x.0, x.1).cmp(&(y.0, y.1)));
    out
}

/// Styled connections for this frame. Colour and width come from the lower
/// index of each pair.
pub fn connections(particles: &[Particle], time_ms: f64, params: &FieldParams) -> Vec<Connection> {
    pairs_within(particles, params.connect_distance)
        .into_iter()
        .filter_map(|(i, j, distance)| {
            let opacity = connection_opacity(
                distance,
                params.connect_distance,
                params.connection_max_opacity,
            )?;
            let a = &particles[i];
            let b = &particles[j];
            Some(Connection {
                from_index: i,
                to_index: j,
                from: a.position,
                to: b.position,
                distance,
                opacity,
                width: a.connection_width * line_width_pulse(time_ms, a.pulse_phase),
                color: a.connection_color.color().with_alpha(opacity),
                glow: opacity > params.connection_glow_threshold,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Points closer than one cell edge land in neighbouring cells.
        #[test]
        fn close_points_share_a_neighbourhood(
            x in -2000.0f64..2000.0,
            y in -2000.0f64..2000.0,
            angle in 0.0f64..std::f64::consts::TAU,
            frac in 0.0f64..0.999,
            size in 1.0f64..200.0,
        ) {
            let a = DVec2::new(x, y);
            let b = a + DVec2::new(angle.cos(), angle.sin()) * size * frac;
            let (ax, ay) = cell_of(a, size);
            let (bx, by) = cell_of(b, size);
            prop_assert!((ax - bx).abs() <= 1);
            prop_assert!((ay - by).abs() <= 1);
        }
    }

    #[test]
    fn negative_coordinates_floor_downwards() {
        assert_eq!(cell_of(DVec2::new(-0.5, 99.9), 100.0), (-1, 0));
        assert_eq!(cell_of(DVec2::new(-100.0, 100.0), 100.0), (-1, 1));
    }

    #[test]
    fn neighbourhood_at_the_edge_of_the_index_has_no_duplicates() {
        assert_eq!(neighbourhood((0, 0)).len(), 9);
        let edge = neighbourhood((i64::MAX, i64::MIN));
        assert_eq!(edge.len(), 4);
        assert!(edge.contains(&(i64::MAX - 1, i64::MIN + 1)));
    }

    #[test]
    fn tiny_cells_are_not_exact() {
        assert!(cell_is_exact(DVec2::new(1920.0, -1080.0), 100.0));
        assert!(!cell_is_exact(DVec2::new(1.0, 0.0), 1e-300));
        assert!(!cell_is_exact(DVec2::new(f64::NAN, 0.0), 100.0));
    }
}
