//! **Case classification, stepping and edge interpolation**
//!
//! A traversal position `(x, y)` looks at the 2×2 block of samples whose
//! bottom-right corner is the sample at `(x, y)`:
//!
//! ```text
//!   Corners        Bits          Edges
//!  TL ──── TR     8 ──── 4     ┌─ Top ──┐
//!  │        │     │      │    Left    Right
//!  BL ──── BR     2 ──── 1     └─ Bottom┘
//! ```
//!
//! Every non-trivial case code owns one [`CaseDescriptor`] that states, in one
//! place, which edge the walk enters through (and therefore which two corner
//! samples are interpolated) and which way it leaves. The two saddle codes carry
//! one branch per legal previous direction plus the branch used when a trace
//! starts on them.
//!
//! Walking rule: the inside always lies to the left of the direction of travel
//! (in raster coordinates, y pointing down). Saddles keep the inside connected
//! across the diagonal.

use crate::field::ScalarField;
use crate::float_types::{Real, THRESHOLD, tolerance};
use std::fmt;

/// Corner slots of the 2×2 block around a traversal position.
pub(crate) const BR: usize = 0;
pub(crate) const BL: usize = 1;
pub(crate) const TR: usize = 2;
pub(crate) const TL: usize = 3;

/// A unit step of the tracer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(dx, dy)` in raster coordinates.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::None => (0, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The block edge a step in this direction leaves through.
    pub(crate) const fn exit_edge(self) -> Option<Edge> {
        match self {
            Direction::None => None,
            Direction::Up => Some(Edge::Top),
            Direction::Down => Some(Edge::Bottom),
            Direction::Left => Some(Edge::Left),
            Direction::Right => Some(Edge::Right),
        }
    }
}

/// One side of the 2×2 sample block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Edge {
    Bottom,
    Right,
    Left,
    Top,
}

impl Edge {
    /// Corner slots at the low and high end of the edge's free axis.
    pub(crate) const fn corners(self) -> (usize, usize) {
        match self {
            Edge::Bottom => (BL, BR),
            Edge::Right => (TR, BR),
            Edge::Left => (TL, BL),
            Edge::Top => (TL, TR),
        }
    }

    /// Crossing point inside the unit block, measured from the TL sample.
    pub(crate) fn crossing(self, samples: &[Real; 4]) -> (Real, Real) {
        let (lo, hi) = self.corners();
        let t = interpolate(samples[lo], samples[hi]);
        match self {
            Edge::Bottom => (t, 1.0),
            Edge::Right => (1.0, t),
            Edge::Left => (0.0, t),
            Edge::Top => (t, 0.0),
        }
    }
}

/// Fraction along an edge where the field crosses [`THRESHOLD`].
///
/// Near-equal samples make the crossing undefined; the fraction is then `0`.
#[inline]
pub fn interpolate(v1: Real, v2: Real) -> Real {
    if (v1 - v2).abs() < tolerance() {
        return 0.0;
    }
    (THRESHOLD - v1) / (v2 - v1)
}

/// One way of passing through a block: entered through `entry`, leaving towards `next`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Branch {
    /// Previous direction that selects this branch on a saddle.
    pub after: Direction,
    pub entry: Edge,
    pub next: Direction,
}

/// Everything the tracer needs to know about one case code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CaseDescriptor {
    /// Codes 0 and 15: no boundary.
    Empty,
    /// Exactly one boundary segment.
    Fixed { entry: Edge, next: Direction },
    /// Codes 6 and 9: two segments, picked by the previous direction.
    Saddle { branches: [Branch; 2], start: Branch },
}

const fn fixed(entry: Edge, next: Direction) -> CaseDescriptor {
    CaseDescriptor::Fixed { entry, next }
}

const fn branch(after: Direction, entry: Edge, next: Direction) -> Branch {
    Branch { after, entry, next }
}

use Direction as D;

// Saddle 6 (BL and TR inside): up → right, down → left.
const SADDLE_6_UP: Branch = branch(D::Up, Edge::Bottom, D::Right);
const SADDLE_6_DOWN: Branch = branch(D::Down, Edge::Top, D::Left);
// Saddle 9 (BR and TL inside): right → down, left → up.
const SADDLE_9_RIGHT: Branch = branch(D::Right, Edge::Left, D::Down);
const SADDLE_9_LEFT: Branch = branch(D::Left, Edge::Right, D::Up);

/// The case table, indexed by case code.
///
/// Starting on saddle 9 takes the right → down branch, which is the segment
/// separating the two bottom samples, i.e. the rising edge that launched the
/// trace. Saddle 6 cannot be a start (its BR sample is outside); down → left
/// is used if it ever is.
pub(crate) const CASES: [CaseDescriptor; 16] = [
    CaseDescriptor::Empty,          // 0
    fixed(Edge::Right, D::Down),    // 1
    fixed(Edge::Bottom, D::Left),   // 2
    fixed(Edge::Right, D::Left),    // 3
    fixed(Edge::Top, D::Right),     // 4
    fixed(Edge::Top, D::Down),      // 5
    CaseDescriptor::Saddle {
        branches: [SADDLE_6_UP, SADDLE_6_DOWN],
        start: SADDLE_6_DOWN,
    }, // 6
    fixed(Edge::Top, D::Left),      // 7
    fixed(Edge::Left, D::Up),       // 8
    CaseDescriptor::Saddle {
        branches: [SADDLE_9_RIGHT, SADDLE_9_LEFT],
        start: SADDLE_9_RIGHT,
    }, // 9
    fixed(Edge::Bottom, D::Up),     // 10
    fixed(Edge::Right, D::Up),      // 11
    fixed(Edge::Left, D::Right),    // 12
    fixed(Edge::Left, D::Down),     // 13
    fixed(Edge::Bottom, D::Right),  // 14
    CaseDescriptor::Empty,          // 15
];

/// 4-bit inside/outside mask of a 2×2 sample block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaseCode(u8);

impl CaseCode {
    /// Wraps a raw code. Only the low four bits are kept.
    pub const fn new(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Codes 0 and 15 have no boundary.
    pub const fn is_trivial(self) -> bool {
        self.0 == 0 || self.0 == 15
    }

    pub const fn is_saddle(self) -> bool {
        self.0 == 6 || self.0 == 9
    }

    /// One sample inside: the shape turns around a convex corner here.
    pub const fn is_convex_corner(self) -> bool {
        matches!(self.0, 1 | 2 | 4 | 8)
    }

    /// Three samples inside: the shape turns around a concave corner here.
    pub const fn is_concave_corner(self) -> bool {
        matches!(self.0, 7 | 11 | 13 | 14)
    }

    pub(crate) const fn descriptor(self) -> CaseDescriptor {
        CASES[self.0 as usize]
    }

    /// Picks the branch taken through this block after travelling `previous`.
    ///
    /// Returns `None` for trivial codes and for a saddle entered from a
    /// direction neither of its segments accepts.
    pub(crate) fn resolve(self, previous: Direction) -> Option<Branch> {
        match self.descriptor() {
            CaseDescriptor::Empty => None,
            CaseDescriptor::Fixed { entry, next } => Some(Branch {
                after: previous,
                entry,
                next,
            }),
            CaseDescriptor::Saddle { branches, start } => {
                if previous == Direction::None {
                    Some(start)
                } else {
                    branches.into_iter().find(|b| b.after == previous)
                }
            }
        }
    }

    /// Next travel direction after arriving with `previous`, [`Direction::None`] if undefined.
    pub fn step(self, previous: Direction) -> Direction {
        self.resolve(previous)
            .map_or(Direction::None, |branch| branch.next)
    }
}

impl fmt::Display for CaseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classifies the block around traversal position `(x, y)`.
///
/// Returns the case code and the four corner samples in slot order
/// (`BR`, `BL`, `TR`, `TL`). Off-grid corners read as `0.0` and are outside.
pub fn classify<F: ScalarField + ?Sized>(field: &F, x: usize, y: usize) -> (CaseCode, [Real; 4]) {
    let (x, y) = (x as isize, y as isize);
    let corners = [(x, y), (x - 1, y), (x, y - 1), (x - 1, y - 1)];

    let mut samples = [0.0; 4];
    let mut bits = 0u8;
    for (slot, (cx, cy)) in corners.into_iter().enumerate() {
        if let Some(v) = field.sample(cx, cy) {
            samples[slot] = v;
            if v >= THRESHOLD {
                bits |= 1 << slot;
            }
        }
    }
    (CaseCode(bits), samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Grid;

    fn inside(code: u8, slot: usize) -> bool {
        code & (1 << slot) != 0
    }

    fn crosses(code: u8, edge: Edge) -> bool {
        let (lo, hi) = edge.corners();
        inside(code, lo) != inside(code, hi)
    }

    #[test]
    fn fixed_cases_enter_and_leave_through_crossed_edges() {
        for code in 1..15u8 {
            if let CaseDescriptor::Fixed { entry, next } = CASES[code as usize] {
                let exit = next.exit_edge().unwrap();
                assert!(crosses(code, entry), "case {code} enters through {entry:?}");
                assert!(crosses(code, exit), "case {code} leaves through {exit:?}");
                assert_ne!(entry, exit, "case {code}");
            }
        }
    }

    #[test]
    fn only_6_and_9_are_saddles() {
        for code in 0..16u8 {
            let saddle = matches!(CASES[code as usize], CaseDescriptor::Saddle { .. });
            assert_eq!(saddle, CaseCode::new(code).is_saddle(), "case {code}");
        }
        assert_eq!(CASES[0], CaseDescriptor::Empty);
        assert_eq!(CASES[15], CaseDescriptor::Empty);
    }

    #[test]
    fn saddle_branches_follow_the_previous_step() {
        let six = CaseCode::new(6);
        assert_eq!(six.step(Direction::Up), Direction::Right);
        assert_eq!(six.step(Direction::Down), Direction::Left);
        assert_eq!(six.step(Direction::None), Direction::Left);
        assert_eq!(six.step(Direction::Left), Direction::None);

        let nine = CaseCode::new(9);
        assert_eq!(nine.step(Direction::Right), Direction::Down);
        assert_eq!(nine.step(Direction::Left), Direction::Up);
        assert_eq!(nine.step(Direction::None), Direction::Down);
        assert_eq!(nine.step(Direction::Up), Direction::None);
    }

    #[test]
    fn saddle_branches_cut_off_an_outside_corner() {
        for code in [6u8, 9] {
            if let CaseDescriptor::Saddle { branches, .. } = CASES[code as usize] {
                for b in branches {
                    let exit = b.next.exit_edge().unwrap();
                    assert!(crosses(code, b.entry));
                    assert!(crosses(code, exit));
                    // Entry and exit share exactly one corner, and it is outside.
                    let (a0, a1) = b.entry.corners();
                    let (b0, b1) = exit.corners();
                    let shared = [a0, a1].into_iter().find(|c| *c == b0 || *c == b1).unwrap();
                    assert!(!inside(code, shared), "case {code} branch {b:?}");
                }
            }
        }
    }

    #[test]
    fn trivial_codes_have_no_step() {
        for code in [0u8, 15] {
            for previous in [Direction::None, Direction::Up, Direction::Left] {
                assert_eq!(CaseCode::new(code).step(previous), Direction::None);
            }
        }
    }

    #[test]
    fn turn_classes_are_disjoint() {
        for code in 0..16u8 {
            let c = CaseCode::new(code);
            assert!(!(c.is_convex_corner() && c.is_concave_corner()));
            assert_eq!(c.is_convex_corner(), code.count_ones() == 1);
            assert_eq!(c.is_concave_corner(), code.count_ones() == 3);
        }
    }

    #[test]
    fn interpolation() {
        assert_eq!(interpolate(0.0, 1.0), 0.5);
        assert_eq!(interpolate(1.0, 0.0), 0.5);
        assert_eq!(interpolate(0.25, 0.75), 0.5);
        assert!((interpolate(0.0, 0.8) - 0.625).abs() < 1e-6);
        // Degenerate: equal samples never divide
        assert_eq!(interpolate(0.5, 0.5), 0.0);
        assert_eq!(interpolate(0.3, 0.300001), 0.0);
    }

    #[test]
    fn classify_reads_corners_in_slot_order() {
        // 1 0
        // 0 1
        let grid = Grid::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).unwrap();
        let (code, samples) = classify(&grid, 1, 1);
        assert_eq!(code, CaseCode::new(9));
        assert_eq!(samples, [1.0, 0.0, 0.0, 1.0]);

        // Off-grid corners are outside
        let (code, samples) = classify(&grid, 0, 0);
        assert_eq!(code, CaseCode::new(1));
        assert_eq!(samples, [1.0, 0.0, 0.0, 0.0]);
        let (code, _) = classify(&grid, 2, 2);
        assert_eq!(code, CaseCode::new(8));
    }

    #[test]
    fn crossing_uses_the_entry_edge_corners() {
        // BR, BL, TR, TL
        let samples = [1.0, 0.0, 0.2, 0.0];
        let (x, y) = Edge::Bottom.crossing(&samples);
        assert_eq!((x, y), (0.5, 1.0));
        let (x, y) = Edge::Right.crossing(&samples);
        assert_eq!(x, 1.0);
        assert!((y - 0.375).abs() < 1e-6);
    }
}
