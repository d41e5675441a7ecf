//! Distance estimates for A*
//!
//! Coordinates are read through the [`Point2`] trait so the same metrics
//! work on grid cells (`(i32, i32)`) and on map positions (`(f64, f64)`).

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_unsupported;
use crate::error::PathkitError;

/// A value with planar coordinates
pub trait Point2 {
    fn coords(&self) -> (f64, f64);
}

macro_rules! impl_point2 {
    ($($t:ty),*) => {
        $(
            impl Point2 for ($t, $t) {
                fn coords(&self) -> (f64, f64) {
                    (self.0 as f64, self.1 as f64)
                }
            }
        )*
    };
}

impl_point2!(i32, i64, u32, usize, f32, f64);

/// `|x1 - x2| + |y1 - y2|`; admissible on 4-connected unit grids
pub fn manhattan_distance<P: Point2>(a: &P, b: &P) -> f64 {
    let (x1, y1) = a.coords();
    let (x2, y2) = b.coords();
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Straight-line distance; admissible whenever edge weights are at least the
/// distance between their endpoints
pub fn euclidean_distance<P: Point2>(a: &P, b: &P) -> f64 {
    let (x1, y1) = a.coords();
    let (x2, y2) = b.coords();
    (x1 - x2).hypot(y1 - y2)
}

/// Always 0. A* with this estimate behaves like Dijkstra.
pub fn zero_heuristic<V>(_: &V, _: &V) -> f64 {
    0.0
}

/// Named distance metric, selectable from config files and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    #[default]
    Euclidean,
    Manhattan,
    Zero,
}

impl Heuristic {
    pub fn estimate<P: Point2>(self, a: &P, b: &P) -> f64 {
        match self {
            Heuristic::Euclidean => euclidean_distance(a, b),
            Heuristic::Manhattan => manhattan_distance(a, b),
            Heuristic::Zero => 0.0,
        }
    }
}

impl FromStr for Heuristic {
    type Err = PathkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" => Ok(Heuristic::Euclidean),
            "manhattan" => Ok(Heuristic::Manhattan),
            "zero" | "none" => Ok(Heuristic::Zero),
            other => bail_unsupported!("heuristic", other, "euclidean, manhattan, zero"),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Euclidean => write!(f, "euclidean"),
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::Zero => write!(f, "zero"),
        }
    }
}

/// Heuristic backed by a lookup table of node positions.
///
/// Values missing from the table estimate 0, which keeps the heuristic
/// admissible for partially-positioned graphs.
#[derive(Debug)]
pub struct PositionHeuristic<'a, V> {
    positions: &'a HashMap<V, (f64, f64)>,
    metric: Heuristic,
}

// Only a borrow and a metric, so copyable whatever `V` is
impl<V> Clone for PositionHeuristic<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for PositionHeuristic<'_, V> {}

impl<'a, V: Eq + Hash> PositionHeuristic<'a, V> {
    pub fn new(positions: &'a HashMap<V, (f64, f64)>, metric: Heuristic) -> Self {
        Self { positions, metric }
    }

    pub fn estimate(&self, from: &V, to: &V) -> f64 {
        match (self.positions.get(from), self.positions.get(to)) {
            (Some(a), Some(b)) => self.metric.estimate(a, b),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(&(0i32, 0), &(3, 4)), 7.0);
        assert_eq!(manhattan_distance(&(3i64, 4), &(0, 0)), 7.0);
        assert_eq!(manhattan_distance(&(-1.5f64, 2.0), &(1.5, 2.0)), 3.0);
    }

    #[test]
    fn test_euclidean_distance() {
        assert_eq!(euclidean_distance(&(0i32, 0), &(3, 4)), 5.0);
        assert_eq!(euclidean_distance(&(2usize, 2usize), &(2, 2)), 0.0);
    }

    #[test]
    fn test_zero_heuristic() {
        assert_eq!(zero_heuristic(&"A", &"B"), 0.0);
    }

    #[test]
    fn test_heuristic_from_str() {
        assert_eq!(
            "Manhattan".parse::<Heuristic>().unwrap(),
            Heuristic::Manhattan
        );
        assert_eq!("zero".parse::<Heuristic>().unwrap(), Heuristic::Zero);
        assert_eq!(Heuristic::default(), Heuristic::Euclidean);

        let err = "chebyshev".parse::<Heuristic>().unwrap_err();
        assert!(matches!(err, PathkitError::Unsupported { .. }));
    }

    #[test]
    fn test_heuristic_estimate() {
        assert_eq!(Heuristic::Euclidean.estimate(&(0i32, 0), &(3, 4)), 5.0);
        assert_eq!(Heuristic::Manhattan.estimate(&(0i32, 0), &(3, 4)), 7.0);
        assert_eq!(Heuristic::Zero.estimate(&(0i32, 0), &(3, 4)), 0.0);
    }

    #[test]
    fn test_position_heuristic_unknown_is_zero() {
        let positions = HashMap::from([
            ("A".to_string(), (0.0, 0.0)),
            ("B".to_string(), (6.0, 8.0)),
        ]);
        let heuristic = PositionHeuristic::new(&positions, Heuristic::Euclidean);

        assert_eq!(heuristic.estimate(&"A".to_string(), &"B".to_string()), 10.0);
        assert_eq!(heuristic.estimate(&"A".to_string(), &"Z".to_string()), 0.0);
        assert_eq!(heuristic.estimate(&"Z".to_string(), &"B".to_string()), 0.0);
    }

    #[test]
    #[allow(clippy::clone_on_copy)]
    fn test_position_heuristic_copies_with_string_keys() {
        let positions = HashMap::from([
            ("A".to_string(), (0.0, 0.0)),
            ("B".to_string(), (3.0, 4.0)),
        ]);
        let heuristic = PositionHeuristic::new(&positions, Heuristic::Manhattan);

        let copied = heuristic;
        let cloned = heuristic.clone();
        let (a, b) = ("A".to_string(), "B".to_string());
        assert_eq!(heuristic.estimate(&a, &b), 7.0);
        assert_eq!(copied.estimate(&a, &b), 7.0);
        assert_eq!(cloned.estimate(&a, &b), 7.0);
    }
}
