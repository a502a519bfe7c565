//! Reshaping records into the coordinate sequences each plot expects.
//!
//! Projections only relabel values: no sorting, aggregation or
//! interpolation happens here.

use crate::record::Record;

/// How a record sequence is turned into something drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// One connected curve through the points.
    Line,
    /// Bars over a zero baseline, for spectral magnitudes.
    Spike,
}

/// Plain `x`/`y` sequences of the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinates {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Coordinates {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl FromIterator<(f64, f64)> for Coordinates {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let (x, y) = iter.into_iter().unzip();
        Coordinates { x, y }
    }
}

/// Discrete impulses: a bar of height `heights[i]` at `positions[i]`,
/// drawn over a flat line through (`positions`, `baseline`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spikes {
    pub positions: Vec<f64>,
    pub heights: Vec<f64>,
    pub baseline: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projected {
    Line(Coordinates),
    Spike(Spikes),
}

impl Projection {
    pub fn apply(self, records: &[Record]) -> Projected {
        match self {
            Projection::Line => Projected::Line(project_line(records)),
            Projection::Spike => Projected::Spike(project_spike(records)),
        }
    }
}

pub fn project_line(records: &[Record]) -> Coordinates {
    records.iter().map(|r| (r.x, r.y)).collect()
}

pub fn project_spike(records: &[Record]) -> Spikes {
    let Coordinates { x, y } = project_line(records);
    Spikes {
        baseline: vec![0.; x.len()],
        positions: x,
        heights: y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pairs: &[(f64, f64)]) -> Vec<Record> {
        pairs.iter().map(|&(x, y)| Record::new(x, y)).collect()
    }

    #[test]
    fn line_keeps_record_order() {
        let c = project_line(&records(&[(1., 2.), (3., 4.), (5., 6.)]));
        assert_eq!(c.x, [1., 3., 5.]);
        assert_eq!(c.y, [2., 4., 6.]);
    }

    #[test]
    fn line_does_not_sort() {
        let c = project_line(&records(&[(3., 1.), (1., 2.), (3., 0.)]));
        assert_eq!(c.x, [3., 1., 3.]);
        assert_eq!(c.y, [1., 2., 0.]);
    }

    #[test]
    fn spike_has_zero_baseline() {
        let s = project_spike(&records(&[(0., 10.), (1., 5.)]));
        assert_eq!(s.positions, [0., 1.]);
        assert_eq!(s.heights, [10., 5.]);
        assert_eq!(s.baseline, [0., 0.]);
    }

    #[test]
    fn empty_records() {
        assert!(project_line(&[]).is_empty());
        assert_eq!(project_spike(&[]), Spikes::default());
    }

    #[test]
    fn projections_are_pure() {
        let r = records(&[(0.5, -1.), (2., 3.), (-4., 0.)]);
        for p in [Projection::Line, Projection::Spike] {
            assert_eq!(p.apply(&r), p.apply(&r));
        }
    }
}
