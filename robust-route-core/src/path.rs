//! Concrete road paths and the per-leg sets of alternatives.
//!
//! A [`PathOption`] is an ordered node sequence carrying one length per arc
//! (consecutive node pair), so overlap between paths can be weighed without
//! consulting the road graph again.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a road-graph node.
pub type NodeId = u64;

/// A directed arc between two consecutive path nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DirectedArc {
    /// Tail node.
    pub from: NodeId,
    /// Head node.
    pub to: NodeId,
}

/// Errors raised while constructing path data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathDataError {
    /// A path had no nodes at all.
    #[error("path must contain at least one node")]
    EmptyPath,
    /// The arc-length list does not match the node list.
    #[error("path with {nodes} nodes needs {expected} arc lengths, found {lengths}")]
    ArcCountMismatch {
        /// Number of nodes supplied.
        nodes: usize,
        /// Number of arc lengths expected.
        expected: usize,
        /// Number of arc lengths supplied.
        lengths: usize,
    },
    /// An arc length was negative, NaN or infinite.
    #[error("arc {index} has invalid length {length}")]
    InvalidLength {
        /// Position of the arc within the path.
        index: usize,
        /// Offending length.
        length: f64,
    },
    /// An alternative path set had no planned paths.
    #[error("alternative path set must contain at least one planned path")]
    NoPlannedPaths,
}

#[derive(Serialize, Deserialize)]
struct PathOptionRecord {
    nodes: Vec<NodeId>,
    arc_lengths: Vec<f64>,
}

/// One concrete route through the road network for a leg.
///
/// # Examples
/// ```
/// use robust_route_core::PathOption;
///
/// # fn main() -> Result<(), robust_route_core::PathDataError> {
/// let path = PathOption::new(vec![1, 2, 3], vec![10.0, 5.5])?;
/// assert_eq!(path.arc_count(), 2);
/// assert!((path.length() - 15.5).abs() < f64::EPSILON);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PathOptionRecord", into = "PathOptionRecord")]
pub struct PathOption {
    nodes: Vec<NodeId>,
    arc_lengths: Vec<f64>,
}

impl PathOption {
    /// Validate and construct a path.
    ///
    /// # Errors
    /// Returns [`PathDataError::EmptyPath`] for an empty node list,
    /// [`PathDataError::ArcCountMismatch`] unless there is exactly one length
    /// per arc, and [`PathDataError::InvalidLength`] for negative or
    /// non-finite lengths.
    pub fn new(nodes: Vec<NodeId>, arc_lengths: Vec<f64>) -> Result<Self, PathDataError> {
        let Some(expected) = nodes.len().checked_sub(1) else {
            return Err(PathDataError::EmptyPath);
        };
        if arc_lengths.len() != expected {
            return Err(PathDataError::ArcCountMismatch {
                nodes: nodes.len(),
                expected,
                lengths: arc_lengths.len(),
            });
        }
        if let Some((index, &length)) = arc_lengths
            .iter()
            .enumerate()
            .find(|(_, length)| !length.is_finite() || **length < 0.0)
        {
            return Err(PathDataError::InvalidLength { index, length });
        }
        Ok(Self { nodes, arc_lengths })
    }

    /// A degenerate path that stays on one node.
    #[must_use]
    pub fn single(node: NodeId) -> Self {
        Self {
            nodes: vec![node],
            arc_lengths: Vec::new(),
        }
    }

    /// Ordered nodes traversed by the path.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Length of each arc, aligned with [`PathOption::arcs`].
    #[must_use]
    pub fn arc_lengths(&self) -> &[f64] {
        &self.arc_lengths
    }

    /// Number of arcs, i.e. one fewer than the number of nodes.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.arc_lengths.len()
    }

    /// Total length: the sum of arc lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.arc_lengths.iter().sum()
    }

    /// Iterate arcs with their lengths in traversal order.
    pub fn arcs(&self) -> impl Iterator<Item = (DirectedArc, f64)> + '_ {
        self.nodes
            .windows(2)
            .zip(self.arc_lengths.iter().copied())
            .filter_map(|(pair, length)| match pair {
                [from, to] => Some((
                    DirectedArc {
                        from: *from,
                        to: *to,
                    },
                    length,
                )),
                _ => None,
            })
    }
}

impl TryFrom<PathOptionRecord> for PathOption {
    type Error = PathDataError;

    fn try_from(record: PathOptionRecord) -> Result<Self, Self::Error> {
        Self::new(record.nodes, record.arc_lengths)
    }
}

impl From<PathOption> for PathOptionRecord {
    fn from(path: PathOption) -> Self {
        Self {
            nodes: path.nodes,
            arc_lengths: path.arc_lengths,
        }
    }
}

/// Planned candidates and the designated deviation path for one leg.
///
/// Only planned paths are ever selected; the deviation path is the fallback
/// a disrupted leg is assumed to take and only feeds the cost model.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativePathSet {
    planned: Vec<PathOption>,
    deviation: PathOption,
}

impl AlternativePathSet {
    /// Validate and construct a set.
    ///
    /// # Errors
    /// Returns [`PathDataError::NoPlannedPaths`] when `planned` is empty.
    pub fn new(planned: Vec<PathOption>, deviation: PathOption) -> Result<Self, PathDataError> {
        if planned.is_empty() {
            return Err(PathDataError::NoPlannedPaths);
        }
        Ok(Self { planned, deviation })
    }

    /// Split paths ranked shortest-first into planned and deviation paths.
    ///
    /// With two or more paths the last (longest) becomes the deviation path
    /// and the rest are planned. A single path serves as both. An empty list
    /// yields `None`.
    ///
    /// # Examples
    /// ```
    /// use robust_route_core::{AlternativePathSet, PathOption};
    ///
    /// let ranked = vec![PathOption::single(1), PathOption::single(2), PathOption::single(3)];
    /// let set = AlternativePathSet::from_ranked(ranked).expect("non-empty");
    /// assert_eq!(set.planned_len(), 2);
    /// assert_eq!(set.deviation().nodes(), &[3]);
    /// ```
    #[must_use]
    pub fn from_ranked(mut ranked: Vec<PathOption>) -> Option<Self> {
        match ranked.len() {
            0 => None,
            1 => {
                let deviation = ranked.first()?.clone();
                Some(Self {
                    planned: ranked,
                    deviation,
                })
            }
            _ => {
                let deviation = ranked.pop()?;
                Some(Self {
                    planned: ranked,
                    deviation,
                })
            }
        }
    }

    /// Planned candidates in catalogue order.
    #[must_use]
    pub fn planned(&self) -> &[PathOption] {
        &self.planned
    }

    /// Number of planned candidates; never zero.
    #[must_use]
    pub fn planned_len(&self) -> usize {
        self.planned.len()
    }

    /// Planned candidate at `index`.
    #[must_use]
    pub fn planned_path(&self, index: usize) -> Option<&PathOption> {
        self.planned.get(index)
    }

    /// Fallback path used when the leg is disrupted.
    #[must_use]
    pub const fn deviation(&self) -> &PathOption {
        &self.deviation
    }
}
