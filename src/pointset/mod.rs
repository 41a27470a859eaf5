mod error;
mod loader;

#[cfg(test)]
mod tests;

pub use error::LoadError;

use std::path::Path;

/// An ordered, immutable set of fixed-dimension numeric points.
///
/// Index order matters only for tie-breaking and determinism; the set is
/// semantically unordered. Every engine takes one of these as its input.
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<Vec<f64>>,
    dim: usize,
}

impl PointSet {
    /// Validate and wrap a list of points.
    ///
    /// Every point must have the same arity and only finite coordinates; a
    /// single violation rejects the whole input.
    pub fn new(points: Vec<Vec<f64>>) -> Result<Self, LoadError> {
        let first = points.first().ok_or(LoadError::Empty)?;
        let dim = first.len();

        for (i, point) in points.iter().enumerate() {
            if point.len() != dim {
                return Err(LoadError::ArityMismatch {
                    line: i + 1,
                    expected: dim,
                    found: point.len(),
                });
            }
            if point.iter().any(|c| !c.is_finite()) {
                return Err(LoadError::NonFinite { line: i + 1 });
            }
        }

        Ok(Self { points, dim })
    }

    /// Load points from a delimited text file, one point per line.
    pub fn from_path(path: impl AsRef<Path>, delimiter: Option<&str>) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text, delimiter)
    }

    /// Parse points from in-memory delimited text.
    pub fn from_text(text: &str, delimiter: Option<&str>) -> Result<Self, LoadError> {
        Self::new(loader::parse_points(text, delimiter)?)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Arity shared by every point in the set.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn point(&self, i: usize) -> &[f64] {
        &self.points[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.points.iter().map(|p| p.as_slice())
    }

    /// Per-coordinate (min, max) over the whole set — the bounding box used
    /// by uniform k-means seeding.
    pub fn bounds(&self) -> (Vec<f64>, Vec<f64>) {
        let mut min = self.points[0].clone();
        let mut max = self.points[0].clone();

        for point in &self.points[1..] {
            for (d, &c) in point.iter().enumerate() {
                if c < min[d] {
                    min[d] = c;
                }
                if c > max[d] {
                    max[d] = c;
                }
            }
        }

        (min, max)
    }
}
