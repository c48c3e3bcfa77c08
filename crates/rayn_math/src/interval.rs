/// A closed range of ray parameters `[min, max]`.
///
/// Intersection routines accept hits strictly inside the interval, see
/// [`Interval::surrounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// The interval `(min, +inf)`, used for primary and bounce rays.
    pub fn from_min(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    /// Returns true if x is strictly within the interval (min, max).
    ///
    /// NaN is never surrounded.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Same lower bound, upper bound replaced by `max`.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));
        assert!(interval.surrounds(9.9));

        assert!(!interval.surrounds(f32::NAN));
        assert!(!interval.surrounds(f32::INFINITY));
    }

    #[test]
    fn test_interval_from_min() {
        let interval = Interval::from_min(0.001);
        assert!(interval.surrounds(1e30));
        assert!(!interval.surrounds(0.0005));
        assert!(!interval.surrounds(f32::INFINITY));
    }

    #[test]
    fn test_interval_with_max() {
        let shrunk = Interval::from_min(1.0).with_max(4.0);
        assert_eq!(shrunk, Interval::new(1.0, 4.0));
    }
}
