/// A closed range of `f32` values used for ray parameters and color channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is within [min, max).
    ///
    /// This is the acceptance test for ray hits: `min` is the self-intersection
    /// epsilon and `max` the closest hit found so far, which an equally distant
    /// hit must not replace.
    pub fn admits(&self, x: f32) -> bool {
        self.min <= x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// The unit interval [0, 1], used for color channels.
    pub const UNIT: Interval = Interval::new(0.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_creation() {
        let interval = Interval::new(0.0, 10.0);
        assert_eq!(interval.min, 0.0);
        assert_eq!(interval.max, 10.0);
        assert_eq!(interval.size(), 10.0);
    }

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        // Outside bounds
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_admits_is_half_open() {
        let interval = Interval::new(0.001, 4.0);

        assert!(interval.admits(0.001));
        assert!(interval.admits(3.999));
        assert!(!interval.admits(4.0));
        assert!(!interval.admits(0.0005));
    }

    #[test]
    fn test_interval_admits_unbounded() {
        let interval = Interval::new(0.001, f32::INFINITY);

        assert!(interval.admits(1e30));
        assert!(!interval.admits(f32::INFINITY));
        assert!(!interval.admits(f32::NAN));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::UNIT;

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(0.25), 0.25);
        assert_eq!(interval.clamp(1.0), 1.0);
        assert_eq!(interval.clamp(15.0), 1.0);
    }
}
