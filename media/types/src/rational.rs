/*!
    Rational number type for frame rates.
*/

use std::fmt;

/**
    A rational number represented as a numerator and denominator.

    Containers report frame rates this way (e.g. 30000/1001 for 29.97 fps).
    A zero denominator is representable, since demuxers return `0/0` for
    unknown rates, and converts to NaN in [`Rational::to_f64`].
*/
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub num: i32,
    pub den: i32,
}

impl Rational {
    /**
        Create a new rational number.
    */
    #[inline]
    pub const fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    /**
        Create a whole-number rational (`value / 1`).
    */
    #[inline]
    pub const fn whole(value: i32) -> Self {
        Self { num: value, den: 1 }
    }

    /**
        Convert to f64.
    */
    #[inline]
    pub fn to_f64(self) -> f64 {
        if self.den == 0 {
            return f64::NAN;
        }
        self.num as f64 / self.den as f64
    }

    /**
        Returns true if the value is finite and strictly positive.
    */
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.den != 0 && (self.num > 0) == (self.den > 0) && self.num != 0
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_to_f64() {
        assert_eq!(Rational::whole(30).to_f64(), 30.0);
        assert!((Rational::new(30000, 1001).to_f64() - 29.97).abs() < 0.001);
        assert!(Rational::new(0, 0).to_f64().is_nan());
    }

    #[test]
    fn rational_is_positive() {
        assert!(Rational::whole(25).is_positive());
        assert!(Rational::new(-1, -2).is_positive());
        assert!(!Rational::new(0, 1).is_positive());
        assert!(!Rational::new(0, 0).is_positive());
        assert!(!Rational::new(-30, 1).is_positive());
        assert!(!Rational::new(30, 0).is_positive());
    }

    #[test]
    fn rational_display() {
        assert_eq!(format!("{}", Rational::new(30000, 1001)), "30000/1001");
        assert_eq!(format!("{:?}", Rational::whole(24)), "24/1");
    }
}
