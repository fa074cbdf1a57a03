/// EMA weight of the newest sample, selected from the powers of two.
///
/// `WeightN` gives the newest sample a weight of `N / 1024` in the
/// average. Larger weights track the input faster.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(u8)]
pub enum SmoothingExponent {
    /// Slowest tracking, 1/1024.
    Weight1 = 0,
    /// 2/1024.
    Weight2 = 1,
    /// 4/1024, the default.
    Weight4 = 2,
    /// 8/1024.
    Weight8 = 3,
    /// 16/1024.
    Weight16 = 4,
    /// 32/1024.
    Weight32 = 5,
    /// 64/1024.
    Weight64 = 6,
    /// 128/1024.
    Weight128 = 7,
    /// 256/1024.
    Weight256 = 8,
    /// Fastest tracking, 512/1024: halves the gap every sample.
    Weight512 = 9,
}

impl SmoothingExponent {
    /// Range-checked conversion from a plain shift count.
    pub const fn from_shift(shift: u8) -> Option<Self> {
        match shift {
            0 => Some(Self::Weight1),
            1 => Some(Self::Weight2),
            2 => Some(Self::Weight4),
            3 => Some(Self::Weight8),
            4 => Some(Self::Weight16),
            5 => Some(Self::Weight32),
            6 => Some(Self::Weight64),
            7 => Some(Self::Weight128),
            8 => Some(Self::Weight256),
            9 => Some(Self::Weight512),
            _ => None,
        }
    }

    pub const fn shift(self) -> u32 {
        self as u32
    }

    /// Weight numerator of the newest sample: `2^shift` out of 1024.
    pub const fn weight(self) -> i32 {
        1 << self.shift()
    }
}

impl Default for SmoothingExponent {
    fn default() -> Self {
        Self::Weight4
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_shift() {
        for shift in 0..=9_u8 {
            let exponent = SmoothingExponent::from_shift(shift).unwrap();
            assert_eq!(exponent.shift(), shift as u32);
            assert_eq!(exponent.weight(), 1 << shift);
        }
        assert!(SmoothingExponent::from_shift(10).is_none());
        assert!(SmoothingExponent::from_shift(255).is_none());
    }

    #[test]
    fn test_default() {
        assert_eq!(SmoothingExponent::default(), SmoothingExponent::Weight4);
        assert_eq!(SmoothingExponent::default().weight(), 4);
    }
}

// vim: ts=4 sw=4 expandtab
