//! Typed lengths used for font sizes and column widths.
//!
//! All measurement happens in PDF points ([`Pt`], 1/72 of an inch). [`In`] and
//! [`Mm`] exist so callers can describe column widths in whatever unit their
//! page design uses and convert with `.into()`.

use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, MulAssign, Sub, Sum};
use std::ops::{Div, Mul};

/// A length in PDF points (1/72 of an inch)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    MulAssign,
    Sum,
    Deref,
    DerefMut,
    From,
    Into,
    Display,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, From, Into, Display)]
#[display("{_0}in")]
pub struct In(pub f32);

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, From, Into, Display)]
#[display("{_0}mm")]
pub struct Mm(pub f32);

impl Pt {
    /// Whether this length can be used as a font size or a line width
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Mul<Pt> for f32 {
    type Output = Pt;

    fn mul(self, rhs: Pt) -> Pt {
        Pt(self * rhs.0)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * 72.0 / 25.4)
    }
}

impl From<Pt> for In {
    fn from(value: Pt) -> Self {
        In(value.0 / 72.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn inches_and_millimetres_convert_to_points() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert_eq!(In::from(Pt(36.0)), In(0.5));
        let a4_width: Pt = Mm(210.0).into();
        assert!((a4_width.0 - 595.2756).abs() < 0.001);
    }

    #[test]
    fn points_do_arithmetic() {
        let mut width = Pt(10.0) + Pt(2.5) - Pt(0.5);
        assert_eq!(width, Pt(12.0));
        width *= 2.0;
        assert_eq!(width, Pt(24.0));
        assert_eq!(width / 4.0, Pt(6.0));
        assert_eq!(width / Pt(12.0), 2.0);
        assert_eq!(0.5 * width, Pt(12.0));
        let total: Pt = vec![Pt(1.0), Pt(2.0), Pt(3.0)].into_iter().sum();
        assert_eq!(*total, 6.0);
        assert_eq!(total.to_string(), "6pt");
    }

    #[test]
    fn only_finite_positive_lengths_are_positive() {
        assert!(Pt(0.1).is_positive());
        assert!(!Pt(0.0).is_positive());
        assert!(!Pt(-3.0).is_positive());
        assert!(!Pt(f32::NAN).is_positive());
        assert!(!Pt(f32::INFINITY).is_positive());
    }
}
