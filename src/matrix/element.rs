use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::rings::fraction::Fraction;

/// Per-type equality strategy. Approximate types (floats) compare within
/// machine epsilon, exact types compare structurally.
pub trait Tolerance: Zero {
    fn near(&self, other: &Self) -> bool;

    fn near_zero(&self) -> bool {
        self.near(&Self::zero())
    }
}

macro_rules! exact_tolerance {
    ($($t:ty),*) => {
        $(impl Tolerance for $t {
            fn near(&self, other: &Self) -> bool {
                self == other
            }
        })*
    };
}

exact_tolerance!(i8, i16, i32, i64, i128, isize, BigInt, Fraction);

impl Tolerance for f32 {
    fn near(&self, other: &Self) -> bool {
        (self - other).abs() < f32::EPSILON
    }
}

impl Tolerance for f64 {
    fn near(&self, other: &Self) -> bool {
        (self - other).abs() < f64::EPSILON
    }
}

pub trait Element:  // Avoid repeating all the traits
    Clone
    + Default
    + Zero
    + One
    + PartialEq
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Sum<Self>
    + Tolerance
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> Element for T where
    T: Clone
        + Default
        + Zero
        + One
        + PartialEq
        + Neg<Output = T>
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Sum<T>
        + Tolerance
        + std::fmt::Display
        + std::fmt::Debug
{
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
