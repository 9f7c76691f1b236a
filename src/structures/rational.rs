use alloc::collections::BTreeSet;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::utils::gcd;

/// Errors from building a [`Rational`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationalError {
    /// The denominator was zero.
    ZeroDenominator,
    /// The reduced fraction does not fit in `i64`.
    Overflow,
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalError::ZeroDenominator => write!(f, "denominator is zero"),
            RationalError::Overflow => write!(f, "fraction does not fit in i64"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RationalError {}

/// An exact fraction `numer / denom`.
///
/// Always stored reduced with a positive denominator, so the derived
/// equality is equality of values. Ordering compares values.
///
/// # Example
///
/// ```
/// use algebraic_structures::Rational;
///
/// let a = Rational::new(2, -4).unwrap();
/// assert_eq!((a.numer(), a.denom()), (-1, 2));
/// assert_eq!(a + Rational::from_integer(1), Rational::new(1, 2).unwrap());
/// assert_eq!(a.to_string(), "-1/2");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

impl Rational {
    /// `0 / 1`.
    pub const ZERO: Self = Self::from_integer(0);
    /// `1 / 1`.
    pub const ONE: Self = Self::from_integer(1);

    /// Create `numer / denom` in lowest terms.
    ///
    /// # Errors
    ///
    /// `ZeroDenominator` if `denom == 0`, `Overflow` if the reduced form
    /// does not fit (only `i64::MIN` with a negative denominator).
    pub fn new(numer: i64, denom: i64) -> Result<Self, RationalError> {
        if denom == 0 {
            return Err(RationalError::ZeroDenominator);
        }
        Self::reduce(numer as i128, denom as i128).ok_or(RationalError::Overflow)
    }

    /// The integer `n` as `n / 1`.
    pub const fn from_integer(n: i64) -> Self {
        Self { numer: n, denom: 1 }
    }

    /// The numerator, carrying the sign.
    pub const fn numer(self) -> i64 {
        self.numer
    }

    /// Always positive.
    pub const fn denom(self) -> i64 {
        self.denom
    }

    /// `-1`, `0` or `1`.
    pub const fn signum(self) -> i64 {
        self.numer.signum()
    }

    /// Whether the denominator is 1.
    pub const fn is_integer(self) -> bool {
        self.denom == 1
    }

    /// The reciprocal, or `None` for zero.
    pub fn recip(self) -> Option<Self> {
        if self.numer == 0 {
            return None;
        }
        Self::reduce(self.denom as i128, self.numer as i128)
    }

    /// Reduce a fraction with non-zero denominator computed in `i128`.
    fn reduce(numer: i128, denom: i128) -> Option<Self> {
        debug_assert!(denom != 0);
        let g = gcd(numer.unsigned_abs(), denom.unsigned_abs()) as i128;
        let (mut numer, mut denom) = (numer / g, denom / g);
        if denom < 0 {
            numer = -numer;
            denom = -denom;
        }
        Some(Self {
            numer: i64::try_from(numer).ok()?,
            denom: i64::try_from(denom).ok()?,
        })
    }
}

/* ---- ordering ---- */

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the order.
        let lhs = self.numer as i128 * other.denom as i128;
        let rhs = other.numer as i128 * self.denom as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/* ---- standard arithmetic operators ---- */

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let numer = self.numer as i128 * rhs.denom as i128 + rhs.numer as i128 * self.denom as i128;
        let denom = self.denom as i128 * rhs.denom as i128;
        Self::reduce(numer, denom).expect("overflow in Rational addition")
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let numer = self.numer as i128 * rhs.denom as i128 - rhs.numer as i128 * self.denom as i128;
        let denom = self.denom as i128 * rhs.denom as i128;
        Self::reduce(numer, denom).expect("overflow in Rational subtraction")
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let numer = self.numer as i128 * rhs.numer as i128;
        let denom = self.denom as i128 * rhs.denom as i128;
        Self::reduce(numer, denom).expect("overflow in Rational multiplication")
    }
}

impl Div for Rational {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.recip().expect("division by zero in Rational")
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::reduce(-(self.numer as i128), self.denom as i128)
            .expect("overflow in Rational negation")
    }
}

/* ---- conversions and formatting ---- */

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    fn try_from((numer, denom): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(numer, denom)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numer, self.denom)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

/* ---- optional integrations ---- */

#[cfg(feature = "serde")]
impl serde::Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(self.numer, self.denom), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (numer, denom) = <(i64, i64) as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(numer, denom).map_err(serde::de::Error::custom)
    }
}

/// Largest numerator magnitude and denominator drawn by `rng.gen::<Rational>()`.
#[cfg(feature = "rand")]
pub const SAMPLE_BOUND: i64 = 1000;

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<Rational> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Rational {
        let numer = rng.gen_range(-SAMPLE_BOUND..=SAMPLE_BOUND);
        let denom = rng.gen_range(1..=SAMPLE_BOUND);
        Rational::reduce(numer as i128, denom as i128).unwrap_or(Rational::ZERO)
    }
}

/// Every fraction `a / b` with `a, b` drawn from `ints` and `b != 0`.
///
/// # Example
///
/// ```
/// use algebraic_structures::{possible_rationals, Rational};
///
/// let q = possible_rationals([-1, 0, 2]);
/// let shown: Vec<String> = q.iter().map(Rational::to_string).collect();
/// assert_eq!(shown, ["-2", "-1/2", "0", "1"]);
/// ```
pub fn possible_rationals<I>(ints: I) -> BTreeSet<Rational>
where
    I: IntoIterator<Item = i64>,
{
    let ints: BTreeSet<i64> = ints.into_iter().collect();
    ints.iter()
        .flat_map(|&a| ints.iter().filter_map(move |&b| Rational::new(a, b).ok()))
        .collect()
}
