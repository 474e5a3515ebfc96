//! Supported mask element types.
//!
//! The mask input may be any of the numeric primitives listed in
//! [`ScalarType`]; the distance output is always `f64`.

use std::fmt;
use std::str::FromStr;

use crate::error::EdtError;

/// Element type tag for a type-erased image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// `i8`
    I8,
    /// `u8`
    U8,
    /// `i16`
    I16,
    /// `u16`
    U16,
    /// `i32`
    I32,
    /// `u32`
    U32,
    /// `i64`
    I64,
    /// `u64`
    U64,
    /// `f32`
    F32,
    /// `f64`
    F64,
}

impl ScalarType {
    /// Every supported type.
    pub const ALL: [ScalarType; 10] = [
        Self::I8,
        Self::U8,
        Self::I16,
        Self::U16,
        Self::I32,
        Self::U32,
        Self::I64,
        Self::U64,
        Self::F32,
        Self::F64,
    ];

    /// Lowercase Rust primitive name.
    pub fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarType {
    type Err = EdtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| EdtError::UnknownScalarType {
                name: s.to_string(),
            })
    }
}

/// A numeric element type the transform can read as a mask.
pub trait Scalar: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Runtime tag for this type.
    const TYPE: ScalarType;
    /// Additive identity; the "background" mask value.
    const ZERO: Self;

    /// Widen to `f64`. 64-bit integers beyond 2^53 round.
    fn to_f64(self) -> f64;

    /// Exactly equal to zero. NaN is never zero.
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_scalar {
    ($($ty:ty => $tag:ident, $zero:expr;)*) => {
        $(
            impl Scalar for $ty {
                const TYPE: ScalarType = ScalarType::$tag;
                const ZERO: Self = $zero;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar! {
    i8 => I8, 0;
    u8 => U8, 0;
    i16 => I16, 0;
    u16 => U16, 0;
    i32 => I32, 0;
    u32 => U32, 0;
    i64 => I64, 0;
    u64 => U64, 0;
    f32 => F32, 0.0;
    f64 => F64, 0.0;
}
