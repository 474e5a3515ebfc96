//! Owned strided image storage.
//!
//! [`Image`] stores `components` interleaved values per cell over a data
//! extent whose mins need not be zero. Memory is row-major with x
//! fastest, so the per-axis increments are `[c, c*nx, c*nx*ny]`.
//! [`ScalarImage`] erases the element type for callers that only learn
//! the mask type at runtime.

use crate::axis::Axis;
use crate::error::EdtError;
use crate::extent::Extent;
use crate::scalar::{Scalar, ScalarType};
use crate::spacing::Spacing;

/// Owned image over an inclusive extent.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    extent: Extent,
    spacing: Spacing,
    components: usize,
    data: Vec<T>,
}

impl<T: Scalar> Image<T> {
    /// Allocate an image with every element set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::ZeroComponents`] if `components == 0`.
    pub fn new(extent: Extent, components: usize, fill: T) -> Result<Self, EdtError> {
        if components == 0 {
            return Err(EdtError::ZeroComponents);
        }
        Ok(Self {
            extent,
            spacing: Spacing::default(),
            components,
            data: vec![fill; extent.cell_count() * components],
        })
    }

    /// Wrap an existing buffer laid out in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::ZeroComponents`] for zero components and
    /// [`EdtError::LengthMismatch`] if `data` does not hold exactly
    /// `cell_count * components` elements.
    pub fn from_vec(extent: Extent, components: usize, data: Vec<T>) -> Result<Self, EdtError> {
        if components == 0 {
            return Err(EdtError::ZeroComponents);
        }
        let expected = extent.cell_count() * components;
        if data.len() != expected {
            return Err(EdtError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            extent,
            spacing: Spacing::default(),
            components,
            data,
        })
    }

    /// Replace the voxel spacing.
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Replace the voxel spacing in place.
    pub fn set_spacing(&mut self, spacing: Spacing) {
        self.spacing = spacing;
    }

    /// Extent covered by the stored data.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Voxel spacing.
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Values per cell.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Raw element buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw element buffer.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Element step for a unit move along x, y, and z.
    pub fn increments(&self) -> [usize; 3] {
        let [nx, ny, _] = self.extent.dims();
        let c = self.components;
        [c, c * nx, c * nx * ny]
    }

    /// Buffer index of component 0 at `coord`, or `None` outside the data.
    pub fn index_of(&self, coord: [i32; 3]) -> Option<usize> {
        if !self.extent.contains_coord(coord) {
            return None;
        }
        let inc = self.increments();
        let min = self.extent.min();
        let offset = (0..3)
            .map(|a| (coord[a] - min[a]) as usize * inc[a])
            .sum();
        Some(offset)
    }

    /// Component 0 at `coord`.
    pub fn get(&self, coord: [i32; 3]) -> Option<T> {
        self.index_of(coord).map(|i| self.data[i])
    }

    /// Mutable component 0 at `coord`.
    pub fn get_mut(&mut self, coord: [i32; 3]) -> Option<&mut T> {
        let i = self.index_of(coord)?;
        Some(&mut self.data[i])
    }

    /// Check that `extent` lies inside the stored data.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::ExtentOutOfBounds`] otherwise.
    pub fn require_contains(&self, extent: &Extent) -> Result<(), EdtError> {
        if self.extent.contains(extent) {
            Ok(())
        } else {
            Err(EdtError::ExtentOutOfBounds {
                requested: *extent,
                available: self.extent,
            })
        }
    }

    /// Copy a sub-extent (all components, same spacing) into a new image.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::ExtentOutOfBounds`] if `extent` is not inside
    /// the stored data.
    pub fn crop(&self, extent: &Extent) -> Result<Image<T>, EdtError> {
        self.require_contains(extent)?;
        let row = extent.len(Axis::X) * self.components;
        let mut data = Vec::with_capacity(extent.cell_count() * self.components);
        for z in extent.axis_min(Axis::Z)..=extent.axis_max(Axis::Z) {
            for y in extent.axis_min(Axis::Y)..=extent.axis_max(Axis::Y) {
                let start = self.row_start(extent, y, z);
                data.extend_from_slice(&self.data[start..start + row]);
            }
        }
        Ok(Image {
            extent: *extent,
            spacing: self.spacing,
            components: self.components,
            data,
        })
    }

    /// Write a cropped image back over the matching region of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`EdtError::ExtentOutOfBounds`] if `piece` lies outside the
    /// stored data, or [`EdtError::ComponentMismatch`] if the component
    /// counts differ.
    pub fn paste(&mut self, piece: &Image<T>) -> Result<(), EdtError> {
        self.require_contains(&piece.extent)?;
        if piece.components != self.components {
            return Err(EdtError::ComponentMismatch {
                expected: self.components,
                actual: piece.components,
            });
        }
        let extent = piece.extent;
        let row = extent.len(Axis::X) * self.components;
        let mut src = piece.data.chunks_exact(row);
        for z in extent.axis_min(Axis::Z)..=extent.axis_max(Axis::Z) {
            for y in extent.axis_min(Axis::Y)..=extent.axis_max(Axis::Y) {
                let start = self.row_start(&extent, y, z);
                if let Some(chunk) = src.next() {
                    self.data[start..start + row].copy_from_slice(chunk);
                }
            }
        }
        Ok(())
    }

    fn row_start(&self, extent: &Extent, y: i32, z: i32) -> usize {
        let inc = self.increments();
        let min = self.extent.min();
        (extent.axis_min(Axis::X) - min[0]) as usize * inc[0]
            + (y - min[1]) as usize * inc[1]
            + (z - min[2]) as usize * inc[2]
    }
}

/// An image whose element type is only known at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarImage {
    /// `i8` elements.
    I8(Image<i8>),
    /// `u8` elements.
    U8(Image<u8>),
    /// `i16` elements.
    I16(Image<i16>),
    /// `u16` elements.
    U16(Image<u16>),
    /// `i32` elements.
    I32(Image<i32>),
    /// `u32` elements.
    U32(Image<u32>),
    /// `i64` elements.
    I64(Image<i64>),
    /// `u64` elements.
    U64(Image<u64>),
    /// `f32` elements.
    F32(Image<f32>),
    /// `f64` elements.
    F64(Image<f64>),
}

/// Run `$body` with `$img` bound to the typed image inside a
/// [`ScalarImage`] (or `&`/`&mut` to one), whatever its element type.
#[macro_export]
macro_rules! dispatch_scalar {
    ($image:expr, $img:ident => $body:expr) => {
        match $image {
            $crate::ScalarImage::I8($img) => $body,
            $crate::ScalarImage::U8($img) => $body,
            $crate::ScalarImage::I16($img) => $body,
            $crate::ScalarImage::U16($img) => $body,
            $crate::ScalarImage::I32($img) => $body,
            $crate::ScalarImage::U32($img) => $body,
            $crate::ScalarImage::I64($img) => $body,
            $crate::ScalarImage::U64($img) => $body,
            $crate::ScalarImage::F32($img) => $body,
            $crate::ScalarImage::F64($img) => $body,
        }
    };
}

impl ScalarImage {
    /// Element type tag.
    pub fn scalar_type(&self) -> ScalarType {
        dispatch_scalar!(self, img => scalar_type_of(img))
    }

    /// Values per cell.
    pub fn components(&self) -> usize {
        dispatch_scalar!(self, img => img.components())
    }

    /// Extent covered by the stored data.
    pub fn extent(&self) -> Extent {
        dispatch_scalar!(self, img => img.extent())
    }

    /// Voxel spacing.
    pub fn spacing(&self) -> Spacing {
        dispatch_scalar!(self, img => img.spacing())
    }

    /// The typed image, if the elements are `f64`.
    pub fn as_f64(&self) -> Option<&Image<f64>> {
        match self {
            Self::F64(img) => Some(img),
            _ => None,
        }
    }

    /// The typed image mutably, if the elements are `f64`.
    pub fn as_f64_mut(&mut self) -> Option<&mut Image<f64>> {
        match self {
            Self::F64(img) => Some(img),
            _ => None,
        }
    }
}

fn scalar_type_of<T: Scalar>(_: &Image<T>) -> ScalarType {
    T::TYPE
}

macro_rules! impl_from_image {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Image<$ty>> for ScalarImage {
                fn from(img: Image<$ty>) -> Self {
                    Self::$variant(img)
                }
            }
        )*
    };
}

impl_from_image!(
    i8 => I8, u8 => U8, i16 => I16, u16 => U16, i32 => I32,
    u32 => U32, i64 => I64, u64 => U64, f32 => F32, f64 => F64,
);
