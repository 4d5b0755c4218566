//! Named access to vector lanes.
//!
//! The view structs have the same layout as the lane array, so a vector can be reborrowed as a
//! view without copying.

use std::ops::{Deref, DerefMut};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (), // prevent external construction
}

/// Width and height, for vectors holding a size.
#[repr(C)]
pub struct WH<T> {
    pub w: T,
    pub h: T,
    _priv: (), // prevent external construction
}

// Safety: every view is `#[repr(C)]` with `N` fields of type `T` followed by a zero-sized field,
// which matches the layout of `[T; N]`.
macro_rules! view {
    ($from:ty => $to:ident) => {
        impl<T> Deref for $from {
            type Target = $to<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                unsafe { &*(self as *const Self).cast::<$to<T>>() }
            }
        }

        impl<T> DerefMut for $from {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                unsafe { &mut *(self as *mut Self).cast::<$to<T>>() }
            }
        }
    };
}

view!(Vector<T, 2> => XY);
view!(XY<T> => WH);
view!(Vector<T, 4> => XYZW);
view!(XYZW<T> => RGBA);
