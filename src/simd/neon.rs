//! NEON registers.

#![allow(unused_unsafe)]

use std::arch::aarch64::*;

use super::{lanes, Kernel};

impl Kernel for f32 {
    type Register = float32x4_t;

    #[inline]
    fn set(x: f32, y: f32, z: f32, w: f32) -> float32x4_t {
        Self::load(&[x, y, z, w])
    }

    #[inline]
    fn add(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vaddq_f32(a, b) }
    }

    #[inline]
    fn sub(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vsubq_f32(a, b) }
    }

    #[inline]
    fn mul(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vmulq_f32(a, b) }
    }

    #[inline]
    fn div(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vdivq_f32(a, b) }
    }

    #[inline]
    fn load(src: &[f32; 4]) -> float32x4_t {
        // Safety: `src` is valid for reading 4 `f32`s.
        unsafe { vld1q_f32(src.as_ptr()) }
    }

    #[inline]
    fn store(dst: &mut [f32; 4], src: float32x4_t) {
        // Safety: `dst` is valid for writing 4 `f32`s.
        unsafe { vst1q_f32(dst.as_mut_ptr(), src) }
    }

    #[inline]
    fn extract<const LANE: i32>(src: float32x4_t) -> f32 {
        unsafe { vgetq_lane_f32::<LANE>(src) }
    }

    #[inline]
    fn dot(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vdupq_n_f32(vaddvq_f32(vmulq_f32(a, b))) }
    }
}

impl Kernel for i32 {
    type Register = int32x4_t;

    #[inline]
    fn set(x: i32, y: i32, z: i32, w: i32) -> int32x4_t {
        Self::load(&[x, y, z, w])
    }

    #[inline]
    fn add(a: int32x4_t, b: int32x4_t) -> int32x4_t {
        unsafe { vaddq_s32(a, b) }
    }

    #[inline]
    fn sub(a: int32x4_t, b: int32x4_t) -> int32x4_t {
        unsafe { vsubq_s32(a, b) }
    }

    #[inline]
    fn mul(a: int32x4_t, b: int32x4_t) -> int32x4_t {
        unsafe { vmulq_s32(a, b) }
    }

    /// NEON has no integer division; lanes are divided one by one.
    #[inline]
    fn div(a: int32x4_t, b: int32x4_t) -> int32x4_t {
        let (mut l, mut r) = ([0; 4], [0; 4]);
        Self::store(&mut l, a);
        Self::store(&mut r, b);
        Self::load(&lanes::div(l, r))
    }

    #[inline]
    fn load(src: &[i32; 4]) -> int32x4_t {
        // Safety: `src` is valid for reading 4 `i32`s.
        unsafe { vld1q_s32(src.as_ptr()) }
    }

    #[inline]
    fn store(dst: &mut [i32; 4], src: int32x4_t) {
        // Safety: `dst` is valid for writing 4 `i32`s.
        unsafe { vst1q_s32(dst.as_mut_ptr(), src) }
    }

    #[inline]
    fn extract<const LANE: i32>(src: int32x4_t) -> i32 {
        unsafe { vgetq_lane_s32::<LANE>(src) }
    }

    #[inline]
    fn dot(a: int32x4_t, b: int32x4_t) -> int32x4_t {
        unsafe { vdupq_n_s32(vaddvq_s32(vmulq_s32(a, b))) }
    }
}
