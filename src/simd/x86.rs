//! SSE/AVX registers.
//!
//! `f32` only needs the SSE2 baseline of x86_64 and is always available here. The other types are
//! compiled in only if the target features they need are enabled at compile time (eg. via
//! `-C target-cpu=native`).

// Intrinsics are safe to call in some toolchains when the feature is enabled for the whole crate.
#![allow(unused_unsafe)]

use std::arch::x86_64::*;

use super::{lanes, Kernel};

/// Integer lanes have no division instruction, so they are divided one by one.
#[allow(dead_code)]
fn div_through_memory<T: Kernel>(a: T::Register, b: T::Register) -> T::Register {
    let (mut l, mut r) = ([T::ZERO; 4], [T::ZERO; 4]);
    T::store(&mut l, a);
    T::store(&mut r, b);
    T::load(&lanes::div(l, r))
}

impl Kernel for f32 {
    type Register = __m128;

    #[inline]
    fn set(x: f32, y: f32, z: f32, w: f32) -> __m128 {
        // `_mm_set_ps` takes the highest lane first.
        unsafe { _mm_set_ps(w, z, y, x) }
    }

    #[inline]
    fn add(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_add_ps(a, b) }
    }

    #[inline]
    fn sub(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_sub_ps(a, b) }
    }

    #[inline]
    fn mul(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_mul_ps(a, b) }
    }

    #[inline]
    fn div(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_div_ps(a, b) }
    }

    #[inline]
    fn load(src: &[f32; 4]) -> __m128 {
        // Safety: `src` is valid for reading 16 bytes; `loadu` has no alignment requirement.
        unsafe { _mm_loadu_ps(src.as_ptr()) }
    }

    #[inline]
    fn store(dst: &mut [f32; 4], src: __m128) {
        // Safety: `dst` is valid for writing 16 bytes; `storeu` has no alignment requirement.
        unsafe { _mm_storeu_ps(dst.as_mut_ptr(), src) }
    }

    #[cfg(target_feature = "sse4.1")]
    #[inline]
    fn extract<const LANE: i32>(src: __m128) -> f32 {
        // `extractps` returns the lane's bit pattern.
        f32::from_bits(unsafe { _mm_extract_ps::<LANE>(src) } as u32)
    }

    #[cfg(not(target_feature = "sse4.1"))]
    #[inline]
    fn extract<const LANE: i32>(src: __m128) -> f32 {
        let mut lanes = [0.0; 4];
        Self::store(&mut lanes, src);
        lanes[LANE as usize]
    }

    #[cfg(target_feature = "sse4.1")]
    #[inline]
    fn dot(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_dp_ps::<0xFF>(a, b) }
    }

    #[cfg(not(target_feature = "sse4.1"))]
    #[inline]
    fn dot(a: __m128, b: __m128) -> __m128 {
        unsafe {
            let products = _mm_mul_ps(a, b);
            let high = _mm_movehl_ps(products, products);
            // [p0 + p2, p1 + p3, ..]
            let pairs = _mm_add_ps(products, high);
            let second = _mm_shuffle_ps::<0b01_01_01_01>(pairs, pairs);
            let sum = _mm_add_ss(pairs, second);
            _mm_shuffle_ps::<0>(sum, sum)
        }
    }
}

#[cfg(all(target_feature = "sse4.1", target_feature = "ssse3"))]
impl Kernel for i32 {
    type Register = __m128i;

    #[inline]
    fn set(x: i32, y: i32, z: i32, w: i32) -> __m128i {
        unsafe { _mm_set_epi32(w, z, y, x) }
    }

    #[inline]
    fn add(a: __m128i, b: __m128i) -> __m128i {
        unsafe { _mm_add_epi32(a, b) }
    }

    #[inline]
    fn sub(a: __m128i, b: __m128i) -> __m128i {
        unsafe { _mm_sub_epi32(a, b) }
    }

    #[inline]
    fn mul(a: __m128i, b: __m128i) -> __m128i {
        unsafe { _mm_mullo_epi32(a, b) }
    }

    #[inline]
    fn div(a: __m128i, b: __m128i) -> __m128i {
        div_through_memory::<i32>(a, b)
    }

    #[inline]
    fn load(src: &[i32; 4]) -> __m128i {
        // Safety: `src` is valid for reading 16 bytes; `loadu` has no alignment requirement.
        unsafe { _mm_loadu_si128(src.as_ptr().cast()) }
    }

    #[inline]
    fn store(dst: &mut [i32; 4], src: __m128i) {
        // Safety: `dst` is valid for writing 16 bytes; `storeu` has no alignment requirement.
        unsafe { _mm_storeu_si128(dst.as_mut_ptr().cast(), src) }
    }

    #[inline]
    fn extract<const LANE: i32>(src: __m128i) -> i32 {
        unsafe { _mm_extract_epi32::<LANE>(src) }
    }

    #[inline]
    fn dot(a: __m128i, b: __m128i) -> __m128i {
        unsafe {
            let products = _mm_mullo_epi32(a, b);
            // [p0 + p1, p2 + p3, p0 + p1, p2 + p3]
            let pairs = _mm_hadd_epi32(products, products);
            _mm_hadd_epi32(pairs, pairs)
        }
    }
}

#[cfg(target_feature = "ssse3")]
impl Kernel for i16 {
    type Register = __m128i;

    #[inline]
    fn set(x: i16, y: i16, z: i16, w: i16) -> __m128i {
        unsafe { _mm_set_epi16(0, 0, 0, 0, w, z, y, x) }
    }

    #[inline]
    fn add(a: __m128i, b: __m128i) -> __m128i {
        unsafe { _mm_add_epi16(a, b) }
    }

    #[inline]
    fn sub(a: __m128i, b: __m128i) -> __m128i {
        unsafe { _mm_sub_epi16(a, b) }
    }

    #[inline]
    fn mul(a: __m128i, b: __m128i) -> __m128i {
        unsafe { _mm_mullo_epi16(a, b) }
    }

    #[inline]
    fn div(a: __m128i, b: __m128i) -> __m128i {
        div_through_memory::<i16>(a, b)
    }

    #[inline]
    fn load(src: &[i16; 4]) -> __m128i {
        // Safety: `src` is valid for reading 8 bytes, which is all `loadl` reads. The upper half
        // of the register is zeroed.
        unsafe { _mm_loadl_epi64(src.as_ptr().cast()) }
    }

    #[inline]
    fn store(dst: &mut [i16; 4], src: __m128i) {
        // Safety: `dst` is valid for writing 8 bytes, which is all `storel` writes.
        unsafe { _mm_storel_epi64(dst.as_mut_ptr().cast(), src) }
    }

    #[inline]
    fn extract<const LANE: i32>(src: __m128i) -> i16 {
        unsafe { _mm_extract_epi16::<LANE>(src) as i16 }
    }

    #[inline]
    fn dot(a: __m128i, b: __m128i) -> __m128i {
        unsafe {
            let products = _mm_mullo_epi16(a, b);
            // Lanes 4..8 are zero, so two horizontal adds leave the total in lane 0.
            let pairs = _mm_hadd_epi16(products, products);
            let total = _mm_hadd_epi16(pairs, pairs);
            _mm_move_epi64(_mm_shufflelo_epi16::<0>(total))
        }
    }
}

#[cfg(target_feature = "avx")]
impl Kernel for f64 {
    type Register = __m256d;

    #[inline]
    fn set(x: f64, y: f64, z: f64, w: f64) -> __m256d {
        unsafe { _mm256_set_pd(w, z, y, x) }
    }

    #[inline]
    fn add(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_add_pd(a, b) }
    }

    #[inline]
    fn sub(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_sub_pd(a, b) }
    }

    #[inline]
    fn mul(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_mul_pd(a, b) }
    }

    #[inline]
    fn div(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_div_pd(a, b) }
    }

    #[inline]
    fn load(src: &[f64; 4]) -> __m256d {
        // Safety: `src` is valid for reading 32 bytes; `loadu` has no alignment requirement.
        unsafe { _mm256_loadu_pd(src.as_ptr()) }
    }

    #[inline]
    fn store(dst: &mut [f64; 4], src: __m256d) {
        // Safety: `dst` is valid for writing 32 bytes; `storeu` has no alignment requirement.
        unsafe { _mm256_storeu_pd(dst.as_mut_ptr(), src) }
    }

    #[inline]
    fn extract<const LANE: i32>(src: __m256d) -> f64 {
        unsafe {
            let half = if LANE < 2 {
                _mm256_castpd256_pd128(src)
            } else {
                _mm256_extractf128_pd::<1>(src)
            };
            let lane = if LANE % 2 == 0 {
                half
            } else {
                _mm_unpackhi_pd(half, half)
            };
            _mm_cvtsd_f64(lane)
        }
    }

    #[inline]
    fn dot(a: __m256d, b: __m256d) -> __m256d {
        unsafe {
            let products = _mm256_mul_pd(a, b);
            // [p0 + p2, p1 + p3]
            let pairs = _mm_add_pd(
                _mm256_castpd256_pd128(products),
                _mm256_extractf128_pd::<1>(products),
            );
            let sum = _mm_add_sd(pairs, _mm_unpackhi_pd(pairs, pairs));
            _mm256_set1_pd(_mm_cvtsd_f64(sum))
        }
    }
}
