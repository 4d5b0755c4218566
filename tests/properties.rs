//! Algebraic properties checked on pseudo-random inputs.
//!
//! Every test uses a fixed seed, so failures are reproducible.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use fastrand::Rng;
use inopine::*;

const ROUNDS: usize = 500;

fn vec4f(rng: &mut Rng) -> Vec4f {
    Vector::from_fn(|_| rng.f32() * 20.0 - 10.0)
}

fn vec4i(rng: &mut Rng, range: std::ops::Range<i32>) -> Vec4i {
    Vector::from_fn(|_| rng.i32(range.clone()))
}

fn mat4f(rng: &mut Rng) -> Mat4f {
    Matrix::from_fn(|_, _| rng.f32() * 4.0 - 2.0)
}

#[test]
fn add_sub_inverse() {
    let mut rng = Rng::with_seed(0x5be1_9f27_41c8_0d3a);
    for _ in 0..ROUNDS {
        let (a, b) = (vec4i(&mut rng, -1 << 20..1 << 20), vec4i(&mut rng, -1 << 20..1 << 20));
        assert_eq!(a + b - b, a);

        let (a, b) = (vec4f(&mut rng), vec4f(&mut rng));
        assert_abs_diff_eq!(a + b - b, a, epsilon = 1e-5);

        let mut c = a;
        c += b;
        c -= b;
        assert_abs_diff_eq!(c, a, epsilon = 1e-5);
    }
}

#[test]
fn dot_commutes() {
    let mut rng = Rng::with_seed(0x0c47_a6e2_9b31_f508);
    for _ in 0..ROUNDS {
        let (a, b) = (vec4f(&mut rng), vec4f(&mut rng));
        assert_eq!(a.dot(b), b.dot(a));
        assert_relative_eq!(
            a.dot(b),
            a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w,
            epsilon = 1e-3
        );

        let (a, b) = (vec4i(&mut rng, -1000..1000), vec4i(&mut rng, -1000..1000));
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(
            a.cast::<i16>().dot(b.cast::<i64>()),
            a.x as i64 * b.x as i64
                + a.y as i64 * b.y as i64
                + a.z as i64 * b.z as i64
                + a.w as i64 * b.w as i64
        );
    }
}

#[test]
fn cross_anticommutes_and_is_orthogonal() {
    let mut rng = Rng::with_seed(0xd2f0_6b18_7e54_c39a);
    for _ in 0..ROUNDS {
        let (a, b) = (vec4f(&mut rng), vec4f(&mut rng));
        let c = a.cross(b);
        assert_eq!(c, -b.cross(a));
        assert_eq!(c.w, 0.0);
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-2);
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-2);

        // Integers have no rounding, so orthogonality is exact.
        let (a, b) = (vec4i(&mut rng, -100..100), vec4i(&mut rng, -100..100));
        let c = a.cross(b);
        assert_eq!(c, -b.cross(a));
        assert_eq!(c.dot(vec4(a.x, a.y, a.z, 0)), 0);
        assert_eq!(c.dot(vec4(b.x, b.y, b.z, 0)), 0);
    }
}

#[test]
fn normalized_length() {
    let mut rng = Rng::with_seed(0x71a3_e0c9_42bd_865f);
    for _ in 0..ROUNDS {
        let v = vec4f(&mut rng);
        if v.length() < 1e-3 {
            continue;
        }
        assert_relative_eq!(v.normalized().length(), 1.0, epsilon = 1e-5);

        let d = v.cast::<f64>();
        assert_relative_eq!(d.normalized().length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn widening_cast() {
    let mut rng = Rng::with_seed(0x3e8d_5c02_f916_ab47);
    for _ in 0..ROUNDS {
        let v = vec4f(&mut rng);
        let wide = v.cast::<f64>();
        for i in 0..4 {
            assert_eq!(wide[i], v[i] as f64);
        }
        assert_eq!(wide, v);
        assert_eq!(wide.cast::<f32>(), v);
    }
}

#[test]
fn mixed_types_match_promoted_operands() {
    let mut rng = Rng::with_seed(0x9a61_d4f3_0b7c_2e85);
    for _ in 0..ROUNDS {
        let a: Vec4<i16> = Vector::from_fn(|_| rng.i16(-300..300));
        let b = vec4f(&mut rng);
        let promoted = a.cast::<f32>();
        assert_eq!(a + b, promoted + b);
        assert_eq!(a * b, promoted * b);
        assert_eq!(b - a, b - promoted);
        // Only the promoted operands share a register, so the dot products may round differently.
        assert_relative_eq!(a.dot(b), promoted.dot(b), epsilon = 1e-3);

        let c: Vec4<u8> = Vector::from_fn(|_| rng.u8(..));
        let d = vec4i(&mut rng, -1000..1000);
        assert_eq!(c + d, c.cast::<i32>() + d);
    }
}

#[test]
fn integer_overflow_wraps() {
    let mut rng = Rng::with_seed(0x6f0d_3b92_e1a7_5c48);
    for _ in 0..ROUNDS {
        let a: Vec4i = Vector::from_fn(|_| rng.i32(..));
        let b: Vec4i = Vector::from_fn(|_| rng.i32(..));
        let c: Vec4<i16> = Vector::from_fn(|_| rng.i16(..));

        let (sum, diff, prod) = (a + b, a - b, a * b);
        let mixed = a + c;
        for i in 0..4 {
            assert_eq!(sum[i], a[i].wrapping_add(b[i]));
            assert_eq!(diff[i], a[i].wrapping_sub(b[i]));
            assert_eq!(prod[i], a[i].wrapping_mul(b[i]));
            assert_eq!(mixed[i], a[i].wrapping_add(c[i] as i32));
        }
        assert_eq!(
            a.dot(b),
            (0..4).fold(0i32, |acc, i| acc.wrapping_add(a[i].wrapping_mul(b[i])))
        );
    }
}

#[test]
fn scalar_ops() {
    let mut rng = Rng::with_seed(0x24c7_0f9e_b853_6d1a);
    for _ in 0..ROUNDS {
        let v = vec4i(&mut rng, -1000..1000);
        assert_eq!(v * 2, v + v);
        assert_eq!(v * 6 / 3, v * 2);

        let f = vec4f(&mut rng);
        assert_eq!(f * 0.5, f / 2.0);
    }
}

#[test]
fn matrix_identities() {
    let mut rng = Rng::with_seed(0xe6b4_28d1_c07f_935a);
    for _ in 0..ROUNDS {
        let m = mat4f(&mut rng);
        assert_eq!(Mat4f::IDENTITY * m, m);
        assert_eq!(m * Mat4f::IDENTITY, m);
        assert_eq!(m.transpose().transpose(), m);

        for i in 0..4 {
            let unit = Vector::from_fn(|lane| if lane == i { 1.0f32 } else { 0.0 });
            assert_eq!(unit * m, m.row(i));
        }
    }
}

#[test]
fn matrix_product_associates_with_vectors() {
    let mut rng = Rng::with_seed(0x58f2_b9a0_6d13_e7c4);
    for _ in 0..ROUNDS {
        let (a, b) = (mat4f(&mut rng), mat4f(&mut rng));
        let v = vec4f(&mut rng);
        assert_abs_diff_eq!((v * a) * b, v * (a * b), epsilon = 1e-2);
        assert_relative_eq!((a * b).transpose(), b.transpose() * a.transpose(), epsilon = 1e-5);
    }
}

#[test]
fn rotations_are_orthogonal() {
    let mut rng = Rng::with_seed(0x0f3d_c8a5_7b26_e194);
    for _ in 0..ROUNDS {
        let angle = rng.f32() * 8.0 - 4.0;
        for r in [
            Mat4f::rotation_x(angle),
            Mat4f::rotation_y(angle),
            Mat4f::rotation_z(angle),
        ] {
            assert_abs_diff_eq!(r * r.transpose(), Mat4f::IDENTITY, epsilon = 1e-5);
        }

        let (x, y, z) = (rng.f64() * 6.0, rng.f64() * 6.0, rng.f64() * 6.0);
        let r = Mat4d::rotation(x, y, z);
        assert_abs_diff_eq!(r * r.transpose(), Mat4d::IDENTITY, epsilon = 1e-12);

        // Rotations preserve length.
        let v = vec4f(&mut rng);
        let v = vec4(v.x, v.y, v.z, 0.0);
        assert_relative_eq!((v * Mat4f::rotation_y(angle)).length(), v.length(), epsilon = 1e-4);
    }
}

/// Bit-at-a-time CRC-32 without a lookup table.
fn crc32_bitwise(data: &[u8]) -> u32 {
    let mut acc = u32::MAX;
    for &byte in data {
        acc ^= byte as u32;
        for _ in 0..8 {
            acc = if acc & 1 == 1 {
                (acc >> 1) ^ 0xEDB8_8320
            } else {
                acc >> 1
            };
        }
    }
    acc
}

#[test]
fn checksums() {
    let mut rng = Rng::with_seed(0xb1e7_4a09_23fc_d685);

    assert_eq!(Crc32::compute(b"123456789"), 0x340B_C6D9);
    assert_eq!(!Crc32::compute(b"123456789"), 0xCBF4_3926);
    assert_eq!(Adler32::compute(&[]), 1);
    assert_eq!(Adler32::compute(&[97]), (98 << 16) | 98);

    for _ in 0..50 {
        let len = rng.usize(0..2000);
        let data: Vec<u8> = (0..len).map(|_| rng.u8(..)).collect();
        assert_eq!(Crc32::compute(&data), crc32_bitwise(&data));

        let adler = Adler32::compute(&data);
        assert!(adler & 0xFFFF < 65521);
        assert!(adler >> 16 < 65521);

        // A single flipped bit always changes the CRC.
        if !data.is_empty() {
            let mut flipped = data.clone();
            let i = rng.usize(..flipped.len());
            flipped[i] ^= 1u8 << rng.u32(0..8);
            assert_ne!(Crc32::compute(&flipped), Crc32::compute(&data));
        }
    }
}
