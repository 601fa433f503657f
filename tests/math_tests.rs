use approx::assert_relative_eq;
use ballsim::math::{approx_eq, approx_zero, clamp, lerp, Vector2, EPSILON};

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(4.0, 5.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 5.0);
    assert_eq!(sum.y, 7.0);

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff.x, 3.0);
    assert_eq!(diff.y, 3.0);

    // Scalar multiplication, both orders
    let scaled = v1 * 2.0;
    assert_eq!(scaled.x, 2.0);
    assert_eq!(scaled.y, 4.0);
    let scaled = 3.0 * v1;
    assert_eq!(scaled.x, 3.0);
    assert_eq!(scaled.y, 6.0);

    // Scalar division
    let halved = v2 / 2.0;
    assert_eq!(halved.x, 2.0);
    assert_eq!(halved.y, 2.5);

    // Negation
    let negated = -v1;
    assert_eq!(negated.x, -1.0);
    assert_eq!(negated.y, -2.0);

    // Dot product
    let dot = v1.dot(&v2);
    assert_eq!(dot, 1.0 * 4.0 + 2.0 * 5.0);

    // Length
    let length = v1.length();
    assert_relative_eq!(length, (1.0f32 + 4.0f32).sqrt());
    assert_relative_eq!(v1.length_squared(), 5.0);

    // Normalize
    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized.x, v1.x / length);
    assert_relative_eq!(normalized.y, v1.y / length);

    // Compound assignment
    let mut v = v1;
    v += v2;
    assert_eq!(v, Vector2::new(5.0, 7.0));
    v -= v1;
    assert_eq!(v, v2);
    v *= 2.0;
    assert_eq!(v, Vector2::new(8.0, 10.0));
    v /= 4.0;
    assert_eq!(v, Vector2::new(2.0, 2.5));
}

#[test]
fn test_vector2_normalize_zero_guard() {
    // A zero vector normalizes to itself instead of dividing by zero
    let zero = Vector2::zero();
    let normalized = zero.normalize();
    assert!(normalized.x == 0.0 && normalized.y == 0.0);
    assert!(!normalized.x.is_nan());

    // Vectors below the epsilon threshold are also returned unchanged
    let tiny = Vector2::new(1.0e-8, 0.0);
    let normalized = tiny.normalize();
    assert_eq!(normalized, tiny);

    assert!(zero.is_zero());
    assert!(tiny.is_zero());
    assert!(!Vector2::new(0.1, 0.0).is_zero());
}

#[test]
fn test_vector2_clamp_axes() {
    // Each component clamps independently
    let v = Vector2::new(20.0, -3.0);
    assert_eq!(v.clamp_axes(15.0), Vector2::new(15.0, -3.0));

    let v = Vector2::new(-20.0, 30.0);
    assert_eq!(v.clamp_axes(15.0), Vector2::new(-15.0, 15.0));

    // Values inside the limit are untouched
    let v = Vector2::new(5.0, -7.5);
    assert_eq!(v.clamp_axes(15.0), v);
}

#[test]
fn test_vector2_distance_and_lerp() {
    let a = Vector2::new(1.0, 1.0);
    let b = Vector2::new(4.0, 5.0);

    assert_relative_eq!(a.distance(&b), 5.0);
    assert_relative_eq!(a.distance_squared(&b), 25.0);

    let mid = a.lerp(&b, 0.5);
    assert_relative_eq!(mid.x, 2.5);
    assert_relative_eq!(mid.y, 3.0);

    assert_eq!(a.lerp(&b, 0.0), a);
    assert_eq!(a.lerp(&b, 1.0), b);
}

#[test]
fn test_vector2_nalgebra_roundtrip() {
    let v = Vector2::new(3.5, -2.25);
    let na_v = v.to_nalgebra();
    assert_eq!(na_v.x, 3.5);
    assert_eq!(na_v.y, -2.25);

    let back = Vector2::from_nalgebra(&na_v);
    assert_eq!(back, v);
}

#[test]
fn test_vector2_conversions_and_display() {
    let v: Vector2 = [1.5, 2.5].into();
    assert_eq!(v, Vector2::new(1.5, 2.5));

    let array: [f32; 2] = v.into();
    assert_eq!(array, [1.5, 2.5]);

    assert_eq!(format!("{}", v), "(1.5, 2.5)");

    // Unit constructors
    assert_eq!(Vector2::unit_x(), Vector2::new(1.0, 0.0));
    assert_eq!(Vector2::unit_y(), Vector2::new(0.0, 1.0));
}

#[test]
fn test_scalar_helpers() {
    assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
    assert!(!approx_eq(1.0, 1.001));

    assert!(approx_zero(EPSILON / 2.0));
    assert!(!approx_zero(0.01));

    assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
    assert_eq!(clamp(-5.0, 0.0, 3.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 3.0), 2.0);

    assert_relative_eq!(lerp(0.0, 10.0, 0.25), 2.5);
}
