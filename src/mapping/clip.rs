//! Clipping to a fixed range

use num_traits::Float;

use super::value::Mappable;

/// Clamp `value` into `[min, max]`
///
/// Arrays are computed as `max(min(value, max), min)`, so with inverted
/// bounds every element comes out as `min` and NaN on either side
/// propagates. A scalar is checked against `min` first, then `max`: with
/// inverted bounds it lands on whichever bound it crosses, and NaN bounds
/// leave it unchanged.
pub fn clip<V: Mappable>(value: V, min: V::Elem, max: V::Elem) -> V::Output {
    value.clamp_each(min, max)
}

/// Clamp `value` from below only
pub fn clip_min<V: Mappable>(value: V, min: V::Elem) -> V::Output {
    clip(value, min, <V::Elem as Float>::infinity())
}

/// Clamp `value` from above only
pub fn clip_max<V: Mappable>(value: V, max: V::Elem) -> V::Output {
    clip(value, <V::Elem as Float>::neg_infinity(), max)
}
