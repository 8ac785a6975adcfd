//! Hertz and Mel conversion

use num_traits::Float;

use super::value::{constant, Mappable};

const MEL_FACTOR: f64 = 2595.0;
const MEL_BREAK_HZ: f64 = 700.0;

/// Convert Hertz to Mels
///
/// Input below -700 Hz gives NaN.
pub fn hz_to_mel<V: Mappable>(hz: V) -> V::Output {
    let factor = constant::<V::Elem>(MEL_FACTOR);
    let break_hz = constant::<V::Elem>(MEL_BREAK_HZ);
    let one = constant::<V::Elem>(1.0);

    hz.map_each(|f| factor * (one + f / break_hz).log10())
}

/// Convert Mels to Hertz
pub fn mel_to_hz<V: Mappable>(mel: V) -> V::Output {
    let factor = constant::<V::Elem>(MEL_FACTOR);
    let break_hz = constant::<V::Elem>(MEL_BREAK_HZ);
    let one = constant::<V::Elem>(1.0);
    let ten = constant::<V::Elem>(10.0);

    mel.map_each(|m| break_hz * (ten.powf(m / factor) - one))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::Array1;

    #[test]
    fn test_known_values() {
        assert_abs_diff_eq!(hz_to_mel(440.0_f64), 549.64, epsilon = 0.01);
        assert_abs_diff_eq!(mel_to_hz(549.64_f64), 440.0, epsilon = 0.01);
        assert_eq!(hz_to_mel(0.0_f64), 0.0);
        assert_eq!(mel_to_hz(0.0_f64), 0.0);
    }

    #[test]
    fn test_mel_round_trip() {
        for x in 0..128 {
            let x = x as f64;
            assert_abs_diff_eq!(hz_to_mel(mel_to_hz(x)), x, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_mel_array() {
        let hz = Array1::linspace(0.0, 8000.0, 9);
        let mel = hz_to_mel(&hz);
        assert_eq!(mel.len(), 9);
        for (f, m) in hz.iter().zip(mel.iter()) {
            assert_relative_eq!(*m, hz_to_mel(*f));
        }
        let back = mel_to_hz(mel);
        for (f, b) in hz.iter().zip(back.iter()) {
            assert_abs_diff_eq!(*f, *b, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_below_domain() {
        assert_eq!(hz_to_mel(-700.0_f64), f64::NEG_INFINITY);
        assert!(hz_to_mel(-800.0_f64).is_nan());
    }
}
