//! Amplitude and decibel conversion

use num_traits::Float;

use super::value::{constant, Mappable};

/// Convert decibels to a linear amplitude
pub fn db_to_amp<V: Mappable>(decibels: V) -> V::Output {
    let ten = constant::<V::Elem>(10.0);
    let twenty = constant::<V::Elem>(20.0);

    decibels.map_each(|db| ten.powf(db / twenty))
}

/// Convert a linear amplitude to decibels
///
/// Silence (`0.0`) maps to `-inf`; negative amplitudes give NaN.
pub fn amp_to_db<V: Mappable>(amp: V) -> V::Output {
    let twenty = constant::<V::Elem>(20.0);

    amp.map_each(|a| twenty * a.log10())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_values() {
        assert_eq!(db_to_amp(0.0_f64), 1.0);
        assert_relative_eq!(db_to_amp(20.0_f64), 10.0, epsilon = 1e-12);
        assert_relative_eq!(db_to_amp(-6.0_f64), 0.501187233627272, epsilon = 1e-12);
        assert_eq!(amp_to_db(1.0_f64), 0.0);
        assert_relative_eq!(amp_to_db(0.1_f64), -20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_db_round_trip() {
        for x in 0..128 {
            let x = x as f64;
            assert_relative_eq!(amp_to_db(db_to_amp(x)), x, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_db_array_f32() {
        let amps = db_to_amp([0.0_f32, -20.0, -40.0]);
        assert_relative_eq!(amps[0], 1.0);
        assert_relative_eq!(amps[1], 0.1, epsilon = 1e-6);
        assert_relative_eq!(amps[2], 0.01, epsilon = 1e-6);
    }

    #[test]
    fn test_silence_and_negative() {
        assert_eq!(amp_to_db(0.0_f64), f64::NEG_INFINITY);
        assert!(amp_to_db(-1.0_f64).is_nan());
        assert_eq!(db_to_amp(f64::NEG_INFINITY), 0.0);
    }
}
