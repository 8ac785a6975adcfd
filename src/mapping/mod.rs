//! Mapping functions for audio parameters
//!
//! Each function is pure and shape-preserving; see [`Mappable`] for the
//! accepted input types.

mod clip;
mod level;
mod linear;
mod mel;
mod pitch;
mod value;

pub use clip::{clip, clip_max, clip_min};
pub use level::{amp_to_db, amp_to_db as ampdb, db_to_amp, db_to_amp as dbamp};
pub use linear::{linlin, ClipMode};
pub use mel::{hz_to_mel, mel_to_hz};
pub use pitch::{
    cps_to_midi, cps_to_midi as cpsmidi, midi_to_cps, midi_to_cps as midicps, A4_HZ, A4_MIDI,
};
pub use value::Mappable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(midicps(60.0_f64), midi_to_cps(60.0_f64));
        assert_eq!(cpsmidi(261.0_f64), cps_to_midi(261.0_f64));
        assert_eq!(dbamp(-3.0_f64), db_to_amp(-3.0_f64));
        assert_eq!(ampdb(0.5_f64), amp_to_db(0.5_f64));
    }

    #[test]
    fn test_chained_conversions() {
        // Control value -> MIDI note -> Hz -> Mel
        let note = linlin(0.5_f64, 0.0, 1.0, 57.0, 81.0, ClipMode::MinMax);
        assert_eq!(note, 69.0);
        let hz = midi_to_cps(note);
        assert_eq!(hz, A4_HZ);
        assert!((hz_to_mel(hz) - 549.64).abs() < 0.01);
    }
}
