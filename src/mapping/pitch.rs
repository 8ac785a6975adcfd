//! MIDI note and frequency conversion
//!
//! Equal temperament referenced to A4 = MIDI note 69 = 440 Hz.

use num_traits::Float;

use super::value::{constant, Mappable};

/// MIDI note number of the reference pitch A4
pub const A4_MIDI: f64 = 69.0;

/// Frequency of the reference pitch A4 in Hz
pub const A4_HZ: f64 = 440.0;

/// Convert a MIDI note to cycles per second
///
/// Fractional notes are allowed and give detuned frequencies.
pub fn midi_to_cps<V: Mappable>(midi_note: V) -> V::Output {
    let a4_midi = constant::<V::Elem>(A4_MIDI);
    let a4_hz = constant::<V::Elem>(A4_HZ);
    let two = constant::<V::Elem>(2.0);
    let semitones = constant::<V::Elem>(12.0);

    midi_note.map_each(|m| a4_hz * two.powf((m - a4_midi) / semitones))
}

/// Convert cycles per second to a (fractional) MIDI note
///
/// Non-positive input gives `-inf` or NaN.
pub fn cps_to_midi<V: Mappable>(cps: V) -> V::Output {
    let a4_midi = constant::<V::Elem>(A4_MIDI);
    let a4_hz = constant::<V::Elem>(A4_HZ);
    let semitones = constant::<V::Elem>(12.0);

    cps.map_each(|f| a4_midi + semitones * (f / a4_hz).log2())
}
