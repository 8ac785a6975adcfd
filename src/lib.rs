//! amapping - Audio mapping functions
//!
//! Stateless conversions used when wiring data to sound: linear range
//! mapping, clipping, MIDI note/frequency, Hertz/Mel and amplitude/decibel.
//! Every function accepts a scalar or an array and returns the same shape.

pub mod mapping;

pub use mapping::{
    amp_to_db, ampdb, clip, clip_max, clip_min, cps_to_midi, cpsmidi, db_to_amp, dbamp,
    hz_to_mel, linlin, mel_to_hz, midi_to_cps, midicps, ClipMode, Mappable, A4_HZ, A4_MIDI,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
