//! Merges utterance transcripts with their phonetic transcription.
//!
//! Each corpus line `id|text` becomes `id word[phones]punct ...`, or is
//! reported when the two token streams cannot be put in correspondence.

pub mod align;
pub mod app;
pub mod engine;
pub mod input;
pub mod normalize;
pub mod phonemizer;
