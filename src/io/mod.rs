/*!
# IO utilities

Loading of alignments (Praat TextGrid) and audio (WAV), and saving of audio slices.
!*/
pub mod audio;
pub mod textgrid;

pub use audio::Audio;
pub use textgrid::TextGrid;
