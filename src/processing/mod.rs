/*! Corpus processing

Directory-level tools: splitting of aligned recordings into bounded segments,
and token statistics over train/dev/test splits.
!*/
pub mod split;
pub mod stats;
