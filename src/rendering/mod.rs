pub mod halftone;
