//! Per-character face buffer and word classifications.
//!
//! A [`Classifications`] buffer is rebuilt for every version of the input
//! line. Match generators classify words (through a [`CommandClassifier`]
//! scoped to one command) and may paint explicit colors; [`Classifications::finish`]
//! then paints class-derived faces wherever nothing explicit was applied. The
//! display layer reads one [`Face`] per character and maps it to an SGR
//! sequence with a [`FacePalette`].

mod binding;
mod classifications;
mod error;
mod face;
mod palette;
mod registry;

pub use binding::CommandClassifier;
pub use classifications::{Classifications, WordInfo};
pub use error::ClassifyError;
pub use face::{Face, WordClass};
pub use palette::{FacePalette, render_ansi};
pub use registry::{FACE_REGISTRY_CAPACITY, FaceRegistry};

#[cfg(test)]
mod tests;
