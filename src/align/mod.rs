pub mod merge;
pub mod merged;
pub mod phones;

pub use merge::{Merge, Merger};
pub use merged::{strip_annotations, MergedToken};
pub use phones::{prepare_phones, PhoneCursor};
