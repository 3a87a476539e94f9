//! Energy classification.
//!
//! Assigns each task one of four energy categories (DEEP, STEADY, LOW, NONE)
//! from keyword matches and complexity / time cues in its description.

mod category;
mod classifier;
mod signals;

pub use category::{Confidence, EnergyCategory, ParseCategoryError};
pub use classifier::{
    classify, keywords, score, Classification, ClassificationDetail, ClassificationOutcome,
    EnergyClassifier, EnergyScores, MIN_DESCRIPTION_CHARS,
};
pub use signals::{Complexity, TimeEstimate};
