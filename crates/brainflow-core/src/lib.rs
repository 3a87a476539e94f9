//! # Brainflow Core Library
//!
//! This library provides the core logic for Brainflow, a brain dump capture
//! tool that feeds an energy-based task list. It follows a CLI-first
//! philosophy: every operation is available through the standalone
//! `brainflow` binary, and any richer front end is a thin layer over the
//! same two pure entry points.
//!
//! ## Architecture
//!
//! - **Extractor**: rule-based, offline splitting of freeform text (typed or
//!   transcribed) into discrete task fragments
//! - **Energy classifier**: deterministic keyword scoring into DEEP, STEADY,
//!   LOW or NONE with an explanation and a confidence level
//! - **Brain dump items**: fragments wrapped with ids, timestamps and manual
//!   overrides
//! - **Storage**: TOML configuration and a JSON inbox file
//!
//! Extraction and classification are pure functions of their input and can
//! be called from any thread without coordination.
//!
//! ## Key Components
//!
//! - [`extract_tasks`] / [`TaskExtractor`]: text to task fragments
//! - [`classify`] / [`EnergyClassifier`]: task fragment to energy category
//! - [`process_brain_dump`]: both, producing [`BrainDumpItem`]s
//! - [`Config`] and [`Inbox`]: on-disk state for the CLI

pub mod braindump;
pub mod energy;
pub mod error;
pub mod extract;
pub mod storage;

pub use braindump::{process_brain_dump, BrainDumpItem, BrainDumpSummary};
pub use energy::{
    classify, Classification, ClassificationDetail, ClassificationOutcome, Complexity, Confidence,
    EnergyCategory, EnergyClassifier, EnergyScores, TimeEstimate,
};
pub use error::{ClassificationError, ConfigError, CoreError, StorageError};
pub use extract::{extract_tasks, ExtractorConfig, TaskExtractor};
pub use storage::{Config, Inbox};
