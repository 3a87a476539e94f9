//! Brain dump items: extracted fragments paired with their energy category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::energy::{Confidence, EnergyCategory, EnergyClassifier};
use crate::extract::TaskExtractor;

/// One captured task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrainDumpItem {
    pub id: String,
    pub text: String,
    pub category: Option<EnergyCategory>,
    pub confidence: Option<Confidence>,
    pub explanation: Option<String>,
    /// Classifier rejection message, shown in place of a category.
    pub error: Option<String>,
    /// Category was set by hand instead of by the classifier.
    #[serde(default)]
    pub overridden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BrainDumpItem {
    /// Classify a fragment and wrap it in a new item.
    pub fn from_fragment(text: impl Into<String>, classifier: &EnergyClassifier) -> Self {
        let text = text.into();
        let now = Utc::now();
        let mut item = Self {
            id: Uuid::new_v4().to_string(),
            text,
            category: None,
            confidence: None,
            explanation: None,
            error: None,
            overridden: false,
            created_at: now,
            updated_at: now,
        };
        match classifier.classify(&item.text) {
            Ok(result) => {
                item.category = Some(result.category);
                item.confidence = Some(result.confidence);
                item.explanation = Some(result.explanation);
            }
            Err(err) => item.error = Some(err.to_string()),
        }
        item
    }

    /// Set the category by hand. The classifier's confidence no longer
    /// applies and the explanation is replaced with a manual note.
    pub fn override_category(&mut self, category: EnergyCategory) {
        self.category = Some(category);
        self.confidence = None;
        self.explanation = Some(format!("Set manually to {} ({}).", category, category.label()));
        self.overridden = true;
        self.error = None;
        self.updated_at = Utc::now();
    }
}

/// Extract every task from a brain dump and classify each one.
pub fn process_brain_dump(
    text: &str,
    extractor: &TaskExtractor,
    classifier: &EnergyClassifier,
) -> Vec<BrainDumpItem> {
    let items: Vec<BrainDumpItem> = extractor
        .extract(text)
        .into_iter()
        .map(|fragment| BrainDumpItem::from_fragment(fragment, classifier))
        .collect();
    tracing::info!(items = items.len(), "processed brain dump");
    items
}

/// Item counts per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrainDumpSummary {
    pub total: usize,
    pub by_category: BTreeMap<String, usize>,
    pub unclassified: usize,
    pub overridden: usize,
}

impl BrainDumpSummary {
    pub fn from_items(items: &[BrainDumpItem]) -> Self {
        let mut by_category: BTreeMap<String, usize> = EnergyCategory::ALL
            .iter()
            .map(|c| (c.as_str().to_string(), 0))
            .collect();
        let mut unclassified = 0;
        for item in items {
            match item.category {
                Some(category) => {
                    *by_category.entry(category.as_str().to_string()).or_default() += 1
                }
                None => unclassified += 1,
            }
        }
        Self {
            total: items.len(),
            by_category,
            unclassified,
            overridden: items.iter().filter(|i| i.overridden).count(),
        }
    }
}
