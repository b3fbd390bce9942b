use std::time::Duration;

/// One step of the scripted processing animation. The sequence is cosmetic
/// and fixed; a UI layer pairs it with a timer, nothing here sleeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub percent: u8,
    pub label: &'static str,
    pub delay: Duration,
}

const LABELS: [(u8, &str); 6] = [
    (10, "Uploading file..."),
    (25, "Extracting text from PDF..."),
    (50, "Parsing MCQ questions..."),
    (75, "Classifying questions..."),
    (90, "Generating reports..."),
    (100, "Processing complete!"),
];

/// Fixed sequence shown during form submission: a faster initial step,
/// then one-second strides.
pub fn processing_steps() -> Vec<ProgressStep> {
    LABELS
        .iter()
        .enumerate()
        .map(|(i, &(percent, label))| ProgressStep {
            percent,
            label,
            delay: if i == 0 {
                Duration::from_millis(500)
            } else {
                Duration::from_millis(1000)
            },
        })
        .collect()
}
