use crate::mvi::State;

/// The fixed-choice escape value for subject and grade selectors.
///
/// When a selector is set to this, the free-text companion field is what
/// actually goes out in the add payload; the escape value itself is never
/// sent.
pub const MANUAL_CHOICE: &str = "その他";

/// In-progress new-item form state prior to submission.
///
/// Mirrors the item shape minus identity and computed fields. Numeric
/// inputs are kept as raw text so a blank field stays distinguishable from
/// zero until submission, where blank-to-zero applies to the counters only.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub name: String,
    pub publisher: String,
    pub isbn: String,
    pub location: String,
    pub subject: String,
    pub subject_manual: String,
    pub grade: String,
    pub grade_manual: String,
    pub stock: String,
    pub alert: String,
    pub cost: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            publisher: String::new(),
            isbn: String::new(),
            location: String::new(),
            subject: String::new(),
            subject_manual: String::new(),
            grade: String::new(),
            grade_manual: String::new(),
            stock: "1".to_string(),
            alert: "5".to_string(),
            cost: String::new(),
        }
    }
}

impl State for Draft {}

impl Draft {
    /// The subject that goes out on submission, with the manual override
    /// substituted.
    pub fn resolved_subject(&self) -> &str {
        if self.subject == MANUAL_CHOICE {
            &self.subject_manual
        } else {
            &self.subject
        }
    }

    /// The grade that goes out on submission, with the manual override
    /// substituted.
    pub fn resolved_grade(&self) -> &str {
        if self.grade == MANUAL_CHOICE {
            &self.grade_manual
        } else {
            &self.grade
        }
    }
}
