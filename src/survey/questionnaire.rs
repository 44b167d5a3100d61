use serde::Serialize;

use crate::{errors::AppError, survey::aggregate::mean};

pub const ANSWER_COUNT: usize = 16;
pub const MIN_ANSWER: f64 = 0.0;
pub const MAX_ANSWER: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Transparency,
    MoralEthical,
    BalancedProcessing,
    SelfAwareness,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Transparency,
        Dimension::MoralEthical,
        Dimension::BalancedProcessing,
        Dimension::SelfAwareness,
    ];

    /// Zero-based item indices belonging to this dimension.
    pub fn items(&self) -> std::ops::Range<usize> {
        match self {
            Dimension::Transparency => 0..5,
            Dimension::MoralEthical => 5..9,
            Dimension::BalancedProcessing => 9..12,
            Dimension::SelfAwareness => 12..16,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Transparency => "Transparency",
            Dimension::MoralEthical => "Moral/Ethical",
            Dimension::BalancedProcessing => "Balanced Processing",
            Dimension::SelfAwareness => "Self-Awareness",
        }
    }
}

const ITEMS: [&str; ANSWER_COUNT] = [
    "Says exactly what he or she means",
    "Admits mistakes when they are made",
    "Encourages everyone to speak their mind",
    "Tells you the hard truth",
    "Displays emotions exactly in line with feelings",
    "Demonstrates beliefs that are consistent with actions",
    "Makes decisions based on his or her core values",
    "Asks you to take positions that support your core values",
    "Makes difficult decisions based on high standards of ethical conduct",
    "Solicits views that challenge his or her deeply held positions",
    "Analyzes relevant data before coming to a decision",
    "Listens carefully to different points of view before coming to conclusions",
    "Seeks feedback to improve interactions with others",
    "Accurately describes how others view his or her capabilities",
    "Knows when it is time to reevaluate his or her positions on important issues",
    "Shows he or she understands how specific actions impact others",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    pub number: usize,
    pub text: &'static str,
    pub dimension: Dimension,
    pub dimension_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    pub min_answer: f64,
    pub max_answer: f64,
    pub items: Vec<QuestionItem>,
}

pub fn questionnaire() -> Questionnaire {
    let items = Dimension::ALL
        .iter()
        .flat_map(|dimension| {
            dimension.items().map(move |i| QuestionItem {
                number: i + 1,
                text: ITEMS[i],
                dimension: *dimension,
                dimension_label: dimension.label(),
            })
        })
        .collect();

    Questionnaire {
        min_answer: MIN_ANSWER,
        max_answer: MAX_ANSWER,
        items,
    }
}

/// Turns the 16 Likert answers into the q1..q5 scores stored on a rating:
/// one mean per dimension followed by the mean of those four.
pub fn scores_from_answers(answers: &[f64]) -> Result<[f64; 5], AppError> {
    if answers.len() != ANSWER_COUNT {
        return Err(AppError::BadRequest(format!(
            "Answers must be an array of {ANSWER_COUNT} numbers"
        )));
    }

    if answers
        .iter()
        .any(|a| !a.is_finite() || *a < MIN_ANSWER || *a > MAX_ANSWER)
    {
        return Err(AppError::BadRequest(format!(
            "Each answer must be between {MIN_ANSWER} and {MAX_ANSWER}"
        )));
    }

    let [q1, q2, q3, q4] = Dimension::ALL.map(|d| mean(&answers[d.items()]));
    Ok([q1, q2, q3, q4, mean(&[q1, q2, q3, q4])])
}
