//! Aggregation of framing results for the all-results view.

use serde::Serialize;

use crate::domain::catalog::FramingFamily;

use super::state::{Frame, FramingResponse, FramingResult, RiskChoice};

/// Average rating of one frame within a sub-experiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameAverage {
    pub frame: Frame,
    pub count: usize,
    pub average: f64,
}

/// Choice tally of one (frame, option) pair for risk scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskChoiceCount {
    pub frame: Frame,
    pub choice: RiskChoice,
    pub count: usize,
}

/// Summary across all completed framing scenarios, grouped by sub-experiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FramingSummary {
    pub total: usize,
    /// Risk scenarios: how often each option was picked under each frame.
    pub risk_choices: Vec<RiskChoiceCount>,
    /// Attribute scenarios: average rating per frame.
    pub attribute_averages: Vec<FrameAverage>,
    /// Goal scenarios: average likelihood rating per frame.
    pub goal_averages: Vec<FrameAverage>,
}

/// Folds completed framing results into the summary, or `None` when empty.
pub fn summarize(results: &[FramingResult]) -> Option<FramingSummary> {
    if results.is_empty() {
        return None;
    }

    let mut risk_choices = Vec::new();
    for frame in [Frame::Positive, Frame::Negative] {
        for choice in [RiskChoice::A, RiskChoice::B] {
            let count = results
                .iter()
                .filter(|r| {
                    r.family == FramingFamily::Risk
                        && r.frame == frame
                        && r.response == FramingResponse::Choice(choice)
                })
                .count();
            if count > 0 {
                risk_choices.push(RiskChoiceCount { frame, choice, count });
            }
        }
    }

    Some(FramingSummary {
        total: results.len(),
        risk_choices,
        attribute_averages: rating_averages(results, FramingFamily::Attribute),
        goal_averages: rating_averages(results, FramingFamily::Goal),
    })
}

fn rating_averages(results: &[FramingResult], family: FramingFamily) -> Vec<FrameAverage> {
    Frame::candidates(family)
        .iter()
        .filter_map(|&frame| {
            let ratings: Vec<f64> = results
                .iter()
                .filter(|r| r.family == family && r.frame == frame)
                .filter_map(|r| match r.response {
                    FramingResponse::Rating(rating) => Some(rating.as_f64()),
                    FramingResponse::Choice(_) => None,
                })
                .collect();
            if ratings.is_empty() {
                return None;
            }
            Some(FrameAverage {
                frame,
                count: ratings.len(),
                average: ratings.iter().sum::<f64>() / ratings.len() as f64,
            })
        })
        .collect()
}
