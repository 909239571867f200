//! Framing effect scenarios across the three sub-experiments.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::foundation::ScenarioId;

/// Which framing sub-experiment a scenario belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FramingFamily {
    /// Gain/loss presentation of a risky choice (sure option vs gamble).
    Risk,
    /// Positive/negative description of a single product attribute.
    Attribute,
    /// Gain/loss/neutral emphasis on the consequences of acting.
    Goal,
}

impl FramingFamily {
    pub fn label(&self) -> &'static str {
        match self {
            FramingFamily::Risk => "Risk/Choice Framing",
            FramingFamily::Attribute => "Attribute Framing",
            FramingFamily::Goal => "Goal Framing",
        }
    }
}

/// The two options of a risk-framing choice, under one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskOptions {
    pub option_a: &'static str,
    pub option_b: &'static str,
}

/// Frame variants of a scenario, shaped by its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramingPrompt {
    Risk {
        positive: RiskOptions,
        negative: RiskOptions,
    },
    Attribute {
        positive: &'static str,
        negative: &'static str,
        rating_question: &'static str,
    },
    Goal {
        gain: &'static str,
        loss: &'static str,
        neutral: &'static str,
        question: &'static str,
    },
}

/// A framing scenario; belongs to exactly one sub-experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramingScenario {
    pub id: ScenarioId,
    pub title: &'static str,
    pub description: &'static str,
    pub explanation: &'static str,
    pub prompt: FramingPrompt,
}

impl FramingScenario {
    pub fn family(&self) -> FramingFamily {
        match self.prompt {
            FramingPrompt::Risk { .. } => FramingFamily::Risk,
            FramingPrompt::Attribute { .. } => FramingFamily::Attribute,
            FramingPrompt::Goal { .. } => FramingFamily::Goal,
        }
    }
}

/// All framing scenarios, grouped by family in selection-screen order.
pub static FRAMING_SCENARIOS: &[FramingScenario] = &[
    // Risk/choice framing
    FramingScenario {
        id: ScenarioId::new("disease_problem"),
        title: "Public Health Decision",
        description: "Imagine a rare disease outbreak is expected to kill 600 people if no \
                      action is taken.",
        explanation: "This is the classic 'Asian Disease Problem' from Tversky and Kahneman's \
                      research. People tend to be risk-averse when outcomes are framed as gains \
                      (positive frame) and risk-seeking when outcomes are framed as losses \
                      (negative frame), even though the actual outcomes are identical.",
        prompt: FramingPrompt::Risk {
            positive: RiskOptions {
                option_a: "Program A: 200 people will be saved.",
                option_b: "Program B: 1/3 probability that 600 people will be saved, and 2/3 \
                           probability that no people will be saved.",
            },
            negative: RiskOptions {
                option_a: "Program A: 400 people will die.",
                option_b: "Program B: 1/3 probability that nobody will die, and 2/3 \
                           probability that 600 people will die.",
            },
        },
    },
    FramingScenario {
        id: ScenarioId::new("cancer_treatment"),
        title: "Medical Treatment Decision",
        description: "As a doctor, you need to recommend a treatment option to a patient with \
                      cancer.",
        explanation: "Medical decisions are highly susceptible to framing effects. The same \
                      treatment outcomes can seem more or less appealing depending on whether \
                      they are framed in terms of survival (positive) or mortality (negative).",
        prompt: FramingPrompt::Risk {
            positive: RiskOptions {
                option_a: "Treatment A: 50% survival rate after five years.",
                option_b: "Treatment B: All patients survive the first year, but only 10% \
                           survive after five years.",
            },
            negative: RiskOptions {
                option_a: "Treatment A: 50% mortality rate after five years.",
                option_b: "Treatment B: No patients die in the first year, but 90% die after \
                           five years.",
            },
        },
    },
    FramingScenario {
        id: ScenarioId::new("evacuation_plan"),
        title: "Emergency Evacuation Plan",
        description: "As an emergency manager, you must recommend an evacuation plan for a town \
                      of 1,000 residents threatened by an approaching hurricane.",
        explanation: "In emergency situations, how the potential outcomes are framed can \
                      significantly influence both decision-makers and the public. The same \
                      evacuation plan might be perceived differently depending on whether the \
                      focus is on lives saved or lives lost.",
        prompt: FramingPrompt::Risk {
            positive: RiskOptions {
                option_a: "Plan A: 400 residents will safely evacuate.",
                option_b: "Plan B: 40% chance that all 1,000 residents will safely evacuate, \
                           and 60% chance that no residents will safely evacuate.",
            },
            negative: RiskOptions {
                option_a: "Plan A: 600 residents will not safely evacuate.",
                option_b: "Plan B: 40% chance that no residents will fail to evacuate safely, \
                           and 60% chance that all 1,000 residents will fail to evacuate \
                           safely.",
            },
        },
    },
    // Attribute framing
    FramingScenario {
        id: ScenarioId::new("ground_beef"),
        title: "Ground Beef Evaluation",
        description: "You're considering buying this ground beef for a family barbecue.",
        explanation: "This is a classic example of attribute framing. The same product \
                      described as '80% lean' is typically rated more favorably than when it's \
                      described as '20% fat', even though these statements are logically \
                      equivalent.",
        prompt: FramingPrompt::Attribute {
            positive: "This ground beef is 80% lean.",
            negative: "This ground beef contains 20% fat.",
            rating_question: "How would you rate the quality of this product?",
        },
    },
    FramingScenario {
        id: ScenarioId::new("medical_procedure"),
        title: "Medical Procedure Evaluation",
        description: "You're considering undergoing an elective medical procedure.",
        explanation: "Medical statistics presented in a positive frame (success rate) are \
                      usually perceived as more favorable and lead to higher consent rates than \
                      when presented in a negative frame (failure rate), despite being \
                      mathematically identical.",
        prompt: FramingPrompt::Attribute {
            positive: "This procedure has a 90% success rate.",
            negative: "This procedure has a 10% failure rate.",
            rating_question: "How likely would you be to undergo this procedure?",
        },
    },
    FramingScenario {
        id: ScenarioId::new("battery_life"),
        title: "Smartphone Battery Evaluation",
        description: "You're considering buying this new smartphone model.",
        explanation: "Technical specifications can be framed to emphasize either positive or \
                      negative aspects. The same battery performance described in terms of \
                      'capacity retained' sounds better than when described in terms of \
                      'capacity lost.'",
        prompt: FramingPrompt::Attribute {
            positive: "This smartphone retains 70% of its battery capacity after 2 years of \
                       use.",
            negative: "This smartphone loses 30% of its battery capacity after 2 years of use.",
            rating_question: "How would you rate the battery performance of this smartphone?",
        },
    },
    FramingScenario {
        id: ScenarioId::new("customer_satisfaction"),
        title: "Customer Service Evaluation",
        description: "You're considering signing up with this internet service provider.",
        explanation: "Service quality metrics framed positively (satisfaction rate) typically \
                      elicit more favorable evaluations than when framed negatively \
                      (dissatisfaction rate), influencing customer acquisition decisions.",
        prompt: FramingPrompt::Attribute {
            positive: "This internet service provider has an 85% customer satisfaction rate.",
            negative: "This internet service provider has a 15% customer dissatisfaction rate.",
            rating_question: "How would you rate the quality of this company's customer \
                              service?",
        },
    },
    // Goal framing
    FramingScenario {
        id: ScenarioId::new("retirement_saving"),
        title: "Retirement Savings Decision",
        description: "You're deciding whether to increase your monthly retirement savings \
                      contribution.",
        explanation: "When it comes to long-term financial decisions, emphasizing the potential \
                      losses from inaction (loss frame) often motivates stronger action than \
                      emphasizing potential gains or neutral statements, despite the identical \
                      financial outcomes.",
        prompt: FramingPrompt::Goal {
            gain: "By increasing your retirement savings now, you could gain an additional \
                   $240,000 in your retirement fund by age 65.",
            loss: "By not increasing your retirement savings now, you could lose out on an \
                   additional $240,000 in your retirement fund by age 65.",
            neutral: "Increasing your retirement savings now would change your retirement fund \
                      by an additional $240,000 by age 65.",
            question: "How likely are you to increase your retirement savings contribution?",
        },
    },
    FramingScenario {
        id: ScenarioId::new("energy_efficient"),
        title: "Energy Efficient Appliance Purchase",
        description: "You're considering replacing your old refrigerator with a more \
                      energy-efficient model that costs $200 more upfront.",
        explanation: "Environmental and efficiency decisions are often influenced by framing. \
                      Emphasizing ongoing losses tends to be more motivating than emphasizing \
                      equivalent gains, influencing consumer purchasing behavior for \
                      energy-efficient products.",
        prompt: FramingPrompt::Goal {
            gain: "By purchasing the energy-efficient refrigerator, you'll gain $50 in savings \
                   each year on your electricity bill.",
            loss: "By not purchasing the energy-efficient refrigerator, you'll lose $50 each \
                   year on your electricity bill.",
            neutral: "The energy-efficient refrigerator would change your electricity bill by \
                      $50 each year.",
            question: "How likely are you to purchase the energy-efficient refrigerator?",
        },
    },
    FramingScenario {
        id: ScenarioId::new("health_screening"),
        title: "Health Screening Decision",
        description: "You're deciding whether to schedule a recommended preventive health \
                      screening that will take 2 hours and cost $50 after insurance.",
        explanation: "Health promotion messages are significantly influenced by framing. \
                      Loss-framed messages (emphasizing risks of not acting) are often more \
                      effective for detection behaviors like screenings, while gain-framed \
                      messages can be more effective for prevention behaviors.",
        prompt: FramingPrompt::Goal {
            gain: "By getting this screening, you increase your chance of early detection and \
                   successful treatment if a problem exists.",
            loss: "By skipping this screening, you decrease your chance of early detection and \
                   successful treatment if a problem exists.",
            neutral: "This screening affects your chance of early detection and successful \
                      treatment if a problem exists.",
            question: "How likely are you to schedule the health screening?",
        },
    },
];

static SCENARIOS_BY_ID: Lazy<HashMap<ScenarioId, &'static FramingScenario>> =
    Lazy::new(|| FRAMING_SCENARIOS.iter().map(|s| (s.id, s)).collect());

/// Looks up a framing scenario by id.
pub fn framing_scenario(id: ScenarioId) -> Option<&'static FramingScenario> {
    SCENARIOS_BY_ID.get(&id).copied()
}

/// Iterates scenarios of one family in catalog order.
pub fn framing_scenarios(family: FramingFamily) -> impl Iterator<Item = &'static FramingScenario> {
    FRAMING_SCENARIOS.iter().filter(move |s| s.family() == family)
}
