//! Wizard step identifiers and the position cursor over them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed, ordered list of wizard steps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    /// Pick one or more delivery weekdays
    DaySelection,

    /// Informational screen, no data collected
    Motivation,

    /// Pick the delivery location
    Location,

    /// Pick the delivery time window
    DeliveryTime,

    /// Review and submit the plan
    Confirmation,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [WizardStep; 5] = [
        WizardStep::DaySelection,
        WizardStep::Motivation,
        WizardStep::Location,
        WizardStep::DeliveryTime,
        WizardStep::Confirmation,
    ];

    /// Index of the terminal step.
    pub const LAST_INDEX: usize = Self::ALL.len() - 1;

    /// Zero-based position of this step in the wizard.
    pub fn index(self) -> usize {
        match self {
            WizardStep::DaySelection => 0,
            WizardStep::Motivation => 1,
            WizardStep::Location => 2,
            WizardStep::DeliveryTime => 3,
            WizardStep::Confirmation => 4,
        }
    }

    /// Step at the given index, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Stable identifier used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::DaySelection => "days",
            WizardStep::Motivation => "motivation",
            WizardStep::Location => "location",
            WizardStep::DeliveryTime => "time",
            WizardStep::Confirmation => "confirmation",
        }
    }

    /// Screen heading shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::DaySelection => "Quels jours souhaitez-vous être livré ?",
            WizardStep::Motivation => "Pourquoi planifier vos repas ?",
            WizardStep::Location => "Où souhaitez-vous être livré ?",
            WizardStep::DeliveryTime => "À quelle heure souhaitez-vous être livré ?",
            WizardStep::Confirmation => "Récapitulatif de votre plan",
        }
    }
}

impl FromStr for WizardStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "days" | "dayselection" | "day_selection" => Ok(WizardStep::DaySelection),
            "motivation" => Ok(WizardStep::Motivation),
            "location" => Ok(WizardStep::Location),
            "time" | "deliverytime" | "delivery_time" => Ok(WizardStep::DeliveryTime),
            "confirmation" => Ok(WizardStep::Confirmation),
            _ => Err(format!("Invalid wizard step: {s}")),
        }
    }
}

/// Cursor into [`WizardStep::ALL`], always within `[0, LAST_INDEX]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize")]
pub struct WizardPosition(usize);

impl TryFrom<usize> for WizardPosition {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index > WizardStep::LAST_INDEX {
            return Err(format!(
                "Wizard position {index} is out of range (0..={})",
                WizardStep::LAST_INDEX
            ));
        }
        Ok(Self(index))
    }
}

impl WizardPosition {
    /// Position of the first step.
    pub fn start() -> Self {
        Self(0)
    }

    /// Raw index.
    pub fn index(self) -> usize {
        self.0
    }

    /// Step under the cursor.
    pub fn step(self) -> WizardStep {
        WizardStep::ALL[self.0]
    }

    /// True on the confirmation step.
    pub fn is_terminal(self) -> bool {
        self.0 == WizardStep::LAST_INDEX
    }

    /// Moves one step forward, saturating at the terminal step.
    pub(crate) fn forward(&mut self) {
        if self.0 < WizardStep::LAST_INDEX {
            self.0 += 1;
        }
    }

    /// Moves one step back, saturating at the first step.
    pub(crate) fn backward(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }
}
