use serde::Serialize;

/// Display band for a breach probability.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// `> 70` is high and `> 40` is moderate; the boundaries themselves fall
    /// into the lower band.
    pub fn classify(breach_probability_pct: f64) -> Self {
        if breach_probability_pct > 70.0 {
            RiskBand::High
        } else if breach_probability_pct > 40.0 {
            RiskBand::Moderate
        } else {
            RiskBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "LOW RISK",
            RiskBand::Moderate => "MODERATE RISK",
            RiskBand::High => "HIGH RISK",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskBand::Low => "SLA likely to be met.",
            RiskBand::Moderate => "Consider resource adjustments.",
            RiskBand::High => "Immediate intervention recommended.",
        }
    }
}
