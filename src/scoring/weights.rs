use crate::profile::Objective;

/// Goal-conditioned weight vector over the six scoring dimensions.
/// Each named profile sums to 1.0; `normalized` guards the invariant if
/// a profile is ever tuned by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalWeights {
    pub efficiency: f64,
    pub dispersion: f64,
    pub distance: f64,
    pub hold: f64,
    pub flight: f64,
    pub feel: f64,
}

impl GoalWeights {
    pub fn for_objective(objective: Objective) -> Self {
        let raw = match objective {
            Objective::MoreDistance => Self {
                efficiency: 0.22,
                dispersion: 0.14,
                distance: 0.40,
                hold: 0.10,
                flight: 0.07,
                feel: 0.07,
            },
            Objective::Straighter => Self {
                efficiency: 0.18,
                dispersion: 0.50,
                distance: 0.10,
                hold: 0.10,
                flight: 0.06,
                feel: 0.06,
            },
            Objective::HoldGreens => Self {
                efficiency: 0.14,
                dispersion: 0.16,
                distance: 0.08,
                hold: 0.52,
                flight: 0.05,
                feel: 0.05,
            },
            Objective::FlightWindow => Self {
                efficiency: 0.18,
                dispersion: 0.16,
                distance: 0.07,
                hold: 0.10,
                flight: 0.42,
                feel: 0.07,
            },
            Objective::BeatGamer => Self {
                efficiency: 0.26,
                dispersion: 0.22,
                distance: 0.22,
                hold: 0.14,
                flight: 0.08,
                feel: 0.08,
            },
            Objective::Balanced => Self {
                efficiency: 0.24,
                dispersion: 0.22,
                distance: 0.20,
                hold: 0.14,
                flight: 0.10,
                feel: 0.10,
            },
        };
        raw.normalized()
    }

    pub fn sum(&self) -> f64 {
        self.efficiency + self.dispersion + self.distance + self.hold + self.flight + self.feel
    }

    pub fn normalized(self) -> Self {
        let s = self.sum();
        if s <= 0.0 {
            return GoalWeights::for_objective(Objective::Balanced);
        }
        Self {
            efficiency: self.efficiency / s,
            dispersion: self.dispersion / s,
            distance: self.distance / s,
            hold: self.hold / s,
            flight: self.flight / s,
            feel: self.feel / s,
        }
    }
}
