//! Preference adjustment layer.
//!
//! Three independent deltas (strength sliders, conflict style, energy tier)
//! are each bounded on their own, then summed and passed through
//! [`soft_clamp`]. Missing preferences on either side disable the layer.

use chemforge_config::AdjustConfig;
use chemforge_core::{
    AdjustmentBreakdown, ConflictStyle, EnergyLevel, PreferenceProfile, Sliders,
};

/// Compresses `raw` so that `|result| < hard` while leaving `|raw| <= soft`
/// untouched.
///
/// Beyond the soft bound the excess goes through `tanh`, which keeps the
/// curve continuous with slope 1 at the join.
pub fn soft_clamp(raw: f64, soft: f64, hard: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    let magnitude = raw.abs();
    if magnitude <= soft {
        return raw;
    }
    let room = hard - soft;
    let compressed = soft + room * ((magnitude - soft) / room).tanh();
    compressed.copysign(raw)
}

/// Computes preference deltas for a pair.
///
/// # Examples
///
/// ```
/// use chemforge_config::AdjustConfig;
/// use chemforge_core::{ConflictStyle, PreferenceProfile};
/// use chemforge_scoring::PreferenceAdjuster;
///
/// let config = AdjustConfig::default();
/// let adjuster = PreferenceAdjuster::new(&config);
/// let hothead = PreferenceProfile::new().with_conflict_style(ConflictStyle::Burst);
///
/// let delta = adjuster.adjust(60.0, Some(&hothead), Some(&hothead));
/// assert!(delta.conflict < 0.0);
/// assert_eq!(delta.strength, 0.0);
///
/// let none = adjuster.adjust(60.0, Some(&hothead), None);
/// assert!(none.is_zero());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PreferenceAdjuster<'a> {
    config: &'a AdjustConfig,
}

impl<'a> PreferenceAdjuster<'a> {
    pub fn new(config: &'a AdjustConfig) -> Self {
        Self { config }
    }

    /// Computes all three deltas and their clamped total.
    ///
    /// `base_score` is the type-only integer score; it only affects the
    /// energy delta.
    pub fn adjust(
        &self,
        base_score: f64,
        a: Option<&PreferenceProfile>,
        b: Option<&PreferenceProfile>,
    ) -> AdjustmentBreakdown {
        let (Some(a), Some(b)) = (a, b) else {
            return AdjustmentBreakdown::ZERO;
        };

        let strength = self.strength_delta(&a.sliders(), &b.sliders());
        let conflict = self.conflict_delta(a.conflict_style(), b.conflict_style());
        let energy = self.energy_delta(base_score, a.energy(), b.energy());
        let total = soft_clamp(
            strength + conflict + energy,
            self.config.soft_cap,
            self.config.hard_cap,
        );

        AdjustmentBreakdown {
            strength,
            conflict,
            energy,
            total,
        }
    }

    /// Fit of one axis pair: engagement similarity plus tilt complementarity.
    ///
    /// Each side is `(x, y)` normalized to `[0, 1]`; the result is in `[0, 1]`
    /// when the two weights sum to 1.
    fn axis_fit(&self, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> f64 {
        let similarity = 1.0 - ((x1 + y1) - (x2 + y2)).abs() / 2.0;
        let complement = ((x1 - y1) - (x2 - y2)).abs() / 2.0;
        self.config.similarity_weight * similarity + self.config.complement_weight * complement
    }

    /// Slider delta, zero when both sides sit at the neutral 50s.
    pub fn strength_delta(&self, a: &Sliders, b: &Sliders) -> f64 {
        let unit = |v: u8| f64::from(v) / 100.0;
        let half = unit(Sliders::NEUTRAL.logic);
        let neutral = self.axis_fit((half, half), (half, half));

        let logic_people = self.axis_fit(
            (unit(a.logic), unit(a.people)),
            (unit(b.logic), unit(b.people)),
        );
        let idea_fact = self.axis_fit((unit(a.idea), unit(a.fact)), (unit(b.idea), unit(b.fact)));

        let cap = self.config.strength_cap;
        (((logic_people - neutral) + (idea_fact - neutral)) * self.config.strength_scale)
            .clamp(-cap, cap)
    }

    /// Table lookup; zero if either style is unknown.
    pub fn conflict_delta(&self, a: Option<ConflictStyle>, b: Option<ConflictStyle>) -> f64 {
        match (a, b) {
            (Some(a), Some(b)) => self.config.conflict_matrix[a.index()][b.index()],
            _ => 0.0,
        }
    }

    /// Rewards energy spread, at a reduced rate for already-low base scores.
    pub fn energy_delta(
        &self,
        base_score: f64,
        a: Option<EnergyLevel>,
        b: Option<EnergyLevel>,
    ) -> f64 {
        let (Some(a), Some(b)) = (a, b) else {
            return 0.0;
        };
        let delta = self.config.energy_gap_deltas[usize::from(a.gap(&b))];
        if base_score < self.config.low_base_threshold {
            delta * self.config.low_base_energy_factor
        } else {
            delta
        }
    }
}
