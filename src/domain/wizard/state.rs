//! WizardState - the full set of answers plus the current step.
//!
//! The state is a value: every operation returns a new `WizardState` and
//! leaves the receiver untouched. Hosts keep one value per session and
//! replace it after each event.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{EventOutcome, Rejection, WizardEvent, WizardStep};
use crate::domain::catalog::{
    CompetitiveForce, Customization, DistributionConfig, ForceLevel, MarketConcentration,
    MarketType, ProductStage, ProductType, ReferenceTables, Segmentation,
};

/// Answers collected so far and the step the user is on.
///
/// # Invariants
///
/// - `segmentation` holds no duplicates (set semantics)
/// - `competitive_forces` holds at most one level per force
/// - `selected_channel`, when set, is one of the resolved channel's examples
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    step: WizardStep,
    product_type: Option<ProductType>,
    product_stage: Option<ProductStage>,
    market_type: Option<MarketType>,
    segmentation: BTreeSet<Segmentation>,
    competitive_forces: BTreeMap<CompetitiveForce, ForceLevel>,
    distribution: DistributionConfig,
    selected_channel: Option<String>,
}

/// New state produced by an event, with what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: WizardState,
    pub outcome: EventOutcome,
}

impl WizardState {
    /// Fresh state: step 1, nothing answered.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn product_type(&self) -> Option<ProductType> {
        self.product_type
    }

    pub fn product_stage(&self) -> Option<ProductStage> {
        self.product_stage
    }

    pub fn market_type(&self) -> Option<MarketType> {
        self.market_type
    }

    pub fn segmentation(&self) -> &BTreeSet<Segmentation> {
        &self.segmentation
    }

    pub fn has_segment(&self, segment: Segmentation) -> bool {
        self.segmentation.contains(&segment)
    }

    pub fn competitive_forces(&self) -> &BTreeMap<CompetitiveForce, ForceLevel> {
        &self.competitive_forces
    }

    pub fn force_level(&self, force: CompetitiveForce) -> Option<ForceLevel> {
        self.competitive_forces.get(&force).copied()
    }

    pub fn distribution(&self) -> &DistributionConfig {
        &self.distribution
    }

    pub fn selected_channel(&self) -> Option<&str> {
        self.selected_channel.as_deref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selections
    // ─────────────────────────────────────────────────────────────────────────

    pub fn select_product_type(&self, product_type: ProductType) -> Self {
        Self {
            product_type: Some(product_type),
            ..self.clone()
        }
    }

    pub fn select_product_stage(&self, stage: ProductStage) -> Self {
        Self {
            product_stage: Some(stage),
            ..self.clone()
        }
    }

    pub fn select_market_type(&self, market_type: MarketType) -> Self {
        Self {
            market_type: Some(market_type),
            ..self.clone()
        }
    }

    pub fn add_segment(&self, segment: Segmentation) -> Self {
        let mut next = self.clone();
        next.segmentation.insert(segment);
        next
    }

    pub fn remove_segment(&self, segment: Segmentation) -> Self {
        let mut next = self.clone();
        next.segmentation.remove(&segment);
        next
    }

    /// Checkbox semantics: adds the segment if absent, removes it otherwise.
    pub fn toggle_segment(&self, segment: Segmentation) -> Self {
        if self.has_segment(segment) {
            self.remove_segment(segment)
        } else {
            self.add_segment(segment)
        }
    }

    pub fn rate_force(&self, force: CompetitiveForce, level: ForceLevel) -> Self {
        let mut next = self.clone();
        next.competitive_forces.insert(force, level);
        next
    }

    pub fn select_customization(&self, customization: Customization, tables: &ReferenceTables) -> Self {
        let mut next = self.clone();
        next.distribution.customization = Some(customization);
        next.drop_stale_channel(tables);
        next
    }

    pub fn select_concentration(
        &self,
        concentration: MarketConcentration,
        tables: &ReferenceTables,
    ) -> Self {
        let mut next = self.clone();
        next.distribution.market_concentration = Some(concentration);
        next.drop_stale_channel(tables);
        next
    }

    /// Picks one of the resolved channel's concrete examples.
    pub fn select_channel(
        &self,
        channel: &str,
        tables: &ReferenceTables,
    ) -> Result<Self, Rejection> {
        let info = tables
            .get_channel(&self.distribution)
            .ok_or(Rejection::NoChannelResolved)?;
        if !info.offers(channel) {
            return Err(Rejection::ChannelNotOffered {
                channel: channel.to_string(),
            });
        }
        Ok(Self {
            selected_channel: Some(channel.to_string()),
            ..self.clone()
        })
    }

    pub fn clear_channel(&self) -> Self {
        Self {
            selected_channel: None,
            ..self.clone()
        }
    }

    // A changed configuration may resolve to a channel that no longer offers
    // the selected example.
    fn drop_stale_channel(&mut self, tables: &ReferenceTables) {
        let still_offered = match (&self.selected_channel, tables.get_channel(&self.distribution)) {
            (Some(selected), Some(info)) => info.offers(selected),
            (Some(_), None) => false,
            (None, _) => true,
        };
        if !still_offered {
            self.selected_channel = None;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Completion predicates and navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Completion predicate that gates leaving `step`.
    pub fn is_step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Product => self.product_type.is_some() && self.product_stage.is_some(),
            WizardStep::Market => self.market_type.is_some(),
            WizardStep::Segments => !self.segmentation.is_empty(),
            WizardStep::Forces => self.competitive_forces.len() == CompetitiveForce::COUNT,
            WizardStep::Distribution => self.distribution.is_complete(),
            WizardStep::Results => false,
        }
    }

    /// True if `next` would be accepted from the current step.
    pub fn can_proceed(&self) -> bool {
        self.step.next().is_some() && self.is_step_complete(self.step)
    }

    pub fn can_go_back(&self) -> bool {
        self.step.previous().is_some()
    }

    pub fn next(&self) -> Result<Self, Rejection> {
        let target = self.step.next().ok_or(Rejection::AtLastStep)?;
        if !self.is_step_complete(self.step) {
            return Err(Rejection::StepIncomplete { step: self.step });
        }
        Ok(Self {
            step: target,
            ..self.clone()
        })
    }

    pub fn previous(&self) -> Result<Self, Rejection> {
        let target = self.step.previous().ok_or(Rejection::AtFirstStep)?;
        Ok(Self {
            step: target,
            ..self.clone()
        })
    }

    /// Back to step 1 with every answer cleared. Allowed from any step.
    pub fn reset(&self) -> Self {
        Self::new()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Event dispatch
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies one event. A rejected event yields an unchanged copy of the state.
    pub fn apply(&self, event: &WizardEvent, tables: &ReferenceTables) -> Transition {
        let result = match event {
            WizardEvent::SelectProductType { product_type } => {
                Ok(self.select_product_type(*product_type))
            }
            WizardEvent::SelectProductStage { stage } => Ok(self.select_product_stage(*stage)),
            WizardEvent::SelectMarketType { market_type } => {
                Ok(self.select_market_type(*market_type))
            }
            WizardEvent::AddSegment { segment } => Ok(self.add_segment(*segment)),
            WizardEvent::RemoveSegment { segment } => Ok(self.remove_segment(*segment)),
            WizardEvent::ToggleSegment { segment } => Ok(self.toggle_segment(*segment)),
            WizardEvent::RateForce { force, level } => Ok(self.rate_force(*force, *level)),
            WizardEvent::SelectCustomization { customization } => {
                Ok(self.select_customization(*customization, tables))
            }
            WizardEvent::SelectConcentration { concentration } => {
                Ok(self.select_concentration(*concentration, tables))
            }
            WizardEvent::SelectChannel { channel } => self.select_channel(channel, tables),
            WizardEvent::ClearChannel => Ok(self.clear_channel()),
            WizardEvent::Next => self.next(),
            WizardEvent::Previous => self.previous(),
            WizardEvent::Reset => Ok(self.reset()),
        };

        match result {
            Ok(state) => Transition {
                state,
                outcome: EventOutcome::Applied,
            },
            Err(reason) => Transition {
                state: self.clone(),
                outcome: reason.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> &'static ReferenceTables {
        ReferenceTables::standard()
    }

    fn all_forces(level: ForceLevel) -> WizardState {
        CompetitiveForce::all()
            .iter()
            .fold(WizardState::new(), |s, f| s.rate_force(*f, level))
    }

    /// State with every step's predicate satisfied, still at step 1.
    fn fully_answered() -> WizardState {
        all_forces(ForceLevel::Medium)
            .select_product_type(ProductType::Luxury)
            .select_product_stage(ProductStage::Growth)
            .select_market_type(MarketType::NewExisting)
            .add_segment(Segmentation::Loyalty)
            .select_customization(Customization::High, tables())
            .select_concentration(MarketConcentration::Concentrated, tables())
    }

    // ───────────────────────────────────────────────────────────────
    // Initial state
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn new_state_starts_empty_at_step_one() {
        let state = WizardState::new();
        assert_eq!(state.step(), WizardStep::Product);
        assert_eq!(state.product_type(), None);
        assert_eq!(state.product_stage(), None);
        assert_eq!(state.market_type(), None);
        assert!(state.segmentation().is_empty());
        assert!(state.competitive_forces().is_empty());
        assert_eq!(state.distribution(), &DistributionConfig::default());
        assert_eq!(state.selected_channel(), None);
    }

    #[test]
    fn operations_do_not_mutate_receiver() {
        let original = WizardState::new();
        let _ = original.select_product_type(ProductType::Fmcg);
        assert_eq!(original, WizardState::new());
    }

    // ───────────────────────────────────────────────────────────────
    // Completion predicates
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn product_step_needs_type_and_stage() {
        let s = WizardState::new().select_product_type(ProductType::Fmcg);
        assert!(!s.is_step_complete(WizardStep::Product));
        let s = s.select_product_stage(ProductStage::Maturity);
        assert!(s.is_step_complete(WizardStep::Product));
    }

    #[test]
    fn market_step_needs_market_type() {
        let s = WizardState::new();
        assert!(!s.is_step_complete(WizardStep::Market));
        assert!(s
            .select_market_type(MarketType::NewNew)
            .is_step_complete(WizardStep::Market));
    }

    #[test]
    fn segments_step_needs_at_least_one_segment() {
        let s = WizardState::new().add_segment(Segmentation::Attitude);
        assert!(s.is_step_complete(WizardStep::Segments));
        let s = s.remove_segment(Segmentation::Attitude);
        assert!(!s.is_step_complete(WizardStep::Segments));
    }

    #[test]
    fn forces_step_needs_all_five_forces() {
        let four = CompetitiveForce::all()[..4]
            .iter()
            .fold(WizardState::new(), |s, f| s.rate_force(*f, ForceLevel::High));
        assert!(!four.is_step_complete(WizardStep::Forces));
        assert!(all_forces(ForceLevel::Low).is_step_complete(WizardStep::Forces));
    }

    #[test]
    fn rerating_a_force_does_not_add_an_entry() {
        let s = WizardState::new()
            .rate_force(CompetitiveForce::Rivalry, ForceLevel::Low)
            .rate_force(CompetitiveForce::Rivalry, ForceLevel::High);
        assert_eq!(s.competitive_forces().len(), 1);
        assert_eq!(s.force_level(CompetitiveForce::Rivalry), Some(ForceLevel::High));
    }

    #[test]
    fn distribution_step_needs_both_answers() {
        let s = WizardState::new().select_customization(Customization::Low, tables());
        assert!(!s.is_step_complete(WizardStep::Distribution));
        let s = s.select_concentration(MarketConcentration::Fragmented, tables());
        assert!(s.is_step_complete(WizardStep::Distribution));
    }

    // ───────────────────────────────────────────────────────────────
    // Segmentation set semantics
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn adding_a_segment_twice_keeps_one_entry() {
        let s = WizardState::new()
            .add_segment(Segmentation::Loyalty)
            .add_segment(Segmentation::Loyalty);
        assert_eq!(s.segmentation().len(), 1);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let s = WizardState::new().toggle_segment(Segmentation::Demographic);
        assert!(s.has_segment(Segmentation::Demographic));
        let s = s.toggle_segment(Segmentation::Demographic);
        assert!(!s.has_segment(Segmentation::Demographic));
    }

    #[test]
    fn removing_absent_segment_is_harmless() {
        let s = WizardState::new().remove_segment(Segmentation::Psychographic);
        assert_eq!(s, WizardState::new());
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn next_is_rejected_until_predicate_holds() {
        let s = WizardState::new().select_product_type(ProductType::Service);
        assert_eq!(
            s.next(),
            Err(Rejection::StepIncomplete {
                step: WizardStep::Product
            })
        );
        assert!(!s.can_proceed());
    }

    #[test]
    fn fully_answered_state_walks_to_results() {
        let mut s = fully_answered();
        for expected in &WizardStep::all()[1..] {
            assert!(s.can_proceed());
            s = s.next().unwrap();
            assert_eq!(s.step(), *expected);
        }
        assert!(!s.can_proceed());
        assert_eq!(s.next(), Err(Rejection::AtLastStep));
    }

    #[test]
    fn previous_rejected_only_on_first_step() {
        assert_eq!(WizardState::new().previous(), Err(Rejection::AtFirstStep));
        let s = fully_answered().next().unwrap();
        assert_eq!(s.previous().unwrap().step(), WizardStep::Product);
    }

    #[test]
    fn previous_keeps_answers() {
        let s = fully_answered().next().unwrap().previous().unwrap();
        assert_eq!(s, fully_answered());
    }

    #[test]
    fn reset_returns_fresh_state_from_any_step() {
        let mut s = fully_answered().select_channel("Direct sales force", tables()).unwrap();
        loop {
            assert_eq!(s.reset(), WizardState::new());
            match s.next() {
                Ok(next) => s = next,
                Err(_) => break,
            }
        }
        assert_eq!(s.step(), WizardStep::Results);
    }

    // ───────────────────────────────────────────────────────────────
    // Channel selection
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn channel_needs_a_resolved_configuration() {
        let s = WizardState::new().select_customization(Customization::High, tables());
        assert_eq!(
            s.select_channel("Direct sales force", tables()),
            Err(Rejection::NoChannelResolved)
        );
    }

    #[test]
    fn channel_must_be_one_of_the_examples() {
        let s = fully_answered();
        assert_eq!(
            s.select_channel("Supermarkets", tables()),
            Err(Rejection::ChannelNotOffered {
                channel: "Supermarkets".to_string()
            })
        );
        let s = s.select_channel("E-commerce platform", tables()).unwrap();
        assert_eq!(s.selected_channel(), Some("E-commerce platform"));
    }

    #[test]
    fn changing_configuration_drops_channel_no_longer_offered() {
        let s = fully_answered()
            .select_channel("Company-owned stores", tables())
            .unwrap()
            .select_concentration(MarketConcentration::Fragmented, tables());
        assert_eq!(s.selected_channel(), None);
    }

    #[test]
    fn reselecting_same_configuration_keeps_channel() {
        let s = fully_answered()
            .select_channel("B2B direct sales", tables())
            .unwrap()
            .select_customization(Customization::High, tables());
        assert_eq!(s.selected_channel(), Some("B2B direct sales"));
    }

    #[test]
    fn clear_channel_unsets_selection() {
        let s = fully_answered()
            .select_channel("B2B direct sales", tables())
            .unwrap()
            .clear_channel();
        assert_eq!(s.selected_channel(), None);
    }

    // ───────────────────────────────────────────────────────────────
    // apply
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn apply_reports_rejection_and_keeps_state() {
        let s = WizardState::new();
        let t = s.apply(&WizardEvent::Next, tables());
        assert_eq!(t.state, s);
        assert_eq!(
            t.outcome.rejection(),
            Some(&Rejection::StepIncomplete {
                step: WizardStep::Product
            })
        );
    }

    #[test]
    fn apply_selection_is_accepted_on_any_step() {
        let s = fully_answered().next().unwrap().next().unwrap();
        let t = s.apply(
            &WizardEvent::SelectProductType {
                product_type: ProductType::Electronics,
            },
            tables(),
        );
        assert!(t.outcome.is_applied());
        assert_eq!(t.state.product_type(), Some(ProductType::Electronics));
        assert_eq!(t.state.step(), WizardStep::Segments);
    }

    #[test]
    fn apply_sequence_reaches_results() {
        let events = vec![
            WizardEvent::SelectProductType { product_type: ProductType::Fmcg },
            WizardEvent::SelectProductStage { stage: ProductStage::Decline },
            WizardEvent::Next,
            WizardEvent::SelectMarketType { market_type: MarketType::ExistingExisting },
            WizardEvent::Next,
            WizardEvent::ToggleSegment { segment: Segmentation::UsageRate },
            WizardEvent::Next,
            WizardEvent::RateForce { force: CompetitiveForce::Rivalry, level: ForceLevel::High },
            WizardEvent::RateForce { force: CompetitiveForce::Suppliers, level: ForceLevel::Low },
            WizardEvent::RateForce { force: CompetitiveForce::Buyers, level: ForceLevel::Medium },
            WizardEvent::RateForce { force: CompetitiveForce::NewEntrants, level: ForceLevel::Low },
            WizardEvent::RateForce { force: CompetitiveForce::Substitutes, level: ForceLevel::High },
            WizardEvent::Next,
            WizardEvent::SelectCustomization { customization: Customization::Low },
            WizardEvent::SelectConcentration { concentration: MarketConcentration::Fragmented },
            WizardEvent::SelectChannel { channel: "Supermarkets".into() },
            WizardEvent::Next,
        ];

        let state = events.iter().fold(WizardState::new(), |s, e| {
            let t = s.apply(e, tables());
            assert!(t.outcome.is_applied(), "{} was rejected", e.kind());
            t.state
        });

        assert_eq!(state.step(), WizardStep::Results);
        assert_eq!(state.selected_channel(), Some("Supermarkets"));
    }

    #[test]
    fn state_round_trips_through_json() {
        let s = fully_answered().next().unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: WizardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
