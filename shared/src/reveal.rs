use rand::Rng;

use crate::gift_catalog::{Gift, GiftCatalog};
use crate::spin_outcome::SpinOutcome;

/// How long the wheel animates from rest to its final angle.
pub const SPIN_DURATION_MS: u32 = 5_000;
/// How long the "stopped at" framing is shown before the result modal.
pub const LANDED_DWELL_MS: u32 = 4_000;
/// How long the celebration effect stays up after a win is revealed.
pub const CELEBRATION_MS: u32 = 5_000;

/// Bounds for the cosmetic full-rotation count drawn per spin.
pub const MIN_FULL_ROTATIONS: u32 = 5;
pub const MAX_FULL_ROTATIONS: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    Spinning,
    Landed,
    Revealed,
}

/// One spin-to-result lifecycle. Phases only ever move forward
/// (`Idle → Spinning → Landed → Revealed`); spinning again requires a
/// fresh session, which in turn requires a fresh form submission.
///
/// The session itself is timer-agnostic: the hosting UI owns the three
/// one-shot timers and calls the matching `finish_*` operation when each
/// fires. Every transition method is a guarded no-op outside its source
/// phase, so stray or repeated timer callbacks cannot corrupt the state.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealSession {
    catalog: GiftCatalog,
    outcome: SpinOutcome,
    phase: RevealPhase,
    rotation: f64,
    celebrating: bool,
}

impl RevealSession {
    pub fn new(catalog: GiftCatalog, outcome: SpinOutcome) -> Self {
        Self {
            catalog,
            outcome,
            phase: RevealPhase::Idle,
            rotation: 0.0,
            celebrating: false,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Current rotation target in degrees. Zero until the spin starts,
    /// then set exactly once.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn catalog(&self) -> &GiftCatalog {
        &self.catalog
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn has_spun(&self) -> bool {
        self.phase != RevealPhase::Idle
    }

    /// Starts the spin. Returns false (and changes nothing) unless the
    /// session is still idle, so double clicks and replayed events are
    /// harmless.
    ///
    /// The random draw only adds whole turns for visual effect; the
    /// resting sector is fixed by the already-normalized outcome before
    /// any randomness is consulted.
    pub fn spin<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.phase != RevealPhase::Idle {
            return false;
        }

        let turns = rng.gen_range(MIN_FULL_ROTATIONS..=MAX_FULL_ROTATIONS) as f64 * 360.0;
        let sector = self.catalog.sector_angle();
        // Sector 0 starts under the pointer and sectors run clockwise by
        // index, so rotating by 360 - index*sector - sector/2 puts the
        // center of the target sector back at the pointer.
        self.rotation =
            turns + (360.0 - self.outcome.target_index as f64 * sector - sector / 2.0);
        self.phase = RevealPhase::Spinning;
        true
    }

    /// Spin timer fired: the wheel now rests on the target sector.
    pub fn finish_spin(&mut self) {
        if self.phase == RevealPhase::Spinning {
            self.phase = RevealPhase::Landed;
        }
    }

    /// Dwell timer fired: reveal the outcome. Celebration is keyed off
    /// the normalized prize flag, never off the gift's display name.
    pub fn finish_dwell(&mut self) {
        if self.phase == RevealPhase::Landed {
            self.phase = RevealPhase::Revealed;
            self.celebrating = self.outcome.has_prize;
        }
    }

    /// Celebration timer fired.
    pub fn finish_celebration(&mut self) {
        if self.phase == RevealPhase::Revealed {
            self.celebrating = false;
        }
    }

    /// The catalog entry the wheel visually rests on. For a losing spin
    /// this is the no-win entry, not a prize.
    pub fn stopped_at(&self) -> Option<&Gift> {
        match self.phase {
            RevealPhase::Landed | RevealPhase::Revealed => {
                self.catalog.get(self.outcome.target_index)
            }
            _ => None,
        }
    }

    /// The winning gift, exposed as soon as the wheel has landed so the
    /// other sectors can be dimmed.
    pub fn winner(&self) -> Option<&Gift> {
        match self.phase {
            RevealPhase::Landed | RevealPhase::Revealed if self.outcome.has_prize => {
                self.outcome.gift.as_ref()
            }
            _ => None,
        }
    }

    /// The full outcome, only once the session is terminal.
    pub fn revealed(&self) -> Option<&SpinOutcome> {
        match self.phase {
            RevealPhase::Revealed => Some(&self.outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin_outcome::{normalize, RawGift};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gift(id: i64, name: &str) -> Gift {
        Gift {
            id,
            name: name.to_string(),
            image: format!("/gifts/{id}.png"),
            lucky_draw_system: 1,
        }
    }

    fn catalog_of(extra: usize) -> GiftCatalog {
        let gifts = (0..extra)
            .map(|i| gift(i as i64 + 1, &format!("Gift {i}")))
            .collect();
        GiftCatalog::with_sentinel(1, gifts)
    }

    fn outcome_at(catalog: &GiftCatalog, target_index: usize) -> SpinOutcome {
        if target_index == 0 {
            normalize(&RawGift::Absent, catalog)
        } else {
            let won = catalog.get(target_index).cloned().unwrap();
            SpinOutcome {
                has_prize: true,
                gift: Some(won),
                target_index,
            }
        }
    }

    #[test]
    fn test_resting_angle_matches_target_sector_for_any_rotation_draw() {
        for count in [1usize, 2, 3, 8] {
            let catalog = catalog_of(count - 1);
            let sector = 360.0 / count as f64;
            for target in 0..count {
                for seed in 0..25u64 {
                    let mut session =
                        RevealSession::new(catalog.clone(), outcome_at(&catalog, target));
                    let mut rng = StdRng::seed_from_u64(seed);
                    assert!(session.spin(&mut rng));

                    let expected =
                        (360.0 - target as f64 * sector - sector / 2.0).rem_euclid(360.0);
                    let resting = session.rotation().rem_euclid(360.0);
                    assert!(
                        (resting - expected).abs() < 1e-9,
                        "count={count} target={target} seed={seed}"
                    );

                    let turns = session.rotation() - (session.rotation() % 360.0);
                    assert!(turns >= f64::from(MIN_FULL_ROTATIONS) * 360.0 - 360.0);
                    assert!(turns <= f64::from(MAX_FULL_ROTATIONS) * 360.0 + 360.0);
                }
            }
        }
    }

    #[test]
    fn test_second_spin_is_a_no_op() {
        let catalog = catalog_of(3);
        let mut session = RevealSession::new(catalog.clone(), outcome_at(&catalog, 2));
        let mut rng = StdRng::seed_from_u64(7);

        assert!(session.spin(&mut rng));
        let rotation = session.rotation();
        assert_eq!(session.phase(), RevealPhase::Spinning);

        assert!(!session.spin(&mut rng));
        assert_eq!(session.rotation(), rotation);
        assert_eq!(session.phase(), RevealPhase::Spinning);
    }

    #[test]
    fn test_winning_session_runs_to_revealed_and_celebrates() {
        let catalog = GiftCatalog::with_sentinel(1, vec![gift(5, "Phone")]);
        let raw: RawGift = serde_json::from_str(r#"{"id":5,"name":"Phone"}"#).unwrap();
        let outcome = normalize(&raw, &catalog);
        assert!(outcome.has_prize);
        assert_eq!(outcome.target_index, 1);

        let mut session = RevealSession::new(catalog, outcome);
        assert_eq!(session.stopped_at(), None);
        assert!(session.spin(&mut StdRng::seed_from_u64(1)));
        assert_eq!(session.revealed(), None);

        session.finish_spin();
        assert_eq!(session.phase(), RevealPhase::Landed);
        assert_eq!(session.stopped_at().map(|g| g.name.as_str()), Some("Phone"));
        assert!(!session.is_celebrating());

        session.finish_dwell();
        assert_eq!(session.phase(), RevealPhase::Revealed);
        assert!(session.is_celebrating());
        assert!(session.revealed().unwrap().has_prize);

        session.finish_celebration();
        assert!(!session.is_celebrating());
        assert_eq!(session.phase(), RevealPhase::Revealed);
    }

    #[test]
    fn test_losing_session_never_celebrates() {
        let catalog = GiftCatalog::with_sentinel(1, vec![gift(5, "Phone")]);
        let raw: RawGift = serde_json::from_str("[]").unwrap();
        let outcome = normalize(&raw, &catalog);

        let mut session = RevealSession::new(catalog, outcome);
        assert!(session.spin(&mut StdRng::seed_from_u64(2)));
        session.finish_spin();
        assert!(session.stopped_at().unwrap().is_no_win());
        assert!(!session.is_celebrating());

        session.finish_dwell();
        assert!(!session.is_celebrating());
        let revealed = session.revealed().unwrap();
        assert!(!revealed.has_prize);
        assert_eq!(revealed.gift, None);
    }

    #[test]
    fn test_out_of_order_timer_callbacks_do_nothing() {
        let catalog = catalog_of(2);
        let mut session = RevealSession::new(catalog.clone(), outcome_at(&catalog, 0));

        session.finish_spin();
        session.finish_dwell();
        session.finish_celebration();
        assert_eq!(session.phase(), RevealPhase::Idle);
        assert_eq!(session.stopped_at(), None);

        assert!(session.spin(&mut StdRng::seed_from_u64(3)));
        session.finish_dwell();
        session.finish_celebration();
        assert_eq!(session.phase(), RevealPhase::Spinning);

        session.finish_spin();
        session.finish_spin();
        assert_eq!(session.phase(), RevealPhase::Landed);
    }

    #[test]
    fn test_early_celebration_timer_cannot_suppress_the_celebration() {
        let catalog = GiftCatalog::with_sentinel(1, vec![gift(5, "Phone")]);
        let raw: RawGift = serde_json::from_str(r#"{"id":5,"name":"Phone"}"#).unwrap();
        let mut session = RevealSession::new(catalog.clone(), normalize(&raw, &catalog));

        assert!(session.spin(&mut StdRng::seed_from_u64(11)));
        session.finish_spin();
        // A stray celebration callback while still landed must not leave a
        // cleared flag behind once the reveal actually happens.
        session.finish_celebration();
        assert_eq!(session.phase(), RevealPhase::Landed);

        session.finish_dwell();
        assert!(session.is_celebrating());

        session.finish_celebration();
        assert!(!session.is_celebrating());
        assert_eq!(session.phase(), RevealPhase::Revealed);
    }
}
