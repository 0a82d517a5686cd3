use gloo_timers::callback::Timeout;
use shared::gift_catalog::GiftCatalog;
use shared::reveal::{RevealSession, CELEBRATION_MS, LANDED_DWELL_MS, SPIN_DURATION_MS};
use shared::spin_outcome::SpinOutcome;
use yew::prelude::*;

/// Snapshot of the reveal session plus the one mutating action.
pub struct RevealHandle {
    pub session: RevealSession,
    pub spin: Callback<()>,
}

/// Drives one [`RevealSession`] for the lifetime of the hosting
/// component. The session owns no timers itself; this hook arms the
/// three one-shot timers strictly in sequence (spin, dwell, celebration)
/// and keeps their handles in an arena that is dropped on unmount, which
/// cancels anything still pending.
///
/// The catalog and outcome are captured on first render; spinning again
/// requires a new form submission, which remounts the component.
#[hook]
pub fn use_reveal(catalog: GiftCatalog, outcome: SpinOutcome) -> RevealHandle {
    let session = use_state(|| RevealSession::new(catalog, outcome));
    let timers = use_mut_ref(Vec::<Timeout>::new);

    {
        let timers = timers.clone();
        use_effect_with((), move |_| move || timers.borrow_mut().clear());
    }

    let spin = {
        let session = session.clone();
        let timers = timers.clone();
        Callback::from(move |_| {
            // The session guard below catches re-entry too, but the handle
            // still reads Idle for a second click dispatched before the
            // re-render; a non-empty arena means a spin is already running.
            if !timers.borrow().is_empty() {
                return;
            }

            let mut spinning = (*session).clone();
            if !spinning.spin(&mut rand::thread_rng()) {
                // Already spun; double clicks are expected and ignored.
                return;
            }
            session.set(spinning.clone());

            // Transitions are deterministic once the spin has started, so
            // each later phase can be computed up front and applied when
            // its timer fires.
            let mut landed = spinning;
            landed.finish_spin();
            let mut revealed = landed.clone();
            revealed.finish_dwell();
            let mut settled = revealed.clone();
            settled.finish_celebration();

            let session = session.clone();
            let timers_for_spin = timers.clone();
            let arena = timers.clone();
            let spin_timer = Timeout::new(SPIN_DURATION_MS, move || {
                session.set(landed);

                let celebration_session = session.clone();
                let timers_for_dwell = timers_for_spin.clone();
                let dwell_timer = Timeout::new(LANDED_DWELL_MS, move || {
                    let celebrating = revealed.is_celebrating();
                    session.set(revealed);
                    if celebrating {
                        let celebration_timer = Timeout::new(CELEBRATION_MS, move || {
                            celebration_session.set(settled);
                        });
                        timers_for_dwell.borrow_mut().push(celebration_timer);
                    }
                });
                timers_for_spin.borrow_mut().push(dwell_timer);
            });
            arena.borrow_mut().push(spin_timer);
        })
    };

    RevealHandle {
        session: (*session).clone(),
        spin,
    }
}
