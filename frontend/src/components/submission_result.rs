use shared::gift_catalog::GiftCatalog;
use shared::reveal::RevealPhase;
use shared::spin_outcome::SpinOutcome;
use yew::prelude::*;

use crate::components::{Confetti, ResultModal, SpinWheel};
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct SubmissionResultProps {
    pub catalog: GiftCatalog,
    pub outcome: SpinOutcome,
    pub imei: String,
}

/// The post-submission reveal flow: one spin, a short "where did it
/// stop" dwell, then the result modal. Remounted per submission, which
/// is what makes a second spin impossible.
#[function_component(SubmissionResult)]
pub fn submission_result(props: &SubmissionResultProps) -> Html {
    let reveal = use_reveal(props.catalog.clone(), props.outcome.clone());
    let modal_dismissed = use_state(|| false);

    let session = &reveal.session;
    let phase = session.phase();
    let spinning = phase == RevealPhase::Spinning;
    let landed = matches!(phase, RevealPhase::Landed | RevealPhase::Revealed);

    let on_spin = {
        let spin = reveal.spin.clone();
        Callback::from(move |_: MouseEvent| spin.emit(()))
    };

    let dismiss_modal = {
        let modal_dismissed = modal_dismissed.clone();
        Callback::from(move |_| modal_dismissed.set(true))
    };

    html! {
        <div class="text-center rounded-lg w-full max-w-4xl">
            <Confetti active={session.is_celebrating()} />
            <h2 class="text-4xl font-bold mb-8 text-white">{"Spin the Wheel!"}</h2>

            <SpinWheel
                catalog={props.catalog.clone()}
                rotation={session.rotation()}
                {spinning}
                {landed}
                winner={session.winner().cloned()}
            />

            if !session.has_spun() {
                <button
                    onclick={on_spin}
                    disabled={spinning}
                    class="mt-6 bg-rose-500 text-white px-8 py-3 rounded-full text-xl font-bold uppercase tracking-wide hover:bg-rose-400 transition duration-300 ease-in-out transform hover:scale-105 shadow-lg disabled:opacity-50 disabled:cursor-not-allowed"
                >{"Spin the Wheel"}</button>
            } else if spinning {
                <p class="mt-6 text-white text-lg animate-pulse">{"Spinning..."}</p>
            }

            if phase == RevealPhase::Landed {
                if let Some(stopped) = session.stopped_at() {
                    <div class="mt-6 inline-block bg-white/90 rounded-full px-6 py-3 text-lg font-semibold text-gray-800 shadow">
                        {format!("The wheel stopped at: {}", stopped.name)}
                    </div>
                }
            }

            if phase == RevealPhase::Revealed && !*modal_dismissed {
                if let Some(outcome) = session.revealed() {
                    <ResultModal
                        outcome={outcome.clone()}
                        imei={props.imei.clone()}
                        no_win_image={props.catalog.no_win_entry().image.clone()}
                        on_close={dismiss_modal}
                    />
                }
            }
        </div>
    }
}
