use shared::spin_outcome::SpinOutcome;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::get_asset_url;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub outcome: SpinOutcome,
    pub imei: String,
    pub no_win_image: String,
    pub on_close: Callback<()>,
}

/// Final win/lose framing, shown once the reveal session is terminal.
#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let navigator = use_navigator();

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let go_home = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    let body = if let Some(gift) = props.outcome.gift.as_ref().filter(|_| props.outcome.has_prize) {
        html! {
            <>
                <h3 class="text-2xl font-bold mb-4 text-gray-900">{"Congratulations!"}</h3>
                <p class="text-xl mb-4 text-gray-700">{format!("You've won a {}!", gift.name)}</p>
                <p class="text-sm mb-4 text-gray-500">{format!("Your IMEI number is {}", props.imei)}</p>
                <img
                    src={get_asset_url(&gift.image)}
                    alt={gift.name.clone()}
                    class="mx-auto h-36 w-36 object-contain"
                />
            </>
        }
    } else {
        html! {
            <>
                <h3 class="text-2xl font-bold mb-4 text-gray-900">{"Thank you for participating!"}</h3>
                <p class="text-xl mb-4 text-rose-500">
                    {"Unfortunately, you didn't win a prize this time. Try again next time!"}
                </p>
                <img
                    src={get_asset_url(&props.no_win_image)}
                    alt="Better luck next time"
                    class="mx-auto h-36 w-36 object-contain"
                />
            </>
        }
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-40">
            <div class="bg-white rounded-lg p-8 max-w-md w-full mx-4 relative text-center">
                <button
                    onclick={close}
                    class="absolute top-2 right-2 text-gray-500 hover:text-gray-700 text-xl leading-none"
                    aria-label="Close"
                >{"✕"}</button>
                { body }
                <button
                    onclick={go_home}
                    class="mt-8 w-full bg-rose-500 text-white px-6 py-2 rounded-full text-lg font-bold uppercase tracking-wide hover:bg-rose-400 transition"
                >{"Back to Home"}</button>
            </div>
        </div>
    }
}
