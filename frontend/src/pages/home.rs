use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::format_date;
use crate::components::Header;
use crate::config::get_asset_url;
use crate::hooks::use_lucky_draw;
use crate::{styles, Route};

#[function_component(Home)]
pub fn home() -> Html {
    let campaign = use_lucky_draw();

    if campaign.loading {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-slate-900">
                <div class={styles::LOADING_SPINNER}></div>
            </div>
        };
    }

    let Some(draw) = campaign.draw else {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-slate-900">
                <p class="text-white text-lg">
                    { if campaign.error.is_empty() { "No campaign is running right now." } else { campaign.error.as_str() } }
                </p>
            </div>
        };
    };

    let background = format!(
        "background-image: url({})",
        get_asset_url(&draw.background_image)
    );

    html! {
        <div class={styles::PAGE} style={background}>
            <Header title={draw.name.clone()} />
            <main class={styles::MAIN}>
                <div class="text-center max-w-2xl">
                    if !draw.hero_image.is_empty() {
                        <img
                            src={get_asset_url(&draw.hero_image)}
                            alt={draw.name.clone()}
                            class="mx-auto mb-8 max-h-72 object-contain drop-shadow-xl"
                        />
                    }
                    <h1 class="text-4xl md:text-5xl font-black text-white mb-4">{&draw.name}</h1>
                    if !draw.start_date.is_empty() {
                        <p class="text-white/80 mb-6">
                            {format!("{} — {}", format_date(&draw.start_date), format_date(&draw.end_date))}
                        </p>
                    }
                    <p class="text-white/90 text-lg mb-8">{&draw.description}</p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Link<Route> to={Route::Enter} classes="bg-rose-500 text-white px-8 py-4 rounded-full text-xl font-bold uppercase tracking-wide hover:bg-rose-400 transition shadow-lg">
                            {"Enter the Lucky Draw"}
                        </Link<Route>>
                        <Link<Route> to={Route::Offer} classes="bg-white/90 text-gray-900 px-8 py-4 rounded-full text-xl font-bold uppercase tracking-wide hover:bg-white transition shadow-lg">
                            {"View the Offer"}
                        </Link<Route>>
                    </div>
                </div>
            </main>
        </div>
    }
}
