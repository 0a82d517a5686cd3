use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-slate-900 text-white">
            <h1 class="text-5xl font-black mb-4">{"404"}</h1>
            <p class="mb-8 text-white/80">{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="bg-rose-500 px-6 py-3 rounded-full font-bold uppercase tracking-wide hover:bg-rose-400 transition">
                {"Back to Home"}
            </Link<Route>>
        </div>
    }
}
