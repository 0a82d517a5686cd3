use gloo_net::http::Request;
use shared::constants::LUCKY_DRAW_SYSTEMS_ENDPOINT;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::{format_date, get_auth_token};
use crate::config::get_api_base_url;
use crate::models::{LuckyDraw, Paginated};
use crate::{styles, Route};

/// Admin landing page: every configured lucky draw, newest first.
#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let draws = use_state(Vec::<LuckyDraw>::new);
    let loading = use_state(|| true);
    let error = use_state(String::new);

    {
        let draws = draws.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let token = get_auth_token().unwrap_or_default();
                let url = format!("{}{}", get_api_base_url(), LUCKY_DRAW_SYSTEMS_ENDPOINT);
                match Request::get(&url)
                    .header("Authorization", &format!("Bearer {token}"))
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        match response.json::<Paginated<LuckyDraw>>().await {
                            Ok(page) => draws.set(page.results),
                            Err(e) => {
                                log::error!("Failed to parse lucky draws: {e:?}");
                                error.set("Failed to load lucky draws".to_string());
                            }
                        }
                    }
                    Ok(response) => {
                        error.set(format!("Failed to load lucky draws ({})", response.status()));
                    }
                    Err(e) => {
                        log::error!("Network error fetching lucky draws: {e:?}");
                        error.set(shared::constants::NETWORK_ERROR.to_string());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class={styles::ADMIN_PAGE}>
            <div class="max-w-5xl mx-auto">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Lucky Draws"}</h1>

                if *loading {
                    <div class="flex justify-center py-12"><div class={styles::LOADING_SPINNER}></div></div>
                } else if !(*error).is_empty() {
                    <div class={styles::CARD_ERROR}>{&*error}</div>
                } else if draws.is_empty() {
                    <p class={styles::TEXT_BODY}>{"No lucky draws have been configured yet."}</p>
                } else {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {
                            draws.iter().map(|draw| html! {
                                <Link<Route> key={draw.id} to={Route::ManageLuckyDraw { id: draw.id }} classes="block">
                                    <div class="bg-white rounded-lg shadow p-5 hover:shadow-lg transition">
                                        <h2 class="text-lg font-semibold text-gray-900">{&draw.name}</h2>
                                        <p class={styles::TEXT_SMALL}>{&draw.draw_type}</p>
                                        if !draw.start_date.is_empty() {
                                            <p class={styles::TEXT_SMALL}>
                                                {format!("{} — {}", format_date(&draw.start_date), format_date(&draw.end_date))}
                                            </p>
                                        }
                                    </div>
                                </Link<Route>>
                            }).collect::<Html>()
                        }
                    </div>
                }
            </div>
        </div>
    }
}
