use gloo_net::http::Request;
use shared::constants::LUCKY_DRAW_SYSTEMS_ENDPOINT;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::get_api_base_url;
use crate::models::{LuckyDraw, Paginated};

#[derive(Clone, PartialEq)]
pub struct LuckyDrawState {
    pub loading: bool,
    pub draw: Option<LuckyDraw>,
    pub error: String,
}

/// Fetches the active lucky-draw campaign on mount. The backend lists
/// draws newest first; the first result is the one currently running.
#[hook]
pub fn use_lucky_draw() -> LuckyDrawState {
    let state = use_state(|| LuckyDrawState {
        loading: true,
        draw: None,
        error: String::new(),
    });

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let url = format!("{}{}", get_api_base_url(), LUCKY_DRAW_SYSTEMS_ENDPOINT);
                match Request::get(&url).send().await {
                    Ok(response) if response.ok() => {
                        match response.json::<Paginated<LuckyDraw>>().await {
                            Ok(page) => state.set(LuckyDrawState {
                                loading: false,
                                draw: page.results.into_iter().next(),
                                error: String::new(),
                            }),
                            Err(e) => {
                                log::error!("Failed to parse lucky draw list: {e:?}");
                                state.set(LuckyDrawState {
                                    loading: false,
                                    draw: None,
                                    error: "Failed to load campaign details".to_string(),
                                });
                            }
                        }
                    }
                    Ok(response) => {
                        log::error!("Lucky draw list returned status {}", response.status());
                        state.set(LuckyDrawState {
                            loading: false,
                            draw: None,
                            error: "Failed to load campaign details".to_string(),
                        });
                    }
                    Err(e) => {
                        log::error!("Network error fetching lucky draws: {e:?}");
                        state.set(LuckyDrawState {
                            loading: false,
                            draw: None,
                            error: shared::constants::NETWORK_ERROR.to_string(),
                        });
                    }
                }
            });
            || ()
        });
    }

    (*state).clone()
}
