use gloo_net::http::Request;
use serde::Serialize;
use shared::constants::GIFT_ITEMS_ENDPOINT;
use shared::gift_catalog::Gift;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::base::get_auth_token;
use crate::components::TextField;
use crate::config::{get_api_base_url, get_asset_url};
use crate::hooks::use_form_state;
use crate::models::Paginated;
use crate::styles;

#[derive(Debug, Serialize)]
struct NewGiftRequest {
    name: String,
    image: String,
}

#[derive(Properties, PartialEq)]
pub struct GiftItemsProps {
    pub lucky_draw_id: i64,
}

/// Prizes available on this draw's wheel. The no-win entry is never
/// listed here; the entry flow adds it client-side.
#[function_component(GiftItems)]
pub fn gift_items(props: &GiftItemsProps) -> Html {
    let gifts = use_state(Vec::<Gift>::new);
    let loading = use_state(|| true);
    let new_name = use_state(String::new);
    let new_image = use_state(String::new);
    let form_state = use_form_state();
    let lucky_draw_id = props.lucky_draw_id;

    let list_url = format!(
        "{}{}?lucky_draw_system_id={}",
        get_api_base_url(),
        GIFT_ITEMS_ENDPOINT,
        lucky_draw_id
    );

    {
        let gifts = gifts.clone();
        let loading = loading.clone();
        let form_state = form_state.clone();
        let list_url = list_url.clone();
        use_effect_with(lucky_draw_id, move |_| {
            spawn_local(async move {
                let token = get_auth_token().unwrap_or_default();
                match Request::get(&list_url)
                    .header("Authorization", &format!("Bearer {token}"))
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        match response.json::<Paginated<Gift>>().await {
                            Ok(page) => gifts.set(page.results),
                            Err(e) => {
                                log::error!("Failed to parse gift items: {e:?}");
                                form_state.handle_error.emit("Failed to load gift items".to_string());
                            }
                        }
                    }
                    Ok(response) => {
                        form_state
                            .handle_error
                            .emit(format!("Failed to load gift items ({})", response.status()));
                    }
                    Err(e) => {
                        log::error!("Network error fetching gift items: {e:?}");
                        form_state
                            .handle_error
                            .emit(shared::constants::NETWORK_ERROR.to_string());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_add = {
        let gifts = gifts.clone();
        let new_name = new_name.clone();
        let new_image = new_image.clone();
        let form_state = form_state.clone();
        let list_url = list_url.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if new_name.is_empty() || new_image.is_empty() {
                form_state
                    .handle_error
                    .emit("Name and image are required".to_string());
                return;
            }
            form_state.set_submitting.emit(true);

            let request = NewGiftRequest {
                name: (*new_name).clone(),
                image: (*new_image).clone(),
            };
            let gifts = gifts.clone();
            let new_name = new_name.clone();
            let new_image = new_image.clone();
            let form_state = form_state.clone();
            let list_url = list_url.clone();
            spawn_local(async move {
                let token = get_auth_token().unwrap_or_default();
                let response = match Request::post(&list_url)
                    .header("Authorization", &format!("Bearer {token}"))
                    .json(&request)
                {
                    Ok(request) => request.send().await,
                    Err(e) => {
                        log::error!("Failed to encode gift request: {e:?}");
                        form_state
                            .handle_error
                            .emit(shared::constants::NETWORK_ERROR.to_string());
                        return;
                    }
                };
                match response {
                    Ok(response) if response.ok() => match response.json::<Gift>().await {
                        Ok(created) => {
                            let mut next = (*gifts).clone();
                            next.insert(0, created);
                            gifts.set(next);
                            new_name.set(String::new());
                            new_image.set(String::new());
                            form_state.handle_success.emit("Gift item added".to_string());
                        }
                        Err(e) => {
                            log::error!("Failed to parse created gift: {e:?}");
                            form_state.handle_error.emit("Failed to add gift item".to_string());
                        }
                    },
                    Ok(response) => {
                        form_state
                            .handle_error
                            .emit(format!("Failed to add gift item ({})", response.status()));
                    }
                    Err(e) => {
                        log::error!("Network error adding gift item: {e:?}");
                        form_state
                            .handle_error
                            .emit(shared::constants::NETWORK_ERROR.to_string());
                    }
                }
            });
        })
    };

    let on_delete = {
        let gifts = gifts.clone();
        let form_state = form_state.clone();
        Callback::from(move |id: i64| {
            let gifts = gifts.clone();
            let form_state = form_state.clone();
            spawn_local(async move {
                let token = get_auth_token().unwrap_or_default();
                let url = format!("{}{}{}/", get_api_base_url(), GIFT_ITEMS_ENDPOINT, id);
                match Request::delete(&url)
                    .header("Authorization", &format!("Bearer {token}"))
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        let mut next = (*gifts).clone();
                        next.retain(|gift| gift.id != id);
                        gifts.set(next);
                    }
                    Ok(response) => {
                        form_state
                            .handle_error
                            .emit(format!("Failed to delete gift item ({})", response.status()));
                    }
                    Err(e) => {
                        log::error!("Network error deleting gift item: {e:?}");
                        form_state
                            .handle_error
                            .emit(shared::constants::NETWORK_ERROR.to_string());
                    }
                }
            });
        })
    };

    html! {
        <div class={styles::ADMIN_CARD}>
            <h2 class={styles::SECTION_TITLE}>{"Gift Items"}</h2>

            <form onsubmit={on_add} class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end mb-6">
                <TextField
                    label="Name"
                    value={(*new_name).clone()}
                    oninput={{
                        let new_name = new_name.clone();
                        Callback::from(move |v| new_name.set(v))
                    }}
                />
                <TextField
                    label="Image URL"
                    value={(*new_image).clone()}
                    placeholder="/media/gifts/phone.png"
                    oninput={{
                        let new_image = new_image.clone();
                        Callback::from(move |v| new_image.set(v))
                    }}
                />
                <button type="submit" disabled={form_state.submitting} class={styles::BUTTON_SECONDARY}>
                    {"Add Gift"}
                </button>
            </form>

            if !form_state.error.is_empty() {
                <div class={classes!(styles::CARD_ERROR, "mb-4")}>{&form_state.error}</div>
            }
            if !form_state.success.is_empty() {
                <div class={classes!(styles::CARD_SUCCESS, "mb-4")}>{&form_state.success}</div>
            }

            if *loading {
                <div class="flex justify-center py-8"><div class={styles::LOADING_SPINNER}></div></div>
            } else if gifts.is_empty() {
                <p class={styles::TEXT_BODY}>{"No gift items yet."}</p>
            } else {
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {
                        gifts.iter().map(|gift| {
                            let on_delete = on_delete.clone();
                            let id = gift.id;
                            html! {
                                <div key={gift.id} class="border border-gray-200 rounded-lg p-3 text-center">
                                    <img
                                        src={get_asset_url(&gift.image)}
                                        alt={gift.name.clone()}
                                        class="mx-auto h-20 w-20 object-contain mb-2"
                                    />
                                    <p class="text-sm font-medium text-gray-900 mb-2">{&gift.name}</p>
                                    <button
                                        class={styles::BUTTON_DANGER}
                                        onclick={Callback::from(move |_| on_delete.emit(id))}
                                    >{"Delete"}</button>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            }
        </div>
    }
}
