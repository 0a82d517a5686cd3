use gloo_net::http::Request;
use serde::Serialize;
use shared::constants::{MOBILE_OFFERS_ENDPOINT, RECHARGE_OFFERS_ENDPOINT};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::base::{format_date, get_auth_token};
use crate::components::{SelectField, TextField};
use crate::config::get_api_base_url;
use crate::hooks::use_form_state;
use crate::models::{MobilePhoneOffer, Paginated, RechargeCardOffer};
use crate::styles;

const OFFER_KINDS: [&str; 2] = ["Mobile Phone", "Recharge Card"];
const OFFER_CONDITIONS: [&str; 3] = ["every_nth_entry", "daily_first", "random"];

#[derive(Debug, Serialize)]
struct NewOfferRequest {
    lucky_draw_system: i64,
    start_date: String,
    end_date: String,
    daily_quantity: u32,
    type_of_offer: String,
    offer_condition_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    gift_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct OffersProps {
    pub lucky_draw_id: i64,
}

/// Win-rule configuration: which offers run, when, and how often they
/// pay out.
#[function_component(Offers)]
pub fn offers(props: &OffersProps) -> Html {
    let mobile_offers = use_state(Vec::<MobilePhoneOffer>::new);
    let recharge_offers = use_state(Vec::<RechargeCardOffer>::new);
    let loading = use_state(|| true);
    let form_state = use_form_state();
    let lucky_draw_id = props.lucky_draw_id;

    let kind = use_state(|| OFFER_KINDS[0].to_string());
    let start_date = use_state(String::new);
    let end_date = use_state(String::new);
    let daily_quantity = use_state(|| "1".to_string());
    let condition = use_state(String::new);
    let condition_value = use_state(String::new);
    let gift_id = use_state(String::new);
    let amount = use_state(String::new);
    let provider = use_state(String::new);
    let reload = use_state(|| 0u32);

    {
        let mobile_offers = mobile_offers.clone();
        let recharge_offers = recharge_offers.clone();
        let loading = loading.clone();
        let form_state = form_state.clone();
        use_effect_with((lucky_draw_id, *reload), move |(id, _)| {
            let id = *id;
            spawn_local(async move {
                let token = get_auth_token().unwrap_or_default();
                let base = get_api_base_url();

                let mobile_url =
                    format!("{base}{MOBILE_OFFERS_ENDPOINT}?lucky_draw_system_id={id}");
                match Request::get(&mobile_url)
                    .header("Authorization", &format!("Bearer {token}"))
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        match response.json::<Paginated<MobilePhoneOffer>>().await {
                            Ok(page) => mobile_offers.set(page.results),
                            Err(e) => log::error!("Failed to parse mobile offers: {e:?}"),
                        }
                    }
                    Ok(response) => {
                        log::error!("Mobile offers returned status {}", response.status());
                    }
                    Err(e) => {
                        log::error!("Network error fetching mobile offers: {e:?}");
                        form_state
                            .handle_error
                            .emit(shared::constants::NETWORK_ERROR.to_string());
                    }
                }

                let recharge_url =
                    format!("{base}{RECHARGE_OFFERS_ENDPOINT}?lucky_draw_system_id={id}");
                match Request::get(&recharge_url)
                    .header("Authorization", &format!("Bearer {token}"))
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        match response.json::<Paginated<RechargeCardOffer>>().await {
                            Ok(page) => recharge_offers.set(page.results),
                            Err(e) => log::error!("Failed to parse recharge offers: {e:?}"),
                        }
                    }
                    Ok(response) => {
                        log::error!("Recharge offers returned status {}", response.status());
                    }
                    Err(e) => log::error!("Network error fetching recharge offers: {e:?}"),
                }

                loading.set(false);
            });
            || ()
        });
    }

    let on_add = {
        let kind = kind.clone();
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let daily_quantity = daily_quantity.clone();
        let condition = condition.clone();
        let condition_value = condition_value.clone();
        let gift_id = gift_id.clone();
        let amount = amount.clone();
        let provider = provider.clone();
        let form_state = form_state.clone();
        let reload = reload.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let is_mobile = *kind == OFFER_KINDS[0];
            if start_date.is_empty() || end_date.is_empty() || condition.is_empty() {
                form_state
                    .handle_error
                    .emit("Dates and a win condition are required".to_string());
                return;
            }
            let quantity = match daily_quantity.parse::<u32>() {
                Ok(q) if q > 0 => q,
                _ => {
                    form_state
                        .handle_error
                        .emit("Daily quantity must be a positive number".to_string());
                    return;
                }
            };
            let request = if is_mobile {
                let Ok(gift) = gift_id.parse::<i64>() else {
                    form_state
                        .handle_error
                        .emit("A gift item id is required for mobile offers".to_string());
                    return;
                };
                NewOfferRequest {
                    lucky_draw_system: lucky_draw_id,
                    start_date: (*start_date).clone(),
                    end_date: (*end_date).clone(),
                    daily_quantity: quantity,
                    type_of_offer: (*condition).clone(),
                    offer_condition_value: (*condition_value).clone(),
                    gift_id: Some(gift),
                    amount: None,
                    provider: None,
                }
            } else {
                let Ok(card_amount) = amount.parse::<u32>() else {
                    form_state
                        .handle_error
                        .emit("A card amount is required for recharge offers".to_string());
                    return;
                };
                NewOfferRequest {
                    lucky_draw_system: lucky_draw_id,
                    start_date: (*start_date).clone(),
                    end_date: (*end_date).clone(),
                    daily_quantity: quantity,
                    type_of_offer: (*condition).clone(),
                    offer_condition_value: (*condition_value).clone(),
                    gift_id: None,
                    amount: Some(card_amount),
                    provider: Some((*provider).clone()),
                }
            };
            form_state.set_submitting.emit(true);

            let endpoint = if is_mobile {
                MOBILE_OFFERS_ENDPOINT
            } else {
                RECHARGE_OFFERS_ENDPOINT
            };
            let form_state = form_state.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let token = get_auth_token().unwrap_or_default();
                let url = format!("{}{}", get_api_base_url(), endpoint);
                let response = match Request::post(&url)
                    .header("Authorization", &format!("Bearer {token}"))
                    .json(&request)
                {
                    Ok(request) => request.send().await,
                    Err(e) => {
                        log::error!("Failed to encode offer request: {e:?}");
                        form_state
                            .handle_error
                            .emit(shared::constants::NETWORK_ERROR.to_string());
                        return;
                    }
                };
                match response {
                    Ok(response) if response.ok() => {
                        form_state.handle_success.emit("Offer added".to_string());
                        reload.set(*reload + 1);
                    }
                    Ok(response) => {
                        form_state
                            .handle_error
                            .emit(format!("Failed to add the offer ({})", response.status()));
                    }
                    Err(e) => {
                        log::error!("Network error adding offer: {e:?}");
                        form_state
                            .handle_error
                            .emit(shared::constants::NETWORK_ERROR.to_string());
                    }
                }
            });
        })
    };

    let on_delete = {
        let form_state = form_state.clone();
        let reload = reload.clone();
        Callback::from(move |(endpoint, id): (&'static str, i64)| {
            let form_state = form_state.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let token = get_auth_token().unwrap_or_default();
                let url = format!("{}{}{}/", get_api_base_url(), endpoint, id);
                match Request::delete(&url)
                    .header("Authorization", &format!("Bearer {token}"))
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => reload.set(*reload + 1),
                    Ok(response) => {
                        form_state
                            .handle_error
                            .emit(format!("Failed to delete the offer ({})", response.status()));
                    }
                    Err(e) => {
                        log::error!("Network error deleting offer: {e:?}");
                        form_state
                            .handle_error
                            .emit(shared::constants::NETWORK_ERROR.to_string());
                    }
                }
            });
        })
    };

    let setter = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |v| handle.set(v))
    };

    html! {
        <div class={styles::ADMIN_CARD}>
            <h2 class={styles::SECTION_TITLE}>{"Offers"}</h2>

            <form onsubmit={on_add} class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end mb-6">
                <SelectField
                    label="Offer Kind"
                    value={(*kind).clone()}
                    options={OFFER_KINDS.iter().map(|s| s.to_string()).collect::<Vec<_>>()}
                    onchange={setter(&kind)}
                />
                <TextField
                    label="Start Date"
                    input_type="date"
                    value={(*start_date).clone()}
                    oninput={setter(&start_date)}
                />
                <TextField
                    label="End Date"
                    input_type="date"
                    value={(*end_date).clone()}
                    oninput={setter(&end_date)}
                />
                <TextField
                    label="Daily Quantity"
                    input_type="number"
                    value={(*daily_quantity).clone()}
                    oninput={setter(&daily_quantity)}
                />
                <SelectField
                    label="Win Condition"
                    value={(*condition).clone()}
                    options={OFFER_CONDITIONS.iter().map(|s| s.to_string()).collect::<Vec<_>>()}
                    onchange={setter(&condition)}
                />
                <TextField
                    label="Condition Value"
                    value={(*condition_value).clone()}
                    placeholder="e.g. 50 for every 50th entry"
                    oninput={setter(&condition_value)}
                />
                if *kind == OFFER_KINDS[0] {
                    <TextField
                        label="Gift Item ID"
                        input_type="number"
                        value={(*gift_id).clone()}
                        oninput={setter(&gift_id)}
                    />
                } else {
                    <TextField
                        label="Card Amount"
                        input_type="number"
                        value={(*amount).clone()}
                        oninput={setter(&amount)}
                    />
                    <TextField
                        label="Provider"
                        value={(*provider).clone()}
                        oninput={setter(&provider)}
                    />
                }
                <button type="submit" disabled={form_state.submitting} class={styles::BUTTON_SECONDARY}>
                    {"Add Offer"}
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
            } else {
                <h3 class="font-semibold text-gray-800 mb-2">{"Mobile Phone Offers"}</h3>
                if mobile_offers.is_empty() {
                    <p class={classes!(styles::TEXT_SMALL, "mb-4")}>{"None configured."}</p>
                } else {
                    <table class={classes!(styles::TABLE, "mb-6")}>
                        <thead>
                            <tr>
                                <th class={styles::TABLE_HEAD}>{"Gift"}</th>
                                <th class={styles::TABLE_HEAD}>{"Window"}</th>
                                <th class={styles::TABLE_HEAD}>{"Daily Qty"}</th>
                                <th class={styles::TABLE_HEAD}>{"Condition"}</th>
                                <th class={styles::TABLE_HEAD}></th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                mobile_offers.iter().map(|offer| {
                                    let on_delete = on_delete.clone();
                                    let id = offer.id;
                                    html! {
                                        <tr key={offer.id}>
                                            <td class={styles::TABLE_CELL}>{&offer.gift.name}</td>
                                            <td class={styles::TABLE_CELL}>
                                                {format!("{} — {}", format_date(&offer.start_date), format_date(&offer.end_date))}
                                            </td>
                                            <td class={styles::TABLE_CELL}>{offer.daily_quantity}</td>
                                            <td class={styles::TABLE_CELL}>
                                                {format!("{} ({})", offer.type_of_offer, offer.offer_condition_value)}
                                            </td>
                                            <td class={styles::TABLE_CELL}>
                                                <button
                                                    class={styles::BUTTON_DANGER}
                                                    onclick={Callback::from(move |_| on_delete.emit((MOBILE_OFFERS_ENDPOINT, id)))}
                                                >{"Delete"}</button>
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Html>()
                            }
                        </tbody>
                    </table>
                }

                <h3 class="font-semibold text-gray-800 mb-2">{"Recharge Card Offers"}</h3>
                if recharge_offers.is_empty() {
                    <p class={styles::TEXT_SMALL}>{"None configured."}</p>
                } else {
                    <table class={styles::TABLE}>
                        <thead>
                            <tr>
                                <th class={styles::TABLE_HEAD}>{"Card"}</th>
                                <th class={styles::TABLE_HEAD}>{"Window"}</th>
                                <th class={styles::TABLE_HEAD}>{"Daily Qty"}</th>
                                <th class={styles::TABLE_HEAD}>{"Condition"}</th>
                                <th class={styles::TABLE_HEAD}></th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                recharge_offers.iter().map(|offer| {
                                    let on_delete = on_delete.clone();
                                    let id = offer.id;
                                    html! {
                                        <tr key={offer.id}>
                                            <td class={styles::TABLE_CELL}>
                                                {format!("{} {}", offer.provider, offer.amount)}
                                            </td>
                                            <td class={styles::TABLE_CELL}>
                                                {format!("{} — {}", format_date(&offer.start_date), format_date(&offer.end_date))}
                                            </td>
                                            <td class={styles::TABLE_CELL}>{offer.daily_quantity}</td>
                                            <td class={styles::TABLE_CELL}>
                                                {format!("{} ({})", offer.type_of_offer, offer.offer_condition_value)}
                                            </td>
                                            <td class={styles::TABLE_CELL}>
                                                <button
                                                    class={styles::BUTTON_DANGER}
                                                    onclick={Callback::from(move |_| on_delete.emit((RECHARGE_OFFERS_ENDPOINT, id)))}
                                                >{"Delete"}</button>
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Html>()
                            }
                        </tbody>
                    </table>
                }
            }
        </div>
    }
}
