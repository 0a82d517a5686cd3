use gloo_net::http::Request;
use shared::constants::ANALYTICS_ENDPOINT;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::base::{get_auth_token, today};
use crate::components::TextField;
use crate::config::get_api_base_url;
use crate::hooks::use_form_state;
use crate::models::AnalyticsSummary;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct AnalyticsProps {
    pub lucky_draw_id: i64,
}

#[function_component(Analytics)]
pub fn analytics(props: &AnalyticsProps) -> Html {
    let start_date = use_state(today);
    let end_date = use_state(today);
    let summary = use_state(|| None::<AnalyticsSummary>);
    let form_state = use_form_state();
    let lucky_draw_id = props.lucky_draw_id;

    {
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let summary = summary.clone();
        let form_state = form_state.clone();
        use_effect_with(
            (lucky_draw_id, (*start_date).clone(), (*end_date).clone()),
            move |(id, start, end)| {
                let id = *id;
                let start = start.clone();
                let end = end.clone();
                spawn_local(async move {
                    let token = get_auth_token().unwrap_or_default();
                    let url = format!(
                        "{}{}?lucky_draw_system_id={}&start_date={}&end_date={}",
                        get_api_base_url(),
                        ANALYTICS_ENDPOINT,
                        id,
                        start,
                        end
                    );
                    match Request::get(&url)
                        .header("Authorization", &format!("Bearer {token}"))
                        .send()
                        .await
                    {
                        Ok(response) if response.ok() => {
                            match response.json::<AnalyticsSummary>().await {
                                Ok(fetched) => summary.set(Some(fetched)),
                                Err(e) => {
                                    log::error!("Failed to parse analytics summary: {e:?}");
                                    form_state
                                        .handle_error
                                        .emit("Failed to load analytics".to_string());
                                }
                            }
                        }
                        Ok(response) => {
                            form_state
                                .handle_error
                                .emit(format!("Failed to load analytics ({})", response.status()));
                        }
                        Err(e) => {
                            log::error!("Network error fetching analytics: {e:?}");
                            form_state
                                .handle_error
                                .emit(shared::constants::NETWORK_ERROR.to_string());
                        }
                    }
                });
                || ()
            },
        );
    }

    let stat_card = |label: &str, value: u32| {
        html! {
            <div class="bg-gray-50 rounded-lg p-4 text-center">
                <p class="text-3xl font-bold text-gray-900">{value}</p>
                <p class={styles::TEXT_SMALL}>{label}</p>
            </div>
        }
    };

    html! {
        <div class={styles::ADMIN_CARD}>
            <h2 class={styles::SECTION_TITLE}>{"Analytics"}</h2>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-6">
                <TextField
                    label="Start Date"
                    input_type="date"
                    value={(*start_date).clone()}
                    oninput={{
                        let start_date = start_date.clone();
                        Callback::from(move |v| start_date.set(v))
                    }}
                />
                <TextField
                    label="End Date"
                    input_type="date"
                    value={(*end_date).clone()}
                    oninput={{
                        let end_date = end_date.clone();
                        Callback::from(move |v| end_date.set(v))
                    }}
                />
            </div>

            if !form_state.error.is_empty() {
                <div class={classes!(styles::CARD_ERROR, "mb-4")}>{&form_state.error}</div>
            }

            if let Some(current) = &*summary {
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    { stat_card("Total Entries", current.total_entries) }
                    { stat_card("Winners", current.total_winners) }
                    { stat_card("Entries Today", current.entries_today) }
                    { stat_card("Gifts Remaining", current.gifts_remaining) }
                </div>
            } else {
                <div class="flex justify-center py-8"><div class={styles::LOADING_SPINNER}></div></div>
            }
        </div>
    }
}
