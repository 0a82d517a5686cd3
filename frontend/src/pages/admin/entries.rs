use gloo_net::http::Request;
use shared::constants::CUSTOMER_LIST_ENDPOINT;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::base::{format_date, get_auth_token};
use crate::config::get_api_base_url;
use crate::hooks::use_form_state;
use crate::models::{CustomerEntry, Paginated};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct EntriesProps {
    pub lucky_draw_id: i64,
}

/// Paged table of customer submissions for one draw.
#[function_component(Entries)]
pub fn entries(props: &EntriesProps) -> Html {
    let page = use_state(|| 1u32);
    let entries = use_state(|| None::<Paginated<CustomerEntry>>);
    let form_state = use_form_state();
    let lucky_draw_id = props.lucky_draw_id;

    {
        let entries = entries.clone();
        let form_state = form_state.clone();
        use_effect_with((lucky_draw_id, *page), move |(id, page)| {
            let id = *id;
            let page = *page;
            spawn_local(async move {
                let token = get_auth_token().unwrap_or_default();
                let url = format!(
                    "{}{}?lucky_draw_system_id={}&page={}",
                    get_api_base_url(),
                    CUSTOMER_LIST_ENDPOINT,
                    id,
                    page
                );
                match Request::get(&url)
                    .header("Authorization", &format!("Bearer {token}"))
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        match response.json::<Paginated<CustomerEntry>>().await {
                            Ok(fetched) => entries.set(Some(fetched)),
                            Err(e) => {
                                log::error!("Failed to parse customer entries: {e:?}");
                                form_state
                                    .handle_error
                                    .emit("Failed to load entries".to_string());
                            }
                        }
                    }
                    Ok(response) => {
                        form_state
                            .handle_error
                            .emit(format!("Failed to load entries ({})", response.status()));
                    }
                    Err(e) => {
                        log::error!("Network error fetching entries: {e:?}");
                        form_state
                            .handle_error
                            .emit(shared::constants::NETWORK_ERROR.to_string());
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class={styles::ADMIN_CARD}>
            <h2 class={styles::SECTION_TITLE}>{"Customer Entries"}</h2>

            if !form_state.error.is_empty() {
                <div class={classes!(styles::CARD_ERROR, "mb-4")}>{&form_state.error}</div>
            }

            if let Some(current) = &*entries {
                <p class={classes!(styles::TEXT_SMALL, "mb-3")}>
                    {format!("{} total entries", current.count)}
                </p>
                if current.results.is_empty() {
                    <p class={styles::TEXT_BODY}>{"No entries yet."}</p>
                } else {
                    <div class="overflow-x-auto">
                        <table class={styles::TABLE}>
                            <thead>
                                <tr>
                                    <th class={styles::TABLE_HEAD}>{"Customer"}</th>
                                    <th class={styles::TABLE_HEAD}>{"Phone"}</th>
                                    <th class={styles::TABLE_HEAD}>{"IMEI"}</th>
                                    <th class={styles::TABLE_HEAD}>{"Date"}</th>
                                    <th class={styles::TABLE_HEAD}>{"Prize"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    current.results.iter().map(|entry| html! {
                                        <tr key={entry.id}>
                                            <td class={styles::TABLE_CELL}>{&entry.customer_name}</td>
                                            <td class={styles::TABLE_CELL}>{&entry.phone_number}</td>
                                            <td class={styles::TABLE_CELL}>{&entry.imei}</td>
                                            <td class={styles::TABLE_CELL}>{format_date(&entry.date_of_purchase)}</td>
                                            <td class={styles::TABLE_CELL}>
                                                { entry.prize.as_deref().unwrap_or("-") }
                                            </td>
                                        </tr>
                                    }).collect::<Html>()
                                }
                            </tbody>
                        </table>
                    </div>
                    <div class="flex items-center gap-3 mt-4">
                        <button
                            class={styles::BUTTON_SECONDARY}
                            disabled={current.previous.is_none()}
                            onclick={{
                                let page = page.clone();
                                Callback::from(move |_| page.set((*page).saturating_sub(1).max(1)))
                            }}
                        >{"Previous"}</button>
                        <span class={styles::TEXT_SMALL}>{format!("Page {}", *page)}</span>
                        <button
                            class={styles::BUTTON_SECONDARY}
                            disabled={current.next.is_none()}
                            onclick={{
                                let page = page.clone();
                                Callback::from(move |_| page.set(*page + 1))
                            }}
                        >{"Next"}</button>
                    </div>
                }
            } else {
                <div class="flex justify-center py-8"><div class={styles::LOADING_SPINNER}></div></div>
            }
        </div>
    }
}
