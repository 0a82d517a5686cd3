use gloo_net::http::Request;
use shared::constants::LUCKY_DRAW_SYSTEMS_ENDPOINT;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::base::get_auth_token;
use crate::config::get_api_base_url;
use crate::models::LuckyDraw;
use crate::pages::admin::{
    analytics::Analytics, details::LuckyDrawDetails, entries::Entries, gift_items::GiftItems,
    offers::Offers, upload_imei::UploadImei,
};
use crate::styles;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Details,
    Gifts,
    Offers,
    Entries,
    Imei,
    Analytics,
}

impl Tab {
    const ALL: [Tab; 6] = [
        Tab::Details,
        Tab::Gifts,
        Tab::Offers,
        Tab::Entries,
        Tab::Imei,
        Tab::Analytics,
    ];

    fn label(self) -> &'static str {
        match self {
            Tab::Details => "Details",
            Tab::Gifts => "Gift Items",
            Tab::Offers => "Offers",
            Tab::Entries => "Entries",
            Tab::Imei => "IMEI List",
            Tab::Analytics => "Analytics",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ManageLuckyDrawProps {
    pub id: i64,
}

/// Management console for one lucky draw.
#[function_component(ManageLuckyDraw)]
pub fn manage_lucky_draw(props: &ManageLuckyDrawProps) -> Html {
    let draw = use_state(|| None::<LuckyDraw>);
    let error = use_state(String::new);
    let tab = use_state(|| Tab::Details);

    {
        let draw = draw.clone();
        let error = error.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            spawn_local(async move {
                let token = get_auth_token().unwrap_or_default();
                let url = format!(
                    "{}{}{}/",
                    get_api_base_url(),
                    LUCKY_DRAW_SYSTEMS_ENDPOINT,
                    id
                );
                match Request::get(&url)
                    .header("Authorization", &format!("Bearer {token}"))
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => match response.json::<LuckyDraw>().await {
                        Ok(fetched) => draw.set(Some(fetched)),
                        Err(e) => {
                            log::error!("Failed to parse lucky draw {id}: {e:?}");
                            error.set("Failed to load the lucky draw".to_string());
                        }
                    },
                    Ok(response) => {
                        error.set(format!("Failed to load the lucky draw ({})", response.status()));
                    }
                    Err(e) => {
                        log::error!("Network error fetching lucky draw {id}: {e:?}");
                        error.set(shared::constants::NETWORK_ERROR.to_string());
                    }
                }
            });
            || ()
        });
    }

    let on_update = {
        let draw = draw.clone();
        Callback::from(move |updated: LuckyDraw| draw.set(Some(updated)))
    };

    html! {
        <div class={styles::ADMIN_PAGE}>
            <div class="max-w-5xl mx-auto">
                if !(*error).is_empty() {
                    <div class={styles::CARD_ERROR}>{&*error}</div>
                } else if let Some(current) = &*draw {
                    <h1 class="text-2xl font-bold text-gray-900 mb-4">{&current.name}</h1>
                    <div class="flex flex-wrap gap-1 border-b border-gray-200 mb-4">
                        {
                            Tab::ALL.iter().map(|candidate| {
                                let tab = tab.clone();
                                let candidate = *candidate;
                                let class = if *tab == candidate { styles::TAB_ACTIVE } else { styles::TAB };
                                html! {
                                    <button
                                        key={candidate.label()}
                                        {class}
                                        onclick={Callback::from(move |_| tab.set(candidate))}
                                    >{candidate.label()}</button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    {
                        match *tab {
                            Tab::Details => html! { <LuckyDrawDetails draw={current.clone()} {on_update} /> },
                            Tab::Gifts => html! { <GiftItems lucky_draw_id={current.id} /> },
                            Tab::Offers => html! { <Offers lucky_draw_id={current.id} /> },
                            Tab::Entries => html! { <Entries lucky_draw_id={current.id} /> },
                            Tab::Imei => html! { <UploadImei lucky_draw_id={current.id} /> },
                            Tab::Analytics => html! { <Analytics lucky_draw_id={current.id} /> },
                        }
                    }
                } else {
                    <div class="flex justify-center py-12"><div class={styles::LOADING_SPINNER}></div></div>
                }
            </div>
        </div>
    }
}
