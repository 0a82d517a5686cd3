use gloo_net::http::Request;
use serde::Serialize;
use shared::constants::LUCKY_DRAW_SYSTEMS_ENDPOINT;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::base::get_auth_token;
use crate::components::TextField;
use crate::config::get_api_base_url;
use crate::hooks::use_form_state;
use crate::models::LuckyDraw;
use crate::styles;

#[derive(Debug, Serialize)]
struct UpdateLuckyDrawRequest {
    name: String,
    #[serde(rename = "type")]
    draw_type: String,
    start_date: String,
    end_date: String,
    description: String,
    how_to_participate: String,
    redeem_condition: String,
    terms_and_conditions: String,
    background_image: String,
    hero_image: String,
    main_offer_stamp_image: String,
}

#[derive(Properties, PartialEq)]
pub struct LuckyDrawDetailsProps {
    pub draw: LuckyDraw,
    pub on_update: Callback<LuckyDraw>,
}

fn draft_setter<F>(draft: &UseStateHandle<LuckyDraw>, apply: F) -> Callback<String>
where
    F: Fn(&mut LuckyDraw, String) + 'static,
{
    let draft = draft.clone();
    Callback::from(move |value: String| {
        let mut next = (*draft).clone();
        apply(&mut next, value);
        draft.set(next);
    })
}

#[function_component(LuckyDrawDetails)]
pub fn lucky_draw_details(props: &LuckyDrawDetailsProps) -> Html {
    let draft = use_state(|| props.draw.clone());
    let form_state = use_form_state();

    {
        let draft = draft.clone();
        use_effect_with(props.draw.clone(), move |draw| {
            draft.set(draw.clone());
            || ()
        });
    }

    let onsubmit = {
        let draft = draft.clone();
        let form_state = form_state.clone();
        let on_update = props.on_update.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form_state.set_submitting.emit(true);

            let current = (*draft).clone();
            let request = UpdateLuckyDrawRequest {
                name: current.name.clone(),
                draw_type: current.draw_type.clone(),
                start_date: current.start_date.clone(),
                end_date: current.end_date.clone(),
                description: current.description.clone(),
                how_to_participate: current.how_to_participate.clone(),
                redeem_condition: current.redeem_condition.clone(),
                terms_and_conditions: current.terms_and_conditions.clone(),
                background_image: current.background_image.clone(),
                hero_image: current.hero_image.clone(),
                main_offer_stamp_image: current.main_offer_stamp_image.clone(),
            };
            let form_state = form_state.clone();
            let on_update = on_update.clone();
            spawn_local(async move {
                let token = get_auth_token().unwrap_or_default();
                let url = format!(
                    "{}{}{}/",
                    get_api_base_url(),
                    LUCKY_DRAW_SYSTEMS_ENDPOINT,
                    current.id
                );
                let response = match Request::patch(&url)
                    .header("Authorization", &format!("Bearer {token}"))
                    .json(&request)
                {
                    Ok(request) => request.send().await,
                    Err(e) => {
                        log::error!("Failed to encode lucky draw update: {e:?}");
                        form_state
                            .handle_error
                            .emit(shared::constants::NETWORK_ERROR.to_string());
                        return;
                    }
                };
                match response {
                    Ok(response) if response.ok() => match response.json::<LuckyDraw>().await {
                        Ok(saved) => {
                            on_update.emit(saved);
                            form_state.handle_success.emit("Lucky draw saved".to_string());
                        }
                        Err(e) => {
                            log::error!("Failed to parse saved lucky draw: {e:?}");
                            form_state
                                .handle_error
                                .emit("Failed to save the lucky draw".to_string());
                        }
                    },
                    Ok(response) => {
                        form_state
                            .handle_error
                            .emit(format!("Failed to save the lucky draw ({})", response.status()));
                    }
                    Err(e) => {
                        log::error!("Network error saving lucky draw: {e:?}");
                        form_state
                            .handle_error
                            .emit(shared::constants::NETWORK_ERROR.to_string());
                    }
                }
            });
        })
    };

    let text_area = |label: &str, value: String, setter: Callback<String>| {
        let oninput = Callback::from(move |e: InputEvent| {
            if let Some(area) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
            {
                setter.emit(area.value());
            }
        });
        html! {
            <div>
                <label class={styles::TEXT_LABEL}>{label}</label>
                <textarea class={styles::TEXTAREA} rows="4" {value} {oninput}></textarea>
            </div>
        }
    };

    html! {
        <div class={styles::ADMIN_CARD}>
            <h2 class={styles::SECTION_TITLE}>{"Campaign Details"}</h2>
            <form {onsubmit} class={styles::FORM}>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <TextField
                        label="Name"
                        value={draft.name.clone()}
                        oninput={draft_setter(&draft, |d, v| d.name = v)}
                    />
                    <TextField
                        label="Type"
                        value={draft.draw_type.clone()}
                        oninput={draft_setter(&draft, |d, v| d.draw_type = v)}
                    />
                    <TextField
                        label="Start Date"
                        input_type="date"
                        value={draft.start_date.clone()}
                        oninput={draft_setter(&draft, |d, v| d.start_date = v)}
                    />
                    <TextField
                        label="End Date"
                        input_type="date"
                        value={draft.end_date.clone()}
                        oninput={draft_setter(&draft, |d, v| d.end_date = v)}
                    />
                    <TextField
                        label="Background Image URL"
                        value={draft.background_image.clone()}
                        oninput={draft_setter(&draft, |d, v| d.background_image = v)}
                    />
                    <TextField
                        label="Hero Image URL"
                        value={draft.hero_image.clone()}
                        oninput={draft_setter(&draft, |d, v| d.hero_image = v)}
                    />
                    <TextField
                        label="Offer Stamp Image URL"
                        value={draft.main_offer_stamp_image.clone()}
                        oninput={draft_setter(&draft, |d, v| d.main_offer_stamp_image = v)}
                    />
                </div>

                { text_area("Description", draft.description.clone(), draft_setter(&draft, |d, v| d.description = v)) }
                { text_area("How to Participate", draft.how_to_participate.clone(), draft_setter(&draft, |d, v| d.how_to_participate = v)) }
                { text_area("Redeem Condition", draft.redeem_condition.clone(), draft_setter(&draft, |d, v| d.redeem_condition = v)) }
                { text_area("Terms and Conditions", draft.terms_and_conditions.clone(), draft_setter(&draft, |d, v| d.terms_and_conditions = v)) }

                if !form_state.error.is_empty() {
                    <div class={styles::CARD_ERROR}>{&form_state.error}</div>
                }
                if !form_state.success.is_empty() {
                    <div class={styles::CARD_SUCCESS}>{&form_state.success}</div>
                }

                <button type="submit" disabled={form_state.submitting} class={styles::BUTTON_SECONDARY}>
                    { if form_state.submitting { "Saving..." } else { "Save Changes" } }
                </button>
            </form>
        </div>
    }
}
