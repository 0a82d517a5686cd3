use std::collections::HashMap;

use gloo_net::http::Request;
use shared::constants::{
    region_for_city, CAMPAIGN_SOURCES, CITIES, CUSTOMER_ENTRY_ENDPOINT, GIFT_LIST_ENDPOINT,
    NETWORK_ERROR, PROFESSIONS,
};
use shared::entry::{CustomerEntryRequest, SubmissionResponse};
use shared::gift_catalog::{Gift, GiftCatalog};
use shared::spin_outcome::{normalize, SpinOutcome};
use shared::validation::error_messages;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{Header, SelectField, SubmissionResult, TextField};
use crate::config::{get_api_base_url, get_asset_url};
use crate::hooks::{use_form_state, use_lucky_draw};
use crate::models::ErrorResponse;
use crate::styles;

/// Everything the reveal flow needs, assembled once after a successful
/// submission.
struct RevealInputs {
    response: SubmissionResponse,
    catalog: GiftCatalog,
    outcome: SpinOutcome,
}

fn field_setter<F>(
    form: &UseStateHandle<CustomerEntryRequest>,
    apply: F,
) -> Callback<String>
where
    F: Fn(&mut CustomerEntryRequest, String) + 'static,
{
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
    })
}

#[function_component(Enter)]
pub fn enter() -> Html {
    let campaign = use_lucky_draw();
    let form = use_state(CustomerEntryRequest::default);
    let other_source = use_state(String::new);
    let other_profession = use_state(String::new);
    let field_errors = use_state(HashMap::<String, String>::new);
    let form_state = use_form_state();
    let reveal_inputs = use_state(|| None::<RevealInputs>);

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
                <p class="text-white text-lg">{"No campaign is running right now."}</p>
            </div>
        };
    };

    let onsubmit = {
        let form = form.clone();
        let other_source = other_source.clone();
        let other_profession = other_profession.clone();
        let field_errors = field_errors.clone();
        let form_state = form_state.clone();
        let reveal_inputs = reveal_inputs.clone();
        let draw_id = draw.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut request = (*form).clone();
            request.lucky_draw_system = draw_id;
            // "Other" selections submit the free-text answer instead.
            if request.how_know_about_campaign == "Other" {
                request.how_know_about_campaign = (*other_source).clone();
            }
            if request.profession == "Other" {
                request.profession = (*other_profession).clone();
            }
            request.region = region_for_city(&request.sold_area).map(str::to_string);
            if request.email.as_deref() == Some("") {
                request.email = None;
            }

            if let Err(errors) = request.validate() {
                field_errors.set(error_messages(&errors));
                return;
            }
            field_errors.set(HashMap::new());
            form_state.set_submitting.emit(true);

            let form_state = form_state.clone();
            let reveal_inputs = reveal_inputs.clone();
            spawn_local(async move {
                let url = format!("{}{}", get_api_base_url(), CUSTOMER_ENTRY_ENDPOINT);
                let response = match Request::post(&url).json(&request) {
                    Ok(request) => request.send().await,
                    Err(e) => {
                        log::error!("Failed to encode entry request: {e:?}");
                        form_state.handle_error.emit(NETWORK_ERROR.to_string());
                        return;
                    }
                };

                let response = match response {
                    Ok(response) => response,
                    Err(e) => {
                        log::error!("Network error submitting entry: {e:?}");
                        form_state.handle_error.emit(NETWORK_ERROR.to_string());
                        return;
                    }
                };

                if !response.ok() {
                    let message = response
                        .json::<ErrorResponse>()
                        .await
                        .map(|body| body.error)
                        .unwrap_or_else(|_| "An unknown error occurred".to_string());
                    form_state.handle_error.emit(message);
                    return;
                }

                let submission = match response.json::<SubmissionResponse>().await {
                    Ok(submission) => submission,
                    Err(e) => {
                        log::error!("Failed to parse submission response: {e:?}");
                        form_state
                            .handle_error
                            .emit("An unknown error occurred".to_string());
                        return;
                    }
                };

                // The gift list defines the wheel; the no-win entry is
                // prepended locally so a losing spin has somewhere to land.
                let gift_list_url = format!(
                    "{}{}?lucky_draw_system_id={}",
                    get_api_base_url(),
                    GIFT_LIST_ENDPOINT,
                    draw_id
                );
                let gifts = match Request::get(&gift_list_url).send().await {
                    Ok(response) if response.ok() => {
                        response.json::<Vec<Gift>>().await.unwrap_or_default()
                    }
                    Ok(response) => {
                        log::error!("Gift list returned status {}", response.status());
                        Vec::new()
                    }
                    Err(e) => {
                        log::error!("Network error fetching gift list: {e:?}");
                        Vec::new()
                    }
                };

                let catalog = GiftCatalog::with_sentinel(draw_id, gifts);
                let outcome = normalize(&submission.gift, &catalog);
                form_state.handle_success.emit(String::new());
                reveal_inputs.set(Some(RevealInputs {
                    response: submission,
                    catalog,
                    outcome,
                }));
            });
        })
    };

    let background = format!(
        "background-image: url({})",
        get_asset_url(&draw.background_image)
    );

    let error_for = |field: &str| (*field_errors).get(field).cloned();

    html! {
        <div class={styles::PAGE} style={background}>
            <Header title={draw.name.clone()} />
            <main class={styles::MAIN}>
                if let Some(inputs) = &*reveal_inputs {
                    <SubmissionResult
                        catalog={inputs.catalog.clone()}
                        outcome={inputs.outcome.clone()}
                        imei={inputs.response.imei.clone()}
                    />
                } else {
                    <div class={styles::CARD}>
                        <h2 class={styles::HEADING}>{"Enter Your Details"}</h2>
                        <form {onsubmit} class={styles::FORM}>
                            <TextField
                                label="Customer Name"
                                value={form.customer_name.clone()}
                                error={error_for("customer_name")}
                                oninput={field_setter(&form, |f, v| f.customer_name = v)}
                            />
                            <TextField
                                label="Contact Number"
                                value={form.phone_number.clone()}
                                error={error_for("phone_number")}
                                oninput={field_setter(&form, |f, v| f.phone_number = v)}
                            />
                            <TextField
                                label="Email (optional)"
                                input_type="email"
                                value={form.email.clone().unwrap_or_default()}
                                error={error_for("email")}
                                oninput={field_setter(&form, |f, v| f.email = Some(v))}
                            />
                            <TextField
                                label="Shop Name"
                                value={form.shop_name.clone()}
                                error={error_for("shop_name")}
                                oninput={field_setter(&form, |f, v| f.shop_name = v)}
                            />
                            <SelectField
                                label="Sold Area"
                                value={form.sold_area.clone()}
                                options={CITIES.iter().map(|(city, _)| city.to_string()).collect::<Vec<_>>()}
                                error={error_for("sold_area")}
                                onchange={field_setter(&form, |f, v| f.sold_area = v)}
                            />
                            <TextField
                                label="IMEI Number"
                                value={form.imei.clone()}
                                error={error_for("imei")}
                                placeholder="15-digit IMEI on the phone box"
                                oninput={field_setter(&form, |f, v| f.imei = v)}
                            />
                            <SelectField
                                label="How did you hear about this campaign?"
                                value={form.how_know_about_campaign.clone()}
                                options={CAMPAIGN_SOURCES.iter().map(|s| s.to_string()).collect::<Vec<_>>()}
                                error={error_for("how_know_about_campaign")}
                                onchange={field_setter(&form, |f, v| f.how_know_about_campaign = v)}
                            />
                            if form.how_know_about_campaign == "Other" {
                                <TextField
                                    label="Please specify"
                                    value={(*other_source).clone()}
                                    oninput={{
                                        let other_source = other_source.clone();
                                        Callback::from(move |v| other_source.set(v))
                                    }}
                                />
                            }
                            <SelectField
                                label="Profession"
                                value={form.profession.clone()}
                                options={PROFESSIONS.iter().map(|s| s.to_string()).collect::<Vec<_>>()}
                                error={error_for("profession")}
                                onchange={field_setter(&form, |f, v| f.profession = v)}
                            />
                            if form.profession == "Other" {
                                <TextField
                                    label="Your profession"
                                    value={(*other_profession).clone()}
                                    oninput={{
                                        let other_profession = other_profession.clone();
                                        Callback::from(move |v| other_profession.set(v))
                                    }}
                                />
                            }

                            if !form_state.error.is_empty() {
                                <div class={styles::CARD_ERROR}>{&form_state.error}</div>
                            }

                            <button
                                type="submit"
                                disabled={form_state.submitting}
                                class={styles::BUTTON_PRIMARY}
                            >
                                { if form_state.submitting { "Submitting..." } else { "Submit & Continue" } }
                            </button>
                        </form>
                    </div>
                }
            </main>
        </div>
    }
}
