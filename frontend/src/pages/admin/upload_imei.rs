use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use shared::constants::IMEI_UPLOAD_ENDPOINT;
use shared::validation::validate_imei;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::base::get_auth_token;
use crate::config::get_api_base_url;
use crate::hooks::use_form_state;
use crate::styles;

#[derive(Debug, Serialize)]
struct ImeiUploadRequest {
    lucky_draw_system: i64,
    imeis: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct ImeiUploadResponse {
    #[serde(default)]
    created: u32,
    #[serde(default)]
    duplicates: u32,
}

#[derive(Properties, PartialEq)]
pub struct UploadImeiProps {
    pub lucky_draw_id: i64,
}

/// Registers the IMEI allowlist for a draw. One IMEI per line; lines
/// failing the checksum-free length/digit check are rejected before
/// anything is sent.
#[function_component(UploadImei)]
pub fn upload_imei(props: &UploadImeiProps) -> Html {
    let raw = use_state(String::new);
    let rejected = use_state(Vec::<String>::new);
    let form_state = use_form_state();
    let lucky_draw_id = props.lucky_draw_id;

    let oninput = {
        let raw = raw.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
            {
                raw.set(area.value());
            }
        })
    };

    let onsubmit = {
        let raw = raw.clone();
        let rejected = rejected.clone();
        let form_state = form_state.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut valid = Vec::new();
            let mut invalid = Vec::new();
            for line in raw.lines() {
                let imei = line.trim();
                if imei.is_empty() {
                    continue;
                }
                if validate_imei(imei).is_ok() {
                    valid.push(imei.to_string());
                } else {
                    invalid.push(imei.to_string());
                }
            }
            rejected.set(invalid);

            if valid.is_empty() {
                form_state
                    .handle_error
                    .emit("No valid IMEI numbers found".to_string());
                return;
            }
            form_state.set_submitting.emit(true);

            let request = ImeiUploadRequest {
                lucky_draw_system: lucky_draw_id,
                imeis: valid,
            };
            let raw = raw.clone();
            let form_state = form_state.clone();
            spawn_local(async move {
                let token = get_auth_token().unwrap_or_default();
                let url = format!("{}{}", get_api_base_url(), IMEI_UPLOAD_ENDPOINT);
                let response = match Request::post(&url)
                    .header("Authorization", &format!("Bearer {token}"))
                    .json(&request)
                {
                    Ok(request) => request.send().await,
                    Err(e) => {
                        log::error!("Failed to encode IMEI upload: {e:?}");
                        form_state
                            .handle_error
                            .emit(shared::constants::NETWORK_ERROR.to_string());
                        return;
                    }
                };
                match response {
                    Ok(response) if response.ok() => {
                        let summary = response
                            .json::<ImeiUploadResponse>()
                            .await
                            .unwrap_or(ImeiUploadResponse {
                                created: request.imeis.len() as u32,
                                duplicates: 0,
                            });
                        raw.set(String::new());
                        form_state.handle_success.emit(format!(
                            "Registered {} IMEI numbers ({} duplicates skipped)",
                            summary.created, summary.duplicates
                        ));
                    }
                    Ok(response) => {
                        form_state
                            .handle_error
                            .emit(format!("Upload failed ({})", response.status()));
                    }
                    Err(e) => {
                        log::error!("Network error uploading IMEI list: {e:?}");
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
            <h2 class={styles::SECTION_TITLE}>{"IMEI List"}</h2>
            <p class={classes!(styles::TEXT_SMALL, "mb-3")}>
                {"Paste the eligible IMEI numbers below, one per line."}
            </p>

            <form {onsubmit} class={styles::FORM}>
                <textarea
                    class={styles::TEXTAREA}
                    rows="10"
                    placeholder="356938035643809\n356938035643810"
                    value={(*raw).clone()}
                    {oninput}
                ></textarea>

                if !rejected.is_empty() {
                    <div class={styles::CARD_ERROR}>
                        <p class="font-medium mb-1">
                            {format!("{} lines were rejected:", rejected.len())}
                        </p>
                        <ul class="list-disc list-inside text-sm">
                            {
                                rejected.iter().take(10).map(|imei| html! {
                                    <li key={imei.clone()}>{imei}</li>
                                }).collect::<Html>()
                            }
                        </ul>
                        if rejected.len() > 10 {
                            <p class="text-sm mt-1">{format!("...and {} more", rejected.len() - 10)}</p>
                        }
                    </div>
                }
                if !form_state.error.is_empty() {
                    <div class={styles::CARD_ERROR}>{&form_state.error}</div>
                }
                if !form_state.success.is_empty() {
                    <div class={styles::CARD_SUCCESS}>{&form_state.success}</div>
                }

                <button type="submit" disabled={form_state.submitting} class={styles::BUTTON_SECONDARY}>
                    { if form_state.submitting { "Uploading..." } else { "Upload IMEI List" } }
                </button>
            </form>
        </div>
    }
}
