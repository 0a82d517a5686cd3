use yew::prelude::*;

#[derive(Clone)]
pub struct FormState {
    pub error: String,
    pub success: String,
    pub submitting: bool,
    pub handle_success: Callback<String>,
    pub handle_error: Callback<String>,
    pub set_submitting: Callback<bool>,
}

#[hook]
pub fn use_form_state() -> FormState {
    let error = use_state(String::new);
    let success = use_state(String::new);
    let submitting = use_state(|| false);

    let handle_success = {
        let success = success.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |msg: String| {
            success.set(msg);
            error.set(String::new());
            submitting.set(false);
        })
    };

    let handle_error = {
        let error = error.clone();
        let success = success.clone();
        let submitting = submitting.clone();
        Callback::from(move |msg: String| {
            error.set(msg);
            success.set(String::new());
            submitting.set(false);
        })
    };

    let set_submitting = {
        let submitting = submitting.clone();
        Callback::from(move |value: bool| submitting.set(value))
    };

    FormState {
        error: (*error).clone(),
        success: (*success).clone(),
        submitting: *submitting,
        handle_success,
        handle_error,
        set_submitting,
    }
}
