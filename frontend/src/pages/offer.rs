use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::components::Header;
use crate::config::get_asset_url;
use crate::hooks::use_lucky_draw;
use crate::styles;

/// Campaign detail page: the rich-text sections come from the admin
/// console's editor and are rendered as-is; sanitization happens on the
/// backend before they are stored.
#[function_component(OfferDetails)]
pub fn offer_details() -> Html {
    let campaign = use_lucky_draw();

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

    let section = |title: &str, body: &str| -> Html {
        if body.is_empty() {
            return html! {};
        }
        let content = Html::from_html_unchecked(AttrValue::from(body.to_string()));
        html! {
            <section class="bg-white rounded-lg shadow-lg p-6 mb-6 text-left">
                <h2 class={styles::SECTION_TITLE}>{title}</h2>
                <div class={styles::TEXT_BODY}>{content}</div>
            </section>
        }
    };

    let background = format!(
        "background-image: url({})",
        get_asset_url(&draw.background_image)
    );

    html! {
        <div class={styles::PAGE} style={background}>
            <Header title={draw.name.clone()} />
            <main class="flex-grow max-w-3xl w-full mx-auto py-10 px-4">
                <h1 class="text-3xl font-black text-white mb-8 text-center">{&draw.name}</h1>
                if !draw.main_offer_stamp_image.is_empty() {
                    <img
                        src={get_asset_url(&draw.main_offer_stamp_image)}
                        alt="offer"
                        class="mx-auto mb-8 max-h-56 object-contain"
                    />
                }
                { section("About the Offer", &draw.description) }
                { section("How to Participate", &draw.how_to_participate) }
                { section("Redeem Condition", &draw.redeem_condition) }
                { section("Terms and Conditions", &draw.terms_and_conditions) }
            </main>
        </div>
    }
}
