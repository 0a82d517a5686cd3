use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::get_asset_url;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: String,
    #[prop_or_default]
    pub logo: Option<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="w-full bg-white/80 backdrop-blur-md shadow-sm">
            <div class="max-w-5xl mx-auto px-4 py-3 flex items-center justify-between">
                <Link<Route> to={Route::Home} classes="flex items-center gap-3">
                    {
                        if let Some(logo) = &props.logo {
                            html! { <img src={get_asset_url(logo)} alt="logo" class="h-10 w-10 object-contain" /> }
                        } else {
                            html! {}
                        }
                    }
                    <span class="text-lg font-bold text-gray-900">{&props.title}</span>
                </Link<Route>>
                <nav class="flex items-center gap-4 text-sm font-medium text-gray-700">
                    <Link<Route> to={Route::Offer} classes="hover:text-rose-500">{"Offer"}</Link<Route>>
                    <Link<Route> to={Route::Enter} classes="hover:text-rose-500">{"Enter the Draw"}</Link<Route>>
                </nav>
            </div>
        </header>
    }
}
