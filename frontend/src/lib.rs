pub mod base;
pub mod styles;
pub mod hooks;
pub mod models;
pub mod components;
pub mod pages;
pub mod config;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{
    admin::{AdminDashboard, ManageLuckyDraw},
    enter::Enter,
    home::Home,
    not_found::NotFound,
    offer::OfferDetails,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/enter")]
    Enter,
    #[at("/offer")]
    Offer,
    #[at("/admin")]
    Admin,
    #[at("/admin/lucky-draws/:id")]
    ManageLuckyDraw { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Enter => html! { <Enter /> },
        Route::Offer => html! { <OfferDetails /> },
        Route::Admin => html! { <AdminDashboard /> },
        Route::ManageLuckyDraw { id } => html! { <ManageLuckyDraw {id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
