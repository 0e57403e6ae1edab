use yew::prelude::*;
use yew_router::prelude::*;

use crate::a11y::{STATUS_REGION_ID, visible_focus_css};
use crate::components::catalog_page::CatalogPage;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::i18n::{self, t};
use crate::paths;
use crate::router::Route;

/// Main application component providing browser routing
///
/// Mounted at startup; the quick view lives in the query string of the
/// home route, so it needs no route of its own.
#[function_component(App)]
pub fn app() -> Html {
    let basename = paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={basename}>
            <Shell />
        </BrowserRouter>
    }
}

/// Page chrome shared by every route: header, live region and footer.
#[function_component(Shell)]
pub fn shell() -> Html {
    let lang = use_state(i18n::current_lang);
    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |next: String| lang.set(next))
    };

    html! {
        <>
            <style>{ visible_focus_css() }</style>
            <Header current_lang={(*lang).clone()} on_lang_change={on_lang_change} />
            <Switch<Route> render={switch} />
            <div id={STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite" aria-atomic="true"></div>
            <Footer />
        </>
    }
}

#[allow(clippy::needless_pass_by_value)] // `Switch` hands routes over by value.
fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <CatalogPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main id="main" class="not-found">
            <h1>{ t("not_found.title") }</h1>
            <Link<Route> to={Route::Home}>{ t("not_found.home") }</Link<Route>>
        </main>
    }
}
