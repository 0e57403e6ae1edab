use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">{ t("footer.copy") }</footer>
    }
}
