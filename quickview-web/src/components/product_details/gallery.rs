use quickview_core::{DisplayImage, Image};
use std::collections::BTreeMap;
use yew::prelude::*;

use crate::i18n::{t, tr};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub display: DisplayImage,
    pub images: Vec<Image>,
    pub title: AttrValue,
    pub on_pick: Callback<Image>,
}

/// Main image plus the thumbnail strip that sets the display override.
#[function_component(Gallery)]
pub fn gallery(props: &Props) -> Html {
    let main = props.display.image().map_or_else(
        || html! { <div class="gallery__placeholder">{ t("catalog.no_image") }</div> },
        |image| {
            html! {
                <img
                    class="gallery__main"
                    src={image.url.clone()}
                    alt={image.alt_or(&props.title).to_string()}
                />
            }
        },
    );
    let shown = props.display.url();

    html! {
        <div class="gallery">
            { main }
            if !props.images.is_empty() {
                <div class="gallery__thumbs" role="group" aria-label={t("details.thumbnails")}>
                    { for props.images.iter().enumerate().map(|(idx, image)| {
                        let index = (idx + 1).to_string();
                        let mut vars = BTreeMap::new();
                        vars.insert("index", index.as_str());
                        let label = tr("details.thumbnail", Some(&vars));
                        let onclick = {
                            let on_pick = props.on_pick.clone();
                            let image = image.clone();
                            Callback::from(move |_: MouseEvent| on_pick.emit(image.clone()))
                        };
                        let current = shown == Some(image.url.as_str());
                        html! {
                            <button
                                key={image.url.clone()}
                                type="button"
                                class={classes!("gallery__thumb", current.then_some("gallery__thumb--current"))}
                                aria-label={label}
                                aria-pressed={current.to_string()}
                                onclick={onclick}
                            >
                                <img src={image.url.clone()} alt="" />
                            </button>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
