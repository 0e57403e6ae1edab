//! Product view inside the quick-view dialog
//!
//! `ProductDetails` owns the [`VariantSession`] for one product; it is keyed
//! by handle so a different product always starts a fresh session.
//! [`DetailsView`] renders a session and reports user intents.

mod gallery;
mod options;
mod view;

pub use gallery::Gallery;
pub use options::OptionGroup;
pub use view::{DetailsView, Props as DetailsViewProps};

use quickview_core::{Image, Product, StepDirection, VariantSession};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

use crate::a11y::announce;
use crate::i18n::tr;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub product: Rc<Product>,
}

/// A selection change requested from the option groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionIntent {
    Select { dimension: String, value: String },
    Step { dimension: String, direction: StepDirection },
}

fn announce_selection(dimension: &str, value: &str) {
    let mut vars = BTreeMap::new();
    vars.insert("name", dimension);
    vars.insert("value", value);
    announce(&tr("details.selected", Some(&vars)));
}

impl OptionIntent {
    #[must_use]
    pub fn dimension(&self) -> &str {
        match self {
            Self::Select { dimension, .. } | Self::Step { dimension, .. } => dimension,
        }
    }
}

/// Apply `intent` to a copy of `session`; `None` when nothing changed.
#[must_use]
pub fn apply_intent(session: &VariantSession, intent: &OptionIntent) -> Option<VariantSession> {
    let mut next = session.clone();
    let changed = match intent {
        OptionIntent::Select { dimension, value } => match next.select(dimension, value) {
            Ok(changed) => changed.then(|| value.clone()),
            Err(err) => {
                log::warn!("rejected selection: {err}");
                None
            }
        },
        OptionIntent::Step {
            dimension,
            direction,
        } => next.step(dimension, *direction),
    }?;
    announce_selection(intent.dimension(), &changed);
    Some(next)
}

#[function_component(ProductDetails)]
pub fn product_details(props: &Props) -> Html {
    let session = use_state(|| VariantSession::new((*props.product).clone()));

    let on_option = {
        let session = session.clone();
        Callback::from(move |intent: OptionIntent| {
            if let Some(next) = apply_intent(&session, &intent) {
                session.set(next);
            }
        })
    };
    let on_pick = {
        let session = session.clone();
        Callback::from(move |image: Image| {
            let mut next = (*session).clone();
            next.pick_image(image);
            session.set(next);
        })
    };

    html! {
        <DetailsView session={(*session).clone()} on_option={on_option} on_pick={on_pick} />
    }
}
