mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use format::{fmt_money, fmt_price};
pub use locales::{LocaleMeta, locales};
pub use render::{t, tr};
