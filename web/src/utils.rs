use chrono::prelude::*;
use gloo::storage::{LocalStorage, Storage};
use serde::{Serialize, de::DeserializeOwned};
use yew::prelude::*;

/// Key a value is stored under in `localStorage`.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault: Sized {
    fn local_or_default() -> Self;
}

impl<T: StorageKey + DeserializeOwned + Default> LocalOrDefault for T {
    fn local_or_default() -> Self {
        LocalStorage::get(T::KEY).unwrap_or_else(|err| {
            log::debug!("nothing usable under {}: {:?}", T::KEY, err);
            Default::default()
        })
    }
}

pub(crate) trait LocalSave {
    fn local_save(&self);
}

impl<T: StorageKey + Serialize> LocalSave for T {
    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(T::KEY, self) {
            log::error!("Could not save {} to local storage: {:?}", T::KEY, err);
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Helper component to attatch the contents into the document.body instead of in the place where it's used.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    let modal_host = gloo::utils::body();
    create_portal(props.children.clone(), modal_host.into())
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

const RECORD_DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Current wall-clock time in the browser's timezone, formatted for a score record.
pub(crate) fn record_timestamp() -> String {
    let now = js_sys::Date::new_0();
    let Some(utc) = DateTime::<Utc>::from_timestamp_millis(now.get_time() as i64) else {
        log::warn!("clock out of range: {}", now.get_time());
        return String::new();
    };
    // minutes *behind* UTC, positive west of Greenwich
    format_record_date(utc, (now.get_timezone_offset() * 60.0) as i32)
}

pub(crate) fn format_record_date(utc: DateTime<Utc>, west_secs: i32) -> String {
    match FixedOffset::west_opt(west_secs) {
        Some(offset) => utc.with_timezone(&offset).format(RECORD_DATE_FORMAT).to_string(),
        None => utc.format(RECORD_DATE_FORMAT).to_string(),
    }
}
