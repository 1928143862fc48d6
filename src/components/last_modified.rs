use crate::utils::delay;
use crate::utils::time::{ humanize_date_difference_localized, Locale };
use crate::debug_eprint;
use chrono::Utc;
use dioxus::prelude::*;

/// Seconds between refreshes of the rendered phrase
const REFRESH_INTERVAL_SECS: u64 = 60;

#[derive(Props, Clone, PartialEq)]
pub struct LastModifiedProps {
    /// Date-like string of the last modification
    pub date: String,
    #[props(default)]
    pub locale: Locale,
    #[props(default = "text-sm text-base-content/70")]
    pub class: &'static str,
}

#[component]
pub fn LastModified(props: LastModifiedProps) -> Element {
    // Bumped periodically so the phrase keeps up with the wall clock
    let mut tick = use_signal(|| 0u64);

    use_effect(move || {
        spawn(async move {
            loop {
                delay::Delay::secs(REFRESH_INTERVAL_SECS).await;
                tick += 1;
            }
        });
    });

    let _ = tick();
    match humanize_date_difference_localized(&props.date, Utc::now(), props.locale) {
        Ok(text) =>
            rsx! {
              span { class: "{props.class}", "{text}" }
            },
        Err(e) => {
            debug_eprint!("⚠️ Cannot humanize last modified date: {}", e);
            rsx! {}
        }
    }
}
