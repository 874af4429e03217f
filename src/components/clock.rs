use chrono::Local;
use dioxus::prelude::*;

use crate::config::CLOCK_TICK_MS;
use crate::hooks::use_interval;
use crate::utils::format::{format_long_date, format_time};

#[allow(non_snake_case)]
#[component]
pub fn Clock() -> Element {
    let mut now = use_signal(Local::now);
    use_interval(CLOCK_TICK_MS, move || now.set(Local::now()));

    let time = now.read();
    rsx! {
        div { class: "text-center",
            div { class: "text-5xl font-light text-white tracking-tight", "{format_time(&*time)}" }
            div { class: "text-lg text-slate-400 mt-1", "{format_long_date(&*time)}" }
        }
    }
}
