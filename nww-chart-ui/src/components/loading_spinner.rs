//! Loading indicator.

use dioxus::prelude::*;

/// Shown while the dataset fetch is pending. A failed fetch also stays here.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "loading"
        }
    }
}
