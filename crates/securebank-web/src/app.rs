use leptos::prelude::*;
use securebank_core::page::{COPYRIGHT, COPYRIGHT_CLASS, FOOTER_CLASS, MAIN_CLASS, PAGE_CLASS};

use crate::components::header::BankHeader;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class=PAGE_CLASS>
            <BankHeader />
            <main class=MAIN_CLASS></main>
            <footer class=FOOTER_CLASS>
                <p class=COPYRIGHT_CLASS>{COPYRIGHT}</p>
            </footer>
        </div>
    }
}
