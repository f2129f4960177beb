use leptos::prelude::*;
use securebank_core::header::{
    ACTION_GROUP_CLASS, BADGE_CLASS, BAR_CLASS, BRAND_GLYPH, BRAND_GROUP_CLASS,
    BRAND_LABEL_CLASS, BRAND_NAME, GLYPH_CLASS, HELP_BUTTON_CLASS, HELP_BUTTON_VARIANT,
    HELP_LABEL, INNER_CLASS,
};

use crate::components::button::Button;

#[component]
pub fn BankHeader() -> impl IntoView {
    view! {
        <header class=BAR_CLASS>
            <div class=INNER_CLASS>
                <div class=BRAND_GROUP_CLASS>
                    <div class=BADGE_CLASS>
                        <span class=GLYPH_CLASS>{BRAND_GLYPH}</span>
                    </div>
                    <span class=BRAND_LABEL_CLASS>{BRAND_NAME}</span>
                </div>
                <div class=ACTION_GROUP_CLASS>
                    <Button variant=HELP_BUTTON_VARIANT class=HELP_BUTTON_CLASS>
                        {HELP_LABEL}
                    </Button>
                </div>
            </div>
        </header>
    }
}
