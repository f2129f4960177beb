use leptos::prelude::*;
use securebank_core::button::{button_class, ButtonSize, ButtonVariant};

/// Clickable element styled by variant and size; `class` is merged last so
/// callers can override the recipe
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let classes = button_class(variant, size, &class);

    view! {
        <button
            type="button"
            class=classes
            data-variant=variant.as_str()
            data-size=size.as_str()
        >
            {children()}
        </button>
    }
}
