//! Salon selection and the salon-scoped home view.
//!
//! `/salons` lets a signed-in user pick the salon to work in; `/salon` is
//! only reachable with a selection and sends the user back here otherwise.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::salon::SalonSelection;

#[component]
pub fn SalonSelectionPage() -> impl IntoView {
    let selection = expect_context::<RwSignal<SalonSelection>>();
    let navigate = use_navigate();
    let draft = RwSignal::new(selection.with_untracked(|s| s.selected_salon_id.clone()).unwrap_or_default());
    let entered = RwSignal::new(false);

    Effect::new(move || {
        if entered.get() {
            navigate("/salon", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let accepted = selection.try_update(|s| s.select(&draft.get_untracked())).unwrap_or(false);
        if accepted {
            entered.set(true);
        }
    };

    view! {
        <div class="salon-page">
            <h1>"Choose a salon"</h1>
            <form class="salon-form" on:submit=on_submit>
                <input
                    class="salon-form__input"
                    type="text"
                    placeholder="Salon ID"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="salon-form__submit" type="submit" disabled=move || draft.with(|d| d.trim().is_empty())>
                    "Open salon"
                </button>
            </form>
            <Show when=move || selection.with(SalonSelection::is_selected)>
                <button class="salon-form__clear" type="button" on:click=move |_| selection.update(SalonSelection::clear)>
                    "Clear selection"
                </button>
            </Show>
        </div>
    }
}

/// Home view for the selected salon. Clearing the selection hands control
/// back to the salon guard, which redirects to `/salons`.
#[component]
pub fn SalonHomePage() -> impl IntoView {
    let selection = expect_context::<RwSignal<SalonSelection>>();
    let salon_id = move || selection.with(|s| s.selected_salon_id.clone().unwrap_or_default());

    view! {
        <div class="salon-page">
            <h1>"Salon " {salon_id}</h1>
            <a class="dashboard-link" href="/">
                "Back to dashboard"
            </a>
            <button class="salon-form__clear" type="button" on:click=move |_| selection.update(SalonSelection::clear)>
                "Switch salon"
            </button>
        </div>
    }
}
