//! Account-creation panel.
//!
//! After a successful sign-up the result message stays up for the configured
//! delay, then the panel either enters the app (session already live) or
//! hands over to the sign-in panel.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_feedback::{FieldError, ResultLine};
use crate::state::mode::ModeRouter;
use crate::state::register_form::{RegisterField, RegisterForm, RegisterInput};
#[cfg(feature = "hydrate")]
use crate::{config::ClientConfig, state::session::SessionStore, util::auth::PendingRedirect};

#[component]
pub fn RegisterPanel(router: ModeRouter) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let (config, session, pending) = (
        expect_context::<ClientConfig>(),
        expect_context::<SessionStore>(),
        expect_context::<RwSignal<PendingRedirect>>(),
    );
    // Only the browser build submits.
    #[cfg(not(feature = "hydrate"))]
    let _ = router;
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let leave_to = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(target) = leave_to.get() {
            navigate(&target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(RegisterForm::is_submitting) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::state::form::SubmitOutcome;
            use crate::state::mode::AuthMode;
            use crate::state::register_form::AfterRegister;

            let session = session.clone();
            let router = router.clone();
            let delay = std::time::Duration::from_millis(config.register_redirect_ms);
            leptos::task::spawn_local(async move {
                match crate::state::register_form::submit_register(&form, &session).await {
                    SubmitOutcome::Succeeded => {}
                    SubmitOutcome::Blocked => {
                        leptos::logging::log!("sign-up not sent: form invalid or busy");
                        return;
                    }
                    SubmitOutcome::Failed | SubmitOutcome::Detached => return,
                }
                gloo_timers::future::sleep(delay).await;
                // The panel may have been left while the message was showing.
                match form.try_with_untracked(|f| f.next).flatten() {
                    Some(AfterRegister::EnterApp) => {
                        leave_to.try_set(Some(crate::util::auth::take_post_login_target(pending)));
                    }
                    Some(AfterRegister::SignIn) => router.navigate(AuthMode::Login),
                    None => {}
                }
            });
        }
    };

    let error_for =
        move |field: RegisterField| Signal::derive(move || form.with(|f| f.errors.get(&field).copied()));
    let busy = move || form.with(RegisterForm::is_submitting);

    view! {
        <form class="auth-form" on:submit=on_submit novalidate=true>
            <label class="auth-form__label">
                "Email"
                <input
                    class="auth-form__input"
                    type="email"
                    autocomplete="email"
                    prop:value=move || form.with(|f| f.fields.email.clone())
                    on:input=move |ev| form.update(|f| f.apply(RegisterInput::Email(event_target_value(&ev))))
                />
            </label>
            <FieldError message=error_for(RegisterField::Email)/>
            <label class="auth-form__label">
                "Display name"
                <input
                    class="auth-form__input"
                    type="text"
                    autocomplete="nickname"
                    prop:value=move || form.with(|f| f.fields.display_name.clone())
                    on:input=move |ev| form.update(|f| f.apply(RegisterInput::DisplayName(event_target_value(&ev))))
                />
            </label>
            <FieldError message=error_for(RegisterField::DisplayName)/>
            <label class="auth-form__label">
                "Password"
                <input
                    class="auth-form__input"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.fields.password.clone())
                    on:input=move |ev| form.update(|f| f.apply(RegisterInput::Password(event_target_value(&ev))))
                />
            </label>
            <FieldError message=error_for(RegisterField::Password)/>
            <label class="auth-form__label">
                "Confirm password"
                <input
                    class="auth-form__input"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.fields.confirm_password.clone())
                    on:input=move |ev| {
                        form.update(|f| f.apply(RegisterInput::ConfirmPassword(event_target_value(&ev))));
                    }
                />
            </label>
            <FieldError message=error_for(RegisterField::ConfirmPassword)/>
            <button class="auth-form__submit" type="submit" disabled=busy>
                {move || if busy() { "Creating account..." } else { "Create account" }}
            </button>
            <ResultLine result=Signal::derive(move || form.with(|f| f.result.clone()))/>
        </form>
    }
}
