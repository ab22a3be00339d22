//! Sign-in panel: credential form, remember-me and social providers.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_feedback::{FieldError, ResultLine};
use crate::config::ClientConfig;
use crate::state::login_form::{LoginField, LoginForm, LoginInput};
#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;
#[cfg(feature = "hydrate")]
use crate::util::auth::PendingRedirect;
use crate::util::auth::{SOCIAL_PROVIDERS, social_login_url};
use crate::util::ui_persistence;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    #[cfg(feature = "hydrate")]
    let session = expect_context::<SessionStore>();
    #[cfg(feature = "hydrate")]
    let pending = expect_context::<RwSignal<PendingRedirect>>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::with_remembered(
        config.strict_login_password,
        ui_persistence::load_remembered_identifier(),
    ));
    let leave_to = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(target) = leave_to.get() {
            navigate(&target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(LoginForm::is_submitting) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::state::form::SubmitOutcome;

            let session = session.clone();
            leptos::task::spawn_local(async move {
                match crate::state::login_form::submit_login(&form, &session).await {
                    SubmitOutcome::Succeeded => {
                        let remembered = form.try_with_untracked(|f| f.fields.remembered_identifier()).flatten();
                        ui_persistence::store_remembered_identifier(remembered.as_deref());
                        leave_to.try_set(Some(crate::util::auth::take_post_login_target(pending)));
                    }
                    SubmitOutcome::Blocked => leptos::logging::log!("sign-in not sent: form invalid or busy"),
                    SubmitOutcome::Failed | SubmitOutcome::Detached => {}
                }
            });
        }
    };

    let error_for = move |field: LoginField| Signal::derive(move || form.with(|f| f.errors.get(&field).copied()));
    let busy = move || form.with(LoginForm::is_submitting);
    let api_origin = config.api_origin().to_owned();

    view! {
        <form class="auth-form" on:submit=on_submit novalidate=true>
            <label class="auth-form__label">
                "Email or username"
                <input
                    class="auth-form__input"
                    type="text"
                    autocomplete="username"
                    prop:value=move || form.with(|f| f.fields.identifier.clone())
                    on:input=move |ev| form.update(|f| f.apply(LoginInput::Identifier(event_target_value(&ev))))
                />
            </label>
            <FieldError message=error_for(LoginField::Identifier)/>
            <label class="auth-form__label">
                "Password"
                <input
                    class="auth-form__input"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || form.with(|f| f.fields.password.clone())
                    on:input=move |ev| form.update(|f| f.apply(LoginInput::Password(event_target_value(&ev))))
                />
            </label>
            <FieldError message=error_for(LoginField::Password)/>
            <label class="auth-form__check">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.fields.remember)
                    on:change=move |ev| {
                        let remember = event_target_checked(&ev);
                        form.update(|f| f.apply(LoginInput::Remember(remember)));
                        if !remember {
                            ui_persistence::store_remembered_identifier(None);
                        }
                    }
                />
                "Remember me"
            </label>
            <button class="auth-form__submit" type="submit" disabled=busy>
                {move || if busy() { "Signing in..." } else { "Sign in" }}
            </button>
            <ResultLine result=Signal::derive(move || form.with(|f| f.result.clone()))/>
        </form>
        <div class="auth-social">
            {SOCIAL_PROVIDERS
                .into_iter()
                .map(|provider| {
                    view! {
                        <a class="auth-social__button" href=social_login_url(&api_origin, provider)>
                            {format!("Continue with {}", provider.label())}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
