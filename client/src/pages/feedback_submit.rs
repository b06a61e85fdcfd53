//! Public passenger feedback form gated by a phone OTP.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached without signing in (e.g. from a QR code inside the bus). The
//! page drives `FeedbackFlow`: each button asks the flow for its one
//! request, sends it, and reports the outcome back to the flow.

use leptos::prelude::*;
use records::ApiRequest;
use records::feedback::{MAX_RATING, MIN_RATING, OTP_LENGTH};
use records::vehicle::Vehicle;

use crate::pages::list_actions;
use crate::state::feedback_flow::{FeedbackFlow, FeedbackStep};

/// Which call a flow request belongs to.
#[derive(Clone, Copy)]
enum Call {
    SendOtp,
    Verify,
    Submit,
}

fn send(flow: RwSignal<FeedbackFlow>, call: Call, request: Option<ApiRequest>) {
    let Some(request) = request else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api;
        let outcome = match call {
            Call::SendOtp => api::execute(request).await.map(|()| flow.update(FeedbackFlow::otp_sent)),
            Call::Verify => api::fetch::<records::feedback::OtpVerification>(request)
                .await
                .map(|result| flow.update(|f| f.verify_ok(&result))),
            Call::Submit => api::execute(request).await.map(|()| flow.update(FeedbackFlow::submit_ok)),
        };
        if let Err(e) = outcome {
            let banner = api::report("feedback", &e);
            flow.update(|f| f.failed(&banner));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (flow, call, request);
    }
}

#[component]
pub fn FeedbackSubmitPage() -> impl IntoView {
    let flow = RwSignal::new(FeedbackFlow::default());
    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    list_actions::load_into(vehicles, "load vehicles");

    let step = move || flow.with(|f| f.step);
    let busy = move || flow.with(|f| f.busy);

    let on_send_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        flow.update(|f| request = f.request_otp());
        send(flow, Call::SendOtp, request);
    };
    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        flow.update(|f| request = f.verify());
        send(flow, Call::Verify, request);
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        flow.update(|f| request = f.submit());
        send(flow, Call::Submit, request);
    };

    view! {
        <div class="login-page">
            <div class="login-card feedback-card">
                <h1>"Rate your ride"</h1>
                <Show when=move || matches!(step(), FeedbackStep::EnterPhone | FeedbackStep::AwaitingOtp)>
                    <form class="login-form" on:submit=on_send_otp>
                        <input
                            class="login-input"
                            type="tel"
                            placeholder="09171234567"
                            prop:value=move || flow.with(|f| f.phone_input.clone())
                            on:input=move |ev| flow.update(|f| f.phone_input = event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=busy>
                            {move || if step() == FeedbackStep::AwaitingOtp { "Resend code" } else { "Send code" }}
                        </button>
                    </form>
                </Show>
                <Show when=move || step() == FeedbackStep::AwaitingOtp>
                    <form class="login-form" on:submit=on_verify>
                        <input
                            class="login-input login-input--code"
                            type="text"
                            inputmode="numeric"
                            maxlength=OTP_LENGTH.to_string()
                            placeholder="123456"
                            prop:value=move || flow.with(|f| f.otp.clone())
                            on:input=move |ev| flow.update(|f| f.otp = event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=busy>
                            "Verify"
                        </button>
                    </form>
                </Show>
                <Show when=move || step() == FeedbackStep::Verified>
                    <form class="login-form" on:submit=on_submit>
                        <select
                            class="login-input"
                            on:change=move |ev| flow.update(|f| f.vehicle_id = event_target_value(&ev))
                        >
                            <option value="">"Select the bus you rode"</option>
                            {move || {
                                vehicles
                                    .with(|v| list_actions::vehicle_choices(v))
                                    .into_iter()
                                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                                    .collect_view()
                            }}
                        </select>
                        <div class="rating-picker">
                            {(MIN_RATING..=MAX_RATING)
                                .map(|value| {
                                    view! {
                                        <button
                                            type="button"
                                            class="rating-picker__star"
                                            class:rating-picker__star--on=move || flow.with(|f| f.rating >= value)
                                            on:click=move |_| flow.update(|f| f.rating = value)
                                        >
                                            "★"
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <textarea
                            class="login-input"
                            placeholder="Tell us about your trip (optional)"
                            prop:value=move || flow.with(|f| f.comment.clone())
                            on:input=move |ev| flow.update(|f| f.comment = event_target_value(&ev))
                        ></textarea>
                        <button class="login-button" type="submit" disabled=busy>
                            "Submit feedback"
                        </button>
                    </form>
                </Show>
                <Show when=move || step() == FeedbackStep::Submitted>
                    <button class="login-button" on:click=move |_| flow.update(FeedbackFlow::restart)>
                        "Send another"
                    </button>
                </Show>
                <Show when=move || flow.with(|f| f.message.is_some())>
                    <p class="login-message">{move || flow.with(|f| f.message.clone().unwrap_or_default())}</p>
                </Show>
            </div>
        </div>
    }
}
