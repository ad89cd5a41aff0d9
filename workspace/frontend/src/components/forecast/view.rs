use client::{ForecastForm, SubmitOutcome, Trigger};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::result_card::ResultCard;
use crate::api_client::forecast_client;
use crate::common::error::ErrorMessage;

/// Ad spend form with its loading, error and result regions.
#[function_component(ForecastPage)]
pub fn forecast_page() -> Html {
    let form = use_mut_ref(ForecastForm::new);
    let client = use_memo((), |_| forecast_client());
    let redraw = use_force_update();

    // A response arriving after the page is gone must not touch the form
    {
        let form = form.clone();
        use_effect_with((), move |_| {
            move || {
                if form.borrow_mut().cancel().is_some() {
                    log::debug!("Forecast page unmounted with a request in flight");
                }
            }
        });
    }

    let submit = {
        let form = form.clone();
        let client = client.clone();
        let redraw = redraw.clone();

        Callback::from(move |trigger: Trigger| {
            let outcome = form.borrow_mut().submit(trigger);
            redraw.force_update();

            let pending = match outcome {
                SubmitOutcome::Dispatched(pending) => pending,
                other => {
                    log::debug!("Submit via {:?} produced {:?}", trigger, other);
                    return;
                }
            };

            let form = form.clone();
            let client = client.clone();
            let redraw = redraw.clone();
            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Requesting forecast for ad spend {}", pending.ad_spend());
                let outcome = client.submit_forecast(pending.ad_spend()).await;
                match &outcome {
                    Ok(result) => log::info!("Forecast received: {:?}", result),
                    Err(e) => log::debug!("Forecast request ended with: {}", e),
                }
                if form.borrow_mut().complete(pending.ticket(), outcome) {
                    redraw.force_update();
                }
            });
        })
    };

    let on_input = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow_mut().set_input(input.value());
            redraw.force_update();
        })
    };

    let on_keypress = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(trigger) = Trigger::from_key(&e.key()) {
                e.prevent_default();
                submit.emit(trigger);
            }
        })
    };

    let on_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(Trigger::Button))
    };

    let view = form.borrow().view();

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 app-container">
            <div class="card w-full max-w-lg bg-base-100 shadow-xl app-content">
                <div class="card-body">
                    <h1 class="text-3xl font-bold">{"Sales Revenue Forecaster"}</h1>

                    <div class="form-control mt-4 input-section">
                        <label class="label" for="ad-spend">
                            <span class="label-text">{"Ad Spend ($)"}</span>
                        </label>
                        <input
                            id="ad-spend"
                            type="number"
                            class="input input-bordered w-full"
                            value={view.input.clone()}
                            oninput={on_input}
                            onkeypress={on_keypress}
                            placeholder="Enter ad spend amount"
                            min="0"
                            step="0.01"
                            disabled={view.busy}
                        />
                        <button
                            class="btn btn-primary mt-4 forecast-button"
                            onclick={on_click}
                            disabled={view.busy}
                        >
                            {if view.busy {
                                html! { <span class="loading loading-spinner loading-sm"></span> }
                            } else {
                                html! {}
                            }}
                            {view.submit_label}
                        </button>
                    </div>

                    {if let Some(message) = view.error.clone() {
                        html! { <ErrorMessage {message} /> }
                    } else {
                        html! {}
                    }}

                    {if let Some(result) = view.result.clone() {
                        html! { <ResultCard {result} /> }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
        </div>
    }
}
