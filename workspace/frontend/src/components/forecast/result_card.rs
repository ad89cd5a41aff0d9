use client::ResultView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub result: ResultView,
}

#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow mt-6 result-card">
            <div class="card-body">
                <h2 class="card-title">{"Forecast Results"}</h2>
                <div class="stats stats-vertical md:stats-horizontal">
                    <div class="stat">
                        <div class="stat-title">{"Predicted Revenue:"}</div>
                        <div class="stat-value text-primary">{&props.result.predicted_revenue}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Confidence Score:"}</div>
                        <div class="stat-value text-success confidence">{&props.result.confidence_score}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
