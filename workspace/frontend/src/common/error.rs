use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub message: String,
}

/// Inline error region below the input.
#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="alert alert-error error-message mt-4" role="alert">
            <i class="fas fa-exclamation-circle"></i>
            <span>{&props.message}</span>
        </div>
    }
}
