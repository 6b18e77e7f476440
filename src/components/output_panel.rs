use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::error::{WeightError, WeightInputError};
use crate::model::compute_weight;
use crate::util::format_weight;

pub const INVALID_WEIGHT_MSG: &str = "Please enter a valid weight.";
pub const INTERNAL_ERROR_MSG: &str = "Something went wrong looking up that planet.";

/// Accepts finite numbers strictly above zero, surrounding whitespace allowed.
pub fn parse_weight(raw: &str) -> Result<f64, WeightInputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| WeightInputError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(WeightInputError::NotANumber(trimmed.to_string()));
    }
    if value <= 0.0 {
        return Err(WeightInputError::NotPositive(value));
    }
    Ok(value)
}

pub fn weight_message(raw: &str, body: &str) -> String {
    weight_message_with(raw, body, compute_weight)
}

// The calculator is only reached once the input has been validated.
fn weight_message_with<F>(raw: &str, body: &str, calc: F) -> String
where
    F: FnOnce(f64, &str) -> Result<f64, WeightError>,
{
    let weight = match parse_weight(raw) {
        Ok(w) => w,
        Err(e) => {
            log::info!("rejected weight input: {e}");
            return INVALID_WEIGHT_MSG.to_string();
        }
    };
    match calc(weight, body) {
        Ok(result) => format!(
            "If you were on {}, you would weigh {} lbs!",
            body,
            format_weight(result)
        ),
        Err(e) => {
            log::error!("selection out of sync with catalog: {e}");
            INTERNAL_ERROR_MSG.to_string()
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct OutputPanelProps {
    pub selected_name: &'static str,
}

#[function_component(OutputPanel)]
pub fn output_panel(props: &OutputPanelProps) -> Html {
    let input_ref = use_node_ref();
    let message = use_state(String::new);

    let onclick = {
        let input_ref = input_ref.clone();
        let message = message.clone();
        let body = props.selected_name;
        Callback::from(move |_| {
            let raw = input_ref
                .cast::<HtmlInputElement>()
                .map(|el| el.value())
                .unwrap_or_default();
            message.set(weight_message(&raw, body));
        })
    };

    html! {
        <div class="calculator">
            <input ref={input_ref} id="user-weight" type="text" placeholder="Your weight on Earth (lbs)" />
            <button id="calculate-button" {onclick}>{"Calculate"}</button>
            <div id="output">{ (*message).clone() }</div>
        </div>
    }
}
