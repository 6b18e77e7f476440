use super::{output_panel::OutputPanel, wheel_view::WheelView};
use crate::config::WheelConfig;
use crate::model::CATALOG;
use crate::state::WheelState;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Initial pass at index 0 so the first render already has poses
    let wheel = use_reducer(|| WheelState::new(CATALOG.len(), WheelConfig::load()).layout());
    let selected_name = CATALOG[wheel.selected].name;

    html! {
        <main class="app">
            <h1>{"How much would you weigh?"}</h1>
            <p class="hint">{"Use the arrow keys or click a planet to pick where you are."}</p>
            <WheelView wheel={wheel.clone()} />
            <OutputPanel {selected_name} />
        </main>
    }
}
