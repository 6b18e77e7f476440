use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlanetSlotProps {
    pub name: &'static str,
    pub sprite: &'static str,
    /// Full CSS transform computed by the layout engine.
    pub transform: String,
    pub transition: String,
    pub selected: bool,
    pub on_select: Callback<()>,
}

#[function_component(PlanetSlot)]
pub fn planet_slot(props: &PlanetSlotProps) -> Html {
    let onclick = {
        let cb = props.on_select.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div
            class={classes!("planet", props.selected.then_some("selected"))}
            style={format!("transform:{}; {}", props.transform, props.transition)}
            {onclick}
        >
            <img class="planet-sprite" src={props.sprite} alt={props.name} />
            <div>{ props.name }</div>
        </div>
    }
}
