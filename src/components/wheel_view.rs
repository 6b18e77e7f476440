use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::planet_slot::PlanetSlot;
use crate::model::{sprite_for, CATALOG};
use crate::state::{SlotTransform, WheelAction, WheelInput, WheelState};

#[derive(Properties, PartialEq, Clone)]
pub struct WheelViewProps {
    pub wheel: UseReducerHandle<WheelState>,
}

#[function_component(WheelView)]
pub fn wheel_view(props: &WheelViewProps) -> Html {
    // Transitions stay off for the first frame so the initial layout does not animate in.
    let animate = use_state(|| false);
    {
        let animate = animate.clone();
        let wheel = props.wheel.clone();
        use_effect_with((), move |_| {
            match web_sys::window() {
                Some(win) => {
                    let enable = animate.clone();
                    let relayout = wheel.clone();
                    let cb: js_sys::Function = Closure::once_into_js(move || {
                        enable.set(true);
                        relayout.dispatch(WheelAction::Relayout);
                    })
                    .unchecked_into();
                    if win.request_animation_frame(&cb).is_err() {
                        log::warn!("requestAnimationFrame failed; enabling transitions now");
                        animate.set(true);
                    }
                }
                None => animate.set(true),
            }
            || ()
        });
    }

    // Arrow keys rotate the wheel
    {
        let wheel = props.wheel.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let keydown_cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                if let Some(input) = WheelInput::from_key(&e.key()) {
                    wheel.dispatch(WheelAction::Input(input));
                }
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                if win
                    .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::error!("could not attach keydown listener");
                }
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(keydown_cb);
            }
        });
    }

    let state = &*props.wheel;
    let radius = state.config.radius_px;
    let transition = if *animate {
        format!("transition: transform {}ms ease;", state.config.transition_ms)
    } else {
        "transition: none;".to_string()
    };

    let slots = CATALOG
        .iter()
        .zip(state.poses.iter())
        .enumerate()
        .map(|(i, (body, pose))| {
            let sprite = sprite_for(body.name).unwrap_or_else(|| {
                log::error!("no sprite registered for {}", body.name);
                ""
            });
            let on_select = {
                let wheel = props.wheel.clone();
                Callback::from(move |()| wheel.dispatch(WheelAction::Input(WheelInput::Select(i))))
            };
            html! {
                <PlanetSlot
                    key={body.name}
                    name={body.name}
                    sprite={sprite}
                    transform={SlotTransform::from_pose(pose, radius).css()}
                    transition={transition.clone()}
                    selected={pose.selected}
                    on_select={on_select}
                />
            }
        })
        .collect::<Html>();

    html! { <div id="planets" class="wheel">{ slots }</div> }
}
