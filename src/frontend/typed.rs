use gloo::timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::{dom, Page};
use crate::{
    logging::LogLevel,
    typer::{Typewriter, PHRASES},
};

const TYPED_TEXT_ID: &str = "typedText";

#[derive(Properties, PartialEq)]
struct TypedTextProps {
    start_delay_ms: u32,
    animate: bool,
}

fn schedule_tick(mut typer: Typewriter, text: UseStateHandle<AttrValue>, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let frame = typer.tick();
        text.set(AttrValue::from(frame.text));
        schedule_tick(typer, text, frame.delay_ms);
    })
    .forget();
}

#[function_component(TypedText)]
fn typed_text(props: &TypedTextProps) -> Html {
    let animate = props.animate;
    let text = use_state(move || {
        match Typewriter::new(PHRASES) {
            Some(typer) if !animate => AttrValue::from(typer.resting_text()),
            _ => AttrValue::default(),
        }
    });

    {
        let text = text.clone();
        use_effect_with((props.start_delay_ms, props.animate), move |&(delay_ms, animate)| {
            if animate {
                if let Some(typer) = Typewriter::new(PHRASES) {
                    schedule_tick(typer, text, delay_ms);
                }
            }
            || ()
        });
    }

    html! { {(*text).clone()} }
}

pub fn mount(page: &Page) {
    let Some(host) = dom::by_id::<HtmlElement>(TYPED_TEXT_ID) else {
        page.log(LogLevel::Debug, "typer_skipped", serde_json::json!({ "reason": "missing_element" }));
        return;
    };

    host.set_text_content(None);
    yew::Renderer::<TypedText>::with_root_and_props(
        host.into(),
        TypedTextProps {
            start_delay_ms: page.config.typing_start_ms,
            animate: !page.motion.is_off(),
        },
    )
    .render();
}
