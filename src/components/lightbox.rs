use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::model::LightboxImage;
use crate::util::ScheduledTask;

const FADE_MS: i32 = 300;

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxProps {
    pub image: LightboxImage,
    pub on_close: Callback<()>,
}

/// Full-screen overlay with an enlarged copy of a gallery image. Fades in one
/// tick after insertion, fades out for 300ms before asking the owner to
/// detach it. Close paths: the × control, a backdrop click, or Escape.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let visible = use_state(|| false);
    let fade_in = use_mut_ref(|| None::<ScheduledTask>);
    let detach = use_mut_ref(|| None::<ScheduledTask>);

    // Opacity flips on the tick after mount so the CSS transition runs.
    {
        let visible = visible.clone();
        let fade_in = fade_in.clone();
        use_effect_with((), move |_| {
            let handle = visible.clone();
            *fade_in.borrow_mut() = ScheduledTask::once(10, move || handle.set(true));
            move || {
                fade_in.borrow_mut().take();
            }
        });
    }

    let begin_close = {
        let visible = visible.clone();
        let detach = detach.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            // A close is already scheduled; let it finish.
            if detach.borrow().is_some() {
                return;
            }
            visible.set(false);
            let on_close = on_close.clone();
            *detach.borrow_mut() = ScheduledTask::once(FADE_MS, move || on_close.emit(()));
        })
    };

    // Escape closes. Registered per overlay and removed with it.
    {
        let begin_close = begin_close.clone();
        let detach = detach.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window()
                .expect("no global `window` exists")
                .document()
                .expect("should have a document on window");
            let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    begin_close.emit(());
                }
            }) as Box<dyn FnMut(_)>);
            document
                .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                .ok();
            move || {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    key_cb.as_ref().unchecked_ref(),
                );
                drop(key_cb);
                detach.borrow_mut().take();
            }
        });
    }

    let backdrop_close = {
        let begin_close = begin_close.clone();
        Callback::from(move |_: MouseEvent| begin_close.emit(()))
    };
    let control_close = {
        let begin_close = begin_close.clone();
        Callback::from(move |_: MouseEvent| begin_close.emit(()))
    };
    // Clicks on the enlarged content must not reach the backdrop handler.
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    let overlay_style = format!(
        "position:fixed; top:0; left:0; width:100%; height:100%; background:rgba(0, 0, 0, 0.9); z-index:2000; display:flex; justify-content:center; align-items:center; opacity:{}; transition:opacity 0.3s ease;",
        if *visible { "1" } else { "0" }
    );

    html! {
        <div class="image-modal" style={overlay_style} onclick={backdrop_close}>
            <div
                class="modal-content"
                style="position:relative; max-width:90%; max-height:90%; text-align:center;"
                onclick={swallow}
            >
                <span
                    class="modal-close"
                    style="position:absolute; top:-40px; right:0; color:white; font-size:30px; cursor:pointer; z-index:2001;"
                    onclick={control_close}
                >{"×"}</span>
                <img
                    src={props.image.src.clone()}
                    alt={props.image.alt.clone()}
                    style="max-width:100%; max-height:100%; border-radius:10px; box-shadow:0 10px 30px rgba(0, 0, 0, 0.5);"
                />
            </div>
        </div>
    }
}
