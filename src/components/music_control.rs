use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlAudioElement};
use yew::prelude::*;

use crate::util::{ScheduledTask, clog, on_rejected};

const AUTOPLAY_DELAY_MS: i32 = 1000;
const VOLUME: f64 = 0.3;

#[derive(Properties, PartialEq, Clone)]
pub struct MusicControlProps {
    pub src: AttrValue,
    /// Fired when a user-initiated play attempt is blocked by the browser.
    /// Passive autoplay rejection stays silent.
    pub on_blocked: Callback<()>,
}

/// Background-music toggle. The audio element's own paused state is the
/// source of truth: the `playing` marker on the button follows the element's
/// play/pause/ended events rather than a separately tracked flag.
#[function_component(MusicControl)]
pub fn music_control(props: &MusicControlProps) -> Html {
    let audio_ref = use_node_ref();
    let is_playing = use_state(|| false);
    let failed = use_state(|| false);
    // Set when the tab going hidden interrupted playback; playback resumes
    // once the tab is visible again.
    let resume_intent = use_mut_ref(|| false);
    let autoplay = use_mut_ref(|| None::<ScheduledTask>);

    // Volume + one delayed autoplay attempt after mount. A rejection here is
    // expected browser behavior, logged without bothering the visitor.
    {
        let audio_ref = audio_ref.clone();
        let autoplay = autoplay.clone();
        use_effect_with((), move |_| {
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                audio.set_volume(VOLUME);
                let player = audio.clone();
                *autoplay.borrow_mut() = ScheduledTask::once(AUTOPLAY_DELAY_MS, move || {
                    match player.play() {
                        Ok(promise) => on_rejected(promise, |_| {
                            clog("autoplay was blocked; music starts on the first tap");
                        }),
                        Err(_) => clog("autoplay attempt could not start"),
                    }
                });
            }
            move || {
                autoplay.borrow_mut().take();
            }
        });
    }

    // Pause while the tab is hidden, resume when it returns.
    {
        let audio_ref = audio_ref.clone();
        let resume_intent = resume_intent.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window()
                .expect("no global `window` exists")
                .document()
                .expect("should have a document on window");
            let vis_cb = {
                let document = document.clone();
                Closure::wrap(Box::new(move |_: Event| {
                    let Some(audio) = audio_ref.cast::<HtmlAudioElement>() else {
                        return;
                    };
                    if document.hidden() {
                        if !audio.paused() {
                            *resume_intent.borrow_mut() = true;
                            let _ = audio.pause();
                        }
                    } else if std::mem::take(&mut *resume_intent.borrow_mut()) {
                        match audio.play() {
                            Ok(promise) => on_rejected(promise, |_| {
                                clog("could not resume the music after returning to the page");
                            }),
                            Err(_) => clog("could not resume the music after returning to the page"),
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            document
                .add_event_listener_with_callback(
                    "visibilitychange",
                    vis_cb.as_ref().unchecked_ref(),
                )
                .ok();
            move || {
                let _ = document.remove_event_listener_with_callback(
                    "visibilitychange",
                    vis_cb.as_ref().unchecked_ref(),
                );
                drop(vis_cb);
            }
        });
    }

    let toggle = {
        let audio_ref = audio_ref.clone();
        let on_blocked = props.on_blocked.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(audio) = audio_ref.cast::<HtmlAudioElement>() else {
                return;
            };
            if audio.paused() {
                let on_blocked = on_blocked.clone();
                match audio.play() {
                    Ok(promise) => on_rejected(promise, move |_| {
                        clog("music playback failed; the browser likely blocked it");
                        on_blocked.emit(());
                    }),
                    Err(_) => on_blocked.emit(()),
                }
            } else {
                let _ = audio.pause();
            }
        })
    };

    let onplay = {
        let is_playing = is_playing.clone();
        Callback::from(move |_: Event| is_playing.set(true))
    };
    let onpause = {
        let is_playing = is_playing.clone();
        Callback::from(move |_: Event| is_playing.set(false))
    };
    let onended = {
        let is_playing = is_playing.clone();
        Callback::from(move |_: Event| is_playing.set(false))
    };
    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| {
            clog("background track failed to load; hiding the music control");
            failed.set(true);
        })
    };

    html! {
        <>
            <audio
                ref={audio_ref}
                id="background-music"
                src={props.src.clone()}
                preload="auto"
                {onplay}
                {onpause}
                {onended}
                {onerror}
            />
            // Load failure is terminal: the control never comes back.
            { if *failed { html! {} } else { html! {
                <button
                    id="music-toggle"
                    class={classes!("music-toggle", (*is_playing).then_some("playing"))}
                    aria-label="Toggle background music"
                    onclick={toggle}
                >{"♪"}</button>
            } } }
        </>
    }
}
