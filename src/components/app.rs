use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, ErrorEvent, Event, HtmlImageElement, TouchEvent};
use yew::prelude::*;

use super::{
    about::About, details::Details, gallery::Gallery, hero::Hero, lightbox::Lightbox,
    music_control::MusicControl, tip_banner::TipBanner,
};
use crate::model::{LightboxImage, SiteContent};
use crate::observe::IntersectionWatcher;
use crate::state::{Swipe, TouchState};
use crate::util::{ScheduledTask, cerror, clog};

const REVEAL_SELECTORS: &str = ".gallery-item, .detail-item, .about-content p";
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_MARGIN: &str = "0px 0px -50px 0px";

fn observe_all(watcher: &IntersectionWatcher, document: &Document, selector: &str) {
    if let Ok(nodes) = document.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                watcher.observe(&el);
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let content = use_memo((), |_| {
        SiteContent::load().unwrap_or_else(|err| {
            cerror(&format!("site content failed to parse: {err}"));
            SiteContent::default()
        })
    });
    let lightbox = use_state(|| None::<LightboxImage>);
    let tip = use_state(|| None::<AttrValue>);

    // Page-ready marker, welcome banner, and the global handlers that live
    // for the whole session.
    {
        let couple = content.couple.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let document = window.document().expect("should have a document on window");

            clog(&format!("💕 Welcome to the wedding of {}! 💕", couple));
            clog("The page is ready, enjoy your visit!");
            clog("🎵 Tap the music button in the corner for some background music");

            let loaded_task = {
                let document = document.clone();
                ScheduledTask::once(100, move || {
                    if let Some(body) = document.body() {
                        let _ = body.class_list().add_1("loaded");
                    }
                })
            };

            // Uncaught page errors are logged, never surfaced to the visitor.
            let error_cb = Closure::wrap(Box::new(move |e: ErrorEvent| {
                cerror(&format!("page error: {}", e.message()));
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("error", error_cb.as_ref().unchecked_ref())
                .ok();

            // CSS animations stop while the tab is hidden.
            let anim_cb = {
                let document = document.clone();
                Closure::wrap(Box::new(move |_: Event| {
                    let state = if document.hidden() { "paused" } else { "running" };
                    if let Some(body) = document.body() {
                        let _ = body.style().set_property("animation-play-state", state);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            document
                .add_event_listener_with_callback(
                    "visibilitychange",
                    anim_cb.as_ref().unchecked_ref(),
                )
                .ok();

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "error",
                    error_cb.as_ref().unchecked_ref(),
                );
                let _ = document.remove_event_listener_with_callback(
                    "visibilitychange",
                    anim_cb.as_ref().unchecked_ref(),
                );
                drop(loaded_task);
            }
        });
    }

    // Reveal + lazy observers, attached after the first render so the
    // sections exist in the DOM.
    {
        use_effect_with((), move |_| {
            let document = web_sys::window()
                .expect("no global `window` exists")
                .document()
                .expect("should have a document on window");

            let reveal = IntersectionWatcher::new(
                REVEAL_THRESHOLD,
                Some(REVEAL_MARGIN),
                |target, _| {
                    // One-way transition; re-adding on later passes is a no-op.
                    let _ = target.class_list().add_1("fade-in");
                },
            )
            .ok();
            if let Some(watcher) = &reveal {
                observe_all(watcher, &document, REVEAL_SELECTORS);
            }

            let lazy = IntersectionWatcher::new(0.0, None, |target, observer| {
                if let Ok(img) = target.dyn_into::<HtmlImageElement>() {
                    img.set_src(&img.src());
                    let _ = img.class_list().remove_1("lazy");
                    observer.unobserve(&img);
                }
            })
            .ok();
            if let Some(watcher) = &lazy {
                observe_all(watcher, &document, "img.lazy");
            }

            move || {
                drop(reveal);
                drop(lazy);
            }
        });
    }

    // Document-wide swipe detection. Swipe-up is a capability callback; here
    // it scrolls back to the top of the page.
    {
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let document = window.document().expect("should have a document on window");
            let on_swipe_up = Callback::from(|_: ()| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            });

            let touch = Rc::new(RefCell::new(TouchState::default()));
            let start_cb = {
                let touch = touch.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(point) = e.touches().item(0) {
                        touch
                            .borrow_mut()
                            .begin(point.client_x() as f64, point.client_y() as f64);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let end_cb = {
                let touch = touch.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(point) = e.changed_touches().item(0) {
                        let swipe = touch
                            .borrow_mut()
                            .finish(point.client_x() as f64, point.client_y() as f64);
                        if swipe == Some(Swipe::Up) {
                            on_swipe_up.emit(());
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            document
                .add_event_listener_with_callback("touchstart", start_cb.as_ref().unchecked_ref())
                .ok();
            document
                .add_event_listener_with_callback("touchend", end_cb.as_ref().unchecked_ref())
                .ok();

            move || {
                let _ = document.remove_event_listener_with_callback(
                    "touchstart",
                    start_cb.as_ref().unchecked_ref(),
                );
                let _ = document.remove_event_listener_with_callback(
                    "touchend",
                    end_cb.as_ref().unchecked_ref(),
                );
                drop(start_cb);
                drop(end_cb);
            }
        });
    }

    let open_lightbox = {
        let lightbox = lightbox.clone();
        // A fresh trigger replaces whatever overlay is up: never more than one.
        Callback::from(move |image: LightboxImage| lightbox.set(Some(image)))
    };
    let close_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set(None))
    };
    let show_tip = {
        let tip = tip.clone();
        let text = content.music.autoplay_tip.clone();
        Callback::from(move |_| tip.set(Some(AttrValue::from(text.clone()))))
    };
    let dismiss_tip = {
        let tip = tip.clone();
        Callback::from(move |_| tip.set(None))
    };

    html! {
        <>
            <Hero
                couple={AttrValue::from(content.couple.clone())}
                date={AttrValue::from(content.date.clone())}
                venue={AttrValue::from(content.venue.clone())}
                tagline={AttrValue::from(content.tagline.clone())}
            />
            <Gallery images={content.gallery.clone()} on_select={open_lightbox} />
            <Details items={content.details.clone()} />
            <About paragraphs={content.about.clone()} />
            { if content.music.src.is_empty() { html! {} } else { html! {
                <MusicControl
                    src={AttrValue::from(content.music.src.clone())}
                    on_blocked={show_tip}
                />
            } } }
            { match (*lightbox).clone() {
                Some(image) => html! { <Lightbox image={image} on_close={close_lightbox} /> },
                None => html! {},
            } }
            { match (*tip).clone() {
                Some(message) => html! { <TipBanner message={message} on_dismiss={dismiss_tip} /> },
                None => html! {},
            } }
        </>
    }
}
