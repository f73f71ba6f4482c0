use yew::prelude::*;

use crate::util::ScheduledTask;

const DISMISS_MS: i32 = 3000;

#[derive(Properties, PartialEq, Clone)]
pub struct TipBannerProps {
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
}

/// Transient centered notice, removed automatically after 3 seconds. The
/// dismissal timer dies with the component, so an early unmount cannot fire
/// a stale callback.
#[function_component(TipBanner)]
pub fn tip_banner(props: &TipBannerProps) -> Html {
    let dismiss = use_mut_ref(|| None::<ScheduledTask>);

    {
        let dismiss = dismiss.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((), move |_| {
            *dismiss.borrow_mut() = ScheduledTask::once(DISMISS_MS, move || on_dismiss.emit(()));
            move || {
                dismiss.borrow_mut().take();
            }
        });
    }

    html! {
        <div
            class="music-tip"
            style="position:fixed; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0, 0, 0, 0.8); color:white; padding:1rem 2rem; border-radius:8px; z-index:2000; font-size:0.9rem; text-align:center;"
        >
            { props.message.clone() }
        </div>
    }
}
