use crate::model::{GalleryImage, LightboxImage};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryProps {
    pub images: Vec<GalleryImage>,
    pub on_select: Callback<LightboxImage>,
}

/// Photo grid. Images start with the `lazy` marker (cleared by the lazy
/// loader once they near the viewport) and open the lightbox on click.
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    html! {
        <section class="gallery" id="gallery">
            <h2>{"Our Moments"}</h2>
            <div class="gallery-grid">
                { for props.images.iter().map(|image| {
                    let chosen = LightboxImage {
                        src: AttrValue::from(image.src.clone()),
                        alt: AttrValue::from(image.alt.clone()),
                    };
                    let on_select = props.on_select.clone();
                    let open = Callback::from(move |_: MouseEvent| on_select.emit(chosen.clone()));
                    html! {
                        <div class="gallery-item">
                            <img
                                src={image.src.clone()}
                                alt={image.alt.clone()}
                                class="lazy"
                                loading="lazy"
                                onclick={open}
                            />
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
