use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    pub couple: AttrValue,
    pub date: AttrValue,
    pub venue: AttrValue,
    pub tagline: AttrValue,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <header class="hero" id="home">
            <h1 class="hero-names">{ props.couple.clone() }</h1>
            <p class="hero-date">{ format!("{} · {}", props.date, props.venue) }</p>
            <p class="hero-tagline">{ props.tagline.clone() }</p>
        </header>
    }
}
