use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AboutProps {
    pub paragraphs: Vec<String>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <section class="about" id="about">
            <h2>{"Our Story"}</h2>
            <div class="about-content">
                { for props.paragraphs.iter().map(|text| html! { <p>{ text.clone() }</p> }) }
            </div>
        </section>
    }
}
