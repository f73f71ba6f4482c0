use crate::model::DetailItem;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DetailsProps {
    pub items: Vec<DetailItem>,
}

#[function_component(Details)]
pub fn details(props: &DetailsProps) -> Html {
    html! {
        <section class="details" id="details">
            <h2>{"The Day"}</h2>
            <div class="details-grid">
                { for props.items.iter().map(|item| html! {
                    <div class="detail-item">
                        <h3>{ item.title.clone() }</h3>
                        <span class="detail-time">{ item.time.clone() }</span>
                        <p>{ item.text.clone() }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
