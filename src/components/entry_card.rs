use yew::prelude::*;

use crate::models::catalog::CatalogEntry;

#[derive(Properties, PartialEq)]
pub struct EntryCardProps {
    pub entry: CatalogEntry,
    pub on_select: Callback<String>,
}

#[function_component(EntryCard)]
pub fn entry_card(props: &EntryCardProps) -> Html {
    let entry = &props.entry;

    let onclick = {
        let on_select = props.on_select.clone();
        let id = entry.id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };

    html! {
        <div class="entry-card" {onclick}>
            <img src={entry.image_url.clone()} alt={entry.name.clone()} loading="lazy" class="entry-card-image" />
            <div class="entry-card-body">
                <span class="entry-kind">{entry.kind.clone()}</span>
                <h3>{entry.name.clone()}</h3>
                <p>{entry.description.clone()}</p>
                <span class="entry-validity">{entry.detailed_info.validity.clone()}</span>
            </div>
        </div>
    }
}
