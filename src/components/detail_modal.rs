use yew::prelude::*;

use crate::links::open_external;
use crate::models::catalog::{format_last_updated, CatalogEntry};

#[derive(Properties, PartialEq)]
pub struct DetailModalProps {
    pub entry: CatalogEntry,
    pub action_label: &'static str,
    pub on_close: Callback<()>,
}

#[function_component(DetailModal)]
pub fn detail_modal(props: &DetailModalProps) -> Html {
    let DetailModalProps { entry, action_label, on_close } = props;

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the dialog must not reach the backdrop
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_action = {
        let link = entry.link.clone();
        Callback::from(move |_: MouseEvent| open_external(&link))
    };

    let info = &entry.detailed_info;

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-dialog" onclick={keep_open}>
                <button class="modal-close" onclick={close}>{"×"}</button>
                <img src={entry.image_url.clone()} alt={entry.name.clone()} class="modal-image" />
                <h2>{entry.name.clone()}</h2>
                <span class="entry-kind">{entry.kind.clone()}</span>
                <p class="modal-description">{entry.description.clone()}</p>
                <h4>{"Features"}</h4>
                <ul class="modal-features">
                    { for info.features.iter().map(|feature| html! { <li>{feature.clone()}</li> }) }
                </ul>
                <dl class="modal-info">
                    <dt>{"Validity"}</dt>
                    <dd>{info.validity.clone()}</dd>
                    <dt>{"Last updated"}</dt>
                    <dd>{format_last_updated(&info.last_updated)}</dd>
                    <dt>{"Region"}</dt>
                    <dd>{info.region.clone()}</dd>
                </dl>
                <button class="primary-button" onclick={on_action}>{*action_label}</button>
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                }
                .modal-dialog {
                    position: relative;
                    background: #1a1a1a;
                    color: #fff;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 16px;
                    padding: 2rem;
                    width: min(560px, 92vw);
                    max-height: 88vh;
                    overflow-y: auto;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #999;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .modal-image {
                    width: 100%;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                }
                .modal-description {
                    color: #bbb;
                }
                .modal-features li {
                    margin-bottom: 0.25rem;
                }
                .modal-info {
                    display: grid;
                    grid-template-columns: max-content 1fr;
                    gap: 0.4rem 1rem;
                    margin: 1.5rem 0;
                }
                .modal-info dt {
                    color: #999;
                }
                .modal-info dd {
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}
