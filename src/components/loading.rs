use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingPlaceholderProps {
    #[prop_or(String::from("Loading..."))]
    pub message: String,
}

#[function_component(LoadingPlaceholder)]
pub fn loading_placeholder(props: &LoadingPlaceholderProps) -> Html {
    html! {
        <div class="loading-placeholder">
            <div class="loading-spinner"></div>
            <p>{props.message.clone()}</p>
            <style>
                {r#"
                .loading-placeholder {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 240px;
                    color: #999;
                }
                .loading-spinner {
                    width: 40px;
                    height: 40px;
                    border: 3px solid rgba(30, 144, 255, 0.2);
                    border-top-color: #1E90FF;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                    margin-bottom: 1rem;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </div>
    }
}
