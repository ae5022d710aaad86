use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub label: AttrValue,
}

#[function_component]
pub fn LoadingIndicator(props: &Props) -> Html {
    html! {
        <div class="flex items-center justify-center py-12">
            <div
                class="animate-spin rounded-full h-8 w-8 border-2 \
                       border-gray-300 border-t-blue-600"
            ></div>
            <span class="ml-3 text-gray-500 dark:text-gray-400">
                {&props.label}
            </span>
        </div>
    }
}
