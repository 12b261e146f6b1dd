use leptos::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("Projects", "#projects"),
    ("Skills", "#skills"),
    ("Contact", "#contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-40 bg-gray-950/90 backdrop-blur-md">
            <nav class="container mx-auto px-6 py-4">
                <ul class="flex justify-center space-x-8">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, anchor)| {
                            view! {
                                <li class="transition-transform duration-200 hover:scale-110 active:scale-95">
                                    <a
                                        href=*anchor
                                        class="text-gray-300 hover:text-cyan-400 transition-colors duration-300"
                                    >
                                        {*name}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
