use leptos::prelude::*;

use super::content::SOCIAL_LINKS;
use super::scroll::Reveal;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-4 bg-gray-950">
            <div class="container mx-auto max-w-4xl">
                <Reveal>
                    <h2 class="text-4xl md:text-5xl font-bold text-center mb-16 bg-gradient-to-r from-cyan-400 to-purple-500 text-transparent bg-clip-text">
                        "Get in Touch"
                    </h2>
                </Reveal>
                <Reveal delay_ms=100>
                    <div class="text-center mb-12">
                        <p class="text-gray-400 text-lg mb-8">
                            "Feel free to reach out for collaborations or just a friendly hello"
                        </p>
                        <div class="flex justify-center space-x-6">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="text-3xl text-gray-400 hover:text-cyan-400 hover:scale-125 transition-all duration-200"
                                        >
                                            <i class=link.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::prelude::*;

    use super::*;

    #[test]
    fn renders_every_social_link_with_accessible_label() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Contact /> }.to_html());

        for link in SOCIAL_LINKS {
            assert!(
                html.contains(&format!("href=\"{}\"", link.href)),
                "missing href {}",
                link.href
            );
            assert!(
                html.contains(&format!("aria-label=\"{}\"", link.label)),
                "missing label {}",
                link.label
            );
            assert!(html.contains(link.icon));
        }
    }

    #[test]
    fn link_count_matches_content() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Contact /> }.to_html());
        assert_eq!(
            html.matches("aria-label=").count(),
            SOCIAL_LINKS.len()
        );
    }
}
