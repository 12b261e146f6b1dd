mod contact;
mod content;
mod header;
mod home;
mod projects;
mod scroll;
mod skills;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use header::Header;
use home::HomePage;
use scroll::{use_scroll_progress, ScrollProgressBar};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-gray-950 text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // The wrapper div is the scroll tracker's measuring target. Its height is
    // the full page content height, so the derived progress value is the one
    // page-wide scroll observable; consumers receive the signal, not a copy.
    let page_ref = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(page_ref);

    view! {
        // sets the document title
        <Title formatter=|title| format!("Umesh Chauhan - {title}") />
        <Meta name="description" content="Flutter Developer and Competitive Programmer" />

        <Router>
            <div node_ref=page_ref class="min-h-screen bg-gray-950 text-white">
                <ScrollProgressBar progress />
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    // Build year from the timestamp captured in build.rs
    let year = &env!("BUILD_TIME")[..4];

    view! {
        <footer class="py-8 bg-gray-950">
            <div class="container mx-auto px-4 text-center space-y-3">
                <p class="text-lg text-cyan-400">
                    "Made with " <span class="text-red-500">"❤️"</span> " by Umesh Chauhan"
                </p>
                <p class="text-sm text-gray-500">"© " {year} " Umesh Chauhan. All rights reserved."</p>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::prelude::*;

    use super::contact::Contact;
    use super::header::Header;
    use super::home::Hero;
    use super::projects::FeaturedProjects;
    use super::skills::Skills;
    use super::Footer;

    #[test]
    fn nav_anchors_resolve_to_section_ids() {
        let owner = Owner::new();
        let page = owner.with(|| {
            view! {
                <Hero />
                <FeaturedProjects />
                <Skills />
                <Contact />
            }
            .to_html()
        });
        let nav = owner.with(|| view! { <Header /> }.to_html());

        for fragment in ["home", "projects", "skills", "contact"] {
            assert!(
                nav.contains(&format!("href=\"#{fragment}\"")),
                "nav link missing for #{fragment}"
            );
            assert!(
                page.contains(&format!("id=\"{fragment}\"")),
                "section id missing for #{fragment}"
            );
        }
    }

    #[test]
    fn footer_year_comes_from_build_time() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Footer /> }.to_html());
        let year = &env!("BUILD_TIME")[..4];
        assert!(year.chars().all(|c| c.is_ascii_digit()));
        assert!(html.contains(year));
    }
}
