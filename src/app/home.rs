use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::Contact;
use super::projects::FeaturedProjects;
use super::scroll::Reveal;
use super::skills::Skills;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <FeaturedProjects />
        <Skills />
        <Contact />
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative px-4 bg-gray-900"
        >
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-br from-cyan-500/20 to-purple-500/20"></div>
                <div class="absolute inset-0 bg-[url('/grid.svg')] opacity-20"></div>
            </div>
            <div class="text-center z-10 max-w-3xl">
                <Reveal>
                    <h1 class="text-6xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-cyan-400 to-purple-500 text-transparent bg-clip-text">
                        "Umesh Chauhan"
                    </h1>
                </Reveal>
                <Reveal delay_ms=200>
                    <p class="text-xl md:text-2xl text-gray-300 mb-8">
                        "Flutter Developer | Competitive Programmer | Tech Enthusiast"
                    </p>
                </Reveal>
                <Reveal delay_ms=400>
                    <div class="flex justify-center space-x-4">
                        <a
                            href="#projects"
                            class="px-8 py-3 rounded-full bg-cyan-500 text-white font-semibold hover:bg-cyan-600 transition-colors"
                        >
                            "View Projects"
                        </a>
                        <a
                            href="#contact"
                            class="px-8 py-3 rounded-full bg-purple-500 text-white font-semibold hover:bg-purple-600 transition-colors"
                        >
                            "Get in Touch"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
