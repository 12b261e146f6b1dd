use leptos::prelude::*;

use super::content::{SkillGroup, SKILL_GROUPS};
use super::scroll::Reveal;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4 bg-gray-900">
            <div class="container mx-auto">
                <Reveal>
                    <h2 class="text-4xl md:text-5xl font-bold text-center mb-16 bg-gradient-to-r from-cyan-400 to-purple-500 text-transparent bg-clip-text">
                        "Technical Skills"
                    </h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SKILL_GROUPS
                        .iter()
                        .enumerate()
                        .map(|(index, group)| {
                            view! { <SkillCard group delay_ms={index as u32 * 100} /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: &'static SkillGroup, delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal delay_ms>
            <div class="skill-card bg-gray-800 p-6 rounded-lg shadow-lg hover:shadow-cyan-500/20 transition-all duration-300">
                <h3 class="text-xl font-semibold mb-4 text-cyan-400">{group.category}</h3>
                <div class="flex flex-wrap gap-2">
                    {group
                        .items
                        .iter()
                        .map(|skill| {
                            view! {
                                <span class="px-3 py-1 bg-gray-600 rounded-full text-sm text-purple-300 hover:bg-purple-500 hover:text-white transition-colors duration-200">
                                    {*skill}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::prelude::*;

    use super::*;

    #[test]
    fn renders_one_card_per_group_with_all_items() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Skills /> }.to_html());

        assert_eq!(html.matches("skill-card").count(), SKILL_GROUPS.len());
        for group in SKILL_GROUPS {
            assert!(html.contains(group.category));
            for skill in group.items {
                assert!(html.contains(skill), "missing skill {skill}");
            }
        }
    }
}
