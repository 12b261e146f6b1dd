use leptos::prelude::*;

use super::content::{Project, PROJECTS};
use super::scroll::Reveal;

#[component]
pub fn FeaturedProjects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4 bg-gray-950">
            <div class="container mx-auto">
                <Reveal>
                    <h2 class="text-4xl md:text-5xl font-bold text-center mb-16 bg-gradient-to-r from-cyan-400 to-purple-500 text-transparent bg-clip-text">
                        "Featured Projects"
                    </h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! { <ProjectCard project delay_ms={index as u32 * 100} /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal delay_ms>
            <div class="project-card bg-gray-900 rounded-lg overflow-hidden shadow-lg hover:shadow-cyan-500/20 hover:-translate-y-2 transition-all duration-300">
                <div class="p-6">
                    <h3 class="text-xl font-bold mb-3 text-cyan-400">{project.title}</h3>
                    <p class="text-gray-400 mb-4">{project.description}</p>
                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .tech
                            .iter()
                            .map(|item| {
                                view! {
                                    <span class="px-3 py-1 bg-gray-700 rounded-full text-sm text-cyan-300">
                                        {*item}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <a
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-block text-purple-400 hover:text-purple-300 transition-colors"
                    >
                        "View Project →"
                    </a>
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
    fn renders_one_card_per_project() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <FeaturedProjects /> }.to_html());

        assert_eq!(html.matches("project-card").count(), PROJECTS.len());
        for project in PROJECTS {
            assert!(html.contains(project.title), "missing title {}", project.title);
            assert!(html.contains(project.description));
            assert!(html.contains(&format!("href=\"{}\"", project.link)));
            for tech in project.tech {
                assert!(html.contains(tech), "missing tech tag {tech}");
            }
        }
    }

    #[test]
    fn project_links_open_in_new_context() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <FeaturedProjects /> }.to_html());

        assert_eq!(
            html.matches("target=\"_blank\"").count(),
            PROJECTS.len()
        );
        assert_eq!(
            html.matches("rel=\"noopener noreferrer\"").count(),
            PROJECTS.len()
        );
    }
}
