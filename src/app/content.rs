//! Static site content. Plain configuration data: the sections render these
//! slices in order and never mutate them.

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub struct SocialLink {
    /// Icon font class, e.g. "devicon-github-plain"
    pub icon: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Targafy",
        description: "Employee goal tracking application with real-time updates and performance analytics.",
        tech: &["Flutter", "Firebase", "Riverpod"],
        link: "https://play.google.com/store/apps/details?id=com.targafy",
    },
    Project {
        title: "Leetcode Rating Predictor",
        description: "Node.js application for predicting Leetcode contest ratings using machine learning and web scraping.",
        tech: &["Node.js", "MongoDB", "Machine Learning"],
        link: "https://github.com/UMESH-042/leetcode-predictor",
    },
    Project {
        title: "UdyogTrackr",
        description: "Business management solution with real-time analytics and inventory tracking capabilities.",
        tech: &["Flutter", "MySQL", "PHP"],
        link: "https://github.com/UMESH-042/udyogtrackr",
    },
];

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        items: &["Dart", "JavaScript", "C++", "Python"],
    },
    SkillGroup {
        category: "Frameworks",
        items: &["Flutter", "React", "Node.js", "Express"],
    },
    SkillGroup {
        category: "Databases",
        items: &["MongoDB", "MySQL", "Firebase"],
    },
    SkillGroup {
        category: "Tools",
        items: &["Git", "Docker", "REST APIs", "Postman"],
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: "devicon-github-plain",
        href: "https://github.com/UMESH-042",
        label: "GitHub",
    },
    SocialLink {
        icon: "devicon-linkedin-plain",
        href: "https://www.linkedin.com/in/umesh-chauhan-a1ab84220/",
        label: "LinkedIn",
    },
    SocialLink {
        icon: "extra-email",
        href: "mailto:chauhanumesh7122003@gmail.com",
        label: "Email",
    },
    SocialLink {
        icon: "extra-codechef",
        href: "https://www.codechef.com/users/umesh_042",
        label: "CodeChef",
    },
    SocialLink {
        icon: "extra-codeforces",
        href: "https://codeforces.com/profile/umesh_042",
        label: "CodeForces",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_featured_projects_with_complete_cards() {
        assert_eq!(PROJECTS.len(), 3);
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.tech.is_empty());
            assert!(project.link.starts_with("https://"));
        }
    }

    #[test]
    fn five_social_links_with_labels() {
        assert_eq!(SOCIAL_LINKS.len(), 5);
        for link in SOCIAL_LINKS {
            assert!(!link.label.is_empty());
            assert!(!link.icon.is_empty());
            assert!(link.href.starts_with("https://") || link.href.starts_with("mailto:"));
        }
    }

    #[test]
    fn skill_groups_are_filled() {
        assert_eq!(SKILL_GROUPS.len(), 4);
        for group in SKILL_GROUPS {
            assert!(!group.category.is_empty());
            assert!(!group.items.is_empty());
        }
    }
}
