//! Static page content
//!
//! Configuration data owned by the page, consumed by the GUI components and
//! the diagram controller: node info entries, declared connections, career
//! and skills data, bilingual navigation labels, and social links. The
//! controller takes these as plain slices; it owns none of them.

use tracing::warn;

use crate::diagram::{Connection, NodeId, NodeInfo};
use crate::prefs::Lang;

/// Info panel entries, keyed by node
pub static NODE_INFO: &[(NodeId, NodeInfo)] = &[
    (
        NodeId::Server,
        NodeInfo {
            title: "Server Hardware",
            content: "Raspberry Pi connected to home internet, running Ubuntu, \
                      self-configured and optimized for the setup. Provides the \
                      foundational infrastructure for hosting containerized \
                      applications.",
        },
    ),
    (
        NodeId::Domain,
        NodeInfo {
            title: "Domain & DNS",
            content: "Free domain from No-IP with automatic IP update. Seamlessly \
                      follows home internet address changes so the domain always \
                      points at the correct server location.",
        },
    ),
    (
        NodeId::Ssl,
        NodeInfo {
            title: "SSL Certificate",
            content: "Let's Encrypt provides free TLS certificates enabling secure \
                      HTTPS for all services. Certificates renew automatically \
                      before expiration.",
        },
    ),
    (
        NodeId::K8s,
        NodeInfo {
            title: "Kubernetes",
            content: "K3s lightweight Kubernetes distribution running on the \
                      Raspberry Pi, providing container orchestration optimized \
                      for edge devices and resource-constrained environments.",
        },
    ),
    (
        NodeId::Cicd,
        NodeInfo {
            title: "CI/CD Pipeline",
            content: "GitHub Actions triggers deployment when code is merged into \
                      the main branch: builds, tests, and prepares applications \
                      for rollout.",
        },
    ),
    (
        NodeId::Deploy,
        NodeInfo {
            title: "ArgoCD Deployment",
            content: "ArgoCD handles GitOps-based continuous deployment, watching \
                      Git repositories and keeping the cluster state in sync with \
                      the desired configuration.",
        },
    ),
];

/// Declared connector pairs
pub static CONNECTIONS: &[Connection] = &[
    Connection::new(NodeId::Server, NodeId::Ssl),
    Connection::new(NodeId::Domain, NodeId::Ssl),
    Connection::new(NodeId::Ssl, NodeId::K8s),
    Connection::new(NodeId::Ssl, NodeId::Cicd),
    Connection::new(NodeId::K8s, NodeId::Deploy),
    Connection::new(NodeId::Cicd, NodeId::Deploy),
];

/// Card face of one diagram node
pub struct NodeCard {
    pub node: NodeId,
    pub title: &'static str,
    pub summary: &'static str,
    pub badge: &'static str,
}

pub static NODE_CARDS: &[NodeCard] = &[
    NodeCard {
        node: NodeId::Server,
        title: "Server Hardware",
        summary: "Raspberry Pi\nUbuntu OS",
        badge: "Self-configured",
    },
    NodeCard {
        node: NodeId::Domain,
        title: "Domain & DNS",
        summary: "No-IP Free Domain\nAuto IP Update",
        badge: "Dynamic DNS",
    },
    NodeCard {
        node: NodeId::Ssl,
        title: "SSL Certificate",
        summary: "Let's Encrypt\nFree HTTPS",
        badge: "Auto-renewal",
    },
    NodeCard {
        node: NodeId::K8s,
        title: "Kubernetes",
        summary: "K3s Distribution\nContainer Platform",
        badge: "Lightweight",
    },
    NodeCard {
        node: NodeId::Cicd,
        title: "CI/CD Pipeline",
        summary: "GitHub Actions\nAuto Deploy",
        badge: "Trigger: main",
    },
    NodeCard {
        node: NodeId::Deploy,
        title: "Deployment",
        summary: "ArgoCD GitOps\nContinuous Deployment",
        badge: "Automated",
    },
];

/// Navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    About,
    Timeline,
    Skills,
    Showcase,
    Contact,
}

impl NavKey {
    pub const ALL: [NavKey; 5] = [
        NavKey::About,
        NavKey::Timeline,
        NavKey::Skills,
        NavKey::Showcase,
        NavKey::Contact,
    ];

    /// Label in the requested language
    pub fn label(self, lang: Lang) -> &'static str {
        match (lang, self) {
            (Lang::En, NavKey::About) => "About",
            (Lang::En, NavKey::Timeline) => "Timeline",
            (Lang::En, NavKey::Skills) => "Skills",
            (Lang::En, NavKey::Showcase) => "Showcase",
            (Lang::En, NavKey::Contact) => "Contact",
            (Lang::Th, NavKey::About) => "เกี่ยวกับ",
            (Lang::Th, NavKey::Timeline) => "ไทม์ไลน์",
            (Lang::Th, NavKey::Skills) => "ทักษะ",
            (Lang::Th, NavKey::Showcase) => "ผลงาน",
            (Lang::Th, NavKey::Contact) => "ติดต่อ",
        }
    }
}

/// Intro section content
pub struct Intro {
    pub name: &'static str,
    pub role: &'static str,
    pub blurb: &'static str,
}

pub static INTRO: Intro = Intro {
    name: "Wongsakorn Rodngampring",
    role: "Lead Full Stack Developer",
    blurb: "Backend-leaning full stack engineer building Golang services, \
            web platforms, and the self-hosted infrastructure they run on.",
};

/// External profile link
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/ni2faa",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/wongsakorn-rodngampring-1796a8152",
    },
    SocialLink {
        label: "Email",
        url: "mailto:ni2faa@gmail.com",
    },
];

/// One expandable detail block of a career item
pub struct CareerDetails {
    pub sections: &'static [(&'static str, &'static [&'static str])],
    pub tags: &'static [&'static str],
}

/// One career timeline entry
pub struct CareerItem {
    pub title: &'static str,
    pub description: &'static str,
    pub details: Option<CareerDetails>,
}

pub static CAREER_ITEMS: &[CareerItem] = &[
    CareerItem {
        title: "2024–Present • Lead Full Stack Developer, Zensorium",
        description: "Golang, Next.js, AWS optimization.",
        details: Some(CareerDetails {
            sections: &[
                (
                    "Mobile Development",
                    &[
                        "Implemented Flutter primarily for POC applications",
                        "Established communication between wearable devices and mobile platforms",
                        "Maintained native SDKs for iOS and Android",
                    ],
                ),
                (
                    "Backend Development",
                    &[
                        "Designed scalable Golang services for real-time measurement storage",
                        "Implemented multiple operational modes for data collection",
                        "Built a real-time measurement web platform with a design system",
                    ],
                ),
                (
                    "Technical Leadership",
                    &[
                        "Led the full stack team on end-to-end solutions",
                        "Ensured reliability and scalability across platforms",
                    ],
                ),
            ],
            tags: &["Flutter", "iOS SDK", "Android SDK", "Golang", "Real-time", "Wearables"],
        }),
    },
    CareerItem {
        title: "2022–2024 • Senior Software Engineer, Thanachart Securities",
        description: "Nuxt.js, Golang templates, backend enablement.",
        details: None,
    },
    CareerItem {
        title: "2020–2022 • Senior Backend Developer, Urbanice",
        description: "Serverless Node.js, DynamoDB, SAM.",
        details: None,
    },
    CareerItem {
        title: "2018–2020 • Backend Developer, Konsys",
        description: "Apollo GraphQL, payment integrations.",
        details: None,
    },
    CareerItem {
        title: "2015–2018 • Full Stack Developer, Nilecon",
        description: "PHP, Laravel, Node.js, 2C2P, admin tooling.",
        details: None,
    },
];

/// One named skill with a one-line description
pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
}

/// A heading with its skills
pub struct SkillCategory {
    pub heading: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        heading: "Programming Languages & Backend",
        skills: &[
            Skill {
                name: "Golang",
                description: "Statically typed compiled language with strong concurrency support.",
            },
            Skill {
                name: "Node.js",
                description: "JavaScript runtime for scalable server-side network applications.",
            },
            Skill {
                name: "PHP",
                description: "Server-side scripting language powering dynamic websites.",
            },
        ],
    },
    SkillCategory {
        heading: "Frontend & Mobile",
        skills: &[
            Skill {
                name: "React",
                description: "Component-based library for building interactive interfaces.",
            },
            Skill {
                name: "Next.js",
                description: "React framework with server rendering and static generation.",
            },
            Skill {
                name: "Flutter",
                description: "Cross-platform UI toolkit for mobile applications.",
            },
        ],
    },
    SkillCategory {
        heading: "Databases",
        skills: &[
            Skill {
                name: "PostgreSQL",
                description: "Advanced open-source relational database.",
            },
            Skill {
                name: "DynamoDB",
                description: "Managed key-value store for serverless workloads.",
            },
            Skill {
                name: "MongoDB",
                description: "Document database with flexible schemas.",
            },
        ],
    },
    SkillCategory {
        heading: "DevOps & Cloud",
        skills: &[
            Skill {
                name: "Docker",
                description: "Container packaging and runtime.",
            },
            Skill {
                name: "Kubernetes",
                description: "Container orchestration across clusters.",
            },
            Skill {
                name: "AWS EC2",
                description: "Elastic virtual machines in the AWS cloud.",
            },
        ],
    },
];

/// Check the static data for internal consistency, logging each problem.
/// Returns the problems so startup can report a count.
pub fn validate() -> Vec<String> {
    let mut problems = Vec::new();

    for connection in CONNECTIONS {
        for endpoint in [connection.from, connection.to] {
            if !NODE_INFO.iter().any(|(id, _)| *id == endpoint) {
                problems.push(format!(
                    "connection endpoint '{}' has no info entry",
                    endpoint.as_str()
                ));
            }
        }
    }

    for node in NodeId::ALL {
        if !NODE_CARDS.iter().any(|card| card.node == node) {
            problems.push(format!("node '{}' has no card", node.as_str()));
        }
    }

    if CAREER_ITEMS.is_empty() {
        problems.push("career timeline is empty".to_string());
    }
    if SKILL_CATEGORIES.is_empty() {
        problems.push("skills showcase is empty".to_string());
    }
    for category in SKILL_CATEGORIES {
        if category.skills.is_empty() {
            problems.push(format!("skill category '{}' has no skills", category.heading));
        }
    }

    for problem in &problems {
        warn!(problem = %problem, "Content validation issue");
    }
    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_content_is_consistent() {
        assert!(validate().is_empty());
    }

    #[test]
    fn test_every_node_has_info_and_card() {
        for node in NodeId::ALL {
            assert!(NODE_INFO.iter().any(|(id, _)| *id == node));
            assert!(NODE_CARDS.iter().any(|card| card.node == node));
        }
    }

    #[test]
    fn test_connections_match_declared_topology() {
        assert_eq!(CONNECTIONS.len(), 6);
        assert!(CONNECTIONS.contains(&Connection::new(NodeId::Server, NodeId::Ssl)));
        assert!(CONNECTIONS.contains(&Connection::new(NodeId::Domain, NodeId::Ssl)));
        assert!(CONNECTIONS.contains(&Connection::new(NodeId::Ssl, NodeId::K8s)));
        assert!(CONNECTIONS.contains(&Connection::new(NodeId::Ssl, NodeId::Cicd)));
        assert!(CONNECTIONS.contains(&Connection::new(NodeId::K8s, NodeId::Deploy)));
        assert!(CONNECTIONS.contains(&Connection::new(NodeId::Cicd, NodeId::Deploy)));
    }

    #[test]
    fn test_nav_labels_exist_for_both_languages() {
        for key in NavKey::ALL {
            assert!(!key.label(Lang::En).is_empty());
            assert!(!key.label(Lang::Th).is_empty());
        }
    }
}
