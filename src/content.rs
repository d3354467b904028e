//! Static page copy and the project category filter.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Ai,
    Web,
    Blockchain,
    Cloud,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ai => "AI",
            Self::Web => "Web",
            Self::Blockchain => "Blockchain",
            Self::Cloud => "Cloud",
        }
    }
}

/// Active filter on the project grid. `All` shows everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 5] = [
        Self::All,
        Self::Only(ProjectCategory::Ai),
        Self::Only(ProjectCategory::Web),
        Self::Only(ProjectCategory::Blockchain),
        Self::Only(ProjectCategory::Cloud),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

/// Accent palette name, mapped to CSS custom properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Purple,
    Green,
    Pink,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Cyan => "accent-cyan",
            Self::Purple => "accent-purple",
            Self::Green => "accent-green",
            Self::Pink => "accent-pink",
        }
    }
}

pub struct NavLink {
    pub name: &'static str,
    pub anchor: &'static str,
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub skills: &'static [&'static str],
}

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub accent: Accent,
    pub live_url: &'static str,
    pub source_url: &'static str,
}

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Post {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub date: &'static str,
    pub image: &'static str,
    pub accent: Accent,
}

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub const BRAND: &str = "DevPortfolio";
pub const CONTACT_EMAIL: &str = "hello@example.com";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", anchor: "hero" },
    NavLink { name: "Services", anchor: "services" },
    NavLink { name: "Projects", anchor: "projects" },
    NavLink { name: "About", anchor: "about" },
    NavLink { name: "Blog", anchor: "blog" },
    NavLink { name: "Contact", anchor: "contact" },
];

pub const TECH_STACK: &[&str] = &[
    "React", "TypeScript", "Node.js", "Python", "Solidity", "AWS", "Docker", "Kubernetes",
    "TensorFlow", "Web3",
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "AI & Machine Learning",
        description: "Custom AI solutions, ML models, NLP, computer vision, and intelligent automation systems.",
        accent: Accent::Cyan,
        skills: &["TensorFlow", "PyTorch", "OpenAI", "LangChain"],
    },
    Service {
        title: "Web Development",
        description: "Full-stack web applications with modern frameworks, responsive design, and optimal performance.",
        accent: Accent::Purple,
        skills: &["React", "Next.js", "Node.js", "TypeScript"],
    },
    Service {
        title: "Blockchain & Web3",
        description: "Smart contracts, DeFi protocols, NFT platforms, and decentralized application development.",
        accent: Accent::Green,
        skills: &["Solidity", "Ethereum", "Web3.js", "IPFS"],
    },
    Service {
        title: "Cloud Architecture",
        description: "Scalable cloud infrastructure, serverless solutions, and DevOps automation.",
        accent: Accent::Pink,
        skills: &["AWS", "GCP", "Docker", "Kubernetes"],
    },
];

pub const EXTRA_SKILLS: &[&str] = &["Clean Code", "Mobile First", "Database Design", "Security"];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "AI-Powered Analytics Platform",
        description: "Real-time data analytics with ML predictions and automated insights generation.",
        category: ProjectCategory::Ai,
        image: "/placeholder.svg",
        tags: &["Python", "TensorFlow", "React", "AWS"],
        accent: Accent::Cyan,
        live_url: "#",
        source_url: "#",
    },
    Project {
        id: 2,
        title: "DeFi Trading Protocol",
        description: "Decentralized exchange with automated market making and yield optimization.",
        category: ProjectCategory::Blockchain,
        image: "/placeholder.svg",
        tags: &["Solidity", "Web3.js", "React", "TheGraph"],
        accent: Accent::Green,
        live_url: "#",
        source_url: "#",
    },
    Project {
        id: 3,
        title: "Enterprise SaaS Dashboard",
        description: "Multi-tenant platform with real-time collaboration and advanced reporting.",
        category: ProjectCategory::Web,
        image: "/placeholder.svg",
        tags: &["Next.js", "TypeScript", "PostgreSQL", "Redis"],
        accent: Accent::Purple,
        live_url: "#",
        source_url: "#",
    },
    Project {
        id: 4,
        title: "Cloud Infrastructure Automation",
        description: "IaC solution for automated deployment and scaling across multiple cloud providers.",
        category: ProjectCategory::Cloud,
        image: "/placeholder.svg",
        tags: &["Terraform", "Kubernetes", "Docker", "GitHub Actions"],
        accent: Accent::Pink,
        live_url: "#",
        source_url: "#",
    },
    Project {
        id: 5,
        title: "NLP Chatbot Framework",
        description: "Conversational AI system with context awareness and multi-language support.",
        category: ProjectCategory::Ai,
        image: "/placeholder.svg",
        tags: &["LangChain", "OpenAI", "FastAPI", "Vector DB"],
        accent: Accent::Cyan,
        live_url: "#",
        source_url: "#",
    },
    Project {
        id: 6,
        title: "NFT Marketplace",
        description: "Full-featured NFT platform with lazy minting and royalty distribution.",
        category: ProjectCategory::Blockchain,
        image: "/placeholder.svg",
        tags: &["Ethereum", "IPFS", "React", "Node.js"],
        accent: Accent::Green,
        live_url: "#",
        source_url: "#",
    },
];

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        year: "2024",
        title: "Senior Full Stack Engineer",
        company: "Tech Company",
        description: "Leading development of AI-powered products and blockchain solutions.",
    },
    Milestone {
        year: "2022",
        title: "Blockchain Developer",
        company: "Web3 Startup",
        description: "Built DeFi protocols and NFT platforms handling millions in TVL.",
    },
    Milestone {
        year: "2020",
        title: "Full Stack Developer",
        company: "SaaS Company",
        description: "Developed scalable web applications serving thousands of users.",
    },
    Milestone {
        year: "2018",
        title: "Started Coding Journey",
        company: "Self-taught",
        description: "Began learning programming and building personal projects.",
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "50+", label: "Projects Completed" },
    Stat { value: "30+", label: "Happy Clients" },
    Stat { value: "6+", label: "Years Experience" },
    Stat { value: "99%", label: "Client Satisfaction" },
];

pub const POSTS: &[Post] = &[
    Post {
        id: 1,
        title: "Building Scalable AI Applications with LangChain",
        excerpt: "A deep dive into creating production-ready AI applications using LangChain, vector databases, and modern LLM patterns.",
        category: "AI",
        read_time: "8 min read",
        date: "Jan 15, 2024",
        image: "/placeholder.svg",
        accent: Accent::Cyan,
    },
    Post {
        id: 2,
        title: "The Future of DeFi: Cross-Chain Interoperability",
        excerpt: "Exploring how cross-chain bridges and interoperability protocols are shaping the next generation of decentralized finance.",
        category: "Blockchain",
        read_time: "6 min read",
        date: "Jan 10, 2024",
        image: "/placeholder.svg",
        accent: Accent::Green,
    },
    Post {
        id: 3,
        title: "Optimizing React Performance: Advanced Techniques",
        excerpt: "Practical strategies for building lightning-fast React applications with code splitting, memoization, and virtual scrolling.",
        category: "Web Dev",
        read_time: "10 min read",
        date: "Jan 5, 2024",
        image: "/placeholder.svg",
        accent: Accent::Purple,
    },
    Post {
        id: 4,
        title: "Kubernetes at Scale: Lessons Learned",
        excerpt: "Real-world insights from managing Kubernetes clusters serving millions of requests per day across multiple regions.",
        category: "Cloud",
        read_time: "12 min read",
        date: "Dec 28, 2023",
        image: "/placeholder.svg",
        accent: Accent::Pink,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", href: "#", glyph: "GH" },
    SocialLink { name: "LinkedIn", href: "#", glyph: "in" },
    SocialLink { name: "Twitter", href: "#", glyph: "X" },
    SocialLink { name: "Email", href: "mailto:hello@example.com", glyph: "@" },
];

pub fn visible_projects(filter: ProjectFilter) -> impl Iterator<Item = &'static Project> {
    PROJECTS
        .iter()
        .filter(move |project| filter.matches(project.category))
}
