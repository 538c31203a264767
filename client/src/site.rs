//! Static page content: owner, sections, skills, projects, datasets.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

pub const OWNER_NAME: &str = "Dancan Mbaabu";
pub const TAGLINE: &str = "Data analyst and software developer";

#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Section ids in document order. Each nav link targets one of these.
pub const SECTION_IDS: &[&str] = &["home", "about", "skills", "projects", "datasets", "contact"];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#skills", label: "Skills" },
    NavLink { href: "#projects", label: "Projects" },
    NavLink { href: "#datasets", label: "Datasets" },
    NavLink { href: "#contact", label: "Contact" },
];

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub percent: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Python", percent: 90 },
    Skill { name: "SQL", percent: 85 },
    Skill { name: "Rust", percent: 70 },
    Skill { name: "Power BI", percent: 80 },
];

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub href: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Sales Dashboard",
        summary: "Interactive revenue reporting across regions and quarters.",
        href: "https://github.com/",
    },
    Project {
        title: "Weather Pipeline",
        summary: "Scheduled ingestion and cleaning of public weather station data.",
        href: "https://github.com/",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Dataset {
    pub file: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const DATASETS: &[Dataset] = &[
    Dataset { file: "sales.csv", title: "Retail Sales", summary: "Monthly sales by store and category." },
    Dataset { file: "weather.json", title: "Weather Readings", summary: "Hourly station readings, cleaned." },
];
