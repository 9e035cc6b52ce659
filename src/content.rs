//! Fixed marketing content for the landing page.
//!
//! Copy, word lists, and timings live here rather than inline in the
//! components, so an alternate content set (or a localized one) is a
//! drop-in swap.

use icondata::Icon as IconData;

use crate::rotation::RotationTiming;

/// Words cycled through by the hero title.
pub const ROTATING_WORDS: &[&str] = &["Deploy", "Monitoring", "Optimize", "Backup", "Security"];

/// One rotation cycle: 3s per word, 300ms fade between words.
pub const ROTATION_TIMING: RotationTiming = RotationTiming::new(3_000, 300);

pub const BRAND_NAME: &str = "MongoCraft";

pub const HERO_TITLE_PREFIX: &str = "MongoCraft:";
pub const HERO_TITLE_LEAD: &str = "Automated MongoDB Management for";
pub const HERO_SUBTITLE: &str =
    "A unified platform for building and operating automated MongoDB clusters";

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Clusters",
        href: "#",
    },
    NavLink {
        label: "Monitoring",
        href: "#",
    },
    NavLink {
        label: "Backups",
        href: "#",
    },
    NavLink {
        label: "Settings",
        href: "#",
    },
];

pub struct Feature {
    pub emblem: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        emblem: "⚡",
        title: "Fast Deployment",
        blurb: "Clusters up and running in minutes",
    },
    Feature {
        emblem: "🛡️",
        title: "Automatic Security",
        blurb: "TLS encryption and authentication",
    },
    Feature {
        emblem: "📊",
        title: "Live Monitoring",
        blurb: "Performance metrics at a glance",
    },
    Feature {
        emblem: "🔄",
        title: "Automated Backups",
        blurb: "Your data, safe every day",
    },
];

pub struct QuickStat {
    pub icon: &'static IconData,
    pub label: &'static str,
    pub accent: &'static str,
}

/// Stat tiles above the creation card. Counts are fixed at zero; there is
/// no backend to report real ones.
pub const QUICK_STATS: &[QuickStat] = &[
    QuickStat {
        icon: &icondata::AiDatabaseOutlined,
        label: "Active clusters",
        accent: "text-primary",
    },
    QuickStat {
        icon: &icondata::AiLineChartOutlined,
        label: "Monitoring",
        accent: "text-blue-500",
    },
    QuickStat {
        icon: &icondata::AiSafetyOutlined,
        label: "Security profiles",
        accent: "text-green-500",
    },
    QuickStat {
        icon: &icondata::AiSettingOutlined,
        label: "Automation jobs",
        accent: "text-orange-500",
    },
];

/// Bullet list inside the creation card.
pub const PROVISIONING_NOTES: &[&str] = &[
    "Monitoring and alerting configured automatically",
    "TLS encryption and authentication set up for you",
    "Daily backup schedule included",
    "High availability guaranteed",
];
