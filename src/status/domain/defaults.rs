//! Hardcoded fallback pipeline seeded into empty registries.

/// One seeded default status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultStatus {
    /// Display name.
    pub name: &'static str,
    /// Stable slug.
    pub slug: &'static str,
    /// `#rrggbb` colour.
    pub color: &'static str,
    /// Icon name.
    pub icon: &'static str,
}

/// The eight default pipeline stages, in column order.
pub const DEFAULT_STATUSES: [DefaultStatus; 8] = [
    DefaultStatus {
        name: "Drafting",
        slug: "drafting",
        color: "#64748b",
        icon: "pencil",
    },
    DefaultStatus {
        name: "In Progress",
        slug: "in_progress",
        color: "#3b82f6",
        icon: "loader",
    },
    DefaultStatus {
        name: "AI Check",
        slug: "ai_check",
        color: "#8b5cf6",
        icon: "sparkles",
    },
    DefaultStatus {
        name: "Internal Review",
        slug: "internal_review",
        color: "#f59e0b",
        icon: "eye",
    },
    DefaultStatus {
        name: "Client Review",
        slug: "client_review",
        color: "#ec4899",
        icon: "users",
    },
    DefaultStatus {
        name: "Approved",
        slug: "approved",
        color: "#10b981",
        icon: "check-circle",
    },
    DefaultStatus {
        name: "Published",
        slug: "published",
        color: "#22c55e",
        icon: "send",
    },
    DefaultStatus {
        name: "Ads Handoff",
        slug: "ads_handoff",
        color: "#f97316",
        icon: "megaphone",
    },
];
