//! MissionKind - The four agent missions a command can be routed to

/// Mission categories, declared in dispatch priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissionKind {
    Scout,
    Writer,
    Social,
    Admin,
}

impl MissionKind {
    /// All kinds in the order the dispatcher evaluates them
    pub const PRIORITY: [MissionKind; 4] = [
        MissionKind::Scout,
        MissionKind::Writer,
        MissionKind::Social,
        MissionKind::Admin,
    ];

    /// Lower-case trigger phrases matched as substrings
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            MissionKind::Scout => &["find", "scout", "search", "look for"],
            MissionKind::Writer => &["create", "write", "generate", "description"],
            MissionKind::Social => &["post", "social", "facebook", "line", "share"],
            MissionKind::Admin => &["schedule", "report", "viewing", "admin", "manage"],
        }
    }

    /// Whether any keyword of this kind occurs in an already lower-cased command
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords().iter().any(|word| lowered.contains(word))
    }
}

impl std::fmt::Display for MissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissionKind::Scout => write!(f, "scout"),
            MissionKind::Writer => write!(f, "writer"),
            MissionKind::Social => write!(f, "social"),
            MissionKind::Admin => write!(f, "admin"),
        }
    }
}
