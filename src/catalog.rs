//! The fixed 32-team roster and its grouping into conferences and divisions.
//!
//! Everything here is compiled-in reference data: the rest of the app joins
//! against it by team id and never mutates it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conference {
    Afc,
    Nfc,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::Afc, Conference::Nfc];

    pub fn label(self) -> &'static str {
        match self {
            Conference::Afc => "AFC",
            Conference::Nfc => "NFC",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Conference::Afc => "afc",
            Conference::Nfc => "nfc",
        }
    }

    pub fn divisions(self) -> [Division; 4] {
        match self {
            Conference::Afc => [
                Division::AfcEast,
                Division::AfcNorth,
                Division::AfcSouth,
                Division::AfcWest,
            ],
            Conference::Nfc => [
                Division::NfcEast,
                Division::NfcNorth,
                Division::NfcSouth,
                Division::NfcWest,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    AfcEast,
    AfcNorth,
    AfcSouth,
    AfcWest,
    NfcEast,
    NfcNorth,
    NfcSouth,
    NfcWest,
}

impl Division {
    pub const ALL: [Division; 8] = [
        Division::AfcEast,
        Division::AfcNorth,
        Division::AfcSouth,
        Division::AfcWest,
        Division::NfcEast,
        Division::NfcNorth,
        Division::NfcSouth,
        Division::NfcWest,
    ];

    pub fn conference(self) -> Conference {
        match self {
            Division::AfcEast | Division::AfcNorth | Division::AfcSouth | Division::AfcWest => {
                Conference::Afc
            }
            Division::NfcEast | Division::NfcNorth | Division::NfcSouth | Division::NfcWest => {
                Conference::Nfc
            }
        }
    }

    /// Short label shown inside a conference column, e.g. "East".
    pub fn region(self) -> &'static str {
        match self {
            Division::AfcEast | Division::NfcEast => "East",
            Division::AfcNorth | Division::NfcNorth => "North",
            Division::AfcSouth | Division::NfcSouth => "South",
            Division::AfcWest | Division::NfcWest => "West",
        }
    }

    /// Full label, e.g. "AFC East".
    pub fn title(self) -> &'static str {
        match self {
            Division::AfcEast => "AFC East",
            Division::AfcNorth => "AFC North",
            Division::AfcSouth => "AFC South",
            Division::AfcWest => "AFC West",
            Division::NfcEast => "NFC East",
            Division::NfcNorth => "NFC North",
            Division::NfcSouth => "NFC South",
            Division::NfcWest => "NFC West",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: Option<&'static str>,
    /// Lowercase asset key; logo and ranking-bar images are named after it.
    pub slug: &'static str,
    pub division: Division,
}

impl Team {
    /// Substring match against the team name or slug. `needle` must already
    /// be normalized with [`normalize_query`]; an empty needle matches all.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle) || self.slug.contains(needle)
    }
}

/// Trim and lowercase a raw search query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

pub fn team_by_id(id: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|team| team.id == id)
}

pub fn teams_in(division: Division) -> impl Iterator<Item = &'static Team> {
    TEAMS.iter().filter(move |team| team.division == division)
}

pub static TEAMS: [Team; 32] = [
    Team {
        id: "buf",
        name: "Buffalo Bills",
        short_name: Some("Bills"),
        slug: "bills",
        division: Division::AfcEast,
    },
    Team {
        id: "mia",
        name: "Miami Dolphins",
        short_name: Some("Dolphins"),
        slug: "dolphins",
        division: Division::AfcEast,
    },
    Team {
        id: "ne",
        name: "New England Patriots",
        short_name: Some("Patriots"),
        slug: "patriots",
        division: Division::AfcEast,
    },
    Team {
        id: "nyj",
        name: "New York Jets",
        short_name: Some("Jets"),
        slug: "jets",
        division: Division::AfcEast,
    },
    Team {
        id: "bal",
        name: "Baltimore Ravens",
        short_name: Some("Ravens"),
        slug: "ravens",
        division: Division::AfcNorth,
    },
    Team {
        id: "cin",
        name: "Cincinnati Bengals",
        short_name: Some("Bengals"),
        slug: "bengals",
        division: Division::AfcNorth,
    },
    Team {
        id: "cle",
        name: "Cleveland Browns",
        short_name: Some("Browns"),
        slug: "browns",
        division: Division::AfcNorth,
    },
    Team {
        id: "pit",
        name: "Pittsburgh Steelers",
        short_name: Some("Steelers"),
        slug: "steelers",
        division: Division::AfcNorth,
    },
    Team {
        id: "hou",
        name: "Houston Texans",
        short_name: Some("Texans"),
        slug: "texans",
        division: Division::AfcSouth,
    },
    Team {
        id: "ind",
        name: "Indianapolis Colts",
        short_name: Some("Colts"),
        slug: "colts",
        division: Division::AfcSouth,
    },
    Team {
        id: "jax",
        name: "Jacksonville Jaguars",
        short_name: Some("Jaguars"),
        slug: "jaguars",
        division: Division::AfcSouth,
    },
    Team {
        id: "ten",
        name: "Tennessee Titans",
        short_name: Some("Titans"),
        slug: "titans",
        division: Division::AfcSouth,
    },
    Team {
        id: "den",
        name: "Denver Broncos",
        short_name: Some("Broncos"),
        slug: "broncos",
        division: Division::AfcWest,
    },
    Team {
        id: "kc",
        name: "Kansas City Chiefs",
        short_name: Some("Chiefs"),
        slug: "chiefs",
        division: Division::AfcWest,
    },
    Team {
        id: "lv",
        name: "Las Vegas Raiders",
        short_name: Some("Raiders"),
        slug: "raiders",
        division: Division::AfcWest,
    },
    Team {
        id: "lac",
        name: "Los Angeles Chargers",
        short_name: Some("Chargers"),
        slug: "chargers",
        division: Division::AfcWest,
    },
    Team {
        id: "dal",
        name: "Dallas Cowboys",
        short_name: Some("Cowboys"),
        slug: "cowboys",
        division: Division::NfcEast,
    },
    Team {
        id: "nyg",
        name: "New York Giants",
        short_name: Some("Giants"),
        slug: "giants",
        division: Division::NfcEast,
    },
    Team {
        id: "phi",
        name: "Philadelphia Eagles",
        short_name: Some("Eagles"),
        slug: "eagles",
        division: Division::NfcEast,
    },
    Team {
        id: "was",
        name: "Washington Commanders",
        short_name: Some("Commanders"),
        slug: "commanders",
        division: Division::NfcEast,
    },
    Team {
        id: "chi",
        name: "Chicago Bears",
        short_name: Some("Bears"),
        slug: "bears",
        division: Division::NfcNorth,
    },
    Team {
        id: "det",
        name: "Detroit Lions",
        short_name: Some("Lions"),
        slug: "lions",
        division: Division::NfcNorth,
    },
    Team {
        id: "gb",
        name: "Green Bay Packers",
        short_name: Some("Packers"),
        slug: "packers",
        division: Division::NfcNorth,
    },
    Team {
        id: "min",
        name: "Minnesota Vikings",
        short_name: Some("Vikings"),
        slug: "vikings",
        division: Division::NfcNorth,
    },
    Team {
        id: "atl",
        name: "Atlanta Falcons",
        short_name: Some("Falcons"),
        slug: "falcons",
        division: Division::NfcSouth,
    },
    Team {
        id: "car",
        name: "Carolina Panthers",
        short_name: Some("Panthers"),
        slug: "panthers",
        division: Division::NfcSouth,
    },
    Team {
        id: "no",
        name: "New Orleans Saints",
        short_name: Some("Saints"),
        slug: "saints",
        division: Division::NfcSouth,
    },
    Team {
        id: "tb",
        name: "Tampa Bay Buccaneers",
        short_name: Some("Buccaneers"),
        slug: "buccaneers",
        division: Division::NfcSouth,
    },
    Team {
        id: "ari",
        name: "Arizona Cardinals",
        short_name: Some("Cardinals"),
        slug: "cardinals",
        division: Division::NfcWest,
    },
    Team {
        id: "lar",
        name: "Los Angeles Rams",
        short_name: Some("Rams"),
        slug: "rams",
        division: Division::NfcWest,
    },
    Team {
        id: "sf",
        name: "San Francisco 49ers",
        short_name: Some("49ers"),
        slug: "49ers",
        division: Division::NfcWest,
    },
    Team {
        id: "sea",
        name: "Seattle Seahawks",
        short_name: Some("Seahawks"),
        slug: "seahawks",
        division: Division::NfcWest,
    },
];
