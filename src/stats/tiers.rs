use super::color::ChatColor;

/// Skill tier of a stat, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Gray,
    White,
    Green,
    DarkGreen,
    Yellow,
    Gold,
    Red,
    DarkRed,
    LightPurple,
    DarkPurple,
}

impl Tier {
    const ASCENDING: [Tier; 10] = [
        Tier::Gray,
        Tier::White,
        Tier::Green,
        Tier::DarkGreen,
        Tier::Yellow,
        Tier::Gold,
        Tier::Red,
        Tier::DarkRed,
        Tier::LightPurple,
        Tier::DarkPurple,
    ];

    pub fn color(&self) -> ChatColor {
        match self {
            Tier::Gray => ChatColor::Gray,
            Tier::White => ChatColor::White,
            Tier::Green => ChatColor::Green,
            Tier::DarkGreen => ChatColor::DarkGreen,
            Tier::Yellow => ChatColor::Yellow,
            Tier::Gold => ChatColor::Gold,
            Tier::Red => ChatColor::Red,
            Tier::DarkRed => ChatColor::DarkRed,
            Tier::LightPurple => ChatColor::LightPurple,
            Tier::DarkPurple => ChatColor::DarkPurple,
        }
    }
}

/// Nine ascending thresholds; meeting threshold `i` yields tier `i + 1`.
#[derive(Debug, Clone, Copy)]
pub struct Ladder([f64; 9]);

impl Ladder {
    pub fn tier(&self, value: f64) -> Tier {
        let reached = self.0.iter().take_while(|t| value >= **t).count();
        Tier::ASCENDING[reached]
    }
}

pub const WINS: Ladder = Ladder([
    50.0, 250.0, 500.0, 1_000.0, 2_500.0, 5_000.0, 10_000.0, 25_000.0, 50_000.0,
]);

pub const WLR: Ladder = Ladder([0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0]);

pub const FINALS: Ladder = Ladder([
    100.0, 500.0, 1_000.0, 2_500.0, 5_000.0, 10_000.0, 25_000.0, 50_000.0, 100_000.0,
]);

pub const FKDR: Ladder = Ladder([0.5, 1.0, 2.0, 4.0, 6.0, 8.0, 10.0, 15.0, 20.0]);
