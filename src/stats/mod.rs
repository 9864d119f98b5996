//! Turning Hypixel player records into chat lines

pub mod color;
pub mod formatter;
pub mod line;
pub mod prestige;
pub mod rank;
pub mod tiers;

pub use color::ChatColor;
pub use formatter::{format_stats, ratio, BedwarsSummary};
pub use line::{FormattedLine, Span};
pub use prestige::format_prestige;
pub use tiers::Tier;
