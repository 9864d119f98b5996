use super::color::ChatColor;
use super::line::FormattedLine;
use super::prestige::format_prestige;
use super::rank::rank_prefix;
use super::tiers::{FINALS, FKDR, WINS, WLR};
use crate::types::{BedwarsMode, PlayerRecord, SessionRecord};
use crate::utils::{format_number_with_separators, format_two_decimals};

/// Counters read for one mode, plus the derived ratios
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BedwarsSummary {
    pub stars: u64,
    pub wins: u64,
    pub losses: u64,
    pub final_kills: u64,
    pub final_deaths: u64,
}

impl BedwarsSummary {
    /// Returns `None` when the player has no Bedwars stats at all.
    pub fn from_player(player: &PlayerRecord, mode: BedwarsMode) -> Option<Self> {
        player.bedwars()?;
        Some(Self {
            stars: player.bedwars_level(),
            wins: player.bedwars_counter(mode, "wins_bedwars"),
            losses: player.bedwars_counter(mode, "losses_bedwars"),
            final_kills: player.bedwars_counter(mode, "final_kills_bedwars"),
            final_deaths: player.bedwars_counter(mode, "final_deaths_bedwars"),
        })
    }

    pub fn wlr(&self) -> f64 {
        ratio(self.wins, self.losses)
    }

    pub fn fkdr(&self) -> f64 {
        ratio(self.final_kills, self.final_deaths)
    }
}

/// `num / den`, or `num` itself when `den` is zero
pub fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        num as f64
    } else {
        num as f64 / den as f64
    }
}

fn status_segment(session: Option<&SessionRecord>) -> FormattedLine {
    match session {
        None => FormattedLine::new(),
        Some(s) if s.online => FormattedLine::new()
            .colored(ChatColor::Green, " Online")
            .reset()
            .text(format!(" in {}", s.server_type_name())),
        Some(_) => FormattedLine::new().colored(ChatColor::Red, " Offline"),
    }
}

/// Builds the chat line for one player.
///
/// `name` is what gets displayed, which is not always `player.name`.
pub fn format_stats(
    player: &PlayerRecord,
    name: &str,
    session: Option<&SessionRecord>,
    mode: BedwarsMode,
) -> FormattedLine {
    let rank = rank_prefix(player);
    let status = status_segment(session);

    let Some(summary) = BedwarsSummary::from_player(player, mode) else {
        return rank
            .text(name)
            .colored(ChatColor::Gray, ": No Bedwars stats found.")
            .append(status);
    };

    let wlr = summary.wlr();
    let fkdr = summary.fkdr();

    format_prestige(summary.stars)
        .text(" ")
        .append(rank)
        .text(name)
        .reset()
        .append(status)
        .text(": Wins ")
        .colored(
            WINS.tier(summary.wins as f64).color(),
            format_number_with_separators(summary.wins),
        )
        .reset()
        .text(" | WLR ")
        .colored(WLR.tier(wlr).color(), format_two_decimals(wlr))
        .reset()
        .text(" | Finals ")
        .colored(
            FINALS.tier(summary.final_kills as f64).color(),
            format_number_with_separators(summary.final_kills),
        )
        .reset()
        .text(" | FKDR ")
        .colored(FKDR.tier(fkdr).color(), format_two_decimals(fkdr))
}
