use super::color::ChatColor;
use super::line::FormattedLine;
use crate::types::PlayerRecord;

/// Bracketed rank prefix, e.g. `[MVP+] `, colored the way Hypixel shows it.
///
/// Players without a paid rank get no brackets, only the gray name color.
pub fn rank_prefix(player: &PlayerRecord) -> FormattedLine {
    if player.highest_rank() == "YOUTUBER" {
        return FormattedLine::new()
            .colored(ChatColor::Red, "[")
            .colored(ChatColor::White, "YOUTUBE")
            .colored(ChatColor::Red, "] ");
    }

    let monthly = player.monthly_package_rank();
    let display_rank = if monthly != "NONE" {
        monthly
    } else {
        player.new_package_rank()
    };

    // Unknown color names fall back to red
    let plus = player.rank_plus_color().parse().unwrap_or(ChatColor::Red);

    match display_rank {
        "VIP" => FormattedLine::new().colored(ChatColor::Green, "[VIP] "),
        "VIP_PLUS" => FormattedLine::new()
            .colored(ChatColor::Green, "[VIP")
            .colored(ChatColor::Gold, "+")
            .colored(ChatColor::Green, "] "),
        "MVP" => FormattedLine::new().colored(ChatColor::Aqua, "[MVP] "),
        "MVP_PLUS" => FormattedLine::new()
            .colored(ChatColor::Aqua, "[MVP")
            .colored(plus, "+")
            .colored(ChatColor::Aqua, "] "),
        "SUPERSTAR" => FormattedLine::new()
            .colored(ChatColor::Gold, "[MVP")
            .colored(plus, "++")
            .colored(ChatColor::Gold, "] "),
        _ => FormattedLine::new().color(ChatColor::Gray),
    }
}
