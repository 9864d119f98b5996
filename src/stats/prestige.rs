use super::color::ChatColor;
use super::line::FormattedLine;

const PRESTIGE_COLORS: [ChatColor; 10] = [
    ChatColor::Gray,
    ChatColor::White,
    ChatColor::Gold,
    ChatColor::Aqua,
    ChatColor::DarkGreen,
    ChatColor::DarkAqua,
    ChatColor::DarkRed,
    ChatColor::LightPurple,
    ChatColor::Blue,
    ChatColor::DarkPurple,
];

const RAINBOW: [ChatColor; 7] = [
    ChatColor::Red,
    ChatColor::Gold,
    ChatColor::Yellow,
    ChatColor::Green,
    ChatColor::Aqua,
    ChatColor::LightPurple,
    ChatColor::DarkPurple,
];

fn star(level: u64) -> char {
    match level {
        0..=1099 => '✫',
        1100..=2099 => '✪',
        _ => '⚝',
    }
}

/// `[<level><star>]` in the color of the player's prestige
pub fn format_prestige(level: u64) -> FormattedLine {
    let text = format!("[{}{}]", level, star(level));

    if level < 1000 {
        let color = PRESTIGE_COLORS[(level / 100) as usize];
        return FormattedLine::new().colored(color, text);
    }

    text.chars()
        .zip(RAINBOW.iter().cycle())
        .fold(FormattedLine::new(), |line, (ch, color)| {
            line.colored(*color, ch.to_string())
        })
}
