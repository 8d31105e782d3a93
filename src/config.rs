use ratatui::style::Color;
use ratatui::symbols::border;

/// Side length of the square playing field, in cells.
pub const BOARD_SIZE: i32 = 24;

/// Tick interval at level 1, in milliseconds.
pub const INITIAL_SPEED_MS: u64 = 200;

/// Milliseconds shaved off the tick interval per level gained.
pub const SPEED_INCREMENT_MS: u64 = 15;

/// Fastest allowed tick interval in milliseconds.
pub const MIN_SPEED_MS: u64 = 80;

/// Foods eaten per level increase.
pub const FOODS_PER_LEVEL: u32 = 5;

/// Base points awarded per food, before the level multiplier.
pub const POINTS_PER_FOOD: u32 = 10;

/// Tunable rule set for one game session.
///
/// Defaults reproduce the classic arcade behavior; tests shrink the values
/// to reach level boundaries quickly.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameRules {
    pub board_size: i32,
    pub initial_speed_ms: u64,
    pub speed_increment_ms: u64,
    pub foods_per_level: u32,
    pub points_per_food: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            initial_speed_ms: INITIAL_SPEED_MS,
            speed_increment_ms: SPEED_INCREMENT_MS,
            foods_per_level: FOODS_PER_LEVEL,
            points_per_food: POINTS_PER_FOOD,
        }
    }
}

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Glyph for snake body segments.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Glyph for the snake head.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Glyph for food.
pub const GLYPH_FOOD: &str = "●";
