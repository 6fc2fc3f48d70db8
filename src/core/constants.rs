// Player defaults
pub const STARTING_MUNNIES: i32 = 30;
pub const STARTING_LEVEL: u32 = 1;

// XP and leveling
pub const XP_PER_LEVEL: i32 = 100;
pub const LEVEL_UP_HEALTH_BONUS: i32 = 20;
pub const LEVEL_UP_STRENGTH_BONUS: i32 = 5;

// Combat
pub const HOLD_HEALTH_PENALTY: i32 = 50;
pub const LOOT_MIN_MUNNIES: i32 = 10;
pub const LOOT_MAX_MUNNIES: i32 = 50;

// Recovery
pub const RECOVERY_ITEM: &str = "Health Potion";
pub const RECOVERY_HEALTH: i32 = 100;

// Health bar denominator shown in the encounter status line. Not a cap.
pub const DISPLAY_MAX_HEALTH: i32 = 100;
