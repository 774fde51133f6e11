use lazy_static::lazy_static;
use std::env;

lazy_static! {
    pub static ref FAKE_PTY: bool = env::var("TASKDUE_FAKE_PTY").is_ok();
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Command constants
pub const CMD_ADD: &str = "add";
pub const CMD_PRINT: &str = "print";
pub const CMD_EDIT: &str = "edit";
pub const CMD_DELETE: &str = "delete";
pub const CMD_HELP: &str = "help";
pub const CMD_EXIT: &str = "exit";

pub const ALL_CMDS: &[&str] = &[CMD_ADD, CMD_PRINT, CMD_EDIT, CMD_DELETE, CMD_HELP, CMD_EXIT];

// Field selectors recognised by the edit command
pub const FIELD_PRIORITY: &str = "priority";
pub const FIELD_DATE: &str = "date";
pub const FIELD_TIME: &str = "time";
pub const FIELD_TASK: &str = "task";

// Canonical deadline form; the date and time columns are its two halves
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

// Table geometry
pub const INDEX_COL_WIDTH: usize = 2;
pub const DATE_COL_WIDTH: usize = 10;
pub const TIME_COL_WIDTH: usize = 5;
pub const TEXT_COL_WIDTH: usize = 44;

// Theme constants (256-color backgrounds painted into the indicator cells)
pub const BG_PRIORITY_CRITICAL: u8 = 196;
pub const BG_PRIORITY_HIGH: u8 = 208;
pub const BG_PRIORITY_NORMAL: u8 = 111;
pub const BG_PRIORITY_LOW: u8 = 245;
pub const BG_TAG_IN_TIME: u8 = 34;
pub const BG_TAG_TODAY: u8 = 220;
pub const BG_TAG_OVERDUE: u8 = 196;
