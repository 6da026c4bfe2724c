pub const BG_PAGE: &str = "bg-amber-50 min-h-screen";
pub const CONTAINER: &str = "container mx-auto px-6 py-10 max-w-5xl";

pub const CARD_HOVER_SCALE: &str = "bg-white border border-amber-200 rounded-lg shadow-md p-4 transform transition-transform duration-200 hover:scale-105";
pub const CARD_SECTION: &str = "bg-white border border-amber-200 p-4 rounded-lg shadow-sm";

pub const INPUT_BASE: &str = "appearance-none border border-amber-300 bg-white text-gray-900 text-lg rounded-md w-full py-2 px-4 focus:outline-none focus:border-amber-600";
pub const INPUT_GROUP: &str = "flex flex-col gap-2";

pub const BUTTON_BASE: &str = "px-4 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-amber-700 hover:bg-amber-800 focus:ring-2 focus:ring-amber-400 focus:outline-none";
pub const BUTTON_SUCCESS: &str = "bg-green-600 hover:bg-green-700 focus:ring-2 focus:ring-green-400 focus:outline-none";
pub const BUTTON_DANGER: &str = "bg-red-600 hover:bg-red-700 focus:ring-2 focus:ring-red-400 focus:outline-none";

pub const TEXT_LABEL: &str = "block text-sm font-semibold text-gray-700";
pub const TEXT_MUTED: &str = "text-sm text-gray-500";
pub const HEADING_LG: &str = "text-4xl font-extrabold mb-8 text-center text-amber-900";
pub const HEADING_MD: &str = "text-2xl font-bold mb-3 text-amber-900";
pub const HEADING_SM: &str = "text-xl font-semibold mb-2 text-amber-900";

pub const FLEX_BETWEEN: &str = "flex justify-between items-center gap-2";
pub const GRID_COLS_3: &str = "grid grid-cols-1 md:grid-cols-3 gap-6";
pub const SPACE_Y_BASE: &str = "space-y-3";

pub const STATS_CARD: &str = "p-3 rounded-lg border shadow-sm mb-3";
pub const STATS_CARD_INFO: &str = "bg-amber-100 border-amber-300 text-amber-900";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_primary() -> String {
    combine_classes(BUTTON_BASE, BUTTON_PRIMARY)
}
