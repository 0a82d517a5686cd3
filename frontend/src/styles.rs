pub const PAGE: &str = "min-h-screen flex flex-col bg-cover bg-center bg-no-repeat bg-slate-900";
pub const MAIN: &str = "flex-grow flex flex-col justify-center items-center py-8 px-3";
pub const CARD: &str = "bg-white rounded-lg shadow-lg p-8 max-w-md w-full";
pub const CARD_WIDE: &str = "bg-white rounded-lg shadow-lg p-6 w-full max-w-4xl";
pub const HEADING: &str = "text-xl md:text-3xl font-black mb-6 text-center text-rose-500";
pub const SECTION_TITLE: &str = "text-lg font-bold text-gray-900 mb-3";
pub const FORM: &str = "space-y-4";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-700 mb-1";
pub const TEXT_ERROR: &str = "text-sm text-red-500 mt-1";
pub const TEXT_BODY: &str = "text-gray-600";
pub const TEXT_SMALL: &str = "text-sm text-gray-500";
pub const INPUT: &str = "block w-full rounded-lg border border-gray-300 py-2 px-3 text-gray-900 placeholder:text-gray-400 focus:outline-none focus:ring-2 focus:ring-rose-400";
pub const INPUT_ERROR: &str = "block w-full rounded-lg border border-red-400 py-2 px-3 text-gray-900 focus:outline-none focus:ring-2 focus:ring-red-400";
pub const SELECT: &str = "block w-full rounded-lg border border-gray-300 py-2 px-3 bg-white text-gray-900 focus:outline-none focus:ring-2 focus:ring-rose-400";
pub const TEXTAREA: &str = "block w-full rounded-lg border border-gray-300 py-2 px-3 text-gray-900 font-mono text-sm focus:outline-none focus:ring-2 focus:ring-rose-400";
pub const BUTTON_PRIMARY: &str = "w-full py-4 px-4 rounded-full font-bold text-lg uppercase tracking-wide bg-rose-500 text-white hover:bg-rose-400 transition duration-300 ease-in-out transform hover:scale-105 shadow-lg disabled:opacity-50 disabled:cursor-not-allowed disabled:transform-none";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 text-gray-900 hover:bg-gray-50";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-3 py-1.5 text-sm font-medium text-white hover:bg-red-700";
pub const CARD_ERROR: &str = "bg-red-50 border border-red-200 rounded-lg p-4 text-red-700";
pub const CARD_SUCCESS: &str = "bg-green-50 border border-green-200 rounded-lg p-4 text-green-700";
pub const TABLE: &str = "min-w-full divide-y divide-gray-200 text-left text-sm";
pub const TABLE_HEAD: &str = "px-4 py-2 font-semibold text-gray-700 bg-gray-50";
pub const TABLE_CELL: &str = "px-4 py-2 text-gray-600";
pub const TAB: &str = "px-4 py-2 rounded-t-lg text-sm font-medium text-gray-600 hover:text-rose-500";
pub const TAB_ACTIVE: &str = "px-4 py-2 rounded-t-lg text-sm font-medium bg-white text-rose-500 border border-b-0 border-gray-200";
pub const LOADING_SPINNER: &str = "animate-spin rounded-full h-10 w-10 border-4 border-rose-200 border-t-rose-500";
pub const ADMIN_PAGE: &str = "min-h-screen bg-gray-100 py-8 px-4 sm:px-6 lg:px-8";
pub const ADMIN_CARD: &str = "bg-white rounded-lg shadow p-6";
