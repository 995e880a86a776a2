// src/config/consts.rs

// Data source
pub const DEFAULT_SOURCE: &str = "ztc_live.csv";
pub const SOURCE_ENV: &str = "ZTC_SOURCE";
pub const USER_AGENT: &str = concat!("ztc_catalog/", env!("CARGO_PKG_VERSION"));

// Logging
pub const LOG_FILE: &str = ".store/debug.log";

// Presenter
pub const NO_RESULTS: &str = "No courses found.";
pub const INSTRUCTOR_TBA: &str = "TBA";
pub const LINK_LABEL: &str = "Course Link";
pub const ALL_DEPARTMENTS: &str = "All Departments";
pub const ALL_TERMS: &str = "All Terms";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "courses";

// GUI
pub const WINDOW_TITLE: &str = "ZTC Course Catalog";
pub const WINDOW_W: f32 = 960.0;
pub const WINDOW_H: f32 = 720.0;

// Dataset scraper
pub const SCRAPE_URL: &str = "https://www.laccd.edu/students/class-search";
/// A page with this many `<tr>` or fewer is not treated as a results table
pub const MIN_TABLE_ROWS: usize = 5;
pub const COURSE_MAX_CHARS: usize = 80;
pub const DESCRIPTION_MAX_CHARS: usize = 250;
pub const COURSE_SEPARATOR: &str = " - ";
