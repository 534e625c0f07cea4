use lazy_static::lazy_static;
use web_sys::window;

pub const ALL_CATEGORIES: &str = "all";

const DEFAULT_CATALOG_URL: &str = "../api/videos.json";
const DEFAULT_APP_NAME: &str = "Video Gallery";
const DEFAULT_CATEGORIES: &str = "dance,walk,run,jump";

lazy_static! {
    pub static ref CATALOG_URL: String = get_catalog_url();
    pub static ref CATEGORIES: Vec<String> = get_categories();
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::debug!("ENV_CONFIG is undefined - using defaults");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::debug!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_catalog_url() -> String {
    get_env_var("CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

pub fn get_categories() -> Vec<String> {
    parse_categories(&get_env_var("CATEGORIES").unwrap_or_else(|| DEFAULT_CATEGORIES.to_string()))
}

/// Path prefix the page is served under, if not the site root.
pub fn get_base_path() -> Option<String> {
    get_env_var("BASE_PATH").filter(|path| !path.trim().is_empty())
}

pub fn is_debug_mode() -> bool {
    parse_flag(get_env_var("DEBUG_MODE").as_deref())
}

/// Splits a comma separated list into category buttons, always led by `all`.
pub fn parse_categories(raw: &str) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for category in raw.split(',').map(str::trim) {
        if !category.is_empty() && !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

fn parse_flag(raw: Option<&str>) -> bool {
    raw.unwrap_or("false").trim().parse().unwrap_or(false)
}
