use strum_macros::{AsRefStr, EnumString};
use url::form_urlencoded;

const API_BASE_URL: &str = "/api/admin";
pub const DEFAULT_PAGE_SIZE: usize = 3;
pub const DEFAULT_PAGE: usize = 1;

/// The admin listings that can be browsed page by page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Listing {
    #[default]
    #[strum(ascii_case_insensitive)]
    Sales,

    #[strum(ascii_case_insensitive)]
    Subscriptions,

    #[strum(ascii_case_insensitive)]
    Users,
}

impl Listing {
    pub const ALL: [Listing; 3] = [Listing::Sales, Listing::Subscriptions, Listing::Users];

    pub fn title(self) -> &'static str {
        match self {
            Listing::Sales => "All Sales",
            Listing::Subscriptions => "All Subscriptions",
            Listing::Users => "All Users",
        }
    }

    pub fn endpoint(self) -> String {
        format!("{API_BASE_URL}/all-{}", self.as_ref())
    }
}

/// Startup settings, taken from the page URL query string (`?listing=users&page_size=10&page=2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaConfig {
    pub listing: Listing,
    pub page_size: usize,
    pub current_page: usize,
}

impl Default for SpaConfig {
    fn default() -> Self {
        Self {
            listing: Listing::default(),
            page_size: DEFAULT_PAGE_SIZE,
            current_page: DEFAULT_PAGE,
        }
    }
}

impl SpaConfig {
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    /// Unknown keys are skipped and invalid values keep their defaults.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.trim_start_matches('?');
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "listing" => match value.parse::<Listing>() {
                    Ok(listing) => config.listing = listing,
                    Err(_) => log::warn!("Invalid listing={value}, using {}", config.listing.as_ref()),
                },
                "page_size" => match parse_positive(&value) {
                    Some(page_size) => config.page_size = page_size,
                    None => log::warn!("Invalid page_size={value}, using {}", config.page_size),
                },
                "page" => match parse_positive(&value) {
                    Some(page) => config.current_page = page,
                    None => log::warn!("Invalid page={value}, using {}", config.current_page),
                },
                _ => log::debug!("Ignoring query parameter {key}={value}"),
            }
        }
        config
    }
}

fn parse_positive(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|n| *n > 0)
}
