pub mod common {
    pub const BRAND_NAME: &str = "PedalSwap";
}

pub mod navigation {
    pub const NAV_HOME: &str = "Home";
    pub const NAV_BROWSE: &str = "Browse";
    pub const NAV_LIST: &str = "List a Bike";
    pub const NAV_PROFILE: &str = "Profile";
    pub const NAV_MAIN_ARIA: &str = "Main navigation";
}

pub mod loading_spinner {
    pub const LOADING_BIKES: &str = "Loading bikes...";
}

pub mod error_notice {
    pub const MESSAGE_TEMPLATE: &str = "Error: {}";
}

pub mod home_page {
    pub const TITLE: &str = "Welcome to PedalSwap";
    pub const TAGLINE: &str = "The Pacific Northwest's premier bike trading platform. Find your \
                               next ride or trade the bike you've outgrown.";
    pub const BROWSE_TITLE: &str = "Browse Bikes";
    pub const BROWSE_DESC: &str = "Discover amazing bikes from fellow cyclists across the PNW. \
                                   From mountain bikes to road bikes, find your perfect match.";
    pub const BROWSE_CTA: &str = "Start Browsing";
    pub const LIST_TITLE: &str = "List Your Bike";
    pub const LIST_DESC: &str = "Ready to trade? List your bike and connect with other cycling \
                                 enthusiasts looking for their next adventure.";
    pub const LIST_CTA: &str = "List Your Bike";
}

pub mod browse_page {
    pub const TITLE: &str = "Browse Bikes";
    pub const EMPTY: &str = "No bikes available for trading.";
    pub const GRID_ARIA: &str = "Bike listings";
}

pub mod listing_card {
    pub const NO_IMAGE: &str = "No Image";
    pub const VIEW_DETAILS: &str = "View Details";
}

pub mod list_bike_page {
    pub const TITLE: &str = "List Your Bike";
    pub const STATUS: &str = "Listing form coming soon";
    pub const DESC: &str = "We're building a guided form for trading your bike. Until then, \
                            have a look at what other riders are offering.";
    pub const BTN_BROWSE: &str = "Browse Bikes";
    pub const BTN_HOME: &str = "Back to Home";
}

pub mod profile_page {
    pub const TITLE: &str = "Profile";
    pub const USER_INFO: &str = "User Information";
    pub const FIELDS: &[(&str, &str)] = &[
        ("Email", "user@example.com"),
        ("Username", "bike_rider"),
        ("Location", "Portland, OR"),
        ("Preferred Size", "M"),
        ("Member Since", "2024"),
    ];
    pub const MY_BIKES: &str = "My Bikes";
    pub const MY_BIKES_EMPTY: &str = "You haven't listed any bikes yet.";
    pub const BTN_LIST: &str = "List a Bike";
    pub const TRADE_HISTORY: &str = "Trade History";
    pub const TRADE_HISTORY_EMPTY: &str = "No trades yet.";
    pub const BTN_BROWSE: &str = "Browse Bikes";
}
