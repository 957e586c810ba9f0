
// Relay credentials are baked in at build time (`trunk build` picks them up
// from the environment).
pub const EMAILJS_SERVICE_ID: Option<&str> = option_env!("EMAILJS_SERVICE_ID");
pub const EMAILJS_TEMPLATE_ID: Option<&str> = option_env!("EMAILJS_TEMPLATE_ID");
pub const EMAILJS_PUBLIC_KEY: Option<&str> = option_env!("EMAILJS_PUBLIC_KEY");

/// Inbox that receives every contact request.
pub const CONTACT_INBOX: &str = "dkit.system6@gmail.com";

pub const CONTACT_AUTO_CLOSE_MS: u32 = 2_000;
pub const RESIZE_DEBOUNCE_MS: u32 = 100;
pub const PAGE_LOADER_HOLD_MS: u32 = 250;
pub const ANCHOR_SCROLL_DELAY_MS: u32 = 100;

/// Below this width the cursor follower is disabled.
pub const SMALL_SCREEN_WIDTH: f64 = 767.0;

#[cfg(debug_assertions)]
pub fn relay_endpoint() -> &'static str {
    option_env!("EMAILJS_ENDPOINT").unwrap_or("https://api.emailjs.com/api/v1.0/email/send")
}

#[cfg(not(debug_assertions))]
pub fn relay_endpoint() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}
