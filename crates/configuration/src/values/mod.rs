mod api_settings;
mod credentials;
mod secret;

pub use api_settings::ApiSettings;
pub use credentials::{ClientId, ClientSecret, DeveloperToken, RefreshToken};
pub use secret::{Secret, Variable};
