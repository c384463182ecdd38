use std::env;

/// Settings read once at startup and shared through app data.
#[derive(Clone)]
pub struct AppConfig {
    /// Shared secret the scheduled trigger must present as a bearer token.
    pub cron_secret: Option<String>,
    /// Who receives the missing-report notification emails.
    pub alert_recipients: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let cron_secret = env::var("CRON_SECRET").ok().filter(|s| !s.is_empty());

        let alert_recipients = env::var("ALERT_RECIPIENTS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            cron_secret,
            alert_recipients,
        }
    }
}
