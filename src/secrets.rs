use std::env;

/// Well-known secret holding the webhook destination when no explicit URL
/// is passed on the command line.
pub const WEBHOOK_URL_SECRET: &str = "DISCORD_WEBHOOK_URL";

/// Lookup-by-name secret store. `None` means the secret is not configured;
/// an empty string is representable and left to the caller to interpret.
pub trait SecretLookup {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Secrets sourced from process environment variables, the form Jenkins
/// credential bindings take inside a build step.
pub struct EnvSecrets;

impl SecretLookup for EnvSecrets {
    fn lookup(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}
