use std::env;

/// One outbound notification, as requested by the caller. Every field is
/// optional; missing values are filled in from the build context when the
/// payload is assembled. `text` is validated at send time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationRequest {
    pub url: Option<String>,
    pub text: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub color: Option<u32>,
    pub username: Option<String>,
    pub avatar: Option<String>,
    pub footer: Option<String>,
}

/// Read-only snapshot of the Jenkins build this notification describes.
/// Captured once in `main` and passed down explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContext {
    pub job_name: Option<String>,
    pub build_url: Option<String>,
    pub result: Option<String>,
}

impl BuildContext {
    /// Capture the variables Jenkins exports to spawned processes.
    pub fn from_env() -> Self {
        Self {
            job_name: non_empty_var("JOB_NAME"),
            build_url: non_empty_var("BUILD_URL"),
            result: non_empty_var("BUILD_RESULT"),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
