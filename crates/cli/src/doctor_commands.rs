//! `cachet doctor` — local setup audit.
//!
//! Prints a structured report with `[ok]`, `[warn]`, `[fail]`, `[skip]`,
//! or `[info]` status indicators covering the login session, the project
//! link, the service token, and the version-control tooling.

use std::path::Path;

use {
    anyhow::Result,
    cachet_secrets::validate,
    cachet_vcs::{BranchSource, GitCli},
    cachet_workspace::{PreconditionError, UserDetails, guard, session, token},
    secrecy::SecretString,
};

// ── ANSI helpers ────────────────────────────────────────────────────────────

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Per-check result used to build the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Ok,
    Warn,
    Fail,
    Skip,
    Info,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warn => "warn",
            Self::Fail => "fail",
            Self::Skip => "skip",
            Self::Info => "info",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Self::Ok => GREEN,
            Self::Warn => YELLOW,
            Self::Fail => RED,
            Self::Skip => DIM,
            Self::Info => CYAN,
        }
    }
}

struct CheckItem {
    status: Status,
    message: String,
}

struct Section {
    title: String,
    items: Vec<CheckItem>,
}

impl Section {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    fn push(&mut self, status: Status, message: impl Into<String>) {
        self.items.push(CheckItem {
            status,
            message: message.into(),
        });
    }
}

// ── Printing ────────────────────────────────────────────────────────────────

fn print_report(sections: &[Section]) -> (usize, usize) {
    let mut errors = 0usize;
    let mut warnings = 0usize;

    for section in sections {
        eprintln!("{BOLD}{}{RESET}", section.title);
        for item in &section.items {
            let color = item.status.color();
            let label = item.status.label();
            eprintln!("  [{color}{label}{RESET}]  {}", item.message);
            match item.status {
                Status::Fail => errors += 1,
                Status::Warn => warnings += 1,
                _ => {},
            }
        }
        eprintln!();
    }

    (errors, warnings)
}

// ── Entry point ─────────────────────────────────────────────────────────────

pub async fn handle_doctor() -> Result<()> {
    eprintln!("{BOLD}cachet doctor{RESET}");
    eprintln!("{BOLD}============={RESET}\n");

    let cwd = std::env::current_dir()?;

    let sections = vec![
        check_session(session::load()),
        check_workspace(&cwd),
        check_token(token::from_env()),
        check_vcs(&GitCli::new()).await,
    ];

    let (errors, warnings) = print_report(&sections);

    eprintln!("{BOLD}Summary:{RESET} {errors} error(s), {warnings} warning(s)");

    if errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}

// ── 1. Login session ────────────────────────────────────────────────────────

fn check_session(loaded: cachet_workspace::Result<UserDetails>) -> Section {
    let mut section = Section::new("Session");

    let details = match loaded {
        Ok(details) => details,
        Err(e) => {
            section.push(Status::Fail, format!("unable to read session file: {e}"));
            return section;
        },
    };

    match guard::require_login(&details) {
        Ok(()) => {
            section.push(
                Status::Ok,
                format!("logged in as {}", details.credentials.email),
            );
        },
        Err(e @ PreconditionError::NotLoggedIn) => {
            section.push(Status::Warn, e.to_string());
        },
        Err(e) => {
            section.push(Status::Fail, e.to_string());
        },
    }

    section
}

// ── 2. Project link ─────────────────────────────────────────────────────────

fn check_workspace(start: &Path) -> Section {
    let mut section = Section::new("Project link");

    match guard::require_workspace(start) {
        Ok(link) => {
            section.push(
                Status::Ok,
                format!("linked to workspace {}", link.workspace_id),
            );
            match link.default_environment.as_deref() {
                None => {
                    section.push(Status::Info, "no default environment configured");
                },
                Some(env) if validate::is_valid_environment(env) => {
                    section.push(Status::Ok, format!("default environment: {env}"));
                },
                Some(env) => {
                    section.push(
                        Status::Warn,
                        format!("default environment {env:?} is not recognized by the service"),
                    );
                },
            }
        },
        Err(e @ PreconditionError::NotLinked) => {
            section.push(Status::Warn, e.to_string());
        },
        Err(e) => {
            section.push(Status::Fail, e.to_string());
        },
    }

    section
}

// ── 3. Service token ────────────────────────────────────────────────────────

fn check_token(found: Option<SecretString>) -> Section {
    let mut section = Section::new("Service token");

    match guard::require_service_token(found.as_ref()) {
        Ok(()) => {
            section.push(
                Status::Ok,
                format!("service token present in {}", token::TOKEN_ENV_VAR),
            );
        },
        Err(e) => {
            // Token flows are an alternative to interactive login, so
            // absence is informational rather than a failure.
            section.push(Status::Info, e.to_string());
        },
    }

    section
}

// ── 4. Version control ──────────────────────────────────────────────────────

async fn check_vcs(source: &dyn BranchSource) -> Section {
    let mut section = Section::new("Version control");

    match which::which("git") {
        Ok(path) => {
            section.push(Status::Ok, format!("git found at {}", path.display()));
        },
        Err(_) => {
            section.push(Status::Fail, "git not found in PATH");
            section.push(Status::Skip, "branch check skipped");
            return section;
        },
    }

    match source.current_branch().await {
        Ok(branch) => {
            section.push(Status::Ok, format!("current branch: {branch}"));
        },
        Err(e) => {
            section.push(Status::Warn, format!("current branch unavailable: {e}"));
        },
    }

    section
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {
        super::*,
        cachet_workspace::{Credentials, LINK_FILE},
    };

    fn logged_in_details() -> UserDetails {
        UserDetails {
            logged_in: true,
            expired: false,
            credentials: Credentials {
                email: "dev@example.com".into(),
                token: Some(SecretString::new("jwt".to_string())),
                private_key: Some(SecretString::new("pk".to_string())),
            },
        }
    }

    #[test]
    fn status_labels() {
        assert_eq!(Status::Ok.label(), "ok");
        assert_eq!(Status::Warn.label(), "warn");
        assert_eq!(Status::Fail.label(), "fail");
        assert_eq!(Status::Skip.label(), "skip");
        assert_eq!(Status::Info.label(), "info");
    }

    #[test]
    fn print_report_counts_errors_and_warnings() {
        let mut section = Section::new("test");
        section.push(Status::Ok, "fine");
        section.push(Status::Warn, "caution");
        section.push(Status::Fail, "broken");
        section.push(Status::Info, "note");

        let (errors, warnings) = print_report(&[section]);
        assert_eq!(errors, 1);
        assert_eq!(warnings, 1);
    }

    #[test]
    fn session_check_reports_login() {
        let section = check_session(Ok(logged_in_details()));
        assert_eq!(section.items[0].status, Status::Ok);
        assert!(section.items[0].message.contains("dev@example.com"));
    }

    #[test]
    fn session_check_warns_when_logged_out() {
        let section = check_session(Ok(UserDetails::default()));
        assert_eq!(section.items[0].status, Status::Warn);
        assert!(section.items[0].message.contains("cachet login"));
    }

    #[test]
    fn session_check_fails_on_expired_login() {
        let details = UserDetails {
            expired: true,
            ..logged_in_details()
        };
        let section = check_session(Ok(details));
        assert_eq!(section.items[0].status, Status::Fail);
    }

    #[test]
    fn workspace_check_reports_link_and_environment() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(LINK_FILE),
            r#"{"workspaceId":"ws_7","defaultEnvironment":"staging"}"#,
        )
        .unwrap();

        let section = check_workspace(dir.path());
        assert_eq!(section.items[0].status, Status::Ok);
        assert!(section.items[0].message.contains("ws_7"));
        assert_eq!(section.items[1].status, Status::Ok);
        assert!(section.items[1].message.contains("staging"));
    }

    #[test]
    fn workspace_check_flags_unknown_environment() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(LINK_FILE),
            r#"{"workspaceId":"ws_7","defaultEnvironment":"production"}"#,
        )
        .unwrap();

        let section = check_workspace(dir.path());
        assert_eq!(section.items[1].status, Status::Warn);
    }

    #[test]
    fn workspace_check_warns_when_not_linked() {
        let dir = tempfile::tempdir().unwrap();
        let section = check_workspace(dir.path());
        assert_eq!(section.items[0].status, Status::Warn);
        assert!(section.items[0].message.contains("cachet init"));
    }

    #[test]
    fn workspace_check_fails_on_blank_workspace_id() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LINK_FILE), r#"{"workspaceId":""}"#).unwrap();

        let section = check_workspace(dir.path());
        assert_eq!(section.items[0].status, Status::Fail);
    }

    #[test]
    fn token_check_reports_presence() {
        let section = check_token(Some(SecretString::new("st.value".to_string())));
        assert_eq!(section.items[0].status, Status::Ok);
    }

    #[test]
    fn token_check_absence_is_informational() {
        let section = check_token(None);
        assert_eq!(section.items[0].status, Status::Info);
    }

    #[tokio::test]
    async fn vcs_check_uses_the_branch_source() {
        struct FixedBranch;

        #[async_trait::async_trait]
        impl BranchSource for FixedBranch {
            async fn current_branch(&self) -> cachet_vcs::Result<String> {
                Ok("main".to_string())
            }
        }

        let section = check_vcs(&FixedBranch).await;
        let branch_item = section
            .items
            .iter()
            .find(|i| i.message.contains("current branch"));
        if which::which("git").is_ok() {
            assert_eq!(branch_item.unwrap().status, Status::Ok);
            assert!(branch_item.unwrap().message.contains("main"));
        } else {
            assert!(branch_item.is_none());
        }
    }
}
