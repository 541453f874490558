//! Access Policy
//!
//! An ordered list of (matcher, requirement) pairs evaluated
//! first-match-wins. The default rule set:
//!
//! | Path | Requirement |
//! |------|-------------|
//! | `/actuator/shutdown` | `ACTUATOR_ADMIN` role |
//! | `/actuator/...` | open |
//! | everything else | authenticated principal |

use crate::auth::principal::ROLE_ACTUATOR_ADMIN;

/// Operational endpoint prefix
pub const ACTUATOR_PREFIX: &str = "/actuator";

/// The one operational endpoint that stays role-gated
pub const SHUTDOWN_PATH: &str = "/actuator/shutdown";

/// What a matched rule demands of the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Authenticated principal holding the given role
    Role(&'static str),
    /// No authentication at all
    PermitAll,
    /// Any authenticated principal
    Authenticated,
}

/// Path matcher for a single rule
#[derive(Debug, Clone)]
pub enum RouteMatcher {
    Exact(&'static str),
    Prefix(&'static str),
    Any,
}

impl RouteMatcher {
    fn matches(&self, path: &str) -> bool {
        match self {
            RouteMatcher::Exact(expected) => path == *expected,
            RouteMatcher::Prefix(prefix) => {
                path == *prefix
                    || path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            RouteMatcher::Any => true,
        }
    }
}

/// One ordered policy entry
#[derive(Debug, Clone)]
pub struct AccessRule {
    matcher: RouteMatcher,
    requirement: Requirement,
}

impl AccessRule {
    pub fn new(matcher: RouteMatcher, requirement: Requirement) -> Self {
        Self {
            matcher,
            requirement,
        }
    }
}

/// Ordered access rules, first match wins
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    rules: Vec<AccessRule>,
}

impl AccessPolicy {
    pub fn new(rules: Vec<AccessRule>) -> Self {
        Self { rules }
    }

    /// The server's rule set: shutdown is admin-only, the rest of the
    /// actuator surface is open, business routes need authentication.
    pub fn default_rules() -> Self {
        Self::new(vec![
            AccessRule::new(
                RouteMatcher::Exact(SHUTDOWN_PATH),
                Requirement::Role(ROLE_ACTUATOR_ADMIN),
            ),
            AccessRule::new(RouteMatcher::Prefix(ACTUATOR_PREFIX), Requirement::PermitAll),
            AccessRule::new(RouteMatcher::Any, Requirement::Authenticated),
        ])
    }

    /// Requirement of the first matching rule
    ///
    /// Unmatched paths fall back to `Authenticated`; with a trailing `Any`
    /// rule this is unreachable, but the fallback keeps the policy
    /// deny-by-default if the rule set ever drops it.
    pub fn requirement_for(&self, path: &str) -> Requirement {
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(path))
            .map(|rule| rule.requirement.clone())
            .unwrap_or(Requirement::Authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shutdown_requires_admin_role() {
        let policy = AccessPolicy::default_rules();
        assert_eq!(
            policy.requirement_for("/actuator/shutdown"),
            Requirement::Role(ROLE_ACTUATOR_ADMIN)
        );
    }

    #[test]
    fn other_actuator_endpoints_are_open() {
        let policy = AccessPolicy::default_rules();
        assert_eq!(
            policy.requirement_for("/actuator/health"),
            Requirement::PermitAll
        );
        assert_eq!(
            policy.requirement_for("/actuator/metrics"),
            Requirement::PermitAll
        );
        assert_eq!(policy.requirement_for("/actuator"), Requirement::PermitAll);
    }

    #[test]
    fn business_routes_require_authentication() {
        let policy = AccessPolicy::default_rules();
        assert_eq!(
            policy.requirement_for("/api/employees"),
            Requirement::Authenticated
        );
        assert_eq!(policy.requirement_for("/"), Requirement::Authenticated);
    }

    #[test]
    fn prefix_match_does_not_swallow_lookalike_paths() {
        let policy = AccessPolicy::default_rules();
        assert_eq!(
            policy.requirement_for("/actuators"),
            Requirement::Authenticated
        );
    }

    #[test]
    fn first_match_wins_over_later_rules() {
        // The shutdown path also matches the actuator prefix; the role rule
        // sits first and must win.
        let policy = AccessPolicy::new(vec![
            AccessRule::new(
                RouteMatcher::Exact(SHUTDOWN_PATH),
                Requirement::Role(ROLE_ACTUATOR_ADMIN),
            ),
            AccessRule::new(RouteMatcher::Prefix(ACTUATOR_PREFIX), Requirement::PermitAll),
        ]);
        assert_eq!(
            policy.requirement_for(SHUTDOWN_PATH),
            Requirement::Role(ROLE_ACTUATOR_ADMIN)
        );
    }

    #[test]
    fn unmatched_paths_deny_by_default() {
        let policy = AccessPolicy::new(vec![AccessRule::new(
            RouteMatcher::Prefix(ACTUATOR_PREFIX),
            Requirement::PermitAll,
        )]);
        assert_eq!(
            policy.requirement_for("/api/employees"),
            Requirement::Authenticated
        );
    }
}
