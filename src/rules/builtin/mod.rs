mod docker;
mod secrets;

pub use docker::{DockerRule, DockerRuleKind};
pub use secrets::SecretRule;

use std::sync::LazyLock;

static SECRET_RULES: LazyLock<Vec<SecretRule>> = LazyLock::new(secrets::rules);
static DOCKER_RULES: LazyLock<Vec<DockerRule>> = LazyLock::new(docker::rules);

pub fn secret_rules() -> &'static [SecretRule] {
    &SECRET_RULES
}

pub fn docker_rules() -> &'static [DockerRule] {
    &DOCKER_RULES
}

/// Look up a Dockerfile rule by kind. The catalog is fixed, so every kind
/// resolves.
pub fn docker_rule(kind: DockerRuleKind) -> &'static DockerRule {
    DOCKER_RULES
        .iter()
        .find(|r| r.kind == kind)
        .expect("builtin docker rule catalog is complete")
}
