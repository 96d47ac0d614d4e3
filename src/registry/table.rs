//! Static dependency table.

/// One tracked external dependency.
///
/// `repo` is the GitHub `owner/name` identifier queried against the API;
/// `label` is the display name used as the report key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyEntry {
    pub repo: &'static str,
    pub label: &'static str,
}

const fn entry(repo: &'static str, label: &'static str) -> DependencyEntry {
    DependencyEntry { repo, label }
}

/// Every dependency we track, in report order.
///
/// Repos are unique; labels are not guaranteed to be (a duplicate label
/// overwrites the earlier entry in the report, see `Report::insert`).
pub const ENTRIES: &[DependencyEntry] = &[
    // Kubernetes & tooling
    entry("kubernetes-sigs/kind", "Kind"),
    entry("helm/helm", "Helm"),
    entry("yannh/kubeconform", "kubeconform"),
    entry("FairwindsOps/pluto", "Pluto"),
    // GitHub Actions
    entry("actions/checkout", "actions/checkout"),
    entry("actions/setup-go", "actions/setup-go"),
    entry("actions/upload-artifact", "actions/upload-artifact"),
    entry("actions/download-artifact", "actions/download-artifact"),
    entry("actions/cache", "actions/cache"),
    entry("actions/github-script", "actions/github-script"),
    entry("actions/labeler", "actions/labeler"),
    entry("actions/attest-build-provenance", "actions/attest-build-provenance"),
    entry("actions/dependency-review-action", "actions/dependency-review-action"),
    entry("codecov/codecov-action", "codecov/codecov-action"),
    entry("github/codeql-action", "github/codeql-action"),
    entry("docker/setup-buildx-action", "docker/setup-buildx-action"),
    entry("docker/build-push-action", "docker/build-push-action"),
    entry("docker/login-action", "docker/login-action"),
    entry("docker/setup-qemu-action", "docker/setup-qemu-action"),
    entry("docker/metadata-action", "docker/metadata-action"),
    entry("golangci/golangci-lint-action", "golangci-lint-action"),
    entry("hadolint/hadolint-action", "hadolint-action"),
    entry("anchore/sbom-action", "anchore/sbom-action"),
    entry("snyk/actions", "snyk/actions"),
    entry("sigstore/cosign-installer", "cosign-installer"),
    entry("azure/setup-kubectl", "azure/setup-kubectl"),
    entry("azure/setup-helm", "azure/setup-helm"),
    // Security tools / actions
    entry("aquasecurity/trivy-action", "Trivy action"),
    entry("docker/scout-action", "Docker Scout action"),
    entry("zricethezav/gitleaks", "Gitleaks"),
    entry("gitleaks/gitleaks-action", "Gitleaks action"),
    entry("trufflesecurity/trufflehog", "TruffleHog"),
    entry("SonarSource/sonarcloud-github-action", "SonarCloud action"),
    entry("bridgecrewio/checkov-action", "Checkov action"),
    entry("securego/gosec", "Gosec"),
    entry("golangci/golangci-lint", "golangci-lint"),
    entry("sigstore/cosign", "Cosign"),
    entry("slsa-framework/slsa-verifier", "SLSA Verifier"),
    entry("anchore/syft", "Syft"),
    entry("anchore/grype", "Grype"),
    entry("sonatype-nexus-community/nancy", "Nancy"),
    entry("google/osv-scanner", "OSV Scanner"),
    // Dev tools
    entry("mikefarah/yq", "yq"),
    entry("jqlang/jq", "jq"),
    entry("openpolicyagent/opa", "OPA"),
    entry("FairwindsOps/polaris", "Polaris"),
    entry("wagoodman/dive", "Dive"),
    entry("hadolint/hadolint", "Hadolint"),
    entry("goodwithtech/dockle", "Dockle"),
    entry("medyagh/setup-minikube", "setup-minikube"),
    entry("helm/kind-action", "kind-action"),
    entry("peter-evans/create-pull-request", "create-pull-request"),
    entry("slackapi/slack-github-action", "slack-github-action"),
    entry("softprops/action-gh-release", "action-gh-release"),
    entry("benchmark-action/github-action-benchmark", "github-action-benchmark"),
    entry("dependabot/fetch-metadata", "dependabot-fetch-metadata"),
    entry("amannn/action-semantic-pull-request", "action-semantic-pull-request"),
    // App dependencies
    entry("Kong/kong", "Kong"),
    entry("Kong/charts", "Kong Helm Chart"),
];

/// Ordered enumeration of all tracked dependencies.
pub fn entries() -> &'static [DependencyEntry] {
    ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_not_empty() {
        assert!(!entries().is_empty());
    }

    #[test]
    fn repos_are_unique() {
        let mut seen = HashSet::new();
        for e in entries() {
            assert!(seen.insert(e.repo), "duplicate repo: {}", e.repo);
        }
    }

    #[test]
    fn repos_have_owner_and_name() {
        for e in entries() {
            let mut parts = e.repo.splitn(2, '/');
            let owner = parts.next().unwrap_or_default();
            let name = parts.next().unwrap_or_default();
            assert!(
                !owner.is_empty() && !name.is_empty(),
                "malformed repo identifier: {}",
                e.repo
            );
        }
    }

    #[test]
    fn labels_are_not_empty() {
        for e in entries() {
            assert!(!e.label.is_empty(), "empty label for {}", e.repo);
        }
    }

    #[test]
    fn known_anchors_present() {
        let repos: Vec<_> = entries().iter().map(|e| e.repo).collect();
        assert!(repos.contains(&"helm/helm"));
        assert!(repos.contains(&"openpolicyagent/opa"));
        assert!(repos.contains(&"Kong/charts"));
    }

    #[test]
    fn table_starts_with_kubernetes_tooling() {
        // Report order is table order; the first row anchors it.
        assert_eq!(entries()[0].repo, "kubernetes-sigs/kind");
        assert_eq!(entries()[0].label, "Kind");
    }
}
