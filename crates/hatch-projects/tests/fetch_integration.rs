//! Integration tests for template download, manifest patching and setup
//!
//! A local repository stands in for the remote template, so these tests need `git`
//! on PATH but no network access. They are skipped when git is missing.

use camino::{Utf8Path, Utf8PathBuf};
use hatch_core::types::{FlavorBranches, TemplateConfig};
use hatch_projects::git::{fetch_template, FetchPlan};
use hatch_projects::manifest::{patch_manifest, ManifestPatch, MANIFEST_FILE};
use hatch_projects::{Error, InitAnswers, TemplateFlavor};
use std::process::Command;
use tempfile::TempDir;

const TEMPLATE_MANIFEST: &str = r#"{
  "name": "react-app-template",
  "version": "0.0.1",
  "description": "React app template",
  "author": "maxiximxx"
}"#;

fn git_available() -> bool {
    which::which("git").is_ok()
}

fn git(dir: &Utf8Path, args: &[&str]) {
    let status = Command::new("git")
        .current_dir(dir)
        .args(["-c", "user.name=Hatch Test", "-c", "user.email=test@example.com"])
        .args(args)
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

/// Create a template repository with a JavaScript and a TypeScript branch
fn create_template_repo(root: &Utf8Path) -> Utf8PathBuf {
    let repo = root.join("template");
    std::fs::create_dir(&repo).unwrap();

    git(&repo, &["init", "--quiet"]);
    git(&repo, &["symbolic-ref", "HEAD", "refs/heads/js"]);
    std::fs::write(repo.join(MANIFEST_FILE), TEMPLATE_MANIFEST).unwrap();
    std::fs::write(repo.join("index.js"), "console.log('hello')\n").unwrap();
    git(&repo, &["add", "."]);
    git(&repo, &["commit", "--quiet", "-m", "javascript template"]);

    git(&repo, &["checkout", "--quiet", "-b", "ts"]);
    std::fs::remove_file(repo.join("index.js")).unwrap();
    std::fs::write(repo.join("index.ts"), "console.log('hello')\n").unwrap();
    git(&repo, &["add", "-A"]);
    git(&repo, &["commit", "--quiet", "-m", "typescript template"]);

    repo
}

fn setup() -> (Utf8PathBuf, TemplateConfig, TempDir) {
    let temp = TempDir::new().unwrap();
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
    let repo = create_template_repo(&root);

    let config = TemplateConfig {
        source: format!("direct:file://{}", repo),
        shallow: true,
        branches: FlavorBranches {
            javascript: "js".to_string(),
            typescript: "ts".to_string(),
        },
    };
    (root, config, temp)
}

#[tokio::test]
async fn test_fetch_javascript_flavor() {
    if !git_available() {
        return;
    }
    let (root, config, _temp) = setup();
    let dest = root.join("demo");

    let plan = FetchPlan::resolve(&config, None, Some(TemplateFlavor::JavaScript)).unwrap();
    fetch_template(&plan, &dest).await.unwrap();

    assert!(dest.join("index.js").exists());
    assert!(!dest.join("index.ts").exists());
    assert!(!dest.join(".git").exists(), "template history should be removed");
}

#[tokio::test]
async fn test_fetch_typescript_flavor() {
    if !git_available() {
        return;
    }
    let (root, config, _temp) = setup();
    let dest = root.join("demo");

    let plan = FetchPlan::resolve(&config, None, Some(TemplateFlavor::TypeScript)).unwrap();
    fetch_template(&plan, &dest).await.unwrap();

    assert!(dest.join("index.ts").exists());
    assert!(!dest.join("index.js").exists());
}

#[tokio::test]
async fn test_fetch_unknown_branch_fails() {
    if !git_available() {
        return;
    }
    let (root, config, _temp) = setup();
    let dest = root.join("demo");

    let source = format!("{}#no-such-branch", config.source);
    let plan = FetchPlan::resolve(&config, Some(&source), None).unwrap();
    let result = fetch_template(&plan, &dest).await;

    assert!(matches!(result, Err(Error::FetchFailed { .. })));
}

#[tokio::test]
async fn test_fetch_then_patch_manifest() {
    if !git_available() {
        return;
    }
    let (root, config, _temp) = setup();
    let dest = root.join("demo");

    let answers = InitAnswers {
        template: TemplateFlavor::JavaScript,
        author: String::new(),
        description: String::new(),
        version: "1.2.3".to_string(),
    };
    let plan = FetchPlan::resolve(&config, None, Some(answers.template)).unwrap();
    fetch_template(&plan, &dest).await.unwrap();

    let patched = patch_manifest(&dest, &ManifestPatch::from_answers("demo", &answers))
        .await
        .unwrap();
    assert!(patched);

    let content = std::fs::read_to_string(dest.join(MANIFEST_FILE)).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(manifest["name"], "demo");
    assert_eq!(manifest["author"], "maxiximxx");
    assert_eq!(manifest["description"], "React app template");
    assert_eq!(manifest["version"], "1.2.3");
}
