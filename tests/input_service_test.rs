//! Tests for InputService

use std::sync::Arc;

use rstest::rstest;
use tempfile::TempDir;

use compose_action::application::services::InputService;
use compose_action::application::ApplicationError;
use compose_action::infrastructure::traits::RealFileSystem;
use compose_action::util::testing::{init_test_setup, StaticConfigProvider};

fn service(values: Vec<(&str, String)>) -> InputService {
    init_test_setup();
    InputService::new(
        Arc::new(StaticConfigProvider::new(values)),
        Arc::new(RealFileSystem),
    )
}

fn workspace(files: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for file in files {
        let path = temp.path().join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, "services: {}\n").unwrap();
    }
    temp
}

fn cwd(temp: &TempDir) -> String {
    temp.path().display().to_string()
}

// ============================================================
// compose-file
// ============================================================

#[test]
fn given_existing_and_missing_files_when_resolving_then_drops_missing_without_error() {
    // Arrange
    let temp = workspace(&["docker-compose.yml", "ci/override.yml"]);
    let svc = service(vec![
        ("cwd", cwd(&temp)),
        (
            "compose-file",
            "docker-compose.yml\nmissing.yml\nci/override.yml\n".to_string(),
        ),
    ]);

    // Act
    let inputs = svc.resolve().unwrap();

    // Assert
    assert_eq!(
        inputs.compose_files,
        vec!["docker-compose.yml".to_string(), "ci/override.yml".to_string()]
    );
    assert_eq!(inputs.working_directory, temp.path());
}

#[test]
fn given_blank_lines_and_padding_when_resolving_then_trims_and_skips_them() {
    let temp = workspace(&["a.yml", "b.yml"]);
    let svc = service(vec![
        ("cwd", cwd(&temp)),
        ("compose-file", "  a.yml  \n\n\n b.yml\n".to_string()),
    ]);

    let inputs = svc.resolve().unwrap();

    assert_eq!(inputs.compose_files, vec!["a.yml".to_string(), "b.yml".to_string()]);
}

#[test]
fn given_only_missing_files_when_resolving_then_empty_list() {
    let temp = workspace(&[]);
    let svc = service(vec![
        ("cwd", cwd(&temp)),
        ("compose-file", "nope.yml\nalso-nope.yml".to_string()),
    ]);

    let inputs = svc.resolve().unwrap();

    assert!(inputs.compose_files.is_empty());
}

#[test]
fn given_absolute_compose_file_when_resolving_then_checks_it_outside_cwd() {
    // Arrange
    let shared = workspace(&["shared.yml"]);
    let project = workspace(&[]);
    let absolute = shared.path().join("shared.yml").display().to_string();
    let svc = service(vec![
        ("cwd", cwd(&project)),
        ("compose-file", format!("{absolute}\n")),
    ]);

    // Act
    let inputs = svc.resolve().unwrap();

    // Assert
    assert_eq!(inputs.compose_files, vec![absolute]);
}

// ============================================================
// cwd
// ============================================================

#[test]
fn given_no_cwd_when_resolving_then_configuration_error() {
    let svc = service(vec![("compose-file", "docker-compose.yml".to_string())]);

    let err = svc.resolve().unwrap_err();

    assert!(matches!(err, ApplicationError::Configuration { ref input } if input == "cwd"));
    assert!(err.to_string().contains("cwd"));
}

// ============================================================
// services
// ============================================================

#[test]
fn given_no_services_input_when_resolving_then_empty_means_all() {
    let temp = workspace(&[]);
    let svc = service(vec![("cwd", cwd(&temp))]);

    let inputs = svc.resolve().unwrap();

    assert!(inputs.services.is_empty());
}

#[test]
fn given_services_when_resolving_then_keeps_order() {
    let temp = workspace(&[]);
    let svc = service(vec![
        ("cwd", cwd(&temp)),
        ("services", "web\ndb\n".to_string()),
    ]);

    let inputs = svc.resolve().unwrap();

    assert_eq!(inputs.services, vec!["web".to_string(), "db".to_string()]);
}

// ============================================================
// flags
// ============================================================

#[rstest]
#[case("compose-flags")]
#[case("up-flags")]
#[case("down-flags")]
#[case("push-flags")]
#[case("docker-flags")]
fn given_each_flag_input_when_resolving_then_tokenizes_it(#[case] name: &str) {
    let temp = workspace(&[]);
    let svc = service(vec![("cwd", cwd(&temp)), (name, " -d --build ".to_string())]);

    let inputs = svc.resolve().unwrap();

    let expected = vec!["-d".to_string(), "--build".to_string()];
    let actual = match name {
        "compose-flags" => &inputs.compose_flags,
        "up-flags" => &inputs.up_flags,
        "down-flags" => &inputs.down_flags,
        "push-flags" => &inputs.push_flags,
        _ => &inputs.docker_flags,
    };
    assert_eq!(actual, &expected);
}

#[test]
fn given_no_flags_when_resolving_then_all_flag_lists_empty() {
    let temp = workspace(&[]);
    let svc = service(vec![("cwd", cwd(&temp)), ("up-flags", "   ".to_string())]);

    let inputs = svc.resolve().unwrap();

    assert!(inputs.compose_flags.is_empty());
    assert!(inputs.up_flags.is_empty());
    assert!(inputs.down_flags.is_empty());
    assert!(inputs.push_flags.is_empty());
    assert!(inputs.docker_flags.is_empty());
}

#[test]
fn given_repeated_spaces_when_resolving_then_keeps_empty_tokens() {
    let temp = workspace(&[]);
    let svc = service(vec![("cwd", cwd(&temp)), ("down-flags", "-v  --remove-orphans".to_string())]);

    let inputs = svc.resolve().unwrap();

    assert_eq!(
        inputs.down_flags,
        vec!["-v".to_string(), String::new(), "--remove-orphans".to_string()]
    );
}
