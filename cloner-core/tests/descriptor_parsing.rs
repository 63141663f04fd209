//! Decoding tests for workspace descriptors as the workspace API returns them.

use cloner_core::{ProjectName, SourceType, WorkspaceDescriptor};
use rstest::rstest;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn decode(body: &str) -> WorkspaceDescriptor {
    WorkspaceDescriptor::from_json(body).expect("decode descriptor")
}

// ---------------------------------------------------------------------------
// 1. Full descriptors
// ---------------------------------------------------------------------------

#[test]
fn decodes_single_git_project() {
    let ws = decode(
        r#"{"devfile":{"projects":[{"name":"app","source":{"type":"git","location":"https://example.com/app.git"}}]}}"#,
    );
    let devfile = ws.devfile.expect("devfile");
    let projects = devfile.projects();
    assert_eq!(projects.len(), 1);

    let app = &projects[0];
    assert_eq!(app.name, ProjectName::from("app"));
    assert_eq!(app.clone_path(), "app");
    let source = app.source.as_ref().expect("source");
    assert_eq!(source.source_type, SourceType::Git);
    assert_eq!(source.location(), Some("https://example.com/app.git"));
    assert_eq!(source.branch(), None);
}

#[test]
fn decodes_che_shaped_workspace_and_ignores_unknown_fields() {
    let ws = decode(
        r#"{
            "id": "workspacexyz",
            "status": "RUNNING",
            "attributes": {"infrastructureNamespace": "user-che"},
            "devfile": {
                "apiVersion": "1.0.0",
                "metadata": {"name": "demo"},
                "components": [{"type": "chePlugin"}],
                "projects": [
                    {
                        "name": "frontend",
                        "clonePath": "src/web",
                        "source": {
                            "type": "git",
                            "location": "https://example.com/web.git",
                            "branch": "develop",
                            "startPoint": "v1.0"
                        }
                    },
                    {
                        "name": "archive",
                        "source": {"type": "zip", "location": "https://example.com/a.zip"}
                    }
                ]
            }
        }"#,
    );
    assert_eq!(ws.label(), "workspacexyz");

    let devfile = ws.devfile.expect("devfile");
    let projects = devfile.projects();
    assert_eq!(projects.len(), 2);

    assert_eq!(projects[0].clone_path(), "src/web");
    let web = projects[0].source.as_ref().expect("source");
    assert_eq!(web.branch(), Some("develop"));

    let archive = projects[1].source.as_ref().expect("source");
    assert_eq!(archive.source_type, SourceType::Other("zip".to_string()));
}

// ---------------------------------------------------------------------------
// 2. Missing sections decode, they are judged later
// ---------------------------------------------------------------------------

#[rstest]
#[case::empty_object(r#"{}"#)]
#[case::null_devfile(r#"{"devfile":null}"#)]
fn descriptor_without_devfile(#[case] body: &str) {
    assert!(decode(body).devfile.is_none());
}

#[rstest]
#[case::no_projects_key(r#"{"devfile":{}}"#)]
#[case::null_projects(r#"{"devfile":{"projects":null}}"#)]
#[case::empty_projects(r#"{"devfile":{"projects":[]}}"#)]
fn devfile_with_no_projects(#[case] body: &str) {
    let devfile = decode(body).devfile.expect("devfile");
    assert!(devfile.projects().is_empty());
}

#[test]
fn project_without_source_decodes() {
    let ws = decode(r#"{"devfile":{"projects":[{"name":"bare"}]}}"#);
    let devfile = ws.devfile.expect("devfile");
    assert!(devfile.projects()[0].source.is_none());
}

#[test]
fn git_source_without_location_decodes() {
    let ws = decode(r#"{"devfile":{"projects":[{"name":"x","source":{"type":"git"}}]}}"#);
    let devfile = ws.devfile.expect("devfile");
    let source = devfile.projects()[0].source.as_ref().expect("source");
    assert_eq!(source.location(), None);
}

// ---------------------------------------------------------------------------
// 3. Malformed bodies
// ---------------------------------------------------------------------------

#[rstest]
#[case::not_json("<html>502 Bad Gateway</html>")]
#[case::project_without_name(r#"{"devfile":{"projects":[{"source":{"type":"git"}}]}}"#)]
#[case::projects_not_a_list(r#"{"devfile":{"projects":{"name":"app"}}}"#)]
fn malformed_body_is_rejected(#[case] body: &str) {
    assert!(WorkspaceDescriptor::from_json(body).is_err());
}
