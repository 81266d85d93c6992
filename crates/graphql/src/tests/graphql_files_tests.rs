use crate::graphql_files::DocumentKind;
use crate::graphql_files::FileError;
use crate::graphql_files::ParsedDocument;
use crate::graphql_files::find_graphql_files;
use crate::graphql_files::parse_file;
use std::path::Path;
use std::path::PathBuf;

/// Creates a fresh scratch directory under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("graphql-cli-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn auto_kind_detects_executable_documents() {
    let path = Path::new("query.graphql");
    assert_eq!(DocumentKind::Auto.resolve(path, "{ me }"), DocumentKind::Executable);
    assert_eq!(
        DocumentKind::Auto.resolve(path, "# leading comment\nquery Q { me }"),
        DocumentKind::Executable,
    );
    assert_eq!(
        DocumentKind::Auto.resolve(path, "fragment F on User { id }"),
        DocumentKind::Executable,
    );
}

#[test]
fn auto_kind_defaults_to_type_system() {
    let path = Path::new("schema.graphql");
    assert_eq!(DocumentKind::Auto.resolve(path, "type Query { a: Int }"), DocumentKind::TypeSystem);
    assert_eq!(DocumentKind::Auto.resolve(path, "\"doc\" scalar S"), DocumentKind::TypeSystem);
    assert_eq!(DocumentKind::Auto.resolve(path, ""), DocumentKind::TypeSystem);
}

#[test]
fn graphqls_extension_is_type_system() {
    let path = Path::new("schema.graphqls");
    assert_eq!(DocumentKind::Auto.resolve(path, "{ me }"), DocumentKind::TypeSystem);
}

#[test]
fn explicit_kind_is_kept() {
    let path = Path::new("schema.graphqls");
    assert_eq!(
        DocumentKind::Executable.resolve(path, "type Query { a: Int }"),
        DocumentKind::Executable,
    );
}

#[test]
fn finds_files_by_extension() {
    let dir = scratch_dir("find");
    std::fs::create_dir_all(dir.join("nested")).unwrap();
    std::fs::write(dir.join("a.graphql"), "{ a }").unwrap();
    std::fs::write(dir.join("nested/b.graphqls"), "scalar B").unwrap();
    std::fs::write(dir.join("notes.txt"), "not graphql").unwrap();

    let exts = vec!["graphql".to_string(), ".graphqls".to_string()];
    let mut found = find_graphql_files(std::slice::from_ref(&dir), &exts);
    found.paths.sort();

    assert_eq!(found.paths, vec![dir.join("a.graphql"), dir.join("nested/b.graphqls")]);
    assert_eq!(found.num_skipped, 1);
    assert!(found.errors.is_empty());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn single_file_is_kept_regardless_of_extension() {
    let dir = scratch_dir("single");
    let path = dir.join("schema.txt");
    std::fs::write(&path, "scalar S").unwrap();

    let found = find_graphql_files(std::slice::from_ref(&path), &["graphql".to_string()]);
    assert_eq!(found.paths, vec![path]);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn parse_file_reports_detailed_errors() {
    let dir = scratch_dir("parse");
    let good = dir.join("good.graphql");
    let bad = dir.join("bad.graphql");
    std::fs::write(&good, "query Q { me { id } }").unwrap();
    std::fs::write(&bad, "type User {\n  name String\n}").unwrap();

    let document = parse_file(&good, DocumentKind::Auto).await.unwrap();
    assert!(matches!(document, ParsedDocument::Executable(_)));

    let err = parse_file(&bad, DocumentKind::Auto).await.unwrap_err();
    assert!(matches!(err, FileError::Parse { .. }));
    let rendered = err.render();
    assert!(rendered.contains("bad.graphql:2:8"), "{rendered}");
    assert!(rendered.contains(" 2 |   name String"), "{rendered}");

    let missing = parse_file(&dir.join("missing.graphql"), DocumentKind::Auto).await;
    assert!(matches!(missing, Err(FileError::Io(_))));
    std::fs::remove_dir_all(&dir).unwrap();
}
